use base64::prelude::*;
use serde::Serialize;
use strpack_proto::config::Padding;
use strpack_proto::data_types::PackedStrings;

/// Sidecar description of a written payload.
///
/// Carries what a reader needs to interpret the raw file as `count` fixed-length strings
/// of `bytes_per_entry` bytes each.
#[derive(Debug, Serialize)]
pub struct Manifest {
    pub count: usize,
    pub slot_width: usize,
    pub bytes_per_entry: usize,
    pub padding: Padding,
    pub created: String,
    pub payload: String,
}

impl Manifest {
    pub fn new(packed: &PackedStrings, created: String) -> Self {
        Self {
            count: packed.len(),
            slot_width: packed.slot_width(),
            bytes_per_entry: packed.bytes_per_entry(),
            padding: Padding(packed.padding()),
            created,
            payload: BASE64_STANDARD.encode(packed.as_bytes()),
        }
    }
}
