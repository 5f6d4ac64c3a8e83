//! JSON job description types.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_DATE_FORMAT, TERMINATOR};
use crate::time::scratch::ScratchBuffer;

/// Padding byte, written as a one-byte string (`" "`) or an integer (`32`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Padding(pub u8);

impl Default for Padding {
    fn default() -> Self {
        Padding(TERMINATOR)
    }
}

impl Serialize for Padding {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.is_ascii() {
            serializer.serialize_str(&char::from(self.0).to_string())
        } else {
            serializer.serialize_u8(self.0)
        }
    }
}

impl<'de> Deserialize<'de> for Padding {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Byte(u8),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Byte(b) => Ok(Padding(b)),
            Raw::Text(s) => match s.as_bytes() {
                [b] => Ok(Padding(*b)),
                _ => Err(serde::de::Error::custom(
                    "Padding must be a single byte string or an integer",
                )),
            },
        }
    }
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackJob {
    pub strings: Vec<String>,
    #[serde(default)]
    pub padding: Padding,
    pub output: PathBuf,
    #[serde(default)]
    pub manifest: Option<PathBuf>,
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default)]
    pub date_buffer: ScratchBuffer,
    #[serde(default)]
    pub log_level: Option<String>,
}
