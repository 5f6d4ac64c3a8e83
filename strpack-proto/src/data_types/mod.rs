mod packed_strings;

pub use packed_strings::{Entries, PackedStrings, Slots};
