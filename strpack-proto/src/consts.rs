//! Constants shared by the packer and the date formatter.

/// Byte marking the logical end of a string inside its slot.
pub const TERMINATOR: u8 = 0;
/// Size of the scratch area the legacy date formatter renders into, terminator included.
pub const LEGACY_DATE_SCRATCH_LEN: usize = 30;
/// Pattern used when a job does not name one.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";
