//! Date formatting traits.

pub mod formatter;
pub mod scratch;
