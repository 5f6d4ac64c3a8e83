use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PackError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),
    #[error("{count} slots of {slot_width} bytes plus terminator exceed the addressable size")]
    SizeOverflow { count: usize, slot_width: usize },
    #[error("Cannot allocate {bytes} bytes for packed strings")]
    AllocationFailure { bytes: usize },
    #[error("Buffer of {len} bytes is not a whole number of {bytes_per_entry}-byte slots")]
    MisalignedBuffer { len: usize, bytes_per_entry: usize },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateFormatError {
    #[error("Invalid date format pattern")]
    InvalidPattern,
}

