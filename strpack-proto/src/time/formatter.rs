use alloc::string::String;

use crate::errors::DateFormatError;

/// A trait for rendering the current local time.
pub trait DateFormatter {
    /// Render the current local time through a strftime-style `pattern`.
    ///
    /// The pattern is passed through verbatim; how long the result may grow is decided by
    /// the implementation's [`ScratchBuffer`](super::scratch::ScratchBuffer) policy.
    fn format_now(&self, pattern: &str) -> Result<String, DateFormatError>;
}
