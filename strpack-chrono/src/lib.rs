use core::fmt::Write;

use chrono::{DateTime, Local};
use strpack_proto::errors::DateFormatError;
use strpack_proto::time::{formatter::DateFormatter, scratch::ScratchBuffer};

/// [`DateFormatter`] rendering with chrono's strftime implementation.
///
/// By default the wall clock is read on every call. A formatter created with
/// [`ChronoFormatter::pinned`] always renders the same instant.
#[derive(Debug, Clone, Default)]
pub struct ChronoFormatter {
    scratch: ScratchBuffer,
    pinned: Option<DateTime<Local>>,
}

impl ChronoFormatter {
    pub fn new(scratch: ScratchBuffer) -> Self {
        Self {
            scratch,
            pinned: None,
        }
    }

    pub fn pinned(scratch: ScratchBuffer, at: DateTime<Local>) -> Self {
        Self {
            scratch,
            pinned: Some(at),
        }
    }
}

impl DateFormatter for ChronoFormatter {
    fn format_now(&self, pattern: &str) -> Result<String, DateFormatError> {
        let now = self.pinned.unwrap_or_else(Local::now);

        // chrono reports unknown specifiers as a fmt::Error while rendering.
        let mut rendered = String::new();
        write!(rendered, "{}", now.format(pattern)).map_err(|_| {
            log::error!("Invalid date format pattern: {:?}", pattern);
            DateFormatError::InvalidPattern
        })?;

        Ok(self.scratch.apply(rendered))
    }
}
