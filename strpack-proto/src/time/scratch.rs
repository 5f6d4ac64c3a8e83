use alloc::string::String;

use crate::consts::LEGACY_DATE_SCRATCH_LEN;

/// Bound applied to a rendered date string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "config",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ScratchBuffer {
    /// Fixed scratch area of [`LEGACY_DATE_SCRATCH_LEN`] bytes, terminator included.
    ///
    /// Output that does not fit is silently cut to the first 29 bytes, backing off to the
    /// previous character boundary so the result stays valid UTF-8.
    #[default]
    Legacy,
    /// No bound.
    Growable,
}

impl ScratchBuffer {
    /// Largest number of bytes a rendered string may keep, if any.
    pub fn capacity(&self) -> Option<usize> {
        match self {
            ScratchBuffer::Legacy => Some(LEGACY_DATE_SCRATCH_LEN - 1),
            ScratchBuffer::Growable => None,
        }
    }

    pub fn apply(&self, mut rendered: String) -> String {
        let Some(capacity) = self.capacity() else {
            return rendered;
        };
        if rendered.len() > capacity {
            let mut end = capacity;
            while !rendered.is_char_boundary(end) {
                end -= 1;
            }
            log::warn!(
                "Date string of {} bytes truncated to {} bytes",
                rendered.len(),
                end
            );
            rendered.truncate(end);
        }
        rendered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_legacy_truncates() {
        let long = "2024-01-02 03:04:05 +0000 extra text";
        let short = ScratchBuffer::Legacy.apply(long.to_string());
        assert_eq!(short.len(), 29);
        assert_eq!(short, "2024-01-02 03:04:05 +0000 ext");

        let fits = "2024-01-02";
        assert_eq!(ScratchBuffer::Legacy.apply(fits.to_string()), fits);
    }

    #[test]
    fn test_legacy_keeps_char_boundary() {
        // 28 ASCII bytes followed by a two-byte character crossing the bound.
        let s = "a".repeat(28) + "é";
        assert_eq!(ScratchBuffer::Legacy.apply(s), "a".repeat(28));
    }

    #[test]
    fn test_growable_keeps_everything() {
        let long = "x".repeat(100);
        assert_eq!(ScratchBuffer::Growable.apply(long.clone()), long);
        assert_eq!(ScratchBuffer::default(), ScratchBuffer::Legacy);
    }
}
