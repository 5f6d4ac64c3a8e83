use alloc::vec::Vec;
use core::slice::ChunksExact;

use crate::errors::PackError;
use crate::utils::trim_slot;

/// An array of fixed-length C strings laid out in one contiguous buffer.
///
/// Every slot is `slot_width + 1` bytes wide, slot `i` holding the `i`-th input string
/// followed by padding, with room for at least one terminator:
/// ```plaintext
/// packed_strings {
///     u8 slot[count][slot_width + 1]
/// }
/// ```
///
/// The value owns its buffer and is never resized after construction.
#[derive(Clone, PartialEq, Eq)]
pub struct PackedStrings {
    slot_width: usize,
    padding: u8,
    buffer: Vec<u8>,
}

impl PackedStrings {
    /// Wrap an already laid out buffer.
    ///
    /// The caller must ensure the buffer is a non-empty, whole number of slots.
    /// Use [`PackedStrings::from_parts`] for a checked alternative.
    pub(crate) fn from_parts_unchecked(slot_width: usize, padding: u8, buffer: Vec<u8>) -> Self {
        debug_assert!(!buffer.is_empty() && buffer.len() % (slot_width + 1) == 0);
        Self {
            slot_width,
            padding,
            buffer,
        }
    }

    /// Rebuild packed strings from a payload read back from storage.
    pub fn from_parts(slot_width: usize, padding: u8, buffer: Vec<u8>) -> Result<Self, PackError> {
        let bytes_per_entry = slot_width.saturating_add(1);
        if buffer.is_empty() || buffer.len() % bytes_per_entry != 0 {
            return Err(PackError::MisalignedBuffer {
                len: buffer.len(),
                bytes_per_entry,
            });
        }
        Ok(Self::from_parts_unchecked(slot_width, padding, buffer))
    }

    /// Length of the longest packed string, terminator excluded.
    pub fn slot_width(&self) -> usize {
        self.slot_width
    }

    /// Stride between two consecutive slots.
    pub fn bytes_per_entry(&self) -> usize {
        self.slot_width + 1
    }

    pub fn padding(&self) -> u8 {
        self.padding
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.buffer.len() / self.bytes_per_entry()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer
    }

    /// Raw bytes of slot `index`, padding and terminator included.
    pub fn slot(&self, index: usize) -> Option<&[u8]> {
        let start = index.checked_mul(self.bytes_per_entry())?;
        let end = start.checked_add(self.bytes_per_entry())?;
        self.buffer.get(start..end)
    }

    pub fn slots(&self) -> Slots<'_> {
        Slots {
            inner: self.buffer.chunks_exact(self.bytes_per_entry()),
        }
    }

    /// The string stored in slot `index`, with terminator and trailing padding removed.
    pub fn entry(&self, index: usize) -> Option<&[u8]> {
        self.slot(index).map(|slot| trim_slot(slot, self.padding))
    }

    pub fn entries(&self) -> Entries<'_> {
        Entries {
            slots: self.slots(),
            padding: self.padding,
        }
    }
}

impl core::fmt::Debug for PackedStrings {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PackedStrings")
            .field("slot_width", &self.slot_width)
            .field("padding", &self.padding)
            .field("count", &self.len())
            .finish()
    }
}

/// Iterator over the raw slots of [`PackedStrings`].
#[derive(Debug, Clone)]
pub struct Slots<'a> {
    inner: ChunksExact<'a, u8>,
}

impl<'a> Iterator for Slots<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Slots<'_> {}

/// Iterator over the decoded strings of [`PackedStrings`].
#[derive(Debug, Clone)]
pub struct Entries<'a> {
    slots: Slots<'a>,
    padding: u8,
}

impl<'a> Iterator for Entries<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let padding = self.padding;
        self.slots.next().map(|slot| trim_slot(slot, padding))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl ExactSizeIterator for Entries<'_> {}
