use crate::consts::TERMINATOR;

/// Length of the longest byte string, or `None` when there are none.
#[inline(always)]
pub fn max_len<'a>(slices: impl IntoIterator<Item = &'a [u8]>) -> Option<usize> {
    slices.into_iter().map(<[u8]>::len).max()
}

/// Recover the stored string from a single slot.
///
/// The slot is cut at its first terminator, then trailing `padding` bytes are stripped.
pub fn trim_slot(slot: &[u8], padding: u8) -> &[u8] {
    let end = slot
        .iter()
        .position(|&b| b == TERMINATOR)
        .unwrap_or(slot.len());
    let mut slot = &slot[..end];
    while let [rest @ .., last] = slot {
        if *last != padding {
            break;
        }
        slot = rest;
    }
    slot
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_len() {
        let strings: [&[u8]; 3] = [b"a", b"", b"abc"];
        assert_eq!(max_len(strings), Some(3));
        assert_eq!(max_len(core::iter::empty()), None);
    }

    #[test]
    fn test_trim_slot() {
        assert_eq!(trim_slot(b"ab\0 ", b' '), b"ab");
        assert_eq!(trim_slot(b"ab##\0", b'#'), b"ab");
        assert_eq!(trim_slot(b"ab\0\0", 0), b"ab");
        assert_eq!(trim_slot(b"abc", 0), b"abc");
        assert_eq!(trim_slot(b"\0", b'x'), b"");
    }
}
