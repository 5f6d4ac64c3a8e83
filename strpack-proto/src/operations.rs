use alloc::vec::Vec;

use crate::consts::TERMINATOR;
use crate::data_types::PackedStrings;
use crate::errors::PackError;
use crate::utils::max_len;

/// Pack an ordered list of strings into one fixed-width, padded buffer.
///
/// Each string lands at offset `i * (slot_width + 1)`, where `slot_width` is the length of
/// the longest string. Bytes after a string are filled with `padding`. When `padding` is
/// not the terminator, the last byte of every slot is forced to [`TERMINATOR`], so a
/// reader scanning a slot as a C string never crosses into the next one.
///
/// Fails with [`PackError::InvalidArgument`] when `strings` is empty,
/// [`PackError::SizeOverflow`] when the buffer size does not fit in `usize`, and
/// [`PackError::AllocationFailure`] when the buffer cannot be reserved.
pub fn pack_strings<S: AsRef<[u8]>>(
    strings: &[S],
    padding: u8,
) -> Result<PackedStrings, PackError> {
    let slot_width = max_len(strings.iter().map(AsRef::<[u8]>::as_ref))
        .ok_or(PackError::InvalidArgument("cannot pack an empty list of strings"))?;

    let total_bytes = packed_size(strings.len(), slot_width)?;
    let mut buffer = padded_buffer(total_bytes, padding)?;

    // One extra byte per slot so the longest string still gets a terminator.
    let bytes_per_entry = slot_width + 1;

    for (slot, string) in buffer.chunks_exact_mut(bytes_per_entry).zip(strings) {
        let string: &[u8] = string.as_ref();
        slot[..string.len()].copy_from_slice(string);
        if padding != TERMINATOR {
            slot[slot_width] = TERMINATOR;
        }
    }

    log::debug!(
        "Packed {} strings into {} bytes (slot width {})",
        strings.len(),
        total_bytes,
        slot_width
    );

    Ok(PackedStrings::from_parts_unchecked(slot_width, padding, buffer))
}

/// Byte size of `count` slots holding strings of at most `slot_width` bytes.
fn packed_size(count: usize, slot_width: usize) -> Result<usize, PackError> {
    slot_width
        .checked_add(1)
        .and_then(|bytes_per_entry| count.checked_mul(bytes_per_entry))
        .ok_or(PackError::SizeOverflow { count, slot_width })
}

/// Reserve exactly `total_bytes` bytes, all set to `padding`.
fn padded_buffer(total_bytes: usize, padding: u8) -> Result<Vec<u8>, PackError> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(total_bytes)
        .map_err(|_| PackError::AllocationFailure { bytes: total_bytes })?;
    buffer.resize(total_bytes, padding);
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;
    use alloc::vec;
    use proptest::prelude::*;

    #[test]
    fn test_pack_mixed_lengths() {
        let packed = pack_strings(&["a", "bb", "ccc"], b' ').unwrap();

        assert_eq!(packed.slot_width(), 3);
        assert_eq!(packed.len(), 3);
        assert_eq!(packed.as_bytes().len(), 12);
        assert_eq!(packed.as_bytes(), b"a  \0bb \0ccc\0");
        assert_eq!(
            packed.entries().collect::<Vec<_>>(),
            vec![&b"a"[..], &b"bb"[..], &b"ccc"[..]]
        );
    }

    #[test]
    fn test_pack_single_empty_string() {
        let packed = pack_strings(&[""], 0).unwrap();

        assert_eq!(packed.slot_width(), 0);
        assert_eq!(packed.into_bytes(), vec![0]);
    }

    #[test]
    fn test_pack_equal_longest() {
        let packed = pack_strings(&["xx", "yy"], b'#').unwrap();

        assert_eq!(packed.slot_width(), 2);
        assert_eq!(packed.slot(0), Some(&b"xx\0"[..]));
        assert_eq!(packed.slot(1), Some(&b"yy\0"[..]));
    }

    #[test]
    fn test_pack_empty_input() {
        let strings: [&str; 0] = [];
        assert_eq!(
            pack_strings(&strings, b' '),
            Err(PackError::InvalidArgument(
                "cannot pack an empty list of strings"
            ))
        );
    }

    #[test]
    fn test_size_overflow() {
        assert_eq!(packed_size(3, 4), Ok(15));
        assert_eq!(
            packed_size(1, usize::MAX),
            Err(PackError::SizeOverflow {
                count: 1,
                slot_width: usize::MAX
            })
        );
        assert_eq!(
            packed_size(usize::MAX / 2, 2),
            Err(PackError::SizeOverflow {
                count: usize::MAX / 2,
                slot_width: 2
            })
        );
    }

    #[test]
    fn test_allocation_failure() {
        // Above isize::MAX the reservation is refused before touching the allocator.
        let bytes = isize::MAX as usize + 1;
        assert_eq!(
            padded_buffer(bytes, b' '),
            Err(PackError::AllocationFailure { bytes })
        );
        assert_eq!(padded_buffer(3, b'#'), Ok(b"###".to_vec()));
    }

    #[test]
    fn test_pack_zero_padding() {
        let packed = pack_strings(&[&b"ab"[..], b"", b"abcd"], 0).unwrap();

        assert_eq!(packed.as_bytes(), b"ab\0\0\0\0\0\0\0\0abcd\0");
        assert_eq!(packed.entry(1), Some(&b""[..]));
    }

    #[test]
    fn test_pack_keeps_order_and_duplicates() {
        let strings = vec![String::from("b"), String::from("a"), String::from("b")];
        let packed = pack_strings(&strings, b'.').unwrap();

        assert_eq!(packed.as_bytes(), b"b\0a\0b\0");
        assert_eq!(strings.len(), 3);
    }

    fn strings_strategy() -> impl Strategy<Value = Vec<Vec<u8>>> {
        prop::collection::vec(prop::collection::vec(any::<u8>(), 0..24), 1..16)
    }

    proptest! {
        #[test]
        fn prop_width_and_size(strings in strings_strategy(), padding in any::<u8>()) {
            let packed = pack_strings(&strings, padding).unwrap();
            let longest = strings.iter().map(Vec::len).max().unwrap();

            prop_assert_eq!(packed.slot_width(), longest);
            prop_assert_eq!(packed.as_bytes().len(), strings.len() * (longest + 1));
            prop_assert_eq!(packed.len(), strings.len());
        }

        #[test]
        fn prop_slot_layout(strings in strings_strategy(), padding in any::<u8>()) {
            let packed = pack_strings(&strings, padding).unwrap();
            let width = packed.slot_width();

            for (slot, string) in packed.slots().zip(&strings) {
                let (content, rest) = slot.split_at(string.len());
                prop_assert_eq!(content, &string[..]);
                if padding == TERMINATOR {
                    prop_assert!(rest.iter().all(|&b| b == TERMINATOR));
                } else {
                    prop_assert_eq!(slot[width], TERMINATOR);
                    prop_assert!(rest[..rest.len() - 1].iter().all(|&b| b == padding));
                }
            }
        }

        #[test]
        fn prop_entries_match_input(
            strings in prop::collection::vec("[a-z]{0,12}", 1..16),
            padding in prop::sample::select(vec![0u8, b' ', b'#', b'_']),
        ) {
            let packed = pack_strings(&strings, padding).unwrap();

            for (entry, string) in packed.entries().zip(&strings) {
                prop_assert_eq!(entry, string.as_bytes());
            }
        }
    }
}
