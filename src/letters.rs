//! Letter indexing for uppercase ASCII codes
//!
//! Every table axis is the 26-letter uppercase alphabet, so `A` maps to 0
//! and `Z` maps to 25. Anything else has no index.

/// Number of letters on each table axis
pub const ALPHABET_LEN: usize = 26;

/// Zero-based alphabet position of an uppercase ASCII letter
pub fn letter_index(byte: u8) -> Option<usize> {
    if byte.is_ascii_uppercase() {
        Some((byte - b'A') as usize)
    } else {
        None
    }
}

/// Uppercase letter at the given alphabet position
///
/// Panics if `index` is not below [`ALPHABET_LEN`].
pub fn letter(index: usize) -> char {
    assert!(index < ALPHABET_LEN, "letter index out of range: {}", index);
    (b'A' + index as u8) as char
}

/// Decompose a code into one alphabet position per character
///
/// Returns `None` unless the code is exactly `N` uppercase ASCII letters.
pub fn code_indices<const N: usize>(code: &str) -> Option<[usize; N]> {
    let bytes = code.as_bytes();
    if bytes.len() != N {
        return None;
    }

    let mut indices = [0usize; N];
    for (slot, &byte) in indices.iter_mut().zip(bytes) {
        *slot = letter_index(byte)?;
    }
    Some(indices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_index_bounds() {
        assert_eq!(letter_index(b'A'), Some(0));
        assert_eq!(letter_index(b'T'), Some(19));
        assert_eq!(letter_index(b'Z'), Some(25));

        // Neighbours of the uppercase range have no index
        assert_eq!(letter_index(b'@'), None);
        assert_eq!(letter_index(b'['), None);
        assert_eq!(letter_index(b'a'), None);
        assert_eq!(letter_index(b'1'), None);
    }

    #[test]
    fn test_letter_roundtrip() {
        for i in 0..ALPHABET_LEN {
            let ch = letter(i);
            assert_eq!(letter_index(ch as u8), Some(i));
        }
    }

    #[test]
    fn test_code_indices() {
        assert_eq!(code_indices::<2>("TL"), Some([19, 11]));
        assert_eq!(code_indices::<3>("TST"), Some([19, 18, 19]));

        assert_eq!(code_indices::<2>("T"), None);
        assert_eq!(code_indices::<2>("TLX"), None);
        assert_eq!(code_indices::<2>("tl"), None);
        assert_eq!(code_indices::<3>("T1T"), None);
        // Multi-byte characters never count as letters
        assert_eq!(code_indices::<2>("É"), None);
    }
}
