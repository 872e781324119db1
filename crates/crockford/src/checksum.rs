use crate::{CHECKSUM_LEN, Case};

/// Reduces `body`, read as a big-endian base-256 integer, modulo `m`.
///
/// Works byte by byte (`rem = (rem * 256 + byte) % m`), so inputs of any
/// length need no big-integer arithmetic.
///
/// # Panics
///
/// Panics if `m` is zero.
#[allow(clippy::cast_possible_truncation)]
pub fn modulus(body: &[u8], m: u32) -> u32 {
    let m = u64::from(m);
    body.iter()
        .fold(0_u64, |rem, &b| ((rem << 8) | u64::from(b)) % m) as u32
}

/// [`modulus`] with the checksum modulus 37. The result is always `0..=36`.
#[allow(clippy::cast_possible_truncation)]
pub fn mod37(body: &[u8]) -> u8 {
    modulus(body, CHECKSUM_LEN as u32) as u8
}

/// Returns the check symbol for an unencoded identifier body.
///
/// The symbol is drawn from the 37-symbol checksum alphabet of `case`. It
/// catches most single-symbol typos and transpositions; it is not an integrity
/// check against deliberate tampering.
///
/// ```
/// use crockford::{Case, checksum};
///
/// assert_eq!(checksum(b"hello", Case::Upper), b'J');
/// assert_eq!(checksum(b"$", Case::Lower), b'u');
/// ```
pub fn checksum(body: &[u8], case: Case) -> u8 {
    case.checksum_alphabet().as_bytes()[usize::from(mod37(body))]
}

/// Recomputes the check symbol of `body` and compares it with `symbol`.
///
/// The comparison ignores case so either variant of the tables verifies.
pub fn verify_checksum(body: &[u8], symbol: u8) -> bool {
    checksum(body, Case::Upper).eq_ignore_ascii_case(&symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_body_maps_to_zero() {
        assert_eq!(mod37(b""), 0);
        assert_eq!(checksum(b"", Case::Upper), b'0');
    }

    #[test]
    fn known_check_symbols() {
        assert_eq!(checksum(b"hello", Case::Upper), b'J');
        assert_eq!(checksum(b"hello world", Case::Upper), b'S');
        assert_eq!(checksum(&[0xFF; 10], Case::Upper), b'~');
        assert_eq!(checksum(&[0x00, 0x65, 0x53, 0xF1, 0x00], Case::Upper), b'=');
    }

    #[test]
    fn check_only_symbols_are_reachable() {
        assert_eq!(mod37(&[36]), 36);
        assert_eq!(checksum(&[36], Case::Upper), b'U');
        assert_eq!(checksum(&[36], Case::Lower), b'u');
        assert_eq!(checksum(&[32], Case::Upper), b'*');
        assert_eq!(checksum(&[37], Case::Upper), b'0');
    }

    #[test]
    fn matches_big_integer_reduction() {
        let body = 1_700_000_000_u64.to_be_bytes();
        assert_eq!(u64::from(mod37(&body)), 1_700_000_000 % 37);

        let body = u128::MAX.to_be_bytes();
        assert_eq!(u128::from(mod37(&body)), u128::MAX % 37);
    }

    #[test]
    fn generic_modulus_agrees_with_native_remainder() {
        let value = 0x0123_4567_89AB_CDEF_u64;
        for m in [1_u32, 2, 31, 37, 97, 65_521, u32::MAX] {
            assert_eq!(u64::from(modulus(&value.to_be_bytes(), m)), value % u64::from(m));
        }
    }

    #[test]
    fn deterministic_for_repeated_calls() {
        let body = b"an identifier body";
        assert_eq!(checksum(body, Case::Upper), checksum(body, Case::Upper));
    }

    #[test]
    fn most_single_byte_mutations_change_the_symbol() {
        let body = *b"0123456789";
        let original = checksum(&body, Case::Upper);
        let mut changed = 0;
        let mut total = 0;
        for i in 0..body.len() {
            for delta in 1..=255_u8 {
                let mut mutated = body;
                mutated[i] = mutated[i].wrapping_add(delta);
                total += 1;
                if checksum(&mutated, Case::Upper) != original {
                    changed += 1;
                }
            }
        }
        // Only deltas that are multiples of 37 (in value) go unnoticed.
        assert!(changed * 10 > total * 9, "{changed}/{total}");
    }

    #[test]
    fn verify_accepts_either_case() {
        assert!(verify_checksum(b"hello", b'J'));
        assert!(verify_checksum(b"hello", b'j'));
        assert!(verify_checksum(&[36], b'u'));
        assert!(!verify_checksum(b"hello", b'K'));
    }
}
