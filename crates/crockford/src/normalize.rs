use crate::{Encoding, Result, UPPERCASE_CHECKSUM};

/// Marks bytes with no canonical symbol.
const NO_VALUE: u8 = 0;

/// Lookup table from any input byte to its canonical uppercase symbol.
const LOOKUP: [u8; 256] = {
    let mut lut = [NO_VALUE; 256];
    let table = UPPERCASE_CHECKSUM.as_bytes();
    let mut i = 0;
    // Data and check symbols, accepting lowercase letters
    while i < table.len() {
        let c = table[i];
        lut[c as usize] = c;
        if c.is_ascii_uppercase() {
            lut[c.to_ascii_lowercase() as usize] = c;
        }
        i += 1;
    }
    // Crockford aliases
    lut[b'O' as usize] = b'0';
    lut[b'o' as usize] = b'0';
    lut[b'I' as usize] = b'1';
    lut[b'i' as usize] = b'1';
    lut
};

/// Maps one input byte to its canonical uppercase symbol.
///
/// `O`/`o` become `0`, `I`/`i` become `1`, lowercase letters are uppercased
/// and the check-only symbols `* ~ $ = U` are kept. Every other byte,
/// including separators, whitespace and `L`, yields `None`.
pub fn normalize_byte(c: u8) -> Option<u8> {
    match LOOKUP[usize::from(c)] {
        NO_VALUE => None,
        r => Some(r),
    }
}

/// Appends the canonical form of `src` onto `dst`.
///
/// Bytes without a mapping are dropped rather than reported, which lets
/// user-facing codes carry formatting hyphens or stray whitespace. At most
/// `src.len()` bytes are appended.
pub fn append_normalized(dst: &mut Vec<u8>, src: &[u8]) {
    dst.reserve(src.len());
    dst.extend(src.iter().copied().filter_map(normalize_byte));
}

/// Returns the canonical uppercase form of a human-entered code.
///
/// ```
/// use crockford::normalized;
///
/// assert_eq!(normalized("ab-1O"), "AB10");
/// assert_eq!(normalized("01jn-7w80"), "01JN7W80");
/// ```
pub fn normalized(s: &str) -> String {
    s.bytes().filter_map(normalize_byte).map(char::from).collect()
}

/// Normalizes `src` and strictly decodes the result with [`Encoding::upper`].
///
/// # Errors
///
/// Returns [`crate::Error::Decode`] if what remains after normalization is
/// not a valid unpadded base32 string, e.g. it still holds a check-only
/// symbol or has an impossible length.
///
/// ```
/// use crockford::decode_normalized;
///
/// assert_eq!(
///     decode_normalized(b"01jn-7w8o").unwrap(),
///     [0x00_u8, 0x65, 0x53, 0xF1, 0x00]
/// );
/// ```
pub fn decode_normalized(src: &[u8]) -> Result<Vec<u8>> {
    let mut canonical = Vec::with_capacity(src.len());
    append_normalized(&mut canonical, src);
    Encoding::upper().decode(&canonical)
}
