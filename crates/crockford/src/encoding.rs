use crate::{Case, Result};
use std::sync::LazyLock;

/// Number of symbols produced by [`crate::append_time`].
pub const LEN_TIME: usize = 8;

/// Number of symbols produced by [`crate::append_random`].
pub const LEN_RANDOM: usize = 8;

/// Number of symbols produced by [`crate::append_md5`].
pub const LEN_MD5: usize = 26;

static LOWER: LazyLock<Encoding> = LazyLock::new(|| {
    // The tables are checked for 32 distinct ASCII symbols at compile time.
    Encoding::new(Case::Lower).expect("lowercase alphabet is a valid base32 alphabet")
});

static UPPER: LazyLock<Encoding> = LazyLock::new(|| {
    Encoding::new(Case::Upper).expect("uppercase alphabet is a valid base32 alphabet")
});

/// A Crockford alphabet bound to an unpadded base32 transform.
///
/// Bits are packed most-significant first in 5-bit groups (RFC 4648 order); a
/// trailing partial group is padded with zero bits on the right and no `=`
/// padding is emitted. 5 input bytes become exactly 8 symbols, 16 become 26.
///
/// Use the shared [`Encoding::lower`] and [`Encoding::upper`] configurations
/// rather than building new ones: they are created once and never change, so
/// any number of threads may use them without coordination.
///
/// # Example
///
/// ```
/// use crockford::Encoding;
///
/// let enc = Encoding::upper();
/// assert_eq!(enc.encode(&[0, 0x65, 0x53, 0xF1, 0]), "01JN7W80");
/// assert_eq!(enc.decode(b"01JN7W80").unwrap(), [0_u8, 0x65, 0x53, 0xF1, 0]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Encoding {
    case: Case,
    inner: data_encoding::Encoding,
}

impl Encoding {
    /// Builds a fresh configuration for `case`.
    pub fn new(case: Case) -> Result<Self> {
        let mut spec = data_encoding::Specification::new();
        spec.symbols.push_str(case.alphabet());
        spec.padding = None;
        Ok(Self {
            case,
            inner: spec.encoding()?,
        })
    }

    /// The shared lowercase configuration.
    pub fn lower() -> &'static Self {
        &LOWER
    }

    /// The shared uppercase configuration.
    pub fn upper() -> &'static Self {
        &UPPER
    }

    pub const fn case(&self) -> Case {
        self.case
    }

    pub const fn alphabet(&self) -> &'static str {
        self.case.alphabet()
    }

    pub const fn checksum_alphabet(&self) -> &'static str {
        self.case.checksum_alphabet()
    }

    /// Number of symbols produced for `len` input bytes.
    pub fn encode_len(&self, len: usize) -> usize {
        self.inner.encode_len(len)
    }

    /// Encodes `input` into `output`.
    ///
    /// # Panics
    ///
    /// Panics if `output.len()` is not exactly [`Encoding::encode_len`] of
    /// `input.len()`. Callers inside this crate size `output` from the fixed
    /// fragment lengths.
    pub fn encode_into(&self, input: &[u8], output: &mut [u8]) {
        self.inner.encode_mut(input, output);
    }

    pub fn encode(&self, input: &[u8]) -> String {
        self.inner.encode(input)
    }

    /// Strictly decodes `input`.
    ///
    /// Decoding is case-sensitive and does not accept aliases or separators;
    /// run user input through [`crate::normalized`] and decode with
    /// [`Encoding::upper`] first (see [`crate::decode_normalized`]).
    pub fn decode(&self, input: &[u8]) -> Result<Vec<u8>> {
        Ok(self.inner.decode(input)?)
    }
}

impl Case {
    /// The shared [`Encoding`] for this case.
    pub fn encoding(self) -> &'static Encoding {
        match self {
            Self::Lower => Encoding::lower(),
            Self::Upper => Encoding::upper(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn shared_configurations_are_singletons() {
        assert!(core::ptr::eq(Encoding::upper(), Encoding::upper()));
        assert!(core::ptr::eq(Case::Lower.encoding(), Encoding::lower()));
        assert_eq!(Encoding::upper().case(), Case::Upper);
        assert_eq!(Encoding::lower().case(), Case::Lower);
    }

    #[test]
    fn fresh_configuration_matches_shared_one() {
        let enc = Encoding::new(Case::Upper).unwrap();
        assert_eq!(&enc, Encoding::upper());
    }

    #[test]
    fn fixed_lengths_follow_from_input_sizes() {
        let enc = Encoding::upper();
        assert_eq!(enc.encode_len(5), LEN_TIME);
        assert_eq!(enc.encode_len(5), LEN_RANDOM);
        assert_eq!(enc.encode_len(16), LEN_MD5);
    }

    #[test]
    fn every_value_maps_to_its_alphabet_symbol() {
        // 0b00000_00001_00010_... packs values 0..8 into 5 bytes.
        let enc = Encoding::lower();
        let encoded = enc.encode(&[0x00, 0x44, 0x32, 0x14, 0xC7]);
        assert_eq!(encoded, "01234567");
        assert_eq!(Encoding::upper().encode(&[0xFF; 5]), "ZZZZZZZZ");
        assert_eq!(enc.encode(&[0xFF; 5]), "zzzzzzzz");
    }

    #[test]
    fn partial_group_is_padded_on_the_right() {
        // A single 0xFF byte is 8 bits: 11111 111(00).
        assert_eq!(Encoding::upper().encode(&[0xFF]), "ZW");
    }

    #[test]
    fn encode_into_fills_exact_buffer() {
        let mut out = [0_u8; LEN_TIME];
        Encoding::upper().encode_into(&[0, 0x65, 0x53, 0xF1, 0], &mut out);
        assert_eq!(&out, b"01JN7W80");
    }

    #[test]
    fn decode_is_case_sensitive() {
        let upper = Encoding::upper();
        assert!(upper.decode(b"01JN7W80").is_ok());
        assert!(matches!(upper.decode(b"01jn7w80"), Err(Error::Decode(_))));
        assert!(Encoding::lower().decode(b"01jn7w80").is_ok());
    }

    #[test]
    fn decode_rejects_aliases_and_separators() {
        let upper = Encoding::upper();
        assert!(matches!(upper.decode(b"O1JN7W80"), Err(Error::Decode(_))));
        assert!(matches!(upper.decode(b"01JN-7W80"), Err(Error::Decode(_))));
    }

    #[test]
    fn decode_rejects_impossible_lengths() {
        // One symbol carries only 5 bits and can never form a byte.
        assert!(matches!(Encoding::upper().decode(b"0"), Err(Error::Decode(_))));
    }
}
