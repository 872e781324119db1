//! Crockford base32 alphabets.
//!
//! The order of every table below is part of the wire format: reordering a
//! symbol changes the meaning of every previously encoded value.

/// Lowercase Crockford alphabet (no `i`, `l`, `o`, `u`).
pub const LOWERCASE_ALPHABET: &str = "0123456789abcdefghjkmnpqrstvwxyz";

/// Uppercase Crockford alphabet (no `I`, `L`, `O`, `U`).
pub const UPPERCASE_ALPHABET: &str = "0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// [`LOWERCASE_ALPHABET`] followed by the five check-only symbols.
pub const LOWERCASE_CHECKSUM: &str = "0123456789abcdefghjkmnpqrstvwxyz*~$=u";

/// [`UPPERCASE_ALPHABET`] followed by the five check-only symbols.
pub const UPPERCASE_CHECKSUM: &str = "0123456789ABCDEFGHJKMNPQRSTVWXYZ*~$=U";

/// Number of data symbols.
pub const ALPHABET_LEN: usize = 32;

/// Number of check symbols (data symbols plus five extras).
pub const CHECKSUM_LEN: usize = 37;

/// Selects the lowercase or uppercase variant of every table.
///
/// Both variants carry the same values; only the emitted letters differ.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Case {
    Lower,
    #[default]
    Upper,
}

impl Case {
    /// Maps the `uppercase` flag used by checksum callers to a [`Case`].
    pub const fn from_uppercase(uppercase: bool) -> Self {
        if uppercase { Self::Upper } else { Self::Lower }
    }

    pub const fn alphabet(self) -> &'static str {
        match self {
            Self::Lower => LOWERCASE_ALPHABET,
            Self::Upper => UPPERCASE_ALPHABET,
        }
    }

    pub const fn checksum_alphabet(self) -> &'static str {
        match self {
            Self::Lower => LOWERCASE_CHECKSUM,
            Self::Upper => UPPERCASE_CHECKSUM,
        }
    }
}

const fn all_distinct(table: &[u8]) -> bool {
    let mut i = 0;
    while i < table.len() {
        let mut j = i + 1;
        while j < table.len() {
            if table[i] == table[j] {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

const fn extends(checksum: &[u8], base: &[u8]) -> bool {
    if checksum.len() != CHECKSUM_LEN || base.len() != ALPHABET_LEN {
        return false;
    }
    let mut i = 0;
    while i < ALPHABET_LEN {
        if checksum[i] != base[i] {
            return false;
        }
        i += 1;
    }
    true
}

const _: () = assert!(all_distinct(LOWERCASE_CHECKSUM.as_bytes()));
const _: () = assert!(all_distinct(UPPERCASE_CHECKSUM.as_bytes()));
const _: () = assert!(extends(
    LOWERCASE_CHECKSUM.as_bytes(),
    LOWERCASE_ALPHABET.as_bytes()
));
const _: () = assert!(extends(
    UPPERCASE_CHECKSUM.as_bytes(),
    UPPERCASE_ALPHABET.as_bytes()
));
