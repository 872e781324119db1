/// A result type defaulting to this crate's [`Error`].
///
/// Encoding, checksums and normalization are total functions and return plain
/// values. Only operations that touch the random source, decode external input
/// or build a new [`crate::Encoding`] are fallible.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All errors that `crockford` can produce.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The secure random source could not supply bytes.
    ///
    /// This is not retried: a degraded source must never quietly produce
    /// weaker identifiers. Hosts decide whether to abort or degrade.
    #[error("entropy source failure: {0}")]
    Entropy(#[source] Box<dyn core::error::Error + Send + Sync>),

    /// The input contains symbols outside the alphabet, has an impossible
    /// length for an unpadded base32 string, or carries non-zero trailing bits.
    #[error("decode error: {0}")]
    Decode(#[from] data_encoding::DecodeError),

    /// A fixed-width fragment had the wrong number of symbols.
    #[error("invalid length: expected {expected}, found {found}")]
    InvalidLength { expected: usize, found: usize },

    /// The alphabet could not be turned into a base32 transform.
    #[error("invalid encoding specification: {0}")]
    Specification(#[from] data_encoding::SpecificationError),
}

impl Error {
    /// Wraps any error raised by a [`crate::RandSource`].
    pub fn entropy<E>(err: E) -> Self
    where
        E: Into<Box<dyn core::error::Error + Send + Sync>>,
    {
        Self::Entropy(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entropy_error_keeps_its_source() {
        let err = Error::entropy(std::io::Error::other("no entropy"));
        assert!(matches!(err, Error::Entropy(_)));
        assert_eq!(err.to_string(), "entropy source failure: no entropy");
        assert!(core::error::Error::source(&err).is_some());
    }

    #[test]
    fn invalid_length_reports_both_sides() {
        let err = Error::InvalidLength {
            expected: 8,
            found: 7,
        };
        assert_eq!(err.to_string(), "invalid length: expected 8, found 7");
    }
}
