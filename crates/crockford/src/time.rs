use crate::{AppendBuffer, Encoding, Error, LEN_TIME, Result};
use std::time::{SystemTime, UNIX_EPOCH};
#[cfg(feature = "tracing")]
use tracing::instrument;

/// Bytes of the Unix second count that survive encoding.
const TIME_BYTES: usize = 5;

/// Largest second count a time fragment can represent (`2^40 - 1`).
pub const MAX_TIME: u64 = (1 << 40) - 1;

/// A source of wall-clock time in whole Unix seconds.
///
/// This abstraction allows you to plug in the system clock or a fixed clock in
/// tests.
///
/// # Example
///
/// ```
/// use crockford::{Encoding, TimeSource, now};
///
/// struct FixedTime;
/// impl TimeSource for FixedTime {
///     fn unix_seconds(&self) -> i64 {
///         1_700_000_000
///     }
/// }
///
/// assert_eq!(now(Encoding::upper(), &FixedTime), "01JN7W80");
/// ```
pub trait TimeSource {
    /// Returns the current time as seconds since 1970-01-01 UTC.
    fn unix_seconds(&self) -> i64;
}

/// Reads [`SystemTime::now`] on every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn unix_seconds(&self) -> i64 {
        unix_seconds(SystemTime::now())
    }
}

/// Converts `t` to whole Unix seconds, flooring times before the epoch.
#[allow(clippy::cast_possible_wrap)]
pub fn unix_seconds(t: SystemTime) -> i64 {
    match t.duration_since(UNIX_EPOCH) {
        Ok(d) => d.as_secs() as i64,
        Err(e) => {
            let d = e.duration();
            let secs = (d.as_secs() as i64).wrapping_neg();
            if d.subsec_nanos() > 0 {
                secs.wrapping_sub(1)
            } else {
                secs
            }
        }
    }
}

/// Extracts bytes 4..0 of `secs` in big-endian order.
///
/// Bits above bit 39 are discarded, so the result is `secs mod 2^40` as an
/// unsigned 40-bit integer.
pub fn unix_bytes(secs: i64) -> [u8; TIME_BYTES] {
    let be = secs.to_be_bytes();
    let mut out = [0_u8; TIME_BYTES];
    out.copy_from_slice(&be[be.len() - TIME_BYTES..]);
    out
}

/// Appends the [`LEN_TIME`] symbol encoding of a Unix second count.
///
/// Fragments of timestamps in `0..=MAX_TIME` sort lexicographically in the
/// same order as the timestamps. Larger or negative values are truncated to
/// their low 40 bits rather than rejected.
#[cfg_attr(feature = "tracing", instrument(level = "trace", skip(enc, dst)))]
pub fn append_unix<B>(enc: &Encoding, secs: i64, dst: &mut B)
where
    B: AppendBuffer + ?Sized,
{
    let src = unix_bytes(secs);
    enc.encode_into(&src, dst.append_zeroed(LEN_TIME));
}

/// Returns the [`LEN_TIME`] symbol encoding of a Unix second count.
///
/// ```
/// use crockford::{Encoding, unix};
///
/// assert_eq!(unix(Encoding::upper(), 1_700_000_000), "01JN7W80");
/// assert_eq!(unix(Encoding::lower(), 1_700_000_000), "01jn7w80");
/// ```
pub fn unix(enc: &Encoding, secs: i64) -> String {
    enc.encode(&unix_bytes(secs))
}

/// Appends the time fragment of `t`, see [`append_unix`].
pub fn append_time<B>(enc: &Encoding, t: SystemTime, dst: &mut B)
where
    B: AppendBuffer + ?Sized,
{
    append_unix(enc, unix_seconds(t), dst);
}

/// Returns the time fragment of `t`, see [`append_unix`].
pub fn time(enc: &Encoding, t: SystemTime) -> String {
    unix(enc, unix_seconds(t))
}

/// Returns the time fragment for the current time of `clock`.
pub fn now<T>(enc: &Encoding, clock: &T) -> String
where
    T: TimeSource + ?Sized,
{
    unix(enc, clock.unix_seconds())
}

/// Decodes a time fragment back into the 40-bit Unix second count it holds.
///
/// # Errors
///
/// - [`Error::InvalidLength`] if `fragment` is not [`LEN_TIME`] symbols
/// - [`Error::Decode`] if it contains symbols outside `enc`'s alphabet
pub fn parse_time(enc: &Encoding, fragment: &str) -> Result<u64> {
    if fragment.len() != LEN_TIME {
        return Err(Error::InvalidLength {
            expected: LEN_TIME,
            found: fragment.len(),
        });
    }
    let bytes = enc.decode(fragment.as_bytes())?;
    Ok(bytes
        .iter()
        .fold(0_u64, |acc, &b| (acc << 8) | u64::from(b)))
}
