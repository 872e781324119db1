use crate::{AppendBuffer, Encoding, Error, LEN_RANDOM, Result};
use rand::{RngCore, TryRngCore, rng, rngs::OsRng};
#[cfg(feature = "tracing")]
use tracing::instrument;

/// Random bytes behind one random fragment.
const RANDOM_BYTES: usize = 5;

/// A trait for secure random sources that fill byte slices.
///
/// This abstraction allows you to plug in the operating system generator, a
/// thread-local generator, or a mocked source in tests.
///
/// # Example
/// ```
/// use crockford::{Encoding, RandSource, Result, random_with};
///
/// struct FixedRand;
/// impl RandSource for FixedRand {
///     fn try_fill(&self, dest: &mut [u8]) -> Result<()> {
///         dest.fill(0);
///         Ok(())
///     }
/// }
///
/// assert_eq!(random_with(Encoding::upper(), &FixedRand).unwrap(), "00000000");
/// ```
pub trait RandSource {
    /// Fills `dest` entirely with random bytes.
    ///
    /// Returns [`Error::Entropy`] when the source cannot deliver. `dest` may
    /// then hold arbitrary data and must not be used.
    fn try_fill(&self, dest: &mut [u8]) -> Result<()>;
}

/// A `RandSource` that reads the operating system's CSPRNG on every call.
///
/// This is the default source for [`append_random`] and [`random`]. It is the
/// only source that can report an entropy failure instead of hiding it.
#[derive(Default, Clone, Copy, Debug)]
pub struct OsRandom;

impl RandSource for OsRandom {
    fn try_fill(&self, dest: &mut [u8]) -> Result<()> {
        OsRng.try_fill_bytes(dest).map_err(Error::entropy)
    }
}

/// A `RandSource` that uses the thread-local RNG (`rand::rng()`).
///
/// This RNG is fast, cryptographically secure (ChaCha-based), and reseeded
/// from the operating system periodically. Each OS thread has its own RNG
/// instance, so calls from multiple threads are contention-free. The type is a
/// zero-sized handle and never fails.
#[derive(Default, Clone, Copy, Debug)]
pub struct ThreadRandom;

impl RandSource for ThreadRandom {
    fn try_fill(&self, dest: &mut [u8]) -> Result<()> {
        rng().fill_bytes(dest);
        Ok(())
    }
}

fn draw<R>(source: &R) -> Result<[u8; RANDOM_BYTES]>
where
    R: RandSource + ?Sized,
{
    let mut src = [0_u8; RANDOM_BYTES];
    source.try_fill(&mut src).inspect_err(|_err| {
        #[cfg(feature = "tracing")]
        tracing::error!(error = %_err, "secure random source failed");
    })?;
    Ok(src)
}

/// Appends [`LEN_RANDOM`] symbols encoding 5 bytes drawn from `source`.
///
/// On failure the buffer is left exactly as it was.
#[cfg_attr(feature = "tracing", instrument(level = "trace", skip_all))]
pub fn append_random_with<R, B>(enc: &Encoding, source: &R, dst: &mut B) -> Result<()>
where
    R: RandSource + ?Sized,
    B: AppendBuffer + ?Sized,
{
    let src = draw(source)?;
    enc.encode_into(&src, dst.append_zeroed(LEN_RANDOM));
    Ok(())
}

/// Returns [`LEN_RANDOM`] symbols encoding 5 bytes drawn from `source`.
pub fn random_with<R>(enc: &Encoding, source: &R) -> Result<String>
where
    R: RandSource + ?Sized,
{
    Ok(enc.encode(&draw(source)?))
}

/// Appends [`LEN_RANDOM`] symbols encoding 5 bytes from [`OsRandom`].
///
/// # Errors
///
/// Returns [`Error::Entropy`] if the operating system cannot supply random
/// bytes. There is no fallback to a weaker source.
pub fn append_random<B>(enc: &Encoding, dst: &mut B) -> Result<()>
where
    B: AppendBuffer + ?Sized,
{
    append_random_with(enc, &OsRandom, dst)
}

/// Returns [`LEN_RANDOM`] symbols encoding 5 bytes from [`OsRandom`].
///
/// ```
/// use crockford::{Encoding, LEN_RANDOM, random};
///
/// let salt = random(Encoding::lower()).unwrap();
/// assert_eq!(salt.len(), LEN_RANDOM);
/// ```
pub fn random(enc: &Encoding) -> Result<String> {
    random_with(enc, &OsRandom)
}
