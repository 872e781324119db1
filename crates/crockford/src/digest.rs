use crate::{AppendBuffer, Encoding, LEN_MD5};
use ::md5::{Digest, Md5};
#[cfg(feature = "tracing")]
use tracing::instrument;

/// Size of an MD5 digest in bytes.
const MD5_SIZE: usize = 16;

fn md5_digest(src: &[u8]) -> [u8; MD5_SIZE] {
    let mut hasher = Md5::new();
    hasher.update(src);
    let mut out = [0_u8; MD5_SIZE];
    out.copy_from_slice(&hasher.finalize());
    out
}

/// Appends the [`LEN_MD5`] symbol encoding of the MD5 digest of `src`.
///
/// MD5 is used for its short, fixed digest and speed. The fragment identifies
/// content; it must not be relied on where an adversary picks the input.
#[cfg_attr(feature = "tracing", instrument(level = "trace", skip_all, fields(len = src.len())))]
pub fn append_md5<B>(enc: &Encoding, src: &[u8], dst: &mut B)
where
    B: AppendBuffer + ?Sized,
{
    let digest = md5_digest(src);
    enc.encode_into(&digest, dst.append_zeroed(LEN_MD5));
}

/// Returns the [`LEN_MD5`] symbol encoding of the MD5 digest of `src`.
///
/// ```
/// use crockford::{Encoding, md5};
///
/// assert_eq!(md5(Encoding::upper(), b""), "TGERSPCF02S09TC016CESY22FR");
/// ```
pub fn md5(enc: &Encoding, src: &[u8]) -> String {
    enc.encode(&md5_digest(src))
}
