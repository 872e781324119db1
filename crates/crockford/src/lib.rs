//! Crockford base32 fragments for short, sortable, typo-tolerant identifiers.
//!
//! The [Crockford alphabet](https://www.crockford.com/base32.html) drops the
//! letters `I`, `L`, `O` and `U` so that codes survive being read aloud and
//! typed by hand. This crate layers identifier building blocks on top of a
//! standard unpadded base32 transform:
//!
//! - [`append_time`] / [`time`]: 40-bit Unix seconds as 8 symbols that sort
//!   lexicographically in time order
//! - [`append_random`] / [`random`]: 5 secure random bytes as 8 symbols
//! - [`append_md5`] / [`md5`]: an MD5 content fingerprint as 26 symbols
//! - [`checksum`]: one modulo-37 check symbol over an unencoded body
//! - [`normalized`]: repairs human-entered codes before decoding
//!
//! Every `append_*` encoder writes into a caller-owned [`AppendBuffer`],
//! reusing spare capacity when there is enough.
//!
//! # Example
//!
//! ```
//! use crockford::{Case, Encoding, append_random, append_unix, checksum, normalized};
//!
//! let enc = Encoding::upper();
//! let mut id = Vec::with_capacity(17);
//! append_unix(enc, 1_700_000_000, &mut id);
//! append_random(enc, &mut id).expect("entropy available");
//!
//! let body = enc.decode(&id).unwrap();
//! id.push(checksum(&body, Case::Upper));
//! assert_eq!(id.len(), 17);
//! assert!(id.starts_with(b"01JN7W80"));
//!
//! // A lowercase transcription normalizes back to the same code.
//! let typed = String::from_utf8(id.to_ascii_lowercase()).unwrap();
//! assert_eq!(normalized(&typed).into_bytes(), id);
//! ```
//!
//! # Features
//!
//! - `tracing`: emits `trace` spans around the encoders and an `error` event
//!   when the secure random source fails
//! - `bytes`: implements [`AppendBuffer`] for `bytes::BytesMut`

mod alphabet;
mod buffer;
mod checksum;
mod digest;
mod encoding;
mod error;
mod normalize;
mod random;
mod time;

pub use crate::alphabet::*;
pub use crate::buffer::*;
pub use crate::checksum::*;
pub use crate::digest::*;
pub use crate::encoding::*;
pub use crate::error::*;
pub use crate::normalize::*;
pub use crate::random::*;
pub use crate::time::*;
