// SPDX-License-Identifier: CC0-1.0

//! RIPEMD-160 hash function.
//!
//! This library implements the RIPEMD-160 hash function together with the
//! RFC 2104 HMAC construction keyed by it. As an ancillary thing, it exposes
//! hexadecimal serialization and deserialization, since these are needed to
//! display hashes anyway.
//!
//! ## Commonly used operations
//!
//! Hashing a single byte slice or a string:
//!
//! ```rust
//! use ripemd::ripemd160;
//!
//! let bytes = [0u8; 5];
//! let hash_of_bytes = ripemd160::Hash::hash(&bytes);
//! let hash_of_string = ripemd160::Hash::hash("some string".as_bytes());
//! ```
//!
//! Computing a keyed MAC:
//!
//! ```rust
//! use ripemd::{ripemd160, HashEngine, HmacEngine};
//!
//! let mut engine = HmacEngine::<ripemd160::HashEngine>::new(b"secret");
//! engine.input(b"some data");
//! let mac = engine.finalize();
//! ```
//!
//! Hashing content from a reader:
//!
//! ```rust
//! use ripemd::ripemd160;
//!
//! #[cfg(feature = "std")]
//! # fn main() -> std::io::Result<()> {
//! let mut reader: &[u8] = b"hello"; // In real code, this could be a `File` or `TcpStream`.
//! let mut engine = ripemd160::Hash::engine();
//! std::io::copy(&mut reader, &mut engine)?;
//! let hash = ripemd160::Hash::from_engine(engine);
//! # Ok(())
//! # }
//!
//! #[cfg(not(feature = "std"))]
//! # fn main() {}
//! ```

// Coding conventions
#![warn(missing_docs)]
// Experimental features we need.
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(bench, feature(test))]
#![cfg_attr(all(not(test), not(feature = "std")), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

#[cfg(feature = "serde")]
/// A generic serialization/deserialization framework.
pub extern crate serde;

#[cfg(all(test, feature = "serde"))]
extern crate serde_test;

#[cfg(bench)]
extern crate test;

/// Re-export the `hex-conservative` crate.
pub extern crate hex;

pub mod cmp;
pub mod hmac;
#[cfg(any(test, feature = "std"))]
mod impls;
pub mod ripemd160;

use core::{borrow, fmt, hash, ops};

#[doc(inline)]
#[rustfmt::skip]
pub use self::{
    hmac::{Hmac, HmacEngine},
    ripemd160::Hash as Ripemd160,
};

/// A hashing engine which bytes can be serialized into.
pub trait HashEngine: Clone + Default {
    /// The `Hash` type returned when this engine is finalized.
    type Hash: Hash;

    /// Length of the hash's internal block size, in bytes.
    const BLOCK_SIZE: usize;

    /// Adds data to the hash engine.
    fn input(&mut self, data: &[u8]);

    /// Returns the number of bytes input into the hash engine so far.
    fn n_bytes_hashed(&self) -> u64;

    /// Finalizes this engine, consuming it and returning the hash.
    fn finalize(self) -> Self::Hash;
}

/// Trait which applies to hashes of all types.
pub trait Hash:
    Copy
    + Clone
    + PartialEq
    + Eq
    + PartialOrd
    + Ord
    + hash::Hash
    + fmt::Debug
    + fmt::Display
    + fmt::LowerHex
    + ops::Index<ops::RangeFull, Output = [u8]>
    + ops::Index<ops::RangeFrom<usize>, Output = [u8]>
    + ops::Index<ops::RangeTo<usize>, Output = [u8]>
    + ops::Index<ops::Range<usize>, Output = [u8]>
    + ops::Index<usize, Output = u8>
    + borrow::Borrow<[u8]>
{
    /// A hashing engine which bytes can be serialized into. It is expected
    /// to be able to produce a hash of this type from such an engine.
    type Engine: HashEngine<Hash = Self>;

    /// The byte array that represents the hash internally.
    type Bytes: hex::FromHex + Copy;

    /// Length of the hash, in bytes.
    const LEN: usize;

    /// Constructs a new engine.
    fn engine() -> Self::Engine { Self::Engine::default() }

    /// Produces a hash from the current state of a given engine.
    fn from_engine(e: Self::Engine) -> Self { e.finalize() }

    /// Hashes some bytes.
    fn hash(data: &[u8]) -> Self {
        let mut engine = Self::engine();
        engine.input(data);
        engine.finalize()
    }

    /// Hashes all the byte slices retrieved from the iterator together.
    fn hash_byte_chunks<B, I>(byte_slices: I) -> Self
    where
        B: AsRef<[u8]>,
        I: IntoIterator<Item = B>,
    {
        let mut engine = Self::engine();
        for slice in byte_slices {
            engine.input(slice.as_ref());
        }
        engine.finalize()
    }

    /// Copies a byte slice into a hash object.
    fn from_slice(sl: &[u8]) -> Result<Self, FromSliceError>;

    /// Returns the underlying byte array.
    fn to_byte_array(self) -> Self::Bytes;

    /// Returns a reference to the underlying byte array.
    fn as_byte_array(&self) -> &Self::Bytes;

    /// Constructs a hash from the underlying byte array.
    fn from_byte_array(bytes: Self::Bytes) -> Self;
}

/// Number of bytes sitting in an engine's staging buffer, i.e. input which
/// has not yet been run through the compression function.
pub(crate) fn incomplete_block_len<E: HashEngine>(e: &E) -> usize {
    let block_size = E::BLOCK_SIZE as u64;
    (e.n_bytes_hashed() % block_size) as usize
}

/// Attempted to create a hash from an invalid length slice.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FromSliceError {
    expected: usize,
    got: usize,
}

impl fmt::Display for FromSliceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "invalid slice length {} (expected {})", self.got, self.expected)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FromSliceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> { None }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_slice_errors_on_wrong_length() {
        let err = ripemd160::Hash::from_slice(&[0u8; 19]).unwrap_err();
        assert_eq!(err, FromSliceError { expected: 20, got: 19 });
        assert_eq!(err.to_string(), "invalid slice length 19 (expected 20)");
    }

    #[test]
    fn hash_byte_chunks_matches_contiguous_input() {
        let chunked = <ripemd160::Hash as Hash>::hash_byte_chunks(["mess", "age ", "digest"]);
        let oneshot = ripemd160::Hash::hash(b"message digest");
        assert_eq!(chunked, oneshot);
    }
}
