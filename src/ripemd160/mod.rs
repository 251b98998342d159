// SPDX-License-Identifier: CC0-1.0

//! RIPEMD160 implementation.

#[cfg(bench)]
mod benches;
mod crypto;

use core::{borrow, cmp, fmt, ops, str};

use hex::DisplayHex;

use crate::{incomplete_block_len, FromSliceError, HashEngine as _};

const BLOCK_SIZE: usize = 64;

/// Output of the RIPEMD160 hash function.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Hash([u8; 20]);

impl Hash {
    /// Length of the hash, in bytes.
    pub const LEN: usize = 20;

    /// Constructs a new engine.
    pub fn engine() -> HashEngine { HashEngine::new() }

    /// Finalizes a hash engine to produce a hash.
    pub fn from_engine(mut e: HashEngine) -> Self {
        let n_bytes_hashed = e.bytes_hashed;
        let buf_idx = incomplete_block_len(&e);

        e.buffer[buf_idx] = 0x80;
        e.buffer[buf_idx + 1..].fill(0);

        // no room left for the 8 length bytes, spill into an extra block
        if buf_idx >= BLOCK_SIZE - 8 {
            e.process_block();
            e.buffer[..BLOCK_SIZE - 8].fill(0);
        }

        e.buffer[BLOCK_SIZE - 8..].copy_from_slice(&(8 * n_bytes_hashed).to_le_bytes());
        e.process_block();

        Self(e.midstate())
    }

    /// Hashes some bytes.
    pub fn hash(data: &[u8]) -> Self {
        let mut engine = Self::engine();
        engine.input(data);
        Self::from_engine(engine)
    }

    /// Hashes all the byte slices retrieved from the iterator together.
    pub fn hash_byte_chunks<B, I>(byte_slices: I) -> Self
    where
        B: AsRef<[u8]>,
        I: IntoIterator<Item = B>,
    {
        let mut engine = Self::engine();
        for slice in byte_slices {
            engine.input(slice.as_ref());
        }
        Self::from_engine(engine)
    }

    /// Copies a byte slice into a hash object.
    pub fn from_slice(sl: &[u8]) -> Result<Self, FromSliceError> {
        if sl.len() != 20 {
            Err(FromSliceError { expected: 20, got: sl.len() })
        } else {
            let mut ret = [0; 20];
            ret.copy_from_slice(sl);
            Ok(Self(ret))
        }
    }

    /// Constructs a hash from the underlying byte array.
    pub const fn from_byte_array(bytes: [u8; 20]) -> Self { Self(bytes) }

    /// Returns the underlying byte array.
    pub const fn to_byte_array(self) -> [u8; 20] { self.0 }

    /// Returns a reference to the underlying byte array.
    pub const fn as_byte_array(&self) -> &[u8; 20] { &self.0 }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "{:#}", self) }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { fmt::LowerHex::fmt(self, f) }
}

impl fmt::LowerHex for Hash {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0.as_hex(), f)
    }
}

impl fmt::UpperHex for Hash {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0.as_hex(), f)
    }
}

impl str::FromStr for Hash {
    type Err = hex::HexToArrayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use hex::FromHex;

        let bytes = <[u8; 20]>::from_hex(s)?;
        Ok(Self::from_byte_array(bytes))
    }
}

impl<I: core::slice::SliceIndex<[u8]>> ops::Index<I> for Hash {
    type Output = I::Output;

    fn index(&self, index: I) -> &Self::Output { &self.0[index] }
}

impl borrow::Borrow<[u8]> for Hash {
    fn borrow(&self) -> &[u8] { &self[..] }
}

impl AsRef<[u8]> for Hash {
    fn as_ref(&self) -> &[u8] { &self.0 }
}

impl AsRef<[u8; 20]> for Hash {
    fn as_ref(&self) -> &[u8; 20] { &self.0 }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Hash {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        if s.is_human_readable() {
            s.collect_str(self)
        } else {
            s.serialize_bytes(&self[..])
        }
    }
}

/// Visitor for deserializing a hash from a hex string.
#[cfg(feature = "serde")]
struct HexVisitor;

#[cfg(feature = "serde")]
impl<'de> serde::de::Visitor<'de> for HexVisitor {
    type Value = Hash;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an ASCII hex string")
    }

    fn visit_bytes<E: serde::de::Error>(self, v: &[u8]) -> Result<Self::Value, E> {
        if let Ok(hex) = str::from_utf8(v) {
            hex.parse::<Hash>().map_err(E::custom)
        } else {
            Err(E::invalid_value(serde::de::Unexpected::Bytes(v), &self))
        }
    }

    fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Self::Value, E> {
        v.parse::<Hash>().map_err(E::custom)
    }
}

/// Visitor for deserializing a hash from raw bytes.
#[cfg(feature = "serde")]
struct BytesVisitor;

#[cfg(feature = "serde")]
impl<'de> serde::de::Visitor<'de> for BytesVisitor {
    type Value = Hash;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result { f.write_str("a bytestring") }

    fn visit_bytes<E: serde::de::Error>(self, v: &[u8]) -> Result<Self::Value, E> {
        Hash::from_slice(v).map_err(|_| {
            // from_slice only errors on incorrect length
            E::invalid_length(v.len(), &"20")
        })
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Hash {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Hash, D::Error> {
        if d.is_human_readable() {
            d.deserialize_str(HexVisitor)
        } else {
            d.deserialize_bytes(BytesVisitor)
        }
    }
}

impl crate::Hash for Hash {
    type Engine = HashEngine;
    type Bytes = [u8; 20];

    const LEN: usize = 20;

    fn from_slice(sl: &[u8]) -> Result<Self, FromSliceError> { Self::from_slice(sl) }

    fn to_byte_array(self) -> Self::Bytes { self.to_byte_array() }

    fn as_byte_array(&self) -> &Self::Bytes { self.as_byte_array() }

    fn from_byte_array(bytes: Self::Bytes) -> Self { Self::from_byte_array(bytes) }
}

/// Engine to compute RIPEMD160 hash function.
#[derive(Debug, Clone)]
pub struct HashEngine {
    buffer: [u8; BLOCK_SIZE],
    h: [u32; 5],
    bytes_hashed: u64,
}

impl HashEngine {
    /// Constructs a new RIPEMD160 hash engine.
    pub const fn new() -> Self {
        Self {
            h: [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476, 0xc3d2e1f0],
            bytes_hashed: 0,
            buffer: [0; BLOCK_SIZE],
        }
    }

    fn midstate(&self) -> [u8; 20] {
        let mut ret = [0; 20];
        for (val, ret_bytes) in self.h.iter().zip(ret.chunks_exact_mut(4)) {
            ret_bytes.copy_from_slice(&val.to_le_bytes());
        }
        ret
    }
}

impl Default for HashEngine {
    fn default() -> Self { Self::new() }
}

impl crate::HashEngine for HashEngine {
    type Hash = Hash;

    const BLOCK_SIZE: usize = 64;

    fn input(&mut self, mut inp: &[u8]) {
        while !inp.is_empty() {
            let buf_idx = incomplete_block_len(self);
            let rem_len = BLOCK_SIZE - buf_idx;
            let write_len = cmp::min(rem_len, inp.len());

            self.buffer[buf_idx..buf_idx + write_len].copy_from_slice(&inp[..write_len]);
            self.bytes_hashed += write_len as u64;
            if incomplete_block_len(self) == 0 {
                self.process_block();
            }
            inp = &inp[write_len..];
        }
    }

    fn n_bytes_hashed(&self) -> u64 { self.bytes_hashed }

    fn finalize(self) -> Self::Hash { Hash::from_engine(self) }
}
