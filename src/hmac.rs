// SPDX-License-Identifier: CC0-1.0

//! Hash-based Message Authentication Code (HMAC).
//!
//! The construction defined in RFC 2104, generic over the underlying hash
//! engine.

use core::{borrow, fmt, ops, str};

use crate::{FromSliceError, Hash, HashEngine};

/// A hash computed from a RFC 2104 HMAC. Parameterized by the underlying hash function.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Hmac<T: Hash>(T);

impl<T: Hash> Hmac<T> {
    /// Computes the MAC of `msg` under `key` in one go.
    pub fn hash_with_key(key: &[u8], msg: &[u8]) -> Hmac<T> {
        let mut engine: HmacEngine<T::Engine> = HmacEngine::new(key);
        engine.input(msg);
        engine.finalize()
    }
}

impl<T: Hash + str::FromStr> str::FromStr for Hmac<T> {
    type Err = <T as str::FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> { Ok(Hmac(s.parse()?)) }
}

impl<T: Hash> fmt::Debug for Hmac<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { fmt::Debug::fmt(&self.0, f) }
}

impl<T: Hash> fmt::Display for Hmac<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { fmt::Display::fmt(&self.0, f) }
}

impl<T: Hash> fmt::LowerHex for Hmac<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { fmt::LowerHex::fmt(&self.0, f) }
}

impl<T: Hash + fmt::UpperHex> fmt::UpperHex for Hmac<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { fmt::UpperHex::fmt(&self.0, f) }
}

impl<T: Hash> ops::Index<usize> for Hmac<T> {
    type Output = u8;

    fn index(&self, index: usize) -> &u8 { &self.0[index] }
}

impl<T: Hash> ops::Index<ops::Range<usize>> for Hmac<T> {
    type Output = [u8];

    fn index(&self, index: ops::Range<usize>) -> &[u8] { &self.0[index] }
}

impl<T: Hash> ops::Index<ops::RangeFrom<usize>> for Hmac<T> {
    type Output = [u8];

    fn index(&self, index: ops::RangeFrom<usize>) -> &[u8] { &self.0[index] }
}

impl<T: Hash> ops::Index<ops::RangeTo<usize>> for Hmac<T> {
    type Output = [u8];

    fn index(&self, index: ops::RangeTo<usize>) -> &[u8] { &self.0[index] }
}

impl<T: Hash> ops::Index<ops::RangeFull> for Hmac<T> {
    type Output = [u8];

    fn index(&self, index: ops::RangeFull) -> &[u8] { &self.0[index] }
}

impl<T: Hash> borrow::Borrow<[u8]> for Hmac<T> {
    fn borrow(&self) -> &[u8] { &self[..] }
}

impl<T: Hash> AsRef<[u8]> for Hmac<T> {
    fn as_ref(&self) -> &[u8] { &self.0[..] }
}

/// Pair of underlying hash engines, used for the inner and outer hash of HMAC.
#[derive(Debug, Clone)]
pub struct HmacEngine<E: HashEngine> {
    iengine: E,
    oengine: E,
}

impl<E: HashEngine> Default for HmacEngine<E> {
    fn default() -> Self { HmacEngine::new(&[]) }
}

impl<E: HashEngine> HmacEngine<E> {
    /// Constructs a new keyed HMAC from `key`.
    ///
    /// We only support hash engines whose internal block sizes are ≤ 128 bytes.
    ///
    /// # Panics
    ///
    /// Larger block sizes will result in a panic.
    pub fn new(key: &[u8]) -> HmacEngine<E> {
        debug_assert!(E::BLOCK_SIZE <= 128);

        let mut ipad = [0x36u8; 128];
        let mut opad = [0x5cu8; 128];
        let mut ret = HmacEngine { iengine: E::default(), oengine: E::default() };

        if key.len() > E::BLOCK_SIZE {
            let hash = {
                let mut engine = E::default();
                engine.input(key);
                engine.finalize()
            };
            for (b_i, b_h) in ipad.iter_mut().zip(&hash[..]) {
                *b_i ^= *b_h;
            }
            for (b_o, b_h) in opad.iter_mut().zip(&hash[..]) {
                *b_o ^= *b_h;
            }
        } else {
            for (b_i, b_h) in ipad.iter_mut().zip(key) {
                *b_i ^= *b_h;
            }
            for (b_o, b_h) in opad.iter_mut().zip(key) {
                *b_o ^= *b_h;
            }
        };

        ret.iengine.input(&ipad[..E::BLOCK_SIZE]);
        ret.oengine.input(&opad[..E::BLOCK_SIZE]);
        ret
    }
}

impl<E: HashEngine> HashEngine for HmacEngine<E> {
    type Hash = Hmac<E::Hash>;

    const BLOCK_SIZE: usize = E::BLOCK_SIZE;

    #[inline]
    fn input(&mut self, buf: &[u8]) { self.iengine.input(buf) }

    #[inline]
    fn n_bytes_hashed(&self) -> u64 { self.iengine.n_bytes_hashed() }

    #[inline]
    fn finalize(mut self) -> Self::Hash {
        let ihash = self.iengine.finalize();
        self.oengine.input(&ihash[..]);
        let ohash = self.oengine.finalize();
        Hmac(ohash)
    }
}

impl<T: Hash> Hash for Hmac<T> {
    type Engine = HmacEngine<T::Engine>;
    type Bytes = T::Bytes;

    const LEN: usize = T::LEN;

    fn from_slice(sl: &[u8]) -> Result<Hmac<T>, FromSliceError> { T::from_slice(sl).map(Hmac) }

    fn to_byte_array(self) -> Self::Bytes { self.0.to_byte_array() }

    fn as_byte_array(&self) -> &Self::Bytes { self.0.as_byte_array() }

    fn from_byte_array(bytes: T::Bytes) -> Self { Hmac(T::from_byte_array(bytes)) }
}

#[cfg(feature = "serde")]
impl<T: Hash + serde::Serialize> serde::Serialize for Hmac<T> {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.0, s)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: Hash + serde::Deserialize<'de>> serde::Deserialize<'de> for Hmac<T> {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Hmac<T>, D::Error> {
        let inner = serde::Deserialize::deserialize(d)?;
        Ok(Hmac(inner))
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn test() {
        use crate::{ripemd160, HashEngine as _, Hmac, HmacEngine};

        #[derive(Clone)]
        struct Test {
            key: Vec<u8>,
            input: Vec<u8>,
            output: Vec<u8>,
        }

        #[rustfmt::skip]
        let tests = vec![
            // Test vectors from RFC 2286
            Test {
                key: vec![0x0b; 20],
                input: b"Hi There".to_vec(),
                output: vec![
                    0x24, 0xcb, 0x4b, 0xd6, 0x7d, 0x20, 0xfc, 0x1a,
                    0x5d, 0x2e, 0xd7, 0x73, 0x2d, 0xcc, 0x39, 0x37,
                    0x7f, 0x0a, 0x56, 0x68,
                ],
            },
            Test {
                key: b"Jefe".to_vec(),
                input: b"what do ya want for nothing?".to_vec(),
                output: vec![
                    0xdd, 0xa6, 0xc0, 0x21, 0x3a, 0x48, 0x5a, 0x9e,
                    0x24, 0xf4, 0x74, 0x20, 0x64, 0xa7, 0xf0, 0x33,
                    0xb4, 0x3c, 0x40, 0x69,
                ],
            },
            Test {
                key: vec![0xaa; 20],
                input: vec![0xdd; 50],
                output: vec![
                    0xb0, 0xb1, 0x05, 0x36, 0x0d, 0xe7, 0x59, 0x96,
                    0x0a, 0xb4, 0xf3, 0x52, 0x98, 0xe1, 0x16, 0xe2,
                    0x95, 0xd8, 0xe7, 0xc1,
                ],
            },
            Test {
                key: (0x01..=0x19).collect(),
                input: vec![0xcd; 50],
                output: vec![
                    0xd5, 0xca, 0x86, 0x2f, 0x4d, 0x21, 0xd5, 0xe6,
                    0x10, 0xe1, 0x8b, 0x4c, 0xf1, 0xbe, 0xb9, 0x7a,
                    0x43, 0x65, 0xec, 0xf4,
                ],
            },
            Test {
                key: vec![0x0c; 20],
                input: b"Test With Truncation".to_vec(),
                output: vec![
                    0x76, 0x19, 0x69, 0x39, 0x78, 0xf9, 0x1d, 0x90,
                    0x53, 0x9a, 0xe7, 0x86, 0x50, 0x0f, 0xf3, 0xd8,
                    0xe0, 0x51, 0x8e, 0x39,
                ],
            },
            Test {
                key: vec![0xaa; 80],
                input: b"Test Using Larger Than Block-Size Key - Hash Key First".to_vec(),
                output: vec![
                    0x64, 0x66, 0xca, 0x07, 0xac, 0x5e, 0xac, 0x29,
                    0xe1, 0xbd, 0x52, 0x3e, 0x5a, 0xda, 0x76, 0x05,
                    0xb7, 0x91, 0xfd, 0x8b,
                ],
            },
            Test {
                key: vec![0xaa; 80],
                input: b"Test Using Larger Than Block-Size Key and Larger Than One Block-Size Data"
                    .to_vec(),
                output: vec![
                    0x69, 0xea, 0x60, 0x79, 0x8d, 0x71, 0x61, 0x6c,
                    0xce, 0x5f, 0xd0, 0x87, 0x1e, 0x23, 0x75, 0x4c,
                    0xd7, 0x5d, 0x5a, 0x0a,
                ],
            },
        ];

        for test in tests {
            let mut engine = HmacEngine::<ripemd160::HashEngine>::new(&test.key);
            engine.input(&test.input);
            let hash = engine.finalize();
            assert_eq!(&hash[..], &test.output[..]);

            let oneshot = Hmac::<ripemd160::Hash>::hash_with_key(&test.key, &test.input);
            assert_eq!(hash, oneshot);
        }
    }

    #[test]
    fn default_engine_uses_empty_key() {
        use crate::{ripemd160, HashEngine as _, HmacEngine};

        let mut default_engine = HmacEngine::<ripemd160::HashEngine>::default();
        let mut empty_key_engine = HmacEngine::<ripemd160::HashEngine>::new(&[]);
        default_engine.input(b"middle of nowhere");
        empty_key_engine.input(b"middle of nowhere");

        assert_eq!(default_engine.finalize(), empty_key_engine.finalize());
    }

    #[test]
    fn display_and_from_str_roundtrip() {
        use crate::{ripemd160, Hmac};

        let mac = Hmac::<ripemd160::Hash>::hash_with_key(b"Jefe", b"what do ya want for nothing?");
        assert_eq!(mac.to_string(), "dda6c0213a485a9e24f4742064a7f033b43c4069");

        let parsed = "dda6c0213a485a9e24f4742064a7f033b43c4069"
            .parse::<Hmac<ripemd160::Hash>>()
            .expect("parse hex");
        assert_eq!(parsed, mac);
    }

    #[test]
    fn mac_verification_in_fixed_time() {
        use crate::{cmp, ripemd160, Hmac};

        let msg = b"The quick brown fox jumps over the lazy dog";
        let mac = Hmac::<ripemd160::Hash>::hash_with_key(b"key", msg);
        let again = Hmac::<ripemd160::Hash>::hash_with_key(b"key", msg);
        let other = Hmac::<ripemd160::Hash>::hash_with_key(b"not the key", msg);

        assert!(cmp::fixed_time_eq(&mac[..], &again[..]));
        assert!(!cmp::fixed_time_eq(&mac[..], &other[..]));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn hmac_serde() {
        use serde_test::{assert_tokens, Configure, Token};

        use crate::{ripemd160, Hash as _, Hmac};

        #[rustfmt::skip]
        static HASH_BYTES: [u8; 20] = [
            0x24, 0xcb, 0x4b, 0xd6,
            0x7d, 0x20, 0xfc, 0x1a,
            0x5d, 0x2e, 0xd7, 0x73,
            0x2d, 0xcc, 0x39, 0x37,
            0x7f, 0x0a, 0x56, 0x68,
        ];

        let hmac = Hmac::<ripemd160::Hash>::from_slice(&HASH_BYTES).expect("right number of bytes");
        assert_tokens(&hmac.compact(), &[Token::BorrowedBytes(&HASH_BYTES[..])]);
        assert_tokens(&hmac.readable(), &[Token::Str("24cb4bd67d20fc1a5d2ed7732dcc39377f0a5668")]);
    }
}

#[cfg(bench)]
mod benches {
    use test::Bencher;

    use crate::{ripemd160, Hash as _, HashEngine as _, Hmac};

    #[bench]
    pub fn hmac_ripemd160_10(bh: &mut Bencher) {
        let mut engine = Hmac::<ripemd160::Hash>::engine();
        let bytes = [1u8; 10];
        bh.iter(|| {
            engine.input(&bytes);
        });
        bh.bytes = bytes.len() as u64;
    }

    #[bench]
    pub fn hmac_ripemd160_1k(bh: &mut Bencher) {
        let mut engine = Hmac::<ripemd160::Hash>::engine();
        let bytes = [1u8; 1024];
        bh.iter(|| {
            engine.input(&bytes);
        });
        bh.bytes = bytes.len() as u64;
    }

    #[bench]
    pub fn hmac_ripemd160_64k(bh: &mut Bencher) {
        let mut engine = Hmac::<ripemd160::Hash>::engine();
        let bytes = [1u8; 65536];
        bh.iter(|| {
            engine.input(&bytes);
        });
        bh.bytes = bytes.len() as u64;
    }
}
