//! Self-describing base encodings. 
//!
//! Multibase tags encoded data with a single-byte prefix naming the encoding that was used, so that a reader
//! can recover both the original bytes and the encoding without any out-of-band agreement:
//! ```text
//! z7paNL19xttacUY     base58 (bitcoin)
//! bpfsxgidnmfxgsibb   base32, lowercase and unpadded
//! f796573206d616e692021   base16, lowercase
//! ```
//!
//!
//! # Overview
//!
//! - 22 encodings are supported, from identity through base1, base2, base8, base10, base16, base32, 
//! base58, to base64. They are grouped into [families](encoding_families), such as all base32 variants. 
//! See [`encodings`] for the full list. 
//! - Decoding needs no arguments beyond the string: the [prefix](prefix) determines the encoding. 
//! - Strings can be [identified](codec) cheaply by their prefix alone. 
//! - The table of encodings is a [`Registry`] built once and never modified, so all functions can be called
//! from any number of threads. 
//! - Every fallible function has a [panicking](strict) counterpart. 
//!
//! Encoded strings are returned as bytes rather than [`String`], since the `identity` encoding passes any
//! data through unchanged. All other encodings produce ascii. 
//!
//!
//! # Serde
//!
//! Enable the `serde` feature and multibase can be used to serialize/deserialize fields that implement
//! `AsRef<[u8]>` and `From<Vec<u8>>`:
//! ```text
//! #[derive(Serialize, Deserialize)]
//! struct Peer {
//!     #[serde(with = "multibase")]
//!     key: Vec<u8>, 
//!     name: String, 
//! }
//! ```
//!
//! Fields are always serialized as `base58_btc`, but any supported encoding is accepted when deserializing. 
//!
//!
//! # Examples
//!
//! Basic usage:
//! ```
//! let encoded = multibase::encode(b"aftersun", "base32_lower")?;
//! assert_eq!(encoded, b"bmfthizlson2w4");
//!
//! let decoded = multibase::decode(&encoded)?;
//! assert_eq!(decoded, b"aftersun");
//! # Ok::<(), multibase::Error>(())
//! ```
//!
//! Recovering the encoding along with the data:
//! ```
//! let (decoded, encoding) = multibase::codec_decode("MYWZ0ZXJzdW4=")?;
//!
//! assert_eq!(decoded, b"aftersun");
//! assert_eq!(encoding, "base64_pad");
//! assert_eq!(multibase::encoding_family(encoding)?, "base64");
//! # Ok::<(), multibase::Error>(())
//! ```
//!
//! Tagging data that was encoded elsewhere:
//! ```
//! let tagged = multibase::multibase("68656c6c6f", "base16_lower")?;
//! assert_eq!(multibase::decode(&tagged)?, b"hello");
//! # Ok::<(), multibase::Error>(())
//! ```
//!
//!
//! # Leading zeros
//!
//! The base8 and base10 encodings treat the data as a single big number. Leading zero bytes would normally
//! vanish in such a conversion; here each one is written as a leading `0` digit instead, so that decoding
//! restores them exactly. See the [radix] module for the conversion with padding disabled. 
//! ```
//! let encoded = multibase::encode(b"\0\0hello", "base10")?;
//! assert_eq!(encoded, b"900448378203247");
//! assert_eq!(multibase::decode(&encoded)?, b"\0\0hello");
//! # Ok::<(), multibase::Error>(())
//! ```
//!
//!
//! # A note on base1
//!
//! `base1` is a unary encoding: its output has as many symbols as the _value_ of the input, read as a
//! number. Only inputs of a few bytes are practical: output is capped at 1 GiB, which fits every input of
//! up to three bytes. Anything larger fails with [`Error::TooLarge`] rather than attempting the allocation. 

mod encode;
mod decode;
mod error;
mod registry;
mod serde;
pub mod codec;
pub mod radix;
pub mod strict;

pub use encode::*;
pub use decode::*;
pub use error::*;
pub use registry::*;

#[cfg(feature = "serde")]
pub use crate::serde::*;

#[cfg(test)]
mod tests {
    use rand::{rngs::SmallRng, Rng, RngCore, SeedableRng};
    use crate::*;

    fn round_trip(data: &[u8], encoding: &str) {
        let encoded = encode(data, encoding).unwrap();
        let decoded = codec_decode(&encoded);
        assert_eq!(decoded, Ok((data.to_vec(), encoding)), "{data:?}, {encoding}");
        assert_eq!(decode(&encoded).as_deref(), Ok(data), "{data:?}, {encoding}");
    }

    fn stress(n: usize) {
        let sizes = [0, 1, 2, 3, 4, 5, 10, 16, 31, 32, 64, 100, 257];
        let mut rng = SmallRng::seed_from_u64(7502546294857623797);

        for size in sizes {
            for _ in 0..n {
                let mut data = vec![0; size];
                rng.fill_bytes(&mut data);

                // zero out a random prefix to exercise leading zero handling
                let zeros = rng.gen_range(0..=size);
                data[..zeros].fill(0);

                for &encoding in encodings() {
                    // unary output grows exponentially with the input length
                    if encoding == "base1" && size > 2 {
                        continue;
                    }
                    round_trip(&data, encoding);
                }
            }
        }
    }

    #[test]
    fn stress_medium() {
        stress(50);
    }

    #[test]
    fn all_zeros() {
        for size in 0..4 {
            let data = vec![0; size];
            for &encoding in encodings() {
                round_trip(&data, encoding);
            }
        }
    }

    #[test]
    fn canonical_encodings() {
        assert_eq!(
            encodings(), 
            [
                "identity", "base1", "base2", "base8", "base10", "base16_upper", "base16_lower", 
                "base32_hex_upper", "base32_hex_lower", "base32_hex_pad_upper", "base32_hex_pad_lower", 
                "base32_upper", "base32_lower", "base32_pad_upper", "base32_pad_lower", "base32_z", 
                "base58_flickr", "base58_btc", "base64", "base64_pad", "base64_url", "base64_url_pad", 
            ], 
        );
    }

    #[test]
    fn concurrent_use() {
        let handles: Vec<_> = (0..4u8)
            .map(|seed| std::thread::spawn(move || {
                let data = [seed, 0];
                for &encoding in encodings() {
                    round_trip(&data, encoding);
                }
            }))
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
    }
}
