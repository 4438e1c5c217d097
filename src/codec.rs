//! The codecs behind each registered encoding, along with the options they are bound with. 
//!
//! Base16 and the base32 variants are provided by [data_encoding], base58 by [bs58], and base64 by
//! [base64]. Identity, base1, base2, and the [radix](crate::radix) conversions are implemented here. 

use std::sync::LazyLock;
use base64::Engine;
use data_encoding::{Encoding, Specification};
use crate::{radix, PayloadError};

/// Letter case of an alphabet. 
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Case {
    Upper, 
    Lower, 
}

/// The base32 alphabets. 
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Base32Alphabet {
    /// RFC 4648 base32, `A`-`Z` followed by `2`-`7`. 
    Rfc4648, 
    /// RFC 4648 "extended hex", `0`-`9` followed by `A`-`V`. 
    Hex, 
    /// [z-base-32](https://philzimmermann.com/docs/human-oriented-base-32-encoding.txt). Always lowercase
    /// and unpadded. 
    Z, 
}

/// The base58 alphabets. 
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Base58Alphabet {
    Bitcoin, 
    Flickr, 
}

/// The base64 alphabets. 
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Base64Alphabet {
    /// `+` and `/` as the last two symbols. 
    Standard, 
    /// `-` and `_` as the last two symbols. 
    UrlSafe, 
}

/// A codec bound with its options. 
///
/// Every codec encodes arbitrary bytes, and rejects malformed input when decoding. 
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Codec {
    /// Leaves the data as is. 
    Identity, 
    /// Unary encoding: the data is read as a bijective base-256 numeral and written as that many `A`s. The
    /// output length grows with the _value_ of the data, so anything beyond a few bytes is impractical. 
    Base1, 
    /// Eight `0`/`1` digits per byte, most significant bit first. 
    Base2, 
    /// Conversion to a digit string, see [`radix`]. 
    Radix(radix::Settings), 
    Base16 {
        case: Case, 
    }, 
    /// Case applies to [`Base32Alphabet::Rfc4648`] and [`Base32Alphabet::Hex`] only, as does padding. 
    Base32 {
        alphabet: Base32Alphabet, 
        case: Case, 
        padding: bool, 
    }, 
    Base58 {
        alphabet: Base58Alphabet, 
    }, 
    Base64 {
        alphabet: Base64Alphabet, 
        padding: bool, 
    }, 
}

impl Codec {
    /// Encodes data. Fails only for [`Codec::Base1`] if the output wouldn't fit in memory. 
    pub fn encode(&self, data: &[u8]) -> Result<Vec<u8>, PayloadError> {
        let encoded = match *self {
            Codec::Identity => data.to_vec(), 
            Codec::Base1 => base1::encode(data)?, 
            Codec::Base2 => base2::encode(data), 
            Codec::Radix(settings) => radix::encode_mono(data, settings), 
            Codec::Base16 { case } => hex_encoding(case).encode(data).into_bytes(), 
            Codec::Base32 { alphabet, case, padding } => base32_encoding(alphabet, case, padding)
                .encode(data)
                .into_bytes(), 
            Codec::Base58 { alphabet } => bs58::encode(data)
                .with_alphabet(base58_alphabet(alphabet))
                .into_string()
                .into_bytes(), 
            Codec::Base64 { alphabet, padding } => base64_engine(alphabet, padding)
                .encode(data)
                .into_bytes(), 
        };
        Ok(encoded)
    }

    /// Decodes a payload, failing if it couldn't have been produced by [`Codec::encode`]. 
    pub fn decode(&self, payload: &[u8]) -> Result<Vec<u8>, PayloadError> {
        let decoded = match *self {
            Codec::Identity => payload.to_vec(), 
            Codec::Base1 => base1::decode(payload)?, 
            Codec::Base2 => base2::decode(payload)?, 
            Codec::Radix(settings) => radix::decode_mono(payload, settings)?, 
            Codec::Base16 { case } => hex_encoding(case).decode(payload)?, 
            Codec::Base32 { alphabet, case, padding } => {
                base32_encoding(alphabet, case, padding).decode(payload)?
            }
            Codec::Base58 { alphabet } => bs58::decode(payload)
                .with_alphabet(base58_alphabet(alphabet))
                .into_vec()?, 
            Codec::Base64 { alphabet, padding } => base64_engine(alphabet, padding).decode(payload)?, 
        };
        Ok(decoded)
    }
}

fn hex_encoding(case: Case) -> &'static Encoding {
    match case {
        Case::Upper => &HEXUPPER, 
        Case::Lower => &HEXLOWER, 
    }
}

fn base32_encoding(alphabet: Base32Alphabet, case: Case, padding: bool) -> &'static Encoding {
    match (alphabet, case, padding) {
        (Base32Alphabet::Z, ..) => &BASE32_Z, 
        (Base32Alphabet::Rfc4648, Case::Upper, true) => &BASE32, 
        (Base32Alphabet::Rfc4648, Case::Upper, false) => &BASE32_NOPAD, 
        (Base32Alphabet::Rfc4648, Case::Lower, true) => &BASE32_LOWER, 
        (Base32Alphabet::Rfc4648, Case::Lower, false) => &BASE32_LOWER_NOPAD, 
        (Base32Alphabet::Hex, Case::Upper, true) => &BASE32HEX, 
        (Base32Alphabet::Hex, Case::Upper, false) => &BASE32HEX_NOPAD, 
        (Base32Alphabet::Hex, Case::Lower, true) => &BASE32HEX_LOWER, 
        (Base32Alphabet::Hex, Case::Lower, false) => &BASE32HEX_LOWER_NOPAD, 
    }
}

static HEXUPPER: Encoding = data_encoding::HEXUPPER;
static HEXLOWER: Encoding = data_encoding::HEXLOWER;
static BASE32: Encoding = data_encoding::BASE32;
static BASE32_NOPAD: Encoding = data_encoding::BASE32_NOPAD;
static BASE32HEX: Encoding = data_encoding::BASE32HEX;
static BASE32HEX_NOPAD: Encoding = data_encoding::BASE32HEX_NOPAD;
const LOWER_SYMBOLS: &str = "abcdefghijklmnopqrstuvwxyz234567";
const HEX_LOWER_SYMBOLS: &str = "0123456789abcdefghijklmnopqrstuv";
const Z_SYMBOLS: &str = "ybndrfg8ejkmcpqxot1uwisza345h769";

static BASE32_LOWER: LazyLock<Encoding> = LazyLock::new(|| custom_encoding(LOWER_SYMBOLS, true));
static BASE32_LOWER_NOPAD: LazyLock<Encoding> = LazyLock::new(|| custom_encoding(LOWER_SYMBOLS, false));
static BASE32HEX_LOWER: LazyLock<Encoding> = LazyLock::new(|| custom_encoding(HEX_LOWER_SYMBOLS, true));
static BASE32HEX_LOWER_NOPAD: LazyLock<Encoding> = LazyLock::new(|| custom_encoding(HEX_LOWER_SYMBOLS, false));
static BASE32_Z: LazyLock<Encoding> = LazyLock::new(|| custom_encoding(Z_SYMBOLS, false));

/// Builds a 32-symbol encoding not shipped by [data_encoding]. 
fn custom_encoding(symbols: &str, padding: bool) -> Encoding {
    let mut spec = Specification::new();
    spec.symbols.push_str(symbols);
    spec.padding = padding.then_some('=');
    spec.encoding().expect("Built-in base32 alphabets are valid")
}

fn base58_alphabet(alphabet: Base58Alphabet) -> &'static bs58::Alphabet {
    match alphabet {
        Base58Alphabet::Bitcoin => bs58::Alphabet::BITCOIN, 
        Base58Alphabet::Flickr => bs58::Alphabet::FLICKR, 
    }
}

fn base64_engine(alphabet: Base64Alphabet, padding: bool) -> &'static base64::engine::GeneralPurpose {
    use base64::engine::general_purpose::*;

    match (alphabet, padding) {
        (Base64Alphabet::Standard, true) => &STANDARD, 
        (Base64Alphabet::Standard, false) => &STANDARD_NO_PAD, 
        (Base64Alphabet::UrlSafe, true) => &URL_SAFE, 
        (Base64Alphabet::UrlSafe, false) => &URL_SAFE_NO_PAD, 
    }
}

mod base1 {
    use crate::PayloadError;

    const SYMBOL: u8 = b'A';

    /// Longest output produced, 1 GiB. Inputs of up to three bytes always fit. 
    pub const MAX_LEN: usize = 1 << 30;

    /// The length of the output is the value of the input as a bijective base-256 numeral, i.e. each byte
    /// is a digit from 1 to 256. This gives every byte string, including those with leading zeros, a
    /// distinct length. 
    pub fn encode(data: &[u8]) -> Result<Vec<u8>, PayloadError> {
        let len = data
            .iter()
            .try_fold(0usize, |len, &byte| {
                len.checked_mul(256)?.checked_add(usize::from(byte) + 1)
            })
            .filter(|&len| len <= MAX_LEN)
            .ok_or(PayloadError::TooLarge)?;

        let mut buffer = Vec::new();
        buffer
            .try_reserve_exact(len)
            .map_err(|_| PayloadError::TooLarge)?;
        buffer.resize(len, SYMBOL);
        Ok(buffer)
    }

    pub fn decode(payload: &[u8]) -> Result<Vec<u8>, PayloadError> {
        if let Some(index) = payload.iter().position(|&symbol| symbol != SYMBOL) {
            return Err(PayloadError::InvalidSymbol { symbol: payload[index], index });
        }
        let mut len = payload.len();
        let mut data = Vec::new();

        while len > 0 {
            len -= 1;
            data.push((len % 256) as u8);
            len /= 256;
        }
        data.reverse();
        Ok(data)
    }
}

mod base2 {
    use crate::PayloadError;

    pub fn encode(data: &[u8]) -> Vec<u8> {
        data.iter()
            .flat_map(|&byte| (0..8).rev().map(move |bit| b'0' + (byte >> bit & 1)))
            .collect()
    }

    pub fn decode(payload: &[u8]) -> Result<Vec<u8>, PayloadError> {
        if payload.len() % 8 != 0 {
            return Err(PayloadError::InvalidLength(payload.len()));
        }
        payload
            .chunks_exact(8)
            .enumerate()
            .map(|(chunk, bits)| {
                bits.iter().enumerate().try_fold(0u8, |byte, (i, &symbol)| match symbol {
                    b'0' | b'1' => Ok(byte << 1 | (symbol - b'0')), 
                    _ => Err(PayloadError::InvalidSymbol { symbol, index: chunk * 8 + i }), 
                })
            })
            .collect()
    }
}
