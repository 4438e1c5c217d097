//! Conversion between bytes and digit strings in a small radix. 
//!
//! The input bytes are read as one big-endian unsigned integer which is rendered with the digits `0`-`9`
//! (as many as the radix allows). Such a rendering loses leading zero bytes, since they don't contribute to
//! the value. With [padding](Settings::padding) enabled, every leading zero byte is instead written as one
//! leading `0` digit and restored when decoding, which makes the conversion lossless:
//!
//! ```
//! use multibase::radix::{self, Radix, Settings};
//!
//! let settings = Settings { radix: Radix::Octal, padding: true };
//! let encoded = radix::encode(b"\0\0hello", settings);
//! assert_eq!(encoded, "006414533066157");
//!
//! let decoded = radix::decode(&encoded, settings)?;
//! assert_eq!(decoded, b"\0\0hello");
//! # Ok::<(), multibase::PayloadError>(())
//! ```
//!
//! Without padding the leading zeros collapse, and decoding returns only the significant bytes:
//!
//! ```
//! use multibase::radix::{self, Radix, Settings};
//!
//! let settings = Settings { radix: Radix::Octal, padding: false };
//! let encoded = radix::encode(b"\0\0hello", settings);
//! assert_eq!(encoded, "6414533066157");
//! assert_eq!(radix::decode(&encoded, settings)?, b"hello");
//! # Ok::<(), multibase::PayloadError>(())
//! ```

use crate::PayloadError;

/// Numeral base of the digit string. 
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Radix {
    /// Digits `0`-`7`. 
    Octal = 8, 
    /// Digits `0`-`9`. 
    Decimal = 10, 
}

impl Radix {
    const fn get(self) -> u16 {
        self as u16
    }

    /// Returns the value of an ascii digit, or `None` if it isn't a digit of this radix. 
    fn digit(self, symbol: u8) -> Option<u16> {
        let value = u16::from(symbol.wrapping_sub(b'0'));
        (value < self.get()).then_some(value)
    }
}

/// Settings used when converting. 
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct Settings {
    /// The numeral base. Default: [`Radix::Decimal`]. 
    pub radix: Radix, 
    /// Whether leading zero bytes are preserved as leading `0` digits. Must match between encoding and
    /// decoding. Default: `true`. 
    pub padding: bool, 
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            radix: Radix::Decimal, 
            padding: true, 
        }
    }
}

/// Renders bytes as a digit string. 
///
/// Empty input yields an empty string. Input consisting only of zero bytes yields one `0` per byte when
/// padding, and a single `0` otherwise. 
pub fn encode(data: impl AsRef<[u8]>, settings: Settings) -> String {
    let digits = encode_mono(data.as_ref(), settings);
    String::from_utf8(digits).expect("All digits are ascii")
}

/// Parses a digit string back into bytes. 
///
/// The string `"0"` always decodes to a single zero byte. Fails if any symbol is not a digit of the radix. 
pub fn decode(string: impl AsRef<[u8]>, settings: Settings) -> Result<Vec<u8>, PayloadError> {
    decode_mono(string.as_ref(), settings)
}

/// Monomorphised encode implementation, returning ascii digits. 
pub(crate) fn encode_mono(data: &[u8], settings: Settings) -> Vec<u8> {
    if data.is_empty() {
        return Vec::new();
    }
    let zeros = data.iter().take_while(|&&byte| byte == 0).count();
    let significant = &data[zeros..];

    if significant.is_empty() {
        let count = if settings.padding { zeros } else { 1 };
        return vec![b'0'; count];
    }

    let digits = to_digits(significant.to_vec(), settings.radix);
    if settings.padding {
        [vec![b'0'; zeros], digits].concat()
    } else {
        digits
    }
}

/// Monomorphised decode implementation. 
pub(crate) fn decode_mono(string: &[u8], settings: Settings) -> Result<Vec<u8>, PayloadError> {
    match string {
        [] => return Ok(Vec::new()), 
        [b'0'] => return Ok(vec![0]), 
        _ => (), 
    }

    // validate up front so a bad symbol is reported wherever it appears
    let values = string
        .iter()
        .enumerate()
        .map(|(index, &symbol)| {
            settings.radix
                .digit(symbol)
                .ok_or(PayloadError::InvalidSymbol { symbol, index })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let zeros = values.iter().take_while(|&&value| value == 0).count();
    let bytes = from_digits(&values[zeros..], settings.radix);

    if settings.padding {
        Ok([vec![0; zeros], bytes].concat())
    } else {
        Ok(bytes)
    }
}

/// Repeatedly divides a big-endian number by the radix, collecting the remainders as ascii digits. The
/// number must not have leading zero bytes, and is consumed in the process. 
fn to_digits(mut number: Vec<u8>, radix: Radix) -> Vec<u8> {
    let radix = radix.get();
    let mut digits = Vec::with_capacity(number.len() * 3);
    let mut start = 0;

    while start < number.len() {
        let mut remainder: u16 = 0;
        for byte in &mut number[start..] {
            let acc = remainder << 8 | u16::from(*byte);
            // the quotient is below 256 since the remainder is below the radix
            *byte = (acc / radix) as u8;
            remainder = acc % radix;
        }
        digits.push(b'0' + remainder as u8);

        // skip bytes that have been divided down to zero
        while number.get(start) == Some(&0) {
            start += 1;
        }
    }
    digits.reverse();
    digits
}

/// Accumulates digit values into a minimal big-endian number. No digits yields no bytes. 
fn from_digits(values: &[u16], radix: Radix) -> Vec<u8> {
    let radix = radix.get();
    // little-endian while accumulating
    let mut number: Vec<u8> = Vec::with_capacity(values.len() / 2 + 1);

    for &value in values {
        let mut carry = value;
        for byte in &mut number {
            let acc = u16::from(*byte) * radix + carry;
            *byte = acc as u8;
            carry = acc >> 8;
        }
        while carry > 0 {
            number.push(carry as u8);
            carry >>= 8;
        }
    }
    number.reverse();
    number
}
