//! Panicking versions of the fallible crate-level functions. 
//!
//! Each function behaves exactly like its namesake in the crate root, except that it returns the value
//! directly and panics with the error's message on failure. Useful when the input is known to be valid, e.g. 
//! a hard-coded encoding identifier. 
//!
//! ```
//! use multibase::strict;
//!
//! let encoded = strict::encode(b"hello", "base10");
//! assert_eq!(strict::decode(&encoded), b"hello");
//! ```
//!
//! ```should_panic
//! multibase::strict::decode("-garbage"); // panics: Unsupported prefix: 0x2d
//! ```

use crate::Result;

#[track_caller]
fn or_panic<T>(result: Result<T>) -> T {
    match result {
        Ok(value) => value, 
        Err(error) => panic!("{error}"), 
    }
}

/// See [`crate::encode`]. 
#[track_caller]
pub fn encode(data: impl AsRef<[u8]>, encoding: &str) -> Vec<u8> {
    or_panic(crate::encode(data, encoding))
}

/// See [`crate::decode`]. 
#[track_caller]
pub fn decode(string: impl AsRef<[u8]>) -> Vec<u8> {
    or_panic(crate::decode(string))
}

/// See [`crate::codec_decode`]. 
#[track_caller]
pub fn codec_decode(string: impl AsRef<[u8]>) -> (Vec<u8>, &'static str) {
    or_panic(crate::codec_decode(string))
}

/// See [`crate::codec`]. 
#[track_caller]
pub fn codec(string: impl AsRef<[u8]>) -> &'static str {
    or_panic(crate::codec(string))
}

/// See [`crate::prefix`]. 
#[track_caller]
pub fn prefix(encoding: &str) -> u8 {
    or_panic(crate::prefix(encoding))
}

/// See [`crate::multibase`]. 
#[track_caller]
pub fn multibase(data: impl AsRef<[u8]>, encoding: &str) -> Vec<u8> {
    or_panic(crate::multibase(data, encoding))
}

/// See [`crate::encodings_for`]. 
#[track_caller]
pub fn encodings_for(family: &str) -> &'static [&'static str] {
    or_panic(crate::encodings_for(family))
}

/// See [`crate::encoding_family`]. 
#[track_caller]
pub fn encoding_family(encoding: &str) -> &'static str {
    or_panic(crate::encoding_family(encoding))
}
