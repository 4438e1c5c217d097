#![cfg(feature = "serde")]

use serde::{de::Error, Deserialize, Deserializer, Serializer};

/// Hard-coded encoding used for Serde serialization. 
const ENCODING: &str = "base58_btc";

/// Serialize data for Serde as a multibase string. 
///
/// The data is always encoded as `base58_btc`. 
pub fn serialize<S>(data: impl AsRef<[u8]>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer
{
    let encoded = crate::encode(data, ENCODING).map_err(serde::ser::Error::custom)?;
    let string = String::from_utf8(encoded).expect("base58 is ascii");
    serializer.serialize_str(&string)
}

/// Deserialize data for Serde from a multibase string. 
///
/// Any supported encoding is accepted. 
pub fn deserialize<'a, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: From<Vec<u8>>, 
    D: Deserializer<'a>, 
{
    let decode = |string: String| crate::decode(string).map_err(D::Error::custom);

    String::deserialize(deserializer)
        .and_then(decode)
        .map(T::from)
}
