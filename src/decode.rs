use crate::*;

/// Decodes a multibase string, using its prefix to determine the encoding. 
///
/// # Examples
///
/// ```
/// let decoded = multibase::decode("9448378203247")?;
/// assert_eq!(decoded, b"hello");
///
/// assert_eq!(multibase::decode(""), Err(multibase::Error::MissingEncoding));
/// assert_eq!(multibase::decode("-garbage"), Err(multibase::Error::UnsupportedPrefix(b'-')));
/// # Ok::<(), multibase::Error>(())
/// ```
pub fn decode(string: impl AsRef<[u8]>) -> Result<Vec<u8>> {
    codec_decode(string).map(|(data, _)| data)
}

/// Decodes a multibase string, additionally returning the identifier of its encoding. 
///
/// # Examples
///
/// ```
/// let (decoded, encoding) = multibase::codec_decode("zCn8eVZg")?;
/// assert_eq!(decoded, b"hello");
/// assert_eq!(encoding, "base58_btc");
/// # Ok::<(), multibase::Error>(())
/// ```
pub fn codec_decode(string: impl AsRef<[u8]>) -> Result<(Vec<u8>, &'static str)> {
    // factored out non-generic code to reduce code size
    codec_decode_mono(string.as_ref())
}

/// Monomorphised decode implementation. 
#[inline(never)]
fn codec_decode_mono(string: &[u8]) -> Result<(Vec<u8>, &'static str)> {
    let (descriptor, payload) = split(string)?;

    descriptor.codec
        .decode(payload)
        .map(|data| (data, descriptor.id))
        .map_err(|source| {
            log::trace!("Rejected {} payload: {source}.", descriptor.id);
            Error::payload(descriptor.id, source)
        })
}

/// Identifies the encoding of a multibase string by its prefix. 
///
/// Only the prefix is inspected; the payload may still fail to [decode]. 
///
/// # Examples
///
/// ```
/// let encoded = multibase::encode(b"hello", "base58_btc")?;
/// assert_eq!(multibase::codec(&encoded)?, "base58_btc");
///
/// // '0' is not a base58 symbol, but the prefix is all that is checked
/// assert_eq!(multibase::codec("z000")?, "base58_btc");
/// assert!(multibase::decode("z000").is_err());
/// # Ok::<(), multibase::Error>(())
/// ```
pub fn codec(string: impl AsRef<[u8]>) -> Result<&'static str> {
    split(string.as_ref()).map(|(descriptor, _)| descriptor.id)
}

/// Whether a string starts with the prefix of a supported encoding. 
///
/// Like [`codec`], this does not check that the payload can be decoded. 
pub fn is_encoded(string: impl AsRef<[u8]>) -> bool {
    codec(string).is_ok()
}

/// Splits a multibase string into the descriptor of its prefix and the payload. 
fn split(string: &[u8]) -> Result<(&'static Descriptor, &[u8])> {
    let (&prefix, payload) = string
        .split_first()
        .ok_or(Error::MissingEncoding)?;

    let descriptor = registry()
        .lookup_by_prefix(prefix)
        .ok_or_else(|| {
            log::trace!("Unsupported prefix {prefix:#04x}.");
            Error::UnsupportedPrefix(prefix)
        })?;

    Ok((descriptor, payload))
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn known_values() {
        let test = |input: &[u8], expected: &[u8], encoding| {
            assert_eq!(decode(input).as_deref(), Ok(expected));
            assert_eq!(codec_decode(input), Ok((expected.to_vec(), encoding)));
        };
        test(b"9448378203247", b"hello", "base10");
        test(b"7006414533066157", b"\0\0hello", "base8");
        test(b"900", b"\0\0", "base10");
        test(b"90", b"\0", "base10");
        test(b"9", b"", "base10");
        test(b"\0\xff\xfe", b"\xff\xfe", "identity");
        test(b"1AAA", b"\x02", "base1");
        test(b"00110100001100101", b"he", "base2");
        test(b"f68656c6c6f", b"hello", "base16_lower");
        test(b"hxf1zgedpcfzg1ebb", b"yes mani !", "base32_z");
        test(b"Z7Pznk19XTTzBtx", b"yes mani !", "base58_flickr");
        test(b"UeWVzIG1hbmkgIQ==", b"yes mani !", "base64_url_pad");
    }

    #[test]
    fn missing_and_unsupported() {
        assert_eq!(decode(""), Err(Error::MissingEncoding));
        assert_eq!(codec_decode(""), Err(Error::MissingEncoding));
        assert_eq!(codec(""), Err(Error::MissingEncoding));

        assert_eq!(decode("-garbage"), Err(Error::UnsupportedPrefix(b'-')));
        assert_eq!(codec_decode("-garbage"), Err(Error::UnsupportedPrefix(b'-')));
        assert_eq!(codec("-garbage"), Err(Error::UnsupportedPrefix(b'-')));
        assert_eq!(codec([0xc3, 0xa9]), Err(Error::UnsupportedPrefix(0xc3)));

        assert!(!is_encoded(""));
        assert!(!is_encoded("-garbage"));
    }

    #[test]
    fn invalid_payload() {
        let test = |input: &str, encoding| {
            let result = decode(input);
            assert!(
                matches!(result, Err(Error::InvalidPayload { encoding: e, .. }) if e == encoding), 
                "{input}: {result:?}", 
            );
        };
        test("9448378a03247", "base10");
        test("78", "base8");
        test("1AB", "base1");
        test("0012", "base2");
        test("fABCD", "base16_lower");
        test("F0g", "base16_upper");
        test("bPFSXG", "base32_lower");
        test("cpfsxg", "base32_pad_lower");
        test("zO0Il", "base58_btc");
        test("meWVz=", "base64");
        test("u+/8", "base64_url");

        assert_eq!(
            decode("9x"), 
            Err(Error::InvalidPayload {
                encoding: "base10", 
                source: PayloadError::InvalidSymbol { symbol: b'x', index: 0 }, 
            }), 
        );
    }

    #[test]
    fn detection_is_syntactic() {
        let mut encoded = encode(b"hello", "base58_btc").unwrap();
        assert!(is_encoded(&encoded));

        // 'l' is not in the bitcoin alphabet
        encoded[3] = b'l';
        assert!(is_encoded(&encoded));
        assert_eq!(codec(&encoded), Ok("base58_btc"));
        assert!(matches!(decode(&encoded), Err(Error::InvalidPayload { encoding: "base58_btc", .. })));
    }

    #[test]
    fn codec_of_every_encoding() {
        for &id in encodings() {
            let encoded = encode(b"\0\x01", id).unwrap();
            assert_eq!(codec(&encoded), Ok(id));
            assert!(is_encoded(&encoded));
        }
    }
}
