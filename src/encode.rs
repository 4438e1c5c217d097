use crate::*;

/// Encodes data and tags it with the prefix of the encoding. 
///
/// Fails if the encoding is unknown. See [`encodings`] for the supported ones. 
///
/// # Examples
///
/// ```
/// let encoded = multibase::encode(b"hello", "base10")?;
/// assert_eq!(encoded, b"9448378203247");
///
/// let encoded = multibase::encode(b"hello", "base58_btc")?;
/// assert_eq!(encoded, b"zCn8eVZg");
/// # Ok::<(), multibase::Error>(())
/// ```
pub fn encode(data: impl AsRef<[u8]>, encoding: &str) -> Result<Vec<u8>> {
    // factored out non-generic code to reduce code size
    encode_mono(data.as_ref(), encoding)
}

/// Monomorphised encode implementation. 
#[inline(never)]
fn encode_mono(data: &[u8], encoding: &str) -> Result<Vec<u8>> {
    let descriptor = lookup(encoding)?;

    // encoding only fails if the output is too large to allocate
    let payload = descriptor.codec
        .encode(data)
        .map_err(|_| {
            log::trace!("Input of {} bytes is too large for {}.", data.len(), descriptor.id);
            Error::TooLarge { encoding: descriptor.id }
        })?;

    Ok(tag(descriptor.prefix, &payload))
}

/// Returns the prefix byte of an encoding. 
///
/// # Examples
///
/// ```
/// assert_eq!(multibase::prefix("base32_pad_lower")?, b'c');
/// assert_eq!(multibase::prefix("identity")?, 0);
/// # Ok::<(), multibase::Error>(())
/// ```
pub fn prefix(encoding: &str) -> Result<u8> {
    lookup(encoding).map(|descriptor| descriptor.prefix)
}

/// Tags data that is already encoded with the prefix of its encoding. 
///
/// The data is not checked; it is up to the caller that it is valid for the encoding. 
///
/// # Examples
///
/// ```
/// let tagged = multibase::multibase("68656c6c6f", "base16_lower")?;
/// assert_eq!(tagged, b"f68656c6c6f");
/// # Ok::<(), multibase::Error>(())
/// ```
pub fn multibase(data: impl AsRef<[u8]>, encoding: &str) -> Result<Vec<u8>> {
    let prefix = prefix(encoding)?;
    Ok(tag(prefix, data.as_ref()))
}

/// Resolves an encoding identifier. 
fn lookup(encoding: &str) -> Result<&'static Descriptor> {
    registry()
        .lookup_by_id(encoding)
        .ok_or_else(|| {
            log::trace!("Unsupported encoding {encoding:?}.");
            Error::unsupported(encoding)
        })
}

fn tag(prefix: u8, payload: &[u8]) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(1 + payload.len());
    buffer.push(prefix);
    buffer.extend_from_slice(payload);
    buffer
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn known_values() {
        let test = |data: &[u8], encoding, expected: &[u8]| {
            let encoded = encode(data, encoding).unwrap();
            assert_eq!(encoded, expected, "{encoding}");
        };
        test(b"yes mani !", "identity", b"\0yes mani !");
        test(b"yes mani !", "base2", b"001111001011001010111001100100000011011010110000101101110011010010010000000100001");
        test(b"yes mani !", "base8", b"7171312714403326055632220041");
        test(b"yes mani !", "base10", b"9573277761329450583662625");
        test(b"yes mani !", "base16_lower", b"f796573206d616e692021");
        test(b"yes mani !", "base16_upper", b"F796573206D616E692021");
        test(b"yes mani !", "base32_lower", b"bpfsxgidnmfxgsibb");
        test(b"yes mani !", "base32_pad_upper", b"CPFSXGIDNMFXGSIBB");
        test(b"yes mani !", "base32_hex_lower", b"vf5in683dc5n6i811");
        test(b"yes mani !", "base32_hex_pad_upper", b"TF5IN683DC5N6I811");
        test(b"yes mani !", "base32_z", b"hxf1zgedpcfzg1ebb");
        test(b"yes mani !", "base58_flickr", b"Z7Pznk19XTTzBtx");
        test(b"yes mani !", "base58_btc", b"z7paNL19xttacUY");
        test(b"yes mani !", "base64", b"meWVzIG1hbmkgIQ");
        test(b"yes mani !", "base64_pad", b"MeWVzIG1hbmkgIQ==");
        test(b"yes mani !", "base64_url", b"ueWVzIG1hbmkgIQ");
        test(b"yes mani !", "base64_url_pad", b"UeWVzIG1hbmkgIQ==");

        test(b"", "base10", b"9");
        test(b"\0\0", "base10", b"900");
        test(b"\0\0hello", "base8", b"7006414533066157");
        test(b"\x01", "base1", b"1AA");
    }

    #[test]
    fn unsupported() {
        let error = Error::UnsupportedEncoding("base3".into());
        assert_eq!(encode(b"hello", "base3"), Err(error.clone()));
        assert_eq!(prefix("base3"), Err(error.clone()));
        assert_eq!(multibase(b"hello", "base3"), Err(error));
        assert_eq!(
            encode(b"hello", "base32"), 
            Err(Error::UnsupportedEncoding("base32".into())), 
        );
    }

    #[test]
    fn too_large() {
        assert_eq!(encode([1; 32], "base1"), Err(Error::TooLarge { encoding: "base1" }));
        assert_eq!(encode([0; 8], "base1"), Err(Error::TooLarge { encoding: "base1" }));
        assert_eq!(encode([0; 5], "base1"), Err(Error::TooLarge { encoding: "base1" }));
    }

    #[test]
    fn prefixes() {
        for &id in encodings() {
            let encoded = encode(b"", id).unwrap();
            assert_eq!(encoded.first().copied(), prefix(id).ok(), "{id}");
        }
    }

    #[test]
    fn multibase_only_tags() {
        assert_eq!(multibase(b"not hex", "base16_lower").unwrap(), b"fnot hex");
        assert_eq!(multibase(b"", "base58_btc").unwrap(), b"z");
    }
}
