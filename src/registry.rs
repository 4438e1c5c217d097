//! The table of supported encodings and lookups into it. 

use std::{collections::HashMap, sync::LazyLock};
use thiserror::Error;
use crate::{
    codec::{Base32Alphabet, Base58Alphabet, Base64Alphabet, Case, Codec}, 
    radix::{self, Radix}, 
    Error, Result, 
};

/// Describes one supported encoding. 
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct Descriptor {
    /// Unique identifier, e.g. `base32_pad_lower`. 
    pub id: &'static str, 
    /// Unique byte tagging strings encoded with this encoding. Must be below `0x80`. 
    pub prefix: u8, 
    /// The family of encodings this belongs to, e.g. `base32`. 
    pub family: &'static str, 
    /// Codec producing and consuming the payload. 
    pub codec: Codec, 
}

/// Error type for building a [`Registry`] out of an inconsistent descriptor list. 
#[derive(Error, Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum RegistryError {
    /// Two descriptors share an identifier. 
    #[error("Duplicate encoding {0:?}")]
    DuplicateId(&'static str), 

    /// Two descriptors share a prefix, which would make decoding ambiguous. 
    #[error("Duplicate prefix {0:#04x}")]
    DuplicatePrefix(u8), 

    /// Only single-byte prefixes are supported, i.e. those below `0x80`. 
    #[error("Prefix {0:#04x} does not fit in a single byte")]
    PrefixOutOfRange(u8), 
}

/// Lookup tables over a list of [descriptors](Descriptor). 
///
/// A registry is immutable once built. The one used by the crate-level functions is returned by
/// [`registry`]. 
#[derive(Debug)]
pub struct Registry {
    /// Descriptors in declaration order. 
    descriptors: Vec<Descriptor>, 
    /// Identifiers in declaration order. 
    ids: Vec<&'static str>, 
    /// Index into `descriptors` by identifier. 
    by_id: HashMap<&'static str, usize>, 
    /// Index into `descriptors` by prefix. 
    by_prefix: [Option<usize>; 0x80], 
    /// Families in order of first appearance. 
    families: Vec<&'static str>, 
    /// Identifiers of each family, in declaration order. 
    members: HashMap<&'static str, Vec<&'static str>>, 
}

impl Registry {
    /// Builds a registry, checking that identifiers and prefixes are unique. 
    pub fn new(descriptors: impl IntoIterator<Item = Descriptor>) -> std::result::Result<Registry, RegistryError> {
        let descriptors: Vec<_> = descriptors.into_iter().collect();
        let mut by_id = HashMap::with_capacity(descriptors.len());
        let mut by_prefix = [None; 0x80];
        let mut families = Vec::new();
        let mut members: HashMap<_, Vec<_>> = HashMap::new();

        for (index, descriptor) in descriptors.iter().enumerate() {
            let slot = by_prefix
                .get_mut(usize::from(descriptor.prefix))
                .ok_or(RegistryError::PrefixOutOfRange(descriptor.prefix))?;
            if slot.replace(index).is_some() {
                return Err(RegistryError::DuplicatePrefix(descriptor.prefix));
            }
            if by_id.insert(descriptor.id, index).is_some() {
                return Err(RegistryError::DuplicateId(descriptor.id));
            }
            members
                .entry(descriptor.family)
                .or_insert_with(|| {
                    families.push(descriptor.family);
                    Vec::new()
                })
                .push(descriptor.id);
        }

        Ok(Registry {
            ids: descriptors.iter().map(|descriptor| descriptor.id).collect(), 
            descriptors, 
            by_id, 
            by_prefix, 
            families, 
            members, 
        })
    }

    /// Finds the descriptor with the given identifier. 
    pub fn lookup_by_id(&self, id: &str) -> Option<&Descriptor> {
        self.by_id
            .get(id)
            .map(|&index| &self.descriptors[index])
    }

    /// Finds the descriptor with the given prefix. 
    pub fn lookup_by_prefix(&self, prefix: u8) -> Option<&Descriptor> {
        self.by_prefix
            .get(usize::from(prefix))
            .copied()
            .flatten()
            .map(|index| &self.descriptors[index])
    }

    /// Identifiers of the encodings in a family, in declaration order. 
    pub fn ids_in_family(&self, family: &str) -> Option<&[&'static str]> {
        self.members.get(family).map(Vec::as_slice)
    }

    /// The family of an encoding. 
    pub fn family_of(&self, id: &str) -> Option<&'static str> {
        self.lookup_by_id(id).map(|descriptor| descriptor.family)
    }

    /// All identifiers, in declaration order. 
    pub fn all_ids(&self) -> &[&'static str] {
        &self.ids
    }

    /// All families without duplicates, in order of first appearance. 
    pub fn all_families(&self) -> &[&'static str] {
        &self.families
    }

    /// All descriptors, in declaration order. 
    pub fn descriptors(&self) -> &[Descriptor] {
        &self.descriptors
    }
}

/// Returns the registry of all built-in encodings. 
///
/// The registry is built on first use and shared for the remainder of the process. 
pub fn registry() -> &'static Registry {
    static REGISTRY: LazyLock<Registry> = LazyLock::new(|| {
        let registry = Registry::new(DESCRIPTORS).expect("Built-in descriptors are consistent");
        log::debug!(
            "Built multibase registry with {} encodings in {} families.", 
            registry.all_ids().len(), 
            registry.all_families().len(), 
        );
        registry
    });
    &REGISTRY
}

/// Identifiers of all supported encodings, in declaration order. 
pub fn encodings() -> &'static [&'static str] {
    registry().all_ids()
}

/// All encoding families. 
pub fn encoding_families() -> &'static [&'static str] {
    registry().all_families()
}

/// Identifiers of the encodings in a family. 
///
/// # Examples
///
/// ```
/// assert_eq!(multibase::encodings_for("base58")?, ["base58_flickr", "base58_btc"]);
/// # Ok::<(), multibase::Error>(())
/// ```
pub fn encodings_for(family: &str) -> Result<&'static [&'static str]> {
    registry()
        .ids_in_family(family)
        .ok_or_else(|| Error::unsupported(family))
}

/// The family an encoding belongs to. 
pub fn encoding_family(encoding: &str) -> Result<&'static str> {
    registry()
        .family_of(encoding)
        .ok_or_else(|| Error::unsupported(encoding))
}

const fn descriptor(id: &'static str, prefix: u8, family: &'static str, codec: Codec) -> Descriptor {
    Descriptor { id, prefix, family, codec }
}

const fn base32(alphabet: Base32Alphabet, case: Case, padding: bool) -> Codec {
    Codec::Base32 { alphabet, case, padding }
}

const fn base64(alphabet: Base64Alphabet, padding: bool) -> Codec {
    Codec::Base64 { alphabet, padding }
}

const OCTAL: radix::Settings = radix::Settings { radix: Radix::Octal, padding: true };
const DECIMAL: radix::Settings = radix::Settings { radix: Radix::Decimal, padding: true };

/// The built-in encodings. 
///
/// Note that the base32hex variants without padding are grouped in the `base16` family. 
#[rustfmt::skip]
const DESCRIPTORS: [Descriptor; 22] = {
    use Base32Alphabet::{Hex, Rfc4648, Z};
    use Base64Alphabet::{Standard, UrlSafe};
    use Case::{Lower, Upper};

    [
        descriptor("identity",             0x00, "identity", Codec::Identity), 
        descriptor("base1",                b'1', "base1",    Codec::Base1), 
        descriptor("base2",                b'0', "base2",    Codec::Base2), 
        descriptor("base8",                b'7', "base8",    Codec::Radix(OCTAL)), 
        descriptor("base10",               b'9', "base10",   Codec::Radix(DECIMAL)), 
        descriptor("base16_upper",         b'F', "base16",   Codec::Base16 { case: Upper }), 
        descriptor("base16_lower",         b'f', "base16",   Codec::Base16 { case: Lower }), 
        descriptor("base32_hex_upper",     b'V', "base16",   base32(Hex, Upper, false)), 
        descriptor("base32_hex_lower",     b'v', "base16",   base32(Hex, Lower, false)), 
        descriptor("base32_hex_pad_upper", b'T', "base32",   base32(Hex, Upper, true)), 
        descriptor("base32_hex_pad_lower", b't', "base32",   base32(Hex, Lower, true)), 
        descriptor("base32_upper",         b'B', "base32",   base32(Rfc4648, Upper, false)), 
        descriptor("base32_lower",         b'b', "base32",   base32(Rfc4648, Lower, false)), 
        descriptor("base32_pad_upper",     b'C', "base32",   base32(Rfc4648, Upper, true)), 
        descriptor("base32_pad_lower",     b'c', "base32",   base32(Rfc4648, Lower, true)), 
        descriptor("base32_z",             b'h', "base32",   base32(Z, Lower, false)), 
        descriptor("base58_flickr",        b'Z', "base58",   Codec::Base58 { alphabet: Base58Alphabet::Flickr }), 
        descriptor("base58_btc",           b'z', "base58",   Codec::Base58 { alphabet: Base58Alphabet::Bitcoin }), 
        descriptor("base64",               b'm', "base64",   base64(Standard, false)), 
        descriptor("base64_pad",           b'M', "base64",   base64(Standard, true)), 
        descriptor("base64_url",           b'u', "base64",   base64(UrlSafe, false)), 
        descriptor("base64_url_pad",       b'U', "base64",   base64(UrlSafe, true)), 
    ]
};
