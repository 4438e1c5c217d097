use thiserror::Error;

/// Error type for the prefix-dispatching operations. 
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The requested encoding or encoding family has no entry in the [registry](crate::Registry). 
    #[error("Unsupported encoding: {0:?}")]
    UnsupportedEncoding(String), 

    /// An empty string was given where a multibase string was expected. 
    #[error("Missing encoding prefix")]
    MissingEncoding, 

    /// The first byte of the string is not the prefix of any registered encoding. 
    #[error("Unsupported prefix: {0:#04x}")]
    UnsupportedPrefix(u8), 

    /// The prefix was recognized, but the rest of the string could not be decoded by its codec. 
    #[error("Invalid {encoding} payload: {source}")]
    InvalidPayload {
        /// Identifier of the encoding the prefix resolved to. 
        encoding: &'static str, 
        /// Why the codec rejected the payload. 
        #[source]
        source: PayloadError, 
    }, 

    /// The encoded form would not fit in memory. Only unary encodings can produce this; their output grows
    /// with the _value_ of the input rather than its length. 
    #[error("Input too large to encode as {encoding}")]
    TooLarge {
        /// Identifier of the encoding that was requested. 
        encoding: &'static str, 
    }, 
}

/// Reason a codec rejected its input. 
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum PayloadError {
    /// A symbol outside the codec's alphabet was found. 
    #[error("Invalid symbol {symbol:#04x} at index {index}")]
    InvalidSymbol {
        symbol: u8, 
        index: usize, 
    }, 

    /// The payload length cannot have been produced by the codec. 
    #[error("Invalid length {0}")]
    InvalidLength(usize), 

    /// The value represented by the payload does not fit in memory. 
    #[error("Value too large")]
    TooLarge, 

    /// Rejected by the base16/base32 codec. 
    #[error(transparent)]
    Rfc4648(#[from] data_encoding::DecodeError), 

    /// Rejected by the base58 codec. 
    #[error(transparent)]
    Base58(#[from] bs58::decode::Error), 

    /// Rejected by the base64 codec. 
    #[error(transparent)]
    Base64(#[from] base64::DecodeError), 
}

/// Result of a dispatching operation. 
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Wraps a codec rejection with the encoding it came from. 
    pub(crate) fn payload(encoding: &'static str, source: PayloadError) -> Error {
        Error::InvalidPayload { encoding, source }
    }

    pub(crate) fn unsupported(encoding: &str) -> Error {
        Error::UnsupportedEncoding(encoding.to_owned())
    }
}
