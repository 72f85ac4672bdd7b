use std::{fmt, io};

pub type Result<T> = std::result::Result<T, Sha256Error>;

#[derive(Debug)]
pub enum Sha256Error {
    /// The message bit length does not fit in the 64-bit length field
    InputTooLarge { len: u64 },
    /// An expected digest was not 64 hex characters
    MalformedDigest(hex::FromHexError),
    Io(io::Error),
}

impl fmt::Display for Sha256Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sha256Error::InputTooLarge { len } => write!(
                f,
                "input of {len} bytes is too large: bit length exceeds the 64-bit length field"
            ),
            Sha256Error::MalformedDigest(e) => write!(f, "malformed digest: {e}"),
            Sha256Error::Io(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Sha256Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Sha256Error::InputTooLarge { .. } => None,
            Sha256Error::MalformedDigest(e) => Some(e),
            Sha256Error::Io(e) => Some(e),
        }
    }
}

impl From<io::Error> for Sha256Error {
    fn from(e: io::Error) -> Self {
        Sha256Error::Io(e)
    }
}

impl From<hex::FromHexError> for Sha256Error {
    fn from(e: hex::FromHexError) -> Self {
        Sha256Error::MalformedDigest(e)
    }
}
