//! Contains the Error and Result type used by the decoder and encoder.

/// Error produced while decoding or encoding NBT.
#[derive(Debug, Clone)]
pub struct Error {
    msg: String,
    kind: ErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The root tag was not a compound, a type id was outside the tag
    /// vocabulary, or a length or nesting limit was broken.
    BadFormat,

    /// The input ran out part way through a value.
    TruncatedInput,

    /// A name or string payload was not valid UTF-8. Contains the offending
    /// bytes.
    Encoding(Vec<u8>),

    /// A length did not fit into the prefix the format gives it.
    LengthOverflow,

    /// Any other IO error from the underlying reader or writer.
    Io,
}

impl Error {
    /// Get the kind of error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub(crate) fn bad_format(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            kind: ErrorKind::BadFormat,
        }
    }

    pub(crate) fn no_root_compound(tag: u8) -> Self {
        Self::bad_format(format!(
            "invalid nbt: root must be a compound (10), found {}",
            tag
        ))
    }

    pub(crate) fn invalid_tag(tag: u8) -> Self {
        Self::bad_format(format!("invalid tag: {}", tag))
    }

    pub(crate) fn nonunicode(d: Vec<u8>) -> Self {
        Self {
            msg: format!(
                "invalid string, non-unicode: {}",
                String::from_utf8_lossy(&d),
            ),
            kind: ErrorKind::Encoding(d),
        }
    }

    pub(crate) fn length_overflow(what: &str, len: usize) -> Self {
        Self {
            msg: format!("{} too long: {}", what, len),
            kind: ErrorKind::LengthOverflow,
        }
    }
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        write!(f, "{}", self.msg)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::UnexpectedEof => Self {
                msg: format!("eof: unexpectedly ran out of input: {}", e),
                kind: ErrorKind::TruncatedInput,
            },
            _ => Self {
                msg: format!("io error: {}", e),
                kind: ErrorKind::Io,
            },
        }
    }
}

/// Convenience type for Result.
pub type Result<T> = std::result::Result<T, Error>;
