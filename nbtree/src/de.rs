//! Decoding of NBT data into a [`Tag`] tree.
//!
//! Decoding works on anything implementing [`Read`], and does no
//! decompression itself. See [`gz`](crate::gz) for compressed files.
//!
//! ```
//! use nbtree::{de::from_bytes, Payload};
//!
//! let bytes = [
//!     0x0a, 0x00, 0x04, b'r', b'o', b'o', b't', // root compound "root"
//!     0x03, 0x00, 0x01, b'x', 0, 0, 0, 42,      // int "x" = 42
//!     0x00,                                     // end of root
//! ];
//!
//! let root = from_bytes(&bytes).unwrap();
//! assert_eq!(root.name(), "root");
//! assert_eq!(root.find("x").map(|t| t.payload()), Some(&Payload::Int(42)));
//! ```

use std::convert::TryFrom;
use std::io::Read;

use byteorder::{BigEndian, ReadBytesExt};
use log::debug;

use crate::error::{Error, Result};
use crate::{Compound, Kind, List, Payload, Tag};

/// Default for [`DecodeOptions::max_depth`]. Low enough to decode in a
/// thread with a 2 MiB stack in unoptimised builds.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Options for customizing decoding.
#[derive(Debug, Clone, Copy)]
pub struct DecodeOptions {
    pub(crate) max_depth: usize,
    pub(crate) max_seq_len: usize,
    pub(crate) trace: bool,
}

impl DecodeOptions {
    /// Create new options. This object follows a builder pattern.
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_seq_len: i32::MAX as usize,
            trace: false,
        }
    }

    /// Set the maximum nesting of lists and compounds. Deeper data fails to
    /// decode rather than exhausting the stack. The root compound is depth 0.
    /// Defaults to [`DEFAULT_MAX_DEPTH`].
    pub fn max_depth(mut self, value: usize) -> Self {
        self.max_depth = value;
        self
    }

    /// Set the maximum length any list or byte array can be. Longer data
    /// fails to decode.
    pub fn max_seq_len(mut self, value: usize) -> Self {
        self.max_seq_len = value;
        self
    }

    /// Log each tag at `debug` level as it is decoded.
    pub fn trace(mut self, value: bool) -> Self {
        self.trace = value;
        self
    }
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode a whole tree from the reader. The first byte must be the compound
/// tag id (10), otherwise this fails with
/// [`ErrorKind::BadFormat`](crate::error::ErrorKind::BadFormat).
///
/// Nothing past the end of the root compound is read.
pub fn decode_root<R: Read>(reader: R) -> Result<Tag> {
    decode_root_with_opts(reader, DecodeOptions::default())
}

/// Decode a whole tree from the reader with the given options.
pub fn decode_root_with_opts<R: Read>(reader: R, opts: DecodeOptions) -> Result<Tag> {
    Decoder { reader, opts }.root()
}

/// Decode a whole tree from a byte slice. Bytes after the root compound are
/// ignored.
pub fn from_bytes(input: &[u8]) -> Result<Tag> {
    decode_root(input)
}

struct Decoder<R: Read> {
    reader: R,
    opts: DecodeOptions,
}

impl<R: Read> Decoder<R> {
    fn root(&mut self) -> Result<Tag> {
        let tag = self.reader.read_u8()?;
        if tag != u8::from(Kind::Compound) {
            return Err(Error::no_root_compound(tag));
        }

        self.decode_tag(Kind::Compound, true, 0)
    }

    /// Decode one tag whose type id has already been consumed. List elements
    /// are not named, so have no name to read.
    fn decode_tag(&mut self, kind: Kind, named: bool, depth: usize) -> Result<Tag> {
        let name = if named {
            Some(self.read_size_prefixed_string()?)
        } else {
            None
        };

        if self.opts.trace {
            debug!(
                "{:indent$}{} {:?}",
                "",
                kind,
                name.as_deref().unwrap_or(""),
                indent = depth * 4
            );
        }

        let payload = self.read_payload(kind, depth)?;
        Ok(Tag::from_parts(name, payload))
    }

    fn read_payload(&mut self, kind: Kind, depth: usize) -> Result<Payload> {
        Ok(match kind {
            Kind::End => return Err(Error::bad_format("unexpected End tag")),
            Kind::Byte => Payload::Byte(self.reader.read_i8()?),
            Kind::Short => Payload::Short(self.reader.read_i16::<BigEndian>()?),
            Kind::Int => Payload::Int(self.reader.read_i32::<BigEndian>()?),
            Kind::Long => Payload::Long(self.reader.read_i64::<BigEndian>()?),
            Kind::Float => Payload::Float(self.reader.read_f32::<BigEndian>()?),
            Kind::Double => Payload::Double(self.reader.read_f64::<BigEndian>()?),
            Kind::ByteArray => {
                let size = self.reader.read_i32::<BigEndian>()?;
                if size < 0 {
                    return Err(Error::bad_format(format!(
                        "negative byte array length: {}",
                        size
                    )));
                }
                let size = self.check_seq_len(size as usize)?;
                Payload::ByteArray(self.read_exact_vec(size)?)
            }
            Kind::String => Payload::String(self.read_size_prefixed_string()?),
            Kind::List => {
                self.check_depth(depth)?;

                let element_kind = self.read_kind()?;
                // A negative size is treated as an empty list.
                let size = self.reader.read_i32::<BigEndian>()?.max(0) as usize;
                let size = self.check_seq_len(size)?;

                if element_kind == Kind::End && size > 0 {
                    return Err(Error::bad_format("list of End cannot have elements"));
                }

                // Size is untrusted, grow as elements arrive.
                let mut items = Vec::with_capacity(size.min(1024));
                for _ in 0..size {
                    items.push(self.decode_tag(element_kind, false, depth + 1)?);
                }

                Payload::List(List::from_decoded(element_kind, items))
            }
            Kind::Compound => {
                self.check_depth(depth)?;

                let mut entries = Vec::new();
                loop {
                    let kind = self.read_kind()?;
                    if kind == Kind::End {
                        break;
                    }
                    entries.push(self.decode_tag(kind, true, depth + 1)?);
                }

                Payload::Compound(Compound::from_decoded(entries))
            }
        })
    }

    fn read_kind(&mut self) -> Result<Kind> {
        let tag = self.reader.read_u8()?;
        Kind::try_from(tag).map_err(|_| Error::invalid_tag(tag))
    }

    fn read_size_prefixed_string(&mut self) -> Result<String> {
        let len = self.reader.read_u16::<BigEndian>()? as usize;
        let buf = self.read_exact_vec(len)?;

        String::from_utf8(buf).map_err(|e| Error::nonunicode(e.into_bytes()))
    }

    /// Read exactly `len` bytes. The buffer grows with the data read rather
    /// than being allocated up front from the length prefix.
    fn read_exact_vec(&mut self, len: usize) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        (&mut self.reader).take(len as u64).read_to_end(&mut buf)?;

        if buf.len() != len {
            return Err(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                format!("expected {} bytes, found {}", len, buf.len()),
            )
            .into());
        }

        Ok(buf)
    }

    fn check_depth(&self, depth: usize) -> Result<()> {
        if depth > self.opts.max_depth {
            return Err(Error::bad_format(format!(
                "nbt nested deeper than {}",
                self.opts.max_depth
            )));
        }
        Ok(())
    }

    fn check_seq_len(&self, size: usize) -> Result<usize> {
        if size > self.opts.max_seq_len {
            return Err(Error::bad_format(format!(
                "size ({}) greater than max sequence length ({})",
                size, self.opts.max_seq_len,
            )));
        }
        Ok(size)
    }
}
