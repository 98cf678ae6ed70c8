//! Encoding of a [`Tag`] tree into NBT data. This is the exact inverse of
//! [`de`](crate::de): decoding the output of [`to_bytes`] gives back the same
//! tree.
//!
//! ```
//! use nbtree::{Compound, Tag};
//!
//! let mut root = Tag::new("root", Compound::new());
//! root.as_compound_mut().unwrap().push("x", 42i32);
//!
//! let bytes = nbtree::to_bytes(&root).unwrap();
//! assert_eq!(
//!     bytes,
//!     [0x0a, 0, 4, b'r', b'o', b'o', b't', 0x03, 0, 1, b'x', 0, 0, 0, 42, 0x00]
//! );
//! ```
use std::convert::TryFrom;
use std::io::Write;

use byteorder::{BigEndian, WriteBytesExt};

use crate::error::{Error, Result};
use crate::{Kind, Payload, Tag};

/// Encode a tag into a new buffer.
///
/// `with_type_header` controls whether the tag id byte is written first. List
/// elements are written without one, since the list declares the kind of its
/// elements once. The name is written whenever the tag is named.
pub fn encode(tag: &Tag, with_type_header: bool) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    write_tag(&mut buf, tag, with_type_header)?;
    Ok(buf)
}

/// Encode a tag, including its tag id, into a new buffer. For a root compound
/// this is the complete uncompressed form of an NBT file.
pub fn to_bytes(tag: &Tag) -> Result<Vec<u8>> {
    encode(tag, true)
}

/// Encode a tag, including its tag id, to the writer.
pub fn to_writer<W: Write>(mut writer: W, tag: &Tag) -> Result<()> {
    write_tag(&mut writer, tag, true)
}

fn write_tag<W: Write>(writer: &mut W, tag: &Tag, with_type_header: bool) -> Result<()> {
    if with_type_header {
        writer.write_kind(tag.kind())?;
    }
    if tag.is_named() {
        writer.write_size_prefixed_str(tag.name())?;
    }
    write_payload(writer, tag.payload())
}

fn write_payload<W: Write>(writer: &mut W, payload: &Payload) -> Result<()> {
    match payload {
        Payload::Byte(v) => writer.write_i8(*v)?,
        Payload::Short(v) => writer.write_i16::<BigEndian>(*v)?,
        Payload::Int(v) => writer.write_i32::<BigEndian>(*v)?,
        Payload::Long(v) => writer.write_i64::<BigEndian>(*v)?,
        Payload::Float(v) => writer.write_f32::<BigEndian>(*v)?,
        Payload::Double(v) => writer.write_f64::<BigEndian>(*v)?,
        Payload::ByteArray(bs) => {
            writer.write_len(bs.len(), "byte array")?;
            writer.write_all(bs)?;
        }
        Payload::String(s) => writer.write_size_prefixed_str(s)?,
        Payload::List(list) => {
            writer.write_kind(list.element_kind())?;
            writer.write_len(list.len(), "list")?;
            for item in list {
                write_tag(writer, item, false)?;
            }
        }
        Payload::Compound(compound) => {
            for entry in compound {
                write_tag(writer, entry, true)?;
            }
            writer.write_kind(Kind::End)?;
        }
    }

    Ok(())
}

pub(crate) trait WriteNbt: Write {
    fn write_kind(&mut self, kind: Kind) -> Result<()> {
        self.write_u8(kind.into())?;
        Ok(())
    }

    fn write_size_prefixed_str(&mut self, s: &str) -> Result<()> {
        let len = u16::try_from(s.len()).map_err(|_| Error::length_overflow("string", s.len()))?;
        self.write_u16::<BigEndian>(len)?;
        self.write_all(s.as_bytes())?;
        Ok(())
    }

    fn write_len(&mut self, len: usize, what: &str) -> Result<()> {
        let len = i32::try_from(len).map_err(|_| Error::length_overflow(what, len))?;
        self.write_i32::<BigEndian>(len)?;
        Ok(())
    }
}

impl<T> WriteNbt for T where T: Write {}
