//! nbtree reads and writes the NBT tree format used by *Minecraft* (Alpha era)
//! to store world data such as `level.dat`. A file is a single root compound
//! of named, typed tags which may themselves be compounds or homogeneous lists.
//!
//! * For decoding, see [`de`], or [`from_bytes`] for a byte slice.
//! * For encoding, see [`ser`], or [`to_bytes`].
//! * For the tree itself see [`Tag`], [`Payload`], [`List`] and [`Compound`].
//! * For gzip compressed files, see [`gz`].
//! * For a textual dump of a tree, see [`render`].
//!
//! # Quick example
//!
//! This example prints the tree stored in a gzip compressed `level.dat` and
//! looks up the spawn position.
//!
//!```no_run
//! use nbtree::{error::Result, Payload};
//!
//! fn main() -> Result<()> {
//!     let args: Vec<_> = std::env::args().skip(1).collect();
//!     let level = nbtree::gz::read(&args[0])?;
//!
//!     println!("{}", level);
//!
//!     for axis in ["SpawnX", "SpawnY", "SpawnZ"] {
//!         if let Some(Payload::Int(v)) = level.find(axis).map(|t| t.payload()) {
//!             println!("{}: {}", axis, v);
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Building a tree
//!
//! ```
//! use nbtree::{Compound, Kind, List, Tag};
//!
//! let mut root = Tag::new("root", Compound::new());
//! let compound = root.as_compound_mut().unwrap();
//! compound.push("x", 42i32);
//! compound.push("pos", List::new(Kind::Double, vec![1.0f64.into(), 64.0f64.into()]).unwrap());
//!
//! let bytes = nbtree::to_bytes(&root).unwrap();
//! assert_eq!(nbtree::from_bytes(&bytes).unwrap(), root);
//! ```

use serde::{Deserialize, Serialize};

pub mod de;
pub mod error;
pub mod gz;
pub mod render;
pub mod search;
pub mod ser;

mod tag;

pub use de::{decode_root, decode_root_with_opts, from_bytes, DecodeOptions};
pub use render::RenderOptions;
pub use ser::{encode, to_bytes, to_writer};
pub use tag::*;

#[cfg(test)]
mod test;

use std::convert::TryFrom;

/// The kind of an NBT tag. This does not carry the value or the name of the
/// data. Each kind is identified on the wire by its single byte value.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[repr(u8)]
pub enum Kind {
    /// Represents the end of a Compound object. Never appears in a tree.
    End = 0,
    /// Equivalent to i8.
    Byte = 1,
    /// Equivalent to i16.
    Short = 2,
    /// Equivalent to i32.
    Int = 3,
    /// Equivalent to i64
    Long = 4,
    /// Equivalent to f32.
    Float = 5,
    /// Equivalent to f64.
    Double = 6,
    /// Represents an array of raw bytes.
    ByteArray = 7,
    /// Represents a Unicode string.
    String = 8,
    /// Represents a list of unnamed tags that all have the same kind.
    List = 9,
    /// Represents a struct-like structure of named tags.
    Compound = 10,
}

impl Kind {
    /// Name used for this kind when rendering a tree, eg `TAG_Int`.
    pub fn name(self) -> &'static str {
        match self {
            Kind::End => "TAG_End",
            Kind::Byte => "TAG_Byte",
            Kind::Short => "TAG_Short",
            Kind::Int => "TAG_Int",
            Kind::Long => "TAG_Long",
            Kind::Float => "TAG_Float",
            Kind::Double => "TAG_Double",
            Kind::ByteArray => "TAG_ByteArray",
            Kind::String => "TAG_String",
            Kind::List => "TAG_List",
            Kind::Compound => "TAG_Compound",
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// Written out by hand rather than derived. The vocabulary is fixed, so this
// will not need to change.
impl TryFrom<u8> for Kind {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, ()> {
        use Kind::*;
        Ok(match value {
            0 => End,
            1 => Byte,
            2 => Short,
            3 => Int,
            4 => Long,
            5 => Float,
            6 => Double,
            7 => ByteArray,
            8 => String,
            9 => List,
            10 => Compound,
            11..=u8::MAX => return Err(()),
        })
    }
}

impl From<Kind> for u8 {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::End => 0,
            Kind::Byte => 1,
            Kind::Short => 2,
            Kind::Int => 3,
            Kind::Long => 4,
            Kind::Float => 5,
            Kind::Double => 6,
            Kind::ByteArray => 7,
            Kind::String => 8,
            Kind::List => 9,
            Kind::Compound => 10,
        }
    }
}
