use std::iter::FromIterator;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::{search, Kind};

/// A single node of an NBT tree. It owns its name, its value, and for lists
/// and compounds, all of its children.
///
/// Every tag is named except the elements of a [`List`]. The root of a tree
/// is always a named [`Compound`], although its name is usually empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tag {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    payload: Payload,
}

/// The value carried by a tag. There is no variant for `End`, which only
/// exists in the binary format to terminate a compound.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Payload {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(Vec<u8>),
    String(String),
    List(List),
    Compound(Compound),
}

/// Unnamed tags that all share one kind. The element kind is kept even when
/// the list is empty, since it is part of the encoded form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct List {
    element_kind: Kind,
    items: Vec<Tag>,
}

/// Named tags of any kind, kept in the order they were read or added.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Compound {
    entries: Vec<Tag>,
}

impl Tag {
    /// Create a named tag.
    pub fn new(name: impl Into<String>, payload: impl Into<Payload>) -> Self {
        Self {
            name: Some(name.into()),
            payload: payload.into(),
        }
    }

    /// Create a list element. Only lists hold unnamed tags.
    pub(crate) fn unnamed(payload: Payload) -> Self {
        Self {
            name: None,
            payload,
        }
    }

    pub(crate) fn from_parts(name: Option<String>, payload: Payload) -> Self {
        Self { name, payload }
    }

    pub fn kind(&self) -> Kind {
        self.payload.kind()
    }

    /// The name of this tag, or the empty string for list elements.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn is_named(&self) -> bool {
        self.name.is_some()
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    pub fn into_payload(self) -> Payload {
        self.payload
    }

    /// The direct children of a list or compound, in order. Empty for every
    /// other kind.
    pub fn children(&self) -> &[Tag] {
        match &self.payload {
            Payload::List(l) => &l.items,
            Payload::Compound(c) => &c.entries,
            _ => &[],
        }
    }

    pub fn as_compound(&self) -> Option<&Compound> {
        match &self.payload {
            Payload::Compound(c) => Some(c),
            _ => None,
        }
    }

    /// Mutable access to a compound's entries. This is the only way to change
    /// the structure of a tree after it is built.
    pub fn as_compound_mut(&mut self) -> Option<&mut Compound> {
        match &mut self.payload {
            Payload::Compound(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&List> {
        match &self.payload {
            Payload::List(l) => Some(l),
            _ => None,
        }
    }

    /// First descendant with the given name. See [`search::find_first`].
    pub fn find(&self, name: &str) -> Option<&Tag> {
        search::find_first(self, name)
    }

    /// Every descendant with the given name. See [`search::find_all`].
    pub fn find_all(&self, name: &str) -> Vec<&Tag> {
        search::find_all(self, name)
    }
}

impl Payload {
    pub fn kind(&self) -> Kind {
        match self {
            Payload::Byte(_) => Kind::Byte,
            Payload::Short(_) => Kind::Short,
            Payload::Int(_) => Kind::Int,
            Payload::Long(_) => Kind::Long,
            Payload::Float(_) => Kind::Float,
            Payload::Double(_) => Kind::Double,
            Payload::ByteArray(_) => Kind::ByteArray,
            Payload::String(_) => Kind::String,
            Payload::List(_) => Kind::List,
            Payload::Compound(_) => Kind::Compound,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Payload::Byte(v) => Some(v as i64),
            Payload::Short(v) => Some(v as i64),
            Payload::Int(v) => Some(v as i64),
            Payload::Long(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Payload::Byte(v) => Some(v as f64),
            Payload::Short(v) => Some(v as f64),
            Payload::Int(v) => Some(v as f64),
            Payload::Long(v) => Some(v as f64),
            Payload::Float(v) => Some(v as f64),
            Payload::Double(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Payload::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Payload::ByteArray(v) => Some(v),
            _ => None,
        }
    }
}

impl List {
    /// Create a list of the given element kind. Fails if any payload is of a
    /// different kind, or if elements are given for a list of `End`.
    pub fn new(element_kind: Kind, items: Vec<Payload>) -> Result<Self> {
        if element_kind == Kind::End && !items.is_empty() {
            return Err(Error::bad_format("list of End cannot have elements"));
        }

        if let Some(p) = items.iter().find(|p| p.kind() != element_kind) {
            return Err(Error::bad_format(format!(
                "list of {} cannot hold a {}",
                element_kind,
                p.kind()
            )));
        }

        Ok(Self {
            element_kind,
            items: items.into_iter().map(Tag::unnamed).collect(),
        })
    }

    pub fn empty(element_kind: Kind) -> Self {
        Self {
            element_kind,
            items: Vec::new(),
        }
    }

    /// Elements coming from the decoder have already been read as
    /// `element_kind`, so are not checked again.
    pub(crate) fn from_decoded(element_kind: Kind, items: Vec<Tag>) -> Self {
        Self {
            element_kind,
            items,
        }
    }

    pub fn element_kind(&self) -> Kind {
        self.element_kind
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tag> {
        self.items.iter()
    }
}

impl Compound {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a named entry. Names are not required to be unique.
    pub fn push(&mut self, name: impl Into<String>, payload: impl Into<Payload>) {
        self.entries.push(Tag::new(name, payload));
    }

    /// Append an existing tag. Fails if the tag is an unnamed list element,
    /// since compound entries are always named.
    pub fn push_tag(&mut self, tag: Tag) -> Result<()> {
        if !tag.is_named() {
            return Err(Error::bad_format("compound entries must be named"));
        }
        self.entries.push(tag);
        Ok(())
    }

    /// Remove and return the first entry with the given name.
    pub fn remove(&mut self, name: &str) -> Option<Tag> {
        let i = self.entries.iter().position(|t| t.name() == name)?;
        Some(self.entries.remove(i))
    }

    /// First entry with the given name.
    pub fn get(&self, name: &str) -> Option<&Tag> {
        self.entries.iter().find(|t| t.name() == name)
    }

    pub(crate) fn from_decoded(entries: Vec<Tag>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tag> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Tag;
    type IntoIter = std::slice::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a Compound {
    type Item = &'a Tag;
    type IntoIter = std::slice::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for Compound
where
    K: Into<String>,
    V: Into<Payload>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| Tag::new(k, v)).collect(),
        }
    }
}

// ------------- From<T> impls -------------

macro_rules! from {
    ($type:ty, $variant:ident $(, $($part:tt)+)?) => {
        impl From<$type> for Payload {
            fn from(val: $type) -> Self {
                Self::$variant(val$($($part)+)?)
            }
        }
    };
}
from!(i8, Byte);
from!(i16, Short);
from!(i32, Int);
from!(i64, Long);
from!(f32, Float);
from!(f64, Double);
from!(Vec<u8>, ByteArray);
from!(String, String);
from!(&str, String, .to_owned());
from!(List, List);
from!(Compound, Compound);

impl From<bool> for Payload {
    fn from(val: bool) -> Self {
        Self::Byte(i8::from(val))
    }
}
