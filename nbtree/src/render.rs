//! Human readable dump of a tree, for diagnostics. This is not a
//! serialization format and cannot be read back.
//!
//! ```text
//! TAG_Compound("Level"): 2 entries
//! {
//!     TAG_Long("Time"): 2400
//!     TAG_List("Pos"): 3 elements of type TAG_Double
//!     {
//!         TAG_Double: 1.5
//!         TAG_Double: 64
//!         TAG_Double: -3.25
//!     }
//! }
//! ```

use std::fmt::{self, Write};

use crate::{Payload, Tag};

/// Options for rendering a tree.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Spaces of indentation per level of nesting.
    pub indent: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { indent: 4 }
    }
}

/// Render a tree with the default options.
pub fn render(tag: &Tag) -> String {
    render_with_opts(tag, &RenderOptions::default())
}

pub fn render_with_opts(tag: &Tag, opts: &RenderOptions) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_tree(&mut out, tag, opts);
    out
}

/// Write the rendering of `tag` and its children to `out`, one line per tag.
pub fn write_tree<W: Write>(out: &mut W, tag: &Tag, opts: &RenderOptions) -> fmt::Result {
    write_at(out, tag, opts, 0)
}

fn write_at<W: Write>(out: &mut W, tag: &Tag, opts: &RenderOptions, depth: usize) -> fmt::Result {
    let pad = depth * opts.indent;

    write!(out, "{:pad$}{}", "", tag.kind(), pad = pad)?;
    if tag.is_named() {
        write!(out, "({:?})", tag.name())?;
    }
    write!(out, ": ")?;

    match tag.payload() {
        Payload::Byte(v) => writeln!(out, "{}", v),
        Payload::Short(v) => writeln!(out, "{}", v),
        Payload::Int(v) => writeln!(out, "{}", v),
        Payload::Long(v) => writeln!(out, "{}", v),
        Payload::Float(v) => writeln!(out, "{}", v),
        Payload::Double(v) => writeln!(out, "{}", v),
        Payload::ByteArray(bs) => writeln!(out, "[{} bytes]", bs.len()),
        Payload::String(s) => writeln!(out, "{:?}", s),
        Payload::List(list) => {
            writeln!(
                out,
                "{} elements of type {}",
                list.len(),
                list.element_kind()
            )?;
            write_children(out, tag, opts, depth)
        }
        Payload::Compound(compound) => {
            writeln!(out, "{} entries", compound.len())?;
            write_children(out, tag, opts, depth)
        }
    }
}

fn write_children<W: Write>(
    out: &mut W,
    tag: &Tag,
    opts: &RenderOptions,
    depth: usize,
) -> fmt::Result {
    let pad = depth * opts.indent;

    writeln!(out, "{:pad$}{{", "", pad = pad)?;
    for child in tag.children() {
        write_at(out, child, opts, depth + 1)?;
    }
    writeln!(out, "{:pad$}}}", "", pad = pad)
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tree(f, self, &RenderOptions::default())
    }
}
