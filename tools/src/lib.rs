use std::error::Error;
use std::io::Write;
use std::path::Path;

use log::info;
use nbtree::{DecodeOptions, Tag};

pub type Result<T> = std::result::Result<T, Box<dyn Error>>;

/// How a tree is written out by [`dump`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// The indented, one tag per line rendering.
    Text,
    /// Pretty printed JSON of the whole tree.
    Json,
}

/// Read an NBT file, gzip compressed or not.
pub fn load(path: &Path, opts: DecodeOptions) -> Result<Tag> {
    let tag = nbtree::gz::read_with_opts(path, opts)?;
    info!(
        "read {:?} from {}: {} entries",
        tag.name(),
        path.display(),
        tag.children().len()
    );
    Ok(tag)
}

/// Write `tag` to `out` in the given format.
pub fn dump<W: Write>(tag: &Tag, format: Format, mut out: W) -> Result<()> {
    match format {
        Format::Text => write!(out, "{}", tag)?,
        Format::Json => {
            serde_json::to_writer_pretty(&mut out, tag)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}
