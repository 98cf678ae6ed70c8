//! Reading and writing whole NBT files. Files written by the game are gzip
//! compressed; reading also accepts uncompressed NBT, detected by the absence
//! of the gzip magic bytes.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use log::trace;

use crate::de::{decode_root_with_opts, DecodeOptions};
use crate::error::Result;
use crate::{ser, Tag};

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Read and decode the file at `path`.
pub fn read<P: AsRef<Path>>(path: P) -> Result<Tag> {
    read_with_opts(path, DecodeOptions::default())
}

pub fn read_with_opts<P: AsRef<Path>>(path: P, opts: DecodeOptions) -> Result<Tag> {
    let file = File::open(path)?;
    from_reader_with_opts(BufReader::new(file), opts)
}

/// Decode NBT from the reader, decompressing it first if it is gzip data.
pub fn from_reader<R: Read>(reader: R) -> Result<Tag> {
    from_reader_with_opts(reader, DecodeOptions::default())
}

pub fn from_reader_with_opts<R: Read>(mut reader: R, opts: DecodeOptions) -> Result<Tag> {
    let mut head = Vec::with_capacity(GZIP_MAGIC.len());
    (&mut reader)
        .take(GZIP_MAGIC.len() as u64)
        .read_to_end(&mut head)?;

    // Put the sniffed bytes back in front of the rest of the stream.
    let reader = head.as_slice().chain(reader);

    if head == GZIP_MAGIC {
        trace!("gzip compressed nbt");
        decode_root_with_opts(GzDecoder::new(reader), opts)
    } else {
        trace!("uncompressed nbt");
        decode_root_with_opts(reader, opts)
    }
}

/// Encode and gzip compress `tag` into the file at `path`, replacing it if
/// it exists.
pub fn write<P: AsRef<Path>>(path: P, tag: &Tag) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    to_writer(&mut writer, tag)?;
    writer.flush()?;
    Ok(())
}

/// Encode and gzip compress `tag` to the writer.
pub fn to_writer<W: Write>(writer: W, tag: &Tag) -> Result<()> {
    let mut encoder = GzEncoder::new(writer, Compression::default());
    ser::to_writer(&mut encoder, tag)?;
    encoder.finish()?;
    Ok(())
}
