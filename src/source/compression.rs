//! Transparent decompression for log sources.
//!
//! Rotated access logs routinely arrive compressed, so readers are wrapped
//! with the matching decoder automatically. Detection is extension-first
//! (fast path), falling back to magic bytes for files whose name gives
//! nothing away:
//!
//! - **Gzip** (`.gz`, `.gzip`) -- via `flate2` (feature: `compression-gzip`)
//! - **Zstd** (`.zst`, `.zstd`) -- via `zstd` (feature: `compression-zstd`)
//!
//! With no compression features enabled, [`auto_decompress_reader`] is a
//! plain buffered pass-through.

use anyhow::Result;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Codec {
    #[cfg(feature = "compression-gzip")]
    Gzip,
    #[cfg(feature = "compression-zstd")]
    Zstd,
}

impl Codec {
    const ALL: &'static [Codec] = &[
        #[cfg(feature = "compression-gzip")]
        Codec::Gzip,
        #[cfg(feature = "compression-zstd")]
        Codec::Zstd,
    ];

    fn extensions(self) -> &'static [&'static str] {
        match self {
            #[cfg(feature = "compression-gzip")]
            Codec::Gzip => &[".gz", ".gzip"],
            #[cfg(feature = "compression-zstd")]
            Codec::Zstd => &[".zst", ".zstd"],
        }
    }

    fn magic_bytes(self) -> &'static [u8] {
        match self {
            #[cfg(feature = "compression-gzip")]
            Codec::Gzip => &[0x1f, 0x8b],
            #[cfg(feature = "compression-zstd")]
            Codec::Zstd => &[0x28, 0xb5, 0x2f, 0xfd],
        }
    }

    fn wrap_reader(self, reader: Box<dyn Read>) -> Result<Box<dyn Read>> {
        match self {
            #[cfg(feature = "compression-gzip")]
            Codec::Gzip => Ok(Box::new(flate2::read::GzDecoder::new(reader))),
            #[cfg(feature = "compression-zstd")]
            Codec::Zstd => Ok(Box::new(zstd::stream::read::Decoder::new(reader)?)),
        }
    }
}

/// Detect a codec from the file path extension.
///
/// Matching is case-insensitive and works on multi-part extensions such as
/// `access.log.gz`.
fn detect_from_extension(path: &Path) -> Option<Codec> {
    let path_str = path.to_string_lossy().to_lowercase();
    Codec::ALL
        .iter()
        .copied()
        .find(|codec| codec.extensions().iter().any(|ext| path_str.ends_with(ext)))
}

/// Detect a codec from magic bytes at the start of a stream.
///
/// Peeks at the buffered head of the reader without advancing it.
fn detect_from_magic<R: BufRead>(reader: &mut R) -> Option<Codec> {
    let head = reader.fill_buf().ok()?;
    if head.is_empty() {
        return None;
    }
    Codec::ALL
        .iter()
        .copied()
        .find(|codec| head.starts_with(codec.magic_bytes()))
}

/// Wrap a reader with decompression when the source looks compressed.
///
/// The path extension is consulted first; when it is not recognized, the
/// stream head is sniffed for known magic bytes. Uncompressed sources are
/// returned as a buffered pass-through.
pub fn auto_decompress_reader<R: Read + 'static>(
    reader: R,
    path_hint: &Path,
) -> Result<Box<dyn Read>> {
    if let Some(codec) = detect_from_extension(path_hint) {
        return codec.wrap_reader(Box::new(reader));
    }

    let mut buf_reader = BufReader::new(reader);
    if let Some(codec) = detect_from_magic(&mut buf_reader) {
        return codec.wrap_reader(Box::new(buf_reader));
    }

    Ok(Box::new(buf_reader))
}
