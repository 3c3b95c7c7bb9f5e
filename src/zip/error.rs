//! Error types for archive building.

use thiserror::Error;

/// Errors reported while normalizing entries or assembling an archive.
///
/// All variants are detected synchronously inside [`build`](super::build) (or at
/// entry construction) before any output bytes are produced, so a failed build
/// never yields a partial archive.
#[derive(Debug, Error)]
pub enum ZipError {
    /// Entry name is longer than the 16-bit filename-length field allows.
    #[error("entry name is {len} bytes, exceeding the ZIP limit of 65535")]
    NameTooLong { len: usize },

    /// A directory entry (name ending in `/`) carried payload bytes.
    #[error("directory entry {name:?} has {len} bytes of data (directories must be empty)")]
    DirectoryWithData { name: String, len: usize },

    /// More entries than the 16-bit entry-count fields can represent.
    #[error("archive has {count} entries, exceeding the ZIP limit of 65535")]
    TooManyEntries { count: usize },

    /// A single entry's payload does not fit the 32-bit size fields.
    #[error("entry {name:?} is {len} bytes, exceeding the 32-bit ZIP size limit")]
    EntryTooLarge { name: String, len: u64 },

    /// A computed offset or section size overflows the 32-bit header fields.
    ///
    /// This archive format variant has no ZIP64 extensions; writing a wrapped
    /// value would silently corrupt the archive, so the build fails instead.
    #[error("archive would be {size} bytes, exceeding the 32-bit ZIP offset limit")]
    ArchiveTooLarge { size: u64 },

    /// Serialization into the output buffer failed.
    ///
    /// The archive is assembled in memory, so this indicates an internal
    /// invariant violation rather than a user-facing condition.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for archive-building operations.
pub type Result<T> = std::result::Result<T, ZipError>;
