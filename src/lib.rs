//! # zipup
//!
//! A Rust zip utility that packs files and directories into store-only
//! ZIP archives.
//!
//! This library builds a complete ZIP archive in memory from an ordered
//! list of named byte buffers. Entries are stored uncompressed, each with
//! a CRC-32 checksum, and the archive carries a standard central directory
//! so the output opens in any ZIP-reading tool. Entry order in the archive
//! is exactly the order the caller supplies.
//!
//! ## Features
//!
//! - Build archives from in-memory (name, data) pairs
//! - Directory entries (names ending in `/`) with UNIX permission modes
//! - Deterministic output: equal input yields byte-identical archives
//! - Fail-fast validation of the format's 16/32-bit structural limits
//!
//! ## Example
//!
//! ```
//! use zipup::{ArchiveEntry, zip};
//!
//! fn main() -> Result<(), zipup::ZipError> {
//!     let entries = vec![
//!         ArchiveEntry::directory("notes/")?,
//!         ArchiveEntry::file("notes/today.txt", "write more Rust")?,
//!     ];
//!
//!     let archive = zip::build(&entries)?;
//!     assert_eq!(&archive[0..4], b"PK\x03\x04");
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod zip;

pub use cli::Cli;
pub use zip::{ArchiveEntry, EntryKind, ZipError};
