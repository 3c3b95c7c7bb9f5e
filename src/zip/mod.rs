//! ZIP archive assembly.
//!
//! This module provides functionality for building ZIP archives in memory
//! from an ordered list of named byte buffers.
//!
//! ## Architecture
//!
//! The module is organized into four main components:
//!
//! - [`crc32`]: CRC-32 checksum computation for entry payloads
//! - [`structures`]: Data structures representing ZIP format elements
//!   (local headers, central directory headers, EOCD) and their
//!   little-endian serialization
//! - [`entry`]: The archive entry model and its normalization rules
//! - [`writer`]: The three-phase assembler that produces the final bytes
//!
//! ## ZIP Format Overview
//!
//! A ZIP file consists of:
//! 1. Local file headers and stored data for each file
//! 2. A Central Directory with metadata for all files
//! 3. An End of Central Directory (EOCD) record at the end
//!
//! This implementation writes those three regions front to back in a
//! single pass each, threading the running byte offset between phases so
//! the central directory can point back at every local header.
//!
//! ## Supported Features
//!
//! - Standard ZIP format (PKZIP APPNOTE 6.3.x compatible)
//! - STORED (no compression) method
//! - UNIX permission modes readable by standard extractors
//!
//! ## Limitations
//!
//! - No compression, encryption, or multi-disk support
//! - No ZIP64 extensions: limits beyond the 16/32-bit header fields are
//!   reported as errors instead

pub mod crc32;
mod entry;
mod error;
mod structures;
mod writer;

pub use entry::{ArchiveEntry, EntryKind, MAX_NAME_LEN};
pub use error::{Result, ZipError};
pub use structures::*;
pub use writer::build;
