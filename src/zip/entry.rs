use super::crc32;
use super::error::{Result, ZipError};
use super::structures::{
    UNIX_MODE_DIRECTORY, UNIX_MODE_FILE, VERSION_NEEDED_DIRECTORY, VERSION_NEEDED_FILE,
};

/// Maximum entry name length representable in the 16-bit filename field.
pub const MAX_NAME_LEN: usize = 65535;

/// Whether an entry is a regular file or a directory.
///
/// Derived once from the entry name when the entry is constructed; both
/// header-writing phases read this classification rather than re-inspecting
/// the name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// A single archive member: a name, its payload, and the metadata the
/// headers need.
///
/// Entries are immutable once constructed. The name is a raw byte string
/// written into the archive verbatim, with `/` as the path separator;
/// names ending in `/` denote directories and must carry no data.
#[derive(Debug, Clone)]
pub struct ArchiveEntry {
    name: Vec<u8>,
    data: Vec<u8>,
    kind: EntryKind,
    crc32: u32,
}

impl ArchiveEntry {
    /// Create an entry from a raw (name, data) pair.
    ///
    /// The directory flag is derived from the name's trailing byte and the
    /// CRC-32 of the payload is computed here, so later phases only read
    /// precomputed fields.
    ///
    /// # Errors
    ///
    /// Returns [`ZipError::NameTooLong`] if the name exceeds 65535 bytes,
    /// or [`ZipError::DirectoryWithData`] if a directory name carries
    /// payload bytes.
    pub fn new(name: impl Into<Vec<u8>>, data: impl Into<Vec<u8>>) -> Result<Self> {
        let name = name.into();
        let data = data.into();

        if name.len() > MAX_NAME_LEN {
            return Err(ZipError::NameTooLong { len: name.len() });
        }

        let kind = if name.last() == Some(&b'/') {
            EntryKind::Directory
        } else {
            EntryKind::File
        };

        if kind == EntryKind::Directory && !data.is_empty() {
            return Err(ZipError::DirectoryWithData {
                name: String::from_utf8_lossy(&name).into_owned(),
                len: data.len(),
            });
        }

        // The CRC-32 of empty input is 0, so directory entries get the 0
        // checksum the format expects without a special case.
        let crc32 = crc32::compute(&data);

        Ok(Self {
            name,
            data,
            kind,
            crc32,
        })
    }

    /// Create a regular file entry.
    pub fn file(name: impl Into<Vec<u8>>, data: impl Into<Vec<u8>>) -> Result<Self> {
        Self::new(name, data)
    }

    /// Create a directory entry (the name must end in `/`).
    pub fn directory(name: impl Into<Vec<u8>>) -> Result<Self> {
        Self::new(name, Vec::new())
    }

    pub fn name(&self) -> &[u8] {
        &self.name
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn is_directory(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    pub fn crc32(&self) -> u32 {
        self.crc32
    }

    /// Version-needed-to-extract field for both header regions.
    pub fn version_needed(&self) -> u16 {
        match self.kind {
            EntryKind::Directory => VERSION_NEEDED_DIRECTORY,
            EntryKind::File => VERSION_NEEDED_FILE,
        }
    }

    /// UNIX mode recorded in the central directory's external attributes.
    pub fn unix_mode(&self) -> u32 {
        match self.kind {
            EntryKind::Directory => UNIX_MODE_DIRECTORY,
            EntryKind::File => UNIX_MODE_FILE,
        }
    }
}
