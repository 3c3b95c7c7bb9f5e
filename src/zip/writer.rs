//! Low-level ZIP archive writer.
//!
//! This module assembles the binary ZIP structures into a single in-memory
//! byte sequence.
//!
//! ## Writing Strategy
//!
//! ZIP files are written front to back in three phases:
//! 1. The local file section: each entry's local header, name, and payload,
//!    recording the byte offset where each entry begins
//! 2. The Central Directory: one header per entry, in the same order,
//!    referencing the offsets recorded in phase 1
//! 3. The End of Central Directory (EOCD) record, giving the directory's
//!    location, size, and the entry count
//!
//! Before any byte is emitted, the archive layout is computed analytically
//! from the entry name and payload lengths. That single pass both sizes the
//! output buffer (one allocation, no reallocation while writing) and
//! rejects any archive whose counts, sizes, or offsets would overflow the
//! fixed-width header fields. A build therefore either produces a complete
//! archive or nothing.
//!
//! ## Supported Features
//!
//! - Standard ZIP format (PKZIP APPNOTE 6.3.x compatible)
//! - STORED (no compression) method
//! - UNIX permission modes in the central directory
//!
//! ## Limitations
//!
//! - No compression (entries are stored verbatim)
//! - No encryption support
//! - No multi-disk archive support
//! - No ZIP64 extensions: entry count, sizes, and offsets must fit the
//!   16/32-bit fields, and exceeding them is an error rather than a
//!   silently wrapped value

use super::entry::ArchiveEntry;
use super::error::{Result, ZipError};
use super::structures::{
    CentralDirectoryHeader, EndOfCentralDirectory, LocalFileHeader,
};

/// Byte layout of an archive, computed before anything is written.
struct ArchiveLayout {
    /// Total bytes of phase 1, which is also the central directory offset.
    local_section_size: u32,
    /// Total bytes of phase 2.
    central_directory_size: u32,
    /// Size of the complete archive including the trailer.
    total_size: usize,
}

/// Compute the archive layout and validate the format's structural limits.
///
/// Every field the three phases will write is checked here: the entry
/// count against the 16-bit EOCD fields, each payload against the 32-bit
/// size fields, and the section totals against the 32-bit offset and size
/// fields. Failing fast keeps an oversized input from being wrapped into
/// a corrupt archive.
///
/// # Errors
///
/// Returns [`ZipError::TooManyEntries`], [`ZipError::EntryTooLarge`], or
/// [`ZipError::ArchiveTooLarge`] when a limit is exceeded.
fn compute_layout(entries: &[ArchiveEntry]) -> Result<ArchiveLayout> {
    if entries.len() > u16::MAX as usize {
        return Err(ZipError::TooManyEntries {
            count: entries.len(),
        });
    }

    let mut local_section_size: u64 = 0;
    let mut central_directory_size: u64 = 0;

    for entry in entries {
        if entry.data().len() as u64 > u32::MAX as u64 {
            return Err(ZipError::EntryTooLarge {
                name: String::from_utf8_lossy(entry.name()).into_owned(),
                len: entry.data().len() as u64,
            });
        }
        local_section_size +=
            (LocalFileHeader::SIZE + entry.name().len() + entry.data().len()) as u64;
        central_directory_size += (CentralDirectoryHeader::SIZE + entry.name().len()) as u64;
    }

    let total_size = local_section_size + central_directory_size + EndOfCentralDirectory::SIZE as u64;

    // The EOCD stores the directory offset (= local section size) and the
    // directory size as 32-bit fields; an archive past 4 GiB needs ZIP64.
    if local_section_size > u32::MAX as u64
        || central_directory_size > u32::MAX as u64
        || total_size > u32::MAX as u64
    {
        return Err(ZipError::ArchiveTooLarge { size: total_size });
    }

    Ok(ArchiveLayout {
        local_section_size: local_section_size as u32,
        central_directory_size: central_directory_size as u32,
        total_size: total_size as usize,
    })
}

/// Write phase 1: each entry's local header, name bytes, and payload, in
/// input order.
///
/// # Returns
///
/// The local header offset of each entry, index-aligned with `entries`;
/// phase 2 writes these into the central directory.
fn write_local_section(out: &mut Vec<u8>, entries: &[ArchiveEntry]) -> Result<Vec<u32>> {
    let mut offsets = Vec::with_capacity(entries.len());

    for entry in entries {
        // Offsets were validated to fit u32 by the layout pass.
        offsets.push(out.len() as u32);

        let header = LocalFileHeader {
            version_needed: entry.version_needed(),
            crc32: entry.crc32(),
            size: entry.data().len() as u32,
            name_len: entry.name().len() as u16,
        };
        header.write_to(out)?;
        out.extend_from_slice(entry.name());
        out.extend_from_slice(entry.data());
    }

    Ok(offsets)
}

/// Write phase 2: one central directory header + name per entry, in the
/// same order as phase 1, referencing the recorded offsets.
fn write_central_directory(
    out: &mut Vec<u8>,
    entries: &[ArchiveEntry],
    offsets: &[u32],
) -> Result<()> {
    for (entry, &local_header_offset) in entries.iter().zip(offsets) {
        let header = CentralDirectoryHeader {
            version_needed: entry.version_needed(),
            crc32: entry.crc32(),
            size: entry.data().len() as u32,
            name_len: entry.name().len() as u16,
            unix_mode: entry.unix_mode(),
            local_header_offset,
        };
        header.write_to(out)?;
        out.extend_from_slice(entry.name());
    }
    Ok(())
}

/// Build a ZIP archive from an ordered entry list.
///
/// This is the single entry point of the writer. The entries are written
/// in the order given (the archive order is the caller's order; nothing is
/// sorted here), the three phases run to completion synchronously, and the
/// whole archive is returned as one contiguous byte vector. The function
/// is deterministic: equal input always yields byte-identical output. It
/// holds no state across calls.
///
/// # Arguments
///
/// * `entries` - The normalized entries to archive, in archive order
///
/// # Returns
///
/// The complete archive bytes, directly consumable by any standards-
/// compliant ZIP reader.
///
/// # Errors
///
/// Returns a [`ZipError`] if the entry count, an entry size, or a section
/// offset exceeds the format's fixed-width fields. Validation happens
/// before any output is produced; a failed build emits nothing.
///
/// # Example
///
/// ```
/// use zipup::{ArchiveEntry, zip};
///
/// let entries = vec![
///     ArchiveEntry::file("hello.txt", "hello world")?,
///     ArchiveEntry::directory("docs/")?,
/// ];
/// let archive = zip::build(&entries)?;
/// assert_eq!(&archive[0..4], b"PK\x03\x04");
/// # Ok::<(), zipup::ZipError>(())
/// ```
pub fn build(entries: &[ArchiveEntry]) -> Result<Vec<u8>> {
    let layout = compute_layout(entries)?;
    let mut out = Vec::with_capacity(layout.total_size);

    let offsets = write_local_section(&mut out, entries)?;
    debug_assert_eq!(out.len() as u32, layout.local_section_size);

    write_central_directory(&mut out, entries, &offsets)?;

    let eocd = EndOfCentralDirectory {
        total_entries: entries.len() as u16,
        cd_size: layout.central_directory_size,
        cd_offset: layout.local_section_size,
    };
    eocd.write_to(&mut out)?;

    debug_assert_eq!(out.len(), layout.total_size);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zip::crc32;
    use crate::zip::structures::{UNIX_MODE_DIRECTORY, VERSION_NEEDED_DIRECTORY};

    fn read_u16(buf: &[u8], offset: usize) -> u16 {
        u16::from_le_bytes(buf[offset..offset + 2].try_into().unwrap())
    }

    fn read_u32(buf: &[u8], offset: usize) -> u32 {
        u32::from_le_bytes(buf[offset..offset + 4].try_into().unwrap())
    }

    #[test]
    fn empty_archive_is_bare_trailer() {
        let archive = build(&[]).unwrap();
        assert_eq!(archive.len(), EndOfCentralDirectory::SIZE);
        assert_eq!(&archive[0..4], b"PK\x05\x06");
        assert_eq!(read_u16(&archive, 8), 0); // entries on this disk
        assert_eq!(read_u16(&archive, 10), 0); // entries total
        assert_eq!(read_u32(&archive, 12), 0); // directory size
        assert_eq!(read_u32(&archive, 16), 0); // directory offset
    }

    #[test]
    fn single_file_layout() {
        let entries = vec![ArchiveEntry::file(b"a.txt".to_vec(), b"hi".to_vec()).unwrap()];
        let archive = build(&entries).unwrap();

        // 30 + 5 + 2 local, 46 + 5 central, 22 trailer.
        assert_eq!(archive.len(), 110);

        // Local header fields.
        assert_eq!(&archive[0..4], b"PK\x03\x04");
        assert_eq!(read_u16(&archive, 4), 10); // version needed
        let crc = crc32::compute(b"hi");
        assert_eq!(read_u32(&archive, 14), crc);
        assert_eq!(read_u32(&archive, 18), 2); // compressed size
        assert_eq!(read_u32(&archive, 22), 2); // uncompressed size
        assert_eq!(read_u16(&archive, 26), 5); // name length
        assert_eq!(&archive[30..35], b"a.txt");
        assert_eq!(&archive[35..37], b"hi");

        // Central directory starts right after the local section.
        let cd_offset = 37;
        assert_eq!(&archive[cd_offset..cd_offset + 4], b"PK\x01\x02");
        assert_eq!(read_u32(&archive, cd_offset + 16), crc);
        assert_eq!(read_u32(&archive, cd_offset + 42), 0); // local header offset

        // Trailer bookkeeping.
        let eocd = archive.len() - EndOfCentralDirectory::SIZE;
        assert_eq!(read_u16(&archive, eocd + 8), 1);
        assert_eq!(read_u16(&archive, eocd + 10), 1);
        assert_eq!(read_u32(&archive, eocd + 12), 46 + 5);
        assert_eq!(read_u32(&archive, eocd + 16), 37);
    }

    #[test]
    fn directory_entry_versions_and_attrs() {
        let entries = vec![ArchiveEntry::directory(b"folder/".to_vec()).unwrap()];
        let archive = build(&entries).unwrap();

        // Local header: version needed 20, zero sizes and crc.
        assert_eq!(read_u16(&archive, 4), VERSION_NEEDED_DIRECTORY);
        assert_eq!(read_u32(&archive, 14), 0);
        assert_eq!(read_u32(&archive, 18), 0);
        assert_eq!(read_u32(&archive, 22), 0);

        // Central header: external attributes carry mode 040755.
        let cd_offset = 30 + 7;
        let attrs = read_u32(&archive, cd_offset + 38);
        assert_eq!(attrs >> 16, UNIX_MODE_DIRECTORY);
    }

    #[test]
    fn file_then_directory_offsets() {
        let entries = vec![
            ArchiveEntry::file(b"a.txt".to_vec(), b"hi".to_vec()).unwrap(),
            ArchiveEntry::directory(b"folder/".to_vec()).unwrap(),
        ];
        let archive = build(&entries).unwrap();

        let first_local_len = 30 + 5 + 2;
        let second_local_len = 30 + 7;
        let cd_offset = first_local_len + second_local_len;

        // Central entries appear in input order.
        assert_eq!(&archive[cd_offset..cd_offset + 4], b"PK\x01\x02");
        let first_name_start = cd_offset + 46;
        assert_eq!(&archive[first_name_start..first_name_start + 5], b"a.txt");

        let second_cd = cd_offset + 46 + 5;
        assert_eq!(&archive[second_cd..second_cd + 4], b"PK\x01\x02");
        // The second entry's recorded offset is the length of the first
        // entry's entire local section.
        assert_eq!(read_u32(&archive, second_cd + 42), first_local_len as u32);

        // The local header signature really does sit at that offset.
        assert_eq!(
            &archive[first_local_len..first_local_len + 4],
            b"PK\x03\x04"
        );
    }

    #[test]
    fn build_is_deterministic() {
        let entries = vec![
            ArchiveEntry::file(b"x".to_vec(), b"payload".to_vec()).unwrap(),
            ArchiveEntry::directory(b"d/".to_vec()).unwrap(),
            ArchiveEntry::file(b"d/y".to_vec(), vec![0u8; 1000]).unwrap(),
        ];
        assert_eq!(build(&entries).unwrap(), build(&entries).unwrap());
    }

    #[test]
    fn entry_count_over_limit_is_rejected() {
        let entry = ArchiveEntry::file(b"f".to_vec(), Vec::new()).unwrap();
        let entries = vec![entry; u16::MAX as usize + 1];
        let err = build(&entries).unwrap_err();
        assert!(matches!(err, ZipError::TooManyEntries { count } if count == 65536));
    }

    #[test]
    fn entry_count_at_limit_is_accepted() {
        let entry = ArchiveEntry::file(b"f".to_vec(), Vec::new()).unwrap();
        let entries = vec![entry; u16::MAX as usize];
        let archive = build(&entries).unwrap();
        let eocd = archive.len() - EndOfCentralDirectory::SIZE;
        assert_eq!(read_u16(&archive, eocd + 10), u16::MAX);
    }
}
