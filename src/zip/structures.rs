use byteorder::{LittleEndian, WriteBytesExt};
use std::io::Write;

use super::error::Result;

/// Version needed to extract a regular stored file (1.0).
pub const VERSION_NEEDED_FILE: u16 = 10;
/// Version needed to extract a directory entry (2.0).
pub const VERSION_NEEDED_DIRECTORY: u16 = 20;

/// "Version made by" field: UNIX host (3) in the high byte, format
/// specification 6.3 (63) in the low byte. The UNIX host byte tells
/// extractors to honor the mode bits in the external attributes.
pub const VERSION_MADE_BY: u16 = (3 << 8) | 63;

/// UNIX mode for directory entries: drwxr-xr-x.
pub const UNIX_MODE_DIRECTORY: u32 = 0o40755;
/// UNIX mode for regular file entries: -rw-r--r--.
pub const UNIX_MODE_FILE: u32 = 0o100644;

/// Local File Header (LFH) - 30 bytes, followed by name and data
pub struct LocalFileHeader {
    pub version_needed: u16,
    pub crc32: u32,
    pub size: u32,
    pub name_len: u16,
}

impl LocalFileHeader {
    pub const SIGNATURE: u32 = 0x04034B50;
    pub const SIZE: usize = 30;

    /// Serialize the fixed 30-byte header, least-significant byte first
    /// throughout. Flags, compression method (stored), timestamps, and the
    /// extra-field length are always zero in this format variant, and the
    /// compressed and uncompressed sizes are always equal.
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        out.write_u32::<LittleEndian>(Self::SIGNATURE)?;
        out.write_u16::<LittleEndian>(self.version_needed)?;
        out.write_u16::<LittleEndian>(0)?; // general-purpose flags
        out.write_u16::<LittleEndian>(0)?; // compression method: stored
        out.write_u16::<LittleEndian>(0)?; // last modified time
        out.write_u16::<LittleEndian>(0)?; // last modified date
        out.write_u32::<LittleEndian>(self.crc32)?;
        out.write_u32::<LittleEndian>(self.size)?; // compressed size
        out.write_u32::<LittleEndian>(self.size)?; // uncompressed size
        out.write_u16::<LittleEndian>(self.name_len)?;
        out.write_u16::<LittleEndian>(0)?; // extra field length
        Ok(())
    }
}

/// Central Directory File Header (CDFH) - 46 bytes, followed by name
pub struct CentralDirectoryHeader {
    pub version_needed: u16,
    pub crc32: u32,
    pub size: u32,
    pub name_len: u16,
    pub unix_mode: u32,
    pub local_header_offset: u32,
}

impl CentralDirectoryHeader {
    pub const SIGNATURE: u32 = 0x02014B50;
    pub const SIZE: usize = 46;

    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        out.write_u32::<LittleEndian>(Self::SIGNATURE)?;
        out.write_u16::<LittleEndian>(VERSION_MADE_BY)?;
        out.write_u16::<LittleEndian>(self.version_needed)?;
        out.write_u16::<LittleEndian>(0)?; // general-purpose flags
        out.write_u16::<LittleEndian>(0)?; // compression method: stored
        out.write_u16::<LittleEndian>(0)?; // last modified time
        out.write_u16::<LittleEndian>(0)?; // last modified date
        out.write_u32::<LittleEndian>(self.crc32)?;
        out.write_u32::<LittleEndian>(self.size)?; // compressed size
        out.write_u32::<LittleEndian>(self.size)?; // uncompressed size
        out.write_u16::<LittleEndian>(self.name_len)?;
        out.write_u16::<LittleEndian>(0)?; // extra field length
        out.write_u16::<LittleEndian>(0)?; // file comment length
        out.write_u16::<LittleEndian>(0)?; // disk number start
        out.write_u16::<LittleEndian>(0)?; // internal attributes
        // External attributes carry the UNIX mode in the high 16 bits.
        out.write_u32::<LittleEndian>(self.unix_mode << 16)?;
        out.write_u32::<LittleEndian>(self.local_header_offset)?;
        Ok(())
    }
}

/// End of Central Directory (EOCD) - 22 bytes, written exactly once
pub struct EndOfCentralDirectory {
    pub total_entries: u16,
    pub cd_size: u32,
    pub cd_offset: u32,
}

impl EndOfCentralDirectory {
    pub const SIGNATURE: u32 = 0x06054B50;
    pub const SIZE: usize = 22;

    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        out.write_u32::<LittleEndian>(Self::SIGNATURE)?;
        out.write_u16::<LittleEndian>(0)?; // number of this disk
        out.write_u16::<LittleEndian>(0)?; // disk where the directory starts
        out.write_u16::<LittleEndian>(self.total_entries)?; // entries on this disk
        out.write_u16::<LittleEndian>(self.total_entries)?; // entries total
        out.write_u32::<LittleEndian>(self.cd_size)?;
        out.write_u32::<LittleEndian>(self.cd_offset)?;
        out.write_u16::<LittleEndian>(0)?; // comment length
        Ok(())
    }
}
