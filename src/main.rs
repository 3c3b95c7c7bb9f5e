//! Main entry point for the zipup CLI application.
//!
//! This binary provides a command-line interface for packing local files
//! and directories into a store-only ZIP archive.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::fs;
use std::path::{Component, Path};

use zipup::{ArchiveEntry, Cli, zip};

/// Application entry point.
///
/// Parses command-line arguments, gathers the requested files into an
/// ordered entry list, builds the archive in memory, and writes it out.
fn main() -> Result<()> {
    let cli = Cli::parse();

    // Refuse to clobber an existing archive unless -o is given.
    let output_path = Path::new(&cli.archive);
    if output_path.exists() && !cli.overwrite {
        bail!("{} already exists (use -o to overwrite)", cli.archive);
    }

    if cli.paths.is_empty() {
        bail!("nothing to do: no input files given");
    }

    // Gather entries in argument order; the archive preserves this order.
    let prefix = cli.entry_prefix();
    let mut entries = Vec::new();
    for path in &cli.paths {
        collect_path(Path::new(path), &prefix, &cli, &mut entries)?;
    }

    let archive = zip::build(&entries)
        .with_context(|| format!("failed to build {}", cli.archive))?;

    fs::write(output_path, &archive)
        .with_context(|| format!("failed to write {}", cli.archive))?;

    if !cli.is_quiet() {
        eprintln!(
            "{}: {} entries, {}",
            cli.archive,
            entries.len(),
            format_size(archive.len() as u64)
        );
    }

    Ok(())
}

/// Add one filesystem path to the entry list.
///
/// Regular files become file entries with their full contents. Directories
/// become a directory entry followed by their children in sorted name
/// order, but only when `-r` was given; otherwise they are skipped with a
/// notice, matching the convention of the classic zip tools.
///
/// # Arguments
///
/// * `path` - The filesystem path to add
/// * `prefix` - Archive-path prefix applied to every entry name
/// * `cli` - Parsed command-line arguments
/// * `entries` - The ordered entry list being accumulated
fn collect_path(
    path: &Path,
    prefix: &str,
    cli: &Cli,
    entries: &mut Vec<ArchiveEntry>,
) -> Result<()> {
    let metadata = fs::metadata(path)
        .with_context(|| format!("cannot read {}", path.display()))?;

    if metadata.is_dir() {
        if !cli.recursive {
            if !cli.is_quiet() {
                eprintln!("Skipping: {}/ (use -r to recurse)", path.display());
            }
            return Ok(());
        }
        collect_directory(path, prefix, cli, entries)
    } else {
        let name = format!("{prefix}{}", entry_name(path));
        let data = fs::read(path)
            .with_context(|| format!("cannot read {}", path.display()))?;

        if !cli.is_quiet() {
            println!("  adding: {name}");
        }
        entries.push(ArchiveEntry::file(name, data)?);
        Ok(())
    }
}

/// Recursively add a directory and its contents.
///
/// Emits the directory entry itself (name ending in `/`) first, then
/// visits children sorted by name so repeated runs produce identical
/// archives.
fn collect_directory(
    path: &Path,
    prefix: &str,
    cli: &Cli,
    entries: &mut Vec<ArchiveEntry>,
) -> Result<()> {
    let name = format!("{prefix}{}/", entry_name(path));
    if !cli.is_quiet() {
        println!("  adding: {name}");
    }
    entries.push(ArchiveEntry::directory(name)?);

    let mut children: Vec<_> = fs::read_dir(path)
        .with_context(|| format!("cannot read {}", path.display()))?
        .collect::<std::io::Result<_>>()?;
    children.sort_by_key(|child| child.file_name());

    for child in children {
        collect_path(&child.path(), prefix, cli, entries)?;
    }

    Ok(())
}

/// Derive an archive entry name from a filesystem path.
///
/// Path segments are joined with `/` regardless of the host separator,
/// and leading root, drive, `.`, and `..` components are dropped so the
/// archive never contains absolute or escaping paths.
fn entry_name(path: &Path) -> String {
    let segments: Vec<String> = path
        .components()
        .filter_map(|component| match component {
            Component::Normal(segment) => Some(segment.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    segments.join("/")
}

/// Format a byte size into a human-readable string.
///
/// Automatically selects the appropriate unit (bytes, KB, MB, GB)
/// based on the size magnitude.
fn format_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{} bytes", size)
    }
}
