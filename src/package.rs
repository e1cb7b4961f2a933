//! Presentation package assembly.
//!
//! A package is built in a scoped working directory: the embedded skeleton
//! is written out, its placeholders substituted and the media files added,
//! then the tree is zipped into a temporary file next to the target and
//! persisted under the final name. Both temporaries are removed on every
//! exit path, and the target only appears once the archive is complete.

use crate::error::Result;
use crate::shapes::RelationshipEntry;
use crate::templates::{render_part, MEDIA_DIR, SKELETON};
use crate::units::SlideSize;
use std::fs;
use std::io::{Seek, Write};
use std::path::{Path, PathBuf};
use tempfile::{NamedTempFile, TempDir};
use zip::write::{SimpleFileOptions, ZipWriter};

pub const PPTX_EXTENSION: &str = "pptx";
pub const ZIP_EXTENSION: &str = "zip";

/// Append the native extension when `path` has none; any other extension
/// is kept as given.
pub fn normalize_target(path: &Path) -> PathBuf {
    if path.extension().is_none() {
        path.with_extension(PPTX_EXTENSION)
    } else {
        path.to_path_buf()
    }
}

/// Write a single-slide presentation to `target`.
///
/// `markup` becomes the slide body and every relationship entry gets its
/// data written to the media folder plus a line in the slide's manifest.
/// Returns the path actually written.
pub fn assemble(
    target: &Path,
    markup: &str,
    relationships: &[RelationshipEntry],
    slide_size: SlideSize,
) -> Result<PathBuf> {
    let target = normalize_target(target);
    let workdir = TempDir::new()?;
    let root = workdir.path();

    let manifest: String = relationships
        .iter()
        .map(RelationshipEntry::manifest_line)
        .collect();
    let slide_emu = slide_size.to_emu();
    for (path, content) in SKELETON {
        let file = root.join(path);
        if let Some(parent) = file.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&file, render_part(path, content, slide_emu, markup, &manifest))?;
    }

    let media = root.join(MEDIA_DIR);
    fs::create_dir_all(&media)?;
    for entry in relationships {
        fs::write(media.join(&entry.target), &entry.data)?;
    }

    write_archive(root, &target)?;
    tracing::info!(
        path = %target.display(),
        media = relationships.len(),
        "wrote presentation"
    );
    Ok(target)
}

/// Write an empty single-slide presentation.
pub fn new_presentation(path: &Path, slide_size: SlideSize) -> Result<PathBuf> {
    assemble(path, "", &[], slide_size)
}

/// Zip the tree under `dir` into `target`, replacing it atomically.
pub fn write_archive(dir: &Path, target: &Path) -> Result<()> {
    let parent = match target.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let staging = NamedTempFile::new_in(parent)?;
    let mut zip = ZipWriter::new(staging);
    add_tree(&mut zip, dir, dir)?;
    let staging = zip.finish()?;
    staging.persist(target)?;
    Ok(())
}

/// Top-down walk: the directory entry, then its files, then each
/// subdirectory in turn. Entries are sorted by name so the archive layout
/// does not depend on the file system.
fn add_tree<W: Write + Seek>(zip: &mut ZipWriter<W>, root: &Path, dir: &Path) -> Result<()> {
    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    if dir != root {
        zip.add_directory(member_name(root, dir), options)?;
    }

    let mut entries: Vec<PathBuf> = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<_>>()?;
    entries.sort();

    let (subdirs, files): (Vec<PathBuf>, Vec<PathBuf>) =
        entries.into_iter().partition(|p| p.is_dir());
    for file in files {
        zip.start_file(member_name(root, &file), options)?;
        zip.write_all(&fs::read(&file)?)?;
    }
    for subdir in subdirs {
        add_tree(zip, root, &subdir)?;
    }
    Ok(())
}

/// Archive member name: relative to `root`, '/'-separated.
fn member_name(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
