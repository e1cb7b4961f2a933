//! Conversions between the packed and unpacked forms of a presentation.
//!
//! A `.pptx` and a `.zip` are the same container under different names, so
//! converting between them is a plain copy. Unpacking additionally breaks
//! the XML parts onto separate lines so they can be read and diffed.

use crate::error::{Error, Result};
use crate::package::{write_archive, PPTX_EXTENSION, ZIP_EXTENSION};
use crate::utils::pretty_print_xml;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipArchive;

/// `path` with `.ext` appended unless it already ends in it.
fn with_suffix(path: &Path, ext: &str) -> PathBuf {
    let path = path.components().as_path();
    if path.extension().is_some_and(|e| e == ext) {
        return path.to_path_buf();
    }
    let mut name = OsString::from(path.as_os_str());
    name.push(".");
    name.push(ext);
    PathBuf::from(name)
}

/// `path`, or `path.ext` when it has no extension at all.
fn with_default_extension(path: &Path, ext: &str) -> PathBuf {
    if path.extension().is_none() {
        path.with_extension(ext)
    } else {
        path.to_path_buf()
    }
}

fn require_file(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(Error::SourceNotFound(path.to_path_buf()))
    }
}

fn require_dir(path: &Path) -> Result<()> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(Error::SourceNotFound(path.to_path_buf()))
    }
}

/// Fails when `target` would be written into `dir` or one of its
/// subdirectories, where the next packing run would pick it up.
fn reject_target_inside(dir: &Path, target: &Path) -> Result<()> {
    let parent = match target.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let Ok(parent) = parent.canonicalize() else {
        return Ok(());
    };
    if parent.starts_with(dir.canonicalize()?) {
        return Err(Error::TargetInsideSource {
            dir: dir.to_path_buf(),
            target: target.to_path_buf(),
        });
    }
    Ok(())
}

fn dir_to_archive(dir: &Path, target: Option<&Path>, ext: &str) -> Result<PathBuf> {
    require_dir(dir)?;
    let target = with_suffix(target.unwrap_or(dir), ext);
    reject_target_inside(dir, &target)?;
    write_archive(dir, &target)?;
    tracing::info!(from = %dir.display(), to = %target.display(), "packed directory");
    Ok(target)
}

/// Pack a directory into `<dir>.pptx` (or `target`, with `.pptx` appended
/// when missing).
pub fn dir_to_pptx(dir: &Path, target: Option<&Path>) -> Result<PathBuf> {
    dir_to_archive(dir, target, PPTX_EXTENSION)
}

/// Pack a directory into `<dir>.zip` (or `target`, with `.zip` appended
/// when missing).
pub fn dir_to_zip(dir: &Path, target: Option<&Path>) -> Result<PathBuf> {
    dir_to_archive(dir, target, ZIP_EXTENSION)
}

fn archive_to_dir(file: &Path, target: Option<&Path>, ext: &str) -> Result<PathBuf> {
    let file = with_default_extension(file, ext);
    require_file(&file)?;
    let target = target
        .map(Path::to_path_buf)
        .unwrap_or_else(|| file.with_extension(""));

    let mut archive = ZipArchive::new(fs::File::open(&file)?)?;
    archive.extract(&target)?;
    let pretty = pretty_print_tree(&target)?;
    tracing::info!(
        from = %file.display(),
        to = %target.display(),
        xml_parts = pretty,
        "unpacked archive"
    );
    Ok(target)
}

/// Pretty-print every `.xml` file below `dir` in place. Returns how many
/// files were rewritten.
fn pretty_print_tree(dir: &Path) -> Result<usize> {
    let mut count = 0;
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            count += pretty_print_tree(&path)?;
        } else if path.extension().is_some_and(|e| e == "xml") {
            let xml = fs::read_to_string(&path)?;
            fs::write(&path, pretty_print_xml(&xml))?;
            count += 1;
        }
    }
    Ok(count)
}

/// Unpack a presentation into a directory named after its stem.
pub fn pptx_to_dir(file: &Path, target: Option<&Path>) -> Result<PathBuf> {
    archive_to_dir(file, target, PPTX_EXTENSION)
}

/// Unpack a zip archive into a directory named after its stem.
pub fn zip_to_dir(file: &Path, target: Option<&Path>) -> Result<PathBuf> {
    archive_to_dir(file, target, ZIP_EXTENSION)
}

fn copy_archive(file: &Path, target: Option<&Path>, from: &str, to: &str) -> Result<PathBuf> {
    let file = with_default_extension(file, from);
    require_file(&file)?;
    let target = target
        .map(Path::to_path_buf)
        .unwrap_or_else(|| file.with_extension(to));
    if target.exists() {
        fs::remove_file(&target)?;
    }
    fs::copy(&file, &target)?;
    tracing::debug!(from = %file.display(), to = %target.display(), "copied archive");
    Ok(target)
}

/// Copy a `.pptx` to a `.zip`, overwriting any existing target.
pub fn pptx_to_zip(file: &Path, target: Option<&Path>) -> Result<PathBuf> {
    copy_archive(file, target, PPTX_EXTENSION, ZIP_EXTENSION)
}

/// Copy a `.zip` to a `.pptx`, overwriting any existing target.
pub fn zip_to_pptx(file: &Path, target: Option<&Path>) -> Result<PathBuf> {
    copy_archive(file, target, ZIP_EXTENSION, PPTX_EXTENSION)
}

/// The three forms a presentation can take on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveFormat {
    Pptx,
    Zip,
    Dir,
}

impl ArchiveFormat {
    pub fn from_name(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "pptx" | "ppt" => Ok(ArchiveFormat::Pptx),
            "zip" => Ok(ArchiveFormat::Zip),
            "dir" | "folder" => Ok(ArchiveFormat::Dir),
            other => Err(Error::UnknownFormat(other.to_string())),
        }
    }

    /// Format of an existing path: directories are `Dir`, files are judged
    /// by their extension.
    pub fn detect(path: &Path) -> Result<Self> {
        if path.is_dir() {
            return Ok(ArchiveFormat::Dir);
        }
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().into_owned())
            .unwrap_or_default();
        match ext.as_str() {
            "" => Err(Error::UnknownFormat(path.display().to_string())),
            ext => Self::from_name(ext),
        }
    }

    /// Convert `source` (of format `self`) into format `to`.
    pub fn convert(self, source: &Path, to: ArchiveFormat, target: Option<&Path>) -> Result<PathBuf> {
        use ArchiveFormat::*;
        match (self, to) {
            (Dir, Pptx) => dir_to_pptx(source, target),
            (Dir, Zip) => dir_to_zip(source, target),
            (Pptx, Dir) => pptx_to_dir(source, target),
            (Zip, Dir) => zip_to_dir(source, target),
            (Pptx, Zip) => pptx_to_zip(source, target),
            (Zip, Pptx) => zip_to_pptx(source, target),
            (from, to) => Err(Error::UnknownFormat(format!(
                "no conversion from {from:?} to {to:?}"
            ))),
        }
    }
}
