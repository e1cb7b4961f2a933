//! Error types for slideplot
//!
//! Everything the library can fail with lives in one enum. Unsupported plot
//! object kinds are not errors: they are skipped while the scene is built.

use std::path::PathBuf;
use thiserror::Error;

/// Library error type
#[derive(Error, Debug)]
pub enum Error {
    /// Input matched no recognized color representation
    #[error("invalid color {0}")]
    InvalidColor(String),

    /// Removing a shape that is not a child of the group
    #[error("group does not contain object {name}")]
    MissingGroupMember {
        /// Display name of the shape that was looked up.
        name: String,
    },

    /// Slide dimensions must both be positive
    #[error("invalid slide size {width}x{height} (inches)")]
    InvalidSlideSize {
        /// Requested width in inches.
        width: f64,
        /// Requested height in inches.
        height: f64,
    },

    /// Axis limits with zero span cannot be interpolated
    #[error("degenerate {axis} axis limits ({low}, {high})")]
    DegenerateAxis {
        /// "x" or "y".
        axis: &'static str,
        /// Lower data limit.
        low: f64,
        /// Upper data limit.
        high: f64,
    },

    /// The figure exposes no spine extents to derive the plotting area from
    #[error("figure {figure} has no spine extents")]
    NoPlotArea {
        /// Identity of the figure.
        figure: String,
    },

    /// Unknown archive/directory format name or extension
    #[error("unknown format: {0}")]
    UnknownFormat(String),

    /// Conversion source does not exist
    #[error("source not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    /// Packing a directory into an archive that would land inside it
    #[error("target {} lies inside source directory {}", .target.display(), .dir.display())]
    TargetInsideSource {
        /// Directory being packed.
        dir: PathBuf,
        /// Requested archive path.
        target: PathBuf,
    },

    /// Raster encoding or decoding failed
    #[error("raster error: {0}")]
    Raster(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Zip(#[from] zip::result::ZipError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Persist(#[from] tempfile::PersistError),
}

pub type Result<T> = std::result::Result<T, Error>;
