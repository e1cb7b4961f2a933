//! Read-only snapshot of a plotted figure.
//!
//! This is the boundary to the plotting library: an exporter fills these
//! structs (usually as JSON) and the converter only ever reads them. Data
//! coordinates are in the units of the owning axes, rendered extents are in
//! points measured from the upper-left corner of the figure.

use crate::color_utils::ColorSpec;
use serde::{Deserialize, Serialize};

fn default_figure_id() -> String {
    "figure".to_string()
}

fn default_width() -> f64 {
    6.0
}

fn default_height() -> f64 {
    4.0
}

fn default_line_width() -> f64 {
    1.0
}

fn default_font_size() -> f64 {
    10.0
}

fn default_font() -> String {
    "Arial".to_string()
}

fn default_text_color() -> ColorSpec {
    ColorSpec::Str("000000".to_string())
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Figure {
    /// Stable identity used to cache the plotting area.
    #[serde(default = "default_figure_id")]
    pub id: String,
    /// Figure width in inches.
    #[serde(default = "default_width")]
    pub width: f64,
    /// Figure height in inches.
    #[serde(default = "default_height")]
    pub height: f64,
    /// Rendered extents of the axis spines.
    #[serde(default)]
    pub spines: Vec<SpineExtent>,
    #[serde(default)]
    pub axes: Vec<Axes>,
    /// Every drawable object, in traversal order.
    #[serde(default)]
    pub objects: Vec<PlotObject>,
}

/// Bounding box of one rendered spine, in points from the top-left corner.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SpineExtent {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Axes {
    pub xlim: (f64, f64),
    pub ylim: (f64, f64),
    #[serde(default)]
    pub xticklabels: Vec<TickLabel>,
    #[serde(default)]
    pub yticklabels: Vec<TickLabel>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TickLabel {
    pub text: String,
    /// Tick location along its own axis, in data units.
    pub position: f64,
    #[serde(default = "default_font_size")]
    pub fontsize: f64,
    #[serde(default = "default_font")]
    pub fontname: String,
    #[serde(default = "default_text_color")]
    pub color: ColorSpec,
    /// Rendered (width, height) in points, when known.
    #[serde(default)]
    pub extent: Option<(f64, f64)>,
    #[serde(default)]
    pub ha: Option<String>,
    #[serde(default)]
    pub va: Option<String>,
}

/// A drawable object, classified by its concrete kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlotObject {
    #[serde(rename = "line2d")]
    Line2D(LineData),
    Rectangle(RectangleData),
    Polygon(PolygonData),
    Text(TextData),
    QuadMesh(MeshData),
    /// Any kind the converter has no shape for.
    #[serde(other)]
    Unsupported,
}

impl PlotObject {
    /// Index of the axes the object belongs to, if any
    pub fn axes(&self) -> Option<usize> {
        match self {
            PlotObject::Line2D(data) => data.axes,
            PlotObject::Rectangle(data) => data.axes,
            PlotObject::Polygon(data) => data.axes,
            PlotObject::Text(data) => data.axes,
            PlotObject::QuadMesh(data) => data.axes,
            PlotObject::Unsupported => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineData {
    #[serde(default)]
    pub axes: Option<usize>,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    #[serde(default = "default_line_width")]
    pub linewidth: f64,
    pub color: ColorSpec,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RectangleData {
    #[serde(default)]
    pub axes: Option<usize>,
    /// Anchor corner in data units.
    pub xy: (f64, f64),
    pub width: f64,
    pub height: f64,
    #[serde(default = "default_line_width")]
    pub linewidth: f64,
    #[serde(default)]
    pub edgecolor: Option<ColorSpec>,
    #[serde(default)]
    pub facecolor: Option<ColorSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolygonData {
    #[serde(default)]
    pub axes: Option<usize>,
    pub xy: Vec<(f64, f64)>,
    #[serde(default = "default_line_width")]
    pub linewidth: f64,
    #[serde(default)]
    pub edgecolor: Option<ColorSpec>,
    #[serde(default)]
    pub facecolor: Option<ColorSpec>,
    #[serde(default = "default_true")]
    pub fill: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextData {
    #[serde(default)]
    pub axes: Option<usize>,
    pub text: String,
    pub x: f64,
    pub y: f64,
    #[serde(default = "default_font_size")]
    pub fontsize: f64,
    #[serde(default = "default_font")]
    pub fontname: String,
    #[serde(default = "default_text_color")]
    pub color: ColorSpec,
    #[serde(default)]
    pub extent: Option<(f64, f64)>,
    #[serde(default)]
    pub ha: Option<String>,
    #[serde(default)]
    pub va: Option<String>,
}

/// Colormap used to rasterize a mesh
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Colormap {
    #[default]
    Viridis,
    Gray,
}

/// A rectilinear quad mesh (pcolormesh)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeshData {
    #[serde(default)]
    pub axes: Option<usize>,
    /// Column edges, one more than the number of columns.
    pub x_edges: Vec<f64>,
    /// Row edges, one more than the number of rows.
    pub y_edges: Vec<f64>,
    /// Cell values, row-major; `values[row][col]`.
    pub values: Vec<Vec<f64>>,
    #[serde(default)]
    pub cmap: Colormap,
    #[serde(default)]
    pub clim: Option<(f64, f64)>,
}
