//! Data space to slide space mapping.
//!
//! The plotting area is the rectangle on the slide covered by the axes
//! frame. Data limits are mapped linearly onto it; geometry that leaves the
//! area is pushed into a band half a margin wide around it, where the canvas
//! masking rectangles cover it.

use crate::error::{Error, Result};
use crate::math_utils::interp_extrapolate;
use crate::models::{Figure, SpineExtent};
use euclid::{Box2D, Point2D, Rect, Size2D};
use std::collections::HashMap;

/// Data units of one axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataSpace;

/// Slide coordinates in points, origin at the upper-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideSpace;

pub type DataPoint = Point2D<f64, DataSpace>;
pub type SlidePoint = Point2D<f64, SlideSpace>;
pub type SlideSize2D = Size2D<f64, SlideSpace>;

/// Position (upper-left corner) and size on the slide, in points.
pub type GeometryBox = Rect<f64, SlideSpace>;

/// Make width and height positive, moving the origin so the covered area
/// stays the same.
pub fn normalize_box(mut bbox: GeometryBox) -> GeometryBox {
    if bbox.size.width < 0.0 {
        bbox.origin.x += bbox.size.width;
        bbox.size.width = -bbox.size.width;
    }
    if bbox.size.height < 0.0 {
        bbox.origin.y += bbox.size.height;
        bbox.size.height = -bbox.size.height;
    }
    bbox
}

/// Smallest box containing all points
pub fn bounding_box(points: &[SlidePoint]) -> GeometryBox {
    Box2D::from_points(points.iter().copied()).to_rect()
}

/// The slide region the axes frame covers, in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl PlotArea {
    /// Union of the rendered spine extents.
    pub fn from_spines(spines: &[SpineExtent]) -> Option<Self> {
        let mut iter = spines.iter();
        let first = iter.next()?;
        let init = PlotArea {
            left: first.x0.min(first.x1),
            right: first.x0.max(first.x1),
            top: first.y0.min(first.y1),
            bottom: first.y0.max(first.y1),
        };
        Some(iter.fold(init, |area, s| PlotArea {
            left: area.left.min(s.x0).min(s.x1),
            right: area.right.max(s.x0).max(s.x1),
            top: area.top.min(s.y0).min(s.y1),
            bottom: area.bottom.max(s.y0).max(s.y1),
        }))
    }

    pub fn to_box(&self) -> GeometryBox {
        GeometryBox::new(
            SlidePoint::new(self.left, self.top),
            SlideSize2D::new(self.right - self.left, self.bottom - self.top),
        )
    }

    pub fn contains(&self, p: SlidePoint) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.top && p.y <= self.bottom
    }

    /// True when `bbox` shares at least one point with the area, edges
    /// included.
    pub fn overlaps(&self, bbox: &GeometryBox) -> bool {
        bbox.min_x() <= self.right
            && bbox.max_x() >= self.left
            && bbox.min_y() <= self.bottom
            && bbox.max_y() >= self.top
    }
}

/// Per-session memo of plotting areas keyed by figure identity.
#[derive(Debug, Default)]
pub struct PlotAreaCache {
    areas: HashMap<String, PlotArea>,
}

impl PlotAreaCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plotting area of `figure`, computed from its spines on first use.
    pub fn plot_area(&mut self, figure: &Figure) -> Result<PlotArea> {
        if let Some(area) = self.areas.get(&figure.id) {
            return Ok(*area);
        }
        let area = PlotArea::from_spines(&figure.spines).ok_or_else(|| Error::NoPlotArea {
            figure: figure.id.clone(),
        })?;
        tracing::debug!(figure = %figure.id, ?area, "computed plotting area");
        self.areas.insert(figure.id.clone(), area);
        Ok(area)
    }

    pub fn invalidate(&mut self, figure_id: &str) {
        self.areas.remove(figure_id);
    }

    pub fn clear(&mut self) {
        self.areas.clear();
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}

/// Affine map from the data limits of one axes onto the plotting area.
#[derive(Debug, Clone, Copy)]
pub struct CoordinateMapper {
    area: PlotArea,
    xlim: (f64, f64),
    ylim: (f64, f64),
}

impl CoordinateMapper {
    pub fn new(area: PlotArea, xlim: (f64, f64), ylim: (f64, f64)) -> Result<Self> {
        if xlim.0 == xlim.1 || !xlim.0.is_finite() || !xlim.1.is_finite() {
            return Err(Error::DegenerateAxis {
                axis: "x",
                low: xlim.0,
                high: xlim.1,
            });
        }
        if ylim.0 == ylim.1 || !ylim.0.is_finite() || !ylim.1.is_finite() {
            return Err(Error::DegenerateAxis {
                axis: "y",
                low: ylim.0,
                high: ylim.1,
            });
        }
        Ok(Self { area, xlim, ylim })
    }

    pub fn plot_area(&self) -> PlotArea {
        self.area
    }

    pub fn xlim(&self) -> (f64, f64) {
        self.xlim
    }

    pub fn ylim(&self) -> (f64, f64) {
        self.ylim
    }

    pub fn map_x(&self, x: f64) -> f64 {
        interp_extrapolate(x, self.xlim, (self.area.left, self.area.right))
    }

    /// The lower y limit lands on the bottom edge: slide y grows downwards.
    pub fn map_y(&self, y: f64) -> f64 {
        interp_extrapolate(y, self.ylim, (self.area.bottom, self.area.top))
    }

    pub fn map_point(&self, p: DataPoint) -> SlidePoint {
        SlidePoint::new(self.map_x(p.x), self.map_y(p.y))
    }

    /// Pull a point into the band half a margin wide around the plot area.
    pub fn clamp_point(&self, p: SlidePoint) -> SlidePoint {
        let a = &self.area;
        let x = p.x.max(0.5 * a.left).min(a.right + 0.5 * a.left);
        let y = p.y.max(0.5 * a.top).min(a.bottom + 0.5 * a.top);
        SlidePoint::new(x, y)
    }

    /// Map and clamp a whole path.
    pub fn map_path_clamped(&self, points: &[DataPoint]) -> Vec<SlidePoint> {
        points
            .iter()
            .map(|p| self.clamp_point(self.map_point(*p)))
            .collect()
    }

    /// True when every point lies strictly outside the plot area.
    pub fn all_outside(&self, points: &[SlidePoint]) -> bool {
        points.iter().all(|p| !self.area.contains(*p))
    }

    /// Map a data-space rectangle given by its anchor corner and (signed)
    /// extent. The result is normalized, so inverted axes are handled.
    pub fn map_box(&self, origin: DataPoint, width: f64, height: f64) -> GeometryBox {
        let p0 = self.map_point(origin);
        let p1 = self.map_point(DataPoint::new(origin.x + width, origin.y + height));
        normalize_box(GeometryBox::new(
            p0,
            SlideSize2D::new(p1.x - p0.x, p1.y - p0.y),
        ))
    }
}
