//! Rasterization of 2D scalar fields (pcolormesh) into embedded images.
//!
//! The presentation format has no heat-map primitive, so every cell that
//! overlaps the axis limits becomes one pixel of a PNG which is then placed
//! over the covered part of the plotting area.

use crate::error::{Error, Result};
use crate::mapper::{DataPoint, GeometryBox, SlidePoint, SlideSize2D};
use crate::math_utils::{finite_range, normalize};
use crate::models::{Colormap, MeshData};
use crate::shapes::{Image, MappingContext};
use crate::utils::{encode_png, random_token};
use palette::{LinSrgb, Mix, Srgb};
use tiny_skia::{ColorU8, Pixmap};

const VIRIDIS: &[(f32, f32, f32)] = &[
    (0.267, 0.005, 0.329),
    (0.283, 0.141, 0.458),
    (0.254, 0.265, 0.530),
    (0.207, 0.372, 0.553),
    (0.164, 0.471, 0.558),
    (0.128, 0.567, 0.551),
    (0.135, 0.659, 0.518),
    (0.267, 0.749, 0.441),
    (0.478, 0.821, 0.318),
    (0.741, 0.873, 0.150),
    (0.993, 0.906, 0.144),
];

const GRAY: &[(f32, f32, f32)] = &[(0.0, 0.0, 0.0), (1.0, 1.0, 1.0)];

impl Colormap {
    fn stops(self) -> &'static [(f32, f32, f32)] {
        match self {
            Colormap::Viridis => VIRIDIS,
            Colormap::Gray => GRAY,
        }
    }

    /// Color for a normalized value in 0-1, interpolated in linear light.
    pub fn sample(self, t: f32) -> Srgb<u8> {
        let stops = self.stops();
        let scaled = t.clamp(0.0, 1.0) * (stops.len() - 1) as f32;
        let index = (scaled.floor() as usize).min(stops.len() - 2);
        let frac = scaled - index as f32;
        let lin = |(r, g, b): (f32, f32, f32)| -> LinSrgb { Srgb::new(r, g, b).into_linear() };
        let mixed = lin(stops[index]).mix(lin(stops[index + 1]), frac);
        Srgb::<f32>::from_linear(mixed).into_format()
    }
}

/// Cell indices overlapping `[low, high]` together with the covered span.
fn visible_cells(edges: &[f64], limits: (f64, f64)) -> (Vec<usize>, Option<(f64, f64)>) {
    let (low, high) = (limits.0.min(limits.1), limits.0.max(limits.1));
    let mut cells = Vec::new();
    let mut span: Option<(f64, f64)> = None;
    for (i, pair) in edges.windows(2).enumerate() {
        let (a, b) = (pair[0].min(pair[1]), pair[0].max(pair[1]));
        if b <= low || a >= high {
            continue;
        }
        cells.push(i);
        let (a, b) = (a.max(low), b.min(high));
        span = Some(match span {
            None => (a, b),
            Some((lo, hi)) => (lo.min(a), hi.max(b)),
        });
    }
    (cells, span)
}

fn center(edges: &[f64], cell: usize) -> f64 {
    0.5 * (edges[cell] + edges[cell + 1])
}

pub struct Mesh;

impl Mesh {
    /// Rasterize a quad mesh into an [`Image`]. Returns `None` when no cell
    /// lies inside the axis limits.
    pub fn from_source(data: &MeshData, ctx: &MappingContext) -> Result<Option<Image>> {
        let rows = data.values.len();
        let cols = data.values.first().map_or(0, Vec::len);
        if data.y_edges.len() != rows + 1
            || data.x_edges.len() != cols + 1
            || data.values.iter().any(|row| row.len() != cols)
        {
            return Err(Error::Raster(format!(
                "mesh of {rows}x{cols} cells needs {} x edges and {} y edges",
                cols + 1,
                rows + 1
            )));
        }

        let mapper = &ctx.mapper;
        let (mut col_ids, x_span) = visible_cells(&data.x_edges, mapper.xlim());
        let (mut row_ids, y_span) = visible_cells(&data.y_edges, mapper.ylim());
        let (Some((x0, x1)), Some((y0, y1))) = (x_span, y_span) else {
            tracing::debug!("mesh outside axis limits, skipped");
            return Ok(None);
        };

        // pixel order follows slide order, which mirrors inverted axes
        col_ids.sort_by(|a, b| {
            mapper
                .map_x(center(&data.x_edges, *a))
                .total_cmp(&mapper.map_x(center(&data.x_edges, *b)))
        });
        row_ids.sort_by(|a, b| {
            mapper
                .map_y(center(&data.y_edges, *a))
                .total_cmp(&mapper.map_y(center(&data.y_edges, *b)))
        });

        let (lo, hi) = match data.clim {
            Some(clim) => clim,
            None => finite_range(data.values.iter().flatten().copied()).unwrap_or((0.0, 1.0)),
        };

        let width = col_ids.len() as u32;
        let height = row_ids.len() as u32;
        let mut pixmap = Pixmap::new(width, height)
            .ok_or_else(|| Error::Raster(format!("Failed to create {width}x{height} pixmap")))?;
        let pixels = pixmap.pixels_mut();
        for (py, row) in row_ids.iter().enumerate() {
            for (px, col) in col_ids.iter().enumerate() {
                let value = data.values[*row][*col];
                let color = if value.is_finite() {
                    let c = data.cmap.sample(normalize(value, lo, hi) as f32);
                    ColorU8::from_rgba(c.red, c.green, c.blue, 255)
                } else {
                    ColorU8::from_rgba(0, 0, 0, 0)
                };
                pixels[py * width as usize + px] = color.premultiply();
            }
        }
        let png = encode_png(&pixmap)?;

        let p0 = mapper.map_point(DataPoint::new(x0, y0));
        let p1 = mapper.map_point(DataPoint::new(x1, y1));
        let bounds = GeometryBox::new(
            SlidePoint::new(p0.x, p0.y),
            SlideSize2D::new(p1.x - p0.x, p1.y - p0.y),
        );
        tracing::debug!(width, height, "rasterized mesh");
        Ok(Some(Image::from_bytes(
            format!("mplmesh_{}", random_token(5)),
            "png",
            png,
            bounds,
            ctx.slide_size,
        )))
    }
}
