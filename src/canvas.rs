//! Frame, margin masks and tick labels drawn around the converted plot.
//!
//! The four masking rectangles cover everything between the plotting area
//! and the slide edge, hiding geometry that was clamped into the margins.
//! They are added after the plot content so they sit in front of it.

use crate::color_utils::{paint_from_spec, ColorSpec, Paint};
use crate::error::Result;
use crate::group::Group;
use crate::mapper::{DataPoint, GeometryBox, SlidePoint, SlideSize2D};
use crate::models::Axes;
use crate::shapes::{HAlign, MappingContext, Rectangle, Shape, Style, Text, VAlign};
use crate::units::SlideSize;
use serde::{Deserialize, Serialize};

/// Offset of tick labels from the frame, as a fraction of the axis span.
const TICK_LABEL_OFFSET: f64 = 0.01;

/// Line width of the margin rectangles, in points.
const MASK_LINE_WIDTH: f64 = 0.8;

/// Appearance of the canvas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasStyle {
    /// Draw the frame edge and the tick labels.
    pub axis: bool,
    /// Frame line width in points.
    pub frame_line_width: f64,
    pub frame_color: String,
    /// Fill of the masking rectangles.
    pub margin_color: String,
}

impl Default for CanvasStyle {
    fn default() -> Self {
        Self {
            axis: true,
            frame_line_width: 0.8,
            frame_color: "000000".to_string(),
            margin_color: "FFFFFF".to_string(),
        }
    }
}

pub struct Canvas;

impl Canvas {
    /// Frame around `frame` plus the four masks, as a group in draw order
    /// left, right, top, bottom, frame.
    pub fn new(frame: GeometryBox, style: &CanvasStyle, slide_size: SlideSize) -> Result<Group> {
        let edge = if style.axis {
            paint_from_spec(Some(&ColorSpec::Str(style.frame_color.clone())))?
        } else {
            Some(Paint::with_alpha("000000", 0.0))
        };
        let margin = paint_from_spec(Some(&ColorSpec::Str(style.margin_color.clone())))?;

        let (sw, sh) = (slide_size.width_points(), slide_size.height_points());
        let (x, y) = (frame.origin.x, frame.origin.y);
        let (right, bottom) = (frame.max_x(), frame.max_y());
        let mask_style = Style {
            stroke: None,
            fill: margin,
            line_width: MASK_LINE_WIDTH,
        };
        let mask = |name: &str, x: f64, y: f64, w: f64, h: f64| -> Shape {
            Rectangle::new(
                name,
                GeometryBox::new(SlidePoint::new(x, y), SlideSize2D::new(w, h)),
                mask_style.clone(),
                slide_size,
            )
            .into()
        };

        let frame_rect = Rectangle::new(
            "Canvas",
            frame,
            Style {
                stroke: edge,
                fill: None,
                line_width: style.frame_line_width,
            },
            slide_size,
        );
        let children = vec![
            mask("Canvas_left", 0.0, 0.0, x, sh),
            mask("Canvas_right", right, 0.0, (sw - right).max(0.0), sh),
            mask("Canvas_top", 0.0, 0.0, sw, y),
            mask("Canvas_bottom", 0.0, bottom, sw, (sh - bottom).max(0.0)),
            frame_rect.into(),
        ];
        Ok(Group::new("Canvas", children, slide_size))
    }

    /// Canvas for one axes, with its tick labels when `style.axis` is set.
    ///
    /// X tick labels hang just below the frame, y tick labels sit just left
    /// of it; both are placed from the axes' own tick positions.
    pub fn from_axes(axes: &Axes, ctx: &MappingContext, style: &CanvasStyle) -> Result<Group> {
        let frame = ctx.mapper.plot_area().to_box();
        let mut canvas = Canvas::new(frame, style, ctx.slide_size)?;
        if !style.axis {
            return Ok(canvas);
        }

        let (y0, y1) = axes.ylim;
        let below = y0 - TICK_LABEL_OFFSET * (y1 - y0);
        for label in &axes.xticklabels {
            let at = DataPoint::new(label.position, below);
            let text = Text::from_tick_label(label, at, (HAlign::Center, VAlign::Top), ctx)?;
            canvas.add(Some(text.into()));
        }

        let (x0, x1) = axes.xlim;
        let left = x0 - TICK_LABEL_OFFSET * (x1 - x0);
        for label in &axes.yticklabels {
            let at = DataPoint::new(left, label.position);
            let text = Text::from_tick_label(label, at, (HAlign::Right, VAlign::Center), ctx)?;
            canvas.add(Some(text.into()));
        }
        Ok(canvas)
    }
}
