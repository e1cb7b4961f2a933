//! Length units of the presentation format.
//!
//! Geometry is computed in points (or inches for slide sizes) and only
//! converted to English Metric Units (EMU) when markup is written.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

pub const EMU_PER_INCH: i64 = 914_400;
pub const EMU_PER_POINT: i64 = 12_700;
pub const POINTS_PER_INCH: f64 = (EMU_PER_INCH / EMU_PER_POINT) as f64;

/// Points to EMU, truncated toward zero.
pub fn to_emu(points: f64) -> i64 {
    (points * EMU_PER_POINT as f64) as i64
}

/// Points to EMU for an x/y offset. The extra unit is an empirical rendering
/// correction, not a rounding bias.
pub fn to_emu_offset(points: f64) -> i64 {
    to_emu(points) + 1
}

/// Inches to EMU, truncated toward zero.
pub fn inches_to_emu(inches: f64) -> i64 {
    (inches * EMU_PER_INCH as f64) as i64
}

/// Width and height of the slide in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlideSize {
    pub width: f64,
    pub height: f64,
}

impl SlideSize {
    pub fn new(width: f64, height: f64) -> Result<Self> {
        if !(width > 0.0 && height > 0.0) || !width.is_finite() || !height.is_finite() {
            return Err(Error::InvalidSlideSize { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width_points(&self) -> f64 {
        self.width * POINTS_PER_INCH
    }

    pub fn height_points(&self) -> f64 {
        self.height * POINTS_PER_INCH
    }

    /// (cx, cy) as declared in the presentation part.
    pub fn to_emu(&self) -> (i64, i64) {
        (inches_to_emu(self.width), inches_to_emu(self.height))
    }
}

impl Default for SlideSize {
    fn default() -> Self {
        Self {
            width: 6.0,
            height: 4.0,
        }
    }
}
