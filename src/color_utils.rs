/// Color normalization and color markup helpers
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A color as the plotting library hands it over.
///
/// Accepts:
/// - "RRGGBB" or "#RRGGBB" hex strings
/// - a named color ("r", "C0", "tab:blue", "steelblue", ...)
/// - a grayscale integer 0-255 or float 0-1
/// - an RGB or RGBA tuple with channels in 0-1
/// - a (hex, alpha) pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    Gray(i64),
    GrayFloat(f64),
    Tuple(Vec<f64>),
    HexAlpha(String, f64),
    Str(String),
}

impl fmt::Display for ColorSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorSpec::Gray(v) => write!(f, "{v}"),
            ColorSpec::GrayFloat(v) => write!(f, "{v}"),
            ColorSpec::Tuple(values) => write!(f, "{values:?}"),
            ColorSpec::HexAlpha(hex, alpha) => write!(f, "({hex:?}, {alpha})"),
            ColorSpec::Str(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<&str> for ColorSpec {
    fn from(s: &str) -> Self {
        ColorSpec::Str(s.to_string())
    }
}

/// A resolved paint: six uppercase hex digits plus an opacity in 0-1.
#[derive(Debug, Clone, PartialEq)]
pub struct Paint {
    pub hex: String,
    pub alpha: f64,
}

impl Paint {
    pub fn opaque(hex: impl Into<String>) -> Self {
        Self {
            hex: hex.into(),
            alpha: 1.0,
        }
    }

    pub fn with_alpha(hex: impl Into<String>, alpha: f64) -> Self {
        Self {
            hex: hex.into(),
            alpha,
        }
    }
}

/// Convert an RGB triple into a six digit uppercase hex string.
///
/// Channels are scaled by `255 / max` and truncated; out of range values are
/// clamped to 0-255.
pub fn rgb_to_hex(triple: [f64; 3], max: f64) -> String {
    triple
        .iter()
        .map(|c| {
            let scaled = (c * 255.0 / max) as i64;
            format!("{:02X}", scaled.clamp(0, 255))
        })
        .collect()
}

/// Split the alpha channel off an RGBA quad and convert the rest to hex.
///
/// Returns the alpha only when `keep_alpha` is set.
pub fn rgba_to_hex(quad: [f64; 4], max: f64, keep_alpha: bool) -> (String, Option<f64>) {
    let hex = rgb_to_hex([quad[0], quad[1], quad[2]], max);
    if keep_alpha {
        (hex, Some(quad[3]))
    } else {
        (hex, None)
    }
}

/// Parse "RRGGBB" into its components
pub fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

const BASE_COLORS: &[(&str, &str)] = &[
    ("b", "0000FF"),
    ("g", "008000"),
    ("r", "FF0000"),
    ("c", "00BFBF"),
    ("m", "BF00BF"),
    ("y", "BFBF00"),
    ("k", "000000"),
    ("w", "FFFFFF"),
];

const TABLEAU_COLORS: &[(&str, &str)] = &[
    ("blue", "1F77B4"),
    ("orange", "FF7F0E"),
    ("green", "2CA02C"),
    ("red", "D62728"),
    ("purple", "9467BD"),
    ("brown", "8C564B"),
    ("pink", "E377C2"),
    ("gray", "7F7F7F"),
    ("olive", "BCBD22"),
    ("cyan", "17BECF"),
];

/// Look up a named color: base letters, the default cycle (C0-C9), the
/// tableau palette and finally the CSS/X11 names.
pub fn named_color(name: &str) -> Option<String> {
    if let Some((_, hex)) = BASE_COLORS.iter().find(|(n, _)| *n == name) {
        return Some(hex.to_string());
    }
    if let Some(index) = name.strip_prefix('C').and_then(|i| i.parse::<usize>().ok()) {
        return TABLEAU_COLORS
            .get(index % TABLEAU_COLORS.len())
            .map(|(_, hex)| hex.to_string());
    }
    if let Some(tab) = name.strip_prefix("tab:") {
        let tab = if tab == "grey" { "gray" } else { tab };
        return TABLEAU_COLORS
            .iter()
            .find(|(n, _)| *n == tab)
            .map(|(_, hex)| hex.to_string());
    }
    palette::named::from_str(&name.to_ascii_lowercase())
        .map(|c| format!("{:02X}{:02X}{:02X}", c.red, c.green, c.blue))
}

fn string_to_hex(s: &str) -> Option<String> {
    if parse_hex(s).is_some() {
        return Some(s.to_ascii_uppercase());
    }
    if let Some(rest) = s.strip_prefix('#') {
        if parse_hex(rest).is_some() {
            return Some(rest.to_ascii_uppercase());
        }
    }
    if let Ok(gray) = s.parse::<f64>() {
        // grayscale given as a string, e.g. "0.75"
        if (0.0..=1.0).contains(&gray) {
            return Some(rgb_to_hex([gray, gray, gray], 1.0));
        }
    }
    named_color(s)
}

/// Normalize any supported color representation to "RRGGBB".
pub fn color_to_hex(color: &ColorSpec) -> Result<String> {
    color_to_paint(color).map(|paint| paint.hex)
}

/// Like [`color_to_hex`] but keeps the alpha channel of RGBA tuples and
/// (hex, alpha) pairs.
pub fn color_to_paint(color: &ColorSpec) -> Result<Paint> {
    let invalid = || Error::InvalidColor(color.to_string());
    match color {
        ColorSpec::Str(s) => string_to_hex(s).map(Paint::opaque).ok_or_else(invalid),
        ColorSpec::Gray(v) if (0..=255).contains(v) => {
            let v = *v as f64;
            Ok(Paint::opaque(rgb_to_hex([v, v, v], 255.0)))
        }
        ColorSpec::GrayFloat(v) if (0.0..=1.0).contains(v) => {
            Ok(Paint::opaque(rgb_to_hex([*v, *v, *v], 1.0)))
        }
        ColorSpec::Tuple(values) => match values.as_slice() {
            [r, g, b] => Ok(Paint::opaque(rgb_to_hex([*r, *g, *b], 1.0))),
            [r, g, b, a] => {
                let (hex, alpha) = rgba_to_hex([*r, *g, *b, *a], 1.0, true);
                Ok(Paint::with_alpha(hex, alpha.unwrap_or(1.0)))
            }
            _ => Err(invalid()),
        },
        ColorSpec::HexAlpha(hex, alpha) => string_to_hex(hex)
            .map(|hex| Paint::with_alpha(hex, *alpha))
            .ok_or_else(invalid),
        _ => Err(invalid()),
    }
}

/// Resolve an optional color into an optional paint. `None`, "none" and
/// "transparent" mean no paint.
pub fn paint_from_spec(color: Option<&ColorSpec>) -> Result<Option<Paint>> {
    match color {
        None => Ok(None),
        Some(ColorSpec::Str(s))
            if s.eq_ignore_ascii_case("none") || s.eq_ignore_ascii_case("transparent") =>
        {
            Ok(None)
        }
        Some(spec) => color_to_paint(spec).map(Some),
    }
}

/// Fill markup for a paint. No paint renders as `<a:noFill/>`.
pub fn colorspec(paint: Option<&Paint>) -> String {
    match paint {
        None => "<a:noFill/>".to_string(),
        Some(paint) => format!(
            r#"<a:solidFill><a:srgbClr val="{}"><a:alpha val="{}"/></a:srgbClr></a:solidFill>"#,
            paint.hex,
            (paint.alpha * 100_000.0) as i64
        ),
    }
}
