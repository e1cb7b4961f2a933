//! Renderable slide shapes.
//!
//! Every shape knows how to write itself as a self-contained slide markup
//! fragment and which media relationships it needs. Shapes built from plot
//! objects go through the [`CoordinateMapper`] of their axes and may come
//! back as `None` when they fall entirely outside the plotting area.

use crate::color_utils::{color_to_paint, colorspec, paint_from_spec, Paint};
use crate::error::Result;
use crate::group::Group;
use crate::mapper::{
    bounding_box, normalize_box, CoordinateMapper, DataPoint, GeometryBox, SlidePoint,
    SlideSize2D,
};
use crate::models::{LineData, PolygonData, RectangleData, TextData, TickLabel};
use crate::units::{to_emu, to_emu_offset, SlideSize};
use crate::utils::{escape_xml, png_dimensions, random_token};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

const IMAGE_RELATIONSHIP_TYPE: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/image";

/// Default image size when none is given: EMU per source pixel.
const EMU_PER_PIXEL: f64 = 10_000.0;

/// Line width of the (invisible) outline of a text box, in points.
const TEXT_BOX_LINE_WIDTH: f64 = 0.2;

/// Rendered text extents are enlarged by this factor to avoid wrapping.
const TEXT_EXTENT_PADDING: f64 = 1.1;

/// Process-unique identity of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeId(u64);

impl ShapeId {
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        ShapeId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

impl std::fmt::Display for ShapeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "shape #{}", self.0)
    }
}

/// Everything the package needs to embed one media file
#[derive(Debug, Clone, PartialEq)]
pub struct RelationshipEntry {
    pub id: String,
    pub data: Vec<u8>,
    pub target: String,
}

impl RelationshipEntry {
    /// The `<Relationship>` line for the slide's relationship part.
    pub fn manifest_line(&self) -> String {
        format!(
            r#"<Relationship Id="{}" Type="{}" Target="../media/{}"/>"#,
            self.id,
            IMAGE_RELATIONSHIP_TYPE,
            escape_xml(&self.target)
        )
    }
}

/// Stroke, fill and line width of a shape. `None` paints nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub stroke: Option<Paint>,
    pub fill: Option<Paint>,
    /// Points.
    pub line_width: f64,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            stroke: Some(Paint::opaque("000000")),
            fill: None,
            line_width: 1.0,
        }
    }
}

/// Mapping state shared by all objects of one axes
#[derive(Debug, Clone, Copy)]
pub struct MappingContext {
    pub mapper: CoordinateMapper,
    pub slide_size: SlideSize,
}

fn xfrm(bounds: &GeometryBox) -> String {
    format!(
        r#"<a:xfrm><a:off x="{}" y="{}"/><a:ext cx="{}" cy="{}"/></a:xfrm>"#,
        to_emu_offset(bounds.origin.x),
        to_emu_offset(bounds.origin.y),
        to_emu(bounds.size.width),
        to_emu(bounds.size.height)
    )
}

/// Open or closed polyline with its own bounding box
#[derive(Debug, Clone)]
pub struct Line {
    id: ShapeId,
    pub name: String,
    pub points: Vec<SlidePoint>,
    pub style: Style,
    pub closed: bool,
    pub slide_size: SlideSize,
}

impl Line {
    pub fn new(
        name: impl Into<String>,
        points: Vec<SlidePoint>,
        style: Style,
        closed: bool,
        slide_size: SlideSize,
    ) -> Self {
        Self {
            id: ShapeId::next(),
            name: name.into(),
            points,
            style,
            closed,
            slide_size,
        }
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn bounds(&self) -> GeometryBox {
        bounding_box(&self.points)
    }

    /// Convert a plotted line. Returns `None` when no point is inside the
    /// plotting area.
    pub fn from_source(data: &LineData, ctx: &MappingContext) -> Result<Option<Self>> {
        let points: Vec<DataPoint> = data
            .x
            .iter()
            .zip(&data.y)
            .map(|(x, y)| DataPoint::new(*x, *y))
            .collect();
        let mapped = ctx.mapper.map_path_clamped(&points);
        if ctx.mapper.all_outside(&mapped) {
            tracing::debug!(points = mapped.len(), "line outside plotting area, skipped");
            return Ok(None);
        }
        let style = Style {
            stroke: Some(color_to_paint(&data.color)?),
            fill: None,
            line_width: data.linewidth,
        };
        Ok(Some(Self::new(
            format!("mplline_{}", random_token(5)),
            mapped,
            style,
            false,
            ctx.slide_size,
        )))
    }

    /// Path commands relative to the upper-left corner of the bounding box.
    pub fn path_markup(&self) -> String {
        let Some((first, rest)) = self.points.split_first() else {
            return String::new();
        };
        let origin = self.bounds().origin;
        let rel = |p: &SlidePoint| (to_emu(p.x - origin.x), to_emu(p.y - origin.y));

        let (x, y) = rel(first);
        let mut path = format!("<a:moveTo><a:pt x=\"{x}\" y=\"{y}\"/></a:moveTo>\n");
        for p in rest {
            let (x, y) = rel(p);
            path.push_str(&format!("<a:lnTo><a:pt x=\"{x}\" y=\"{y}\"/></a:lnTo>\n"));
        }
        if self.closed {
            path.push_str("<a:close/>\n");
        }
        path
    }

    fn write_markup(&self, shape_id: u32, out: &mut String) {
        let bounds = self.bounds();
        let (cx, cy) = (to_emu(bounds.size.width), to_emu(bounds.size.height));
        out.push_str(&format!(
            concat!(
                r#"<p:sp><p:nvSpPr><p:cNvPr id="{}" name="{}"/><p:cNvSpPr/><p:nvPr/></p:nvSpPr>"#,
                "<p:spPr>{}",
                r#"<a:custGeom><a:avLst/><a:gdLst/><a:ahLst/><a:cxnLst/><a:rect l="0" t="0" r="r" b="b"/>"#,
                "<a:pathLst><a:path w=\"{}\" h=\"{}\">\n{}</a:path></a:pathLst></a:custGeom>",
                r#"{}<a:ln w="{}">{}</a:ln></p:spPr></p:sp>"#
            ),
            shape_id,
            escape_xml(&self.name),
            xfrm(&bounds),
            cx,
            cy,
            self.path_markup(),
            colorspec(self.style.fill.as_ref()),
            to_emu(self.style.line_width),
            colorspec(self.style.stroke.as_ref()),
        ));
    }
}

/// A line that is always closed
#[derive(Debug, Clone)]
pub struct Polygon(Line);

impl Polygon {
    pub fn new(
        name: impl Into<String>,
        points: Vec<SlidePoint>,
        style: Style,
        slide_size: SlideSize,
    ) -> Self {
        Polygon(Line::new(name, points, style, true, slide_size))
    }

    pub fn line(&self) -> &Line {
        &self.0
    }

    pub fn from_source(data: &PolygonData, ctx: &MappingContext) -> Result<Option<Self>> {
        let points: Vec<DataPoint> = data.xy.iter().map(|(x, y)| DataPoint::new(*x, *y)).collect();
        let mapped = ctx.mapper.map_path_clamped(&points);
        if ctx.mapper.all_outside(&mapped) {
            tracing::debug!(points = mapped.len(), "polygon outside plotting area, skipped");
            return Ok(None);
        }
        let fill = if data.fill {
            paint_from_spec(data.facecolor.as_ref())?
        } else {
            None
        };
        let style = Style {
            stroke: paint_from_spec(data.edgecolor.as_ref())?,
            fill,
            line_width: data.linewidth,
        };
        Ok(Some(Self::new(
            format!("mplpolygon_{}", random_token(5)),
            mapped,
            style,
            ctx.slide_size,
        )))
    }
}

/// Axis aligned rectangle
#[derive(Debug, Clone)]
pub struct Rectangle {
    id: ShapeId,
    pub name: String,
    pub bounds: GeometryBox,
    pub style: Style,
    pub slide_size: SlideSize,
}

impl Rectangle {
    /// The box is normalized, so a negative width or height is accepted.
    pub fn new(
        name: impl Into<String>,
        bounds: GeometryBox,
        style: Style,
        slide_size: SlideSize,
    ) -> Self {
        Self {
            id: ShapeId::next(),
            name: name.into(),
            bounds: normalize_box(bounds),
            style,
            slide_size,
        }
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn from_source(data: &RectangleData, ctx: &MappingContext) -> Result<Option<Self>> {
        let mapped = ctx
            .mapper
            .map_box(DataPoint::new(data.xy.0, data.xy.1), data.width, data.height);
        if !ctx.mapper.plot_area().overlaps(&mapped) {
            tracing::debug!(?mapped, "rectangle outside plotting area, skipped");
            return Ok(None);
        }
        let corners = [
            ctx.mapper.clamp_point(mapped.min()),
            ctx.mapper.clamp_point(mapped.max()),
        ];
        let style = Style {
            stroke: paint_from_spec(data.edgecolor.as_ref())?,
            fill: paint_from_spec(data.facecolor.as_ref())?,
            line_width: data.linewidth,
        };
        Ok(Some(Self::new(
            format!("mplrect_{}", random_token(5)),
            bounding_box(&corners),
            style,
            ctx.slide_size,
        )))
    }

    fn write_markup(&self, shape_id: u32, out: &mut String) {
        out.push_str(&format!(
            concat!(
                r#"<p:sp><p:nvSpPr><p:cNvPr id="{}" name="{}"/><p:cNvSpPr/><p:nvPr/></p:nvSpPr>"#,
                r#"<p:spPr>{}<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#,
                r#"{}<a:ln w="{}">{}</a:ln></p:spPr></p:sp>"#
            ),
            shape_id,
            escape_xml(&self.name),
            xfrm(&self.bounds),
            colorspec(self.style.fill.as_ref()),
            to_emu(self.style.line_width),
            colorspec(self.style.stroke.as_ref()),
        ));
    }
}

/// Horizontal text alignment relative to the anchor point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HAlign {
    Left,
    #[default]
    Center,
    Right,
}

impl HAlign {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "left" | "l" => Some(HAlign::Left),
            "center" | "centre" | "c" => Some(HAlign::Center),
            "right" | "r" => Some(HAlign::Right),
            _ => None,
        }
    }

    fn algn(self) -> &'static str {
        match self {
            HAlign::Left => "l",
            HAlign::Center => "ctr",
            HAlign::Right => "r",
        }
    }
}

/// Vertical text alignment relative to the anchor point.
/// Baseline is treated as bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VAlign {
    Top,
    #[default]
    Center,
    Bottom,
}

impl VAlign {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "top" | "t" => Some(VAlign::Top),
            "center" | "centre" | "center_baseline" | "c" => Some(VAlign::Center),
            "bottom" | "baseline" | "b" => Some(VAlign::Bottom),
            _ => None,
        }
    }

    fn anchor(self) -> &'static str {
        match self {
            VAlign::Top => "t",
            VAlign::Center => "ctr",
            VAlign::Bottom => "b",
        }
    }
}

fn parse_alignment<T>(name: Option<&str>, parse: fn(&str) -> Option<T>, fallback: T) -> T {
    match name {
        None => fallback,
        Some(name) => parse(name).unwrap_or_else(|| {
            tracing::warn!(alignment = name, "unknown text alignment, using default");
            fallback
        }),
    }
}

/// A text box positioned by an anchor point and an alignment
#[derive(Debug, Clone)]
pub struct Text {
    id: ShapeId,
    pub text: String,
    pub anchor: SlidePoint,
    /// Box size in points; derived from the font size when unknown.
    pub size: Option<SlideSize2D>,
    pub font_size: f64,
    pub font: String,
    pub color: Paint,
    pub h_align: HAlign,
    pub v_align: VAlign,
    pub slide_size: SlideSize,
}

impl Text {
    pub fn new(text: impl Into<String>, anchor: SlidePoint, slide_size: SlideSize) -> Self {
        Self {
            id: ShapeId::next(),
            text: text.into().replace('\u{2212}', "-"),
            anchor,
            size: None,
            font_size: 18.0,
            font: "Arial".to_string(),
            color: Paint::opaque("000000"),
            h_align: HAlign::Center,
            v_align: VAlign::Center,
            slide_size,
        }
    }

    pub fn with_size(mut self, size: SlideSize2D) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_font(mut self, font: impl Into<String>, font_size: f64) -> Self {
        self.font = font.into();
        self.font_size = font_size;
        self
    }

    pub fn with_color(mut self, color: Paint) -> Self {
        self.color = color;
        self
    }

    pub fn with_alignment(mut self, h_align: HAlign, v_align: VAlign) -> Self {
        self.h_align = h_align;
        self.v_align = v_align;
        self
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    /// First line of the text, used as display name
    pub fn name(&self) -> &str {
        self.text.lines().next().unwrap_or("")
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Box size, estimated from the font size when no extent is known.
    pub fn box_size(&self) -> SlideSize2D {
        self.size.unwrap_or_else(|| {
            let longest = self.text.lines().map(|l| l.chars().count()).max().unwrap_or(0);
            SlideSize2D::new(self.font_size * longest as f64, self.font_size + 2.0)
        })
    }

    /// Upper-left corner of the box: the anchor shifted by the alignment.
    pub fn bounds(&self) -> GeometryBox {
        let size = self.box_size();
        let x = match self.h_align {
            HAlign::Left => self.anchor.x,
            HAlign::Center => self.anchor.x - 0.5 * size.width,
            HAlign::Right => self.anchor.x - size.width,
        };
        let y = match self.v_align {
            VAlign::Top => self.anchor.y,
            VAlign::Center => self.anchor.y - 0.5 * size.height,
            VAlign::Bottom => self.anchor.y - size.height,
        };
        GeometryBox::new(SlidePoint::new(x, y), size)
    }

    #[allow(clippy::too_many_arguments)]
    fn from_parts(
        text: &str,
        anchor: SlidePoint,
        extent: Option<(f64, f64)>,
        fontsize: f64,
        fontname: &str,
        color: Paint,
        alignment: (HAlign, VAlign),
        slide_size: SlideSize,
    ) -> Self {
        let mut shape = Text::new(text, anchor, slide_size)
            .with_font(fontname, fontsize)
            .with_color(color)
            .with_alignment(alignment.0, alignment.1);
        if let Some((w, h)) = extent {
            shape = shape.with_size(SlideSize2D::new(
                (TEXT_EXTENT_PADDING * w).abs(),
                (TEXT_EXTENT_PADDING * h).abs(),
            ));
        }
        shape
    }

    /// Convert a text object placed in data coordinates.
    pub fn from_source(data: &TextData, ctx: &MappingContext) -> Result<Option<Self>> {
        let anchor = ctx.mapper.map_point(DataPoint::new(data.x, data.y));
        let alignment = (
            parse_alignment(data.ha.as_deref(), HAlign::from_name, HAlign::Left),
            parse_alignment(data.va.as_deref(), VAlign::from_name, VAlign::Bottom),
        );
        Ok(Some(Self::from_parts(
            &data.text,
            anchor,
            data.extent,
            data.fontsize,
            &data.fontname,
            color_to_paint(&data.color)?,
            alignment,
            ctx.slide_size,
        )))
    }

    /// Convert a tick label placed at `at` (data coordinates). The label's
    /// own alignment wins over `default_alignment`.
    pub fn from_tick_label(
        label: &TickLabel,
        at: DataPoint,
        default_alignment: (HAlign, VAlign),
        ctx: &MappingContext,
    ) -> Result<Self> {
        let alignment = (
            parse_alignment(label.ha.as_deref(), HAlign::from_name, default_alignment.0),
            parse_alignment(label.va.as_deref(), VAlign::from_name, default_alignment.1),
        );
        Ok(Self::from_parts(
            &label.text,
            ctx.mapper.map_point(at),
            label.extent,
            label.fontsize,
            &label.fontname,
            color_to_paint(&label.color)?,
            alignment,
            ctx.slide_size,
        ))
    }

    fn paragraphs(&self) -> String {
        let sz = (self.font_size * 100.0) as i64;
        self.text
            .lines()
            .map(|line| {
                format!(
                    concat!(
                        r#"<a:p><a:pPr algn="{}"/><a:r><a:rPr lang="en-US" sz="{}" dirty="0">"#,
                        r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill><a:latin typeface="{}"/>"#,
                        "</a:rPr><a:t>{}</a:t></a:r></a:p>"
                    ),
                    self.h_align.algn(),
                    sz,
                    self.color.hex,
                    escape_xml(&self.font),
                    escape_xml(line)
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Blank text produces no markup at all.
    fn write_markup(&self, shape_id: u32, out: &mut String) {
        if self.is_blank() {
            return;
        }
        out.push_str(&format!(
            concat!(
                r#"<p:sp><p:nvSpPr><p:cNvPr id="{}" name="{}"/><p:cNvSpPr txBox="1"/><p:nvPr/></p:nvSpPr>"#,
                r#"<p:spPr>{}<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#,
                r#"{}<a:ln w="{}">{}</a:ln></p:spPr>"#,
                "\n<p:txBody>",
                r#"<a:bodyPr wrap="none" lIns="0" tIns="0" rIns="0" bIns="0" anchor="{}" rtlCol="0"><a:noAutofit/></a:bodyPr>"#,
                "<a:lstStyle/>\n{}\n</p:txBody>\n</p:sp>"
            ),
            shape_id,
            escape_xml(self.name()),
            xfrm(&self.bounds()),
            colorspec(None),
            to_emu(TEXT_BOX_LINE_WIDTH),
            colorspec(None),
            self.v_align.anchor(),
            self.paragraphs(),
        ));
    }
}

/// Raster picture embedded through a media relationship
#[derive(Debug, Clone)]
pub struct Image {
    id: ShapeId,
    pub name: String,
    /// Relationship id linking the picture to its media file.
    pub token: String,
    /// File name inside the media folder.
    pub target: String,
    pub data: Vec<u8>,
    pub bounds: GeometryBox,
    pub slide_size: SlideSize,
}

impl Image {
    /// Wrap encoded image bytes. `extension` is the file type ("png", ...).
    pub fn from_bytes(
        name: impl Into<String>,
        extension: &str,
        data: Vec<u8>,
        bounds: GeometryBox,
        slide_size: SlideSize,
    ) -> Self {
        let name = name.into();
        let token = random_token(5);
        let target = format!("{name}_{token}.{extension}");
        Self {
            id: ShapeId::next(),
            name,
            token,
            target,
            data,
            bounds: normalize_box(bounds),
            slide_size,
        }
    }

    /// Load an image file. Without an explicit size the pixel dimensions
    /// are used, which requires PNG data.
    pub fn from_path(
        path: &Path,
        name: Option<&str>,
        origin: SlidePoint,
        size: Option<SlideSize2D>,
        slide_size: SlideSize,
    ) -> Result<Self> {
        let data = std::fs::read(path)?;
        let size = match size {
            Some(size) => size,
            None => {
                let (w, h) = png_dimensions(&data)?;
                let points = |px: u32| px as f64 * EMU_PER_PIXEL / crate::units::EMU_PER_POINT as f64;
                SlideSize2D::new(points(w), points(h))
            }
        };
        let name = match name {
            Some(name) => name.to_string(),
            None => path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "image".to_string()),
        };
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().into_owned())
            .unwrap_or_else(|| "png".to_string());
        Ok(Self::from_bytes(
            name,
            &extension,
            data,
            GeometryBox::new(origin, size),
            slide_size,
        ))
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn relationship(&self) -> RelationshipEntry {
        RelationshipEntry {
            id: self.token.clone(),
            data: self.data.clone(),
            target: self.target.clone(),
        }
    }

    fn write_markup(&self, shape_id: u32, out: &mut String) {
        out.push_str(&format!(
            concat!(
                r#"<p:pic><p:nvPicPr><p:cNvPr id="{}" name="{}"/><p:cNvPicPr/><p:nvPr/></p:nvPicPr>"#,
                r#"<p:blipFill><a:blip r:embed="{}"/><a:stretch><a:fillRect/></a:stretch></p:blipFill>"#,
                r#"<p:spPr>{}<a:prstGeom prst="rect"><a:avLst/></a:prstGeom></p:spPr></p:pic>"#
            ),
            shape_id,
            escape_xml(&self.name),
            self.token,
            xfrm(&self.bounds),
        ));
    }
}

/// Any shape that can be placed on the slide
#[derive(Debug, Clone)]
pub enum Shape {
    Line(Line),
    Polygon(Polygon),
    Rectangle(Rectangle),
    Text(Text),
    Image(Image),
    Group(Group),
}

impl Shape {
    pub fn id(&self) -> ShapeId {
        match self {
            Shape::Line(s) => s.id(),
            Shape::Polygon(s) => s.line().id(),
            Shape::Rectangle(s) => s.id(),
            Shape::Text(s) => s.id(),
            Shape::Image(s) => s.id(),
            Shape::Group(s) => s.id(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Shape::Line(s) => &s.name,
            Shape::Polygon(s) => &s.line().name,
            Shape::Rectangle(s) => &s.name,
            Shape::Text(s) => s.name(),
            Shape::Image(s) => &s.name,
            Shape::Group(s) => &s.name,
        }
    }

    pub fn slide_size(&self) -> SlideSize {
        match self {
            Shape::Line(s) => s.slide_size,
            Shape::Polygon(s) => s.line().slide_size,
            Shape::Rectangle(s) => s.slide_size,
            Shape::Text(s) => s.slide_size,
            Shape::Image(s) => s.slide_size,
            Shape::Group(s) => s.slide_size,
        }
    }

    /// Slide markup; shape ids are numbered from 2 (1 is the slide's root).
    pub fn markup(&self) -> String {
        let mut next_id = 2;
        let mut out = String::new();
        self.write_markup(&mut next_id, &mut out);
        out
    }

    pub(crate) fn write_markup(&self, next_id: &mut u32, out: &mut String) {
        match self {
            Shape::Group(group) => {
                group.write_markup(next_id, out);
                return;
            }
            Shape::Text(text) if text.is_blank() => return,
            _ => {}
        }
        let shape_id = *next_id;
        *next_id += 1;
        match self {
            Shape::Line(s) => s.write_markup(shape_id, out),
            Shape::Polygon(s) => s.line().write_markup(shape_id, out),
            Shape::Rectangle(s) => s.write_markup(shape_id, out),
            Shape::Text(s) => s.write_markup(shape_id, out),
            Shape::Image(s) => s.write_markup(shape_id, out),
            Shape::Group(_) => {}
        }
    }

    /// Media relationships; only images have any.
    pub fn relationships(&self) -> Vec<RelationshipEntry> {
        match self {
            Shape::Image(image) => vec![image.relationship()],
            Shape::Group(group) => group.relationships(),
            _ => Vec::new(),
        }
    }

    /// Write this shape as a single-slide presentation.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<PathBuf> {
        crate::package::assemble(
            path.as_ref(),
            &self.markup(),
            &self.relationships(),
            self.slide_size(),
        )
    }
}

impl From<Line> for Shape {
    fn from(s: Line) -> Self {
        Shape::Line(s)
    }
}

impl From<Polygon> for Shape {
    fn from(s: Polygon) -> Self {
        Shape::Polygon(s)
    }
}

impl From<Rectangle> for Shape {
    fn from(s: Rectangle) -> Self {
        Shape::Rectangle(s)
    }
}

impl From<Text> for Shape {
    fn from(s: Text) -> Self {
        Shape::Text(s)
    }
}

impl From<Image> for Shape {
    fn from(s: Image) -> Self {
        Shape::Image(s)
    }
}

impl From<Group> for Shape {
    fn from(s: Group) -> Self {
        Shape::Group(s)
    }
}
