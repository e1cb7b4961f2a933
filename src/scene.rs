//! Figure to slide conversion.
//!
//! Plot objects are classified into an [`ObjectKind`] and converted through
//! a fixed dispatch table. Objects without axes and kinds with no entry are
//! skipped. The canvas of the first axes is appended last so its masks sit
//! in front of anything clamped into the margins.

use crate::canvas::{Canvas, CanvasStyle};
use crate::error::Result;
use crate::group::Group;
use crate::mapper::{CoordinateMapper, PlotAreaCache};
use crate::mesh::Mesh;
use crate::models::{Figure, PlotObject};
use crate::shapes::{Line, MappingContext, Polygon, Rectangle, Shape, Text};
use crate::units::SlideSize;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Options for saving a figure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaveOptions {
    #[serde(flatten)]
    pub canvas: CanvasStyle,
    /// Overrides the figure size when set.
    pub slide_size: Option<SlideSize>,
}

impl SaveOptions {
    /// Load options from a JSON file. Missing keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}

/// Concrete kind of a plot object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    Line,
    Rectangle,
    Polygon,
    Text,
    Mesh,
    Unsupported,
}

impl ObjectKind {
    pub fn of(object: &PlotObject) -> Self {
        match object {
            PlotObject::Line2D(_) => ObjectKind::Line,
            PlotObject::Rectangle(_) => ObjectKind::Rectangle,
            PlotObject::Polygon(_) => ObjectKind::Polygon,
            PlotObject::Text(_) => ObjectKind::Text,
            PlotObject::QuadMesh(_) => ObjectKind::Mesh,
            PlotObject::Unsupported => ObjectKind::Unsupported,
        }
    }
}

type Factory = fn(&PlotObject, &MappingContext) -> Result<Option<Shape>>;

fn line_shape(object: &PlotObject, ctx: &MappingContext) -> Result<Option<Shape>> {
    let PlotObject::Line2D(data) = object else {
        return Ok(None);
    };
    Ok(Line::from_source(data, ctx)?.map(Shape::from))
}

fn rectangle_shape(object: &PlotObject, ctx: &MappingContext) -> Result<Option<Shape>> {
    let PlotObject::Rectangle(data) = object else {
        return Ok(None);
    };
    Ok(Rectangle::from_source(data, ctx)?.map(Shape::from))
}

fn polygon_shape(object: &PlotObject, ctx: &MappingContext) -> Result<Option<Shape>> {
    let PlotObject::Polygon(data) = object else {
        return Ok(None);
    };
    Ok(Polygon::from_source(data, ctx)?.map(Shape::from))
}

fn text_shape(object: &PlotObject, ctx: &MappingContext) -> Result<Option<Shape>> {
    let PlotObject::Text(data) = object else {
        return Ok(None);
    };
    Ok(Text::from_source(data, ctx)?.map(Shape::from))
}

fn mesh_shape(object: &PlotObject, ctx: &MappingContext) -> Result<Option<Shape>> {
    let PlotObject::QuadMesh(data) = object else {
        return Ok(None);
    };
    Ok(Mesh::from_source(data, ctx)?.map(Shape::from))
}

const DISPATCH: &[(ObjectKind, Factory)] = &[
    (ObjectKind::Line, line_shape),
    (ObjectKind::Rectangle, rectangle_shape),
    (ObjectKind::Polygon, polygon_shape),
    (ObjectKind::Text, text_shape),
    (ObjectKind::Mesh, mesh_shape),
];

fn factory_for(kind: ObjectKind) -> Option<Factory> {
    DISPATCH
        .iter()
        .find(|(k, _)| *k == kind)
        .map(|(_, factory)| *factory)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildState {
    Empty,
    Accumulating,
}

/// Collects the shapes of one slide. `finish` consumes the builder, so a
/// finished scene cannot be added to.
#[derive(Debug)]
pub struct SceneBuilder {
    group: Group,
    state: BuildState,
}

impl SceneBuilder {
    pub fn new(slide_size: SlideSize) -> Self {
        Self {
            group: Group::new("ppt", Vec::new(), slide_size),
            state: BuildState::Empty,
        }
    }

    pub fn state(&self) -> BuildState {
        self.state
    }

    /// Add an already converted shape; `None` is a no-op.
    pub fn add_shape(&mut self, shape: Option<Shape>) {
        if let Some(shape) = shape {
            self.group.add(Some(shape));
            self.state = BuildState::Accumulating;
        }
    }

    /// Classify and convert one plot object. Returns whether a shape was
    /// added.
    pub fn add_object(&mut self, object: &PlotObject, ctx: &MappingContext) -> Result<bool> {
        let kind = ObjectKind::of(object);
        let Some(factory) = factory_for(kind) else {
            tracing::debug!(?kind, "no shape for object kind, skipped");
            return Ok(false);
        };
        let shape = factory(object, ctx)?;
        let added = shape.is_some();
        self.add_shape(shape);
        Ok(added)
    }

    /// Append the canvas and hand over the finished group.
    pub fn finish(mut self, canvas: Option<Group>) -> Group {
        if let Some(canvas) = canvas {
            self.group.add(Some(canvas.into()));
        }
        self.group
    }
}

/// State of one conversion run: options plus the plotting-area cache.
#[derive(Debug, Default)]
pub struct ConversionSession {
    cache: PlotAreaCache,
    pub options: SaveOptions,
}

impl ConversionSession {
    pub fn new(options: SaveOptions) -> Self {
        Self {
            cache: PlotAreaCache::new(),
            options,
        }
    }

    pub fn cache(&self) -> &PlotAreaCache {
        &self.cache
    }

    pub fn cache_mut(&mut self) -> &mut PlotAreaCache {
        &mut self.cache
    }

    fn slide_size(&self, figure: &Figure) -> Result<SlideSize> {
        match self.options.slide_size {
            Some(size) => Ok(size),
            None => SlideSize::new(figure.width, figure.height),
        }
    }

    /// Convert a figure into the group of shapes for one slide.
    pub fn build(&mut self, figure: &Figure) -> Result<Group> {
        let slide_size = self.slide_size(figure)?;
        let mut builder = SceneBuilder::new(slide_size);
        if figure.axes.is_empty() {
            tracing::debug!(figure = %figure.id, "figure has no axes");
            return Ok(builder.finish(None));
        }

        let area = self.cache.plot_area(figure)?;
        let contexts = figure
            .axes
            .iter()
            .map(|axes| {
                Ok(MappingContext {
                    mapper: CoordinateMapper::new(area, axes.xlim, axes.ylim)?,
                    slide_size,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let mut skipped = 0usize;
        for object in &figure.objects {
            let Some(ctx) = object.axes().and_then(|i| contexts.get(i)) else {
                skipped += 1;
                continue;
            };
            if !builder.add_object(object, ctx)? {
                skipped += 1;
            }
        }

        let canvas = Canvas::from_axes(&figure.axes[0], &contexts[0], &self.options.canvas)?;
        let group = builder.finish(Some(canvas));
        tracing::debug!(
            figure = %figure.id,
            shapes = group.len(),
            skipped,
            "built scene"
        );
        Ok(group)
    }

    /// Convert a figure and write it as a single-slide presentation.
    pub fn savefig(&mut self, figure: &Figure, path: &Path) -> Result<PathBuf> {
        self.build(figure)?.save(path)
    }
}

/// Save `figure` with a fresh session.
pub fn savefig(figure: &Figure, path: &Path, options: SaveOptions) -> Result<PathBuf> {
    ConversionSession::new(options).savefig(figure, path)
}
