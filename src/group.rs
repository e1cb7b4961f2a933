//! Ordered collection of shapes.
//!
//! A group is purely a container on the Rust side; it does not become a
//! grouped shape on the slide. Its children are written one after another.

use crate::error::{Error, Result};
use crate::shapes::{RelationshipEntry, Shape, ShapeId};
use crate::units::SlideSize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Group {
    id: ShapeId,
    pub name: String,
    children: Vec<Shape>,
    pub slide_size: SlideSize,
}

impl Default for Group {
    fn default() -> Self {
        Self::new("ppt", Vec::new(), SlideSize::default())
    }
}

impl Group {
    pub fn new(name: impl Into<String>, children: Vec<Shape>, slide_size: SlideSize) -> Self {
        Self {
            id: ShapeId::next(),
            name: name.into(),
            children,
            slide_size,
        }
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn children(&self) -> &[Shape] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// New group with `other` appended. Groups are flattened into their
    /// children; an empty group takes over the slide size of `other`.
    /// Adding `None` returns the group unchanged.
    pub fn with_child(mut self, other: Option<Shape>) -> Group {
        self.add(other);
        self
    }

    /// In-place variant of [`Group::with_child`].
    pub fn add(&mut self, other: Option<Shape>) {
        let Some(other) = other else {
            return;
        };
        if self.children.is_empty() {
            self.slide_size = other.slide_size();
        }
        match other {
            Shape::Group(group) => self.children.extend(group.children),
            shape => self.children.push(shape),
        }
    }

    /// New group without the child with identity `id`.
    pub fn without_child(&self, id: ShapeId) -> Result<Group> {
        let mut group = self.clone();
        group.remove(id)?;
        Ok(group)
    }

    /// Remove the child with identity `id`; it must be present.
    pub fn remove(&mut self, id: ShapeId) -> Result<Shape> {
        match self.children.iter().position(|c| c.id() == id) {
            Some(index) => Ok(self.children.remove(index)),
            None => Err(Error::MissingGroupMember {
                name: id.to_string(),
            }),
        }
    }

    /// Markup of all children, each on its own lines, in order.
    pub fn markup(&self) -> String {
        let mut next_id = 2;
        let mut out = String::new();
        self.write_markup(&mut next_id, &mut out);
        out
    }

    pub(crate) fn write_markup(&self, next_id: &mut u32, out: &mut String) {
        for child in &self.children {
            out.push('\n');
            child.write_markup(next_id, out);
            out.push('\n');
        }
    }

    pub fn relationships(&self) -> Vec<RelationshipEntry> {
        self.children.iter().flat_map(|c| c.relationships()).collect()
    }

    /// Write the group as a single-slide presentation.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<PathBuf> {
        crate::package::assemble(
            path.as_ref(),
            &self.markup(),
            &self.relationships(),
            self.slide_size,
        )
    }
}
