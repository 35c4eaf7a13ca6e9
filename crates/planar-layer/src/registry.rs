//! Scene-wide lookups owned outside any single layer.

use std::collections::HashMap;

use crate::shape::{LabelId, ShapeId};

/// Where a shape currently lives.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShapeLocation {
    pub floor: String,
    pub layer: String,
}

/// Per-participant label filtering applied in the body draw pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelFilters {
    /// When non-empty, labeled shapes need at least one of these labels.
    pub labels: Vec<LabelId>,
    /// Hide shapes without any label.
    pub no_label: bool,
}

impl LabelFilters {
    /// Whether a shape carrying `labels` passes the filters.
    pub fn admits<'a>(&self, labels: impl Iterator<Item = &'a LabelId>) -> bool {
        let mut labels = labels.peekable();
        if labels.peek().is_none() {
            return !self.no_label;
        }
        self.labels.is_empty() || labels.any(|l| self.labels.contains(l))
    }
}

/// Identity lookup plus the scene-wide owned-token and annotation lists.
#[derive(Debug, Default)]
pub struct SceneRegistry {
    local_user: String,
    shapes: HashMap<ShapeId, ShapeLocation>,
    owned_tokens: Vec<ShapeId>,
    annotations: Vec<ShapeId>,
    pub filters: LabelFilters,
}

impl SceneRegistry {
    pub fn new(local_user: impl Into<String>) -> Self {
        Self { local_user: local_user.into(), ..Self::default() }
    }

    /// The participant this scene instance renders for.
    #[inline]
    pub fn local_user(&self) -> &str {
        &self.local_user
    }

    pub fn locate(&self, id: ShapeId) -> Option<&ShapeLocation> {
        self.shapes.get(&id)
    }

    pub fn contains(&self, id: ShapeId) -> bool {
        self.shapes.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Tokens owned by the local user, in the order they entered the scene.
    pub fn owned_tokens(&self) -> &[ShapeId] {
        &self.owned_tokens
    }

    /// Shapes with a non-empty annotation, in the order they entered the scene.
    pub fn annotations(&self) -> &[ShapeId] {
        &self.annotations
    }

    pub(crate) fn insert(&mut self, id: ShapeId, location: ShapeLocation) {
        self.shapes.insert(id, location);
    }

    pub(crate) fn remove(&mut self, id: ShapeId) -> Option<ShapeLocation> {
        self.shapes.remove(&id)
    }

    pub(crate) fn push_owned_token(&mut self, id: ShapeId) {
        self.owned_tokens.push(id);
    }

    pub(crate) fn push_annotation(&mut self, id: ShapeId) {
        self.annotations.push(id);
    }

    /// Splices the first occurrence of `id` out of the owned-token list.
    pub(crate) fn remove_owned_token(&mut self, id: ShapeId) -> bool {
        splice_first(&mut self.owned_tokens, id)
    }

    /// Splices the first occurrence of `id` out of the annotation list.
    pub(crate) fn remove_annotation(&mut self, id: ShapeId) -> bool {
        splice_first(&mut self.annotations, id)
    }
}

fn splice_first(list: &mut Vec<ShapeId>, id: ShapeId) -> bool {
    match list.iter().position(|x| *x == id) {
        Some(i) => {
            list.remove(i);
            true
        }
        None => false,
    }
}
