//! Floor / layer topology of the scene as the draw pipeline sees it.

/// Layer name of the fog-of-war layer; only drawn while it is the active layer.
pub const FOW_LAYER: &str = "fow";

/// A vertical level and the names of its layers, bottom to top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Floor {
    pub name: String,
    pub layers: Vec<String>,
    /// Layer receiving input on this floor. `None` while the floor has no layers.
    pub active_layer: Option<String>,
}

impl Floor {
    /// A floor whose active layer is its first one.
    pub fn new<S: Into<String>>(name: impl Into<String>, layers: impl IntoIterator<Item = S>) -> Self {
        let layers: Vec<String> = layers.into_iter().map(Into::into).collect();
        let active_layer = layers.first().cloned();
        Self { name: name.into(), layers, active_layer }
    }

    pub fn top_layer(&self) -> Option<&str> {
        self.layers.last().map(String::as_str)
    }
}

/// Ordered floors (lowest first) plus the one currently viewed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FloorPlan {
    floors: Vec<Floor>,
    selected: usize,
}

impl FloorPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_floor(mut self, floor: Floor) -> Self {
        self.floors.push(floor);
        self
    }

    pub fn floors(&self) -> &[Floor] {
        &self.floors
    }

    pub fn floor(&self, name: &str) -> Option<&Floor> {
        self.floors.iter().find(|f| f.name == name)
    }

    #[inline]
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_floor(&self) -> Option<&Floor> {
        self.floors.get(self.selected)
    }

    /// Views floor `index`. Out-of-range indices are ignored.
    pub fn select_floor(&mut self, index: usize) -> bool {
        if index < self.floors.len() {
            self.selected = index;
            true
        } else {
            false
        }
    }

    /// Makes `layer` the active layer of `floor`. Unknown names are ignored.
    pub fn select_layer(&mut self, floor: &str, layer: &str) -> bool {
        match self.floors.iter_mut().find(|f| f.name == floor) {
            Some(f) if f.layers.iter().any(|l| l == layer) => {
                f.active_layer = Some(layer.to_owned());
                true
            }
            _ => false,
        }
    }

    /// Active layer of `floor`, if the floor exists and has one.
    pub fn active_layer(&self, floor: &str) -> Option<&str> {
        self.floor(floor)?.active_layer.as_deref()
    }

    /// `(floor, layer)` of the topmost layer on the floor right below the viewed one.
    pub fn lower_floor_top_layer(&self) -> Option<(&str, &str)> {
        let lower = self.floors.get(self.selected.checked_sub(1)?)?;
        Some((lower.name.as_str(), lower.top_layer()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan() -> FloorPlan {
        FloorPlan::new()
            .with_floor(Floor::new("cellar", ["map", "tokens"]))
            .with_floor(Floor::new("ground", ["map", "tokens", "fow"]))
    }

    #[test]
    fn first_layer_starts_active() {
        assert_eq!(plan().active_layer("ground"), Some("map"));
        assert_eq!(plan().active_layer("roof"), None);
    }

    #[test]
    fn select_layer_rejects_unknown_names() {
        let mut p = plan();
        assert!(p.select_layer("ground", "fow"));
        assert!(!p.select_layer("ground", "dm"));
        assert_eq!(p.active_layer("ground"), Some("fow"));
    }

    #[test]
    fn lower_floor_only_exists_above_ground_level() {
        let mut p = plan();
        assert_eq!(p.lower_floor_top_layer(), None);
        assert!(p.select_floor(1));
        assert_eq!(p.lower_floor_top_layer(), Some(("cellar", "tokens")));
        assert!(!p.select_floor(5));
    }
}
