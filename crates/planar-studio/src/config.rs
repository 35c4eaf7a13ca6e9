use std::path::Path;

use anyhow::{ensure, Context, Result};
use planar_engine::coords::{Vec2, Viewport};
use planar_engine::logging::LoggingConfig;
use planar_layer::LayerConfig;
use serde::Deserialize;

/// Settings for a studio run, read from an optional JSON file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StudioConfig {
    /// Participant the scene is rendered for.
    pub user: String,
    pub width: f32,
    pub height: f32,
    pub pan: Vec2,
    pub zoom: f32,
    pub logging: LoggingConfig,
    pub layer: LayerConfig,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            user: "gm".to_owned(),
            width: 820.0,
            height: 560.0,
            pan: Vec2::zero(),
            zoom: 2.0,
            logging: LoggingConfig::default(),
            layer: LayerConfig::default(),
        }
    }
}

impl StudioConfig {
    /// Defaults when `path` is `None`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let config: Self = serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?;
        ensure!(
            config.viewport().is_valid(),
            "{}: canvas {}x{} at zoom {} is not drawable",
            path.display(),
            config.width,
            config.height,
            config.zoom
        );
        Ok(config)
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height).with_pan_zoom(self.pan, self.zoom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let cfg: StudioConfig = serde_json::from_str(
            r##"{ "user": "alice", "zoom": 1, "layer": { "selection_color": "#00ff00" } }"##,
        )
        .unwrap();

        assert_eq!(cfg.user, "alice");
        assert_eq!(cfg.viewport().world_rect().size.x, 820.0);
        assert_eq!(cfg.layer.selection_color.to_hex(), "#00ff00");
        assert_eq!(cfg.layer.selection_width, 2.0);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(StudioConfig::load(Some(Path::new("/nonexistent/studio.json"))).is_err());
        assert_eq!(StudioConfig::load(None).unwrap().user, "gm");
    }
}
