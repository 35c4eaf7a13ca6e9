use serde::{Deserialize, Serialize};

/// Composite operation applied when a draw item is blended onto the target.
///
/// The subset of canvas composite operations scene shapes use. Serialized with
/// the canvas spelling (`"source-over"`, `"destination-out"`, ...).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlendMode {
    #[default]
    SourceOver,
    SourceAtop,
    DestinationOut,
    Multiply,
}
