use thiserror::Error;

/// Failure to rebuild a [`Shape`](crate::Shape) from its wire dictionary.
#[derive(Debug, Error)]
pub enum ShapeError {
    /// The `type_` tag names no known shape kind.
    #[error("shape with unknown type `{0}` could not be added")]
    UnknownType(String),

    /// The tag is known but the geometry fields do not fit it.
    #[error("invalid `{type_}` geometry: {source}")]
    Geometry {
        type_: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Why a [`WaitValid`](crate::WaitValid) future finished without a draw.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum WaitError {
    #[error("layer was dropped before its next draw")]
    LayerDropped,

    #[error("timed out waiting for the layer to draw")]
    TimedOut,
}
