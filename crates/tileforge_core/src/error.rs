//! Error types for layer-stack operations and document validation

/// Errors the data model can report. Out-of-bounds placement is not here:
/// clipping a stamp at a layer edge is expected behavior, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// A layer index outside the stack was requested
    InvalidLayerIndex { index: usize, layer_count: usize },
    /// A layer was created with a zero dimension
    InvalidLayerSize { width: u32, height: u32 },
    /// A persisted document violated the format's structural invariants
    MalformedDocument(String),
}

impl std::fmt::Display for MapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapError::InvalidLayerIndex { index, layer_count } => {
                write!(
                    f,
                    "Invalid layer index: {} (stack has {} layers)",
                    index, layer_count
                )
            }
            MapError::InvalidLayerSize { width, height } => {
                write!(f, "Invalid layer size: {}x{}", width, height)
            }
            MapError::MalformedDocument(msg) => write!(f, "Malformed map document: {}", msg),
        }
    }
}

impl std::error::Error for MapError {}
