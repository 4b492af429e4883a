use std::path::PathBuf;

/// Fatal errors that stop a run before any scene is produced.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Required columns or column groups are absent from the input header.
    #[error("missing required columns: {}", .missing.join(", "))]
    Configuration { missing: Vec<String> },
}

/// Failure to load an overlay document. Recoverable: the scene is still built without overlays.
#[derive(Debug, thiserror::Error)]
pub enum OverlayLoadError {
    #[error("could not read overlay file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("overlay is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("overlay is not a valid GeoJSON document: {0}")]
    Malformed(String),
}

/// Errors raised by the feature edit state machine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    #[error("no feature is being edited")]
    NotEditing,

    #[error("color {color:?} is not one of: {}", .allowed.join(", "))]
    ColorNotInPalette { color: String, allowed: Vec<String> },
}
