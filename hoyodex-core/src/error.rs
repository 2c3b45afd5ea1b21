use thiserror::Error;

/// Failures surfaced while loading or querying a game's catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Could not load {path}: {reason}")]
    Fetch { path: String, reason: String },
    #[error("Unsupported game: {0}")]
    UnsupportedGame(String),
    #[error("JSON parsing error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("No entry '{id}' in {view}")]
    NotFound { view: String, id: String },
}
