// src/bake/error.rs

/// Errors surfaced by the bake pass (mesh generation, binding, config).
/// Baking fails fast: nothing is spawned or registered on error.
#[derive(thiserror::Error, Debug)]
pub enum BakeError {
    #[error("invalid bake parameter: {0}")]
    InvalidParameter(String),
    #[error("missing reference: {0}")]
    MissingReference(String),
    #[error("I/O while reading bake inputs: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON parse error: {0}")]
    Ron(String),
}
