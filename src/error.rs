//! Structured error types for vgrid.
//!
//! The layout core itself never fails: it clamps. Errors only come from the
//! edges of the crate (configuration, reference parsing, CLI I/O).

/// All errors that can occur at the edges of the grid layout core.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// Configuration JSON could not be decoded.
    #[error("Config decoding: {0}")]
    Config(#[from] serde_json::Error),

    /// Configuration decoded but holds values the layout cannot use.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Unknown scroll alignment name.
    #[error("Invalid alignment: {0}")]
    InvalidAlign(String),

    /// Invalid cell reference.
    #[error("Invalid cell reference: {0}")]
    CellRef(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridError>;

#[cfg(target_arch = "wasm32")]
impl From<GridError> for wasm_bindgen::JsValue {
    fn from(e: GridError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
