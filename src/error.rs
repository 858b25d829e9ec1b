//! Structured error types.
//!
//! None of these come out of the resize transform itself, which cannot
//! fail. They cover the layer around it: reading the offset parameter,
//! finding something to resize, and (for the CLI and wasm hosts) parsing
//! scene JSON and configuration.

use thiserror::Error;

/// Why an offset parameter was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OffsetError {
    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("offset must not be negative, got {0}")]
    Negative(f64),

    #[error("offset must be finite")]
    NotFinite,
}

/// The unified error type returned by the plugin entry points.
#[derive(Debug, Error)]
pub enum PluginError {
    #[error("invalid offset: {0}")]
    InvalidOffset(#[from] OffsetError),

    #[error("missing parameter: {0}")]
    MissingParameter(String),

    #[error("no frame or component with children in the selection")]
    EmptySelection,

    /// Scene JSON failed to parse.
    #[error("failed to parse scene: {source}{}", hint_suffix(.hint))]
    Parse {
        source: serde_json::Error,
        hint: String,
    },

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

fn hint_suffix(hint: &str) -> String {
    if hint.is_empty() {
        String::new()
    } else {
        format!("\n  Hint: {hint}")
    }
}

impl PluginError {
    /// The short message shown to the designer in the host's toast.
    pub fn user_message(&self) -> String {
        match self {
            PluginError::InvalidOffset(_) | PluginError::MissingParameter(_) => {
                "Try entering a positive number".to_string()
            }
            PluginError::EmptySelection => "Select at least one frame or component".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<serde_json::Error> for PluginError {
    fn from(e: serde_json::Error) -> Self {
        use serde_json::error::Category;

        let hint = match e.classify() {
            Category::Data => format!(
                "A scene is {{ \"selection\": [node, ...] }}. Every node needs a \"type\" tag \
                 (FRAME, COMPONENT, ...); x, y, width, height and padding values must be numbers. \
                 Problem at line {}, column {}.",
                e.line(),
                e.column()
            ),
            Category::Syntax | Category::Eof => format!(
                "The scene isn't well-formed JSON (line {}, column {}).",
                e.line(),
                e.column()
            ),
            Category::Io => String::new(),
        };
        PluginError::Parse { source: e, hint }
    }
}
