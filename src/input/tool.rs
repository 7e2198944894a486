//! Drawing tool selection.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing tool selection.
///
/// The active tool determines how a completed stroke combines with the
/// pixels drawn before it: [`Tool::Pen`] adds color, [`Tool::Eraser`]
/// removes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Freehand pen - follows the pointer path (default)
    Pen,
    /// Eraser - removes pixel coverage along the pointer path
    Eraser,
}

impl Default for Tool {
    fn default() -> Self {
        Tool::Pen
    }
}

impl std::str::FromStr for Tool {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pen" => Ok(Tool::Pen),
            "eraser" => Ok(Tool::Eraser),
            other => Err(format!("unknown tool '{other}' (expected pen or eraser)")),
        }
    }
}
