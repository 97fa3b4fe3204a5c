//! Error types for WSB translation.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for translation operations.
pub type Result<T> = std::result::Result<T, TranslateError>;

/// Errors that abort a translation run.
#[derive(Error, Debug)]
pub enum TranslateError {
    /// Two pseudo components share the same original id, so the lookup
    /// table cannot be trusted.
    #[error("duplicate component id '{0}'")]
    DuplicateId(String),

    /// A tolerated condition escalated because strict mode is enabled for it.
    #[error("strict mode: {0}")]
    Strict(Diagnostic),
}

/// Non-fatal condition attached to a single component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    /// Declared parent id is missing from the component index.
    DanglingParent,
    /// A kind that requires a parent declares none.
    MissingParent,
    /// Color expression did not parse; the fallback color was substituted.
    ColorParseFallback,
    /// Component type is outside the known set; the component was skipped.
    UnsupportedKind,
}

/// A warning collected during translation and returned alongside the
/// successfully translated components.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Original id of the offending component, when one applies.
    pub component_id: Option<String>,
    pub condition: Condition,
    pub message: String,
}

impl Diagnostic {
    pub fn new(component_id: Option<&str>, condition: Condition, message: String) -> Self {
        Self {
            component_id: component_id.map(|id| id.to_string()),
            condition,
            message,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.component_id {
            Some(id) => write!(f, "{} (component '{}')", self.message, id),
            None => write!(f, "{}", self.message),
        }
    }
}
