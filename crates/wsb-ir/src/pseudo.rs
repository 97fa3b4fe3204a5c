//! The author-facing pseudo-component input model.

use serde::{Deserialize, Serialize};

/// Top-level input document: an ordered list of pseudo components.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PseudoDocument {
    #[serde(default)]
    pub components: Vec<PseudoComponent>,
}

impl PseudoDocument {
    pub fn component(&self, id: &str) -> Option<&PseudoComponent> {
        self.components.iter().find(|component| component.id == id)
    }
}

/// One simplified layout element as authored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PseudoComponent {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: PseudoKind,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(default)]
    pub left: f64,
    #[serde(default)]
    pub top: f64,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
    /// Plain text payload (text blocks, button labels).
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Rich-text HTML fragment for text blocks.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<String>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    /// Requests the configured background image block on sections.
    #[serde(default)]
    pub background_image: bool,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<PseudoStyle>,
}

impl PseudoComponent {
    /// Authored background color, when the style block carries one.
    pub fn background_color(&self) -> Option<&str> {
        self.style
            .as_ref()
            .and_then(|style| style.background_color.as_deref())
    }
}

/// Structural category of a pseudo component. Values outside the known set
/// still deserialize, so the translator can report them instead of failing
/// the whole document parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PseudoKind {
    Section,
    Text,
    Button,
    Image,
    Background,
    #[serde(untagged)]
    Unknown(String),
}

/// Authored style block.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PseudoStyle {
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<BorderRadius>,
}

/// Border radius as authored: a number, or `false` for square corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BorderRadius {
    Radius(f64),
    Flag(bool),
}
