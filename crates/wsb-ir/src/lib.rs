//! Intermediate representation for WSB documents.
//!
//! Translates pseudo-component page descriptions into the annotated WSB
//! component schema consumed by the page engine.

pub mod color;
pub mod content;
pub mod error;
pub mod index;
pub mod pseudo;
pub mod style;
pub mod translate;
pub mod wsb;

pub use error::{Condition, Diagnostic, TranslateError};
pub use pseudo::{BorderRadius, PseudoComponent, PseudoDocument, PseudoKind, PseudoStyle};
pub use translate::{
    AssetOptions, LayoutOptions, Strictness, StrictnessOptions, ThemeOptions, TranslateOptions,
    Translation, translate,
};
pub use wsb::{WsbComponent, WsbComponentKind};
