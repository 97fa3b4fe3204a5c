//! Kind-specific style payloads.
//!
//! Sections get a border/background block, buttons get the shared global
//! style descriptor, and every other kind carries its styling inline. The
//! background color path is the only fallible piece; an unparseable color
//! substitutes the configured fallback unless strictness says otherwise.

use tracing::warn;

use crate::color::{self, ColorTuple};
use crate::error::{Condition, Diagnostic, Result, TranslateError};
use crate::pseudo::PseudoComponent;
use crate::translate::{Strictness, TranslateOptions};
use crate::wsb::{
    ButtonTextStyle, ColorData, GlobalButtonStyle, STYLE_BUTTON_TYPE, SectionBackground,
    SectionStyle,
};

/// Resolves a section's background color and optional background image into
/// the section style block.
pub(crate) fn section_style(
    component: &PseudoComponent,
    options: &TranslateOptions,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<SectionStyle> {
    let color = background_color_tuple(component, options, diagnostics)?;
    let asset_data = component
        .background_image
        .then(|| options.assets.section_background.clone());
    Ok(SectionStyle {
        border: None,
        background: SectionBackground {
            color_data: ColorData {
                color,
                gradient: None,
            },
            asset_data,
        },
    })
}

/// The fixed global style descriptor every button references.
pub(crate) fn button_style(options: &TranslateOptions) -> GlobalButtonStyle {
    GlobalButtonStyle {
        global_id: options.theme.button_global_id.clone(),
        global_name: options.theme.button_global_name.clone(),
        type_id: STYLE_BUTTON_TYPE.to_string(),
        text: ButtonTextStyle { size: None },
    }
}

/// Normalizes a component's authored background color. Unparseable values
/// substitute the configured fallback and record a diagnostic; an absent
/// color takes the fallback silently.
pub(crate) fn background_color_tuple(
    component: &PseudoComponent,
    options: &TranslateOptions,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<ColorTuple> {
    let rgba = match component.background_color() {
        Some(value) => match color::parse_color_expression(value) {
            Ok(rgba) => rgba,
            Err(err) => {
                let diagnostic = Diagnostic::new(
                    Some(&component.id),
                    Condition::ColorParseFallback,
                    format!("cannot parse background color \"{}\": {}", value, err),
                );
                if options.strictness.color_fallback == Strictness::Fail {
                    return Err(TranslateError::Strict(diagnostic));
                }
                warn!(
                    component = %component.id,
                    color = value,
                    "background color fell back to the default"
                );
                diagnostics.push(diagnostic);
                options.fallback_color
            }
        },
        None => options.fallback_color,
    };
    Ok(color::to_normalized_hsla(rgba))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pseudo::{PseudoKind, PseudoStyle};
    use crate::translate::StrictnessOptions;

    fn section(background_color: Option<&str>, background_image: bool) -> PseudoComponent {
        PseudoComponent {
            id: "hero".to_string(),
            kind: PseudoKind::Section,
            parent: None,
            left: 0.0,
            top: 0.0,
            width: 960.0,
            height: 400.0,
            text: None,
            content: None,
            align: None,
            scale: None,
            background_image,
            style: background_color.map(|value| PseudoStyle {
                background_color: Some(value.to_string()),
                border: None,
                border_radius: None,
            }),
        }
    }

    #[test]
    fn normalizes_an_authored_color() {
        let component = section(Some("rgb(255, 0, 0)"), false);
        let options = TranslateOptions::default();
        let mut diagnostics = Vec::new();
        let style = section_style(&component, &options, &mut diagnostics).unwrap();
        assert!(diagnostics.is_empty());
        let color = style.background.color_data.color;
        assert_eq!((color.h, color.s, color.l, color.a), (0.0, 1.0, 0.5, 1.0));
        assert!(style.background.asset_data.is_none());
        assert!(style.border.is_none());
    }

    #[test]
    fn unparseable_color_records_a_fallback_diagnostic() {
        let component = section(Some("definitely-not-a-color"), false);
        let options = TranslateOptions::default();
        let mut diagnostics = Vec::new();
        let style = section_style(&component, &options, &mut diagnostics).unwrap();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].condition, Condition::ColorParseFallback);
        assert_eq!(diagnostics[0].component_id.as_deref(), Some("hero"));
        // fallback is opaque black
        let color = style.background.color_data.color;
        assert_eq!((color.h, color.s, color.l, color.a), (0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn missing_color_takes_the_fallback_silently() {
        let component = section(None, false);
        let options = TranslateOptions::default();
        let mut diagnostics = Vec::new();
        let tuple = background_color_tuple(&component, &options, &mut diagnostics).unwrap();
        assert!(diagnostics.is_empty());
        assert_eq!((tuple.h, tuple.s, tuple.l, tuple.a), (0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn strict_mode_turns_the_fallback_into_an_error() {
        let component = section(Some("definitely-not-a-color"), false);
        let options = TranslateOptions {
            strictness: StrictnessOptions {
                color_fallback: Strictness::Fail,
                ..StrictnessOptions::default()
            },
            ..TranslateOptions::default()
        };
        let mut diagnostics = Vec::new();
        let result = background_color_tuple(&component, &options, &mut diagnostics);
        assert!(matches!(result, Err(TranslateError::Strict(_))));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn background_image_flag_attaches_the_configured_asset() {
        let component = section(Some("rgb(0, 0, 0)"), true);
        let options = TranslateOptions::default();
        let mut diagnostics = Vec::new();
        let style = section_style(&component, &options, &mut diagnostics).unwrap();
        let asset_data = style.background.asset_data.unwrap();
        assert_eq!(asset_data.asset.url, options.assets.section_background.asset.url);
        assert_eq!(asset_data.opacity, 0.6);
    }

    #[test]
    fn button_descriptor_carries_the_global_style_constants() {
        let options = TranslateOptions::default();
        let style = button_style(&options);
        assert_eq!(style.global_id, "D0C8AC09-0EF1-4821-8586-2D70D3ED97B6");
        assert_eq!(style.global_name, "[button.1]");
        assert_eq!(style.type_id, STYLE_BUTTON_TYPE);
        assert!(style.text.size.is_none());
    }
}
