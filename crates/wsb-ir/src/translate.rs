//! Pseudo-to-WSB translation.
//!
//! The entry point is [`translate`]: index the document, then dispatch each
//! component to its kind-specific builder. Builders compute parent-relative
//! positioning and fill in the schema's per-kind defaults. Component-level
//! problems (dangling parents, unknown kinds, bad colors) downgrade to
//! diagnostics and never abort the run unless strictness escalates them.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::color::{self, Rgba};
use crate::content;
use crate::error::{Condition, Diagnostic, Result, TranslateError};
use crate::index::{ComponentIndex, IndexEntry};
use crate::pseudo::{PseudoComponent, PseudoDocument, PseudoKind};
use crate::style;
use crate::wsb::{
    BackgroundAsset, BackgroundAssetData, BackgroundFill, BackgroundSpec, BackgroundStyle,
    BorderStyle, ButtonMobileSettings, ButtonSpec, ColorData, FillSize, IMAGE_ASSET_TYPE,
    ImageAsset, ImageSpec, LinkAction, ParaStyle, RelativePosition, STYLE_PARA_TYPE,
    SectionAssetData, SectionSpec, SurfaceMobileSettings, TextMobileSettings, TextSpec,
    WsbComponent, WsbComponentKind,
};

// Fixed z-ordering per kind.
const SECTION_ORDER_INDEX: i32 = 3;
const TEXT_ORDER_INDEX: i32 = 10;
const BUTTON_ORDER_INDEX: i32 = 1;
const IMAGE_ORDER_INDEX: i32 = 6;
const BACKGROUND_ORDER_INDEX: i32 = 1;

/// How a tolerated condition is handled: logged and collected, or escalated
/// into a hard error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strictness {
    Warn,
    Fail,
}

impl Default for Strictness {
    fn default() -> Self {
        Self::Warn
    }
}

/// Per-condition strictness switches.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrictnessOptions {
    pub unknown_kinds: Strictness,
    pub color_fallback: Strictness,
}

/// Theme names and style identifiers stamped onto translated components.
#[derive(Debug, Clone)]
pub struct ThemeOptions {
    pub section_theme: String,
    pub background_theme: String,
    pub button_theme: String,
    pub button_default_text: String,
    pub button_global_id: String,
    pub button_global_name: String,
    pub global_style_id: String,
}

impl Default for ThemeOptions {
    fn default() -> Self {
        Self {
            section_theme: "Black".to_string(),
            background_theme: "White".to_string(),
            button_theme: "primary".to_string(),
            button_default_text: "Button".to_string(),
            button_global_id: "D0C8AC09-0EF1-4821-8586-2D70D3ED97B6".to_string(),
            button_global_name: "[button.1]".to_string(),
            global_style_id: "C4F8B7E2-3D61-4A8E-9B0F-5A2C6D9E1F37".to_string(),
        }
    }
}

/// Sentinel values written into the unused edges of `relIn`.
#[derive(Debug, Clone, Copy)]
pub struct LayoutOptions {
    pub rel_right: f64,
    pub rel_bottom: f64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            rel_right: -250.0,
            rel_bottom: -250.0,
        }
    }
}

/// Asset references injected into translated components. Defaults point at
/// the universal design template's media.
#[derive(Debug, Clone)]
pub struct AssetOptions {
    /// Placeholder referenced by every IMAGE component.
    pub image_placeholder: ImageAsset,
    /// Background image block attached to sections that opt in.
    pub section_background: SectionAssetData,
    /// Template for the per-background asset; its id is replaced with a
    /// fresh UUID on every build.
    pub background: BackgroundAsset,
    pub crop_top: f64,
    pub crop_left: f64,
}

impl Default for AssetOptions {
    fn default() -> Self {
        Self {
            image_placeholder: ImageAsset {
                alpha: None,
                animated: false,
                bpp: None,
                content_type: "image/jpeg".to_string(),
                etag: "\"17b373-5fc848a46a261\"".to_string(),
                filesize: 1_553_267,
                height: 2883,
                image: None,
                recommended_format: None,
                url: "repository:/design-universal-template-unsplash-vjlJBOedSWw.jpg".to_string(),
                width: 1920,
            },
            section_background: SectionAssetData {
                asset: ImageAsset {
                    alpha: None,
                    animated: false,
                    bpp: None,
                    content_type: "image/jpeg".to_string(),
                    etag: "\"31343-5fc848a346a51\"".to_string(),
                    filesize: 201_539,
                    height: 1275,
                    image: None,
                    recommended_format: None,
                    url: "repository:/design-universal-template-unsplash-fPcB3Km7PyE.jpg"
                        .to_string(),
                    width: 1920,
                },
                repeat: [false, false],
                position: ["50%".to_string(), "50%".to_string()],
                size: FillSize::Cover,
                scroll_effect: Some("parallax".to_string()),
                opacity: 0.6,
            },
            background: BackgroundAsset {
                id: Uuid::nil(),
                type_id: IMAGE_ASSET_TYPE.to_string(),
                etag: String::new(),
                url: "webspace:/onewebmedia/unsplash_cIwzPYs-_Mk.jpg".to_string(),
                content_type: String::new(),
                alpha: None,
                bpp: None,
                width: 4500,
                height: 4500,
                animated: false,
                recommended_format: None,
            },
            crop_top: 170.0,
            crop_left: 0.0,
        }
    }
}

/// Everything the translator can be tuned with. The default configuration
/// produces documents styled after the universal design template.
#[derive(Debug, Clone, Default)]
pub struct TranslateOptions {
    pub strictness: StrictnessOptions,
    pub theme: ThemeOptions,
    pub layout: LayoutOptions,
    pub assets: AssetOptions,
    /// Substitute for unparseable or missing background colors.
    pub fallback_color: Rgba,
}

/// Result of a translation run: the components that translated cleanly plus
/// every diagnostic collected along the way.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Translation {
    pub components: Vec<WsbComponent>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Translates a pseudo document into WSB components.
///
/// Duplicate component ids abort before any translation happens. All other
/// problems skip the offending component and are reported in
/// [`Translation::diagnostics`], unless [`StrictnessOptions`] escalates them.
pub fn translate(document: &PseudoDocument, options: &TranslateOptions) -> Result<Translation> {
    let index = ComponentIndex::build(&document.components)?;
    info!(components = index.len(), "indexed pseudo document");

    let mut components = Vec::with_capacity(document.components.len());
    let mut diagnostics = Vec::new();
    for component in &document.components {
        if let Some(translated) = build_component(component, &index, options, &mut diagnostics)? {
            components.push(translated);
        }
    }

    info!(
        translated = components.len(),
        skipped = document.components.len() - components.len(),
        diagnostics = diagnostics.len(),
        "translated pseudo document"
    );
    Ok(Translation {
        components,
        diagnostics,
    })
}

/// Component-scoped failure: either skip the component with a diagnostic or
/// abort the whole run.
enum BuildError {
    Skip(Diagnostic),
    Fatal(TranslateError),
}

impl From<Diagnostic> for BuildError {
    fn from(diagnostic: Diagnostic) -> Self {
        Self::Skip(diagnostic)
    }
}

impl From<TranslateError> for BuildError {
    fn from(error: TranslateError) -> Self {
        Self::Fatal(error)
    }
}

type BuildResult<T> = std::result::Result<T, BuildError>;

fn build_component(
    component: &PseudoComponent,
    index: &ComponentIndex<'_>,
    options: &TranslateOptions,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<Option<WsbComponent>> {
    if let PseudoKind::Unknown(kind) = &component.kind {
        let diagnostic = Diagnostic::new(
            Some(&component.id),
            Condition::UnsupportedKind,
            format!("unsupported component kind \"{}\"", kind),
        );
        if options.strictness.unknown_kinds == Strictness::Fail {
            return Err(TranslateError::Strict(diagnostic));
        }
        warn!(component = %component.id, kind = %kind, "skipping component of unsupported kind");
        diagnostics.push(diagnostic);
        return Ok(None);
    }

    let Some(entry) = index.get(&component.id) else {
        // The index is built from the same list, so this cannot miss.
        return Ok(None);
    };

    let built = match &component.kind {
        PseudoKind::Section => build_section(entry, component, options, diagnostics),
        PseudoKind::Text => build_text(entry, component, index, options),
        PseudoKind::Button => build_button(entry, component, index, options),
        PseudoKind::Image => build_image(entry, component, index, options),
        PseudoKind::Background => build_background(entry, component, index, options, diagnostics),
        PseudoKind::Unknown(_) => return Ok(None),
    };

    match built {
        Ok(translated) => Ok(Some(translated)),
        Err(BuildError::Skip(diagnostic)) => {
            warn!(component = %component.id, "{}", diagnostic);
            diagnostics.push(diagnostic);
            Ok(None)
        }
        Err(BuildError::Fatal(error)) => Err(error),
    }
}

/// Offset against the parent's absolute position. Every non-SECTION kind
/// requires a resolvable parent.
fn relative_position(
    component: &PseudoComponent,
    index: &ComponentIndex<'_>,
    options: &TranslateOptions,
) -> std::result::Result<RelativePosition, Diagnostic> {
    let Some(parent_id) = component.parent.as_deref() else {
        return Err(Diagnostic::new(
            Some(&component.id),
            Condition::MissingParent,
            "component declares no parent but its kind requires one".to_string(),
        ));
    };
    let Some(parent) = index.get(parent_id) else {
        return Err(Diagnostic::new(
            Some(&component.id),
            Condition::DanglingParent,
            format!("parent \"{}\" does not exist in the document", parent_id),
        ));
    };
    Ok(RelativePosition {
        id: parent.generated_id,
        top: component.top - parent.original.top,
        left: component.left - parent.original.left,
        right: options.layout.rel_right,
        bottom: options.layout.rel_bottom,
    })
}

fn envelope(
    entry: IndexEntry<'_>,
    order_index: i32,
    rel_in: Option<RelativePosition>,
    kind: WsbComponentKind,
) -> WsbComponent {
    let component = entry.original;
    WsbComponent {
        id: entry.generated_id,
        in_template: false,
        order_index,
        wrap: false,
        left: component.left,
        top: component.top,
        width: component.width,
        height: component.height,
        rel_in,
        rel_to: None,
        rel_page: None,
        rel_para: None,
        kind,
    }
}

fn build_section(
    entry: IndexEntry<'_>,
    component: &PseudoComponent,
    options: &TranslateOptions,
    diagnostics: &mut Vec<Diagnostic>,
) -> BuildResult<WsbComponent> {
    let style = style::section_style(component, options, diagnostics)?;
    let spec = SectionSpec {
        stretch: true,
        pin: 0,
        title: component.id.clone(),
        selected_theme: options.theme.section_theme.clone(),
        selected_gradient_theme: None,
        mobile_settings: SurfaceMobileSettings {
            size: FillSize::Cover,
        },
        style: Some(style),
    };
    Ok(envelope(
        entry,
        SECTION_ORDER_INDEX,
        None,
        WsbComponentKind::Section(spec),
    ))
}

fn build_text(
    entry: IndexEntry<'_>,
    component: &PseudoComponent,
    index: &ComponentIndex<'_>,
    options: &TranslateOptions,
) -> BuildResult<WsbComponent> {
    let rel_in = relative_position(component, index, options)?;
    let extraction = content::extract(component.content.as_deref().unwrap_or_default());
    // The paragraph run spans the plain-text payload, not the rendered HTML.
    let text_length = component
        .text
        .as_deref()
        .map(|text| text.chars().count())
        .unwrap_or(0);
    let spec = TextSpec {
        mobile_down: false,
        on_hover: None,
        vertical_alignment: "top".to_string(),
        mobile_hide: false,
        mobile_settings: TextMobileSettings {
            align: None,
            font: 0,
        },
        content: extraction.to_html(),
        text: String::new(),
        styles: Vec::new(),
        paras: vec![(
            1,
            text_length,
            ParaStyle {
                align: component.align.clone(),
                type_id: STYLE_PARA_TYPE.to_string(),
            },
        )],
        links: Vec::new(),
        theme_override_color: None,
        theme_highlight_color: None,
        theme_shadow_blur_radius: 3,
        theme_shadow_color: None,
        theme_shadow_offset_x: 3,
        theme_shadow_offset_y: 3,
        global_style_id: options.theme.global_style_id.clone(),
    };
    Ok(envelope(
        entry,
        TEXT_ORDER_INDEX,
        Some(rel_in),
        WsbComponentKind::Text(spec),
    ))
}

fn build_button(
    entry: IndexEntry<'_>,
    component: &PseudoComponent,
    index: &ComponentIndex<'_>,
    options: &TranslateOptions,
) -> BuildResult<WsbComponent> {
    let rel_in = relative_position(component, index, options)?;
    let text = match component.text.as_deref() {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => options.theme.button_default_text.clone(),
    };
    let spec = ButtonSpec {
        mobile_down: false,
        on_hover: None,
        text,
        mobile_hide: false,
        mobile_settings: ButtonMobileSettings {
            align: "justify".to_string(),
        },
        style: Some(style::button_style(options)),
        link_action: Some(LinkAction::default()),
        button_theme_selected: options.theme.button_theme.clone(),
    };
    Ok(envelope(
        entry,
        BUTTON_ORDER_INDEX,
        Some(rel_in),
        WsbComponentKind::Button(spec),
    ))
}

fn build_image(
    entry: IndexEntry<'_>,
    component: &PseudoComponent,
    index: &ComponentIndex<'_>,
    options: &TranslateOptions,
) -> BuildResult<WsbComponent> {
    let rel_in = relative_position(component, index, options)?;
    let spec = ImageSpec {
        mobile_down: false,
        on_hover: None,
        title: String::new(),
        scale: component.scale,
        logo_title_scale: 1.0,
        rotation: 0.0,
        mobile_hide: false,
        scale_strategy: "crop".to_string(),
        crop_top: options.assets.crop_top,
        crop_left: options.assets.crop_left,
        asset: options.assets.image_placeholder.clone(),
        style: None,
        link_action: None,
        light_box_enabled: false,
        open_link: true,
        logo_horizontal_alignment: "left".to_string(),
    };
    Ok(envelope(
        entry,
        IMAGE_ORDER_INDEX,
        Some(rel_in),
        WsbComponentKind::Image(spec),
    ))
}

fn build_background(
    entry: IndexEntry<'_>,
    component: &PseudoComponent,
    index: &ComponentIndex<'_>,
    options: &TranslateOptions,
    diagnostics: &mut Vec<Diagnostic>,
) -> BuildResult<WsbComponent> {
    let rel_in = relative_position(component, index, options)?;
    let color = style::background_color_tuple(component, options, diagnostics)?;
    let mut asset = options.assets.background.clone();
    asset.id = Uuid::new_v4();
    let authored = component.style.as_ref();
    let spec = BackgroundSpec {
        on_hover: None,
        style: BackgroundStyle {
            background: BackgroundFill {
                color_data: ColorData {
                    color,
                    gradient: None,
                },
                asset_data: BackgroundAssetData {
                    opacity: 1.0,
                    asset,
                    repeat: [true, true],
                    overlay: "none".to_string(),
                    position: ["50%".to_string(), "50%".to_string()],
                    size: FillSize::Contain,
                    scroll_effect: None,
                },
            },
            border: BorderStyle {
                style: authored.and_then(|style| style.border.clone()),
                corners: color::border_radius_to_corners(
                    authored.and_then(|style| style.border_radius),
                ),
            },
        },
        mobile_settings: SurfaceMobileSettings {
            size: FillSize::Cover,
        },
        selected_theme: options.theme.background_theme.clone(),
    };
    Ok(envelope(
        entry,
        BACKGROUND_ORDER_INDEX,
        Some(rel_in),
        WsbComponentKind::Background(spec),
    ))
}
