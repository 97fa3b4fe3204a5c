//! The WSB component schema.
//!
//! Output types mirror the document schema the page engine persists: a
//! common positioning envelope with a `kind` tag, plus a per-kind payload of
//! theme defaults, asset descriptors, and style data. Serialization matches
//! the engine's JSON byte for byte in key naming and null handling, so
//! optional envelope fields serialize as explicit `null`s rather than being
//! dropped.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::color::ColorTuple;

/// Paragraph style type identifier attached to every TEXT run.
pub const STYLE_PARA_TYPE: &str = "web.data.styles.StylePara";
/// Global style type identifier carried by the button descriptor.
pub const STYLE_BUTTON_TYPE: &str = "web.data.styles.StyleButton";
/// Asset type identifier for image references.
pub const IMAGE_ASSET_TYPE: &str = "web.data.assets.Image";

/// A translated component: shared positioning envelope plus the kind-tagged
/// payload flattened alongside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WsbComponent {
    pub id: Uuid,
    pub in_template: bool,
    pub order_index: i32,
    pub wrap: bool,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub rel_in: Option<RelativePosition>,
    pub rel_to: Option<Value>,
    pub rel_page: Option<Value>,
    pub rel_para: Option<Value>,
    #[serde(flatten)]
    pub kind: WsbComponentKind,
}

/// Per-kind payload, discriminated by the `kind` key in serialized form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "UPPERCASE")]
pub enum WsbComponentKind {
    Section(SectionSpec),
    Text(TextSpec),
    Button(ButtonSpec),
    Image(ImageSpec),
    Background(BackgroundSpec),
}

impl WsbComponentKind {
    /// Stable name of the kind tag, for logs and diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Section(_) => "SECTION",
            Self::Text(_) => "TEXT",
            Self::Button(_) => "BUTTON",
            Self::Image(_) => "IMAGE",
            Self::Background(_) => "BACKGROUND",
        }
    }
}

/// Offset of a component inside its parent. `right` and `bottom` are layout
/// sentinels, not computed edges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelativePosition {
    pub id: Uuid,
    pub top: f64,
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionSpec {
    pub stretch: bool,
    pub pin: i32,
    pub title: String,
    pub selected_theme: String,
    pub selected_gradient_theme: Option<String>,
    pub mobile_settings: SurfaceMobileSettings,
    pub style: Option<SectionStyle>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextSpec {
    pub mobile_down: bool,
    pub on_hover: Option<Value>,
    pub vertical_alignment: String,
    pub mobile_hide: bool,
    pub mobile_settings: TextMobileSettings,
    pub content: String,
    pub text: String,
    pub styles: Vec<Value>,
    pub paras: Vec<ParaRun>,
    pub links: Vec<Value>,
    pub theme_override_color: Option<ColorTuple>,
    pub theme_highlight_color: Option<ColorTuple>,
    pub theme_shadow_blur_radius: i32,
    pub theme_shadow_color: Option<ColorTuple>,
    pub theme_shadow_offset_x: i32,
    pub theme_shadow_offset_y: i32,
    pub global_style_id: String,
}

/// One styled run of text: `[start, length, style]` in serialized form.
pub type ParaRun = (u32, usize, ParaStyle);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParaStyle {
    pub align: Option<String>,
    #[serde(rename = "type")]
    pub type_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonSpec {
    pub mobile_down: bool,
    pub on_hover: Option<Value>,
    pub text: String,
    pub mobile_hide: bool,
    pub mobile_settings: ButtonMobileSettings,
    pub style: Option<GlobalButtonStyle>,
    pub link_action: Option<LinkAction>,
    pub button_theme_selected: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageSpec {
    pub mobile_down: bool,
    pub on_hover: Option<Value>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    pub logo_title_scale: f64,
    pub rotation: f64,
    pub mobile_hide: bool,
    pub scale_strategy: String,
    pub crop_top: f64,
    pub crop_left: f64,
    pub asset: ImageAsset,
    pub style: Option<Value>,
    pub link_action: Option<LinkAction>,
    pub light_box_enabled: bool,
    pub open_link: bool,
    pub logo_horizontal_alignment: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundSpec {
    pub on_hover: Option<Value>,
    pub style: BackgroundStyle,
    pub mobile_settings: SurfaceMobileSettings,
    pub selected_theme: String,
}

/// Mobile sizing for full-width surfaces (sections and backgrounds).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceMobileSettings {
    pub size: FillSize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextMobileSettings {
    pub align: Option<String>,
    pub font: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonMobileSettings {
    pub align: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillSize {
    Cover,
    Contain,
}

/// Navigation behavior attached to buttons. Carries no fields yet but
/// serializes as an object, distinguishing "no action configured" (`{}`)
/// from "no action support" (`null`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkAction {}

/// The shared global button style descriptor referenced by every button.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalButtonStyle {
    pub global_id: String,
    pub global_name: String,
    #[serde(rename = "type")]
    pub type_id: String,
    pub text: ButtonTextStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonTextStyle {
    pub size: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionStyle {
    pub border: Option<BorderStyle>,
    pub background: SectionBackground,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionBackground {
    pub color_data: ColorData,
    pub asset_data: Option<SectionAssetData>,
}

/// Background image block for a section, present only when the component
/// opts in via its `backgroundImage` flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionAssetData {
    pub asset: ImageAsset,
    pub repeat: [bool; 2],
    pub position: [String; 2],
    pub size: FillSize,
    pub scroll_effect: Option<String>,
    pub opacity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackgroundStyle {
    pub background: BackgroundFill,
    pub border: BorderStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundFill {
    pub color_data: ColorData,
    pub asset_data: BackgroundAssetData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundAssetData {
    pub opacity: f64,
    pub asset: BackgroundAsset,
    pub repeat: [bool; 2],
    pub overlay: String,
    pub position: [String; 2],
    pub size: FillSize,
    pub scroll_effect: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorData {
    pub color: ColorTuple,
    pub gradient: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BorderStyle {
    pub style: Option<String>,
    pub corners: [f64; 4],
}

/// A stored image reference with probe metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageAsset {
    pub alpha: Option<f64>,
    pub animated: bool,
    pub bpp: Option<u32>,
    pub content_type: String,
    pub etag: String,
    pub filesize: u64,
    pub height: u32,
    pub image: Option<Value>,
    pub recommended_format: Option<String>,
    pub url: String,
    pub width: u32,
}

/// An owned image reference minted per background component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundAsset {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub type_id: String,
    pub etag: String,
    pub url: String,
    pub content_type: String,
    pub alpha: Option<f64>,
    pub bpp: Option<u32>,
    pub width: u32,
    pub height: u32,
    pub animated: bool,
    pub recommended_format: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_serializes_with_kind_tag_and_explicit_nulls() {
        let component = WsbComponent {
            id: Uuid::nil(),
            in_template: false,
            order_index: 3,
            wrap: false,
            left: 0.0,
            top: 0.0,
            width: 100.0,
            height: 50.0,
            rel_in: None,
            rel_to: None,
            rel_page: None,
            rel_para: None,
            kind: WsbComponentKind::Section(SectionSpec {
                stretch: true,
                pin: 0,
                title: "hero".to_string(),
                selected_theme: "Black".to_string(),
                selected_gradient_theme: None,
                mobile_settings: SurfaceMobileSettings {
                    size: FillSize::Cover,
                },
                style: None,
            }),
        };
        let value = serde_json::to_value(&component).unwrap();
        assert_eq!(value["kind"], json!("SECTION"));
        assert_eq!(value["orderIndex"], json!(3));
        assert_eq!(value["relIn"], Value::Null);
        assert_eq!(value["relTo"], Value::Null);
        assert_eq!(value["selectedTheme"], json!("Black"));
        assert_eq!(value["mobileSettings"], json!({ "size": "cover" }));

        let back: WsbComponent = serde_json::from_value(value).unwrap();
        assert_eq!(back, component);
    }

    #[test]
    fn image_scale_is_omitted_when_absent() {
        let spec = ImageSpec {
            mobile_down: false,
            on_hover: None,
            title: String::new(),
            scale: None,
            logo_title_scale: 1.0,
            rotation: 0.0,
            mobile_hide: false,
            scale_strategy: "crop".to_string(),
            crop_top: 170.0,
            crop_left: 0.0,
            asset: ImageAsset {
                alpha: None,
                animated: false,
                bpp: None,
                content_type: "image/jpeg".to_string(),
                etag: String::new(),
                filesize: 0,
                height: 10,
                image: None,
                recommended_format: None,
                url: "repository:/x.jpg".to_string(),
                width: 10,
            },
            style: None,
            link_action: None,
            light_box_enabled: false,
            open_link: true,
            logo_horizontal_alignment: "left".to_string(),
        };
        let value = serde_json::to_value(&spec).unwrap();
        assert!(value.get("scale").is_none());
        assert_eq!(value["linkAction"], Value::Null);

        let mut with_scale = spec;
        with_scale.scale = Some(0.5);
        let value = serde_json::to_value(&with_scale).unwrap();
        assert_eq!(value["scale"], json!(0.5));
    }

    #[test]
    fn link_action_serializes_as_empty_object() {
        assert_eq!(
            serde_json::to_value(LinkAction::default()).unwrap(),
            json!({})
        );
    }

    #[test]
    fn para_run_serializes_as_heterogeneous_array() {
        let run: ParaRun = (
            1,
            5,
            ParaStyle {
                align: Some("center".to_string()),
                type_id: STYLE_PARA_TYPE.to_string(),
            },
        );
        assert_eq!(
            serde_json::to_value(run).unwrap(),
            json!([1, 5, { "align": "center", "type": "web.data.styles.StylePara" }])
        );
    }
}
