//! WSB translator configuration system
//!
//! This crate provides centralized configuration management for the WSB
//! translator, loading settings from `wsb.toml` as an alternative to
//! environment variables.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure for the WSB translator
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct WsbConfig {
    /// Strictness switches for tolerated input problems
    pub strictness: StrictnessConfig,
    /// Theme names and style identifiers stamped onto output components
    pub theme: ThemeConfig,
    /// Relative-position sentinel overrides
    pub layout: LayoutConfig,
    /// Asset reference overrides
    pub assets: AssetsConfig,
}

/// Strictness configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StrictnessConfig {
    /// Fail the run when a component kind is outside the known set
    pub fail_on_unknown_kind: bool,
    /// Fail the run when a background color cannot be parsed
    pub fail_on_color_fallback: bool,
}

/// Theme configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Theme name stamped onto sections (default "Black")
    pub section_theme: Option<String>,
    /// Theme name stamped onto backgrounds (default "White")
    pub background_theme: Option<String>,
    /// Theme name stamped onto buttons (default "primary")
    pub button_theme: Option<String>,
    /// Label substituted when a button has none (default "Button")
    pub button_default_text: Option<String>,
    /// Global text style referenced by TEXT components
    pub global_style_id: Option<String>,
    /// Global style id referenced by BUTTON components
    pub button_global_id: Option<String>,
    /// Global style name referenced by BUTTON components
    pub button_global_name: Option<String>,
    /// Substitute for unparseable background colors (any CSS color string)
    pub fallback_color: Option<String>,
}

/// Layout configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Sentinel written into `relIn.right` (default -250)
    pub rel_right: Option<f64>,
    /// Sentinel written into `relIn.bottom` (default -250)
    pub rel_bottom: Option<f64>,
}

/// Asset configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// URL of the placeholder referenced by IMAGE components
    pub image_url: Option<String>,
    /// URL of the background image attached to opted-in sections
    pub section_background_url: Option<String>,
    /// URL of the asset minted per BACKGROUND component
    pub background_url: Option<String>,
    /// Vertical crop applied to IMAGE components (default 170)
    pub crop_top: Option<f64>,
    /// Horizontal crop applied to IMAGE components (default 0)
    pub crop_left: Option<f64>,
}

impl Default for StrictnessConfig {
    fn default() -> Self {
        Self {
            fail_on_unknown_kind: false,
            fail_on_color_fallback: false,
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            section_theme: None,
            background_theme: None,
            button_theme: None,
            button_default_text: None,
            global_style_id: None,
            button_global_id: None,
            button_global_name: None,
            fallback_color: None,
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            rel_right: None,
            rel_bottom: None,
        }
    }
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            image_url: None,
            section_background_url: None,
            background_url: None,
            crop_top: None,
            crop_left: None,
        }
    }
}

impl WsbConfig {
    /// Load configuration from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to the wsb.toml configuration file
    ///
    /// # Returns
    /// * `Ok(WsbConfig)` - Successfully loaded configuration
    /// * `Err(String)` - Error message if loading failed
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {}", e))
    }

    /// Load configuration from the default location (wsb.toml in the current directory)
    /// or return default configuration if file doesn't exist
    pub fn load_or_default() -> Self {
        Self::load_from_file("wsb.toml").unwrap_or_default()
    }

    /// Merge configuration with environment variables
    ///
    /// Environment variables take precedence over configuration file values.
    /// This allows for temporary overrides without modifying the config file.
    pub fn merge_with_env(&mut self) {
        // Strictness settings
        if let Ok(val) = std::env::var("WSB_FAIL_ON_UNKNOWN_KIND") {
            self.strictness.fail_on_unknown_kind = val == "1" || val.eq_ignore_ascii_case("true");
        }
        if let Ok(val) = std::env::var("WSB_FAIL_ON_COLOR_FALLBACK") {
            self.strictness.fail_on_color_fallback = val == "1" || val.eq_ignore_ascii_case("true");
        }

        // Theme settings
        if let Ok(theme) = std::env::var("WSB_SECTION_THEME") {
            self.theme.section_theme = Some(theme);
        }
        if let Ok(theme) = std::env::var("WSB_BACKGROUND_THEME") {
            self.theme.background_theme = Some(theme);
        }
        if let Ok(theme) = std::env::var("WSB_BUTTON_THEME") {
            self.theme.button_theme = Some(theme);
        }
        if let Ok(text) = std::env::var("WSB_BUTTON_TEXT") {
            self.theme.button_default_text = Some(text);
        }
        if let Ok(id) = std::env::var("WSB_GLOBAL_STYLE_ID") {
            self.theme.global_style_id = Some(id);
        }
        if let Ok(color) = std::env::var("WSB_FALLBACK_COLOR") {
            self.theme.fallback_color = Some(color);
        }

        // Layout settings
        if let Ok(val) = std::env::var("WSB_REL_RIGHT") {
            if let Ok(sentinel) = val.parse::<f64>() {
                self.layout.rel_right = Some(sentinel);
            }
        }
        if let Ok(val) = std::env::var("WSB_REL_BOTTOM") {
            if let Ok(sentinel) = val.parse::<f64>() {
                self.layout.rel_bottom = Some(sentinel);
            }
        }

        // Asset settings
        if let Ok(url) = std::env::var("WSB_IMAGE_URL") {
            self.assets.image_url = Some(url);
        }
        if let Ok(url) = std::env::var("WSB_SECTION_BACKGROUND_URL") {
            self.assets.section_background_url = Some(url);
        }
        if let Ok(url) = std::env::var("WSB_BACKGROUND_URL") {
            self.assets.background_url = Some(url);
        }
        if let Ok(val) = std::env::var("WSB_CROP_TOP") {
            if let Ok(crop) = val.parse::<f64>() {
                self.assets.crop_top = Some(crop);
            }
        }
        if let Ok(val) = std::env::var("WSB_CROP_LEFT") {
            if let Ok(crop) = val.parse::<f64>() {
                self.assets.crop_left = Some(crop);
            }
        }
    }

    /// Load configuration with environment variable overrides
    ///
    /// This is the recommended way to load configuration:
    /// 1. Load from wsb.toml (or use defaults if not found)
    /// 2. Override with environment variables if present
    pub fn load() -> Self {
        let mut config = Self::load_or_default();
        config.merge_with_env();
        config
    }
}
