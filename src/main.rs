use anyhow::{Context, Result, bail};
use std::env;
use std::fs;
use std::path::PathBuf;

use wsb_config::WsbConfig;
use wsb_ir::{PseudoDocument, Strictness, TranslateOptions, translate};

fn main() -> Result<()> {
    let _ = env_logger::try_init();

    let mut args = env::args().skip(1).collect::<Vec<_>>();
    if args.is_empty() {
        eprintln!(
            "Usage: cargo run -- <pseudo-json> [--config <wsb.toml>] [--out <path>] [--pretty]"
        );
        bail!("missing <pseudo-json>");
    }

    let input = PathBuf::from(args.remove(0));
    if !input.exists() {
        bail!("input file not found: {}", input.display());
    }

    // Parse optional flags
    let mut out: Option<PathBuf> = None;
    let mut config_path: Option<PathBuf> = None;
    let mut pretty = false;
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--out" => {
                if i + 1 >= args.len() {
                    bail!("--out expects a path");
                }
                out = Some(PathBuf::from(&args[i + 1]));
                i += 2;
            }
            "--config" => {
                if i + 1 >= args.len() {
                    bail!("--config expects a path");
                }
                config_path = Some(PathBuf::from(&args[i + 1]));
                i += 2;
            }
            "--pretty" => {
                pretty = true;
                i += 1;
            }
            other => bail!("unknown argument: {}", other),
        }
    }

    let config = match config_path {
        Some(path) => {
            let mut config = WsbConfig::load_from_file(&path).map_err(|e| anyhow::anyhow!(e))?;
            config.merge_with_env();
            config
        }
        None => WsbConfig::load(),
    };
    let options = to_translate_options(&config);

    let source =
        fs::read_to_string(&input).with_context(|| format!("failed to read {}", input.display()))?;
    let document: PseudoDocument = serde_json::from_str(&source)
        .with_context(|| format!("failed to parse {}", input.display()))?;

    let translation = translate(&document, &options)?;
    for diagnostic in &translation.diagnostics {
        log::warn!("{}", diagnostic);
    }
    log::info!(
        "translated {} of {} components",
        translation.components.len(),
        document.components.len()
    );

    let json = if pretty {
        serde_json::to_string_pretty(&translation.components)?
    } else {
        serde_json::to_string(&translation.components)?
    };
    match out {
        Some(path) => {
            fs::write(&path, json)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("wrote {}", path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}

/// Applies file/env configuration on top of the built-in defaults.
fn to_translate_options(config: &WsbConfig) -> TranslateOptions {
    let mut options = TranslateOptions::default();

    if config.strictness.fail_on_unknown_kind {
        options.strictness.unknown_kinds = Strictness::Fail;
    }
    if config.strictness.fail_on_color_fallback {
        options.strictness.color_fallback = Strictness::Fail;
    }

    if let Some(theme) = &config.theme.section_theme {
        options.theme.section_theme = theme.clone();
    }
    if let Some(theme) = &config.theme.background_theme {
        options.theme.background_theme = theme.clone();
    }
    if let Some(theme) = &config.theme.button_theme {
        options.theme.button_theme = theme.clone();
    }
    if let Some(text) = &config.theme.button_default_text {
        options.theme.button_default_text = text.clone();
    }
    if let Some(id) = &config.theme.global_style_id {
        options.theme.global_style_id = id.clone();
    }
    if let Some(id) = &config.theme.button_global_id {
        options.theme.button_global_id = id.clone();
    }
    if let Some(name) = &config.theme.button_global_name {
        options.theme.button_global_name = name.clone();
    }
    if let Some(color) = &config.theme.fallback_color {
        match wsb_ir::color::parse_color_expression(color) {
            Ok(rgba) => options.fallback_color = rgba,
            Err(err) => log::warn!("ignoring invalid fallback color \"{}\": {}", color, err),
        }
    }

    if let Some(sentinel) = config.layout.rel_right {
        options.layout.rel_right = sentinel;
    }
    if let Some(sentinel) = config.layout.rel_bottom {
        options.layout.rel_bottom = sentinel;
    }

    if let Some(url) = &config.assets.image_url {
        options.assets.image_placeholder.url = url.clone();
    }
    if let Some(url) = &config.assets.section_background_url {
        options.assets.section_background.asset.url = url.clone();
    }
    if let Some(url) = &config.assets.background_url {
        options.assets.background.url = url.clone();
    }
    if let Some(crop) = config.assets.crop_top {
        options.assets.crop_top = crop;
    }
    if let Some(crop) = config.assets.crop_left {
        options.assets.crop_left = crop;
    }

    options
}
