//! Configuration types for interlinear.
//!
//! [`Config::load`] reads `~/.config/interlinear/config.toml`, creating it
//! with hardcoded defaults if it does not yet exist. [`Config::defaults`]
//! returns the same defaults without touching the filesystem (useful in
//! tests).

use crate::types::Fold;
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[ui]
word_pane_width_pct = 25
no_heading_label    = "Sin encabezado"
separator           = "---"

[search]
ignore_accents = true

[keybindings]
toggle_focus     = "Tab"
query_focus      = "/"
scroll_to_top    = "g"
scroll_to_bottom = "G"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from
/// `~/.config/interlinear/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub keybindings: KeybindingsConfig,
}

/// `[ui]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_word_pane_width_pct")]
    pub word_pane_width_pct: u16,
    #[serde(default = "default_no_heading_label")]
    pub no_heading_label: String,
    #[serde(default = "default_separator")]
    pub separator: String,
}

fn default_word_pane_width_pct() -> u16 { 25 }
fn default_no_heading_label() -> String { "Sin encabezado".to_string() }
fn default_separator() -> String { "---".to_string() }

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            word_pane_width_pct: default_word_pane_width_pct(),
            no_heading_label: default_no_heading_label(),
            separator: default_separator(),
        }
    }
}

/// `[search]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    /// Compare without breathings, accents and iota subscript. When false,
    /// only case is ignored.
    #[serde(default = "default_ignore_accents")]
    pub ignore_accents: bool,
}

fn default_ignore_accents() -> bool { true }

impl Default for SearchConfig {
    fn default() -> Self {
        Self { ignore_accents: default_ignore_accents() }
    }
}

impl SearchConfig {
    pub fn fold(&self) -> Fold {
        if self.ignore_accents {
            Fold::Accents
        } else {
            Fold::Case
        }
    }
}

/// `[keybindings]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct KeybindingsConfig {
    #[serde(default = "default_toggle_focus")]
    pub toggle_focus: String,
    #[serde(default = "default_query_focus")]
    pub query_focus: String,
    #[serde(default = "default_scroll_to_top")]
    pub scroll_to_top: String,
    #[serde(default = "default_scroll_to_bottom")]
    pub scroll_to_bottom: String,
}

fn default_toggle_focus() -> String { "Tab".to_string() }
fn default_query_focus() -> String { "/".to_string() }
fn default_scroll_to_top() -> String { "g".to_string() }
fn default_scroll_to_bottom() -> String { "G".to_string() }

impl Default for KeybindingsConfig {
    fn default() -> Self {
        Self {
            toggle_focus: default_toggle_focus(),
            query_focus: default_query_focus(),
            scroll_to_top: default_scroll_to_top(),
            scroll_to_bottom: default_scroll_to_bottom(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/interlinear/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
            tracing::info!(path = %path.display(), "wrote default config");
        }

        Self::load_from(&path)
    }

    /// Load `path` layered on top of the built-in defaults. A missing file
    /// yields the defaults.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("interlinear")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
