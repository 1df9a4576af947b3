//! Colour theme for the jsearch shell.
//!
//! The default theme is an embedded TOML document mapping each role to a
//! console dotted style string (`"cyan.bold"`, `"red"`, `"dim"`, …). Call
//! [`Theme::load_default`] at startup and pass the result through the shell
//! by reference; use [`Theme::plain`] where output must carry no escape codes.

use config::{Config, File, FileFormat};
use console::Style;
use dialoguer::theme::ColorfulTheme;
use serde::Deserialize;

const DEFAULT_THEME_SRC: &str = r#"
key     = "cyan"
value   = ""
heading = "yellow.bold"
count   = "green"
error   = "red.bold"
muted   = "dim"
"#;

// ---------------------------------------------------------------------------
// Raw (serde) type — mirrors the TOML structure
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawTheme {
    key: String,
    value: String,
    heading: String,
    count: String,
    error: String,
    muted: String,
}

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Theme {
    /// Field names in rendered rows.
    pub key: Style,
    /// Field values in rendered rows.
    pub value: Style,
    /// Relationship and table headings.
    pub heading: Style,
    /// Result count footer.
    pub count: Style,
    pub error: Style,
    pub muted: Style,
}

impl Theme {
    pub fn load_default() -> Self {
        Self::from_toml(DEFAULT_THEME_SRC).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "embedded theme failed to parse, using plain");
            Self::plain()
        })
    }

    /// Parse a theme from TOML source.
    pub fn from_toml(src: &str) -> anyhow::Result<Self> {
        let raw: RawTheme = Config::builder()
            .add_source(File::from_str(src, FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        Ok(Self {
            key: Style::from_dotted_str(&raw.key),
            value: Style::from_dotted_str(&raw.value),
            heading: Style::from_dotted_str(&raw.heading),
            count: Style::from_dotted_str(&raw.count),
            error: Style::from_dotted_str(&raw.error),
            muted: Style::from_dotted_str(&raw.muted),
        })
    }

    /// A theme that never emits escape codes.
    pub fn plain() -> Self {
        Self {
            key: Style::new(),
            value: Style::new(),
            heading: Style::new(),
            count: Style::new(),
            error: Style::new(),
            muted: Style::new(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::load_default()
    }
}

/// Theme used for interactive prompts.
pub fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme {
        active_item_style: Style::new().cyan().bold(),
        active_item_prefix: console::style("❯".to_string()).cyan().bold(),
        prompt_style: Style::new().bold(),
        prompt_prefix: console::style("?".to_string()).yellow().bold(),
        success_prefix: console::style("✔".to_string()).green().bold(),
        error_prefix: console::style("✖".to_string()).red().bold(),
        hint_style: Style::new().dim(),
        values_style: Style::new().cyan(),
        ..Default::default()
    }
}
