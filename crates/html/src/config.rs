//! Document construction settings.

use serde::Deserialize;

/// Widest indentation accepted from configuration files.
pub const MAX_INDENT_WIDTH: usize = 16;

/// Settings fixed at document construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DocumentConfig {
    /// Spaces per nesting level in the rendered output.
    pub indent_width: usize,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self { indent_width: 4 }
    }
}

impl DocumentConfig {
    pub fn with_indent_width(indent_width: usize) -> Self {
        Self { indent_width }
    }

    /// Parse settings from a TOML table, falling back to defaults for
    /// missing keys.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        if config.indent_width > MAX_INDENT_WIDTH {
            return Err(ConfigError::IndentTooWide(config.indent_width));
        }
        Ok(config)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("indent width {0} exceeds the maximum of {max}", max = MAX_INDENT_WIDTH)]
    IndentTooWide(usize),
}
