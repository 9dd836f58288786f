use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse parser options: {source}")]
    OptionsParseError { source: toml::de::Error },

    #[error("Invalid value for `{option}`: {reason}")]
    InvalidOption {
        option: &'static str,
        reason: String,
    },
}

/// How line terminators are recognised when splitting a document.
///
/// `\r\n` handling is a caller decision: by default a `\r` before `\n` is
/// ordinary line content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEndings {
    /// Split on `\n` only.
    #[default]
    Lf,
    /// Split on `\n`, stripping a directly preceding `\r` from the line content.
    Crlf,
    /// Like `Crlf`, and a bare `\r` also ends a line.
    Any,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserOptions {
    pub line_endings: LineEndings,
    /// Character whose leading repetitions give a heading its level.
    pub heading_marker: char,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            line_endings: LineEndings::Lf,
            heading_marker: '*',
        }
    }
}

impl ParserOptions {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let options: ParserOptions =
            toml::from_str(content).map_err(|source| ConfigError::OptionsParseError { source })?;
        options.validate()?;
        Ok(options)
    }

    pub fn to_toml_string(&self) -> anyhow::Result<String> {
        self.validate()?;
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.heading_marker.is_whitespace() {
            return Err(ConfigError::InvalidOption {
                option: "heading_marker",
                reason: format!("{:?} is whitespace", self.heading_marker),
            });
        }
        Ok(())
    }
}
