//! Console configuration.

use crate::error::ConfigError;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_engine::Mark;
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

/// Settings for the console game.
///
/// Every field has a default, so a partial file (or none) is fine.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Character drawn for X.
    #[serde(default = "default_x_glyph")]
    x_glyph: char,

    /// Character drawn for O.
    #[serde(default = "default_o_glyph")]
    o_glyph: char,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_x_glyph() -> char {
    'X'
}

fn default_o_glyph() -> char {
    'O'
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            x_glyph: default_x_glyph(),
            o_glyph: default_o_glyph(),
            log_filter: default_log_filter(),
        }
    }
}

impl ConsoleConfig {
    /// Loads and validates configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        info!(x = %config.x_glyph, o = %config.o_glyph, "Config loaded successfully");
        Ok(config)
    }

    /// Replaces glyphs given on the command line, then re-validates.
    #[instrument(skip(self))]
    pub fn with_glyph_overrides(
        mut self,
        x_glyph: Option<char>,
        o_glyph: Option<char>,
    ) -> Result<Self, ConfigError> {
        if let Some(x) = x_glyph {
            self.x_glyph = x;
        }
        if let Some(o) = o_glyph {
            self.o_glyph = o;
        }
        self.validate()?;
        Ok(self)
    }

    /// Checks that glyphs are distinguishable on the board and that the
    /// log filter parses.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for glyph in [self.x_glyph, self.o_glyph] {
            if glyph.is_ascii_digit() || glyph.is_whitespace() || glyph.is_control() {
                return Err(ConfigError::new(format!(
                    "Glyph {:?} would be confused with an empty cell",
                    glyph
                )));
            }
        }
        if self.x_glyph == self.o_glyph {
            return Err(ConfigError::new(format!(
                "X and O share the glyph {:?}",
                self.x_glyph
            )));
        }
        EnvFilter::try_new(&self.log_filter)
            .map_err(|e| ConfigError::new(format!("Invalid log filter: {}", e)))?;
        Ok(())
    }

    /// Returns the glyph table for rendering.
    pub fn glyphs(&self) -> Glyphs {
        Glyphs {
            x: self.x_glyph,
            o: self.o_glyph,
        }
    }
}

/// Characters used to draw each mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    /// Glyph for X.
    pub x: char,
    /// Glyph for O.
    pub o: char,
}

impl Glyphs {
    /// Returns the glyph for a mark.
    pub fn glyph(&self, mark: Mark) -> char {
        match mark {
            Mark::X => self.x,
            Mark::O => self.o,
        }
    }
}

impl Default for Glyphs {
    fn default() -> Self {
        ConsoleConfig::default().glyphs()
    }
}
