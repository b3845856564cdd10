//! Configuration
//!
//! Layered the usual way: environment variables override the optional TOML
//! config file, which overrides built-in defaults. A missing or unparsable
//! file is logged and ignored.

use std::path::PathBuf;

use serde::Deserialize;

use crate::Result;

/// Runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Locale to classify and speak in by default (e.g. "hi")
    pub default_locale: String,

    /// Whether voice features are enabled at all
    pub voice_enabled: bool,

    /// Data directory (preferences blob lives here)
    pub data_dir: PathBuf,
}

/// Optional TOML config file shape; every field optional
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    default_locale: Option<String>,
    voice_enabled: Option<bool>,
    data_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration (env > toml > default)
    ///
    /// # Errors
    ///
    /// Returns an error only when an explicitly named config file cannot be
    /// read or parsed; the default file location is best-effort.
    pub fn load() -> Result<Self> {
        Self::load_with_options(false)
    }

    /// Load configuration with an explicit voice disable option
    ///
    /// # Errors
    ///
    /// See [`Config::load`].
    pub fn load_with_options(disable_voice: bool) -> Result<Self> {
        let fc = load_config_file()?;

        let default_locale = std::env::var("YOJANA_LOCALE")
            .ok()
            .or(fc.default_locale)
            .unwrap_or_else(|| "en".to_string());

        let voice_enabled = if disable_voice {
            false
        } else {
            std::env::var("YOJANA_DISABLE_VOICE")
                .ok()
                .map(|v| !(v == "1" || v.eq_ignore_ascii_case("true")))
                .or(fc.voice_enabled)
                .unwrap_or(true)
        };

        let data_dir = std::env::var("YOJANA_DATA_DIR")
            .map(PathBuf::from)
            .ok()
            .or(fc.data_dir)
            .unwrap_or_else(default_data_dir);

        if disable_voice {
            tracing::info!("voice explicitly disabled");
        }

        Ok(Self {
            default_locale,
            voice_enabled,
            data_dir,
        })
    }
}

/// Default data directory: `~/.local/share/yojana` on Linux
fn default_data_dir() -> PathBuf {
    directories::BaseDirs::new().map_or_else(
        || PathBuf::from(".local/share/yojana"),
        |d| d.data_dir().join("yojana"),
    )
}

/// Load the optional TOML config file
///
/// `YOJANA_CONFIG` names an explicit file (errors surface); otherwise
/// `~/.config/yojana/config.toml` is tried best-effort.
fn load_config_file() -> Result<ConfigFile> {
    if let Ok(path) = std::env::var("YOJANA_CONFIG") {
        let content = std::fs::read_to_string(&path)?;
        let fc = toml::from_str(&content)?;
        tracing::info!(path = %path, "loaded config file");
        return Ok(fc);
    }

    let Some(dirs) = directories::BaseDirs::new() else {
        return Ok(ConfigFile::default());
    };
    let path = dirs.config_dir().join("yojana").join("config.toml");
    if !path.exists() {
        return Ok(ConfigFile::default());
    }

    match std::fs::read_to_string(&path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(fc) => {
                tracing::info!(path = %path.display(), "loaded config file");
                Ok(fc)
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "bad config file, using defaults");
                Ok(ConfigFile::default())
            }
        },
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to read config file");
            Ok(ConfigFile::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disable_option_forces_voice_off() {
        let config = Config::load_with_options(true).unwrap();
        assert!(!config.voice_enabled);
    }
}
