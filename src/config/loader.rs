// Configuration loader
// Loads widget settings from ~/.chipbox/config.toml or an explicit path

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::colors::{ColorScheme, ColorTheme};
use super::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use super::settings::{Config, WidgetSettings};

/// Errors raised while reading a config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Default, Deserialize)]
struct TomlConfig {
    #[serde(default)]
    widget: Option<WidgetSettings>,
    #[serde(default)]
    theme: Option<ColorTheme>,
    #[serde(default)]
    colors: Option<ColorScheme>,
    #[serde(default)]
    log_file: Option<PathBuf>,
}

/// Default config location: `~/.chipbox/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Load configuration from `path`, or from the default location.
///
/// An explicit path must exist. A missing default file yields built-in defaults.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    if let Some(path) = path {
        return load_config_from(path)
            .with_context(|| format!("Could not load config from {}", path.display()));
    }

    match default_config_path() {
        Some(default_path) if default_path.exists() => load_config_from(&default_path)
            .with_context(|| format!("Could not load config from {}", default_path.display())),
        _ => {
            tracing::debug!("no config file found, using defaults");
            Ok(Config::default())
        }
    }
}

/// Read and validate a config file
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let toml_config: TomlConfig = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let widget = toml_config.widget.unwrap_or_default();
    validate(&widget)?;

    let theme = toml_config.theme.unwrap_or_default();
    let colors = toml_config.colors.unwrap_or_else(|| theme.to_scheme());

    tracing::debug!(path = %path.display(), ?theme, "config loaded");
    Ok(Config {
        widget,
        theme,
        colors,
        log_file: toml_config.log_file,
    })
}

fn validate(widget: &WidgetSettings) -> Result<(), ConfigError> {
    if widget.width == 0 {
        return Err(ConfigError::Invalid {
            field: "widget.width",
            reason: "must be at least 1".to_string(),
        });
    }
    if widget.max_visible == 0 {
        return Err(ConfigError::Invalid {
            field: "widget.max_visible",
            reason: "must be at least 1".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_full_config() {
        let file = write_config(
            r#"
            theme = "high-contrast"
            log_file = "/tmp/chipbox.log"

            [widget]
            width = 60
            max_visible = 8
            placeholder = "Add labels..."
            allow_new = false
            new_value_label = "Create %s"
            flash_duration_ms = 500
            "#,
        );
        let config = load_config_from(file.path()).unwrap();
        assert_eq!(config.theme, ColorTheme::HighContrast);
        assert_eq!(config.widget.width, 60);
        assert_eq!(config.widget.max_visible, 8);
        assert!(!config.widget.allow_new);
        assert_eq!(config.widget.new_value_label, "Create %s");
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/chipbox.log")));
        assert_eq!(
            config.colors.dropdown.selected_bg,
            ColorTheme::HighContrast.to_scheme().dropdown.selected_bg
        );
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let file = write_config("");
        let config = load_config_from(file.path()).unwrap();
        assert_eq!(config.widget, WidgetSettings::default());
        assert_eq!(config.theme, ColorTheme::Dark);
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_zero_max_visible_rejected() {
        let file = write_config("[widget]\nmax_visible = 0\n");
        let err = load_config_from(file.path()).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "widget.max_visible",
                ..
            }
        ));
    }

    #[test]
    fn test_parse_error_reports_path() {
        let file = write_config("[widget\nwidth = ");
        let err = load_config_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("failed to parse"));
    }

    #[test]
    fn test_explicit_missing_path_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(load_config(Some(&missing)).is_err());
    }
}
