// Configuration structs

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use super::colors::{ColorScheme, ColorTheme};
use super::constants::{
    DEFAULT_FLASH_DURATION_MS, DEFAULT_MAX_VISIBLE, DEFAULT_NEW_VALUE_LABEL, DEFAULT_PLACEHOLDER,
    DEFAULT_WIDTH,
};
use crate::widgets::{ChipCombobox, Combobox};

/// Widget construction settings (`[widget]` table)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetSettings {
    /// Display width in columns
    #[serde(default = "default_width")]
    pub width: u16,

    /// Dropdown rows shown at once
    #[serde(default = "default_max_visible")]
    pub max_visible: usize,

    /// Text shown when the field is empty
    #[serde(default = "default_placeholder")]
    pub placeholder: String,

    /// Allow committing values that are not in the candidate set
    #[serde(default = "default_true")]
    pub allow_new: bool,

    /// Label template for the new-value row (`%s` = typed text)
    #[serde(default = "default_new_value_label")]
    pub new_value_label: String,

    /// How long a duplicate chip flashes, in milliseconds
    #[serde(default = "default_flash_duration_ms")]
    pub flash_duration_ms: u64,
}

impl Default for WidgetSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            max_visible: DEFAULT_MAX_VISIBLE,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            allow_new: true,
            new_value_label: DEFAULT_NEW_VALUE_LABEL.to_string(),
            flash_duration_ms: DEFAULT_FLASH_DURATION_MS,
        }
    }
}

impl WidgetSettings {
    pub fn flash_duration(&self) -> Duration {
        Duration::from_millis(self.flash_duration_ms)
    }

    /// Apply these settings to a combobox builder
    pub fn configure(&self, combobox: Combobox) -> Combobox {
        combobox
            .with_width(self.width)
            .with_max_visible(self.max_visible)
            .with_placeholder(self.placeholder.clone())
            .with_allow_new(self.allow_new)
            .with_new_value_label(self.new_value_label.clone())
    }

    /// Build a single-value combobox over `options`
    pub fn combobox(&self, options: &[String]) -> Combobox {
        self.configure(Combobox::new(options.iter().cloned()))
    }

    /// Build a chip combobox over `all_values` with `chips` preselected
    pub fn chip_combobox(&self, all_values: &[String], chips: &[String]) -> ChipCombobox {
        ChipCombobox::new(all_values.iter().cloned())
            .with_combobox(|c| self.configure(c))
            .with_flash_duration(self.flash_duration())
            .with_chips(chips.iter().cloned())
    }
}

fn default_width() -> u16 {
    DEFAULT_WIDTH
}

fn default_max_visible() -> usize {
    DEFAULT_MAX_VISIBLE
}

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}

fn default_new_value_label() -> String {
    DEFAULT_NEW_VALUE_LABEL.to_string()
}

fn default_flash_duration_ms() -> u64 {
    DEFAULT_FLASH_DURATION_MS
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Widget construction settings
    pub widget: WidgetSettings,

    /// Active color theme
    pub theme: ColorTheme,

    /// Resolved color scheme (theme, then `[colors]` overrides)
    pub colors: ColorScheme,

    /// Write tracing output here; logging is off when unset
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            widget: WidgetSettings::default(),
            theme: ColorTheme::default(),
            colors: ColorScheme::default(),
            log_file: None,
        }
    }
}
