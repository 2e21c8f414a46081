// Configuration module
// Public interface for configuration loading

mod colors;
pub mod constants;
mod loader;
mod settings;

pub use colors::{ChipColors, ColorScheme, ColorSpec, ColorTheme, DropdownColors, InputColors};
pub use loader::{default_config_path, load_config, load_config_from, ConfigError};
pub use settings::{Config, WidgetSettings};
