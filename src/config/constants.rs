// Project-wide constants
//
// Widget defaults live here so the builders, the config file and the CLI
// agree on one value. Import via `use crate::config::constants::*;`.

/// Default display width of a field, in columns.
pub const DEFAULT_WIDTH: u16 = 40;

/// Default number of dropdown rows shown at once.
pub const DEFAULT_MAX_VISIBLE: usize = 5;

/// Placeholder shown when a field has neither typed text nor a value.
pub const DEFAULT_PLACEHOLDER: &str = "Type to search...";

/// Label for the "create new value" row; `%s` is the typed text.
pub const DEFAULT_NEW_VALUE_LABEL: &str = "New: %s";

/// How long a duplicate chip stays emphasised.
pub const DEFAULT_FLASH_DURATION_MS: u64 = 300;

/// Config directory under the user's home.
pub const CONFIG_DIR_NAME: &str = ".chipbox";

/// Config file name inside `CONFIG_DIR_NAME`.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Default tracing directive when `RUST_LOG` is unset.
pub const DEFAULT_LOG_DIRECTIVE: &str = "chipbox=info";
