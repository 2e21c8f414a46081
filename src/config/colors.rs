// Color Scheme Configuration - Customizable widget colors
//
// Every style the widgets draw with comes from here, so a theme or a
// `[colors]` table in the config file restyles all three widgets at once.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Predefined color themes for different terminal backgrounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ColorTheme {
    /// Light text on dark background (default)
    #[default]
    Dark,
    /// Dark text on light background
    Light,
    /// High contrast yellow/white on black
    HighContrast,
}

impl ColorTheme {
    /// Convert theme to color scheme
    pub fn to_scheme(&self) -> ColorScheme {
        match self {
            Self::Dark => ColorScheme::default(),
            Self::Light => Self::light_scheme(),
            Self::HighContrast => Self::high_contrast_scheme(),
        }
    }

    fn light_scheme() -> ColorScheme {
        ColorScheme {
            input: InputColors {
                text: named("black"),
                placeholder: named("gray"),
                ghost: named("gray"),
                cursor: ColorSpec::Rgb(0, 0, 255), // Blue
                prompt: ColorSpec::Rgb(0, 0, 139), // Dark blue
            },
            dropdown: DropdownColors {
                option: named("black"),
                selected_fg: named("white"),
                selected_bg: ColorSpec::Rgb(0, 0, 139),
                hint: named("gray"),
                new_value: ColorSpec::Rgb(0, 128, 0), // Dark green
            },
            chips: ChipColors {
                fg: named("black"),
                bg: ColorSpec::Rgb(220, 220, 220),
                highlight_fg: named("white"),
                highlight_bg: ColorSpec::Rgb(0, 0, 139),
                flash_fg: named("black"),
                flash_bg: ColorSpec::Rgb(255, 215, 0), // Gold
            },
        }
    }

    fn high_contrast_scheme() -> ColorScheme {
        ColorScheme {
            input: InputColors {
                text: named("yellow"),
                placeholder: named("white"),
                ghost: named("gray"),
                cursor: named("yellow"),
                prompt: named("yellow"),
            },
            dropdown: DropdownColors {
                option: named("white"),
                selected_fg: named("black"),
                selected_bg: named("yellow"),
                hint: named("white"),
                new_value: named("cyan"),
            },
            chips: ChipColors {
                fg: named("black"),
                bg: named("white"),
                highlight_fg: named("black"),
                highlight_bg: named("yellow"),
                flash_fg: named("white"),
                flash_bg: named("red"),
            },
        }
    }

    /// Get all available themes
    pub fn all() -> Vec<Self> {
        vec![Self::Dark, Self::Light, Self::HighContrast]
    }

    /// Get theme name for display
    pub fn name(&self) -> &str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
            Self::HighContrast => "High Contrast",
        }
    }

    /// Parse a config/CLI identifier (`dark`, `light`, `high-contrast`)
    pub fn from_id(id: &str) -> Option<Self> {
        match id.trim().to_ascii_lowercase().as_str() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            "high-contrast" | "highcontrast" => Some(Self::HighContrast),
            _ => None,
        }
    }
}

/// Color scheme for the widget family
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorScheme {
    /// Text input line
    #[serde(default = "default_input_colors")]
    pub input: InputColors,

    /// Dropdown rows
    #[serde(default = "default_dropdown_colors")]
    pub dropdown: DropdownColors,

    /// Chips
    #[serde(default = "default_chip_colors")]
    pub chips: ChipColors,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            input: default_input_colors(),
            dropdown: default_dropdown_colors(),
            chips: default_chip_colors(),
        }
    }
}

/// Input line colors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputColors {
    /// Typed text and committed value
    #[serde(default = "default_white")]
    pub text: ColorSpec,

    /// Placeholder when empty
    #[serde(default = "default_dark_gray")]
    pub placeholder: ColorSpec,

    /// Ghost completion suffix
    #[serde(default = "default_dark_gray")]
    pub ghost: ColorSpec,

    /// Cursor block
    #[serde(default = "default_cyan")]
    pub cursor: ColorSpec,

    /// Prompt glyph
    #[serde(default = "default_cyan")]
    pub prompt: ColorSpec,
}

fn default_input_colors() -> InputColors {
    InputColors {
        text: default_white(),
        placeholder: default_dark_gray(),
        ghost: default_dark_gray(),
        cursor: default_cyan(),
        prompt: default_cyan(),
    }
}

/// Dropdown colors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DropdownColors {
    /// Normal option text
    #[serde(default = "default_gray")]
    pub option: ColorSpec,

    /// Highlighted option text
    #[serde(default = "default_black")]
    pub selected_fg: ColorSpec,

    /// Highlighted option background
    #[serde(default = "default_cyan")]
    pub selected_bg: ColorSpec,

    /// Scroll indicators and "No matches"
    #[serde(default = "default_dark_gray")]
    pub hint: ColorSpec,

    /// "New: ..." row
    #[serde(default = "default_green")]
    pub new_value: ColorSpec,
}

fn default_dropdown_colors() -> DropdownColors {
    DropdownColors {
        option: default_gray(),
        selected_fg: default_black(),
        selected_bg: default_cyan(),
        hint: default_dark_gray(),
        new_value: default_green(),
    }
}

/// Chip colors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChipColors {
    #[serde(default = "default_white")]
    pub fg: ColorSpec,

    #[serde(default = "default_dark_gray")]
    pub bg: ColorSpec,

    /// Chip under the navigation cursor
    #[serde(default = "default_black")]
    pub highlight_fg: ColorSpec,

    #[serde(default = "default_cyan")]
    pub highlight_bg: ColorSpec,

    /// Chip flashing after a duplicate add
    #[serde(default = "default_black")]
    pub flash_fg: ColorSpec,

    #[serde(default = "default_yellow")]
    pub flash_bg: ColorSpec,
}

fn default_chip_colors() -> ChipColors {
    ChipColors {
        fg: default_white(),
        bg: default_dark_gray(),
        highlight_fg: default_black(),
        highlight_bg: default_cyan(),
        flash_fg: default_black(),
        flash_bg: default_yellow(),
    }
}

/// Color specification - supports named colors and RGB
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color (e.g., "red", "green", "cyan")
    Named(String),
    /// RGB color (e.g., [255, 0, 0])
    Rgb(u8, u8, u8),
}

impl ColorSpec {
    /// Convert to ratatui Color
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Named(name) => parse_named_color(name),
            ColorSpec::Rgb(r, g, b) => Color::Rgb(*r, *g, *b),
        }
    }
}

/// Parse named color string to ratatui Color
fn parse_named_color(name: &str) -> Color {
    match name.to_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "darkgray" | "darkgrey" => Color::DarkGray,
        "lightred" => Color::LightRed,
        "lightgreen" => Color::LightGreen,
        "lightyellow" => Color::LightYellow,
        "lightblue" => Color::LightBlue,
        "lightmagenta" => Color::LightMagenta,
        "lightcyan" => Color::LightCyan,
        "white" => Color::White,
        _ => Color::White, // Default fallback
    }
}

fn named(name: &str) -> ColorSpec {
    ColorSpec::Named(name.to_string())
}

// Default color constructors
fn default_green() -> ColorSpec {
    named("green")
}

fn default_dark_gray() -> ColorSpec {
    named("darkgray")
}

fn default_cyan() -> ColorSpec {
    named("cyan")
}

fn default_yellow() -> ColorSpec {
    named("yellow")
}

fn default_gray() -> ColorSpec {
    named("gray")
}

fn default_white() -> ColorSpec {
    named("white")
}

fn default_black() -> ColorSpec {
    named("black")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_color_scheme() {
        let scheme = ColorScheme::default();
        assert_eq!(scheme.input.ghost.to_color(), Color::DarkGray);
        assert_eq!(scheme.dropdown.selected_bg.to_color(), Color::Cyan);
        assert_eq!(scheme.chips.flash_bg.to_color(), Color::Yellow);
    }

    #[test]
    fn test_named_color_parsing() {
        assert_eq!(parse_named_color("cyan"), Color::Cyan);
        assert_eq!(parse_named_color("DarkGrey"), Color::DarkGray);
        assert_eq!(parse_named_color("unknown"), Color::White); // Fallback
    }

    #[test]
    fn test_theme_from_id() {
        assert_eq!(ColorTheme::from_id("high-contrast"), Some(ColorTheme::HighContrast));
        assert_eq!(ColorTheme::from_id(" Light "), Some(ColorTheme::Light));
        assert_eq!(ColorTheme::from_id("solarized"), None);
    }

    #[test]
    fn test_rgb_color() {
        let spec = ColorSpec::Rgb(255, 0, 0);
        assert_eq!(spec.to_color(), Color::Rgb(255, 0, 0));
    }

    #[test]
    fn test_themes_differ_from_dark() {
        for theme in ColorTheme::all() {
            let scheme = theme.to_scheme();
            if theme != ColorTheme::Dark {
                assert_ne!(
                    scheme.dropdown.selected_bg,
                    ColorScheme::default().dropdown.selected_bg,
                    "{} should restyle the highlight",
                    theme.name()
                );
            }
        }
    }

    #[test]
    fn test_partial_table_uses_defaults() {
        let scheme: ColorScheme = toml::from_str(
            r#"
            [chips]
            flash_bg = [255, 0, 0]
            "#,
        )
        .unwrap();
        assert_eq!(scheme.chips.flash_bg, ColorSpec::Rgb(255, 0, 0));
        assert_eq!(scheme.chips.fg, named("white"));
        assert_eq!(scheme.input.prompt, named("cyan"));
    }
}
