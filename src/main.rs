// Chipbox - terminal autocomplete widgets
// Demo entry point: an issue form with a type picker and a label picker

use anyhow::{bail, Result};
use clap::Parser;
use std::path::PathBuf;

use chipbox::cli::{run_form, Form};
use chipbox::config::{load_config, ColorTheme};
use chipbox::logging::init_tracing;

const DEFAULT_TYPES: &[&str] = &["bug", "feature", "task", "epic", "chore"];
const DEFAULT_LABELS: &[&str] = &[
    "backend",
    "frontend",
    "requires-review",
    "requires-testing",
    "bug",
    "docs",
    "performance",
    "security",
];

#[derive(Parser)]
#[command(version, about = "Autocomplete combo-box and chip picker demo")]
struct Cli {
    /// Config file (defaults to ~/.chipbox/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Options for the "Type" field, comma separated
    #[arg(long, value_delimiter = ',')]
    types: Vec<String>,

    /// Value pool for the "Labels" field, comma separated
    #[arg(long, value_delimiter = ',')]
    labels: Vec<String>,

    /// Labels selected when the form opens
    #[arg(long, value_delimiter = ',')]
    chips: Vec<String>,

    /// Dropdown rows shown at once
    #[arg(long)]
    max_visible: Option<usize>,

    /// Field width in columns
    #[arg(long)]
    width: Option<u16>,

    /// Only allow values from the option lists
    #[arg(long, default_value_t = false)]
    no_new: bool,

    /// Color theme: dark, light or high-contrast
    #[arg(long)]
    theme: Option<String>,

    /// Write tracing output to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn or_defaults(values: Vec<String>, defaults: &[&str]) -> Vec<String> {
    if values.is_empty() {
        defaults.iter().map(|s| s.to_string()).collect()
    } else {
        values
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = load_config(cli.config.as_deref())?;

    if let Some(path) = cli.log_file {
        config.log_file = Some(path);
    }
    init_tracing(config.log_file.as_deref())?;

    if let Some(max_visible) = cli.max_visible {
        if max_visible == 0 {
            bail!("--max-visible must be at least 1");
        }
        config.widget.max_visible = max_visible;
    }
    if let Some(width) = cli.width {
        if width == 0 {
            bail!("--width must be at least 1");
        }
        config.widget.width = width;
    }
    if cli.no_new {
        config.widget.allow_new = false;
    }
    if let Some(id) = cli.theme.as_deref() {
        let Some(theme) = ColorTheme::from_id(id) else {
            bail!("unknown theme '{}' (expected dark, light or high-contrast)", id);
        };
        config.theme = theme;
        config.colors = theme.to_scheme();
    }

    let types = or_defaults(cli.types, DEFAULT_TYPES);
    let labels = or_defaults(cli.labels, DEFAULT_LABELS);
    let form = Form::issue_form(&config.widget, &types, &labels, &cli.chips);

    match run_form(form, &config.colors).await? {
        Some(values) => println!("{}", serde_json::to_string_pretty(&values)?),
        None => {
            eprintln!("Cancelled");
            std::process::exit(1);
        }
    }

    Ok(())
}
