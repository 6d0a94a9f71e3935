//! Offline theme and profile commands.
//!
//! Every command reads one JSON document from a file, or from stdin when the
//! path is `-`, and prints its result as pretty JSON on stdout.

use std::io::Read;
use std::path::Path;

use anyhow::Context;
use clap::Subcommand;
use serde_json::{json, Value};
use vitrina_core::{
    google_fonts_url, normalize, repair_profile_with, used_fonts, ThemeConfig, UuidIds,
};

/// Sub-commands available under `theme`.
#[derive(Debug, Subcommand)]
pub enum ThemeCommands {
    /// Print the normalized form of a theme document
    Normalize {
        /// JSON file to read, or `-` for stdin
        input: String,
        /// Currency used when the document has none
        #[arg(long, env = "VITRINA_DEFAULT_CURRENCY", default_value = "MXN")]
        currency: String,
    },
    /// List the font families a theme uses and its stylesheet URL
    Fonts {
        /// JSON file to read, or `-` for stdin
        input: String,
    },
}

/// Sub-commands available under `profile`.
#[derive(Debug, Subcommand)]
pub enum ProfileCommands {
    /// Repair a raw `profiles` row exported as JSON
    Repair {
        /// JSON file to read, or `-` for stdin
        input: String,
        /// Print the theme as the public storefront renders it instead
        #[arg(long)]
        storefront: bool,
    },
}

pub(crate) fn run_theme(command: ThemeCommands) -> anyhow::Result<()> {
    match command {
        ThemeCommands::Normalize { input, currency } => {
            let raw = read_json(&input)?;
            let defaults = ThemeConfig::default().with_default_currency(&currency);
            print_json(&normalize(&raw, &defaults, &mut UuidIds))
        }
        ThemeCommands::Fonts { input } => {
            let raw = read_json(&input)?;
            print_json(&font_report(&raw))
        }
    }
}

pub(crate) fn run_profile(command: ProfileCommands) -> anyhow::Result<()> {
    match command {
        ProfileCommands::Repair { input, storefront } => {
            let raw = read_json(&input)?;
            let profile = repair_profile_with(&raw, &ThemeConfig::default(), &mut UuidIds);
            if storefront {
                print_json(&profile.storefront_theme())
            } else {
                print_json(&profile)
            }
        }
    }
}

fn font_report(raw: &Value) -> Value {
    let theme = normalize(raw, &ThemeConfig::default(), &mut UuidIds);
    let fonts = used_fonts(&theme);
    let url = google_fonts_url(&fonts);
    json!({ "fonts": fonts, "url": url })
}

fn read_json(input: &str) -> anyhow::Result<Value> {
    let text = if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        buf
    } else {
        std::fs::read_to_string(Path::new(input))
            .with_context(|| format!("failed to read {input}"))?
    };
    serde_json::from_str(&text).with_context(|| format!("{input} is not valid JSON"))
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
