//! Locales command implementation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use finhealth_analytics::localization::VOCABULARY;
use finhealth_analytics::Translations;

use crate::cli::OutputFormat;
use crate::output::{print_header, print_json_value, print_output};

/// Arguments for the locales command.
#[derive(Args, Debug)]
pub struct LocalesArgs {
    /// Show only this locale
    #[arg(short, long)]
    pub language: Option<String>,
}

#[derive(Debug, Serialize, Tabled)]
struct TermRow {
    #[tabled(rename = "Locale")]
    locale: String,
    #[tabled(rename = "Term")]
    term: String,
    #[tabled(rename = "Localized")]
    localized: String,
}

#[derive(Debug, Serialize, Tabled)]
struct LocaleLine {
    #[tabled(rename = "Locale")]
    locale: String,
}

/// Execute the locales command.
pub fn execute(args: LocalesArgs, format: OutputFormat) -> Result<()> {
    let translations = Translations::builtin();

    let codes: Vec<&str> = match &args.language {
        Some(code) if translations.has_locale(code) => vec![code.as_str()],
        Some(code) => anyhow::bail!("Unknown locale: {code}. Terms pass through unchanged."),
        None => translations.locales().collect(),
    };

    let rows: Vec<TermRow> = codes
        .iter()
        .flat_map(|code| {
            VOCABULARY.iter().map(move |term| TermRow {
                locale: (*code).to_string(),
                term: (*term).to_string(),
                localized: translations.localize(term, code).to_string(),
            })
        })
        .collect();

    match format {
        OutputFormat::Table => {
            print_header("Locales");
            print_output(&rows, format)?;
        }
        OutputFormat::Json => {
            let tables: std::collections::BTreeMap<&str, _> = codes
                .iter()
                .filter_map(|code| translations.table(code).map(|t| (*code, t)))
                .collect();
            print_json_value(&tables)?;
        }
        OutputFormat::Csv => print_output(&rows, format)?,
        OutputFormat::Minimal => {
            let lines: Vec<LocaleLine> = codes
                .iter()
                .map(|code| LocaleLine {
                    locale: (*code).to_string(),
                })
                .collect();
            print_output(&lines, format)?;
        }
    }

    Ok(())
}
