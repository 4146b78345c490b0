//! Command-line interface for inspecting accessibility metadata.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;

use crate::config::ConvertOptions;
use crate::entry::parse_entries_with;
use crate::error::Result;

/// OPDS Accessibility - Inspect accessibility metadata in OPDS catalogs.
#[derive(Parser)]
#[command(name = "opds-accessibility")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the entries of an OPDS entry or feed document as JSON.
    Inspect {
        /// Path to the XML document
        file: PathBuf,

        /// Print JSON on a single line
        #[arg(long)]
        compact: bool,

        /// Normalize text content to Unicode NFC
        #[arg(long)]
        nfc: bool,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Inspect { file, compact, nfc } => inspect_command(&file, compact, nfc),
    }
}

/// Execute the inspect command.
fn inspect_command(file: &Path, compact: bool, nfc: bool) -> Result<()> {
    let xml = std::fs::read_to_string(file)?;
    let options = ConvertOptions::default().with_normalize_unicode(nfc);
    let entries = parse_entries_with(&xml, &options)?;

    let without_metadata = entries
        .iter()
        .filter(|entry| entry.accessibility.is_none())
        .count();

    eprintln!(
        "{} {} from {}",
        style("Parsed").bold(),
        style(format!("{} entries", entries.len())).cyan(),
        file.display()
    );
    if without_metadata > 0 {
        eprintln!(
            "  Without accessibility metadata: {}",
            style(without_metadata).yellow().bold()
        );
    }

    let json = if compact {
        serde_json::to_string(&entries)?
    } else {
        serde_json::to_string_pretty(&entries)?
    };
    println!("{json}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_inspect() {
        let cli = Cli::parse_from(["opds-accessibility", "inspect", "feed.xml"]);

        let Commands::Inspect { file, compact, nfc } = cli.command;
        assert_eq!(file, PathBuf::from("feed.xml"));
        assert!(!compact);
        assert!(!nfc);
    }

    #[test]
    fn test_cli_parse_inspect_with_flags() {
        let cli = Cli::parse_from([
            "opds-accessibility",
            "inspect",
            "feed.xml",
            "--compact",
            "--nfc",
        ]);

        let Commands::Inspect { compact, nfc, .. } = cli.command;
        assert!(compact);
        assert!(nfc);
    }

    #[test]
    fn test_inspect_missing_file() {
        let result = inspect_command(Path::new("/nonexistent/feed.xml"), false, false);
        assert!(matches!(result, Err(crate::error::AccessibilityError::Io(_))));
    }
}
