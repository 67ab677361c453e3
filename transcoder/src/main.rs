//! Enrichkit CLI - Transcode supplier CSV files to and from enrichment documents
//!
//! # Commands
//!
//! ```bash
//! enrichkit convert suppliers.csv       # CSV -> enrichment document
//! enrichkit export suppliers.json       # document -> enhanced CSV
//! enrichkit count suppliers.csv         # pre-flight row count
//! enrichkit vocabulary                  # show the built-in vocabulary
//! ```

use clap::{Parser, Subcommand};
use enrichkit::{
    count_records, csv_to_document, document_to_csv, Vocabulary,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "enrichkit")]
#[command(about = "Transcode supplier CSV files to and from enrichment documents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a supplier CSV file into an enrichment document
    Convert {
        /// Input CSV file
        input: PathBuf,

        /// Custom vocabulary file (JSON) instead of the built-in one
        #[arg(long)]
        vocabulary: Option<PathBuf>,

        /// Skip the pre-flight record count
        #[arg(long)]
        no_count: bool,
    },

    /// Convert an enrichment document back into a CSV file
    Export {
        /// Input document file
        input: PathBuf,

        /// Custom vocabulary file (JSON) instead of the built-in one
        #[arg(long)]
        vocabulary: Option<PathBuf>,
    },

    /// Count non-blank data rows in a supplier CSV file
    Count {
        /// Input CSV file
        input: PathBuf,
    },

    /// Print the built-in vocabulary as JSON
    Vocabulary,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Convert {
            input,
            vocabulary,
            no_count,
        } => cmd_convert(&input, vocabulary.as_deref(), no_count),

        Commands::Export { input, vocabulary } => cmd_export(&input, vocabulary.as_deref()),

        Commands::Count { input } => cmd_count(&input),

        Commands::Vocabulary => cmd_vocabulary(),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

/// Load and verify the vocabulary to use for a conversion.
fn resolve_vocabulary(path: Option<&Path>) -> Result<Vocabulary, Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            eprintln!("📖 Loading vocabulary: {}", p.display());
            Ok(Vocabulary::from_file(p)?)
        }
        None => {
            let vocabulary = Vocabulary::standard();
            vocabulary.verify()?;
            Ok(vocabulary.clone())
        }
    }
}

fn cmd_convert(
    input: &Path,
    vocabulary: Option<&Path>,
    no_count: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let vocabulary = resolve_vocabulary(vocabulary)?;

    if !no_count {
        let rows = count_records(input)?;
        eprintln!("📄 {} has {} data rows", input.display(), rows);
    }

    eprintln!("🔄 Converting {} to document format...", input.display());
    let output = csv_to_document(input, &vocabulary)?;
    eprintln!("✅ Document written to: {}", output.display());

    Ok(())
}

fn cmd_export(input: &Path, vocabulary: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let vocabulary = resolve_vocabulary(vocabulary)?;

    eprintln!("🔄 Converting {} to tabular format...", input.display());
    let output = document_to_csv(input, &vocabulary)?;
    eprintln!("✅ Enhanced file written to: {}", output.display());

    Ok(())
}

fn cmd_count(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let rows = count_records(input)?;
    eprintln!("📄 {} has {} data rows", input.display(), rows);
    println!("{}", rows);
    Ok(())
}

fn cmd_vocabulary() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", Vocabulary::standard().to_json()?);
    Ok(())
}
