use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "stagegraph", about = "Stage-gate spreadsheet to RDF pipeline", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output (also respects NO_COLOR env var)
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Identifier cache file (defaults to gupri_mappings.json next to the output)
    #[arg(long, global = true)]
    pub cache: Option<PathBuf>,

    /// JSON column map overriding the default header candidates
    #[arg(long, global = true)]
    pub columns: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate instance Turtle from a CSV export
    Generate {
        /// CSV file with stage-gate rows
        input: PathBuf,

        /// Output Turtle file
        #[arg(short = 'o', long)]
        output: PathBuf,
    },

    /// Combine Turtle documents into one, deduplicating prefixes
    Combine {
        /// Turtle files to combine, in order
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Output Turtle file
        #[arg(short = 'o', long)]
        output: PathBuf,
    },

    /// Check that a Turtle document parses and report triple counts
    Validate {
        /// Turtle file to validate
        file: PathBuf,

        /// Expected deliverable (QualityAttribute) count to cross-check
        #[arg(long)]
        expect_deliverables: Option<usize>,
    },

    /// Full pipeline: generate, combine with fragments, validate, publish
    Run {
        /// CSV file with stage-gate rows
        input: PathBuf,

        /// Static ontology fragment to merge before the instance data
        /// (repeatable)
        #[arg(long = "fragment")]
        fragments: Vec<PathBuf>,

        /// Output Turtle file (written only if validation passes)
        #[arg(short = 'o', long)]
        output: PathBuf,
    },
}
