//! Command line argument parsing for the textvec CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// textvec - Unicode text segmentation and bag-of-n-grams vectorization
#[derive(Parser, Debug, Clone)]
#[command(name = "textvec")]
#[command(about = "Unicode text segmentation and bag-of-n-grams vectorization")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct TextVecArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl TextVecArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the terms and n-grams a vectorizer keeps for each document
    Tokenize(TokenizeArgs),

    /// Split documents into sentences
    Sentences(SentencesArgs),

    /// Split documents into words
    Split(SplitArgs),

    /// Build a documents-by-vocabulary count matrix
    Vectorize(VectorizeArgs),

    /// List the general category names accepted by category filters
    Categories,

    /// Show the crate version and the Unicode data versions
    Info,
}

/// Options shared by commands that build a vectorizer
#[derive(Args, Debug, Clone)]
pub struct VectorizerOptions {
    /// JSON vectorizer configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Vocabulary file with one term per line (overrides the configuration)
    #[arg(long)]
    pub vocabulary: Option<PathBuf>,

    /// Process documents on the worker pool
    #[arg(long)]
    pub parallel: bool,

    /// Group output by sentence
    #[arg(long)]
    pub sentences: bool,
}

/// Arguments for tokenizing documents
#[derive(Args, Debug, Clone)]
pub struct TokenizeArgs {
    /// Input file with one document per line
    pub input: PathBuf,

    #[command(flatten)]
    pub vectorizer: VectorizerOptions,
}

/// Arguments for splitting sentences
#[derive(Args, Debug, Clone)]
pub struct SentencesArgs {
    /// Input file with one document per line
    pub input: PathBuf,

    /// Segmentation backend (uax29 or unicode_segmentation)
    #[arg(long, default_value = "uax29")]
    pub backend: String,

    /// Break after every full stop, abbreviations included
    #[arg(long)]
    pub no_suppress: bool,
}

/// Arguments for splitting words
#[derive(Args, Debug, Clone)]
pub struct SplitArgs {
    /// Input file with one document per line
    pub input: PathBuf,

    /// Segmentation backend (uax29 or unicode_segmentation)
    #[arg(long, default_value = "uax29")]
    pub backend: String,

    /// Lowercase every word
    #[arg(long)]
    pub lowercase: bool,

    /// Comma-separated categories a word must contain (default: all)
    #[arg(long, value_delimiter = ',')]
    pub word_categories: Vec<String>,

    /// Comma-separated categories a word must not contain
    #[arg(long, value_delimiter = ',')]
    pub non_word_categories: Vec<String>,
}

/// Arguments for vectorizing documents
#[derive(Args, Debug, Clone)]
pub struct VectorizeArgs {
    /// Input file with one document per line
    pub input: PathBuf,

    #[command(flatten)]
    pub vectorizer: VectorizerOptions,

    /// Attach vocabulary terms as column labels and line numbers as row labels
    #[arg(long)]
    pub labels: bool,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
