//! Command implementations for the textvec CLI.

use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use log::info;

use crate::analysis::segmenter::{SegmenterBackend, SentenceBreakSuppressions};
use crate::analysis::split::{WordSplitOptions, split_sentences, split_words};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::unicode::casing::CasingTransform;
use crate::unicode::category::GeneralCategory;
use crate::unicode::version::unicode_info;
use crate::vectorizer::{Vectorizer, VectorizerConfig};

/// Execute a CLI command.
pub fn execute_command(args: TextVecArgs) -> Result<()> {
    match &args.command {
        Command::Tokenize(tokenize_args) => tokenize(tokenize_args, &args),
        Command::Sentences(sentences_args) => sentences(sentences_args, &args),
        Command::Split(split_args) => split(split_args, &args),
        Command::Vectorize(vectorize_args) => vectorize(vectorize_args, &args),
        Command::Categories => categories(&args),
        Command::Info => info(&args),
    }
}

/// Read one document per line. Lines stay raw bytes so that encoding
/// errors reach the vectorizer's policy.
pub fn read_documents(path: &Path) -> Result<Vec<Vec<u8>>> {
    let content = fs::read(path)?;
    if content.is_empty() {
        return Ok(Vec::new());
    }
    let body = content.strip_suffix(b"\n").unwrap_or(&content);
    Ok(body
        .split(|&b| b == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line).to_vec())
        .collect())
}

/// Read one document per line as text.
pub fn read_text_documents(path: &Path) -> Result<Vec<String>> {
    Ok(fs::read_to_string(path)?
        .lines()
        .map(str::to_string)
        .collect())
}

/// Build a vectorizer from the shared command options.
pub fn load_vectorizer(options: &VectorizerOptions) -> Result<Vectorizer> {
    let mut config = match &options.config {
        Some(path) => {
            info!("Loading vectorizer configuration from: {}", path.display());
            VectorizerConfig::from_json_file(path)?
        }
        None => VectorizerConfig::default(),
    };
    if let Some(path) = &options.vocabulary {
        config.vocabulary = read_text_documents(path)?
            .into_iter()
            .filter(|term| !term.is_empty())
            .collect();
    }
    Vectorizer::new(config)
}

fn tokenize(args: &TokenizeArgs, cli_args: &TextVecArgs) -> Result<()> {
    let vectorizer = load_vectorizer(&args.vectorizer)?;
    let documents = read_documents(&args.input)?;
    let message = format!("Tokenized {} documents", documents.len());

    if args.vectorizer.sentences {
        let result = SentenceTokenizeResult {
            documents: vectorizer.tokenize_sentences(&documents, args.vectorizer.parallel)?,
        };
        output_result(&message, &result, cli_args)
    } else {
        let result = TokenizeResult {
            documents: vectorizer.tokenize(&documents, args.vectorizer.parallel)?,
        };
        output_result(&message, &result, cli_args)
    }
}

fn sentences(args: &SentencesArgs, cli_args: &TextVecArgs) -> Result<()> {
    let backend: SegmenterBackend = args.backend.parse()?;
    let suppressions =
        (!args.no_suppress).then(|| Arc::new(SentenceBreakSuppressions::default()));
    let segmenter = backend.create_with(suppressions);
    let documents = read_text_documents(&args.input)?;

    let result = SplitResult {
        documents: split_sentences(&documents, segmenter.as_ref()),
    };
    output_result(
        &format!("Split {} documents into sentences", documents.len()),
        &result,
        cli_args,
    )
}

fn split(args: &SplitArgs, cli_args: &TextVecArgs) -> Result<()> {
    let backend: SegmenterBackend = args.backend.parse()?;
    let casing = if args.lowercase {
        CasingTransform::Lower
    } else {
        CasingTransform::Preserve
    };
    let options =
        WordSplitOptions::from_names(&args.word_categories, &args.non_word_categories, casing)?;
    let segmenter = backend.create();
    let documents = read_text_documents(&args.input)?;

    let result = SplitResult {
        documents: split_words(&documents, segmenter.as_ref(), &options),
    };
    output_result(
        &format!("Split {} documents into words", documents.len()),
        &result,
        cli_args,
    )
}

fn vectorize(args: &VectorizeArgs, cli_args: &TextVecArgs) -> Result<()> {
    let vectorizer = load_vectorizer(&args.vectorizer)?;
    let documents = read_documents(&args.input)?;
    if cli_args.verbosity() > 1 {
        println!(
            "Vectorizing {} documents against {} vocabulary terms",
            documents.len(),
            vectorizer.vocabulary().len()
        );
    }

    let start = Instant::now();
    let parallel = args.vectorizer.parallel;
    if args.vectorizer.sentences {
        let matrices = vectorizer.sentence_vectorize(&documents, parallel, args.labels)?;
        let result = SentenceVectorizeResult {
            documents: documents.len(),
            duration_ms: start.elapsed().as_millis() as u64,
            matrices,
        };
        output_result("Sentence matrices built", &result, cli_args)
    } else {
        let mut matrix = vectorizer.vectorize(&documents, parallel, args.labels)?;
        if args.labels {
            matrix = matrix.with_row_labels((1..=documents.len()).map(|n| n.to_string()).collect());
        }
        let result = VectorizeResult {
            documents: documents.len(),
            duration_ms: start.elapsed().as_millis() as u64,
            matrix,
        };
        output_result("Matrix built", &result, cli_args)
    }
}

fn categories(cli_args: &TextVecArgs) -> Result<()> {
    let result = CategoriesResult {
        categories: GeneralCategory::ALL
            .iter()
            .map(|category| CategoryInfo {
                name: category.name().to_string(),
                bit: category.bit(),
            })
            .collect(),
    };
    output_result("General categories", &result, cli_args)
}

/// Build the version report printed by `info`.
pub fn info_result() -> InfoResult {
    let unicode = unicode_info();
    InfoResult {
        version: crate::VERSION.to_string(),
        unicode_version: unicode.unicode_version.to_string(),
        unicode_segmentation_version: unicode.unicode_segmentation_version.to_string(),
    }
}

fn info(cli_args: &TextVecArgs) -> Result<()> {
    output_result("textvec", &info_result(), cli_args)
}
