//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, TextVecArgs};
use crate::error::Result;
use crate::matrix::csc::CscMatrix;

/// Terms kept for each document.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenizeResult {
    pub documents: Vec<Vec<String>>,
}

/// Terms kept for each sentence of each document.
#[derive(Debug, Serialize, Deserialize)]
pub struct SentenceTokenizeResult {
    pub documents: Vec<Vec<Vec<String>>>,
}

/// Sentences or words of each document.
#[derive(Debug, Serialize, Deserialize)]
pub struct SplitResult {
    pub documents: Vec<Vec<String>>,
}

/// A documents-by-vocabulary matrix.
#[derive(Debug, Serialize, Deserialize)]
pub struct VectorizeResult {
    pub documents: usize,
    pub duration_ms: u64,
    pub matrix: CscMatrix,
}

/// One sentences-by-vocabulary matrix per document.
#[derive(Debug, Serialize, Deserialize)]
pub struct SentenceVectorizeResult {
    pub documents: usize,
    pub duration_ms: u64,
    pub matrices: Vec<CscMatrix>,
}

/// A general category and its mask bit.
#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryInfo {
    pub name: String,
    pub bit: u64,
}

/// Accepted general category names.
#[derive(Debug, Serialize, Deserialize)]
pub struct CategoriesResult {
    pub categories: Vec<CategoryInfo>,
}

/// Version information.
#[derive(Debug, Serialize, Deserialize)]
pub struct InfoResult {
    pub version: String,
    pub unicode_version: String,
    pub unicode_segmentation_version: String,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &TextVecArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &TextVecArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &TextVecArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }

    let value = serde_json::to_value(result)?;
    for line in human_lines(&value, 0) {
        println!("{line}");
    }
    Ok(())
}

/// Render a JSON value as indented lines.
///
/// Arrays of scalars collapse onto one line joined by ` | `; nested arrays
/// are numbered from 1.
fn human_lines(value: &serde_json::Value, indent: usize) -> Vec<String> {
    let pad = "  ".repeat(indent);
    match value {
        serde_json::Value::Object(obj) => {
            let mut lines = Vec::new();
            for (key, val) in obj {
                if is_scalar_or_flat(val) {
                    lines.push(format!("{pad}{key}: {}", format_value(val)));
                } else {
                    lines.push(format!("{pad}{key}:"));
                    lines.extend(human_lines(val, indent + 1));
                }
            }
            lines
        }
        serde_json::Value::Array(items) if !is_scalar_or_flat(value) => {
            let mut lines = Vec::new();
            for (i, item) in items.iter().enumerate() {
                if is_scalar_or_flat(item) {
                    lines.push(format!("{pad}[{}] {}", i + 1, format_value(item)));
                } else {
                    lines.push(format!("{pad}[{}]", i + 1));
                    lines.extend(human_lines(item, indent + 1));
                }
            }
            lines
        }
        other => vec![format!("{pad}{}", format_value(other))],
    }
}

fn is_scalar_or_flat(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Object(_) => false,
        serde_json::Value::Array(items) => items
            .iter()
            .all(|item| !item.is_array() && !item.is_object()),
        _ => true,
    }
}

/// Format a JSON value for display.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Null => "null".to_string(),
        serde_json::Value::Array(items) => items
            .iter()
            .map(format_value)
            .collect::<Vec<_>>()
            .join(" | "),
        serde_json::Value::Object(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flat_values() {
        assert_eq!(format_value(&json!(["a", "b"])), "a | b");
        assert_eq!(format_value(&json!(3)), "3");
        assert_eq!(format_value(&json!(null)), "null");
    }

    #[test]
    fn test_nested_lines() {
        let value = json!({"documents": [["Hello", "world"], []], "count": 2});
        let lines = human_lines(&value, 0);
        assert!(lines.contains(&"documents:".to_string()));
        assert!(lines.contains(&"  [1] Hello | world".to_string()));
        assert!(lines.contains(&"  [2] ".to_string()));
        assert!(lines.contains(&"count: 2".to_string()));
    }
}
