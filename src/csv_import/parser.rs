//! Line-oriented CSV parsing with case-insensitive header detection.
//!
//! Columns are located by substring match on the lower-cased header, so
//! "Main Category" satisfies the "category" requirement. Data rows that
//! do not cover both required column indices are dropped without error.

use serde::{Deserialize, Serialize};

use super::ImportError;
use crate::models::{ConversationPair, Fact};

/// Tuning knobs for the import pipeline.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImportOptions {
    /// When set, a field fully wrapped in double quotes has the outer
    /// quote pair removed after tokenization. Off by default: the
    /// tokenizer keeps quote characters in place, so a quoted field keeps
    /// its surrounding quotes in the emitted record.
    pub strip_quotes: bool,
}

/// Split one CSV line into fields.
///
/// A double quote toggles quoted mode; commas split only outside quoted
/// mode. Quote characters themselves are kept and doubled quotes are not
/// un-escaped — this is deliberately not a full CSV-quoting
/// implementation (see [`ImportOptions::strip_quotes`]).
pub fn tokenize_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                current.push(ch);
            }
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }

    fields.push(current);
    fields
}

/// Parse fact records from raw CSV text.
///
/// The header must contain a column whose name includes "category" and
/// one whose name includes "fact" (case-insensitive). Categories are
/// upper-cased and trimmed, fact text is trimmed as-is. Source row order
/// is preserved.
pub fn parse_facts_csv(text: &str, options: ImportOptions) -> Result<Vec<Fact>, ImportError> {
    let lines = usable_lines(text)?;
    let (category_idx, fact_idx) = locate_columns(lines[0], "category", "fact")?;
    let needed = category_idx.max(fact_idx);

    let mut facts = Vec::new();
    for line in &lines[1..] {
        let values = tokenize_line(line);
        if values.len() <= needed {
            continue;
        }
        facts.push(Fact {
            category: clean_field(&values[category_idx], options).to_uppercase(),
            fact: clean_field(&values[fact_idx], options),
        });
    }

    Ok(facts)
}

/// Parse bilingual conversation pairs from raw CSV text.
///
/// Same pipeline as [`parse_facts_csv`], keyed on headers containing
/// "english" and "spanish". Both fields are trimmed; neither is
/// case-transformed.
pub fn parse_conversations_csv(
    text: &str,
    options: ImportOptions,
) -> Result<Vec<ConversationPair>, ImportError> {
    let lines = usable_lines(text)?;
    let (english_idx, spanish_idx) = locate_columns(lines[0], "english", "spanish")?;
    let needed = english_idx.max(spanish_idx);

    let mut pairs = Vec::new();
    for line in &lines[1..] {
        let values = tokenize_line(line);
        if values.len() <= needed {
            continue;
        }
        pairs.push(ConversationPair {
            english: clean_field(&values[english_idx], options),
            spanish: clean_field(&values[spanish_idx], options),
        });
    }

    Ok(pairs)
}

/// Count of non-blank lines in the text, used by the command layer to
/// report how many data rows were skipped.
pub(crate) fn data_row_count(text: &str) -> usize {
    text.split('\n')
        .filter(|line| !line.trim().is_empty())
        .count()
        .saturating_sub(1)
}

fn usable_lines(text: &str) -> Result<Vec<&str>, ImportError> {
    let lines: Vec<&str> = text
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .collect();

    if lines.len() < 2 {
        return Err(ImportError::InsufficientRows);
    }
    Ok(lines)
}

/// Map the two required column-name fragments to column indices, or fail
/// naming every fragment that was not found.
fn locate_columns(
    header_line: &str,
    first: &str,
    second: &str,
) -> Result<(usize, usize), ImportError> {
    let headers: Vec<String> = header_line
        .split(',')
        .map(|h| h.trim().to_lowercase())
        .collect();

    let first_idx = headers.iter().position(|h| h.contains(first));
    let second_idx = headers.iter().position(|h| h.contains(second));

    match (first_idx, second_idx) {
        (Some(a), Some(b)) => Ok((a, b)),
        (a, b) => {
            let mut missing = Vec::new();
            if a.is_none() {
                missing.push(first);
            }
            if b.is_none() {
                missing.push(second);
            }
            Err(ImportError::MissingColumn {
                columns: missing.join(", "),
            })
        }
    }
}

fn clean_field(raw: &str, options: ImportOptions) -> String {
    let trimmed = raw.trim();
    if options.strip_quotes {
        if let Some(inner) = trimmed
            .strip_prefix('"')
            .and_then(|rest| rest.strip_suffix('"'))
        {
            return inner.to_string();
        }
    }
    trimmed.to_string()
}
