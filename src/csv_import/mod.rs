//! CSV import for facts and bilingual conversation pairs.
//!
//! The parsers here are pure: they take already-loaded text and return
//! structured records or a typed error. File and clipboard reads, state
//! updates and event emission all happen in the command layer.

mod parser;

pub use parser::{parse_conversations_csv, parse_facts_csv, tokenize_line, ImportOptions};
pub(crate) use parser::data_row_count;

use thiserror::Error;

/// Errors that abort an entire import attempt.
///
/// Header validation happens before any data row is parsed, so a failed
/// import never partially applies rows. Individual malformed data rows
/// (too few columns) are skipped silently instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportError {
    #[error("CSV must have a header line and at least one data row")]
    InsufficientRows,
    #[error("CSV is missing required column(s): {columns}")]
    MissingColumn { columns: String },
}
