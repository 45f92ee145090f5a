//! Error types for Qualboard Core.

use thiserror::Error;

/// Failures while parsing scan history.
///
/// A parse either succeeds for the whole batch or fails as a whole; there is
/// no row-level partial success, so chart series can never come out
/// misaligned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HistoryError {
    #[error("history is empty and no expected metric width was given")]
    EmptyHistory,

    #[error("record {index}: expected {expected} metric values, got {found}")]
    WidthMismatch {
        index: usize,
        expected: usize,
        found: usize,
    },

    #[error("record {index}: timestamp fields {fields:?} do not form a valid calendar instant")]
    InvalidTimestamp { index: usize, fields: [i32; 6] },
}

/// Failures while building the dashboard grid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("header '{label}': colspan must be at least 1")]
    HeaderSpan { label: String },

    #[error("cell '{section_id}' in row {row}: {field} must be at least 1")]
    CellSpan {
        section_id: String,
        row: usize,
        field: &'static str,
    },
}
