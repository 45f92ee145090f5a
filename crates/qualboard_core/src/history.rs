//! Scan history parsing.
//!
//! Turns the raw history payload (one entry per scan run) into
//! column-oriented series that a trend chart can consume directly.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::HistoryError;

/// Timestamp fields of one history record, in wire order: year, calendar
/// month, day, hour, minute, second.
///
/// The month is the 1-based calendar month as written in the payload
/// (January = 1, December = 12). Chrono constructors use the same
/// convention, so the value passes through unchanged here; ecosystems whose
/// date constructors count months from zero must subtract one before
/// building the instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimestampFields(pub [i32; 6]);

impl TimestampFields {
    pub fn year(&self) -> i32 {
        self.0[0]
    }

    /// 1-based calendar month.
    pub fn month(&self) -> i32 {
        self.0[1]
    }

    pub fn day(&self) -> i32 {
        self.0[2]
    }

    pub fn hour(&self) -> i32 {
        self.0[3]
    }

    pub fn minute(&self) -> i32 {
        self.0[4]
    }

    pub fn second(&self) -> i32 {
        self.0[5]
    }

    /// Build the calendar instant these fields describe (proleptic
    /// Gregorian calendar).
    ///
    /// Returns `None` when a field is out of range (month 0 or 13, day 32,
    /// hour 25, ...). Out-of-range fields are refused rather than rolled
    /// over into the next month: a rolled-over instant would silently shift
    /// the chart point.
    pub fn to_instant(&self) -> Option<NaiveDateTime> {
        let [year, month, day, hour, minute, second] = self.0;
        let date = NaiveDate::from_ymd_opt(
            year,
            u32::try_from(month).ok()?,
            u32::try_from(day).ok()?,
        )?;
        date.and_hms_opt(
            u32::try_from(hour).ok()?,
            u32::try_from(minute).ok()?,
            u32::try_from(second).ok()?,
        )
    }
}

/// One history record: the timestamp of a scan run plus the metric values
/// measured by that run.
///
/// Serialized as the 2-element array of the wire payload:
/// `[[year, month, day, hour, minute, second], [v0, v1, ...]]`. The value
/// positions are the implicit metric schema; every record in one batch must
/// carry the same number of values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord(pub TimestampFields, pub Vec<f64>);

impl HistoryRecord {
    pub fn timestamp(&self) -> &TimestampFields {
        &self.0
    }

    pub fn values(&self) -> &[f64] {
        &self.1
    }
}

/// Column-oriented view of the scan history: one timestamp column plus one
/// column per metric position, all of identical length, in input order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistorySeries {
    /// One instant per scan run, in input order.
    pub timestamps: Vec<NaiveDateTime>,
    /// `metrics[i]` holds the value at metric position `i` across all runs.
    pub metrics: Vec<Vec<f64>>,
}

impl HistorySeries {
    fn with_width(width: usize) -> Self {
        Self {
            timestamps: Vec::new(),
            metrics: vec![Vec::new(); width],
        }
    }

    /// Number of records the series was built from.
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Number of metric columns.
    pub fn width(&self) -> usize {
        self.metrics.len()
    }

    /// The values at metric position `index` across all runs.
    pub fn metric(&self, index: usize) -> Option<&[f64]> {
        self.metrics.get(index).map(Vec::as_slice)
    }
}

/// Parse a scan history into chart-ready series.
///
/// The metric width is taken from the first record; every later record must
/// match it. Input order is preserved exactly - no sorting, filtering or
/// deduplication. An empty history fails with [`HistoryError::EmptyHistory`]
/// because the width cannot be inferred from zero records; callers that know
/// the width up front can use [`parse_with_width`] instead.
pub fn parse(history: &[HistoryRecord]) -> Result<HistorySeries, HistoryError> {
    let first = history.first().ok_or(HistoryError::EmptyHistory)?;
    parse_with_width(history, first.values().len())
}

/// Parse a scan history against a caller-declared metric width.
///
/// An empty history yields an empty series with `width` metric columns; a
/// record whose value count differs from `width` fails the whole parse.
pub fn parse_with_width(
    history: &[HistoryRecord],
    width: usize,
) -> Result<HistorySeries, HistoryError> {
    let mut series = HistorySeries::with_width(width);
    series.timestamps.reserve(history.len());
    for column in &mut series.metrics {
        column.reserve(history.len());
    }

    for (index, record) in history.iter().enumerate() {
        if record.values().len() != width {
            return Err(HistoryError::WidthMismatch {
                index,
                expected: width,
                found: record.values().len(),
            });
        }
        let instant = record
            .timestamp()
            .to_instant()
            .ok_or(HistoryError::InvalidTimestamp {
                index,
                fields: record.timestamp().0,
            })?;
        series.timestamps.push(instant);
        for (column, value) in series.metrics.iter_mut().zip(record.values()) {
            column.push(*value);
        }
    }

    tracing::debug!(records = series.len(), width, "parsed scan history");
    Ok(series)
}
