//! Dashboard grid layout.
//!
//! Turns the declarative dashboard description into a renderable grid plus
//! the two sizing scalars the view layer uses for the containing element.

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

/// Header cell: a label spanning `colspan` columns.
///
/// Precondition: `colspan >= 1`. Enforced by [`build_grid`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderCell {
    #[serde(rename = "header")]
    pub label: String,
    pub colspan: u32,
}

/// Body cell: one chart slot. The `section_id` is what the renderer later
/// uses to bind a chart instance to the slot; the layout builder only labels
/// it.
///
/// Precondition: `colspan >= 1` and `rowspan >= 1`. Enforced by
/// [`build_grid`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodyCell {
    pub colspan: u32,
    pub rowspan: u32,
    #[serde(rename = "bgcolor")]
    pub background_color: String,
    pub section_id: String,
}

/// Declarative dashboard description, as fetched by the view layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSpec {
    pub headers: Vec<HeaderCell>,
    pub rows: Vec<Vec<BodyCell>>,
}

/// Renderable grid: the cells copied through unchanged plus the derived
/// sizing scalars.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grid {
    pub headers: Vec<HeaderCell>,
    pub body: Vec<Vec<BodyCell>>,
    pub column_count: u32,
    pub row_count: usize,
}

/// Build the renderable grid for a dashboard description.
///
/// Cells, spans and identifiers are copied through unchanged. Zero spans are
/// rejected; consistency of the spans against the header width is not
/// checked - the caller owns the correctness of its description.
pub fn build_grid(spec: &DashboardSpec) -> Result<Grid, LayoutError> {
    for header in &spec.headers {
        if header.colspan == 0 {
            return Err(LayoutError::HeaderSpan {
                label: header.label.clone(),
            });
        }
    }
    for (row, cells) in spec.rows.iter().enumerate() {
        for cell in cells {
            for (field, value) in [("colspan", cell.colspan), ("rowspan", cell.rowspan)] {
                if value == 0 {
                    return Err(LayoutError::CellSpan {
                        section_id: cell.section_id.clone(),
                        row,
                        field,
                    });
                }
            }
        }
    }

    let grid = Grid {
        headers: spec.headers.clone(),
        body: spec.rows.clone(),
        column_count: column_count(spec),
        row_count: row_count(spec),
    };
    tracing::debug!(
        columns = grid.column_count,
        rows = grid.row_count,
        "built dashboard grid"
    );
    Ok(grid)
}

/// Total column count: the sum of the header colspans, in header order.
/// Zero headers yields 0.
pub fn column_count(spec: &DashboardSpec) -> u32 {
    spec.headers.iter().map(|cell| cell.colspan).sum()
}

/// Total row count: the header row plus one per body row. The header row
/// always counts, so zero body rows yields 1.
pub fn row_count(spec: &DashboardSpec) -> usize {
    1 + spec.rows.len()
}
