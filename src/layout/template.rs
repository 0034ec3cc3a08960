use serde::Serialize;
use thiserror::Error;

/// Column count of the periodic table layout.
pub const PERIODIC_COLUMNS: usize = 15;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("template must have at least one column")]
    NoColumns,
    #[error("row {row} has {len} slots, expected {columns}")]
    RowWidth { row: usize, len: usize, columns: usize },
    #[error("row {row} activates column {column}, template has {columns} columns")]
    ColumnOutOfRange { row: usize, column: usize, columns: usize },
}

/// Which grid positions may hold content.
///
/// Every row has exactly `columns` slots. Inactive slots stay empty whatever
/// the listing length; they only exist for spacing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridTemplate {
    columns: usize,
    rows: Vec<Vec<bool>>,
}

impl GridTemplate {
    pub fn new(columns: usize, rows: Vec<Vec<bool>>) -> Result<Self, TemplateError> {
        if columns == 0 {
            return Err(TemplateError::NoColumns);
        }
        if let Some((row, mask)) = rows.iter().enumerate().find(|(_, mask)| mask.len() != columns) {
            return Err(TemplateError::RowWidth { row, len: mask.len(), columns });
        }
        Ok(Self { columns, rows })
    }

    /// Builds a template from the active column indices of each row.
    pub fn from_active_columns(columns: usize, rows: &[Vec<usize>]) -> Result<Self, TemplateError> {
        if columns == 0 {
            return Err(TemplateError::NoColumns);
        }
        let mut masks = Vec::with_capacity(rows.len());
        for (row, active) in rows.iter().enumerate() {
            let mut mask = vec![false; columns];
            for &column in active {
                if column >= columns {
                    return Err(TemplateError::ColumnOutOfRange { row, column, columns });
                }
                mask[column] = true;
            }
            masks.push(mask);
        }
        Ok(Self { columns, rows: masks })
    }

    /// The 7 x 15 periodic table: two corner cells, two rows of 2 + 6, then
    /// four full rows.
    pub fn periodic() -> Self {
        let corners: Vec<bool> = (0..PERIODIC_COLUMNS).map(|c| c == 0 || c == PERIODIC_COLUMNS - 1).collect();
        let sides: Vec<bool> = (0..PERIODIC_COLUMNS).map(|c| c < 2 || c >= 9).collect();
        let full = vec![true; PERIODIC_COLUMNS];
        let rows = vec![corners, sides.clone(), sides, full.clone(), full.clone(), full.clone(), full];
        Self { columns: PERIODIC_COLUMNS, rows }
    }

    /// Full rows of `columns` holding exactly `count` active slots; the tail
    /// of the last row is inactive.
    pub fn flow(columns: usize, count: usize) -> Self {
        let columns = columns.max(1);
        let rows = (0..count.div_ceil(columns))
            .map(|r| (0..columns).map(|c| r * columns + c < count).collect())
            .collect();
        Self { columns, rows }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Vec<bool>] {
        &self.rows
    }

    pub fn is_active(&self, row: usize, column: usize) -> bool {
        self.rows.get(row).and_then(|r| r.get(column)).copied().unwrap_or(false)
    }

    /// Number of slots that receive either a file or a placeholder.
    pub fn active_slots(&self) -> usize {
        self.rows.iter().map(|r| r.iter().filter(|&&a| a).count()).sum()
    }
}
