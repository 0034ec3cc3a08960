//! Periodic-table layout generation.
//!
//! [`layout`] binds an ordered file list to the active slots of a
//! [`GridTemplate`]. Slots are visited row by row, columns ascending; the Nth
//! active slot receives the Nth file, or a placeholder once the list runs
//! out. Files beyond the template's capacity are dropped. The function is
//! pure: the same inputs always produce the same grid.

pub mod template;

use serde::Serialize;

use crate::types::{MediaFile, MediaKind};

pub use template::{GridTemplate, TemplateError, PERIODIC_COLUMNS};

pub const PLACEHOLDER_TITLE: &str = "Coming Soon";

/// Per-gallery parameters of the generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutOptions {
    /// Public path the gallery's files are served under, e.g. `/everydays`.
    pub base_path: String,
    /// Media shown by every placeholder.
    pub fallback_asset: String,
    /// Every Nth item is accented; 0 disables accents.
    pub accent_modulus: usize,
    /// Zero-padding of the display number.
    pub ordinal_width: usize,
    /// Title prefix of items, e.g. `Day` gives `Day 3`.
    pub label: String,
}

impl LayoutOptions {
    fn number(&self, ordinal: usize) -> String {
        format!("{:0width$}", ordinal + 1, width = self.ordinal_width)
    }

    fn is_accent(&self, ordinal: usize) -> bool {
        self.accent_modulus != 0 && (ordinal + 1) % self.accent_modulus == 0
    }

    /// Display path of a listed file.
    pub fn display_path(&self, file: &str) -> String {
        format!("{}/{}", self.base_path.trim_end_matches('/'), file)
    }
}

/// One resolved grid position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GridCell {
    Item {
        ordinal: usize,
        number: String,
        title: String,
        file: String,
        src: String,
        media: MediaKind,
        accent: bool,
    },
    Placeholder {
        ordinal: usize,
        number: String,
        title: String,
        src: String,
    },
    Inactive,
}

impl GridCell {
    pub fn is_item(&self) -> bool {
        matches!(self, GridCell::Item { .. })
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, GridCell::Placeholder { .. })
    }

    pub fn is_inactive(&self) -> bool {
        matches!(self, GridCell::Inactive)
    }

    pub fn ordinal(&self) -> Option<usize> {
        match self {
            GridCell::Item { ordinal, .. } | GridCell::Placeholder { ordinal, .. } => Some(*ordinal),
            GridCell::Inactive => None,
        }
    }
}

/// Output of [`layout`]: rows of cells shaped like the template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grid {
    pub columns: usize,
    pub rows: Vec<Vec<GridCell>>,
}

impl Grid {
    pub fn cell(&self, row: usize, column: usize) -> Option<&GridCell> {
        self.rows.get(row).and_then(|r| r.get(column))
    }

    pub fn cells(&self) -> impl Iterator<Item = &GridCell> {
        self.rows.iter().flatten()
    }

    pub fn item_count(&self) -> usize {
        self.cells().filter(|c| c.is_item()).count()
    }

    pub fn placeholder_count(&self) -> usize {
        self.cells().filter(|c| c.is_placeholder()).count()
    }
}

pub fn layout(files: &[MediaFile], template: &GridTemplate, options: &LayoutOptions) -> Grid {
    let mut cursor = 0usize;
    let mut rows = Vec::with_capacity(template.row_count());

    for mask in template.rows() {
        let mut row = Vec::with_capacity(template.columns());
        for &active in mask {
            if !active {
                row.push(GridCell::Inactive);
                continue;
            }
            let ordinal = cursor;
            cursor += 1;
            let cell = match files.get(ordinal) {
                Some(file) => GridCell::Item {
                    ordinal,
                    number: options.number(ordinal),
                    title: format!("{} {}", options.label, ordinal + 1),
                    file: file.name.clone(),
                    src: options.display_path(&file.name),
                    media: file.kind,
                    accent: options.is_accent(ordinal),
                },
                None => GridCell::Placeholder {
                    ordinal,
                    number: options.number(ordinal),
                    title: PLACEHOLDER_TITLE.to_string(),
                    src: options.fallback_asset.clone(),
                },
            };
            row.push(cell);
        }
        rows.push(row);
    }

    if files.len() > cursor {
        tracing::debug!("Layout capacity {} reached; {} files not placed", cursor, files.len() - cursor);
    }

    Grid { columns: template.columns(), rows }
}
