use std::collections::HashSet;

use serde::Serialize;

use super::modal::{EnlargeModal, ModalEvent};
use crate::layout::{Grid, GridCell};
use crate::types::MediaKind;

/// What a cell currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaView {
    pub src: String,
    /// Playing / animated variant rather than the still thumbnail.
    pub animated: bool,
    /// Halftone + grayscale treatment of the idle state.
    pub desaturated: bool,
}

/// Data handed to the enlarge modal when a cell is clicked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub number: String,
    pub title: String,
    pub src: String,
    pub kind: MediaKind,
}

impl Selection {
    fn from_cell(cell: &GridCell) -> Option<Self> {
        match cell {
            GridCell::Item { number, title, src, media, .. } => {
                Some(Self { number: number.clone(), title: title.clone(), src: src.clone(), kind: *media })
            }
            GridCell::Placeholder { number, title, src, .. } => Some(Self {
                number: number.clone(),
                title: title.clone(),
                src: src.clone(),
                kind: MediaKind::Animated,
            }),
            GridCell::Inactive => None,
        }
    }
}

/// Interaction state of one rendered gallery.
///
/// Hover is a plain per-cell flag: set on enter, cleared on leave, no
/// debounce. Clicking a content cell opens the modal with that cell.
#[derive(Debug, Clone)]
pub struct GalleryView {
    grid: Grid,
    hovered: HashSet<(usize, usize)>,
    modal: EnlargeModal,
}

impl GalleryView {
    pub fn new(grid: Grid) -> Self {
        Self { grid, hovered: HashSet::new(), modal: EnlargeModal::new() }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn modal(&self) -> &EnlargeModal {
        &self.modal
    }

    pub fn modal_mut(&mut self) -> &mut EnlargeModal {
        &mut self.modal
    }

    /// Returns false when the position holds no content.
    pub fn set_hover(&mut self, row: usize, column: usize, hovered: bool) -> bool {
        match self.grid.cell(row, column) {
            Some(cell) if !cell.is_inactive() => {
                if hovered {
                    self.hovered.insert((row, column));
                } else {
                    self.hovered.remove(&(row, column));
                }
                true
            }
            _ => false,
        }
    }

    pub fn is_hovered(&self, row: usize, column: usize) -> bool {
        self.hovered.contains(&(row, column))
    }

    pub fn media(&self, row: usize, column: usize) -> Option<MediaView> {
        let hovered = self.is_hovered(row, column);
        match self.grid.cell(row, column)? {
            GridCell::Item { src, media, .. } => Some(MediaView {
                src: src.clone(),
                animated: hovered && *media != MediaKind::Image,
                desaturated: !hovered,
            }),
            GridCell::Placeholder { src, .. } => {
                Some(MediaView { src: src.clone(), animated: hovered, desaturated: !hovered })
            }
            GridCell::Inactive => None,
        }
    }

    /// Click on a cell: emits the selection and opens the modal with it.
    pub fn select(&mut self, row: usize, column: usize) -> Option<Selection> {
        let selection = Selection::from_cell(self.grid.cell(row, column)?)?;
        self.modal.handle(ModalEvent::Open(selection.clone()));
        Some(selection)
    }
}
