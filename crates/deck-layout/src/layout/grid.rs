//! Grid layout calculation
//!
//! This module handles the geometric layout of the card grid on a page:
//! how many cards fit, where the grid origin sits, and where each cell
//! lands on the front and on the mirrored back.

use crate::options::LayoutConfig;
use crate::types::{Rect, Surface};

// =============================================================================
// Grid Capacity
// =============================================================================

/// Columns and rows of cards on one page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSize {
    pub columns: usize,
    pub rows: usize,
}

impl GridSize {
    /// Total number of cells on a page
    pub fn capacity(&self) -> usize {
        self.columns * self.rows
    }
}

/// Compute how many cards fit on a page.
///
/// `n` cards need `n` card widths and `n - 1` gaps, so the largest `n` with
/// `n * card + (n - 1) * gap <= usable` is `floor((usable + gap) / (card + gap))`.
/// Both counts are clamped to at least 1.
pub fn compute_grid(
    page_width: f32,
    page_height: f32,
    margin: f32,
    gap: f32,
    card_width: f32,
    card_height: f32,
) -> GridSize {
    GridSize {
        columns: fit_count(page_width - 2.0 * margin, gap, card_width),
        rows: fit_count(page_height - 2.0 * margin, gap, card_height),
    }
}

fn fit_count(usable: f32, gap: f32, card: f32) -> usize {
    let n = ((usable + gap) / (card + gap)).floor();
    if n.is_finite() && n >= 1.0 {
        n as usize
    } else {
        1
    }
}

// =============================================================================
// Cell Positions
// =============================================================================

/// Position within the grid (row, column)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPosition {
    /// Row index (0 = top row)
    pub row: usize,
    /// Column index (0 = leftmost column on the front)
    pub col: usize,
}

impl GridPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Position of the `index`th card on a page, filled row by row
    pub fn from_index(index: usize, columns: usize) -> Self {
        Self {
            row: index / columns,
            col: index % columns,
        }
    }
}

/// Resolved grid geometry for one page size, in points.
///
/// Coordinates follow PDF conventions: origin at the bottom-left corner,
/// y increasing upward.
#[derive(Debug, Clone, PartialEq)]
pub struct PageGeometry {
    pub grid: GridSize,
    pub page_width: f32,
    pub page_height: f32,
    pub card_width: f32,
    pub card_height: f32,
    pub gap: f32,
    /// Left edge of the front grid (slack split evenly)
    pub left_origin: f32,
    /// Left edge of the back grid (anchored to the opposite margin)
    pub right_origin: f32,
    /// Top edge of the grid
    pub top_origin: f32,
}

impl PageGeometry {
    pub fn new(config: &LayoutConfig) -> Self {
        let grid = config.grid();
        let (footprint_width, footprint_height) =
            footprint(grid, config.card_width, config.card_height, config.gap);

        let extra_x = config.page_width - 2.0 * config.margin - footprint_width;
        let extra_y = config.page_height - 2.0 * config.margin - footprint_height;

        Self {
            grid,
            page_width: config.page_width,
            page_height: config.page_height,
            card_width: config.card_width,
            card_height: config.card_height,
            gap: config.gap,
            left_origin: config.margin + extra_x / 2.0,
            right_origin: config.page_width - config.margin - footprint_width,
            top_origin: config.page_height - config.margin - extra_y / 2.0,
        }
    }

    /// Horizontal distance between neighbouring cells
    pub fn column_pitch(&self) -> f32 {
        self.card_width + self.gap
    }

    /// Vertical distance between neighbouring cells
    pub fn row_pitch(&self) -> f32 {
        self.card_height + self.gap
    }

    /// Bottom edge of a cell in the given row
    fn cell_y(&self, row: usize) -> f32 {
        self.top_origin - (row + 1) as f32 * self.card_height - row as f32 * self.gap
    }

    /// Cell bounds on the front surface
    pub fn front_cell(&self, pos: GridPosition) -> Rect {
        Rect::new(
            self.left_origin + pos.col as f32 * self.column_pitch(),
            self.cell_y(pos.row),
            self.card_width,
            self.card_height,
        )
    }

    /// Cell bounds on the back surface, before offsets and oversize.
    ///
    /// Column order is reversed so that after flipping the sheet along its
    /// vertical edge each back lands behind its front.
    ///
    /// The back grid starts at `right_origin`, flush with the right margin,
    /// while the front grid is centered. When the grid fills the printable
    /// width the two line up exactly. Otherwise backs sit `extra_x / 2` away
    /// from their fronts (5.5mm for 63mm cards on A4), which the back
    /// offsets are expected to absorb after printing a calibration sheet.
    pub fn mirrored_cell(&self, pos: GridPosition) -> Rect {
        let mirrored_col = self.grid.columns - 1 - pos.col;
        Rect::new(
            self.right_origin + mirrored_col as f32 * self.column_pitch(),
            self.cell_y(pos.row),
            self.card_width,
            self.card_height,
        )
    }

    /// Final cell bounds for a surface, with back offsets and oversize applied
    pub fn cell_rect(&self, pos: GridPosition, surface: Surface, config: &LayoutConfig) -> Rect {
        match surface {
            Surface::Front => self.front_cell(pos),
            Surface::Back => {
                let base = self.mirrored_cell(pos);
                Rect {
                    x: base.x + config.back_offset_x,
                    y: base.y + config.back_offset_y,
                    ..base
                }
                .inflate(config.back_oversize)
            }
        }
    }

    /// X coordinates of every vertical cell edge on the front
    pub fn column_edges(&self) -> Vec<f32> {
        let mut edges = Vec::with_capacity(self.grid.columns * 2);
        for col in 0..self.grid.columns {
            let left = self.left_origin + col as f32 * self.column_pitch();
            push_edge(&mut edges, left);
            push_edge(&mut edges, left + self.card_width);
        }
        edges
    }

    /// Y coordinates of every horizontal cell edge on the front
    pub fn row_edges(&self) -> Vec<f32> {
        let mut edges = Vec::with_capacity(self.grid.rows * 2);
        for row in 0..self.grid.rows {
            let bottom = self.cell_y(row);
            push_edge(&mut edges, bottom + self.card_height);
            push_edge(&mut edges, bottom);
        }
        edges
    }
}

/// Total grid size: `n` cards separated by `n - 1` gaps
fn footprint(grid: GridSize, card_width: f32, card_height: f32, gap: f32) -> (f32, f32) {
    (
        grid.columns as f32 * card_width + (grid.columns - 1) as f32 * gap,
        grid.rows as f32 * card_height + (grid.rows - 1) as f32 * gap,
    )
}

// With a zero gap neighbouring cells share an edge; draw it once.
fn push_edge(edges: &mut Vec<f32>, value: f32) {
    if edges.last().is_none_or(|last| (last - value).abs() > 1e-3) {
        edges.push(value);
    }
}

// =============================================================================
// Tests
// =============================================================================
