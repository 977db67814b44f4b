//! Drawing surface abstraction
//!
//! Game objects draw themselves onto a [`Surface`] in pixel coordinates. The
//! [`Canvas`] surface keeps one colour (and optional outline) per grid cell,
//! which is all a terminal can show.

use crate::game::{Position, Rgb};

/// A square area of the board in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRect {
    pub origin: Position,
    pub size: i32,
}

impl CellRect {
    pub fn new(origin: Position, size: i32) -> Self {
        Self { origin, size }
    }
}

/// The drawing operations the game needs
pub trait Surface {
    /// Paint the whole surface
    fn fill(&mut self, color: Rgb);

    fn fill_rect(&mut self, rect: CellRect, color: Rgb);

    /// Stroke the edge of a rectangle; a zero thickness draws nothing
    fn outline_rect(&mut self, rect: CellRect, color: Rgb, thickness: u32);
}

/// What a single grid cell of the canvas shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub fill: Rgb,
    pub border: Option<Rgb>,
}

/// An in-memory surface with cell resolution
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    columns: usize,
    rows: usize,
    cell_size: i32,
    cells: Vec<Cell>,
}

impl Canvas {
    pub fn new(width: i32, height: i32, cell_size: i32) -> Self {
        let columns = (width / cell_size).max(0) as usize;
        let rows = (height / cell_size).max(0) as usize;
        Self {
            columns,
            rows,
            cell_size,
            cells: vec![
                Cell {
                    fill: Rgb(0, 0, 0),
                    border: None,
                };
                columns * rows
            ],
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cell(&self, column: usize, row: usize) -> Option<&Cell> {
        if column >= self.columns || row >= self.rows {
            return None;
        }
        self.cells.get(row * self.columns + column)
    }

    /// Look up the cell containing a pixel position
    pub fn cell_at(&self, pos: Position) -> Option<&Cell> {
        if pos.x < 0 || pos.y < 0 {
            return None;
        }
        self.cell(
            (pos.x / self.cell_size) as usize,
            (pos.y / self.cell_size) as usize,
        )
    }

    /// Iterate rows top to bottom
    pub fn rows_iter(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.columns.max(1))
    }

    fn for_each_covered(&mut self, rect: CellRect, mut f: impl FnMut(&mut Cell)) {
        if rect.size <= 0 {
            return;
        }
        let first_col = rect.origin.x.div_euclid(self.cell_size).max(0);
        let last_col = (rect.origin.x + rect.size - 1)
            .div_euclid(self.cell_size)
            .min(self.columns as i32 - 1);
        let first_row = rect.origin.y.div_euclid(self.cell_size).max(0);
        let last_row = (rect.origin.y + rect.size - 1)
            .div_euclid(self.cell_size)
            .min(self.rows as i32 - 1);

        for row in first_row..=last_row {
            for col in first_col..=last_col {
                let idx = row as usize * self.columns + col as usize;
                f(&mut self.cells[idx]);
            }
        }
    }
}

impl Surface for Canvas {
    fn fill(&mut self, color: Rgb) {
        for cell in &mut self.cells {
            cell.fill = color;
            cell.border = None;
        }
    }

    fn fill_rect(&mut self, rect: CellRect, color: Rgb) {
        self.for_each_covered(rect, |cell| {
            cell.fill = color;
            cell.border = None;
        });
    }

    fn outline_rect(&mut self, rect: CellRect, color: Rgb, thickness: u32) {
        if thickness == 0 {
            return;
        }
        self.for_each_covered(rect, |cell| cell.border = Some(color));
    }
}
