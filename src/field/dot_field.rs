use crate::{
    field::random::DotSource,
    foundation::core::GridSize,
    foundation::error::{SirdsError, SirdsResult},
};

/// Row-major grid of binary dot cells, origin at the top-left.
///
/// Width and height are fixed at construction; every row holds exactly `width` cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DotField {
    size: GridSize,
    cells: Vec<bool>,
}

impl DotField {
    /// Build a `width x height` field with every cell drawn independently from `dots`.
    pub fn new<S: DotSource + ?Sized>(
        width: usize,
        height: usize,
        dots: &mut S,
    ) -> SirdsResult<Self> {
        let mut field = Self::blank(width, height)?;
        field.randomize(dots);
        Ok(field)
    }

    /// Build a field with no dots set.
    pub fn blank(width: usize, height: usize) -> SirdsResult<Self> {
        let size = GridSize::new(width, height)?;
        Ok(Self {
            size,
            cells: vec![false; size.cell_count()],
        })
    }

    /// Build a field from explicit rows, which must be non-empty and equally long.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> SirdsResult<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let size = GridSize::new(width, height)?;

        let mut cells = Vec::with_capacity(size.cell_count());
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(SirdsError::validation(format!(
                    "row {i} has {} cells, expected {width}",
                    row.len()
                )));
            }
            cells.extend_from_slice(row);
        }
        Ok(Self { size, cells })
    }

    /// Redraw every cell in place from `dots`, keeping the dimensions.
    pub fn randomize<S: DotSource + ?Sized>(&mut self, dots: &mut S) {
        for cell in &mut self.cells {
            *cell = dots.next_dot();
        }
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Grid dimensions.
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Read the cell at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> SirdsResult<bool> {
        let i = self.index(row, col)?;
        Ok(self.cells[i])
    }

    /// Overwrite the cell at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: bool) -> SirdsResult<()> {
        let i = self.index(row, col)?;
        self.cells[i] = value;
        Ok(())
    }

    /// Borrow one row.
    pub fn row(&self, row: usize) -> SirdsResult<&[bool]> {
        if row >= self.size.height {
            return Err(self.out_of_range(row, 0));
        }
        let start = row * self.size.width;
        Ok(&self.cells[start..start + self.size.width])
    }

    pub(crate) fn row_mut(&mut self, row: usize) -> &mut [bool] {
        let start = row * self.size.width;
        &mut self.cells[start..start + self.size.width]
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[bool]> + '_ {
        self.cells.chunks_exact(self.size.width)
    }

    /// Iterate over the coordinates `(row, col)` of every set cell, in row-major order.
    pub fn dots(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.size.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, on)| **on)
            .map(move |(i, _)| (i / width, i % width))
    }

    /// Number of set cells.
    pub fn count_dots(&self) -> usize {
        self.cells.iter().filter(|c| **c).count()
    }

    fn index(&self, row: usize, col: usize) -> SirdsResult<usize> {
        if !self.size.contains(row, col) {
            return Err(self.out_of_range(row, col));
        }
        Ok(row * self.size.width + col)
    }

    fn out_of_range(&self, row: usize, col: usize) -> SirdsError {
        SirdsError::OutOfRange {
            row,
            col,
            height: self.size.height,
            width: self.size.width,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/field/dot_field.rs"]
mod tests;
