use std::fmt;

use super::types::{Cell, Position, Shape};

/// Dense row-major arena, walls included.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    height: usize,
    width: usize,
}

impl Grid {
    /// Empty interior of `shape` surrounded by a one-cell wall border.
    pub fn walled(shape: Shape) -> Self {
        let height = shape.height + 2;
        let width = shape.width + 2;
        let mut grid = Self {
            cells: vec![Cell::Empty; height * width],
            height,
            width,
        };
        for row in 0..height {
            for col in 0..width {
                let pos = Position::new(row, col);
                if grid.is_border(pos) {
                    let index = grid.index_of(pos);
                    grid.cells[index] = Cell::Wall;
                }
            }
        }
        grid
    }

    pub(crate) fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());
        debug_assert!(rows.iter().all(|r| r.len() == width), "ragged grid");
        Self {
            cells: rows.into_iter().flatten().collect(),
            height,
            width,
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.height && pos.col < self.width
    }

    pub fn is_border(&self, pos: Position) -> bool {
        pos.row == 0 || pos.col == 0 || pos.row + 1 == self.height || pos.col + 1 == self.width
    }

    pub fn get(&self, pos: Position) -> Option<Cell> {
        if !self.contains(pos) {
            return None;
        }
        Some(self.cells[self.index_of(pos)])
    }

    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        debug_assert!(
            !self.is_border(pos),
            "border cell ({}, {}) must stay a wall",
            pos.row,
            pos.col
        );
        let index = self.index_of(pos);
        self.cells[index] = cell;
    }

    pub(crate) fn index_of(&self, pos: Position) -> usize {
        pos.row * self.width + pos.col
    }

    pub fn row(&self, row: usize) -> &[Cell] {
        &self.cells[row * self.width..(row + 1) * self.width]
    }

    pub fn column(&self, col: usize) -> Vec<Cell> {
        (0..self.height)
            .map(|row| self.cells[row * self.width + col])
            .collect()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    pub fn positions_of(&self, cell: Cell) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(move |&(_, &c)| c == cell)
            .map(|(i, _)| Position::new(i / self.width, i % self.width))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: String = row.iter().map(Cell::token).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walled_grid_has_border() {
        let grid = Grid::walled(Shape::new(5, 7));
        assert_eq!(grid.height(), 7);
        assert_eq!(grid.width(), 9);
        assert_eq!(grid.count(Cell::Wall), 2 * 9 + 2 * 5);
        assert_eq!(grid.count(Cell::Empty), 35);
        assert!(grid.row(0).iter().all(|&c| c == Cell::Wall));
        assert!(grid.column(8).iter().all(|&c| c == Cell::Wall));
        assert_eq!(grid.get(Position::new(1, 1)), Some(Cell::Empty));
    }

    #[test]
    fn test_get_out_of_bounds() {
        let grid = Grid::walled(Shape::new(5, 5));
        assert_eq!(grid.get(Position::new(7, 0)), None);
        assert_eq!(grid.get(Position::new(0, 7)), None);
    }

    #[test]
    fn test_row_and_column_slices() {
        let mut grid = Grid::walled(Shape::new(5, 5));
        grid.set(Position::new(2, 3), Cell::GoodFood);
        assert_eq!(grid.row(2)[3], Cell::GoodFood);
        assert_eq!(grid.column(3)[2], Cell::GoodFood);
        assert_eq!(grid.column(3).len(), 7);
        assert_eq!(
            grid.positions_of(Cell::GoodFood).collect::<Vec<_>>(),
            vec![Position::new(2, 3)]
        );
    }

    #[test]
    fn test_display_uses_tokens() {
        let mut grid = Grid::walled(Shape::new(5, 5));
        grid.set(Position::new(1, 1), Cell::Head);
        let text = grid.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "WWWWWWW");
        assert_eq!(lines[1], "WH    W");
    }
}
