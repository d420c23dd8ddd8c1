use crate::rng::BoardRng;

use super::grid::Grid;
use super::types::{Cell, Position};

/// Set of empty positions with O(1) random draw and O(1) removal by value.
///
/// `cells` is a dense list; `slots` maps a grid index to the position's
/// place in that list. Removal swaps the last entry into the hole.
#[derive(Clone, Debug)]
pub struct FreeCells {
    cells: Vec<Position>,
    slots: Vec<Option<usize>>,
    width: usize,
}

impl FreeCells {
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            cells: Vec::new(),
            slots: vec![None; height * width],
            width,
        }
    }

    pub fn from_grid(grid: &Grid) -> Self {
        let mut free = Self::new(grid.height(), grid.width());
        for pos in grid.positions_of(Cell::Empty) {
            free.insert(pos);
        }
        free
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.slot(pos).is_some_and(|s| s.is_some())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Position> {
        self.cells.iter()
    }

    /// Returns false, and asserts in debug builds, if `pos` is already free.
    pub fn insert(&mut self, pos: Position) -> bool {
        let index = self.index_of(pos);
        debug_assert!(
            self.slots[index].is_none(),
            "({}, {}) is already in the free-cell pool",
            pos.row,
            pos.col
        );
        if self.slots[index].is_some() {
            return false;
        }
        self.slots[index] = Some(self.cells.len());
        self.cells.push(pos);
        true
    }

    pub fn remove(&mut self, pos: Position) -> bool {
        let Some(place) = self.slot(pos).flatten() else {
            return false;
        };
        self.remove_at(place);
        true
    }

    pub fn take_random(&mut self, rng: &mut BoardRng) -> Option<Position> {
        let place = rng.index(self.cells.len())?;
        Some(self.remove_at(place))
    }

    fn remove_at(&mut self, place: usize) -> Position {
        let pos = self.cells.swap_remove(place);
        let index = self.index_of(pos);
        self.slots[index] = None;
        if let Some(&moved) = self.cells.get(place) {
            let moved_index = self.index_of(moved);
            self.slots[moved_index] = Some(place);
        }
        pos
    }

    fn slot(&self, pos: Position) -> Option<Option<usize>> {
        if pos.col >= self.width {
            return None;
        }
        self.slots.get(self.index_of(pos)).copied()
    }

    fn index_of(&self, pos: Position) -> usize {
        pos.row * self.width + pos.col
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snake::types::Shape;
    use std::collections::HashSet;

    #[test]
    fn test_from_grid_holds_interior() {
        let grid = Grid::walled(Shape::new(5, 6));
        let free = FreeCells::from_grid(&grid);
        assert_eq!(free.len(), 30);
        assert!(free.contains(Position::new(1, 1)));
        assert!(!free.contains(Position::new(0, 0)));
    }

    #[test]
    fn test_remove_by_value_keeps_others_reachable() {
        let mut free = FreeCells::new(4, 4);
        let positions: Vec<Position> = (0..4).map(|c| Position::new(1, c)).collect();
        for &p in &positions {
            assert!(free.insert(p));
        }

        assert!(free.remove(positions[0]));
        assert!(!free.contains(positions[0]));
        assert_eq!(free.len(), 3);
        for &p in &positions[1..] {
            assert!(free.contains(p));
        }

        assert!(free.remove(positions[2]));
        assert!(free.remove(positions[3]));
        assert!(free.remove(positions[1]));
        assert!(free.is_empty());
    }

    #[test]
    fn test_remove_absent_returns_false() {
        let mut free = FreeCells::new(3, 3);
        assert!(!free.remove(Position::new(1, 1)));
        assert!(!free.remove(Position::new(9, 9)));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic]
    fn test_double_insert_asserts_in_debug() {
        let mut free = FreeCells::new(3, 3);
        free.insert(Position::new(1, 1));
        free.insert(Position::new(1, 1));
    }

    #[test]
    fn test_take_random_drains_every_cell_once() {
        let grid = Grid::walled(Shape::new(5, 5));
        let mut free = FreeCells::from_grid(&grid);
        let mut rng = BoardRng::new(11);
        let mut seen = HashSet::new();
        while let Some(pos) = free.take_random(&mut rng) {
            assert!(seen.insert(pos));
            assert!(!free.contains(pos));
        }
        assert_eq!(seen.len(), 25);
        assert!(free.take_random(&mut rng).is_none());
    }

    #[test]
    fn test_reinsert_after_removal() {
        let mut free = FreeCells::new(3, 3);
        let p = Position::new(1, 1);
        free.insert(p);
        free.remove(p);
        assert!(free.insert(p));
        assert_eq!(free.iter().copied().collect::<Vec<_>>(), vec![p]);
    }
}
