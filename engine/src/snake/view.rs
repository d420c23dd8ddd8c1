use super::types::{Cell, Direction, Position};

/// Row and column of the arena crossing the snake's head.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct View {
    pub head: Position,
    pub row: Vec<Cell>,
    pub column: Vec<Cell>,
}

impl View {
    /// Cells seen from the head towards `direction`, nearest first, ending
    /// with the border wall.
    pub fn look(&self, direction: Direction) -> Vec<Cell> {
        match direction {
            Direction::Up => self.column[..self.head.row].iter().rev().copied().collect(),
            Direction::Down => self.column[self.head.row + 1..].to_vec(),
            Direction::Left => self.row[..self.head.col].iter().rev().copied().collect(),
            Direction::Right => self.row[self.head.col + 1..].to_vec(),
        }
    }

    /// First non-empty cell towards `direction` and its distance in steps.
    pub fn first_obstacle(&self, direction: Direction) -> Option<(Cell, usize)> {
        self.look(direction)
            .into_iter()
            .enumerate()
            .find(|(_, cell)| *cell != Cell::Empty)
            .map(|(i, cell)| (cell, i + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> View {
        use Cell::*;
        View {
            head: Position::new(2, 3),
            row: vec![Wall, Empty, GoodFood, Head, Empty, Wall],
            column: vec![Wall, Body, Head, Empty, Wall],
        }
    }

    #[test]
    fn test_look_orders_nearest_first() {
        let view = sample();
        assert_eq!(
            view.look(Direction::Left),
            vec![Cell::GoodFood, Cell::Empty, Cell::Wall]
        );
        assert_eq!(view.look(Direction::Right), vec![Cell::Empty, Cell::Wall]);
        assert_eq!(view.look(Direction::Up), vec![Cell::Body, Cell::Wall]);
        assert_eq!(view.look(Direction::Down), vec![Cell::Empty, Cell::Wall]);
    }

    #[test]
    fn test_first_obstacle_distance() {
        let view = sample();
        assert_eq!(view.first_obstacle(Direction::Left), Some((Cell::GoodFood, 1)));
        assert_eq!(view.first_obstacle(Direction::Right), Some((Cell::Wall, 2)));
        assert_eq!(view.first_obstacle(Direction::Up), Some((Cell::Body, 1)));
    }
}
