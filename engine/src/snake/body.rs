use std::collections::VecDeque;

use super::types::Position;

/// Snake segments, head first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Snake {
    segments: VecDeque<Position>,
}

impl Snake {
    pub fn new(head: Position) -> Self {
        Self {
            segments: VecDeque::from([head]),
        }
    }

    pub fn from_segments(segments: impl IntoIterator<Item = Position>) -> Self {
        Self {
            segments: segments.into_iter().collect(),
        }
    }

    pub fn head(&self) -> Option<Position> {
        self.segments.front().copied()
    }

    pub fn tail(&self) -> Option<Position> {
        self.segments.back().copied()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.segments.contains(&pos)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Position> {
        self.segments.iter()
    }

    pub(crate) fn push_head(&mut self, pos: Position) {
        self.segments.push_front(pos);
    }

    pub(crate) fn push_tail(&mut self, pos: Position) {
        self.segments.push_back(pos);
    }

    pub(crate) fn pop_tail(&mut self) -> Option<Position> {
        self.segments.pop_back()
    }

    /// Index of the first segment not orthogonally adjacent to its
    /// predecessor, if any.
    pub fn first_gap(&self) -> Option<usize> {
        self.segments
            .iter()
            .zip(self.segments.iter().skip(1))
            .position(|(a, b)| !a.is_adjacent(*b))
            .map(|i| i + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_pop() {
        let mut snake = Snake::new(Position::new(2, 2));
        snake.push_tail(Position::new(2, 3));
        snake.push_head(Position::new(2, 1));
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Some(Position::new(2, 1)));
        assert_eq!(snake.pop_tail(), Some(Position::new(2, 3)));
        assert_eq!(snake.tail(), Some(Position::new(2, 2)));
    }

    #[test]
    fn test_first_gap() {
        let snake = Snake::from_segments([
            Position::new(1, 1),
            Position::new(1, 2),
            Position::new(2, 2),
        ]);
        assert_eq!(snake.first_gap(), None);

        let broken = Snake::from_segments([
            Position::new(1, 1),
            Position::new(1, 2),
            Position::new(3, 2),
        ]);
        assert_eq!(broken.first_gap(), Some(2));
    }

    #[test]
    fn test_empty_snake() {
        let mut snake = Snake::new(Position::new(1, 1));
        snake.pop_tail();
        assert!(snake.is_empty());
        assert_eq!(snake.head(), None);
        assert_eq!(snake.first_gap(), None);
    }
}
