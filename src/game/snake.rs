use std::collections::{HashSet, VecDeque};

use super::{
    direction::Direction,
    grid::{Cell, Grid},
};

/// The player-controlled snake
///
/// Body segments are stored tail first: index 0 is the tail and the last
/// element is the head.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    body: VecDeque<Cell>,
    direction: Direction,
    /// Cell given up by the tail on the most recent advance
    vacated: Option<Cell>,
}

impl Snake {
    /// Create a stationary snake of length 1 at `start`
    pub fn new(start: Cell) -> Self {
        Self {
            body: VecDeque::from([start]),
            direction: Direction::None,
            vacated: None,
        }
    }

    /// Build a snake from explicit segments, tail first.
    ///
    /// Returns `None` if `segments` is empty.
    pub fn from_segments(
        segments: impl IntoIterator<Item = Cell>,
        direction: Direction,
    ) -> Option<Self> {
        let body: VecDeque<Cell> = segments.into_iter().collect();
        if body.is_empty() {
            return None;
        }
        Some(Self {
            body,
            direction,
            vacated: None,
        })
    }

    pub fn head(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    pub fn tail(&self) -> Cell {
        self.body[0]
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Segments from tail to head
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.body.iter().copied()
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    pub fn occupied(&self) -> HashSet<Cell> {
        self.cells().collect()
    }

    /// True if `direction` would turn the snake straight back onto itself
    pub fn is_reversal(&self, direction: Direction) -> bool {
        self.len() > 1 && self.direction.is_opposite(direction)
    }

    /// Set the direction used by the next advance
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Move one cell in the current direction.
    ///
    /// Each non-head segment takes the cell its head-ward neighbour held
    /// before the move, so length is preserved. Returns false if the snake
    /// is stationary.
    pub fn advance(&mut self) -> bool {
        if !self.direction.is_moving() {
            return false;
        }

        let new_head = self.head().stepped(self.direction);
        self.body.push_back(new_head);
        self.vacated = self.body.pop_front();
        true
    }

    /// Add one segment without giving up the tail.
    ///
    /// The cell vacated by the last advance is restored as the new tail. A
    /// snake that has not moved since its last reset duplicates its tail
    /// until the next advance pulls the segments apart.
    pub fn grow_at_head(&mut self) {
        let tail = self.vacated.take().unwrap_or_else(|| self.tail());
        self.body.push_front(tail);
    }

    pub fn collided_with_bounds(&self, grid: &Grid) -> bool {
        !grid.contains(self.head())
    }

    /// True if the head shares a cell with any other segment
    pub fn bites_itself(&self) -> bool {
        let head = self.head();
        self.body.iter().rev().skip(1).any(|&c| c == head)
    }

    pub fn reset(&mut self, initial: Cell) {
        self.body.clear();
        self.body.push_back(initial);
        self.direction = Direction::None;
        self.vacated = None;
    }
}
