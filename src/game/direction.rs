/// Direction the snake travels in
///
/// `None` means the snake has not started moving yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    None,
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Order in which direction keys are polled each frame; the last pressed
    /// key in this order wins.
    pub const POLL_ORDER: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Returns the delta (dx, dy) for one step in this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::None => (0, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
                | (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
        )
    }

    pub fn is_moving(&self) -> bool {
        *self != Direction::None
    }

    /// Folds a set of simultaneously pressed directions into one, using
    /// last-checked-wins over `POLL_ORDER` (Right > Left > Down > Up).
    pub fn resolve_pressed(pressed: &[Direction]) -> Option<Direction> {
        Self::POLL_ORDER
            .iter()
            .rev()
            .find(|d| pressed.contains(d))
            .copied()
    }
}
