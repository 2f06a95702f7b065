use super::{direction::Direction, error::GameError};

/// A cell on the game grid, in grid coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move cell by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Neighbouring cell one step in `direction`
    pub fn stepped(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// Fixed-size playing field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Result<Self, GameError> {
        if width == 0 || height == 0 {
            return Err(GameError::InvalidConfig(format!(
                "grid must be at least 1x1, got {}x{}",
                width, height
            )));
        }
        let width = i32::try_from(width)
            .map_err(|_| GameError::InvalidConfig(format!("grid width {} too large", width)))?;
        let height = i32::try_from(height)
            .map_err(|_| GameError::InvalidConfig(format!("grid height {} too large", height)))?;
        Ok(Self { width, height })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Number of cells on the grid
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Check if a cell is within [0, width) x [0, height)
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.width && cell.y >= 0 && cell.y < self.height
    }

    pub fn center(&self) -> Cell {
        Cell::new(self.width / 2, self.height / 2)
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Cell::new(x, y)))
    }
}
