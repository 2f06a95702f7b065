use std::collections::HashSet;

use log::warn;
use rand::Rng;

use super::{
    error::GameError,
    grid::{Cell, Grid},
};

/// Random samples tried before falling back to enumerating free cells
pub const MAX_RESAMPLE_ATTEMPTS: usize = 64;

/// Places food on random free cells
#[derive(Debug)]
pub struct FoodSpawner<R> {
    rng: R,
}

impl<R: Rng> FoodSpawner<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Pick a uniformly random cell of `grid` that is not in `occupied`.
    ///
    /// Resamples while the grid is sparsely occupied. Once more than 80% of
    /// the grid is taken, or the resample budget runs out, the free cells are
    /// enumerated and one is chosen from them. Fails with
    /// [`GameError::GridFull`] only when no free cell exists.
    pub fn spawn(&mut self, occupied: &HashSet<Cell>, grid: &Grid) -> Result<Cell, GameError> {
        let taken = occupied.iter().filter(|c| grid.contains(**c)).count();
        if taken >= grid.area() {
            return Err(GameError::GridFull);
        }

        if taken * 5 <= grid.area() * 4 {
            for _ in 0..MAX_RESAMPLE_ATTEMPTS {
                let x = self.rng.gen_range(0..grid.width());
                let y = self.rng.gen_range(0..grid.height());
                let cell = Cell::new(x, y);

                if !occupied.contains(&cell) {
                    return Ok(cell);
                }
            }
            warn!(
                "food resampling gave up after {} attempts, enumerating free cells",
                MAX_RESAMPLE_ATTEMPTS
            );
        }

        let free: Vec<Cell> = grid.cells().filter(|c| !occupied.contains(c)).collect();
        if free.is_empty() {
            return Err(GameError::GridFull);
        }
        Ok(free[self.rng.gen_range(0..free.len())])
    }
}
