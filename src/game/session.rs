use std::time::Duration;

use log::{debug, info};
use rand::{Rng, SeedableRng, rngs::StdRng};

use super::{
    config::GameConfig,
    direction::Direction,
    error::GameError,
    food::FoodSpawner,
    grid::{Cell, Grid},
    snake::Snake,
    timestep::Timestep,
};
use crate::render::{DrawCommand, RenderFrame};

/// Why the snake was sent back to the center
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetCause {
    /// Head left the grid
    Bounds,
    /// Head ran into the body (only with `self_collision` enabled)
    SelfCollision,
    /// Player asked for a restart
    Manual,
}

/// What happened during one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameOutcome {
    /// Fixed ticks executed this frame
    pub ticks: u32,
    /// Food cells eaten this frame
    pub food_eaten: u32,
    /// Reset this frame, if any. A reset leaves the snake stationary, so a
    /// frame holds at most one.
    pub reset: Option<ResetCause>,
}

/// All state of a running game: grid, snake, food and randomness
pub struct GameSession<R = StdRng> {
    config: GameConfig,
    grid: Grid,
    snake: Snake,
    food: Cell,
    spawner: FoodSpawner<R>,
    timestep: Timestep,
}

impl GameSession<StdRng> {
    /// Create a session, seeding the RNG from `config.seed` or from entropy
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> GameSession<R> {
    pub fn with_rng(config: GameConfig, rng: R) -> Result<Self, GameError> {
        config.validate()?;
        let grid = Grid::new(config.grid_width, config.grid_height)?;
        let snake = Snake::new(grid.center());
        let mut spawner = FoodSpawner::new(rng);
        let food = spawner.spawn(&snake.occupied(), &grid)?;
        let timestep = Timestep::new(config.tick_duration());

        info!(
            "new session on {}x{} grid, {} cells/s",
            grid.width(),
            grid.height(),
            config.speed
        );

        Ok(Self {
            config,
            grid,
            snake,
            food,
            spawner,
            timestep,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Cell {
        self.food
    }

    pub fn accumulated(&self) -> Duration {
        self.timestep.accumulated()
    }

    /// Apply a direction command, honouring `forbid_reverse`
    pub fn steer(&mut self, direction: Direction) {
        if self.config.forbid_reverse && self.snake.is_reversal(direction) {
            debug!("ignoring reversal to {:?}", direction);
            return;
        }
        self.snake.set_direction(direction);
    }

    /// Run one frame: input, fixed ticks, collision and food checks.
    ///
    /// Every tick is followed by the bounds and food checks, and both run once
    /// more at the end of the frame so state is settled even when no tick was
    /// due.
    pub fn frame(
        &mut self,
        elapsed: Duration,
        input: Option<Direction>,
    ) -> Result<FrameOutcome, GameError> {
        if let Some(direction) = input {
            self.steer(direction);
        }

        let mut outcome = FrameOutcome::default();

        self.timestep.accumulate(elapsed);
        while self.timestep.consume_tick() {
            outcome.ticks += 1;
            self.tick(&mut outcome)?;
        }
        self.settle(&mut outcome)?;

        Ok(outcome)
    }

    /// Send the snake back to the center. The tick accumulator is untouched.
    pub fn restart(&mut self) {
        self.reset_snake(ResetCause::Manual);
    }

    /// Draw commands for the current state
    pub fn render_frame(&self) -> RenderFrame {
        let mut commands = Vec::with_capacity(self.snake.len() + 3);
        commands.push(DrawCommand::Background {
            width: self.grid.width(),
            height: self.grid.height(),
        });
        commands.push(DrawCommand::Food(self.food));

        let head = self.snake.len() - 1;
        commands.extend(self.snake.cells().enumerate().map(|(i, cell)| {
            DrawCommand::Segment {
                cell,
                head: i == head,
            }
        }));

        if self.config.debug_overlay {
            let cells: Vec<String> = self
                .snake
                .cells()
                .map(|c| format!("({},{})", c.x, c.y))
                .collect();
            commands.push(DrawCommand::Text {
                x: 0,
                y: 0,
                text: format!("len:{} arr:[{}]", self.snake.len(), cells.join(" ")),
            });
        }

        RenderFrame {
            grid_width: self.grid.width(),
            grid_height: self.grid.height(),
            cell_size: self.config.cell_size,
            commands,
        }
    }

    fn tick(&mut self, outcome: &mut FrameOutcome) -> Result<(), GameError> {
        let moved = self.snake.advance();

        // A snake that grew before moving overlaps itself until it moves, so
        // only a real step can count as a bite.
        if moved && self.config.self_collision && self.snake.bites_itself() {
            self.reset_snake(ResetCause::SelfCollision);
            outcome.reset = Some(ResetCause::SelfCollision);
        }

        self.settle(outcome)
    }

    fn settle(&mut self, outcome: &mut FrameOutcome) -> Result<(), GameError> {
        if self.snake.collided_with_bounds(&self.grid) {
            self.reset_snake(ResetCause::Bounds);
            outcome.reset = Some(ResetCause::Bounds);
        }

        if self.snake.head() == self.food {
            self.snake.grow_at_head();
            self.food = self.spawner.spawn(&self.snake.occupied(), &self.grid)?;
            outcome.food_eaten += 1;
            debug!(
                "food eaten, length {}, next food at ({}, {})",
                self.snake.len(),
                self.food.x,
                self.food.y
            );
        }

        Ok(())
    }

    fn reset_snake(&mut self, cause: ResetCause) {
        info!(
            "snake reset ({:?}) at length {}, head was ({}, {})",
            cause,
            self.snake.len(),
            self.snake.head().x,
            self.snake.head().y
        );
        self.snake.reset(self.grid.center());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICK: Duration = Duration::from_millis(100);

    fn session(config: GameConfig) -> GameSession<StdRng> {
        GameSession::with_rng(config, StdRng::seed_from_u64(1234)).unwrap()
    }

    fn body(session: &GameSession<StdRng>) -> Vec<Cell> {
        session.snake.cells().collect()
    }

    #[test]
    fn test_initial_state() {
        let session = session(GameConfig::default());

        assert_eq!(body(&session), vec![Cell::new(10, 10)]);
        assert_eq!(session.snake().direction(), Direction::None);
        assert!(session.grid().contains(session.food()));
        assert_ne!(session.food(), Cell::new(10, 10));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = GameConfig {
            speed: 0.0,
            ..Default::default()
        };
        assert!(GameSession::new(config).is_err());
    }

    #[test]
    fn test_seeded_sessions_agree() {
        let config = GameConfig {
            seed: Some(5),
            ..Default::default()
        };
        let a = GameSession::new(config.clone()).unwrap();
        let b = GameSession::new(config).unwrap();
        assert_eq!(a.food(), b.food());
    }

    #[test]
    fn test_stationary_until_steered() {
        let mut session = session(GameConfig::default());
        session.food = Cell::new(0, 0);

        let outcome = session.frame(TICK * 5, None).unwrap();
        assert_eq!(outcome.ticks, 5);
        assert_eq!(body(&session), vec![Cell::new(10, 10)]);
    }

    #[test]
    fn test_single_tick_moves_right() {
        let mut session = session(GameConfig::default());
        session.food = Cell::new(0, 0);

        let outcome = session.frame(TICK, Some(Direction::Right)).unwrap();

        assert_eq!(outcome.ticks, 1);
        assert_eq!(session.snake().head(), Cell::new(11, 10));
        assert_eq!(session.snake().len(), 1);
    }

    #[test]
    fn test_no_tick_before_tick_duration() {
        let mut session = session(GameConfig::default());
        session.food = Cell::new(0, 0);

        let outcome = session
            .frame(Duration::from_millis(16), Some(Direction::Up))
            .unwrap();
        assert_eq!(outcome.ticks, 0);
        assert_eq!(session.snake().head(), Cell::new(10, 10));
        assert_eq!(session.accumulated(), Duration::from_millis(16));
    }

    #[test]
    fn test_catch_up_ticks() {
        let mut session = session(GameConfig::default());
        session.food = Cell::new(0, 0);

        let outcome = session
            .frame(Duration::from_millis(350), Some(Direction::Down))
            .unwrap();
        assert_eq!(outcome.ticks, 3);
        assert_eq!(session.snake().head(), Cell::new(10, 13));
        assert_eq!(session.accumulated(), Duration::from_millis(50));
    }

    #[test]
    fn test_eat_and_grow() {
        let mut session = session(GameConfig::default());
        session.snake =
            Snake::from_segments([Cell::new(5, 5), Cell::new(5, 6)], Direction::Down).unwrap();
        session.food = Cell::new(5, 7);

        let outcome = session.frame(TICK, None).unwrap();

        assert_eq!(outcome.food_eaten, 1);
        let cells = body(&session);
        assert_eq!(
            cells,
            vec![Cell::new(5, 5), Cell::new(5, 6), Cell::new(5, 7)]
        );
        assert!(!cells.contains(&session.food()));
        assert!(session.grid().contains(session.food()));
    }

    #[test]
    fn test_out_of_bounds_resets() {
        let mut session = session(GameConfig::default());
        session.snake = Snake::from_segments([Cell::new(20, 5)], Direction::Right).unwrap();
        session.food = Cell::new(0, 0);

        let outcome = session.frame(Duration::ZERO, None).unwrap();

        assert_eq!(outcome.reset, Some(ResetCause::Bounds));
        assert_eq!(body(&session), vec![Cell::new(10, 10)]);
        assert_eq!(session.snake().direction(), Direction::None);
    }

    #[test]
    fn test_running_off_the_edge_resets() {
        let mut session = session(GameConfig::small());
        session.food = Cell::new(9, 9);

        let mut reset = None;
        for _ in 0..6 {
            let outcome = session.frame(TICK, Some(Direction::Left)).unwrap();
            if outcome.reset.is_some() {
                reset = outcome.reset;
                break;
            }
        }

        assert_eq!(reset, Some(ResetCause::Bounds));
        assert_eq!(session.snake().head(), Cell::new(5, 5));
        assert_eq!(session.snake().direction(), Direction::None);
    }

    #[test]
    fn test_reset_keeps_accumulator() {
        let mut session = session(GameConfig::small());
        session.snake = Snake::from_segments([Cell::new(0, 3)], Direction::Left).unwrap();
        session.food = Cell::new(9, 9);

        let outcome = session.frame(Duration::from_millis(130), None).unwrap();

        assert_eq!(outcome.reset, Some(ResetCause::Bounds));
        assert_eq!(session.accumulated(), Duration::from_millis(30));
    }

    #[test]
    fn test_catch_up_frame_resets_once() {
        let mut session = session(GameConfig::new(3, 3));
        session.food = Cell::new(0, 0);
        session.snake = Snake::from_segments([Cell::new(2, 2)], Direction::Down).unwrap();

        let outcome = session.frame(TICK * 5, None).unwrap();

        assert_eq!(outcome.ticks, 5);
        assert_eq!(outcome.reset, Some(ResetCause::Bounds));
        assert_eq!(body(&session), vec![Cell::new(1, 1)]);
        assert_eq!(session.snake().direction(), Direction::None);
    }

    #[test]
    fn test_self_collision_ignored_by_default() {
        let mut session = session(GameConfig::small());
        session.snake = Snake::from_segments(
            [
                Cell::new(3, 4),
                Cell::new(4, 4),
                Cell::new(5, 4),
                Cell::new(5, 5),
                Cell::new(4, 5),
            ],
            Direction::Up,
        )
        .unwrap();
        session.food = Cell::new(9, 9);

        let outcome = session.frame(TICK, None).unwrap();

        assert_eq!(outcome.reset, None);
        assert_eq!(session.snake().head(), Cell::new(4, 4));
        assert_eq!(session.snake().len(), 5);
        assert!(session.snake().bites_itself());
    }

    #[test]
    fn test_self_collision_opt_in() {
        let config = GameConfig {
            self_collision: true,
            ..GameConfig::small()
        };
        let mut session = session(config);
        session.snake = Snake::from_segments(
            [
                Cell::new(3, 4),
                Cell::new(4, 4),
                Cell::new(5, 4),
                Cell::new(5, 5),
                Cell::new(4, 5),
            ],
            Direction::Up,
        )
        .unwrap();
        session.food = Cell::new(9, 9);

        let outcome = session.frame(TICK, None).unwrap();

        assert_eq!(outcome.reset, Some(ResetCause::SelfCollision));
        assert_eq!(body(&session), vec![Cell::new(5, 5)]);
    }

    #[test]
    fn test_growing_in_place_is_not_a_bite() {
        let config = GameConfig {
            self_collision: true,
            ..GameConfig::small()
        };
        let mut session = session(config);
        session.food = session.grid().center();

        let outcome = session.frame(TICK, None).unwrap();
        assert_eq!(outcome.food_eaten, 1);
        assert_eq!(outcome.reset, None);
        assert_eq!(session.snake().len(), 2);
        session.food = Cell::new(0, 0);

        let outcome = session.frame(TICK, Some(Direction::Right)).unwrap();
        assert_eq!(outcome.reset, None);
        assert_eq!(body(&session), vec![Cell::new(5, 5), Cell::new(6, 5)]);
    }

    #[test]
    fn test_reversal_allowed_by_default() {
        let mut session = session(GameConfig::small());
        session.snake =
            Snake::from_segments([Cell::new(3, 3), Cell::new(4, 3)], Direction::Right).unwrap();

        session.steer(Direction::Left);
        assert_eq!(session.snake().direction(), Direction::Left);
    }

    #[test]
    fn test_forbid_reverse() {
        let config = GameConfig {
            forbid_reverse: true,
            ..GameConfig::small()
        };
        let mut session = session(config);
        session.snake =
            Snake::from_segments([Cell::new(3, 3), Cell::new(4, 3)], Direction::Right).unwrap();

        session.steer(Direction::Left);
        assert_eq!(session.snake().direction(), Direction::Right);

        session.steer(Direction::Up);
        assert_eq!(session.snake().direction(), Direction::Up);
    }

    #[test]
    fn test_length_grows_only_by_food() {
        let mut session = session(GameConfig::default());
        let mut rng = StdRng::seed_from_u64(77);
        let mut total_eaten = 0;

        for _ in 0..2000 {
            let before = session.snake().len();
            let input = if rng.gen_bool(0.2) {
                Some(Direction::POLL_ORDER[rng.gen_range(0..4)])
            } else {
                None
            };
            let outcome = session.frame(Duration::from_millis(16), input).unwrap();
            total_eaten += outcome.food_eaten;

            if outcome.reset.is_none() {
                assert_eq!(session.snake().len(), before + outcome.food_eaten as usize);
            }
            assert!(!session.snake().occupies(session.food()));
            assert!(session.grid().contains(session.snake().head()));
        }
        assert!(total_eaten <= 2000);
    }

    #[test]
    fn test_manual_restart() {
        let mut session = session(GameConfig::default());
        session.snake =
            Snake::from_segments([Cell::new(1, 1), Cell::new(2, 1)], Direction::Right).unwrap();

        session.restart();
        assert_eq!(body(&session), vec![Cell::new(10, 10)]);
        assert_eq!(session.snake().direction(), Direction::None);
    }

    #[test]
    fn test_grid_full_is_reported() {
        let mut session = session(GameConfig::new(2, 1));
        assert_eq!(session.snake().head(), Cell::new(1, 0));
        assert_eq!(session.food(), Cell::new(0, 0));

        let result = session.frame(TICK, Some(Direction::Left));
        assert!(matches!(result, Err(GameError::GridFull)));
    }

    #[test]
    fn test_render_frame() {
        let mut session = session(GameConfig::default());
        session.snake =
            Snake::from_segments([Cell::new(5, 5), Cell::new(5, 6)], Direction::Down).unwrap();
        session.food = Cell::new(1, 2);

        let frame = session.render_frame();

        assert_eq!(frame.cell_size, 32);
        assert_eq!(
            frame.commands[0],
            DrawCommand::Background {
                width: 20,
                height: 20
            }
        );
        assert_eq!(frame.food(), Some(Cell::new(1, 2)));
        assert_eq!(
            frame.segments().collect::<Vec<_>>(),
            vec![(Cell::new(5, 5), false), (Cell::new(5, 6), true)]
        );
        assert_eq!(frame.texts().count(), 0);
    }

    #[test]
    fn test_debug_overlay() {
        let config = GameConfig {
            debug_overlay: true,
            ..Default::default()
        };
        let session = session(config);

        let frame = session.render_frame();
        let texts: Vec<&str> = frame.texts().collect();
        assert_eq!(texts, vec!["len:1 arr:[(10,10)]"]);
    }
}
