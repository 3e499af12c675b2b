//! Session state
//!
//! One `Session` is one game: created fresh at start and after every game-over.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::entity::{Coord, Entity, Heading};
use super::grid::{CollisionError, Grid};
use super::snake::Snake;
use crate::consts::*;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Ticks advance the snake
    Running,
    /// Collided; the session is dead and must be replaced
    Terminated(CollisionError),
}

/// A single game: board, snake, score and pacing
#[derive(Debug, Clone)]
pub struct Session {
    /// Seed the session RNG was built from
    pub seed: u64,
    pub(crate) grid: Grid,
    pub(crate) snake: Snake,
    pub(crate) score: u64,
    /// Frames per tick; shrinks as the score grows
    pub(crate) tick_interval: u32,
    /// Frames left before the next tick
    pub(crate) frame_counter: u32,
    pub(crate) time_ticks: u64,
    pub(crate) phase: GamePhase,
    pub(crate) rng: Pcg32,
}

impl Session {
    /// Start a game on a `width` x `height` board with the snake at `SNAKE_START`
    pub fn new(width: u32, height: u32, seed: u64) -> Result<Self, CollisionError> {
        Self::with_tick_interval(width, height, seed, BASE_TICK_INTERVAL)
    }

    pub fn with_tick_interval(
        width: u32,
        height: u32,
        seed: u64,
        tick_interval: u32,
    ) -> Result<Self, CollisionError> {
        let mut grid = Grid::new(width, height);
        let snake = Snake::new(&mut grid, Coord::from(SNAKE_START))?;
        log::debug!("New session {}x{} (seed {})", width, height, seed);

        Ok(Self {
            seed,
            grid,
            snake,
            score: 0,
            tick_interval: tick_interval.max(MIN_TICK_INTERVAL),
            frame_counter: 0,
            time_ticks: 0,
            phase: GamePhase::Running,
            rng: Pcg32::seed_from_u64(seed),
        })
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn tick_interval(&self) -> u32 {
        self.tick_interval
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Ticks run so far
    pub fn ticks(&self) -> u64 {
        self.time_ticks
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    /// Board size in cells
    pub fn dimensions(&self) -> (u32, u32) {
        (self.grid.width(), self.grid.height())
    }

    /// Copy of every live entity for the renderer
    pub fn snapshot(&self) -> Vec<Entity> {
        self.grid.occupants().copied().collect()
    }

    /// Forward a direction to the snake. Ignored once the session is over.
    pub fn handle_direction_input(&mut self, heading: Heading) -> bool {
        if !self.is_running() {
            return false;
        }
        self.snake.set_heading(heading)
    }

    /// Forward a raw arrow-key code; other keys are ignored
    pub fn handle_key(&mut self, code: u32) -> bool {
        match Heading::from_key_code(code) {
            Some(heading) => self.handle_direction_input(heading),
            None => false,
        }
    }

    /// Swap in a new seed; used to start a fresh game from an untouched session
    pub(crate) fn reseed(&mut self, seed: u64) {
        self.seed = seed;
        self.rng = Pcg32::seed_from_u64(seed);
    }

    /// Place an entity directly (level setup, tests)
    pub fn place(&mut self, entity: Entity) -> Result<(), CollisionError> {
        self.grid.add(entity)
    }
}
