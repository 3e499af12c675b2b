//! Snake Grid - a grid-based snake game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (occupancy grid, snake, tick state machine)
//! - `game`: Session lifecycle and soft restart after game-over
//! - `render`: Renderer contract and a text renderer
//! - `settings`: Board and pacing configuration

pub mod game;
pub mod render;
pub mod settings;
pub mod sim;

pub use game::{FrameOutcome, Game};
pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Frames between ticks at the start of a session
    pub const BASE_TICK_INTERVAL: u32 = 4;
    /// Fastest pace: one tick per frame
    pub const MIN_TICK_INTERVAL: u32 = 1;
    /// Speed ramps down while `tick_interval * score` exceeds this
    pub const SPEED_BUDGET: u64 = 4000;

    /// Points awarded per food eaten
    pub const FOOD_SCORE: u64 = 100;
    /// One obstacle per this many points
    pub const OBSTACLE_SCORE_STEP: u64 = 200;

    /// Cell size in pixels
    pub const GRID_GAP: u32 = 20;
    /// Default viewport (pixels)
    pub const VIEWPORT_WIDTH: u32 = 800;
    pub const VIEWPORT_HEIGHT: u32 = 600;

    /// Where every fresh snake starts
    pub const SNAKE_START: (i32, i32) = (4, 4);
}
