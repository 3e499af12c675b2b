//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One cell per tick, frame pacing by counter only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod entity;
pub mod grid;
pub mod snake;
pub mod state;
pub mod tick;

pub use entity::{Coord, Entity, EntityKind, Heading};
pub use grid::{CollisionError, Grid};
pub use snake::{Advance, Snake};
pub use state::{GamePhase, Session};
pub use tick::{frame, grid_upkeep, tick};
