//! Tick state machine
//!
//! `frame` is called once per scheduler callback and decides whether this
//! frame runs a `tick`. A tick moves the snake one cell and then does grid
//! upkeep: food, obstacles, and pace.

use super::entity::EntityKind;
use super::snake::Advance;
use super::state::{GamePhase, Session};
use crate::consts::*;

/// Run one scheduler frame. Returns the tick result if this frame ticked.
pub fn frame(session: &mut Session) -> Option<Advance> {
    if session.frame_counter > 0 {
        session.frame_counter -= 1;
        return None;
    }
    let advance = tick(session);
    session.frame_counter = session.tick_interval - 1;
    Some(advance)
}

/// Advance the session by one tick
pub fn tick(session: &mut Session) -> Advance {
    if let GamePhase::Terminated(reason) = session.phase {
        return Advance::Collided(reason);
    }

    session.time_ticks += 1;

    let advance = session.snake.advance(&mut session.grid);
    match advance {
        Advance::Collided(reason) => {
            log::info!(
                "End game! {} after {} ticks, score {}",
                reason,
                session.time_ticks,
                session.score
            );
            session.phase = GamePhase::Terminated(reason);
            return advance;
        }
        Advance::Ate => {
            session.score += FOOD_SCORE;
            log::debug!("Ate food, score {}", session.score);
        }
        Advance::Moved | Advance::Idle => {}
    }

    grid_upkeep(session);
    advance
}

/// Post-move housekeeping: keep one food on the board, add obstacles as the
/// score grows, and speed up.
pub fn grid_upkeep(session: &mut Session) {
    let Session {
        grid,
        rng,
        score,
        tick_interval,
        ..
    } = session;

    if grid.count(EntityKind::Food) == 0 && !grid.is_full() {
        let food = grid.spawn_random(EntityKind::Food, rng);
        log::debug!("Spawned food at {}", food.pos);
    }

    // One obstacle per OBSTACLE_SCORE_STEP points
    while *score > OBSTACLE_SCORE_STEP * grid.count(EntityKind::Obstacle) as u64 && !grid.is_full() {
        let obstacle = grid.spawn_random(EntityKind::Obstacle, rng);
        log::debug!("Spawned obstacle at {}", obstacle.pos);
    }

    let before = *tick_interval;
    while *tick_interval > MIN_TICK_INTERVAL && u64::from(*tick_interval) * *score > SPEED_BUDGET {
        *tick_interval -= 1;
    }
    if *tick_interval != before {
        log::info!("Speed up: {} frames per tick at score {}", tick_interval, score);
    }
}
