//! Session lifecycle
//!
//! `Game` owns the live session and swaps in a fresh one whenever the snake
//! collides. Input only ever reaches the live session; the dead one is dropped
//! along with anything still pointing at it.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::settings::{Settings, SettingsError};
use crate::sim::{self, Advance, CollisionError, Heading, Session};

/// What happened on one scheduler frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Throttled, no tick this frame
    Waiting,
    /// A tick ran
    Ticked(Advance),
    /// The snake collided; a new game has already replaced the old one
    Restarted { final_score: u64, reason: CollisionError },
}

pub struct Game {
    /// Untouched session every new game is cloned from
    template: Session,
    session: Session,
    seeds: Pcg32,
    games_played: u64,
    best_score: u64,
}

impl Game {
    pub fn new(settings: &Settings) -> Result<Self, SettingsError> {
        settings.validate()?;
        let (width, height) = settings.board_size();
        let seed = settings.seed.unwrap_or_else(rand::random);
        let mut seeds = Pcg32::seed_from_u64(seed);

        let template = Session::with_tick_interval(width, height, seed, settings.tick_interval())
            .map_err(|_| SettingsError::Board {
                width,
                height,
                x: crate::consts::SNAKE_START.0,
                y: crate::consts::SNAKE_START.1,
            })?;
        let mut session = template.clone();
        session.reseed(seeds.random());

        log::info!("Game started on {}x{} board (seed {})", width, height, seed);
        Ok(Self {
            template,
            session,
            seeds,
            games_played: 0,
            best_score: 0,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Games finished so far
    pub fn games_played(&self) -> u64 {
        self.games_played
    }

    /// Best score this run (not persisted)
    pub fn best_score(&self) -> u64 {
        self.best_score
    }

    pub fn handle_direction(&mut self, heading: Heading) -> bool {
        self.session.handle_direction_input(heading)
    }

    pub fn handle_key(&mut self, code: u32) -> bool {
        self.session.handle_key(code)
    }

    /// Run one scheduler frame, restarting on game-over
    pub fn frame(&mut self) -> FrameOutcome {
        match sim::frame(&mut self.session) {
            None => FrameOutcome::Waiting,
            Some(Advance::Collided(reason)) => {
                let final_score = self.session.score();
                self.restart();
                FrameOutcome::Restarted { final_score, reason }
            }
            Some(advance) => FrameOutcome::Ticked(advance),
        }
    }

    /// Throw away the current session and start a new one
    pub fn restart(&mut self) {
        let final_score = self.session.score();
        self.best_score = self.best_score.max(final_score);
        self.games_played += 1;

        let mut fresh = self.template.clone();
        fresh.reseed(self.seeds.random());
        self.session = fresh;
        log::info!(
            "Game {} over with {} points, starting fresh",
            self.games_played,
            final_score
        );
    }
}
