//! Snake controller
//!
//! Body segments live both in `body` (tail first, head last) and on the grid.
//! `advance` keeps the two in lockstep.

use std::collections::VecDeque;

use super::entity::{Coord, Entity, EntityKind, Heading};
use super::grid::{CollisionError, Grid};

/// Result of one `advance` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// No heading yet, nothing moved
    Idle,
    /// Moved one cell, tail followed
    Moved,
    /// Moved onto food and grew by one segment
    Ate,
    /// Move rejected; snake and grid are exactly as they were before the call
    Collided(CollisionError),
}

#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Entity>,
    heading: Option<Heading>,
    /// Cleared once a heading change is accepted, re-armed on the next advance
    can_turn: bool,
}

impl Snake {
    /// Place a length-1 snake at `start`
    pub fn new(grid: &mut Grid, start: Coord) -> Result<Self, CollisionError> {
        let head = Entity::snake(start);
        grid.add(head)?;
        Ok(Self {
            body: VecDeque::from([head]),
            heading: None,
            can_turn: true,
        })
    }

    pub fn head(&self) -> Coord {
        // Body always holds at least the head
        self.body.back().map(|e| e.pos).unwrap_or(Coord::new(0, 0))
    }

    pub fn tail(&self) -> Coord {
        self.body.front().map(|e| e.pos).unwrap_or(Coord::new(0, 0))
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn heading(&self) -> Option<Heading> {
        self.heading
    }

    /// Segment positions, tail first
    pub fn segments(&self) -> impl Iterator<Item = Coord> + '_ {
        self.body.iter().map(|e| e.pos)
    }

    /// Request a turn. Returns whether it was accepted.
    ///
    /// At most one turn per tick, and never straight back into the neck.
    pub fn set_heading(&mut self, requested: Heading) -> bool {
        if !self.can_turn {
            return false;
        }
        if self.heading.is_some_and(|current| current.reverse() == requested) {
            return false;
        }
        self.heading = Some(requested);
        self.can_turn = false;
        true
    }

    /// Move one cell along the current heading.
    pub fn advance(&mut self, grid: &mut Grid) -> Advance {
        let Some(heading) = self.heading else {
            return Advance::Idle;
        };
        self.can_turn = true;

        let target = self.head().step(heading);
        match self.try_advance(grid, target) {
            Ok(advance) => advance,
            Err(err) => Advance::Collided(err),
        }
    }

    fn try_advance(&mut self, grid: &mut Grid, target: Coord) -> Result<Advance, CollisionError> {
        let food = grid.get(target).copied().filter(|e| e.kind == EntityKind::Food);

        // Validate before touching anything so a collision leaves no trace.
        // The tail cell counts as free on a normal move since the tail leaves it.
        let vacating_tail = food.is_none() && self.body.len() > 1 && target == self.tail();
        if food.is_none() && !vacating_tail {
            grid.check_vacant(target)?;
        }

        match food {
            Some(food) => grid.remove(&food),
            None => {
                if let Some(tail) = self.body.pop_front() {
                    grid.remove(&tail);
                }
            }
        }

        let head = Entity::snake(target);
        grid.add(head)?;
        self.body.push_back(head);

        Ok(if food.is_some() { Advance::Ate } else { Advance::Moved })
    }
}
