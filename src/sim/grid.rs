//! Occupancy grid
//!
//! Maps each board cell to at most one entity and keeps a live count per
//! entity kind. `add` is the only collision check in the game: anything that
//! tries to occupy a taken or off-board cell gets a `CollisionError`.

use std::collections::HashMap;

use rand::Rng;

use super::entity::{Coord, Entity, EntityKind};

/// Why an entity could not be placed
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CollisionError {
    #[error("coordinates {at} are out of bounds")]
    OutOfBounds { at: Coord },
    #[error("collision at {at} with {}", .occupant.kind)]
    Occupied { at: Coord, occupant: Entity },
}

impl CollisionError {
    pub fn at(&self) -> Coord {
        match self {
            CollisionError::OutOfBounds { at } | CollisionError::Occupied { at, .. } => *at,
        }
    }
}

/// Rectangular board of `width` x `height` cells
#[derive(Debug, Clone)]
pub struct Grid {
    width: i32,
    height: i32,
    cells: HashMap<Coord, Entity>,
    counts: HashMap<EntityKind, usize>,
}

impl Grid {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width as i32,
            height: height as i32,
            cells: HashMap::new(),
            counts: HashMap::new(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width as u32
    }

    pub fn height(&self) -> u32 {
        self.height as u32
    }

    /// True if `pos` lies on the board
    pub fn contains(&self, pos: Coord) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    /// Number of live entities
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.cells.len() >= (self.width as usize) * (self.height as usize)
    }

    /// Live entities of the given kind
    pub fn count(&self, kind: EntityKind) -> usize {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    pub fn get(&self, pos: Coord) -> Option<&Entity> {
        self.cells.get(&pos)
    }

    /// Check that `pos` could take a new entity right now
    pub fn check_vacant(&self, pos: Coord) -> Result<(), CollisionError> {
        if !self.contains(pos) {
            return Err(CollisionError::OutOfBounds { at: pos });
        }
        match self.cells.get(&pos) {
            Some(&occupant) => Err(CollisionError::Occupied { at: pos, occupant }),
            None => Ok(()),
        }
    }

    /// Place an entity. Leaves the grid untouched on error.
    pub fn add(&mut self, entity: Entity) -> Result<(), CollisionError> {
        self.check_vacant(entity.pos)?;
        *self.counts.entry(entity.kind).or_insert(0) += 1;
        self.cells.insert(entity.pos, entity);
        Ok(())
    }

    /// Remove a live entity. Removing something that isn't there is a bug in the caller.
    pub fn remove(&mut self, entity: &Entity) {
        let removed = self.cells.remove(&entity.pos);
        debug_assert_eq!(removed.as_ref(), Some(entity), "removed entity not on grid");
        if let Some(removed) = removed {
            if let Some(count) = self.counts.get_mut(&removed.kind) {
                *count -= 1;
            }
        }
    }

    /// Drop `kind` on a uniformly random free cell.
    ///
    /// Retries until it finds a free cell, so callers must not use it on a
    /// full grid.
    pub fn spawn_random<R: Rng>(&mut self, kind: EntityKind, rng: &mut R) -> Entity {
        debug_assert!(!self.is_full(), "spawn_random on a full grid");
        loop {
            let pos = Coord::new(rng.random_range(0..self.width), rng.random_range(0..self.height));
            if !self.cells.contains_key(&pos) {
                let entity = Entity::new(pos, kind);
                *self.counts.entry(kind).or_insert(0) += 1;
                self.cells.insert(pos, entity);
                return entity;
            }
        }
    }

    /// Every live entity once, in no particular order
    pub fn occupants(&self) -> impl Iterator<Item = &Entity> + '_ {
        self.cells.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn assert_counts_consistent(grid: &Grid) {
        for kind in EntityKind::ALL {
            let live = grid.occupants().filter(|e| e.kind == kind).count();
            assert_eq!(grid.count(kind), live, "count mismatch for {kind}");
        }
    }

    #[test]
    fn test_add_get_remove() {
        let mut grid = Grid::new(10, 10);
        let food = Entity::food(Coord::new(3, 7));
        grid.add(food).unwrap();
        assert_eq!(grid.get(Coord::new(3, 7)), Some(&food));
        assert_eq!(grid.count(EntityKind::Food), 1);

        grid.remove(&food);
        assert_eq!(grid.get(Coord::new(3, 7)), None);
        assert_eq!(grid.count(EntityKind::Food), 0);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_duplicate_add_fails_without_mutation() {
        let mut grid = Grid::new(10, 10);
        let wall = Entity::obstacle(Coord::new(5, 4));
        grid.add(wall).unwrap();

        let err = grid.add(Entity::snake(Coord::new(5, 4))).unwrap_err();
        assert_eq!(
            err,
            CollisionError::Occupied {
                at: Coord::new(5, 4),
                occupant: wall
            }
        );
        assert_eq!(grid.get(Coord::new(5, 4)), Some(&wall));
        assert_eq!(grid.count(EntityKind::SnakeBody), 0);
        assert_eq!(grid.count(EntityKind::Obstacle), 1);
        assert_eq!(grid.len(), 1);
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut grid = Grid::new(10, 8);
        for pos in [
            Coord::new(10, 0),
            Coord::new(-1, 0),
            Coord::new(0, 8),
            Coord::new(0, -1),
        ] {
            let err = grid.add(Entity::snake(pos)).unwrap_err();
            assert_eq!(err, CollisionError::OutOfBounds { at: pos });
        }
        assert!(grid.is_empty());
        assert_eq!(grid.count(EntityKind::SnakeBody), 0);
    }

    #[test]
    fn test_get_never_fails_off_board() {
        let grid = Grid::new(4, 4);
        assert_eq!(grid.get(Coord::new(-100, 100)), None);
    }

    #[test]
    fn test_spawn_random_fills_last_free_cell() {
        let mut grid = Grid::new(2, 2);
        grid.add(Entity::snake(Coord::new(0, 0))).unwrap();
        grid.add(Entity::snake(Coord::new(1, 0))).unwrap();
        grid.add(Entity::obstacle(Coord::new(0, 1))).unwrap();

        let mut rng = Pcg32::seed_from_u64(7);
        let food = grid.spawn_random(EntityKind::Food, &mut rng);
        assert_eq!(food.pos, Coord::new(1, 1));
        assert!(grid.is_full());
        assert_counts_consistent(&grid);
    }

    #[test]
    fn test_error_messages() {
        let err = CollisionError::OutOfBounds { at: Coord::new(10, 3) };
        assert_eq!(err.to_string(), "coordinates (10,3) are out of bounds");
        let err = CollisionError::Occupied {
            at: Coord::new(1, 2),
            occupant: Entity::obstacle(Coord::new(1, 2)),
        };
        assert_eq!(err.to_string(), "collision at (1,2) with obstacle");
    }

    proptest! {
        #[test]
        fn prop_counts_track_live_entities(
            ops in proptest::collection::vec((0i32..6, 0i32..6, 0usize..3, any::<bool>()), 0..80)
        ) {
            let mut grid = Grid::new(6, 6);
            for (x, y, k, remove) in ops {
                let pos = Coord::new(x, y);
                match grid.get(pos).copied() {
                    Some(existing) if remove => grid.remove(&existing),
                    Some(_) => {
                        prop_assert!(grid.add(Entity::new(pos, EntityKind::ALL[k])).is_err());
                    }
                    None => {
                        prop_assert!(grid.add(Entity::new(pos, EntityKind::ALL[k])).is_ok());
                    }
                }
                for kind in EntityKind::ALL {
                    let live = grid.occupants().filter(|e| e.kind == kind).count();
                    prop_assert_eq!(grid.count(kind), live);
                }
                let total: usize = EntityKind::ALL.iter().map(|&k| grid.count(k)).sum();
                prop_assert_eq!(total, grid.len());
            }
        }

        #[test]
        fn prop_spawn_random_lands_on_free_cell(seed in any::<u64>(), prefill in 0usize..15) {
            let mut grid = Grid::new(4, 4);
            let mut rng = Pcg32::seed_from_u64(seed);
            for _ in 0..prefill {
                grid.spawn_random(EntityKind::Obstacle, &mut rng);
            }
            let before = grid.len();
            let food = grid.spawn_random(EntityKind::Food, &mut rng);
            prop_assert!(grid.contains(food.pos));
            prop_assert_eq!(grid.len(), before + 1);
            prop_assert_eq!(grid.get(food.pos), Some(&food));
        }
    }
}
