//! Tile supply: upcoming queue, held tile, rotation and the remaining counter
//!
//! The queue always holds `min(preview_depth, remaining)` tiles. Its head is
//! the *active* tile, the one the player is about to place. Rotation is kept
//! as an offset and applied when the active tile is read, so queued tiles are
//! never modified.
//!
//! # Example
//!
//! ```rust
//! use hexagod::hex::HexPosition;
//! use hexagod::tile_manager::TileManager;
//!
//! let mut manager = TileManager::with_seed(5, 50, 42);
//! manager.rotate_active_tile();
//! let tile = manager.create_active_tile(HexPosition::axial(1, 0)).unwrap();
//! assert_eq!(tile.position, Some(HexPosition::axial(1, 0)));
//!
//! manager.get_next_tile();
//! assert_eq!(manager.get_remaining(), 49);
//! ```

use crate::hex::HexPosition;
use crate::tile::{Biome, HexTile, Sides, rotated_sides};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::VecDeque;
use tracing::{debug, info};

/// Biome used on every side of the first board tile
pub const STARTING_BIOME: Biome = Biome::Grass;

pub struct TileManager {
    queue: VecDeque<HexTile>,
    held: Option<HexTile>,
    rotation: usize,
    remaining: u32,
    preview_depth: usize,
    rng: StdRng,
}

impl TileManager {
    /// Creates a manager drawing from OS entropy
    pub fn new(preview_depth: usize, remaining: u32) -> Self {
        Self::with_rng(preview_depth, remaining, StdRng::from_os_rng())
    }

    /// Creates a manager whose tile sequence is fully determined by `seed`
    pub fn with_seed(preview_depth: usize, remaining: u32, seed: u64) -> Self {
        Self::with_rng(preview_depth, remaining, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(preview_depth: usize, remaining: u32, rng: StdRng) -> Self {
        let mut manager = TileManager {
            queue: VecDeque::with_capacity(preview_depth),
            held: None,
            rotation: 0,
            remaining,
            preview_depth,
            rng,
        };
        manager.refill();
        manager
    }

    /// The fixed first tile of every board
    pub fn starting_tile() -> HexTile {
        HexTile::new([STARTING_BIOME; 6]).at(HexPosition::ORIGIN)
    }

    /// Consumes the active tile after a placement.
    ///
    /// Decrements the remaining counter and tops the queue back up. Once the
    /// counter hits zero the queue drains and no active tile is offered.
    pub fn get_next_tile(&mut self) {
        if self.queue.pop_front().is_none() {
            return;
        }
        self.remaining = self.remaining.saturating_sub(1);
        self.rotation = 0;
        self.refill();

        if self.is_exhausted() {
            info!("tile supply exhausted");
        }
    }

    pub fn rotate_active_tile(&mut self) {
        self.rotation = (self.rotation + 1) % 6;
    }

    /// Exchanges the active tile with the held one.
    ///
    /// With nothing held, the active tile moves to the hold and the next
    /// queued tile becomes active. Does nothing once the supply is exhausted.
    pub fn swap_held_tile(&mut self) {
        let Some(active) = self.queue.pop_front() else {
            return;
        };

        match self.held.replace(active) {
            Some(previous) => self.queue.push_front(previous),
            None => self.refill(),
        }
        self.rotation = 0;
        debug!(remaining = self.remaining, "swapped held tile");
    }

    /// A copy of the active tile, rotated and positioned at `position`
    pub fn create_active_tile(&self, position: HexPosition) -> Option<HexTile> {
        let sides = self.get_active()?;
        Some(HexTile::new(sides).at(position))
    }

    /// Grants `amount` extra tiles
    pub fn add_to_remaining(&mut self, amount: u32) {
        self.remaining += amount;
        self.refill();
    }

    /// One slot per preview position, head first. Slots past the end of the
    /// supply are `None`.
    pub fn get_preview(&self) -> Vec<Option<&HexTile>> {
        (0..self.preview_depth).map(|i| self.queue.get(i)).collect()
    }

    pub fn get_held(&self) -> Option<&HexTile> {
        self.held.as_ref()
    }

    pub fn get_remaining(&self) -> u32 {
        self.remaining
    }

    pub fn rotation(&self) -> usize {
        self.rotation
    }

    /// Sides of the active tile with rotation applied
    pub fn get_active(&self) -> Option<Sides> {
        self.queue
            .front()
            .map(|tile| rotated_sides(&tile.sides, self.rotation))
    }

    pub fn is_exhausted(&self) -> bool {
        self.queue.is_empty()
    }

    fn refill(&mut self) {
        // At least the active tile is queued while any supply is left
        let target = self.preview_depth.max(1).min(self.remaining as usize);
        while self.queue.len() < target {
            self.queue.push_back(HexTile::random(&mut self.rng));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn head_sides(manager: &TileManager) -> Sides {
        manager.get_preview()[0].unwrap().sides
    }

    #[test]
    fn test_initial_queue_fills_preview() {
        let manager = TileManager::with_seed(5, 50, 1);
        let preview = manager.get_preview();
        assert_eq!(preview.len(), 5);
        assert!(preview.iter().all(Option::is_some));
        assert_eq!(manager.get_remaining(), 50);
        assert!(manager.get_held().is_none());
    }

    #[test]
    fn test_queue_never_exceeds_remaining() {
        let manager = TileManager::with_seed(5, 2, 1);
        let preview = manager.get_preview();
        assert!(preview[0].is_some() && preview[1].is_some());
        assert!(preview[2..].iter().all(Option::is_none));
    }

    #[test]
    fn test_zero_preview_depth_still_offers_active_tile() {
        let mut manager = TileManager::with_seed(0, 50, 1);
        assert!(!manager.is_exhausted());
        assert!(manager.get_active().is_some());
        assert!(manager.get_preview().is_empty());

        manager.get_next_tile();
        assert_eq!(manager.get_remaining(), 49);
        assert!(manager.get_active().is_some());
    }

    #[test]
    fn test_next_tile_advances_queue() {
        let mut manager = TileManager::with_seed(5, 50, 3);
        let second = manager.get_preview()[1].unwrap().sides;
        manager.get_next_tile();
        assert_eq!(head_sides(&manager), second);
        assert_eq!(manager.get_remaining(), 49);
        assert!(manager.get_preview().iter().all(Option::is_some));
    }

    #[test]
    fn test_supply_exhaustion() {
        let mut manager = TileManager::with_seed(5, 1, 9);
        assert!(manager.create_active_tile(HexPosition::ORIGIN).is_some());

        manager.get_next_tile();
        assert_eq!(manager.get_remaining(), 0);
        assert!(manager.is_exhausted());
        assert!(manager.create_active_tile(HexPosition::ORIGIN).is_none());
        assert!(manager.get_active().is_none());

        // Stays exhausted and the counter does not underflow
        manager.get_next_tile();
        assert_eq!(manager.get_remaining(), 0);
    }

    #[test]
    fn test_bonus_tiles_revive_supply() {
        let mut manager = TileManager::with_seed(5, 1, 9);
        manager.get_next_tile();
        manager.add_to_remaining(3);
        assert_eq!(manager.get_remaining(), 3);
        assert_eq!(manager.get_preview().iter().filter(|t| t.is_some()).count(), 3);
        assert!(manager.get_active().is_some());
    }

    #[test]
    fn test_rotation_is_applied_on_read() {
        let mut manager = TileManager::with_seed(5, 50, 11);
        let base = head_sides(&manager);

        manager.rotate_active_tile();
        let active = manager.get_active().unwrap();
        assert_eq!(active, rotated_sides(&base, 1));
        // The queued tile itself is untouched
        assert_eq!(head_sides(&manager), base);

        let tile = manager.create_active_tile(HexPosition::axial(0, 1)).unwrap();
        assert_eq!(tile.sides, active);
    }

    #[test]
    fn test_six_rotations_restore_active() {
        let mut manager = TileManager::with_seed(5, 50, 11);
        let base = manager.get_active().unwrap();
        for _ in 0..6 {
            manager.rotate_active_tile();
        }
        assert_eq!(manager.rotation(), 0);
        assert_eq!(manager.get_active().unwrap(), base);
    }

    #[test]
    fn test_first_hold_takes_active_and_keeps_count() {
        let mut manager = TileManager::with_seed(5, 50, 5);
        let first = head_sides(&manager);
        let second = manager.get_preview()[1].unwrap().sides;
        manager.rotate_active_tile();

        manager.swap_held_tile();
        assert_eq!(manager.get_held().unwrap().sides, first);
        assert_eq!(head_sides(&manager), second);
        assert_eq!(manager.rotation(), 0);
        assert_eq!(manager.get_remaining(), 50);
        assert!(manager.get_preview().iter().all(Option::is_some));
    }

    #[test]
    fn test_swap_exchanges_held_and_active() {
        let mut manager = TileManager::with_seed(5, 50, 5);
        let first = head_sides(&manager);
        manager.swap_held_tile();
        let second = head_sides(&manager);

        manager.swap_held_tile();
        assert_eq!(head_sides(&manager), first);
        assert_eq!(manager.get_held().unwrap().sides, second);
    }

    #[test]
    fn test_swap_is_noop_when_exhausted() {
        let mut manager = TileManager::with_seed(5, 1, 5);
        manager.swap_held_tile();
        assert!(manager.get_held().is_some());
        assert!(!manager.is_exhausted());

        manager.get_next_tile();
        assert!(manager.is_exhausted());
        manager.swap_held_tile();
        assert!(manager.get_held().is_some());
        assert!(manager.get_active().is_none());
    }

    #[test]
    fn test_starting_tile() {
        let tile = TileManager::starting_tile();
        assert_eq!(tile.position, Some(HexPosition::ORIGIN));
        assert_eq!(tile.sides, [STARTING_BIOME; 6]);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let a = TileManager::with_seed(5, 50, 1234);
        let b = TileManager::with_seed(5, 50, 1234);
        let sides = |m: &TileManager| -> Vec<Sides> {
            m.get_preview().into_iter().flatten().map(|t| t.sides).collect()
        };
        assert_eq!(sides(&a), sides(&b));
    }
}
