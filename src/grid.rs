//! The puzzle board
//!
//! [`HexGrid`] is the authoritative record of placed tiles. Alongside the
//! placed set it keeps the *open frontier*: every unplaced cell that touches
//! at least one placed tile. The frontier is maintained incrementally on each
//! placement, so a cell is always exactly one of placed, open, or unreachable.

use crate::error::{GameError, Result};
use crate::hex::HexPosition;
use crate::tile::HexTile;
use std::collections::{HashMap, HashSet};

pub struct HexGrid {
    tiles: HashMap<HexPosition, HexTile>,
    /// Placement order, used for stable render ordering
    placed_order: Vec<HexPosition>,
    open: HashSet<HexPosition>,
}

impl HexGrid {
    pub fn new() -> Self {
        HexGrid {
            tiles: HashMap::new(),
            placed_order: Vec::new(),
            open: HashSet::new(),
        }
    }

    /// Places `tile` at its own position and opens its empty neighbours.
    ///
    /// Fails without touching the board if the tile has no position or the
    /// position already holds a tile.
    pub fn add_tile(&mut self, tile: HexTile) -> Result<()> {
        let position = tile.position.ok_or(GameError::TileNotPositioned)?;
        self.ensure_vacant(position)?;

        self.open.remove(&position);
        for neighbour in position.neighbours() {
            if !self.tiles.contains_key(&neighbour) {
                self.open.insert(neighbour);
            }
        }

        self.tiles.insert(position, tile);
        self.placed_order.push(position);
        Ok(())
    }

    /// Errors if `position` already holds a tile
    pub fn ensure_vacant(&self, position: HexPosition) -> Result<()> {
        if self.tiles.contains_key(&position) {
            return Err(GameError::TileAlreadyPlaced(position));
        }
        Ok(())
    }

    pub fn get_tile(&self, position: HexPosition) -> Option<&HexTile> {
        self.tiles.get(&position)
    }

    pub fn get_tile_mut(&mut self, position: HexPosition) -> Option<&mut HexTile> {
        self.tiles.get_mut(&position)
    }

    /// True for unplaced cells next to at least one placed tile
    pub fn is_open(&self, position: HexPosition) -> bool {
        self.open.contains(&position) && !self.tiles.contains_key(&position)
    }

    /// Open cells in no particular order
    pub fn get_open_tiles(&self) -> impl Iterator<Item = HexPosition> + '_ {
        self.open.iter().copied()
    }

    /// Placed tiles, oldest first
    pub fn get_placed_tiles(&self) -> impl Iterator<Item = &HexTile> + '_ {
        self.placed_order.iter().filter_map(|position| self.tiles.get(position))
    }

    pub fn placed_count(&self) -> usize {
        self.tiles.len()
    }
}

impl Default for HexGrid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hex::HEXAGONAL_NEIGHBOURS;
    use crate::tile::Biome;

    fn grass_at(q: i32, r: i32) -> HexTile {
        HexTile::new([Biome::Grass; 6]).at(HexPosition::axial(q, r))
    }

    #[test]
    fn test_first_tile_opens_ring() {
        let mut grid = HexGrid::new();
        grid.add_tile(grass_at(0, 0)).unwrap();

        assert_eq!(grid.get_open_tiles().count(), 6);
        for offset in HEXAGONAL_NEIGHBOURS {
            assert!(grid.is_open(offset));
        }
    }

    #[test]
    fn test_open_excludes_placed_and_unreachable() {
        let mut grid = HexGrid::new();
        grid.add_tile(grass_at(0, 0)).unwrap();
        grid.add_tile(grass_at(1, 0)).unwrap();

        assert!(!grid.is_open(HexPosition::ORIGIN));
        assert!(!grid.is_open(HexPosition::axial(1, 0)));
        assert!(!grid.is_open(HexPosition::axial(5, -2)));
        assert!(grid.is_open(HexPosition::axial(2, 0)));

        // Two overlapping rings of six, minus the two placed cells
        assert_eq!(grid.get_open_tiles().count(), 8);
        for open in grid.get_open_tiles() {
            assert!(grid.get_tile(open).is_none());
        }
    }

    #[test]
    fn test_double_placement_is_rejected() {
        let mut grid = HexGrid::new();
        grid.add_tile(grass_at(0, 0)).unwrap();
        let err = grid.add_tile(grass_at(0, 0)).unwrap_err();
        assert!(matches!(err, GameError::TileAlreadyPlaced(p) if p == HexPosition::ORIGIN));
        assert_eq!(grid.placed_count(), 1);
    }

    #[test]
    fn test_unpositioned_tile_is_rejected() {
        let mut grid = HexGrid::new();
        let err = grid.add_tile(HexTile::new([Biome::Sand; 6])).unwrap_err();
        assert!(matches!(err, GameError::TileNotPositioned));
        assert_eq!(grid.get_open_tiles().count(), 0);
    }

    #[test]
    fn test_missing_tile_lookup() {
        let grid = HexGrid::new();
        assert!(grid.get_tile(HexPosition::ORIGIN).is_none());
    }

    #[test]
    fn test_placed_tiles_keep_placement_order() {
        let mut grid = HexGrid::new();
        for (q, r) in [(0, 0), (1, 0), (0, 1), (-1, 1)] {
            grid.add_tile(grass_at(q, r)).unwrap();
        }
        let order: Vec<_> = grid.get_placed_tiles().filter_map(|t| t.position).collect();
        assert_eq!(
            order,
            vec![
                HexPosition::axial(0, 0),
                HexPosition::axial(1, 0),
                HexPosition::axial(0, 1),
                HexPosition::axial(-1, 1),
            ]
        );
    }
}
