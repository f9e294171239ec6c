//! Adjacency scoring
//!
//! Placing a tile compares each of its six sides with the facing side of the
//! neighbour in that direction. Every touching pair is recorded on both
//! tiles, matching or not. Matching pairs score [`EDGE_MATCH_SCORE`] and bump
//! both tiles' match counts; a tile reaching six matches scores
//! [`PERFECT_SCORE`] and grants [`PERFECT_BONUS_TILES`], once per tile.
//!
//! Scoring only reports what happened. Applying the score, bonus tiles and
//! popups is up to the scene.

use crate::error::{GameError, Result};
use crate::grid::HexGrid;
use crate::hex::{HEXAGONAL_NEIGHBOURS, HexPosition, hex_to_world, opposite_side};
use crate::tile::{HexTile, Sides};
use tracing::{debug, info};

pub const EDGE_MATCH_SCORE: u32 = 10;
pub const PERFECT_SCORE: u32 = 100;
pub const PERFECT_BONUS_TILES: u32 = 3;

/// Something worth showing the player after a placement
#[derive(Debug, Clone, PartialEq)]
pub enum ScoreEvent {
    /// Side `side` of the new tile matched its neighbour. `anchor` is the
    /// world-space midpoint between the two tile centres.
    EdgeMatch { side: usize, anchor: (f32, f32) },
    /// A tile just completed all six matches
    Perfect {
        position: HexPosition,
        anchor: (f32, f32),
        placed_tile: bool,
    },
}

/// Result of resolving one placement
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlacementOutcome {
    pub score: u32,
    pub bonus_tiles: u32,
    pub matches: u32,
    pub events: Vec<ScoreEvent>,
}

impl PlacementOutcome {
    pub fn perfect_count(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, ScoreEvent::Perfect { .. }))
            .count()
    }

    fn award_perfect(&mut self, position: HexPosition, placed_tile: bool) {
        self.score += PERFECT_SCORE;
        self.bonus_tiles += PERFECT_BONUS_TILES;
        self.events.push(ScoreEvent::Perfect {
            position,
            anchor: hex_to_world(position),
            placed_tile,
        });
        info!(%position, placed_tile, "perfect tile");
    }
}

/// Places `tile` on `grid` and scores it against its neighbours.
///
/// The tile must carry a position that is not already placed; on failure the
/// board and neighbours are left untouched.
pub fn place_tile(grid: &mut HexGrid, mut tile: HexTile) -> Result<PlacementOutcome> {
    let position = tile.position.ok_or(GameError::TileNotPositioned)?;
    grid.ensure_vacant(position)?;

    let mut outcome = PlacementOutcome::default();
    let (cx, cy) = hex_to_world(position);

    for (side, offset) in HEXAGONAL_NEIGHBOURS.iter().enumerate() {
        let neighbour_position = position + *offset;
        let Some(neighbour) = grid.get_tile_mut(neighbour_position) else {
            continue;
        };

        let facing = opposite_side(side);
        tile.sides_touching[side] = Some(neighbour.sides[facing]);
        neighbour.sides_touching[facing] = Some(tile.sides[side]);

        if tile.sides[side] != neighbour.sides[facing] {
            continue;
        }

        outcome.score += EDGE_MATCH_SCORE;
        outcome.matches += 1;
        let (ox, oy) = hex_to_world(*offset);
        outcome.events.push(ScoreEvent::EdgeMatch {
            side,
            anchor: (cx + ox / 2.0, cy + oy / 2.0),
        });

        let placed_perfect = tile.record_match();
        let neighbour_perfect = neighbour.record_match();
        if placed_perfect {
            outcome.award_perfect(position, true);
        }
        if neighbour_perfect {
            outcome.award_perfect(neighbour_position, false);
        }
    }

    debug!(%position, matches = outcome.matches, score = outcome.score, "tile placed");
    grid.add_tile(tile)?;
    Ok(outcome)
}

/// Which sides of `sides` would match if placed at `position` right now
pub fn preview_matches(grid: &HexGrid, position: HexPosition, sides: &Sides) -> [bool; 6] {
    std::array::from_fn(|side| {
        grid.get_tile(position + HEXAGONAL_NEIGHBOURS[side])
            .is_some_and(|neighbour| neighbour.sides[opposite_side(side)] == sides[side])
    })
}
