//! Cube-coordinate hex math
//!
//! Every cell on the board is addressed by a [`HexPosition`] holding three
//! integers `(q, r, s)` that always sum to zero. Hexes are pointy-top and
//! measured in world pixels, where [`TILE_SIZE`] is the distance from a
//! hex centre to any of its corners.
//!
//! # Side numbering
//!
//! Side `i` of a hex faces the neighbour at `HEXAGONAL_NEIGHBOURS[i]`.
//! Sides run clockwise on a y-down screen, starting from the east edge:
//!
//! ```text
//!          4 (NW)   5 (NE)
//!     3 (W)     [hex]     0 (E)
//!          2 (SW)   1 (SE)
//! ```
//!
//! The side facing back from a neighbour is always `(i + 3) % 6`.

use std::fmt;
use std::ops::Add;

/// Distance in world pixels from a hex centre to one of its corners
pub const TILE_SIZE: f32 = 16.0;

const SQRT_3: f32 = 1.732_050_8;

/// Integer cube coordinate of a single hex cell (q + r + s == 0)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HexPosition {
    pub q: i32,
    pub r: i32,
    pub s: i32,
}

/// Unit offsets to the six neighbours, indexed by side
pub const HEXAGONAL_NEIGHBOURS: [HexPosition; 6] = [
    HexPosition::new(1, 0, -1),
    HexPosition::new(0, 1, -1),
    HexPosition::new(-1, 1, 0),
    HexPosition::new(-1, 0, 1),
    HexPosition::new(0, -1, 1),
    HexPosition::new(1, -1, 0),
];

/// Index of the side that faces back towards side `side` from the neighbour
pub const fn opposite_side(side: usize) -> usize {
    (side + 3) % 6
}

impl HexPosition {
    pub const ORIGIN: HexPosition = HexPosition::new(0, 0, 0);

    /// Builds a position from all three components.
    ///
    /// The caller is responsible for `q + r + s == 0`; use [`HexPosition::axial`]
    /// when only two components are at hand.
    pub const fn new(q: i32, r: i32, s: i32) -> Self {
        HexPosition { q, r, s }
    }

    /// Builds a position from axial `(q, r)`, deriving `s`
    pub const fn axial(q: i32, r: i32) -> Self {
        HexPosition { q, r, s: -q - r }
    }

    pub fn is_valid(&self) -> bool {
        self.q + self.r + self.s == 0
    }

    /// The six surrounding positions, in side order
    pub fn neighbours(&self) -> [HexPosition; 6] {
        HEXAGONAL_NEIGHBOURS.map(|offset| *self + offset)
    }

    /// Number of steps between two cells
    pub fn distance(&self, other: &HexPosition) -> i32 {
        ((self.q - other.q).abs() + (self.r - other.r).abs() + (self.s - other.s).abs()) / 2
    }
}

impl Add for HexPosition {
    type Output = HexPosition;

    fn add(self, other: HexPosition) -> HexPosition {
        HexPosition::new(self.q + other.q, self.r + other.r, self.s + other.s)
    }
}

impl fmt::Display for HexPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.q, self.r, self.s)
    }
}

/// Cube coordinate before rounding, as produced by [`world_to_hex`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FractionalHex {
    pub q: f32,
    pub r: f32,
    pub s: f32,
}

impl FractionalHex {
    pub fn new(q: f32, r: f32, s: f32) -> Self {
        FractionalHex { q, r, s }
    }
}

/// Converts a world-space point into fractional cube coordinates.
///
/// NaN or infinite input is not handled.
pub fn world_to_hex(x: f32, y: f32) -> FractionalHex {
    let q = (SQRT_3 / 3.0 * x - y / 3.0) / TILE_SIZE;
    let r = (2.0 / 3.0 * y) / TILE_SIZE;
    FractionalHex::new(q, r, -q - r)
}

/// Centre of a hex in world space
pub fn hex_to_world(hex: HexPosition) -> (f32, f32) {
    let q = hex.q as f32;
    let r = hex.r as f32;
    let x = TILE_SIZE * (SQRT_3 * q + SQRT_3 / 2.0 * r);
    let y = TILE_SIZE * (1.5 * r);
    (x, y)
}

/// Rounds fractional cube coordinates to the containing hex.
///
/// Each component is rounded independently, then whichever component moved
/// the furthest is rebuilt from the other two so the result sums to zero.
pub fn round_to_nearest_hex(hex: FractionalHex) -> HexPosition {
    let mut q = hex.q.round();
    let mut r = hex.r.round();
    let mut s = hex.s.round();

    let q_diff = (q - hex.q).abs();
    let r_diff = (r - hex.r).abs();
    let s_diff = (s - hex.s).abs();

    if q_diff > r_diff && q_diff > s_diff {
        q = -r - s;
    } else if r_diff > s_diff {
        r = -q - s;
    } else {
        s = -q - r;
    }

    HexPosition::new(q as i32, r as i32, s as i32)
}

/// Corners of a pointy-top hex centred on `(x, y)`, clockwise from the
/// upper-right corner. Corner `i` and `i + 1` bound side `i`.
pub fn hex_corners(x: f32, y: f32, size: f32) -> [(f32, f32); 6] {
    std::array::from_fn(|i| {
        let angle = (60.0 * i as f32 - 30.0).to_radians();
        (x + size * angle.cos(), y + size * angle.sin())
    })
}

/// Triangle between the hex centre and side `side`
pub fn sector_corners(x: f32, y: f32, size: f32, side: usize) -> [(f32, f32); 3] {
    let corners = hex_corners(x, y, size);
    [(x, y), corners[side % 6], corners[(side + 1) % 6]]
}
