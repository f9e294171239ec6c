use crate::hex::HexPosition;
use rand::Rng;
use rand::distr::{Distribution, StandardUniform};

/// Terrain kind painted on one side of a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Biome {
    Swamp = 0,
    Grass = 1,
    Sand = 2,
    Forest = 3,
    Mountain = 4,
    Snow = 5,
}

impl Biome {
    pub const ALL: [Biome; 6] = [
        Biome::Swamp,
        Biome::Grass,
        Biome::Sand,
        Biome::Forest,
        Biome::Mountain,
        Biome::Snow,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Biome::Swamp => "swamp",
            Biome::Grass => "grass",
            Biome::Sand => "sand",
            Biome::Forest => "forest",
            Biome::Mountain => "mountain",
            Biome::Snow => "snow",
        }
    }
}

/// Uniform pick over every biome, so `rng.random::<Biome>()` works
impl Distribution<Biome> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Biome {
        Biome::ALL[rng.random_range(0..Biome::ALL.len())]
    }
}

/// Biome sequence for one tile, indexed by side (see [`crate::hex`])
pub type Sides = [Biome; 6];

/// Returns `sides` rotated left by `offset` positions.
///
/// Rotation is applied when reading the active tile; the stored sides of a
/// queued tile never change.
pub fn rotated_sides(sides: &Sides, offset: usize) -> Sides {
    let mut rotated = *sides;
    rotated.rotate_left(offset % 6);
    rotated
}

/// A hex tile, either waiting in the queue or placed on the board
#[derive(Debug, Clone, PartialEq)]
pub struct HexTile {
    /// Board position, `None` until placed
    pub position: Option<HexPosition>,
    pub sides: Sides,
    /// Biome of the neighbouring edge touching each side, filled in as
    /// neighbours are placed
    pub sides_touching: [Option<Biome>; 6],
    pub matching_sides: u8,
    perfect_awarded: bool,
}

impl HexTile {
    pub fn new(sides: Sides) -> Self {
        HexTile {
            position: None,
            sides,
            sides_touching: [None; 6],
            matching_sides: 0,
            perfect_awarded: false,
        }
    }

    /// Same tile, placed at `position`
    pub fn at(mut self, position: HexPosition) -> Self {
        self.position = Some(position);
        self
    }

    /// A tile with all six sides drawn independently and uniformly
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        HexTile::new(std::array::from_fn(|_| rng.random()))
    }

    pub fn is_perfect(&self) -> bool {
        self.matching_sides >= 6
    }

    /// Counts one more matching side.
    ///
    /// Returns `true` exactly once per tile: on the call that takes the count
    /// to six. Counts never go down, and never past six.
    pub fn record_match(&mut self) -> bool {
        if self.matching_sides < 6 {
            self.matching_sides += 1;
        }
        if self.is_perfect() && !self.perfect_awarded {
            self.perfect_awarded = true;
            return true;
        }
        false
    }
}
