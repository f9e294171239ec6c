//! Hexagod: a hex tile-placement puzzle
//!
//! Place tiles drawn from a queue next to the board; every edge whose biome
//! matches its neighbour scores, and completing all six edges of a tile
//! grants bonus tiles. The library holds the whole game core and draws
//! through [`render::RenderSurface`], so it runs headless in tests. The
//! `hexagod` binary adds an SDL2 window on top.

pub mod animation;
pub mod camera;
pub mod config;
pub mod error;
pub mod game;
pub mod grid;
pub mod hex;
pub mod input_system;
pub mod render;
pub mod scoring;
pub mod text;
pub mod tile;
pub mod tile_manager;
pub mod ui;

pub use error::{GameError, Result};
