// Game module - The playable scene and its frame-by-frame logic
//
// This module contains:
// - scene.rs: GameScene struct, construction, input handling and update
// - rendering.rs: Drawing the board, effects and HUD
// - types.rs: Scene transitions and the HUD layout

pub mod rendering;
pub mod scene;
pub mod types;

pub use scene::GameScene;
pub use types::*;
