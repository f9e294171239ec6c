//! Game settings loaded from JSON
//!
//! Every field has a default, so a config file only needs the values it
//! changes:
//!
//! ```json
//! {
//!   "starting_tiles": 80,
//!   "seed": 1234,
//!   "key_bindings": { "hold": ["Space", "H"] }
//! }
//! ```

use crate::error::{GameError, Result};
use crate::input_system::Action;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Largest logical window side accepted from a config file
pub const MAX_WINDOW_DIMENSION: u32 = 4096;

/// Keys bound to each action, by window-library key name.
///
/// The first key in each list is the one tracked at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub hold: Vec<String>,
    pub restart: Vec<String>,
    pub back: Vec<String>,
    pub mute: Vec<String>,
    pub centre: Vec<String>,
}

impl KeyBindings {
    pub fn get(&self, action: Action) -> &[String] {
        match action {
            Action::Hold => &self.hold,
            Action::Restart => &self.restart,
            Action::Back => &self.back,
            Action::Mute => &self.mute,
            Action::Centre => &self.centre,
        }
    }

    /// All actions paired with their key names
    pub fn iter(&self) -> impl Iterator<Item = (Action, &[String])> {
        Action::ALL.into_iter().map(|action| (action, self.get(action)))
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        KeyBindings {
            hold: vec!["Space".into(), "H".into()],
            restart: vec!["R".into()],
            back: vec!["Escape".into()],
            mute: vec!["M".into()],
            centre: vec!["C".into()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Logical resolution; the window is scaled up from this
    pub window_width: u32,
    pub window_height: u32,
    pub fps: u32,
    /// Upcoming tiles shown in the preview column
    pub preview_depth: usize,
    pub starting_tiles: u32,
    /// Camera pan speed in world pixels per second
    pub camera_speed: f32,
    /// Width and height of the screen border band where the mouse pans
    pub edge_pan_margin: [u32; 2],
    /// Fixed seed for tile generation; random when unset
    pub seed: Option<u64>,
    pub key_bindings: KeyBindings,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            window_width: 480,
            window_height: 270,
            fps: 60,
            preview_depth: 5,
            starting_tiles: 50,
            camera_speed: 160.0,
            edge_pan_margin: [32, 16],
            seed: None,
            key_bindings: KeyBindings::default(),
        }
    }
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| GameError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;

        // A bare array would otherwise deserialize positionally into the fields
        let value: serde_json::Value = serde_json::from_str(&content)?;
        if !value.is_object() {
            return Err(GameError::ConfigParse(serde::de::Error::custom(
                "config must be a JSON object",
            )));
        }

        let config: GameConfig = serde_json::from_value(value)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects settings the game cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.window_width == 0 || self.window_height == 0 {
            return Err(GameError::InvalidConfig("window size must be non-zero".into()));
        }
        if self.window_width > MAX_WINDOW_DIMENSION || self.window_height > MAX_WINDOW_DIMENSION {
            return Err(GameError::InvalidConfig(format!(
                "window size {}x{} exceeds {}",
                self.window_width, self.window_height, MAX_WINDOW_DIMENSION
            )));
        }
        if self.preview_depth == 0 {
            return Err(GameError::InvalidConfig("preview_depth must be at least 1".into()));
        }
        if self.fps == 0 {
            return Err(GameError::InvalidConfig("fps must be at least 1".into()));
        }
        Ok(())
    }

    /// `<config dir>/hexagod/config.json`, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("hexagod").join("config.json"))
    }

    /// Loads the user config, falling back to defaults when it is missing or broken
    pub fn load_or_default() -> Self {
        match Self::default_path() {
            Some(path) => Self::load_or_default_from(&path),
            None => {
                debug!("no config directory on this platform, using defaults");
                GameConfig::default()
            }
        }
    }

    pub fn load_or_default_from(path: &Path) -> Self {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return GameConfig::default();
        }

        match Self::load_from_file(path) {
            Ok(config) => {
                info!(path = %path.display(), "loaded config");
                config
            }
            Err(e) => {
                warn!(error = %e, "ignoring config file, using defaults");
                GameConfig::default()
            }
        }
    }

    pub fn window_centre(&self) -> (f32, f32) {
        (self.window_width as f32 / 2.0, self.window_height as f32 / 2.0)
    }
}
