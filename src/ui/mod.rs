//! World-Space Feedback Components
//!
//! UI elements drawn over the board in world coordinates, converted through
//! the [`Camera`](crate::camera::Camera) at render time.
//!
//! # Architecture
//!
//! Components are created once by the scene and reused:
//! - They hold their own timer and anchor
//! - Scoring re-anchors them through `move_to` / `trigger`
//! - `update(dt)` advances them, `render` draws them if still active
//!
//! # Available Components
//!
//! - [`PopupText`] - "+10" per matched edge and "PERFECT" per completed tile
//! - [`PlaceEffect`] - Expanding rings around the last placed tile
//!
//! # Example Usage
//!
//! ```rust
//! use hexagod::ui::{PlaceEffect, PopupText};
//!
//! let mut edge_popup = PopupText::new("+10", 0.5);
//! let mut effect = PlaceEffect::new();
//!
//! // After a placement
//! edge_popup.move_to(8.0, 0.0);
//! effect.trigger(0.0, 0.0);
//!
//! // Every frame
//! edge_popup.update(1.0 / 60.0);
//! effect.update(1.0 / 60.0);
//! assert!(edge_popup.is_visible());
//! assert!(!effect.is_finished());
//! ```

pub mod place_effect;
pub mod popup;

pub use place_effect::PlaceEffect;
pub use popup::{PopupStyle, PopupText};
