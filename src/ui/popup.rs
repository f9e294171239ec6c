//! Popup text for score feedback ("+10", "PERFECT")
//!
//! A [`PopupText`] is created once and reused: scoring moves it to a new
//! world-space anchor, which restarts its timer. While the timer runs the
//! text drifts upward and fades out.
//!
//! # Example
//!
//! ```rust
//! use hexagod::ui::PopupText;
//!
//! let mut popup = PopupText::new("+10", 0.5);
//! assert!(!popup.is_visible());
//!
//! popup.move_to(12.0, -4.0);
//! popup.update(0.1);
//! assert!(popup.is_visible());
//! ```

use crate::camera::Camera;
use crate::error::Result;
use crate::render::{RenderSurface, Rgba};

/// Appearance of popup text
#[derive(Debug, Clone)]
pub struct PopupStyle {
    /// Glyph scale (1 = 5x7 pixels)
    pub scale: u32,
    pub colour: Rgba,
    /// Shadow offset for legibility over bright tiles
    pub outline_offset: i32,
    pub outline_colour: Rgba,
    /// Upward drift in pixels per second
    pub rise_speed: f32,
}

impl Default for PopupStyle {
    fn default() -> Self {
        PopupStyle {
            scale: 1,
            colour: Rgba::WHITE,
            outline_offset: 1,
            outline_colour: Rgba::BLACK,
            rise_speed: 12.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PopupText {
    text: String,
    x: f32,
    y: f32,
    duration: f32,
    remaining: f32,
    style: PopupStyle,
}

impl PopupText {
    /// Creates a hidden popup that shows for `duration` seconds each time it moves
    pub fn new(text: &str, duration: f32) -> Self {
        Self::with_style(text, duration, PopupStyle::default())
    }

    pub fn with_style(text: &str, duration: f32, style: PopupStyle) -> Self {
        PopupText {
            text: text.to_string(),
            x: 0.0,
            y: 0.0,
            duration,
            remaining: 0.0,
            style,
        }
    }

    /// Re-anchors the popup in world space and shows it again
    pub fn move_to(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
        self.remaining = self.duration;
    }

    pub fn update(&mut self, delta_time: f32) {
        if !self.is_visible() {
            return;
        }
        self.remaining = (self.remaining - delta_time).max(0.0);
        self.y -= self.style.rise_speed * delta_time;
    }

    pub fn is_visible(&self) -> bool {
        self.remaining > 0.0
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Current world-space anchor
    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    /// 255 when just shown, fading linearly to 0
    pub fn alpha(&self) -> u8 {
        if self.duration <= 0.0 {
            return 0;
        }
        ((self.remaining / self.duration).clamp(0.0, 1.0) * 255.0) as u8
    }

    pub fn render<S: RenderSurface + ?Sized>(&self, surface: &mut S, camera: &Camera) -> Result<()> {
        if !self.is_visible() {
            return Ok(());
        }

        let (sx, sy) = camera.world_to_screen(self.x, self.y);
        let (sx, sy) = (sx.round() as i32, sy.round() as i32);
        let alpha = self.alpha();
        let offset = self.style.outline_offset;

        surface.draw_text(
            &self.text,
            sx + offset,
            sy + offset,
            self.style.outline_colour.with_alpha(alpha),
            self.style.scale,
        )?;
        surface.draw_text(&self.text, sx, sy, self.style.colour.with_alpha(alpha), self.style.scale)
    }
}
