//! Screen-relative anchors and the zoom camera.
//!
//! # Recompute on Resize Only
//!
//! Anchor positions depend only on the output size, so they are recomputed
//! when the size differs from the previous tick and left untouched
//! otherwise. The camera's target and offset follow the same rule; only its
//! zoom changes per tick, and that comes from the animation state.
//!
//! # Anchors
//!
//! ```text
//!              caption_origin ┌──────────────┐
//!                             │  powered by  │
//!                             └──────────────┘   ↕ caption spacing
//!   logo_origin ┌─────────────────────────────┐
//!               │                             │
//!               │          (center)           │  full side x full side
//!               │                             │
//!               └─────────────────────────────┘
//! ```

use embedded_graphics::prelude::{Point, Size};
use glam::Vec2;

// =============================================================================
// Camera
// =============================================================================

/// 2D camera: scales around `target`, which lands on `offset` on screen.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Camera2D {
    pub target: Vec2,
    pub offset: Vec2,
    pub zoom: f32,
}

impl Camera2D {
    pub const IDENTITY: Self = Self {
        target: Vec2::ZERO,
        offset: Vec2::ZERO,
        zoom: 1.0,
    };

    /// Map a world position to screen space.
    #[inline]
    pub fn world_to_screen(
        &self,
        world: Vec2,
    ) -> Vec2 {
        (world - self.target) * self.zoom + self.offset
    }

    /// Map a screen position back to world space.
    #[inline]
    pub fn screen_to_world(
        &self,
        screen: Vec2,
    ) -> Vec2 {
        (screen - self.offset) / self.zoom + self.target
    }
}

impl Default for Camera2D {
    fn default() -> Self { Self::IDENTITY }
}

// =============================================================================
// Layout
// =============================================================================

/// Anchor positions derived from the output size.
#[derive(Clone, Debug)]
pub struct Layout {
    full_side: u32,
    caption_size: Vec2,
    caption_spacing: f32,
    last_screen: Option<Size>,
    logo_origin: Point,
    caption_origin: Vec2,
    camera: Camera2D,
    recomputes: u32,
}

impl Layout {
    /// `caption_size` is the measured caption extent in screen pixels.
    pub fn new(
        full_side: u32,
        caption_size: Vec2,
        caption_spacing: f32,
    ) -> Self {
        Self {
            full_side,
            caption_size,
            caption_spacing,
            last_screen: None,
            logo_origin: Point::zero(),
            caption_origin: Vec2::ZERO,
            camera: Camera2D::IDENTITY,
            recomputes: 0,
        }
    }

    /// Recompute anchors if `screen` differs from the last seen size.
    ///
    /// Returns `true` when anchors were recomputed.
    pub fn update(
        &mut self,
        screen: Size,
    ) -> bool {
        if self.last_screen == Some(screen) {
            return false;
        }
        self.last_screen = Some(screen);

        let center = Vec2::new(screen.width as f32 / 2.0, screen.height as f32 / 2.0);
        let half_side = (self.full_side / 2) as i32;

        self.logo_origin = Point::new(
            (screen.width / 2) as i32 - half_side,
            (screen.height / 2) as i32 - half_side,
        );
        self.caption_origin = Vec2::new(
            center.x - self.caption_size.x / 2.0,
            self.logo_origin.y as f32 - (self.caption_size.y + self.caption_spacing),
        );
        self.camera.target = center;
        self.camera.offset = center;
        self.recomputes += 1;

        tracing::debug!(
            width = screen.width,
            height = screen.height,
            logo_x = self.logo_origin.x,
            logo_y = self.logo_origin.y,
            "layout recomputed"
        );
        true
    }

    /// Top-left corner of the square / logo on screen.
    #[inline]
    pub const fn logo_origin(&self) -> Point { self.logo_origin }

    /// Top-left corner of the caption in world space.
    #[inline]
    pub const fn caption_origin(&self) -> Vec2 { self.caption_origin }

    /// How many times anchors were recomputed.
    #[inline]
    pub const fn recomputes(&self) -> u32 { self.recomputes }

    /// Camera centered on the screen with the given zoom.
    #[inline]
    pub fn camera(
        &self,
        zoom: f32,
    ) -> Camera2D {
        Camera2D {
            zoom,
            ..self.camera
        }
    }
}
