//! Rendering and windowing contract the animation is driven through.
//!
//! Primitive drawing comes from `embedded-graphics`: off-screen surfaces are
//! plain [`DrawTarget`]s and strokes are [`Rectangle`]s. The traits here add
//! what `embedded-graphics` does not model:
//!
//! - [`Surface`]: off-screen target that can composite another surface
//! - [`Canvas`]: per-frame drawing with alpha, surface blits and a 2D camera
//! - [`Backend`]: window lifetime, input, surface allocation and frame pacing
//!
//! # Scoping
//!
//! [`Canvas::with_camera`] and [`Backend::draw_frame`] pair the begin/end
//! calls around a closure so a frame or camera block cannot be left open.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use glam::Vec2;

use crate::layout::Camera2D;
use crate::text::TextRun;

// =============================================================================
// Value Types
// =============================================================================

/// Color and opacity for a draw call.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Paint {
    pub color: Rgb565,
    /// 0.0 is invisible, 1.0 is opaque.
    pub alpha: f32,
}

impl Paint {
    #[inline]
    pub const fn opaque(color: Rgb565) -> Self { Self { color, alpha: 1.0 } }

    #[inline]
    pub const fn with_alpha(
        color: Rgb565,
        alpha: f32,
    ) -> Self {
        Self { color, alpha }
    }
}

/// Input sampled once per tick.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct Input {
    /// The window asked to close.
    pub close: bool,
    /// The user asked to skip the animation.
    pub skip: bool,
}

// =============================================================================
// Traits
// =============================================================================

/// Fixed-size off-screen surface, transparent until drawn.
///
/// Dropping the surface releases it.
pub trait Surface: DrawTarget<Color = Rgb565, Error = Infallible> + OriginDimensions {
    /// Copy every drawn pixel of `source` onto this surface at `offset`.
    fn composite(
        &mut self,
        source: &Self,
        offset: Point,
    );
}

/// Drawing operations for one frame.
///
/// While a camera block is open, `draw_text` and `draw_surface` positions are
/// in world space and go through the camera. `clear` and `fill_rect` always
/// address the screen directly.
pub trait Canvas {
    type Surface: Surface;

    fn clear(
        &mut self,
        color: Rgb565,
    );

    fn fill_rect(
        &mut self,
        rect: Rectangle,
        color: Rgb565,
    );

    /// Draw `run` with its top-left corner at `origin`.
    fn draw_text(
        &mut self,
        run: &TextRun<'_>,
        origin: Vec2,
        paint: Paint,
    );

    /// Blit a surface with its top-left corner at `origin`.
    fn draw_surface(
        &mut self,
        surface: &Self::Surface,
        origin: Point,
        alpha: f32,
    );

    fn begin_camera(
        &mut self,
        camera: &Camera2D,
    );

    fn end_camera(&mut self);

    /// Run `draw` inside a camera block.
    fn with_camera<F>(
        &mut self,
        camera: &Camera2D,
        draw: F,
    ) where
        F: FnOnce(&mut Self),
        Self: Sized,
    {
        self.begin_camera(camera);
        draw(self);
        self.end_camera();
    }
}

/// A window the animation runs in.
pub trait Backend: Canvas {
    type Error: core::error::Error + 'static;

    fn set_target_fps(
        &mut self,
        fps: u32,
    );

    /// Sample close and skip requests for this tick.
    fn poll_input(&mut self) -> Input;

    /// Current output size in pixels.
    fn screen_size(&self) -> Size;

    /// Allocate a blank off-screen surface.
    fn create_surface(
        &mut self,
        size: Size,
    ) -> Result<Self::Surface, Self::Error>;

    fn begin_frame(&mut self);

    /// Present the frame and wait for the next tick.
    fn end_frame(&mut self) -> Result<(), Self::Error>;

    /// Run `draw` between `begin_frame` and `end_frame`.
    fn draw_frame<F>(
        &mut self,
        draw: F,
    ) -> Result<(), Self::Error>
    where
        F: FnOnce(&mut Self),
        Self: Sized,
    {
        self.begin_frame();
        draw(self);
        self.end_frame()
    }
}
