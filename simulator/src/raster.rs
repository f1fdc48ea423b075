//! Software rasterizer behind the simulator window.
//!
//! # Pixel Formats
//!
//! - [`PixelSurface`]: off-screen artifact, `Option<Rgb565>` per pixel so
//!   undrawn pixels stay transparent.
//! - [`Raster`]: the frame, one opaque `Rgb565` per pixel, pushed to the
//!   `SimulatorDisplay` in one `fill_contiguous` call per frame.
//!
//! # Camera and Alpha
//!
//! Blits walk the destination pixels covered by the transformed source
//! rectangle and map each pixel center back through the inverse camera
//! (nearest-neighbour sampling). Alpha is applied by blending into the pixel
//! already in the frame with [`fade`].
//!
//! Text is drawn one glyph at a time: the glyph is rendered unscaled into a
//! scratch surface with the `embedded-graphics` mono font renderer, then
//! blitted at the run's scale.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PointsIter, Rectangle};
use glam::Vec2;
use splash_common::backend::{Canvas, Paint, Surface};
use splash_common::colors::fade;
use splash_common::layout::Camera2D;
use splash_common::text::{TextRun, draw_run};

// =============================================================================
// Off-screen Surface
// =============================================================================

#[derive(Clone, Debug)]
pub struct PixelSurface {
    size: Size,
    pixels: Vec<Option<Rgb565>>,
}

impl PixelSurface {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            pixels: vec![None; pixel_count(size)],
        }
    }

    pub fn pixel(
        &self,
        point: Point,
    ) -> Option<Rgb565> {
        index(self.size, point).and_then(|i| self.pixels[i])
    }
}

#[cfg(test)]
impl PixelSurface {
    pub fn lit_count(&self) -> usize { self.pixels.iter().filter(|p| p.is_some()).count() }
}

impl OriginDimensions for PixelSurface {
    fn size(&self) -> Size { self.size }
}

impl DrawTarget for PixelSurface {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let Some(i) = index(self.size, point) {
                self.pixels[i] = Some(color);
            }
        }
        Ok(())
    }
}

impl Surface for PixelSurface {
    fn composite(
        &mut self,
        source: &Self,
        offset: Point,
    ) {
        let width = source.size.width as usize;
        for (i, color) in source.pixels.iter().enumerate() {
            let Some(color) = color else { continue };
            let point = Point::new((i % width) as i32, (i / width) as i32) + offset;
            if let Some(dst) = index(self.size, point) {
                self.pixels[dst] = Some(*color);
            }
        }
    }
}

/// Buffer length for `size`, computed in `usize` so large sizes cannot wrap.
#[inline]
fn pixel_count(size: Size) -> usize { size.width as usize * size.height as usize }

#[inline]
fn index(
    size: Size,
    point: Point,
) -> Option<usize> {
    let in_bounds = point.x >= 0 && point.y >= 0 && (point.x as u32) < size.width && (point.y as u32) < size.height;
    in_bounds.then(|| point.y as usize * size.width as usize + point.x as usize)
}

// =============================================================================
// Frame Raster
// =============================================================================

#[derive(Debug)]
pub struct Raster {
    size: Size,
    pixels: Vec<Rgb565>,
    camera: Option<Camera2D>,
}

impl Raster {
    pub fn new(
        size: Size,
        background: Rgb565,
    ) -> Self {
        Self {
            size,
            pixels: vec![background; pixel_count(size)],
            camera: None,
        }
    }

    #[inline]
    pub const fn size(&self) -> Size { self.size }

    /// Row-major frame pixels.
    #[inline]
    pub fn pixels(&self) -> &[Rgb565] { &self.pixels }

    fn blend(
        &mut self,
        point: Point,
        color: Rgb565,
        alpha: f32,
    ) {
        if let Some(i) = index(self.size, point) {
            self.pixels[i] = if alpha >= 1.0 {
                color
            } else {
                fade(self.pixels[i], color, alpha)
            };
        }
    }

    /// Blit `source` with its top-left at world `origin`, scaled by `scale`
    /// and then by the active camera.
    fn blit(
        &mut self,
        source: &PixelSurface,
        origin: Vec2,
        scale: f32,
        alpha: f32,
    ) {
        if alpha <= 0.0 || scale <= 0.0 {
            return;
        }
        let camera = self.camera.unwrap_or(Camera2D::IDENTITY);
        let extent = Vec2::new(source.size.width as f32, source.size.height as f32) * scale;
        let top_left = camera.world_to_screen(origin);
        let bottom_right = camera.world_to_screen(origin + extent);

        let x0 = top_left.x.floor().max(0.0) as i32;
        let y0 = top_left.y.floor().max(0.0) as i32;
        let x1 = bottom_right.x.ceil().min(self.size.width as f32) as i32;
        let y1 = bottom_right.y.ceil().min(self.size.height as f32) as i32;

        for y in y0..y1 {
            for x in x0..x1 {
                let world = camera.screen_to_world(Vec2::new(x as f32 + 0.5, y as f32 + 0.5));
                let local = (world - origin) / scale;
                if local.x < 0.0 || local.y < 0.0 {
                    continue;
                }
                if let Some(color) = source.pixel(Point::new(local.x as i32, local.y as i32)) {
                    self.blend(Point::new(x, y), color, alpha);
                }
            }
        }
    }
}

#[cfg(test)]
impl Raster {
    pub fn pixel(
        &self,
        point: Point,
    ) -> Option<Rgb565> {
        index(self.size, point).map(|i| self.pixels[i])
    }

    pub const fn camera(&self) -> Option<Camera2D> { self.camera }
}

impl Canvas for Raster {
    type Surface = PixelSurface;

    fn clear(
        &mut self,
        color: Rgb565,
    ) {
        self.pixels.fill(color);
    }

    fn fill_rect(
        &mut self,
        rect: Rectangle,
        color: Rgb565,
    ) {
        let clipped = rect.intersection(&Rectangle::new(Point::zero(), self.size));
        for point in clipped.points() {
            if let Some(i) = index(self.size, point) {
                self.pixels[i] = color;
            }
        }
    }

    fn draw_text(
        &mut self,
        run: &TextRun<'_>,
        origin: Vec2,
        paint: Paint,
    ) {
        let mut glyph = PixelSurface::new(run.font().character_size);
        let mut char_buf = [0u8; 4];

        for (ch, offset) in run.glyphs() {
            if ch.is_whitespace() {
                continue;
            }
            glyph.pixels.fill(None);
            let single = TextRun::plain(ch.encode_utf8(&mut char_buf), run.font());
            draw_run(&mut glyph, &single, Point::zero(), paint.color).ok();
            self.blit(&glyph, origin + offset, run.scale(), paint.alpha);
        }
    }

    fn draw_surface(
        &mut self,
        surface: &Self::Surface,
        origin: Point,
        alpha: f32,
    ) {
        self.blit(surface, Vec2::new(origin.x as f32, origin.y as f32), 1.0, alpha);
    }

    fn begin_camera(
        &mut self,
        camera: &Camera2D,
    ) {
        self.camera = Some(*camera);
    }

    fn end_camera(&mut self) {
        self.camera = None;
    }
}
