//! Recording backend for unit tests.
//!
//! Surfaces are plain pixel grids. The backend records every canvas call per
//! frame, scripts screen sizes and input per tick, and counts surface
//! creation and drops through a shared counter.

use std::cell::Cell;
use std::convert::Infallible;
use std::rc::Rc;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use glam::Vec2;
use thiserror::Error;

use crate::backend::{Backend, Canvas, Input, Paint, Surface};
use crate::layout::Camera2D;
use crate::text::TextRun;

// =============================================================================
// Test Surface
// =============================================================================

#[derive(Debug)]
pub struct TestSurface {
    id: u32,
    size: Size,
    pixels: Vec<Option<Rgb565>>,
    drops: Option<Rc<Cell<u32>>>,
}

impl TestSurface {
    pub fn new(size: Size) -> Self {
        Self {
            id: 0,
            size,
            pixels: vec![None; size.width as usize * size.height as usize],
            drops: None,
        }
    }

    pub fn with_id(
        mut self,
        id: u32,
    ) -> Self {
        self.id = id;
        self
    }

    pub const fn id(&self) -> u32 { self.id }

    pub fn pixel(
        &self,
        point: Point,
    ) -> Option<Rgb565> {
        self.index(point).and_then(|i| self.pixels[i])
    }

    pub fn lit_count(&self) -> usize { self.pixels.iter().filter(|p| p.is_some()).count() }

    pub fn lit_points(&self) -> Vec<Point> {
        let width = self.size.width as usize;
        self.pixels
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_some())
            .map(|(i, _)| Point::new((i % width) as i32, (i / width) as i32))
            .collect()
    }

    fn index(
        &self,
        point: Point,
    ) -> Option<usize> {
        let in_bounds = point.x >= 0
            && point.y >= 0
            && (point.x as u32) < self.size.width
            && (point.y as u32) < self.size.height;
        in_bounds.then(|| point.y as usize * self.size.width as usize + point.x as usize)
    }
}

impl OriginDimensions for TestSurface {
    fn size(&self) -> Size { self.size }
}

impl DrawTarget for TestSurface {
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
            if let Some(i) = self.index(point) {
                self.pixels[i] = Some(color);
            }
        }
        Ok(())
    }
}

impl Surface for TestSurface {
    fn composite(
        &mut self,
        source: &Self,
        offset: Point,
    ) {
        for point in source.lit_points() {
            if let (Some(color), Some(i)) = (source.pixel(point), self.index(point + offset)) {
                self.pixels[i] = Some(color);
            }
        }
    }
}

impl Drop for TestSurface {
    fn drop(&mut self) {
        if let Some(drops) = &self.drops {
            drops.set(drops.get() + 1);
        }
    }
}

// =============================================================================
// Recording Backend
// =============================================================================

/// One recorded canvas call.
#[derive(Clone, PartialEq, Debug)]
pub enum Call {
    Clear(Rgb565),
    FillRect(Rectangle, Rgb565),
    Text {
        text: String,
        origin: Vec2,
        paint: Paint,
    },
    Blit {
        surface: u32,
        lit: usize,
        origin: Point,
        alpha: f32,
    },
    BeginCamera(Camera2D),
    EndCamera,
}

#[derive(Debug, Error)]
#[error("scripted present failure on frame {0}")]
pub struct TestBackendError(pub usize);

#[derive(Debug)]
pub struct RecordingBackend {
    /// Screen size per tick; the last entry repeats.
    pub sizes: Vec<Size>,
    /// 1-based tick on which skip is reported.
    pub skip_on: Option<u32>,
    /// 1-based tick on which close is reported.
    pub close_on: Option<u32>,
    /// 1-based frame whose present fails.
    pub fail_present_on: Option<usize>,
    pub target_fps: Option<u32>,
    pub frames: Vec<Vec<Call>>,
    pub polls: u32,
    pub surfaces_created: u32,
    pub drops: Rc<Cell<u32>>,
    in_frame: bool,
}

impl RecordingBackend {
    pub fn new(size: Size) -> Self {
        Self {
            sizes: vec![size],
            skip_on: None,
            close_on: None,
            fail_present_on: None,
            target_fps: None,
            frames: Vec::new(),
            polls: 0,
            surfaces_created: 0,
            drops: Rc::new(Cell::new(0)),
            in_frame: false,
        }
    }

    pub fn surfaces_dropped(&self) -> u32 { self.drops.get() }

    /// Every recorded call across all frames.
    pub fn calls(&self) -> impl Iterator<Item = &Call> { self.frames.iter().flatten() }

    fn record(
        &mut self,
        call: Call,
    ) {
        assert!(self.in_frame, "Canvas call outside begin_frame/end_frame: {call:?}");
        if let Some(frame) = self.frames.last_mut() {
            frame.push(call);
        }
    }
}

impl Canvas for RecordingBackend {
    type Surface = TestSurface;

    fn clear(
        &mut self,
        color: Rgb565,
    ) {
        self.record(Call::Clear(color));
    }

    fn fill_rect(
        &mut self,
        rect: Rectangle,
        color: Rgb565,
    ) {
        self.record(Call::FillRect(rect, color));
    }

    fn draw_text(
        &mut self,
        run: &TextRun<'_>,
        origin: Vec2,
        paint: Paint,
    ) {
        self.record(Call::Text {
            text: run.text().to_owned(),
            origin,
            paint,
        });
    }

    fn draw_surface(
        &mut self,
        surface: &Self::Surface,
        origin: Point,
        alpha: f32,
    ) {
        self.record(Call::Blit {
            surface: surface.id(),
            lit: surface.lit_count(),
            origin,
            alpha,
        });
    }

    fn begin_camera(
        &mut self,
        camera: &Camera2D,
    ) {
        self.record(Call::BeginCamera(*camera));
    }

    fn end_camera(&mut self) {
        self.record(Call::EndCamera);
    }
}

impl Backend for RecordingBackend {
    type Error = TestBackendError;

    fn set_target_fps(
        &mut self,
        fps: u32,
    ) {
        self.target_fps = Some(fps);
    }

    fn poll_input(&mut self) -> Input {
        self.polls += 1;
        Input {
            close: self.close_on == Some(self.polls),
            skip: self.skip_on == Some(self.polls),
        }
    }

    fn screen_size(&self) -> Size {
        let tick = (self.polls as usize).saturating_sub(1);
        let index = tick.min(self.sizes.len() - 1);
        self.sizes[index]
    }

    fn create_surface(
        &mut self,
        size: Size,
    ) -> Result<Self::Surface, Self::Error> {
        let mut surface = TestSurface::new(size);
        surface.id = self.surfaces_created;
        surface.drops = Some(Rc::clone(&self.drops));
        self.surfaces_created += 1;
        Ok(surface)
    }

    fn begin_frame(&mut self) {
        assert!(!self.in_frame, "Nested begin_frame");
        self.in_frame = true;
        self.frames.push(Vec::new());
    }

    fn end_frame(&mut self) -> Result<(), Self::Error> {
        assert!(self.in_frame, "end_frame without begin_frame");
        self.in_frame = false;
        if self.fail_present_on == Some(self.frames.len()) {
            return Err(TestBackendError(self.frames.len()));
        }
        Ok(())
    }
}
