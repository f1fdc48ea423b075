//! SDL window backend built on `embedded-graphics-simulator`.
//!
//! Drawing goes to the [`Raster`]; `end_frame` pushes it to the
//! `SimulatorDisplay`, updates the window and sleeps out the frame budget.
//!
//! # Input
//!
//! | Event | Meaning |
//! |-------|---------|
//! | Window close | close |
//! | Any key press (not auto-repeat) | skip |
//! | Mouse button release | skip |

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use glam::Vec2;
use splash_common::backend::{Backend, Canvas, Input, Paint};
use splash_common::colors::BLACK;
use splash_common::layout::Camera2D;
use splash_common::text::TextRun;
use thiserror::Error;

use crate::raster::{PixelSurface, Raster};
use crate::timing::FramePacer;

const WINDOW_TITLE: &str = "Splash Logo Simulator";

#[derive(Debug, Error)]
pub enum SimulatorError {
    #[error("cannot allocate an empty {width}x{height} surface")]
    EmptySurface { width: u32, height: u32 },

    #[error("window size {width}x{height} is empty")]
    EmptyWindow { width: u32, height: u32 },
}

pub struct SimulatorBackend {
    display: SimulatorDisplay<Rgb565>,
    window: Window,
    raster: Raster,
    pacer: FramePacer,
    frames: u64,
}

impl SimulatorBackend {
    /// Open a `size` window, each simulated pixel drawn `pixel_scale` times larger.
    pub fn new(
        size: Size,
        pixel_scale: u32,
    ) -> Result<Self, SimulatorError> {
        if size.width == 0 || size.height == 0 {
            return Err(SimulatorError::EmptyWindow {
                width: size.width,
                height: size.height,
            });
        }

        let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(size);
        let output_settings = OutputSettingsBuilder::new().scale(pixel_scale.max(1)).build();
        let mut window = Window::new(WINDOW_TITLE, &output_settings);

        display.clear(BLACK).ok();
        window.update(&display);

        tracing::debug!(width = size.width, height = size.height, pixel_scale, "simulator window opened");

        Ok(Self {
            display,
            window,
            raster: Raster::new(size, BLACK),
            pacer: FramePacer::new(splash_common::config::DEFAULT_FRAME_RATE),
            frames: 0,
        })
    }

    /// Frames presented so far.
    pub const fn frames(&self) -> u64 { self.frames }
}

impl Canvas for SimulatorBackend {
    type Surface = PixelSurface;

    fn clear(
        &mut self,
        color: Rgb565,
    ) {
        self.raster.clear(color);
    }

    fn fill_rect(
        &mut self,
        rect: Rectangle,
        color: Rgb565,
    ) {
        self.raster.fill_rect(rect, color);
    }

    fn draw_text(
        &mut self,
        run: &TextRun<'_>,
        origin: Vec2,
        paint: Paint,
    ) {
        self.raster.draw_text(run, origin, paint);
    }

    fn draw_surface(
        &mut self,
        surface: &Self::Surface,
        origin: Point,
        alpha: f32,
    ) {
        self.raster.draw_surface(surface, origin, alpha);
    }

    fn begin_camera(
        &mut self,
        camera: &Camera2D,
    ) {
        self.raster.begin_camera(camera);
    }

    fn end_camera(&mut self) {
        self.raster.end_camera();
    }
}

impl Backend for SimulatorBackend {
    type Error = SimulatorError;

    fn set_target_fps(
        &mut self,
        fps: u32,
    ) {
        self.pacer.set_fps(fps);
        tracing::debug!(fps, frame_time = ?self.pacer.frame_time(), "target frame rate set");
    }

    fn poll_input(&mut self) -> Input {
        let mut input = Input::default();
        for event in self.window.events() {
            match event {
                SimulatorEvent::Quit => input.close = true,
                SimulatorEvent::KeyDown { repeat: false, .. } | SimulatorEvent::MouseButtonUp { .. } => {
                    input.skip = true;
                }
                _ => {}
            }
        }
        input
    }

    fn screen_size(&self) -> Size { self.raster.size() }

    fn create_surface(
        &mut self,
        size: Size,
    ) -> Result<Self::Surface, Self::Error> {
        if size.width == 0 || size.height == 0 {
            return Err(SimulatorError::EmptySurface {
                width: size.width,
                height: size.height,
            });
        }
        Ok(PixelSurface::new(size))
    }

    fn begin_frame(&mut self) { self.raster.end_camera(); }

    fn end_frame(&mut self) -> Result<(), Self::Error> {
        let area = self.display.bounding_box();
        self.display.fill_contiguous(&area, self.raster.pixels().iter().copied()).ok();
        self.window.update(&self.display);
        self.frames += 1;

        let slept = self.pacer.wait();
        tracing::trace!(frame = self.frames, ?slept, "frame presented");
        Ok(())
    }
}
