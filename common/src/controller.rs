//! Animation driver and entry points.
//!
//! One tick: poll input, step the state machine (skip forces `Done`), bake
//! any artifact whose phase has been reached, refresh the layout and draw.
//! The tick that reaches `Done` draws nothing and ends the run.
//!
//! Surfaces for both artifacts are allocated up front and dropped with the
//! controller, so every exit path (completion, skip, close or error)
//! releases them.

use core::fmt;

use crate::backend::Backend;
use crate::cache::Artifacts;
use crate::config::SplashConfig;
use crate::error::SplashError;
use crate::layout::Layout;
use crate::phase::Phase;
use crate::render::Scene;
use crate::state::AnimationState;

/// How a run ended.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Outcome {
    /// Every phase played through to `Done`.
    Completed,
    /// A skip request ended the animation early.
    Skipped,
    /// The window asked to close.
    Closed,
}

impl fmt::Display for Outcome {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(match self {
            Self::Completed => "completed",
            Self::Skipped => "skipped",
            Self::Closed => "closed",
        })
    }
}

/// Drives one splash run against a backend.
pub struct AnimationController<'a, B: Backend> {
    backend: &'a mut B,
    scene: Scene<'a>,
    state: AnimationState,
    layout: Layout,
    artifacts: Artifacts<B::Surface>,
    ticks: u32,
}

impl<'a, B: Backend> AnimationController<'a, B> {
    /// Validate `config`, set the frame rate and allocate both artifact surfaces.
    pub fn new(
        backend: &'a mut B,
        config: &'a SplashConfig,
    ) -> Result<Self, SplashError<B::Error>> {
        config.validate()?;

        let state = AnimationState::new(config.stroke_width, config.wordmark.chars().count());
        let square = *state.square();
        let scene = Scene::new(config, &square);
        let layout = Layout::new(square.full_side(), scene.caption().measure(), config.caption_spacing);

        backend.set_target_fps(config.frame_rate);
        let square_surface = backend.create_surface(square.size()).map_err(SplashError::Backend)?;
        let logo_surface = backend.create_surface(square.size()).map_err(SplashError::Backend)?;

        tracing::debug!(
            frame_rate = config.frame_rate,
            stroke_width = config.stroke_width,
            full_side = square.full_side(),
            expected_ticks = state.total_ticks(),
            "splash animation starting"
        );

        Ok(Self {
            backend,
            scene,
            state,
            layout,
            artifacts: Artifacts::new(square_surface, logo_surface),
            ticks: 0,
        })
    }

    #[inline]
    pub const fn state(&self) -> &AnimationState { &self.state }

    #[inline]
    pub const fn layout(&self) -> &Layout { &self.layout }

    #[inline]
    pub const fn artifacts(&self) -> &Artifacts<B::Surface> { &self.artifacts }

    /// Ticks run so far.
    #[inline]
    pub const fn ticks(&self) -> u32 { self.ticks }

    /// Run one tick. Returns the outcome once the run has ended.
    pub fn tick(&mut self) -> Result<Option<Outcome>, SplashError<B::Error>> {
        let input = self.backend.poll_input();
        if input.close {
            return Ok(Some(Outcome::Closed));
        }

        let previous = self.state.phase();
        self.state = self.state.step(input.skip);
        self.ticks += 1;

        let phase = self.state.phase();
        if phase != previous {
            let early = phase != previous.next();
            tracing::debug!(tick = self.ticks, from = %previous, to = %phase, early, "phase transition");
        }
        if phase.is_done() {
            return Ok(Some(if input.skip {
                Outcome::Skipped
            } else {
                Outcome::Completed
            }));
        }

        self.bake_pending()?;
        self.layout.update(self.backend.screen_size());

        let scene = &self.scene;
        let state = &self.state;
        let layout = &self.layout;
        let artifacts = &self.artifacts;
        let mut drawn = Ok(());
        self.backend
            .draw_frame(|canvas| drawn = scene.draw(canvas, state, layout, artifacts))
            .map_err(SplashError::Backend)?;
        drawn?;

        Ok(None)
    }

    /// Tick until the run ends.
    pub fn run(mut self) -> Result<Outcome, SplashError<B::Error>> {
        loop {
            if let Some(outcome) = self.tick()? {
                tracing::info!(%outcome, ticks = self.ticks, "splash animation finished");
                return Ok(outcome);
            }
        }
    }

    fn bake_pending(&mut self) -> Result<(), SplashError<B::Error>> {
        let phase = self.state.phase();
        let square = *self.state.square();
        let scene = &self.scene;

        if phase >= Phase::RevealLetters && !self.artifacts.square().is_baked() {
            self.artifacts.bake_square(|surface| scene.bake_square(surface, &square))?;
            tracing::debug!(artifact = %self.artifacts.square().kind(), tick = self.ticks, "artifact baked");
        }
        if phase >= Phase::ZoomOut && !self.artifacts.logo().is_baked() {
            self.artifacts.bake_logo(|logo, square_surface| scene.bake_logo(logo, square_surface))?;
            tracing::debug!(artifact = %self.artifacts.logo().kind(), tick = self.ticks, "artifact baked");
        }
        Ok(())
    }
}

// =============================================================================
// Entry Points
// =============================================================================

/// Play the splash animation with `config`.
pub fn run<B: Backend>(
    backend: &mut B,
    config: &SplashConfig,
) -> Result<Outcome, SplashError<B::Error>> {
    AnimationController::new(backend, config)?.run()
}

/// Play the splash animation with the default styling at 60 ticks per second.
pub fn run_default<B: Backend>(backend: &mut B) -> Result<Outcome, SplashError<B::Error>> {
    run(backend, &SplashConfig::default())
}

/// Play the splash animation with the default styling at a custom frame rate.
pub fn run_default_with_frame_rate<B: Backend>(
    backend: &mut B,
    frame_rate: u32,
) -> Result<Outcome, SplashError<B::Error>> {
    run(backend, &SplashConfig::with_frame_rate(frame_rate))
}

#[cfg(test)]
mod tests {
    use embedded_graphics::prelude::*;

    use super::*;
    use crate::error::ConfigError;
    use crate::testing::{Call, RecordingBackend};

    const SCREEN: Size = Size::new(640, 480);

    /// Tick until `phase` is reached or the run ends.
    fn tick_until(
        controller: &mut AnimationController<'_, RecordingBackend>,
        phase: Phase,
    ) {
        while controller.state().phase() < phase {
            if controller.tick().unwrap().is_some() {
                break;
            }
        }
    }

    #[test]
    fn test_full_run_completes_in_expected_ticks() {
        let mut backend = RecordingBackend::new(SCREEN);
        let outcome = run_default(&mut backend).unwrap();

        assert_eq!(outcome, Outcome::Completed);
        assert_eq!(backend.polls, 338, "60 + 60 + 60 + 48 + 60 + 50 ticks");
        assert_eq!(backend.frames.len(), 337, "The tick reaching Done draws nothing");
        assert_eq!(backend.target_fps, Some(60));
    }

    #[test]
    fn test_custom_frame_rate_is_applied() {
        let mut backend = RecordingBackend::new(SCREEN);
        run_default_with_frame_rate(&mut backend, 30).unwrap();
        assert_eq!(backend.target_fps, Some(30));
        assert_eq!(backend.polls, 338, "Tick count does not depend on frame rate");
    }

    #[test]
    fn test_invalid_config_rejected_before_allocating() {
        let mut backend = RecordingBackend::new(SCREEN);
        let result = run_default_with_frame_rate(&mut backend, 0);
        assert!(matches!(result, Err(SplashError::Config(ConfigError::ZeroFrameRate))));
        assert_eq!(backend.surfaces_created, 0);
        assert_eq!(backend.polls, 0);
    }

    #[test]
    fn test_oversized_stroke_rejected_before_allocating() {
        for width in [256, 65_536] {
            let mut backend = RecordingBackend::new(SCREEN);
            let config = SplashConfig::default().stroke_width(width);
            let result = run(&mut backend, &config);
            assert!(
                matches!(result, Err(SplashError::Config(ConfigError::StrokeTooWide(w))) if w == width),
                "Width {width} must be rejected"
            );
            assert_eq!(backend.surfaces_created, 0);
        }
    }

    #[test]
    fn test_artifacts_baked_once_each() {
        let mut backend = RecordingBackend::new(SCREEN);
        let config = SplashConfig::default();
        let mut controller = AnimationController::new(&mut backend, &config).unwrap();

        tick_until(&mut controller, Phase::RevealLetters);
        assert_eq!(controller.artifacts().square().writes(), 1, "Square baked on entering RevealLetters");
        assert!(!controller.artifacts().logo().is_baked());

        tick_until(&mut controller, Phase::ZoomOut);
        assert_eq!(controller.artifacts().logo().writes(), 1, "Logo baked on entering ZoomOut");

        tick_until(&mut controller, Phase::Done);
        assert_eq!(controller.artifacts().square().writes(), 1);
        assert_eq!(controller.artifacts().logo().writes(), 1);
    }

    #[test]
    fn test_surfaces_released_on_completion() {
        let mut backend = RecordingBackend::new(SCREEN);
        run_default(&mut backend).unwrap();
        assert_eq!(backend.surfaces_created, 2);
        assert_eq!(backend.surfaces_dropped(), 2, "Both artifacts dropped exactly once");
    }

    #[test]
    fn test_skip_from_each_phase() {
        let starts = [1, 61, 121, 181, 229, 289];
        for (tick, phase) in starts.into_iter().zip(Phase::ALL) {
            let mut backend = RecordingBackend::new(SCREEN);
            backend.skip_on = Some(tick + 1);
            let outcome = run_default(&mut backend).unwrap();

            assert_eq!(outcome, Outcome::Skipped, "Skip during {phase}");
            assert_eq!(backend.polls, tick + 1);
            assert_eq!(backend.frames.len() as u32, tick, "No frame on the skipping tick ({phase})");
            assert_eq!(backend.surfaces_dropped(), 2, "Surfaces released after skip during {phase}");
        }
    }

    #[test]
    fn test_phase_boundaries() {
        let mut backend = RecordingBackend::new(SCREEN);
        let config = SplashConfig::default();
        let mut controller = AnimationController::new(&mut backend, &config).unwrap();
        let boundaries = [0, 60, 120, 180, 228, 288];
        for (phase, boundary) in Phase::ALL.into_iter().zip(boundaries) {
            tick_until(&mut controller, phase);
            assert_eq!(controller.ticks(), boundary, "{phase} entered after {boundary} ticks");
        }
    }

    #[test]
    fn test_skip_on_first_tick_draws_nothing() {
        let mut backend = RecordingBackend::new(SCREEN);
        backend.skip_on = Some(1);
        assert_eq!(run_default(&mut backend).unwrap(), Outcome::Skipped);
        assert!(backend.frames.is_empty());
        assert_eq!(backend.surfaces_dropped(), 2);
    }

    #[test]
    fn test_close_ends_run() {
        let mut backend = RecordingBackend::new(SCREEN);
        backend.close_on = Some(100);
        assert_eq!(run_default(&mut backend).unwrap(), Outcome::Closed);
        assert_eq!(backend.frames.len(), 99);
        assert_eq!(backend.surfaces_dropped(), 2);
    }

    #[test]
    fn test_backend_error_propagates_and_releases() {
        let mut backend = RecordingBackend::new(SCREEN);
        backend.fail_present_on = Some(5);
        let result = run_default(&mut backend);
        assert!(matches!(result, Err(SplashError::Backend(_))));
        assert_eq!(backend.frames.len(), 5);
        assert_eq!(backend.surfaces_dropped(), 2, "Surfaces released on error");
    }

    #[test]
    fn test_cached_phases_blit_instead_of_stroking() {
        let mut backend = RecordingBackend::new(SCREEN);
        run_default(&mut backend).unwrap();

        // Frames 181.. are RevealLetters and later
        for frame in &backend.frames[180..] {
            assert!(
                !frame.iter().any(|c| matches!(c, Call::FillRect(..))),
                "Cached phases must not issue stroke rectangles"
            );
            assert!(frame.iter().any(|c| matches!(c, Call::Blit { .. })));
        }
        let stroke_frames = backend.frames[..180]
            .iter()
            .filter(|f| f.iter().any(|c| matches!(c, Call::FillRect(..))))
            .count();
        assert!(stroke_frames >= 150, "Growth frames draw strokes directly");
    }

    #[test]
    fn test_layout_stable_without_resize() {
        let mut backend = RecordingBackend::new(SCREEN);
        let config = SplashConfig::default();
        let mut controller = AnimationController::new(&mut backend, &config).unwrap();
        tick_until(&mut controller, Phase::FadeOut);
        assert_eq!(controller.layout().recomputes(), 1, "Anchors computed once for a fixed window");
    }

    #[test]
    fn test_layout_follows_resize() {
        let mut backend = RecordingBackend::new(SCREEN);
        backend.sizes = vec![SCREEN; 10];
        backend.sizes.push(Size::new(800, 600));
        let config = SplashConfig::default();
        let mut controller = AnimationController::new(&mut backend, &config).unwrap();

        tick_until(&mut controller, Phase::ZoomOut);
        assert_eq!(controller.layout().recomputes(), 2);
        assert_eq!(controller.layout().logo_origin(), Point::new(272, 172));
        drop(controller);

        let camera_targets: Vec<_> = backend
            .calls()
            .filter_map(|c| match c {
                Call::BeginCamera(camera) => Some(camera.target),
                _ => None,
            })
            .collect();
        assert!(camera_targets.iter().all(|t| *t == glam::Vec2::new(400.0, 300.0)));
    }

    #[test]
    fn test_empty_wordmark_runs() {
        let mut backend = RecordingBackend::new(SCREEN);
        let config = SplashConfig::default().wordmark("");
        assert_eq!(run(&mut backend, &config).unwrap(), Outcome::Completed);
        // 60 + 60 + 60 + 1 + 60 + 50
        assert_eq!(backend.polls, 291);
    }
}
