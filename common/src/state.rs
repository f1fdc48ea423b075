//! Frame-driven state machine for the splash animation.
//!
//! # Timeline
//!
//! | Stage | Advance rule | Exit |
//! |-------|--------------|------|
//! | Blink | `frames += 1` | `frames == 60` |
//! | GrowTopLeft | top, left `+= rate` | top reaches full side |
//! | GrowRightBottom | right `+= rate`, bottom too unless completing | right reaches `S - s` |
//! | RevealLetters | `frames += 1`, every 8th tick `letters += 1` | all letters shown |
//! | ZoomOut | zoom `-= 0.0025`, then caption alpha `+= 0.02` (max 1) unless exiting | zoom `<= 0.85` |
//! | FadeOut | fade alpha `-= 0.02` | fade alpha `<= 0` |
//! | Done | nothing | terminal |
//!
//! Every stage has its own step function returning the next state, so
//! [`AnimationState::step`] is a plain dispatch and each stage can be driven
//! on its own in tests. The skip signal is checked before dispatch and jumps
//! straight to `Done`.
//!
//! The state is `Copy` and stepping is pure: no rendering collaborator is
//! involved. Baking the cached artifacts and drawing happen elsewhere, driven
//! by the phase this module reports.

use crate::config::{
    ALPHA_OPAQUE,
    BLINK_FRAMES,
    BLINK_TOGGLE_FRAMES,
    CAPTION_ALPHA_STEP,
    FADE_ALPHA_STEP,
    FRAMES_PER_LETTER,
    ZOOM_FLOOR,
    ZOOM_ONE,
    ZOOM_STEP,
};
use crate::geometry::SquareGeometry;
use crate::phase::Phase;

// =============================================================================
// Stage
// =============================================================================

/// Current stage with the counters only that stage uses.
///
/// Counters are created at zero when their stage is entered.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Stage {
    /// Dot blinking; `frames` counts ticks spent blinking.
    Blink { frames: u32 },
    GrowTopLeft,
    GrowRightBottom,
    /// `frames` counts ticks since the last letter appeared.
    RevealLetters { frames: u32 },
    ZoomOut,
    FadeOut,
    Done,
}

impl Stage {
    #[inline]
    pub const fn phase(&self) -> Phase {
        match self {
            Self::Blink { .. } => Phase::Blink,
            Self::GrowTopLeft => Phase::GrowTopLeft,
            Self::GrowRightBottom => Phase::GrowRightBottom,
            Self::RevealLetters { .. } => Phase::RevealLetters,
            Self::ZoomOut => Phase::ZoomOut,
            Self::FadeOut => Phase::FadeOut,
            Self::Done => Phase::Done,
        }
    }
}

// =============================================================================
// Animation State
// =============================================================================

/// Full animation state: stage, square geometry, letters, camera zoom and alphas.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct AnimationState {
    stage: Stage,
    square: SquareGeometry,
    /// Letters of the wordmark revealed so far.
    letters: usize,
    wordmark_len: usize,
    /// Camera zoom in ten-thousandths.
    zoom: u32,
    /// Caption alpha in percent.
    caption_alpha: u8,
    /// Whole-logo alpha in percent.
    fade_alpha: u8,
}

impl AnimationState {
    /// Initial state: blinking dot, zoom 1.0, caption hidden, logo opaque.
    ///
    /// `wordmark_len` is the number of characters (not bytes) in the wordmark.
    pub const fn new(
        stroke_width: u32,
        wordmark_len: usize,
    ) -> Self {
        Self {
            stage: Stage::Blink { frames: 0 },
            square: SquareGeometry::new(stroke_width),
            letters: 0,
            wordmark_len,
            zoom: ZOOM_ONE,
            caption_alpha: 0,
            fade_alpha: ALPHA_OPAQUE,
        }
    }

    #[inline]
    pub const fn stage(&self) -> Stage { self.stage }

    #[inline]
    pub const fn phase(&self) -> Phase { self.stage.phase() }

    #[inline]
    pub const fn square(&self) -> &SquareGeometry { &self.square }

    #[inline]
    pub const fn letters(&self) -> usize { self.letters }

    /// Camera zoom; starts at 1.0 and only decreases.
    #[inline]
    pub fn zoom(&self) -> f32 { self.zoom as f32 / ZOOM_ONE as f32 }

    /// Raw zoom in ten-thousandths.
    #[inline]
    pub const fn zoom_units(&self) -> u32 { self.zoom }

    #[inline]
    pub fn caption_alpha(&self) -> f32 { f32::from(self.caption_alpha) / f32::from(ALPHA_OPAQUE) }

    #[inline]
    pub fn fade_alpha(&self) -> f32 { f32::from(self.fade_alpha) / f32::from(ALPHA_OPAQUE) }

    /// Whether the dot is lit on this blink tick (toggles every 15 ticks, starts dark).
    pub const fn blink_visible(&self) -> bool {
        match self.stage {
            Stage::Blink { frames } => (frames / BLINK_TOGGLE_FRAMES) % 2 == 1,
            _ => false,
        }
    }

    /// Ticks a full run takes from this initial state, summed per phase.
    pub const fn total_ticks(&self) -> u32 {
        let reveal = if self.wordmark_len == 0 {
            1
        } else {
            (self.wordmark_len as u32).saturating_mul(FRAMES_PER_LETTER)
        };
        BLINK_FRAMES
            .saturating_add(self.square.top_left_ticks())
            .saturating_add(self.square.right_bottom_ticks())
            .saturating_add(reveal)
            .saturating_add((ZOOM_ONE - ZOOM_FLOOR).div_ceil(ZOOM_STEP))
            .saturating_add((ALPHA_OPAQUE as u32).div_ceil(FADE_ALPHA_STEP as u32))
    }

    /// Advance one tick.
    ///
    /// A skip request forces `Done` before any stage logic runs.
    #[must_use]
    pub fn step(
        self,
        skip: bool,
    ) -> Self {
        if skip {
            return self.finish();
        }
        match self.stage {
            Stage::Blink { frames } => self.step_blink(frames),
            Stage::GrowTopLeft => self.step_grow_top_left(),
            Stage::GrowRightBottom => self.step_grow_right_bottom(),
            Stage::RevealLetters { frames } => self.step_reveal_letters(frames),
            Stage::ZoomOut => self.step_zoom_out(),
            Stage::FadeOut => self.step_fade_out(),
            Stage::Done => self,
        }
    }

    /// Jump to `Done`, keeping every other field as it was.
    #[must_use]
    pub const fn finish(mut self) -> Self {
        self.stage = Stage::Done;
        self
    }

    // -------------------------------------------------------------------------
    // Per-stage step functions
    // -------------------------------------------------------------------------

    fn step_blink(
        mut self,
        frames: u32,
    ) -> Self {
        let frames = frames + 1;
        self.stage = if frames == BLINK_FRAMES {
            Stage::GrowTopLeft
        } else {
            Stage::Blink { frames }
        };
        self
    }

    fn step_grow_top_left(mut self) -> Self {
        if self.square.grow_top_left() {
            self.stage = Stage::GrowRightBottom;
        }
        self
    }

    fn step_grow_right_bottom(mut self) -> Self {
        if self.square.grow_right_bottom() {
            self.stage = Stage::RevealLetters { frames: 0 };
        }
        self
    }

    fn step_reveal_letters(
        mut self,
        frames: u32,
    ) -> Self {
        let mut frames = frames + 1;
        if frames == FRAMES_PER_LETTER {
            self.letters += 1;
            frames = 0;
        }
        self.stage = if self.letters >= self.wordmark_len {
            Stage::ZoomOut
        } else {
            Stage::RevealLetters { frames }
        };
        self
    }

    fn step_zoom_out(mut self) -> Self {
        self.zoom = self.zoom.saturating_sub(ZOOM_STEP);
        // Caption alpha holds on the tick that leaves the stage
        if self.zoom <= ZOOM_FLOOR {
            self.stage = Stage::FadeOut;
        } else {
            self.caption_alpha = (self.caption_alpha + CAPTION_ALPHA_STEP).min(ALPHA_OPAQUE);
        }
        self
    }

    fn step_fade_out(mut self) -> Self {
        self.fade_alpha = self.fade_alpha.saturating_sub(FADE_ALPHA_STEP);
        if self.fade_alpha == 0 {
            self.stage = Stage::Done;
        }
        self
    }
}

/// Advance `state` by `elapsed_ticks` ticks.
///
/// `skip` is observed at the top of the first tick, so a skip request always
/// lands on `Done` even when `elapsed_ticks` is zero.
#[must_use]
pub fn advance(
    state: AnimationState,
    elapsed_ticks: u32,
    skip: bool,
) -> AnimationState {
    if skip {
        return state.finish();
    }
    (0..elapsed_ticks).fold(state, |state, _| state.step(false))
}

// =============================================================================
// Unit Tests
// =============================================================================
