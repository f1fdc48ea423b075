//! Timeline phases of the splash animation.
//!
//! # Phases
//!
//! - [`Phase::Blink`]: Small dot blinking
//! - [`Phase::GrowTopLeft`]: Top and left sides growing out of the dot
//! - [`Phase::GrowRightBottom`]: Right and bottom sides completing the square
//! - [`Phase::RevealLetters`]: Wordmark appearing one letter at a time
//! - [`Phase::ZoomOut`]: Camera zooms out while the caption fades in
//! - [`Phase::FadeOut`]: Logo and caption fade to the background
//! - [`Phase::Done`]: Terminal, nothing is drawn
//!
//! Phases only move forward. The skip signal is the one exception: it jumps
//! straight to [`Phase::Done`] from anywhere.

use core::fmt;

/// Discriminant of the animation stage, without per-phase counters.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Debug)]
pub enum Phase {
    #[default]
    Blink,
    GrowTopLeft,
    GrowRightBottom,
    RevealLetters,
    ZoomOut,
    FadeOut,
    Done,
}

impl Phase {
    /// All phases in timeline order.
    pub const ALL: [Self; 7] = [
        Self::Blink,
        Self::GrowTopLeft,
        Self::GrowRightBottom,
        Self::RevealLetters,
        Self::ZoomOut,
        Self::FadeOut,
        Self::Done,
    ];

    /// The phase that follows this one on the normal timeline.
    ///
    /// `Done` is terminal and returns itself.
    #[inline]
    pub const fn next(self) -> Self {
        match self {
            Self::Blink => Self::GrowTopLeft,
            Self::GrowTopLeft => Self::GrowRightBottom,
            Self::GrowRightBottom => Self::RevealLetters,
            Self::RevealLetters => Self::ZoomOut,
            Self::ZoomOut => Self::FadeOut,
            Self::FadeOut | Self::Done => Self::Done,
        }
    }

    #[inline]
    pub const fn is_done(self) -> bool { matches!(self, Self::Done) }

    /// Whether this phase draws inside the zoom camera.
    #[inline]
    pub const fn uses_camera(self) -> bool { matches!(self, Self::ZoomOut | Self::FadeOut) }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Blink => "blink",
            Self::GrowTopLeft => "grow-top-left",
            Self::GrowRightBottom => "grow-right-bottom",
            Self::RevealLetters => "reveal-letters",
            Self::ZoomOut => "zoom-out",
            Self::FadeOut => "fade-out",
            Self::Done => "done",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.name())
    }
}
