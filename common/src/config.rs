//! Animation timing constants and the caller-facing [`SplashConfig`].
//!
//! # Pre-computed Timing Constants
//!
//! Every phase threshold is a frame count, not a wall-clock duration. The
//! animation's pacing is therefore tied to the configured frame rate and a run
//! is fully deterministic for a given configuration.
//!
//! # Fixed-Point Zoom and Alpha
//!
//! Zoom is tracked in ten-thousandths and alphas in percent, so the
//! `0.0025` zoom step, the `0.02` alpha steps and the `0.85` / `0.0`
//! thresholds are exact integer comparisons. Float accumulation would make
//! the phase length drift by a tick depending on rounding.

use alloc::string::String;
use core::fmt;

use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::pixelcolor::Rgb565;

use crate::colors::{BLACK, RAYWHITE};
use crate::error::ConfigError;
use crate::styles::{DEFAULT_CAPTION_FONT, DEFAULT_WORDMARK_FONT};

// =============================================================================
// Phase Timing
// =============================================================================

/// Ticks spent blinking the dot before the square starts growing.
pub const BLINK_FRAMES: u32 = 60;

/// The dot toggles visibility every this many ticks.
pub const BLINK_TOGGLE_FRAMES: u32 = 15;

/// One wordmark letter is revealed every this many ticks.
pub const FRAMES_PER_LETTER: u32 = 8;

/// Growth per tick is `stroke_width / GROWTH_DIVISOR` (truncating).
pub const GROWTH_DIVISOR: u32 = 4;

/// Smallest stroke width with a non-zero growth rate.
pub const MIN_STROKE_WIDTH: u32 = GROWTH_DIVISOR;

/// Largest accepted stroke width.
///
/// The square side is the stroke width squared and each artifact surface is
/// a full square, so 64 gives 4096 px sides and 4096 x 4096 surfaces.
pub const MAX_STROKE_WIDTH: u32 = 64;

// =============================================================================
// Fixed-Point Camera and Alpha
// =============================================================================

/// Zoom of 1.0 in ten-thousandths.
pub const ZOOM_ONE: u32 = 10_000;

/// Zoom decrement per tick (0.0025).
pub const ZOOM_STEP: u32 = 25;

/// ZoomOut ends on the first tick at or below this zoom (0.85).
pub const ZOOM_FLOOR: u32 = 8_500;

/// Fully opaque alpha in percent.
pub const ALPHA_OPAQUE: u8 = 100;

/// Caption alpha increment per tick (0.02).
pub const CAPTION_ALPHA_STEP: u8 = 2;

/// Fade-out alpha decrement per tick (0.02).
pub const FADE_ALPHA_STEP: u8 = 2;

// =============================================================================
// Default Styling
// =============================================================================

/// Default ticks per second.
pub const DEFAULT_FRAME_RATE: u32 = 60;

/// Default stroke width; the square side is its square (256 px).
pub const DEFAULT_STROKE_WIDTH: u32 = 16;

/// Default caption glyph scale factor.
pub const DEFAULT_CAPTION_SCALE: f32 = 3.0;

/// Default extra caption letter spacing in pixels.
pub const DEFAULT_CAPTION_SPACING: f32 = 8.0;

/// Wordmark revealed inside the square.
pub const DEFAULT_WORDMARK: &str = "raylib";

/// Caption faded in above the logo during zoom-out.
pub const DEFAULT_CAPTION: &str = "powered by";

// =============================================================================
// Splash Configuration
// =============================================================================

/// Every caller-supplied animation parameter.
///
/// [`Default`] gives the stock styling: 60 ticks per second, black logo on an
/// off-white background, 16 px strokes and a 3x scaled built-in caption font.
#[derive(Clone)]
pub struct SplashConfig {
    /// Ticks per second; drives every frame-counted threshold.
    pub frame_rate: u32,
    pub background: Rgb565,
    pub logo_color: Rgb565,
    /// Square stroke width; drives geometry and total duration.
    pub stroke_width: u32,
    /// Caption font override. `None` falls back to [`DEFAULT_CAPTION_FONT`].
    pub caption_font: Option<&'static MonoFont<'static>>,
    pub caption_font_scale: f32,
    /// Extra horizontal gap between caption glyphs, in screen pixels.
    pub caption_spacing: f32,
    pub wordmark: String,
    pub wordmark_font: &'static MonoFont<'static>,
    pub caption: String,
}

impl SplashConfig {
    /// Default styling paced at a custom frame rate.
    pub fn with_frame_rate(frame_rate: u32) -> Self {
        Self {
            frame_rate,
            ..Self::default()
        }
    }

    pub fn background(
        mut self,
        color: Rgb565,
    ) -> Self {
        self.background = color;
        self
    }

    pub fn logo_color(
        mut self,
        color: Rgb565,
    ) -> Self {
        self.logo_color = color;
        self
    }

    pub fn stroke_width(
        mut self,
        width: u32,
    ) -> Self {
        self.stroke_width = width;
        self
    }

    pub fn caption_font(
        mut self,
        font: Option<&'static MonoFont<'static>>,
    ) -> Self {
        self.caption_font = font;
        self
    }

    pub fn caption_font_scale(
        mut self,
        scale: f32,
    ) -> Self {
        self.caption_font_scale = scale;
        self
    }

    pub fn caption_spacing(
        mut self,
        spacing: f32,
    ) -> Self {
        self.caption_spacing = spacing;
        self
    }

    pub fn wordmark(
        mut self,
        text: impl Into<String>,
    ) -> Self {
        self.wordmark = text.into();
        self
    }

    pub fn wordmark_font(
        mut self,
        font: &'static MonoFont<'static>,
    ) -> Self {
        self.wordmark_font = font;
        self
    }

    pub fn caption(
        mut self,
        text: impl Into<String>,
    ) -> Self {
        self.caption = text.into();
        self
    }

    /// Caption font after applying the built-in fallback.
    #[inline]
    pub fn resolved_caption_font(&self) -> &'static MonoFont<'static> {
        self.caption_font.unwrap_or(DEFAULT_CAPTION_FONT)
    }

    /// Reject parameters that would stall or break the animation.
    ///
    /// Stroke widths that are not a multiple of [`GROWTH_DIVISOR`] are
    /// accepted: growth is clamped at the target extents so the square still
    /// converges, only the final growth step is shorter.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.frame_rate == 0 {
            return Err(ConfigError::ZeroFrameRate);
        }
        if self.stroke_width < MIN_STROKE_WIDTH {
            return Err(ConfigError::StrokeTooThin(self.stroke_width));
        }
        if self.stroke_width > MAX_STROKE_WIDTH {
            return Err(ConfigError::StrokeTooWide(self.stroke_width));
        }
        if !self.caption_font_scale.is_finite() || self.caption_font_scale <= 0.0 {
            return Err(ConfigError::InvalidCaptionScale(self.caption_font_scale));
        }
        if !self.stroke_width.is_multiple_of(GROWTH_DIVISOR) {
            tracing::warn!(
                stroke_width = self.stroke_width,
                "stroke width is not a multiple of {GROWTH_DIVISOR}; last growth step will be clamped"
            );
        }
        Ok(())
    }
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self {
            frame_rate: DEFAULT_FRAME_RATE,
            background: RAYWHITE,
            logo_color: BLACK,
            stroke_width: DEFAULT_STROKE_WIDTH,
            caption_font: None,
            caption_font_scale: DEFAULT_CAPTION_SCALE,
            caption_spacing: DEFAULT_CAPTION_SPACING,
            wordmark: DEFAULT_WORDMARK.into(),
            wordmark_font: DEFAULT_WORDMARK_FONT,
            caption: DEFAULT_CAPTION.into(),
        }
    }
}

impl fmt::Debug for SplashConfig {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_struct("SplashConfig")
            .field("frame_rate", &self.frame_rate)
            .field("background", &self.background)
            .field("logo_color", &self.logo_color)
            .field("stroke_width", &self.stroke_width)
            .field("custom_caption_font", &self.caption_font.is_some())
            .field("caption_font_scale", &self.caption_font_scale)
            .field("caption_spacing", &self.caption_spacing)
            .field("wordmark", &self.wordmark)
            .field("caption", &self.caption)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SplashConfig::default();
        assert_eq!(config.frame_rate, 60);
        assert_eq!(config.stroke_width, 16);
        assert_eq!(config.background, RAYWHITE);
        assert_eq!(config.logo_color, BLACK);
        assert!(config.caption_font.is_none(), "Default uses the built-in caption font");
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_with_frame_rate_keeps_styling() {
        let config = SplashConfig::with_frame_rate(30);
        assert_eq!(config.frame_rate, 30);
        assert_eq!(config.stroke_width, DEFAULT_STROKE_WIDTH);
        assert_eq!(config.wordmark, DEFAULT_WORDMARK);
    }

    #[test]
    fn test_zero_frame_rate_rejected() {
        let config = SplashConfig::with_frame_rate(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroFrameRate));
    }

    #[test]
    fn test_thin_stroke_rejected() {
        let config = SplashConfig::default().stroke_width(3);
        assert_eq!(config.validate(), Err(ConfigError::StrokeTooThin(3)));
    }

    #[test]
    fn test_wide_stroke_rejected() {
        let config = SplashConfig::default().stroke_width(MAX_STROKE_WIDTH);
        assert_eq!(config.validate(), Ok(()), "Upper bound is inclusive");

        for width in [MAX_STROKE_WIDTH + 1, 256, 65_536, u32::MAX] {
            let config = SplashConfig::default().stroke_width(width);
            assert_eq!(config.validate(), Err(ConfigError::StrokeTooWide(width)), "Width {width}");
        }
    }

    #[test]
    fn test_max_stroke_surface_fits() {
        let side = u64::from(MAX_STROKE_WIDTH).pow(2);
        assert!(side <= i32::MAX as u64, "Square side must fit screen coordinates");
        assert!(side * side <= u64::from(u32::MAX), "Surface pixel count must fit u32");
    }

    #[test]
    fn test_non_multiple_of_four_accepted() {
        let config = SplashConfig::default().stroke_width(10);
        assert_eq!(config.validate(), Ok(()), "Truncating growth is clamped, not rejected");
    }

    #[test]
    fn test_bad_caption_scale_rejected() {
        let config = SplashConfig::default().caption_font_scale(0.0);
        assert_eq!(config.validate(), Err(ConfigError::InvalidCaptionScale(0.0)));

        let config = SplashConfig::default().caption_font_scale(f32::NAN);
        assert!(config.validate().is_err(), "NaN scale must be rejected");
    }

    #[test]
    fn test_caption_font_fallback() {
        let config = SplashConfig::default();
        assert_eq!(
            config.resolved_caption_font().character_size,
            DEFAULT_CAPTION_FONT.character_size,
            "Missing override falls back to the built-in font"
        );

        let custom = SplashConfig::default().caption_font(Some(&profont::PROFONT_12_POINT));
        assert_eq!(
            custom.resolved_caption_font().character_size,
            profont::PROFONT_12_POINT.character_size,
            "Override is used as-is"
        );
        assert_ne!(
            custom.resolved_caption_font().character_size,
            DEFAULT_CAPTION_FONT.character_size
        );
    }

    #[test]
    fn test_zoom_constants_consistent() {
        // 0.15 of zoom travel at 0.0025 per tick
        assert_eq!((ZOOM_ONE - ZOOM_FLOOR) / ZOOM_STEP, 60);
        assert_eq!(ALPHA_OPAQUE / FADE_ALPHA_STEP, 50);
    }
}
