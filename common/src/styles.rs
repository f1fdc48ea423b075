//! Built-in fonts for the wordmark and the caption.
//!
//! Both are `embedded-graphics` mono fonts, so glyph metrics are fixed and
//! text extents can be measured without touching the renderer (see
//! [`crate::text`]).

use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::mono_font::ascii::FONT_6X10;
use profont::PROFONT_24_POINT;

/// Caption font used when no override is configured (6x10 pixels, meant to
/// be scaled up by the caption scale factor).
pub const DEFAULT_CAPTION_FONT: &MonoFont = &FONT_6X10;

/// Wordmark font (`ProFont` 24pt). Drawn unscaled inside the square.
pub const DEFAULT_WORDMARK_FONT: &MonoFont = &PROFONT_24_POINT;
