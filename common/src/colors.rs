//! Color constants and alpha blending for the splash animation.
//!
//! # Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! - Red: 0-31 (5 bits)
//! - Green: 0-63 (6 bits)
//! - Blue: 0-31 (5 bits)
//!
//! # Alpha
//!
//! Rgb565 has no alpha channel. Transparency is applied at draw time by
//! blending the draw color into the pixel already on the destination with
//! [`fade`]. Cached artifacts are therefore stored fully opaque and the same
//! bitmap serves every alpha value.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};
use embedded_graphics::prelude::IntoStorage;

// =============================================================================
// Standard Colors
// =============================================================================

/// Pure black (0, 0, 0). Default logo color.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31).
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Off-white default background, (245, 245, 245) quantized to RGB565.
pub const RAYWHITE: Rgb565 = Rgb565::new(30, 61, 30);

// =============================================================================
// Blending
// =============================================================================

/// Blend `src` over `dst` with the given opacity.
///
/// Uses integer math with 8-bit fixed-point for the interpolation factor.
/// `alpha` is clamped to `0.0..=1.0`; `0.0` keeps `dst`, `1.0` yields `src`.
pub fn fade(
    dst: Rgb565,
    src: Rgb565,
    alpha: f32,
) -> Rgb565 {
    let t_fixed = (alpha.clamp(0.0, 1.0) * 256.0) as i32;
    if t_fixed == 0 {
        return dst;
    }
    if t_fixed >= 256 {
        return src;
    }

    let (dst_r, dst_g, dst_b) = channels(dst);
    let (src_r, src_g, src_b) = channels(src);

    let mix = |from: i32, to: i32| -> i32 { from + (((to - from) * t_fixed) >> 8) };

    let r = mix(dst_r, src_r).clamp(0, 31) as u8;
    let g = mix(dst_g, src_g).clamp(0, 63) as u8;
    let b = mix(dst_b, src_b).clamp(0, 31) as u8;

    Rgb565::new(r, g, b)
}

/// Split a color into its raw 5/6/5-bit channels.
#[inline]
fn channels(color: Rgb565) -> (i32, i32, i32) {
    let raw = color.into_storage();
    (
        i32::from((raw >> 11) & 0x1F),
        i32::from((raw >> 5) & 0x3F),
        i32::from(raw & 0x1F),
    )
}
