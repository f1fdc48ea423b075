//! Monospace text runs: measurement and per-glyph placement.
//!
//! Measurement is done here from [`MonoFont`] metrics so that layout does not
//! depend on the backend. A run advances by `(glyph width + font character
//! spacing) * scale + extra spacing` per character. The extra spacing is in
//! output pixels and is not scaled.
//!
//! Backends render glyphs at the offsets [`TextRun::glyphs`] yields; the
//! unscaled [`draw_run`] helper covers any `DrawTarget`.

use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};
use glam::Vec2;
use micromath::F32;

/// A string laid out with one font, scale and letter spacing.
#[derive(Clone, Copy, Debug)]
pub struct TextRun<'a> {
    text: &'a str,
    font: &'a MonoFont<'a>,
    scale: f32,
    spacing: f32,
}

impl<'a> TextRun<'a> {
    pub const fn new(
        text: &'a str,
        font: &'a MonoFont<'a>,
        scale: f32,
        spacing: f32,
    ) -> Self {
        Self {
            text,
            font,
            scale,
            spacing,
        }
    }

    /// Unscaled run with the font's own spacing only.
    pub const fn plain(
        text: &'a str,
        font: &'a MonoFont<'a>,
    ) -> Self {
        Self::new(text, font, 1.0, 0.0)
    }

    #[inline]
    pub const fn text(&self) -> &'a str { self.text }

    #[inline]
    pub const fn font(&self) -> &'a MonoFont<'a> { self.font }

    #[inline]
    pub const fn scale(&self) -> f32 { self.scale }

    #[inline]
    pub const fn spacing(&self) -> f32 { self.spacing }

    /// Number of characters (not bytes).
    pub fn len(&self) -> usize { self.text.chars().count() }

    pub fn is_empty(&self) -> bool { self.text.is_empty() }

    /// Horizontal distance from one glyph origin to the next.
    pub fn advance(&self) -> f32 {
        let glyph = self.font.character_size.width + self.font.character_spacing;
        glyph as f32 * self.scale + self.spacing
    }

    /// Size of one scaled glyph cell.
    pub fn glyph_size(&self) -> Vec2 {
        let size = self.font.character_size;
        Vec2::new(size.width as f32, size.height as f32) * self.scale
    }

    /// Bounding size of the whole run. Trailing spacing is not counted.
    pub fn measure(&self) -> Vec2 {
        let count = self.len();
        let height = self.glyph_size().y;
        if count == 0 {
            return Vec2::new(0.0, height);
        }
        let width = (count - 1) as f32 * self.advance() + self.glyph_size().x;
        Vec2::new(width, height)
    }

    /// Each character with its top-left offset from the run origin.
    pub fn glyphs(&self) -> impl Iterator<Item = (char, Vec2)> + 'a {
        let advance = self.advance();
        self.text
            .chars()
            .enumerate()
            .map(move |(i, ch)| (ch, Vec2::new(i as f32 * advance, 0.0)))
    }

    /// The first `chars` characters with the same styling.
    pub fn prefix(
        &self,
        chars: usize,
    ) -> Self {
        let end = self
            .text
            .char_indices()
            .nth(chars)
            .map_or(self.text.len(), |(index, _)| index);
        Self {
            text: &self.text[..end],
            ..*self
        }
    }
}

/// Draw `run` unscaled into any target, one glyph at a time, top-aligned at `origin`.
///
/// The run's scale is ignored; extra spacing is rounded to whole pixels.
pub fn draw_run<D>(
    target: &mut D,
    run: &TextRun<'_>,
    origin: Point,
    color: Rgb565,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let style = MonoTextStyle::new(run.font(), color);
    let unscaled = TextRun::new(run.text(), run.font(), 1.0, F32(run.spacing()).round().0);

    for (ch, offset) in unscaled.glyphs() {
        let mut char_buf = [0u8; 4];
        let char_str = ch.encode_utf8(&mut char_buf);
        let position = origin + Point::new(offset.x as i32, offset.y as i32);

        Text::with_baseline(char_str, position, style, Baseline::Top).draw(target)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use embedded_graphics::mono_font::ascii::FONT_6X10;

    use super::*;
    use crate::colors::BLACK;
    use crate::testing::TestSurface;

    #[test]
    fn test_measure_scaled_caption() {
        let run = TextRun::new("powered by", &FONT_6X10, 3.0, 8.0);
        assert_eq!(run.len(), 10);
        assert_eq!(run.advance(), 26.0, "6 * 3 + 8");
        // 9 advances plus one glyph width
        assert_eq!(run.measure(), Vec2::new(252.0, 30.0));
    }

    #[test]
    fn test_measure_includes_font_spacing() {
        let font = &profont::PROFONT_12_POINT;
        let run = TextRun::plain("ab", font);
        let glyph = font.character_size.width as f32;
        let spacing = font.character_spacing as f32;
        assert_eq!(run.measure().x, 2.0 * glyph + spacing);
    }

    #[test]
    fn test_measure_empty() {
        let run = TextRun::plain("", &FONT_6X10);
        assert!(run.is_empty());
        assert_eq!(run.measure(), Vec2::new(0.0, 10.0), "Empty run keeps its line height");
    }

    #[test]
    fn test_glyph_offsets() {
        let run = TextRun::new("abc", &FONT_6X10, 2.0, 1.0);
        let offsets: Vec<_> = run.glyphs().collect();
        assert_eq!(
            offsets,
            vec![
                ('a', Vec2::new(0.0, 0.0)),
                ('b', Vec2::new(13.0, 0.0)),
                ('c', Vec2::new(26.0, 0.0)),
            ]
        );
    }

    #[test]
    fn test_prefix_counts_chars() {
        let run = TextRun::plain("raylib", &FONT_6X10);
        assert_eq!(run.prefix(0).text(), "");
        assert_eq!(run.prefix(3).text(), "ray");
        assert_eq!(run.prefix(6).text(), "raylib");
        assert_eq!(run.prefix(99).text(), "raylib", "Prefix past the end is the whole run");

        let wide = TextRun::plain("héllo", &FONT_6X10);
        assert_eq!(wide.prefix(2).text(), "hé", "Prefix must not split a multi-byte char");
    }

    #[test]
    fn test_draw_run_writes_pixels_inside_cells() {
        let mut surface = TestSurface::new(Size::new(20, 12));
        let run = TextRun::plain("HI", &FONT_6X10);
        draw_run(&mut surface, &run, Point::new(1, 1), BLACK).unwrap();

        let lit = surface.lit_points();
        assert!(!lit.is_empty(), "Glyphs must produce pixels");
        assert!(lit.iter().all(|p| p.x >= 1 && p.x < 13 && p.y >= 1 && p.y < 11));
        assert!(lit.iter().any(|p| p.x < 7), "First glyph drawn");
        assert!(lit.iter().any(|p| p.x >= 7), "Second glyph drawn");
    }
}
