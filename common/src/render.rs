//! Per-tick draw pass and artifact baking.
//!
//! # Draw per Phase
//!
//! | Phase | Screen |
//! |-------|--------|
//! | Blink | `s x s` dot on lit ticks |
//! | GrowTopLeft | top and left strokes |
//! | GrowRightBottom | all four strokes |
//! | RevealLetters | square artifact + wordmark prefix |
//! | ZoomOut / FadeOut | camera block: caption, then logo artifact |
//! | Done | nothing |
//!
//! The pass reads an immutable snapshot (state, layout, artifacts) and never
//! mutates animation state. Growth phases issue rectangles; every later phase
//! only blits baked artifacts plus text.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use glam::Vec2;
use micromath::F32;

use crate::backend::{Canvas, Paint, Surface};
use crate::cache::Artifacts;
use crate::config::SplashConfig;
use crate::error::CacheError;
use crate::geometry::SquareGeometry;
use crate::layout::Layout;
use crate::phase::Phase;
use crate::state::AnimationState;
use crate::text::{TextRun, draw_run};

/// Top-left of the wordmark relative to the logo origin.
///
/// The run's right and bottom edges sit half a stroke inside the inner edges
/// of the right and bottom strokes.
pub fn wordmark_offset(
    square: &SquareGeometry,
    wordmark_size: Vec2,
) -> Point {
    let s = square.stroke_width() as i32;
    let inner = square.side_no_overlap() as i32 - s / 2;
    Point::new(
        inner - F32(wordmark_size.x).round().0 as i32,
        inner - F32(wordmark_size.y).round().0 as i32,
    )
}

// =============================================================================
// Scene
// =============================================================================

/// Everything the draw pass needs that is fixed for the whole run.
#[derive(Clone, Debug)]
pub struct Scene<'a> {
    background: Rgb565,
    logo_color: Rgb565,
    wordmark: TextRun<'a>,
    wordmark_offset: Point,
    caption: TextRun<'a>,
}

impl<'a> Scene<'a> {
    pub fn new(
        config: &'a SplashConfig,
        square: &SquareGeometry,
    ) -> Self {
        let wordmark = TextRun::plain(&config.wordmark, config.wordmark_font);
        let caption = TextRun::new(
            &config.caption,
            config.resolved_caption_font(),
            config.caption_font_scale,
            config.caption_spacing,
        );
        Self {
            background: config.background,
            logo_color: config.logo_color,
            wordmark,
            wordmark_offset: wordmark_offset(square, wordmark.measure()),
            caption,
        }
    }

    #[inline]
    pub const fn wordmark(&self) -> &TextRun<'a> { &self.wordmark }

    #[inline]
    pub const fn caption(&self) -> &TextRun<'a> { &self.caption }

    #[inline]
    pub const fn wordmark_offset(&self) -> Point { self.wordmark_offset }

    /// Draw the four finished strokes into the square surface.
    pub fn bake_square<S: Surface>(
        &self,
        surface: &mut S,
        square: &SquareGeometry,
    ) {
        let style = PrimitiveStyle::with_fill(self.logo_color);
        for rect in square.strokes(Point::zero()) {
            rect.into_styled(style).draw(surface).ok();
        }
    }

    /// Composite the square and the full wordmark into the logo surface.
    pub fn bake_logo<S: Surface>(
        &self,
        logo: &mut S,
        square: &S,
    ) {
        logo.composite(square, Point::zero());
        draw_run(logo, &self.wordmark, self.wordmark_offset, self.logo_color).ok();
    }

    /// Draw one frame for `state`.
    pub fn draw<C: Canvas>(
        &self,
        canvas: &mut C,
        state: &AnimationState,
        layout: &Layout,
        artifacts: &Artifacts<C::Surface>,
    ) -> Result<(), CacheError> {
        let phase = state.phase();
        if phase.is_done() {
            return Ok(());
        }

        canvas.clear(self.background);
        let origin = layout.logo_origin();
        let square = state.square();

        if phase.uses_camera() {
            let logo = artifacts.logo().get()?;
            let fade = state.fade_alpha();
            let caption_paint = Paint::with_alpha(self.logo_color, state.caption_alpha() * fade);

            canvas.with_camera(&layout.camera(state.zoom()), |canvas| {
                canvas.draw_text(&self.caption, layout.caption_origin(), caption_paint);
                canvas.draw_surface(logo, origin, fade);
            });
            return Ok(());
        }

        match phase {
            Phase::Blink => {
                if state.blink_visible() {
                    let side = square.stroke_width();
                    canvas.fill_rect(Rectangle::new(origin, Size::new(side, side)), self.logo_color);
                }
            }
            Phase::GrowTopLeft => {
                for rect in square.top_left_strokes(origin) {
                    canvas.fill_rect(rect, self.logo_color);
                }
            }
            Phase::GrowRightBottom => {
                for rect in square.strokes(origin) {
                    canvas.fill_rect(rect, self.logo_color);
                }
            }
            Phase::RevealLetters => {
                canvas.draw_surface(artifacts.square().get()?, origin, 1.0);
                let text_origin = origin + self.wordmark_offset;
                canvas.draw_text(
                    &self.wordmark.prefix(state.letters()),
                    Vec2::new(text_origin.x as f32, text_origin.y as f32),
                    Paint::opaque(self.logo_color),
                );
            }
            Phase::ZoomOut | Phase::FadeOut | Phase::Done => {}
        }
        Ok(())
    }
}
