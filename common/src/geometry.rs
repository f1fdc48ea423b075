//! Square outline geometry that grows out of the blinking dot.
//!
//! # Layout (stroke width `s`, full side `S = s * s`)
//!
//! ```text
//!  (0,0) ┌──────────── top (S x s) ─────────────┐
//!        │                                      │
//!   left │                                      │ right
//! (s x L)│                                      │ (s x R), at x = S - s
//!        │                                      │
//!        └───── bottom (B x s), at y = S - s ───┘
//! ```
//!
//! The top side starts as the `s x s` dot. Top and left grow together first,
//! then right and bottom. On the tick that completes the right side the
//! bottom side does not grow, so the two strokes do not meet twice at the
//! shared corner.
//!
//! Growth per tick is `s / 4` with integer division. Extents are clamped at
//! their targets, so stroke widths that are not a multiple of four still
//! converge to exactly `S` / `S - s`. Widths below four would truncate to a
//! zero rate; the rate is floored at one pixel per tick so growth always
//! terminates, even for a configuration that skipped validation.
//!
//! Extents use saturating arithmetic: an unvalidated stroke width whose
//! square does not fit in `u32` gives a degenerate outline, not a panic.

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

use crate::config::GROWTH_DIVISOR;

/// Current extents of the four square strokes, in pixels.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SquareGeometry {
    stroke_width: u32,
    growth_rate: u32,
    full_side: u32,
    side_no_overlap: u32,
    top: u32,
    left: u32,
    right: u32,
    bottom: u32,
}

impl SquareGeometry {
    /// Start from the dot: top extent equals the stroke width, the rest are empty.
    pub const fn new(stroke_width: u32) -> Self {
        let full_side = stroke_width.saturating_mul(stroke_width);
        let growth_rate = stroke_width / GROWTH_DIVISOR;
        Self {
            stroke_width,
            growth_rate: if growth_rate == 0 { 1 } else { growth_rate },
            full_side,
            side_no_overlap: full_side.saturating_sub(stroke_width),
            top: stroke_width,
            left: 0,
            right: 0,
            bottom: 0,
        }
    }

    #[inline]
    pub const fn stroke_width(&self) -> u32 { self.stroke_width }

    #[inline]
    pub const fn growth_rate(&self) -> u32 { self.growth_rate }

    #[inline]
    pub const fn full_side(&self) -> u32 { self.full_side }

    #[inline]
    pub const fn side_no_overlap(&self) -> u32 { self.side_no_overlap }

    #[inline]
    pub const fn top(&self) -> u32 { self.top }

    #[inline]
    pub const fn left(&self) -> u32 { self.left }

    #[inline]
    pub const fn right(&self) -> u32 { self.right }

    #[inline]
    pub const fn bottom(&self) -> u32 { self.bottom }

    /// Grow the top and left sides by one step.
    ///
    /// Returns `true` on the tick the top side reaches the full side.
    pub fn grow_top_left(&mut self) -> bool {
        self.top = self.top.saturating_add(self.growth_rate).min(self.full_side);
        self.left = self.left.saturating_add(self.growth_rate).min(self.side_no_overlap);
        self.top == self.full_side
    }

    /// Grow the right side, and the bottom side unless this step completes the square.
    ///
    /// Returns `true` on the tick the right side reaches its final length.
    pub fn grow_right_bottom(&mut self) -> bool {
        self.right = self.right.saturating_add(self.growth_rate).min(self.side_no_overlap);
        if self.is_complete() {
            return true;
        }
        self.bottom = self.bottom.saturating_add(self.growth_rate).min(self.side_no_overlap);
        false
    }

    /// Whether the outline has reached its final shape.
    #[inline]
    pub const fn is_complete(&self) -> bool { self.right == self.side_no_overlap }

    /// Ticks `GrowTopLeft` takes from the initial dot. Always at least one.
    pub const fn top_left_ticks(&self) -> u32 {
        let ticks = self.side_no_overlap.div_ceil(self.growth_rate);
        if ticks == 0 { 1 } else { ticks }
    }

    /// Ticks `GrowRightBottom` takes from empty right/bottom sides. Always at least one.
    pub const fn right_bottom_ticks(&self) -> u32 {
        let ticks = self.side_no_overlap.div_ceil(self.growth_rate);
        if ticks == 0 { 1 } else { ticks }
    }

    /// Top and left strokes, relative to `origin`.
    pub fn top_left_strokes(
        &self,
        origin: Point,
    ) -> [Rectangle; 2] {
        let s = self.stroke_width;
        [
            Rectangle::new(origin, Size::new(self.top, s)),
            Rectangle::new(origin + Point::new(0, s as i32), Size::new(s, self.left)),
        ]
    }

    /// Right and bottom strokes, relative to `origin`.
    pub fn right_bottom_strokes(
        &self,
        origin: Point,
    ) -> [Rectangle; 2] {
        let s = self.stroke_width;
        let inner = self.side_no_overlap as i32;
        [
            Rectangle::new(origin + Point::new(inner, s as i32), Size::new(s, self.right)),
            Rectangle::new(origin + Point::new(s as i32, inner), Size::new(self.bottom, s)),
        ]
    }

    /// All four strokes in draw order (top, left, right, bottom).
    pub fn strokes(
        &self,
        origin: Point,
    ) -> [Rectangle; 4] {
        let [top, left] = self.top_left_strokes(origin);
        let [right, bottom] = self.right_bottom_strokes(origin);
        [top, left, right, bottom]
    }

    /// Bounding size of the finished square.
    #[inline]
    pub const fn size(&self) -> Size { Size::new(self.full_side, self.full_side) }
}
