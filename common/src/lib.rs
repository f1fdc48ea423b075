//! Renderer-independent core of the splash-logo animation.
//!
//! A square outline grows out of a blinking dot, the wordmark is revealed
//! letter by letter, then the logo zooms out while a caption fades in, and
//! finally everything fades away. This crate holds the whole animation; the
//! simulator (or any other window) only implements [`backend::Backend`].
//!
//! - [`phase`]: the ordered animation phases
//! - [`state`]: frame-driven state machine, one step function per phase
//! - [`geometry`]: square stroke extents and rectangles
//! - [`cache`]: write-once square and logo artifacts
//! - [`layout`]: screen anchors and the zoom camera
//! - [`text`]: monospace text measurement and glyph placement
//! - [`render`]: per-phase draw pass and artifact baking
//! - [`backend`]: surface, canvas and window traits
//! - [`controller`]: tick loop and the `run*` entry points
//! - [`config`], [`colors`], [`styles`], [`error`]: parameters and support types
//!
//! # Determinism
//!
//! Every threshold is a tick count and zoom/alpha are fixed-point, so a run
//! with a given configuration always takes the same number of ticks
//! (338 for the defaults) regardless of frame rate.
//!
//! # no_std Compatibility
//!
//! This crate is `no_std` and only needs `alloc` for the caption and
//! wordmark strings. Float rounding goes through `micromath`; windowing,
//! timing and log output belong to the backend.

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

extern crate alloc;

pub mod backend;
pub mod cache;
pub mod colors;
pub mod config;
pub mod controller;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod phase;
pub mod render;
pub mod state;
pub mod styles;
pub mod text;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used items
pub use backend::{Backend, Canvas, Input, Paint, Surface};
pub use config::SplashConfig;
pub use controller::{AnimationController, Outcome, run, run_default, run_default_with_frame_rate};
pub use error::{CacheError, ConfigError, SplashError};
pub use layout::Camera2D;
pub use phase::Phase;
pub use state::AnimationState;
pub use text::TextRun;
