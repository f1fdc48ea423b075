//! Splash logo simulator for desktop platforms.
//!
//! Plays the splash animation in an SDL window using the
//! embedded-graphics-simulator crate. Press any key or click to skip.
//!
//! ```text
//! cargo run -p splash-simulator -- --fps 30 --logo-color '#E6294B'
//! ```
//!
//! Log output goes through `tracing`; set `RUST_LOG=debug` to see phase
//! transitions and artifact bakes.

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod backend;
mod cli;
mod raster;
mod timing;

use anyhow::{Context, Result};
use clap::Parser;
use embedded_graphics::prelude::Size;
use tracing_subscriber::EnvFilter;

use crate::backend::SimulatorBackend;
use crate::cli::Args;

fn main() -> Result<()> {
    initialise_tracing();
    let args = Args::parse();
    let config = args.splash_config();

    let mut backend = SimulatorBackend::new(Size::new(args.width, args.height), args.pixel_scale)
        .context("failed to open the simulator window")?;
    let outcome = splash_common::run(&mut backend, &config).context("splash animation failed")?;

    tracing::info!(%outcome, frames = backend.frames(), "simulator exiting");
    Ok(())
}

fn initialise_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
