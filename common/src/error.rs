//! Error types for configuration, the artifact cache and backend failures.

use thiserror::Error;

use crate::cache::ArtifactKind;

/// Rejected animation parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("frame rate must be at least 1 tick per second")]
    ZeroFrameRate,

    #[error("stroke width {0} is below the minimum of {min} (growth rate would be zero)", min = crate::config::MIN_STROKE_WIDTH)]
    StrokeTooThin(u32),

    #[error("stroke width {0} is above the maximum of {max}", max = crate::config::MAX_STROKE_WIDTH)]
    StrokeTooWide(u32),

    #[error("caption font scale must be a positive finite number, got {0}")]
    InvalidCaptionScale(f32),
}

/// Misuse of a write-once artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CacheError {
    #[error("{0} artifact was already baked")]
    AlreadyBaked(ArtifactKind),

    #[error("{0} artifact was read before it was baked")]
    NotBaked(ArtifactKind),
}

/// Anything that can stop the splash animation early.
///
/// `E` is the backend's own error type (surface allocation, presenting a frame).
#[derive(Debug, Error)]
pub enum SplashError<E>
where
    E: core::error::Error + 'static,
{
    #[error("invalid splash configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("artifact cache: {0}")]
    Cache(#[from] CacheError),

    #[error("rendering backend failed: {0}")]
    Backend(#[source] E),
}
