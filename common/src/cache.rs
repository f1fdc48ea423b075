//! Write-once off-screen artifacts.
//!
//! The square outline and the composed logo never change once their source
//! geometry is final, so each is drawn exactly once into an off-screen
//! surface and blitted every frame after that. Growth and reveal geometry is
//! therefore rasterized at most twice per run no matter how long the zoom and
//! fade phases last.
//!
//! # Write-once Guard
//!
//! [`Artifact::bake`] refuses a second write and [`Artifact::get`] refuses a
//! read before the first write, both with a [`CacheError`]. The logo can only
//! be baked after the square, since it composites the square surface.
//!
//! # Release
//!
//! Surfaces are owned by value. Dropping the [`Artifacts`] (on completion,
//! skip, window close or an error) releases both, so there is no separate
//! cleanup path to forget.

use core::fmt;

use crate::error::CacheError;

/// Which cached artifact a surface holds.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ArtifactKind {
    /// The four finished square strokes.
    Square,
    /// Square plus the fully revealed wordmark.
    Logo,
}

impl fmt::Display for ArtifactKind {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(match self {
            Self::Square => "square",
            Self::Logo => "logo",
        })
    }
}

/// An off-screen surface that is written at most once.
#[derive(Debug)]
pub struct Artifact<S> {
    kind: ArtifactKind,
    surface: S,
    writes: u32,
}

impl<S> Artifact<S> {
    /// Wrap a freshly created (blank) surface.
    pub const fn new(
        kind: ArtifactKind,
        surface: S,
    ) -> Self {
        Self {
            kind,
            surface,
            writes: 0,
        }
    }

    #[inline]
    pub const fn kind(&self) -> ArtifactKind { self.kind }

    #[inline]
    pub const fn is_baked(&self) -> bool { self.writes > 0 }

    /// Number of times the surface has been written (0 or 1).
    #[inline]
    pub const fn writes(&self) -> u32 { self.writes }

    /// Draw into the surface. Fails if it was already baked.
    pub fn bake<F>(
        &mut self,
        draw: F,
    ) -> Result<(), CacheError>
    where
        F: FnOnce(&mut S),
    {
        if self.is_baked() {
            return Err(CacheError::AlreadyBaked(self.kind));
        }
        draw(&mut self.surface);
        self.writes += 1;
        Ok(())
    }

    /// Read the baked surface. Fails if nothing was drawn yet.
    pub fn get(&self) -> Result<&S, CacheError> {
        if self.is_baked() {
            Ok(&self.surface)
        } else {
            Err(CacheError::NotBaked(self.kind))
        }
    }
}

/// The two cached artifacts owned by one animation run.
#[derive(Debug)]
pub struct Artifacts<S> {
    square: Artifact<S>,
    logo: Artifact<S>,
}

impl<S> Artifacts<S> {
    pub const fn new(
        square: S,
        logo: S,
    ) -> Self {
        Self {
            square: Artifact::new(ArtifactKind::Square, square),
            logo: Artifact::new(ArtifactKind::Logo, logo),
        }
    }

    #[inline]
    pub const fn square(&self) -> &Artifact<S> { &self.square }

    #[inline]
    pub const fn logo(&self) -> &Artifact<S> { &self.logo }

    /// Bake the square outline.
    pub fn bake_square<F>(
        &mut self,
        draw: F,
    ) -> Result<(), CacheError>
    where
        F: FnOnce(&mut S),
    {
        self.square.bake(draw)
    }

    /// Bake the logo; `draw` receives the logo surface and the baked square.
    pub fn bake_logo<F>(
        &mut self,
        draw: F,
    ) -> Result<(), CacheError>
    where
        F: FnOnce(&mut S, &S),
    {
        let square = self.square.get()?;
        self.logo.bake(|logo| draw(logo, square))
    }
}
