//! Glow derivation
//!
//! A glow is a soft radial fade drawn behind interactive elements: the seed
//! color at some alpha in the center, fully transparent at the edge. The
//! theming core only describes the fade; the host framework rasterizes it.

use arcane_core::{Color, Gradient, Point};

/// Alpha used for the standard glow derived from a palette seed
pub const GLOW_ALPHA: f32 = 0.3;
/// Alpha used for the strong glow derived from a palette seed
pub const GLOW_STRONG_ALPHA: f32 = 0.6;

/// A radial-fade specification
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glow {
    /// Center color of the fade; the edge is this color fully transparent
    pub center: Color,
}

impl Glow {
    /// The no-glow identity
    pub const NONE: Glow = Glow {
        center: Color::TRANSPARENT,
    };

    /// Whether this glow draws nothing
    pub fn is_none(&self) -> bool {
        self.center.a <= 0.0
    }

    /// Expand into a radial gradient centered at `center` with the given
    /// radius, fading to fully transparent.
    pub fn to_gradient(&self, center: Point, radius: f32) -> Gradient {
        Gradient::radial_simple(center, radius, self.center, self.center.transparent())
    }
}

/// Derive a glow from a color at the given alpha.
///
/// `alpha <= 0.0` yields [`Glow::NONE`] rather than an error; a positive
/// alpha is passed through unclamped.
pub fn derive_glow(color: Color, alpha: f32) -> Glow {
    if alpha <= 0.0 {
        return Glow::NONE;
    }
    Glow {
        center: color.with_alpha(alpha),
    }
}
