//! Surface role resolution
//!
//! Maps a semantic surface role to its concrete palette entry plus an
//! optional glow treatment. The role set is closed; resolution has no
//! error paths.

use crate::glow::{derive_glow, Glow, GLOW_ALPHA};
use crate::tokens::Palette;
use arcane_core::Color;

/// Semantic elevation/state category of a surface
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum SurfaceRole {
    Base,
    Raised,
    Inset,
    Pressed,
}

impl SurfaceRole {
    /// Whether this role may carry a glow treatment.
    ///
    /// Inset and pressed surfaces never glow; this is fixed policy, not a
    /// caller choice.
    pub fn can_glow(self) -> bool {
        matches!(self, Self::Base | Self::Raised)
    }
}

/// Resolved visual treatment for a surface
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceStyle {
    pub background: Color,
    pub glow: Option<Glow>,
}

/// Resolve a surface role against a palette.
///
/// `glow` requests an elevation glow; it is honored only for roles where
/// [`SurfaceRole::can_glow`] holds.
pub fn resolve(role: SurfaceRole, palette: &Palette, glow: bool) -> SurfaceStyle {
    let background = match role {
        SurfaceRole::Base => palette.surface_container_low,
        SurfaceRole::Raised => palette.surface_container,
        SurfaceRole::Inset => palette.surface_container_lowest,
        SurfaceRole::Pressed => palette.surface_pressed,
    };
    let glow = (glow && role.can_glow()).then(|| derive_glow(palette.primary, GLOW_ALPHA));
    SurfaceStyle { background, glow }
}
