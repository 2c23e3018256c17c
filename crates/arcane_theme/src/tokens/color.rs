//! Color tokens for theming
//!
//! A [`Palette`] is the fully resolved color set for one theme variant. It
//! is an immutable value: variant switches replace the whole palette, they
//! never mutate one in place.

use crate::glow::{GLOW_ALPHA, GLOW_STRONG_ALPHA};
use crate::tokens::StateLayerAlphas;
use arcane_core::Color;

/// Semantic color token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorToken {
    // Seed
    Primary,

    // Derived decorative colors
    Glow,
    GlowStrong,

    // Surface hierarchy
    SurfaceContainerLowest,
    SurfaceContainerLow,
    SurfaceContainer,
    SurfaceContainerHigh,
    SurfaceContainerHighest,
    SurfacePressed,

    // Text colors
    Text,
    TextSecondary,

    // Structural colors
    Outline,
}

/// Complete resolved color set for one theme variant
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Palette {
    /// Brand seed color
    pub primary: Color,

    /// Primary at the standard glow alpha (0.3)
    pub glow: Color,
    /// Primary at the strong glow alpha (0.6)
    pub glow_strong: Color,

    // Surface hierarchy, lowest to highest elevation
    pub surface_container_lowest: Color,
    pub surface_container_low: Color,
    pub surface_container: Color,
    pub surface_container_high: Color,
    pub surface_container_highest: Color,

    /// Pressed-state surface, distinct from the five container levels
    pub surface_pressed: Color,

    // Text colors
    pub text: Color,
    pub text_secondary: Color,

    // Structural colors
    pub outline: Color,

    /// Interaction-state overlay alphas, identical across all variants
    pub state_layers: StateLayerAlphas,
}

impl Palette {
    /// Get a color by token key
    pub fn get(&self, token: ColorToken) -> Color {
        match token {
            ColorToken::Primary => self.primary,
            ColorToken::Glow => self.glow,
            ColorToken::GlowStrong => self.glow_strong,
            ColorToken::SurfaceContainerLowest => self.surface_container_lowest,
            ColorToken::SurfaceContainerLow => self.surface_container_low,
            ColorToken::SurfaceContainer => self.surface_container,
            ColorToken::SurfaceContainerHigh => self.surface_container_high,
            ColorToken::SurfaceContainerHighest => self.surface_container_highest,
            ColorToken::SurfacePressed => self.surface_pressed,
            ColorToken::Text => self.text,
            ColorToken::TextSecondary => self.text_secondary,
            ColorToken::Outline => self.outline,
        }
    }

    /// Replace the primary seed, recomputing the derived glow colors.
    ///
    /// Every other field is left untouched.
    pub fn with_primary(self, primary: Color) -> Self {
        Self {
            primary,
            glow: primary.with_alpha(GLOW_ALPHA),
            glow_strong: primary.with_alpha(GLOW_STRONG_ALPHA),
            ..self
        }
    }

    /// The five surface-container levels, lowest first
    pub fn surface_levels(&self) -> [Color; 5] {
        [
            self.surface_container_lowest,
            self.surface_container_low,
            self.surface_container,
            self.surface_container_high,
            self.surface_container_highest,
        ]
    }

    #[deprecated(note = "use surface_container_low")]
    pub fn surface(&self) -> Color {
        self.surface_container_low
    }

    #[deprecated(note = "use surface_container")]
    pub fn surface_raised(&self) -> Color {
        self.surface_container
    }

    #[deprecated(note = "use surface_container_lowest")]
    pub fn surface_inset(&self) -> Color {
        self.surface_container_lowest
    }

    #[deprecated(note = "use outline")]
    pub fn border(&self) -> Color {
        self.outline
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::light()
    }
}
