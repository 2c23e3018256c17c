//! Built-in theme variant catalog
//!
//! Every variant is a hard-coded brand table: a seed primary plus a surface
//! ramp, text, and outline constants. There is deliberately no generative
//! relationship between brands; the catalog is data, not a derivation rule.
//!
//! All palette constructors are pure and total. The only fallible entry
//! point is [`ThemeVariant::from_id`], the dispatch-by-name boundary.

use crate::error::ThemeError;
use crate::glow::{GLOW_ALPHA, GLOW_STRONG_ALPHA};
use crate::theme::{ColorScheme, Theme, ThemeBundle};
use crate::tokens::{Palette, StateLayerAlphas};
use arcane_core::Color;
use std::fmt::{Display, Formatter};

/// Built-in theme variant catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThemeVariant {
    /// Base light theme.
    Default,
    /// Base dark theme.
    Dark,
    /// Claude brand, light.
    ClaudeLight,
    /// Claude brand, dark.
    ClaudeDark,
    /// CV-agent brand, light.
    CvAgentLight,
    /// CV-agent brand, dark.
    CvAgentDark,
    /// Perplexity brand (single dark variant).
    Perplexity,
    /// Agent2 brand, light.
    Agent2Light,
    /// Agent2 brand, dark.
    Agent2Dark,
    /// P2 brand, light.
    P2Light,
    /// P2 brand, dark.
    P2Dark,
}

impl ThemeVariant {
    /// Stable variant id for config/serialization.
    pub fn id(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Dark => "dark",
            Self::ClaudeLight => "claude-light",
            Self::ClaudeDark => "claude-dark",
            Self::CvAgentLight => "cv-agent-light",
            Self::CvAgentDark => "cv-agent-dark",
            Self::Perplexity => "perplexity",
            Self::Agent2Light => "agent2-light",
            Self::Agent2Dark => "agent2-dark",
            Self::P2Light => "p2-light",
            Self::P2Dark => "p2-dark",
        }
    }

    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Default => "Arcane",
            Self::Dark => "Arcane Dark",
            Self::ClaudeLight => "Claude",
            Self::ClaudeDark => "Claude Dark",
            Self::CvAgentLight => "CV Agent",
            Self::CvAgentDark => "CV Agent Dark",
            Self::Perplexity => "Perplexity",
            Self::Agent2Light => "Agent2",
            Self::Agent2Dark => "Agent2 Dark",
            Self::P2Light => "P2",
            Self::P2Dark => "P2 Dark",
        }
    }

    /// Full variant list.
    pub fn all() -> &'static [ThemeVariant] {
        const VARIANTS: [ThemeVariant; 11] = [
            ThemeVariant::Default,
            ThemeVariant::Dark,
            ThemeVariant::ClaudeLight,
            ThemeVariant::ClaudeDark,
            ThemeVariant::CvAgentLight,
            ThemeVariant::CvAgentDark,
            ThemeVariant::Perplexity,
            ThemeVariant::Agent2Light,
            ThemeVariant::Agent2Dark,
            ThemeVariant::P2Light,
            ThemeVariant::P2Dark,
        ];
        &VARIANTS
    }

    /// Resolve a variant from its stable id.
    ///
    /// This is the only place [`ThemeError::UnknownVariant`] can arise; the
    /// per-variant constructors are total.
    pub fn from_id(id: &str) -> Result<Self, ThemeError> {
        Self::all()
            .iter()
            .copied()
            .find(|v| v.id() == id)
            .ok_or_else(|| ThemeError::UnknownVariant(id.to_string()))
    }

    /// Color scheme this variant renders as.
    pub fn scheme(self) -> ColorScheme {
        match self {
            Self::Default | Self::ClaudeLight | Self::CvAgentLight | Self::Agent2Light
            | Self::P2Light => ColorScheme::Light,
            Self::Dark | Self::ClaudeDark | Self::CvAgentDark | Self::Perplexity
            | Self::Agent2Dark | Self::P2Dark => ColorScheme::Dark,
        }
    }

    /// Resolve the variant to its palette. Pure and total: the same variant
    /// always yields a bit-identical palette.
    pub fn palette(self) -> Palette {
        match self {
            Self::Default => Palette::light(),
            Self::Dark => Palette::dark(),
            Self::ClaudeLight => build_palette(CLAUDE_LIGHT),
            Self::ClaudeDark => build_palette(CLAUDE_DARK),
            Self::CvAgentLight => build_palette(CV_AGENT_LIGHT),
            Self::CvAgentDark => build_palette(CV_AGENT_DARK),
            Self::Perplexity => build_palette(PERPLEXITY),
            Self::Agent2Light => build_palette(AGENT2_LIGHT),
            Self::Agent2Dark => build_palette(AGENT2_DARK),
            Self::P2Light => build_palette(P2_LIGHT),
            Self::P2Dark => build_palette(P2_DARK),
        }
    }

    /// Build the light/dark bundle for this variant's brand.
    ///
    /// Perplexity ships a single dark look, so it pairs with itself.
    pub fn bundle(self) -> ThemeBundle {
        let pair = |name, light, dark| {
            ThemeBundle::new(name, Theme::of(light), Theme::of(dark))
        };
        match self {
            Self::Default | Self::Dark => pair("Arcane", Self::Default, Self::Dark),
            Self::ClaudeLight | Self::ClaudeDark => {
                pair("Claude", Self::ClaudeLight, Self::ClaudeDark)
            }
            Self::CvAgentLight | Self::CvAgentDark => {
                pair("CV Agent", Self::CvAgentLight, Self::CvAgentDark)
            }
            Self::Perplexity => pair("Perplexity", Self::Perplexity, Self::Perplexity),
            Self::Agent2Light | Self::Agent2Dark => {
                pair("Agent2", Self::Agent2Light, Self::Agent2Dark)
            }
            Self::P2Light | Self::P2Dark => pair("P2", Self::P2Light, Self::P2Dark),
        }
    }

    /// The brand light/dark pairs of the catalog, used to check pair
    /// invariants (light surfaces strictly lighter than dark ones).
    pub fn brand_pairs() -> &'static [(ThemeVariant, ThemeVariant)] {
        const PAIRS: [(ThemeVariant, ThemeVariant); 5] = [
            (ThemeVariant::Default, ThemeVariant::Dark),
            (ThemeVariant::ClaudeLight, ThemeVariant::ClaudeDark),
            (ThemeVariant::CvAgentLight, ThemeVariant::CvAgentDark),
            (ThemeVariant::Agent2Light, ThemeVariant::Agent2Dark),
            (ThemeVariant::P2Light, ThemeVariant::P2Dark),
        ];
        &PAIRS
    }
}

impl Display for ThemeVariant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Constant table driving one brand palette
#[derive(Clone, Copy)]
struct BrandSeed {
    primary: u32,
    surface_lowest: u32,
    surface_low: u32,
    surface: u32,
    surface_high: u32,
    surface_highest: u32,
    surface_pressed: u32,
    text: u32,
    text_secondary: u32,
    outline: u32,
}

fn build_palette(seed: BrandSeed) -> Palette {
    let primary = Color::from_argb(seed.primary);
    Palette {
        primary,
        glow: primary.with_alpha(GLOW_ALPHA),
        glow_strong: primary.with_alpha(GLOW_STRONG_ALPHA),
        surface_container_lowest: Color::from_argb(seed.surface_lowest),
        surface_container_low: Color::from_argb(seed.surface_low),
        surface_container: Color::from_argb(seed.surface),
        surface_container_high: Color::from_argb(seed.surface_high),
        surface_container_highest: Color::from_argb(seed.surface_highest),
        surface_pressed: Color::from_argb(seed.surface_pressed),
        text: Color::from_argb(seed.text),
        text_secondary: Color::from_argb(seed.text_secondary),
        outline: Color::from_argb(seed.outline),
        state_layers: StateLayerAlphas::default(),
    }
}

impl Palette {
    /// Base light palette (purple seed)
    pub fn light() -> Self {
        build_palette(ARCANE_LIGHT)
    }

    /// Base dark palette.
    ///
    /// The primary is a hard-coded lighter purple, a brand choice rather
    /// than a formula applied to the light seed.
    pub fn dark() -> Self {
        build_palette(ARCANE_DARK)
    }
}

// Brand tables. Light/dark pairs keep every light surface level strictly
// lighter (higher red channel) than the matching dark level.

const ARCANE_LIGHT: BrandSeed = BrandSeed {
    primary: 0xFF8B5CF6,
    surface_lowest: 0xFFFFFFFF,
    surface_low: 0xFFF7F5FB,
    surface: 0xFFF1EDF8,
    surface_high: 0xFFEAE4F4,
    surface_highest: 0xFFE3DCEF,
    surface_pressed: 0xFFDDD4EC,
    text: 0xFF1A1523,
    text_secondary: 0xFF6B6478,
    outline: 0xFFD8D2E4,
};

const ARCANE_DARK: BrandSeed = BrandSeed {
    primary: 0xFFB19EFF,
    surface_lowest: 0xFF0B0812,
    surface_low: 0xFF131020,
    surface: 0xFF1A1626,
    surface_high: 0xFF221D30,
    surface_highest: 0xFF2A243A,
    surface_pressed: 0xFF332C45,
    text: 0xFFEDE9F6,
    text_secondary: 0xFFA79FBA,
    outline: 0xFF3C3450,
};

const CLAUDE_LIGHT: BrandSeed = BrandSeed {
    primary: 0xFFD97757,
    surface_lowest: 0xFFFFFFFF,
    surface_low: 0xFFFAF4EE,
    surface: 0xFFF4ECE3,
    surface_high: 0xFFEDE2D6,
    surface_highest: 0xFFE6D9C9,
    surface_pressed: 0xFFDFCFBC,
    text: 0xFF29261F,
    text_secondary: 0xFF6E675C,
    outline: 0xFFD9CFC0,
};

const CLAUDE_DARK: BrandSeed = BrandSeed {
    primary: 0xFFE08A6A,
    surface_lowest: 0xFF14110C,
    surface_low: 0xFF1C1813,
    surface: 0xFF241F19,
    surface_high: 0xFF2C2620,
    surface_highest: 0xFF342D26,
    surface_pressed: 0xFF3D352C,
    text: 0xFFF2EDE4,
    text_secondary: 0xFFB0A795,
    outline: 0xFF463D31,
};

const CV_AGENT_LIGHT: BrandSeed = BrandSeed {
    primary: 0xFF2563EB,
    surface_lowest: 0xFFFFFFFF,
    surface_low: 0xFFF6F8FD,
    surface: 0xFFEEF2FA,
    surface_high: 0xFFE5EBF6,
    surface_highest: 0xFFDCE4F2,
    surface_pressed: 0xFFD2DCEE,
    text: 0xFF111827,
    text_secondary: 0xFF5B6472,
    outline: 0xFFCBD5E1,
};

const CV_AGENT_DARK: BrandSeed = BrandSeed {
    primary: 0xFF60A5FA,
    surface_lowest: 0xFF0A0F1A,
    surface_low: 0xFF111827,
    surface: 0xFF18202F,
    surface_high: 0xFF1F2937,
    surface_highest: 0xFF273244,
    surface_pressed: 0xFF2F3B50,
    text: 0xFFE5EAF2,
    text_secondary: 0xFF94A0B4,
    outline: 0xFF334155,
};

const PERPLEXITY: BrandSeed = BrandSeed {
    primary: 0xFF21B8CD,
    surface_lowest: 0xFF0C1418,
    surface_low: 0xFF121C21,
    surface: 0xFF19252B,
    surface_high: 0xFF202E35,
    surface_highest: 0xFF27373F,
    surface_pressed: 0xFF2F4149,
    text: 0xFFE8EEF0,
    text_secondary: 0xFF8FA3AB,
    outline: 0xFF31454E,
};

const AGENT2_LIGHT: BrandSeed = BrandSeed {
    primary: 0xFF059669,
    surface_lowest: 0xFFFFFFFF,
    surface_low: 0xFFF4FAF7,
    surface: 0xFFEBF5F0,
    surface_high: 0xFFE0EFE7,
    surface_highest: 0xFFD5E9DE,
    surface_pressed: 0xFFC9E2D4,
    text: 0xFF10201A,
    text_secondary: 0xFF5C6E66,
    outline: 0xFFC6D8CE,
};

const AGENT2_DARK: BrandSeed = BrandSeed {
    primary: 0xFF34D399,
    surface_lowest: 0xFF0A1410,
    surface_low: 0xFF101B16,
    surface: 0xFF16231D,
    surface_high: 0xFF1C2B24,
    surface_highest: 0xFF23342B,
    surface_pressed: 0xFF2A3D33,
    text: 0xFFE4F0EA,
    text_secondary: 0xFF8FA89B,
    outline: 0xFF2F4439,
};

const P2_LIGHT: BrandSeed = BrandSeed {
    primary: 0xFFDB2777,
    surface_lowest: 0xFFFFFFFF,
    surface_low: 0xFFFBF4F8,
    surface: 0xFFF7EBF1,
    surface_high: 0xFFF1E0E9,
    surface_highest: 0xFFEBD5E1,
    surface_pressed: 0xFFE4C9D8,
    text: 0xFF231520,
    text_secondary: 0xFF70606B,
    outline: 0xFFDCC8D3,
};

const P2_DARK: BrandSeed = BrandSeed {
    primary: 0xFFF472B6,
    surface_lowest: 0xFF140A10,
    surface_low: 0xFF1C1016,
    surface: 0xFF24161D,
    surface_high: 0xFF2C1C24,
    surface_highest: 0xFF34232B,
    surface_pressed: 0xFF3D2A33,
    text: 0xFFF2E4EB,
    text_secondary: 0xFFB095A3,
    outline: 0xFF46303A,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_id_round_trips_every_variant() {
        for variant in ThemeVariant::all() {
            assert_eq!(ThemeVariant::from_id(variant.id()), Ok(*variant));
        }
    }

    #[test]
    fn from_id_rejects_unknown_ids() {
        assert_eq!(
            ThemeVariant::from_id("solarized"),
            Err(ThemeError::UnknownVariant("solarized".to_string()))
        );
    }

    #[test]
    fn base_pair_uses_hard_coded_primaries() {
        assert_eq!(Palette::light().primary, Color::from_argb(0xFF8B5CF6));
        assert_eq!(Palette::dark().primary, Color::from_argb(0xFFB19EFF));
        assert_ne!(Palette::dark().primary, Palette::light().primary);
    }

    #[test]
    fn resolve_is_referentially_transparent() {
        for variant in ThemeVariant::all() {
            assert_eq!(variant.palette(), variant.palette());
        }
    }
}
