//! Theme and theme bundle types

use crate::tokens::{Palette, SpacingTokens};
use crate::variants::ThemeVariant;

/// Light or dark rendering scheme
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorScheme {
    Light,
    Dark,
}

impl ColorScheme {
    /// The opposite scheme
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// A fully resolved theme: one variant's palette plus the token scales
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    variant: ThemeVariant,
    palette: Palette,
    spacing: SpacingTokens,
}

impl Theme {
    /// Resolve a variant into a theme
    pub fn of(variant: ThemeVariant) -> Self {
        Self {
            variant,
            palette: variant.palette(),
            spacing: SpacingTokens::default(),
        }
    }

    pub fn variant(&self) -> ThemeVariant {
        self.variant
    }

    pub fn scheme(&self) -> ColorScheme {
        self.variant.scheme()
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn spacing(&self) -> &SpacingTokens {
        &self.spacing
    }
}

/// A named light/dark theme pair
#[derive(Clone, Debug, PartialEq)]
pub struct ThemeBundle {
    name: &'static str,
    light: Theme,
    dark: Theme,
}

impl ThemeBundle {
    pub fn new(name: &'static str, light: Theme, dark: Theme) -> Self {
        Self { name, light, dark }
    }

    pub fn name(&self) -> &str {
        self.name
    }

    /// The theme for the given scheme
    pub fn for_scheme(&self, scheme: ColorScheme) -> &Theme {
        match scheme {
            ColorScheme::Light => &self.light,
            ColorScheme::Dark => &self.dark,
        }
    }
}
