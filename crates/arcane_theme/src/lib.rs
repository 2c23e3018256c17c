//! Arcane Theme System
//!
//! Theming core for the Arcane design system: palette variants, design
//! tokens, scoped theme distribution, and surface/glow resolution.
//!
//! # Overview
//!
//! The theme system provides:
//! - **Design tokens**: per-variant color palettes, a 4px spacing scale,
//!   fixed state-layer alphas
//! - **Variant catalog**: the base light/dark pair plus branded palettes,
//!   resolved by pure, total constructors
//! - **Scoped context**: stack-disciplined theme distribution down a
//!   composition subtree
//! - **Surface resolution**: semantic surface roles mapped to concrete
//!   palette entries with optional glow treatment
//!
//! # Quick Start
//!
//! ```rust
//! use arcane_theme::{Palette, SpacingTokens, SurfaceRole, ThemeContext};
//!
//! let palette = Palette::dark();
//! ThemeContext::provide(palette, SpacingTokens::default(), || {
//!     let frame = ThemeContext::current().unwrap();
//!     let card = arcane_theme::surface::resolve(SurfaceRole::Raised, &frame.palette, true);
//!     assert_eq!(card.background, frame.palette.surface_container);
//! });
//! ```
//!
//! # Architecture
//!
//! Palette resolution is pure: the same variant always yields a
//! bit-identical palette, so resolution is safe to repeat from any thread.
//! The only state is [`ThemeState`], the app-level holder of the active
//! bundle, which swaps palettes wholesale and never mutates them.

pub mod context;
pub mod error;
pub mod glow;
pub mod state;
pub mod surface;
pub mod theme;
pub mod tokens;
pub mod variants;

// Re-export commonly used types
pub use context::{ThemeContext, ThemeFrame};
pub use error::ThemeError;
pub use glow::{derive_glow, Glow, GLOW_ALPHA, GLOW_STRONG_ALPHA};
pub use state::{set_redraw_callback, ThemeState};
pub use surface::{resolve as resolve_surface, SurfaceRole, SurfaceStyle};
pub use theme::{ColorScheme, Theme, ThemeBundle};
pub use tokens::*;
pub use variants::ThemeVariant;
