//! Design tokens for theming
//!
//! Tokens are the atomic values that make up the design system:
//! - Colors (per-variant palettes)
//! - Spacing (4px-based scale)
//! - State-layer alphas (hover/pressed/focus/dragged overlays)

mod color;
mod spacing;
mod state_layer;

pub use color::*;
pub use spacing::*;
pub use state_layer::*;
