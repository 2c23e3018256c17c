//! Arcane Core Primitives
//!
//! Foundational value types shared by the Arcane design system crates:
//!
//! - [`Color`]: RGBA color with hex/ARGB constructors and alpha helpers
//! - [`Point`], [`GradientStop`], [`Gradient`]: gradient fill descriptions
//!   consumed by glow-bearing surfaces
//!
//! These types are plain data. Rasterization is the host framework's job;
//! this crate only describes what to draw.

pub mod color;
pub mod gradient;

pub use color::Color;
pub use gradient::{Gradient, GradientStop, Point};
