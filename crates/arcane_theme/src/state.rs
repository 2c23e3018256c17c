//! Global theme state
//!
//! `ThemeState` is the app-level holder for the active theme bundle. It is
//! distinct from [`crate::ThemeContext`]: the context distributes a theme
//! down one composition subtree, while this singleton owns which bundle and
//! scheme the whole app renders with. A scheme or bundle switch swaps the
//! resolved palette wholesale and flags consumers to re-read it; palettes
//! are never mutated in place.

use crate::theme::{ColorScheme, ThemeBundle};
use crate::tokens::{ColorToken, Palette, SpacingTokens};
use crate::variants::ThemeVariant;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, OnceLock, RwLock};

/// Global theme state instance
static THEME_STATE: OnceLock<ThemeState> = OnceLock::new();

/// Global redraw callback - set by the app layer to trigger UI updates
static REDRAW_CALLBACK: Mutex<Option<fn()>> = Mutex::new(None);

/// Set the redraw callback function
///
/// The app layer registers a function here that schedules a repaint when
/// the active theme changes.
pub fn set_redraw_callback(callback: fn()) {
    *REDRAW_CALLBACK.lock().unwrap() = Some(callback);
}

/// Trigger a redraw via the registered callback
fn trigger_redraw() {
    if let Some(callback) = *REDRAW_CALLBACK.lock().unwrap() {
        callback();
    }
}

/// Global theme state - read directly by components during render
pub struct ThemeState {
    /// The active theme bundle (light/dark pair)
    bundle: RwLock<ThemeBundle>,

    /// Current color scheme
    scheme: RwLock<ColorScheme>,

    /// Resolved palette for the active bundle and scheme
    palette: RwLock<Palette>,

    /// Spacing scale (compile-time constants, shared by all themes)
    spacing: SpacingTokens,

    /// Flag indicating theme changed and consumers must re-read
    needs_repaint: AtomicBool,
}

impl ThemeState {
    /// Initialize the global theme state (call once at app startup)
    pub fn init(bundle: ThemeBundle, scheme: ColorScheme) {
        let palette = *bundle.for_scheme(scheme).palette();
        let state = ThemeState {
            bundle: RwLock::new(bundle),
            scheme: RwLock::new(scheme),
            palette: RwLock::new(palette),
            spacing: SpacingTokens::default(),
            needs_repaint: AtomicBool::new(false),
        };
        let _ = THEME_STATE.set(state);
    }

    /// Initialize with the base Arcane bundle in light mode
    pub fn init_default() {
        Self::init(ThemeVariant::Default.bundle(), ColorScheme::Light);
    }

    /// Get the global theme state instance
    pub fn get() -> &'static ThemeState {
        THEME_STATE
            .get()
            .expect("ThemeState not initialized. Call ThemeState::init() at app startup.")
    }

    /// Try to get the global theme state (returns None if not initialized)
    pub fn try_get() -> Option<&'static ThemeState> {
        THEME_STATE.get()
    }

    // ========== Color Scheme ==========

    /// Get the current color scheme
    pub fn scheme(&self) -> ColorScheme {
        *self.scheme.read().unwrap()
    }

    /// Set the color scheme, swapping in the matching palette wholesale
    pub fn set_scheme(&self, scheme: ColorScheme) {
        let mut current = self.scheme.write().unwrap();
        if *current == scheme {
            return;
        }
        let previous = *current;
        tracing::debug!(from = ?previous, to = ?scheme, "ThemeState::set_scheme");
        *current = scheme;
        drop(current);

        let palette = *self.bundle.read().unwrap().for_scheme(scheme).palette();
        *self.palette.write().unwrap() = palette;

        self.needs_repaint.store(true, Ordering::SeqCst);
        trigger_redraw();
    }

    /// Toggle between light and dark mode
    pub fn toggle_scheme(&self) {
        let current = self.scheme();
        self.set_scheme(current.toggle());
    }

    /// Replace the active bundle, keeping the current scheme
    pub fn set_bundle(&self, bundle: ThemeBundle) {
        tracing::debug!(bundle = bundle.name(), "ThemeState::set_bundle");
        let scheme = self.scheme();
        let palette = *bundle.for_scheme(scheme).palette();
        *self.bundle.write().unwrap() = bundle;
        *self.palette.write().unwrap() = palette;

        self.needs_repaint.store(true, Ordering::SeqCst);
        trigger_redraw();
    }

    // ========== Token Access ==========

    /// Snapshot of the resolved palette
    pub fn palette(&self) -> Palette {
        *self.palette.read().unwrap()
    }

    /// Get a single color token from the resolved palette
    pub fn color(&self, token: ColorToken) -> arcane_core::Color {
        self.palette.read().unwrap().get(token)
    }

    /// The spacing scale
    pub fn spacing(&self) -> &SpacingTokens {
        &self.spacing
    }

    // ========== Dirty Flag ==========

    /// Check if theme changes require a repaint
    pub fn needs_repaint(&self) -> bool {
        self.needs_repaint.load(Ordering::SeqCst)
    }

    /// Clear the repaint flag
    pub fn clear_repaint(&self) {
        self.needs_repaint.store(false, Ordering::SeqCst);
    }

    // ========== CSS Variable Generation ==========

    /// Generate a CSS variable map from the resolved palette.
    ///
    /// Keys are variable names without the `--` prefix; values are hex or
    /// rgba color strings. The deprecated alias names are emitted alongside
    /// their canonical fields for stylesheets that still use them.
    pub fn to_css_variable_map(&self) -> HashMap<String, String> {
        let palette = self.palette();
        let css = |c: arcane_core::Color| c.to_css_string();

        let mut vars = HashMap::with_capacity(16);
        vars.insert("primary".into(), css(palette.primary));
        vars.insert("glow".into(), css(palette.glow));
        vars.insert("glow-strong".into(), css(palette.glow_strong));
        vars.insert(
            "surface-container-lowest".into(),
            css(palette.surface_container_lowest),
        );
        vars.insert(
            "surface-container-low".into(),
            css(palette.surface_container_low),
        );
        vars.insert("surface-container".into(), css(palette.surface_container));
        vars.insert(
            "surface-container-high".into(),
            css(palette.surface_container_high),
        );
        vars.insert(
            "surface-container-highest".into(),
            css(palette.surface_container_highest),
        );
        vars.insert("surface-pressed".into(), css(palette.surface_pressed));
        vars.insert("text".into(), css(palette.text));
        vars.insert("text-secondary".into(), css(palette.text_secondary));
        vars.insert("outline".into(), css(palette.outline));

        // Legacy aliases, kept equal to their canonical fields
        vars.insert("surface".into(), css(palette.surface_container_low));
        vars.insert("surface-raised".into(), css(palette.surface_container));
        vars.insert("surface-inset".into(), css(palette.surface_container_lowest));
        vars.insert("border".into(), css(palette.outline));

        vars
    }
}
