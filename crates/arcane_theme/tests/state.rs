//! ThemeState lifecycle test.
//!
//! The state is a process-wide singleton, so the whole lifecycle runs in a
//! single test function.

use std::sync::atomic::{AtomicUsize, Ordering};

use arcane_theme::{set_redraw_callback, ColorScheme, Palette, ThemeState, ThemeVariant};

static REDRAWS: AtomicUsize = AtomicUsize::new(0);

fn count_redraw() {
    REDRAWS.fetch_add(1, Ordering::SeqCst);
}

#[test]
fn theme_state_swaps_palettes_wholesale() {
    assert!(ThemeState::try_get().is_none());

    set_redraw_callback(count_redraw);
    ThemeState::init_default();

    let state = ThemeState::get();
    assert_eq!(state.scheme(), ColorScheme::Light);
    assert_eq!(state.palette(), Palette::light());
    assert!(!state.needs_repaint());

    // Scheme toggle swaps in the dark palette and requests a repaint
    state.toggle_scheme();
    assert_eq!(state.scheme(), ColorScheme::Dark);
    assert_eq!(state.palette(), Palette::dark());
    assert!(state.needs_repaint());
    assert_eq!(REDRAWS.load(Ordering::SeqCst), 1);
    state.clear_repaint();

    // Setting the same scheme again is a no-op
    state.set_scheme(ColorScheme::Dark);
    assert!(!state.needs_repaint());
    assert_eq!(REDRAWS.load(Ordering::SeqCst), 1);

    // Bundle switch keeps the scheme and resolves the matching palette
    state.set_bundle(ThemeVariant::ClaudeLight.bundle());
    assert_eq!(state.scheme(), ColorScheme::Dark);
    assert_eq!(state.palette(), ThemeVariant::ClaudeDark.palette());
    assert_eq!(REDRAWS.load(Ordering::SeqCst), 2);

    // CSS export reflects the resolved palette, aliases included
    state.set_bundle(ThemeVariant::Default.bundle());
    let vars = state.to_css_variable_map();
    assert_eq!(vars["primary"], "#b19eff");
    assert_eq!(vars["surface"], vars["surface-container-low"]);
    assert_eq!(vars["surface-raised"], vars["surface-container"]);
    assert_eq!(vars["surface-inset"], vars["surface-container-lowest"]);
    assert_eq!(vars["border"], vars["outline"]);
}
