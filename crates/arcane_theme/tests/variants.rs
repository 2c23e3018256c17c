use arcane_core::Color;
use arcane_theme::{
    ColorScheme, Palette, StateLayerAlphas, ThemeVariant, GLOW_ALPHA, GLOW_STRONG_ALPHA,
};

#[test]
fn variant_catalog_contains_expected_ids() {
    let mut ids: Vec<&str> = ThemeVariant::all().iter().map(|v| v.id()).collect();
    ids.sort_unstable();
    assert_eq!(
        ids,
        vec![
            "agent2-dark",
            "agent2-light",
            "claude-dark",
            "claude-light",
            "cv-agent-dark",
            "cv-agent-light",
            "dark",
            "default",
            "p2-dark",
            "p2-light",
            "perplexity",
        ]
    );
}

#[test]
fn every_variant_has_five_distinct_surface_levels() {
    for variant in ThemeVariant::all() {
        let palette = variant.palette();
        let mut levels: Vec<[u8; 4]> = palette
            .surface_levels()
            .iter()
            .map(|c| c.to_rgba8())
            .collect();
        levels.sort_unstable();
        levels.dedup();
        assert_eq!(levels.len(), 5, "variant {variant:?}");
    }
}

#[test]
fn pressed_surface_is_distinct_from_every_container_level() {
    for variant in ThemeVariant::all() {
        let palette = variant.palette();
        for level in palette.surface_levels() {
            assert_ne!(palette.surface_pressed, level, "variant {variant:?}");
        }
    }
}

#[test]
fn brand_pairs_have_distinct_primaries_and_lighter_light_surfaces() {
    for (light, dark) in ThemeVariant::brand_pairs() {
        let light_palette = light.palette();
        let dark_palette = dark.palette();

        assert_ne!(
            light_palette.primary, dark_palette.primary,
            "pair {light:?}/{dark:?}"
        );
        assert_ne!(
            dark_palette.primary,
            Palette::default().primary,
            "pair {light:?}/{dark:?}"
        );
        assert_ne!(
            light_palette.surface_container_low, dark_palette.surface_container_low,
            "pair {light:?}/{dark:?}"
        );

        // Light surfaces are strictly lighter, level by level (red channel
        // by construction)
        for (light_level, dark_level) in light_palette
            .surface_levels()
            .iter()
            .zip(dark_palette.surface_levels())
        {
            assert!(
                light_level.r > dark_level.r,
                "pair {light:?}/{dark:?}: {light_level:?} vs {dark_level:?}"
            );
        }
    }
}

#[test]
fn glow_colors_are_primary_at_fixed_alphas() {
    for variant in ThemeVariant::all() {
        let palette = variant.palette();
        assert_eq!(palette.glow, palette.primary.with_alpha(GLOW_ALPHA));
        assert_eq!(
            palette.glow_strong,
            palette.primary.with_alpha(GLOW_STRONG_ALPHA)
        );
    }
}

#[test]
fn state_layer_alphas_are_fixed_across_variants() {
    for variant in ThemeVariant::all() {
        assert_eq!(
            variant.palette().state_layers,
            StateLayerAlphas::default(),
            "variant {variant:?}"
        );
    }
}

#[test]
fn default_palette_equals_light_constructor() {
    assert_eq!(Palette::default(), Palette::light());
}

#[test]
fn base_pair_primaries_match_brand_constants() {
    assert_eq!(Palette::light().primary, Color::from_argb(0xFF8B5CF6));
    assert_eq!(Palette::dark().primary, Color::from_argb(0xFFB19EFF));
}

#[test]
fn with_primary_overrides_seed_and_glow_exactly() {
    let seed = Color::from_argb(0xFF21B8CD);
    let palette = Palette::light().with_primary(seed);
    assert_eq!(palette.primary, seed);
    assert_eq!(palette.glow, seed.with_alpha(0.3));
    assert_eq!(palette.glow_strong, seed.with_alpha(0.6));
}

#[test]
fn bundles_round_trip_through_scheme() {
    for variant in ThemeVariant::all() {
        let bundle = variant.bundle();
        let theme = bundle.for_scheme(variant.scheme());
        assert_eq!(theme.variant(), *variant, "variant {variant:?}");
        assert_eq!(theme.palette(), &variant.palette());
    }
}

#[test]
fn perplexity_pairs_with_itself() {
    let bundle = ThemeVariant::Perplexity.bundle();
    assert_eq!(
        bundle.for_scheme(ColorScheme::Light).variant(),
        ThemeVariant::Perplexity
    );
    assert_eq!(
        bundle.for_scheme(ColorScheme::Dark).variant(),
        ThemeVariant::Perplexity
    );
}
