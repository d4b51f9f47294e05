// Copyright 2026 the Epiphyte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Color negotiation: deriving a readable overlay color from its context.

use peniko::Color;

use epiphyte_theme::ThemeRegistry;

use crate::viewer::{ColormapKind, LayerEntry};

/// Fallback window color when neither the canvas nor the theme yields a
/// background. An overlay must always be able to render something.
pub const DEFAULT_CANVAS_BACKGROUND: Color = Color::BLACK;

/// Componentwise `1 − RGB` complement; alpha is preserved.
#[must_use]
pub fn complement(color: Color) -> Color {
    let [r, g, b, a] = color.components;
    Color::new([1.0 - r, 1.0 - g, 1.0 - b, a])
}

/// Negotiates the effective overlay color.
///
/// Three tiers, in order:
/// 1. `colored` set: the explicit `color`, unchanged.
/// 2. Box visible: the complement of `box_color`, alpha forced to 1 so
///    the text stays solid on its own backdrop.
/// 3. Otherwise: the complement of the background, alpha preserved from
///    the background.
///
/// The box tier deliberately outranks the background tier: text sitting
/// on a box must contrast with the box, not with whatever lies behind it.
/// `background` is only invoked when tier 3 is reached.
#[must_use]
pub fn negotiate(
    colored: bool,
    color: Color,
    box_visible: bool,
    box_color: Color,
    background: impl FnOnce() -> Color,
) -> Color {
    if colored {
        return color;
    }
    if box_visible {
        return complement(box_color).with_alpha(1.0);
    }
    complement(background())
}

/// Resolves the background color an overlay contrasts against.
///
/// The canvas's direct background wins; failing that, the active theme's
/// canvas color; failing that, [`DEFAULT_CANVAS_BACKGROUND`].
#[must_use]
pub fn resolve_background(
    canvas_background: Option<Color>,
    themes: &ThemeRegistry,
    theme_name: &str,
) -> Color {
    canvas_background
        .or_else(|| themes.lookup(theme_name).map(|theme| theme.canvas_background()))
        .unwrap_or(DEFAULT_CANVAS_BACKGROUND)
}

/// The layers-info-box color override: a color drawn from the top-most
/// visible layer's colormap.
///
/// Label colormaps reserve entry 0 for the background label, so entry 1
/// is the first real label color; generic colormaps contribute their last
/// entry. Layers without a colormap contribute nothing and the caller
/// falls through to [`negotiate`].
///
/// The labels-vs-generic rule mirrors a colormap convention of the layer
/// types it was observed on; it is kept isolated here so it can be
/// revised without touching the rest of the pipeline.
#[must_use]
pub fn layer_text_color(layers: &[LayerEntry]) -> Option<Color> {
    let top = layers.iter().rev().find(|layer| layer.visible)?;
    let colormap = top.colormap.as_ref()?;
    match colormap.kind {
        ColormapKind::Labels => colormap.colors.get(1).copied(),
        ColormapKind::Linear => colormap.colors.last().copied(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewer::Colormap;

    #[test]
    fn explicit_color_passes_through_unchanged() {
        let explicit = Color::new([0.2, 0.4, 0.6, 0.8]);
        let out = negotiate(true, explicit, true, Color::WHITE, || {
            panic!("background must not be consulted")
        });
        assert_eq!(out, explicit);
    }

    #[test]
    fn box_tier_complements_box_color_with_opaque_alpha() {
        let box_color = Color::new([0.0, 0.0, 0.0, 0.6]);
        let out = negotiate(false, Color::WHITE, true, box_color, || {
            panic!("background must not be consulted")
        });
        assert_eq!(out, Color::new([1.0, 1.0, 1.0, 1.0]));
    }

    #[test]
    fn background_tier_preserves_background_alpha() {
        let background = Color::new([1.0, 1.0, 1.0, 0.5]);
        let out = negotiate(false, Color::WHITE, false, Color::BLACK, || background);
        assert_eq!(out, Color::new([0.0, 0.0, 0.0, 0.5]));
    }

    #[test]
    fn complement_is_an_involution_on_rgb() {
        let color = Color::new([0.25, 0.5, 0.75, 0.4]);
        assert_eq!(complement(complement(color)), color);
    }

    #[test]
    fn background_resolution_order() {
        let themes = ThemeRegistry::builtin();
        let canvas = Color::new([0.1, 0.2, 0.3, 1.0]);

        // Canvas color wins over the theme.
        assert_eq!(resolve_background(Some(canvas), &themes, "light"), canvas);

        // Theme canvas color next.
        assert_eq!(
            resolve_background(None, &themes, "light"),
            Color::from_rgb8(0xff, 0xff, 0xff)
        );

        // Unknown theme falls back to the default window color.
        assert_eq!(
            resolve_background(None, &themes, "no-such-theme"),
            DEFAULT_CANVAS_BACKGROUND
        );
    }

    #[test]
    fn labels_colormap_contributes_entry_one() {
        let layers = vec![
            LayerEntry::new("below"),
            LayerEntry::new("labels").with_colormap(Colormap::new(
                ColormapKind::Labels,
                vec![Color::TRANSPARENT, Color::new([0.9, 0.1, 0.1, 1.0])],
            )),
        ];
        assert_eq!(
            layer_text_color(&layers),
            Some(Color::new([0.9, 0.1, 0.1, 1.0]))
        );
    }

    #[test]
    fn linear_colormap_contributes_last_entry() {
        let layers = vec![LayerEntry::new("image").with_colormap(Colormap::new(
            ColormapKind::Linear,
            vec![Color::BLACK, Color::new([0.5, 0.5, 0.5, 1.0]), Color::WHITE],
        ))];
        assert_eq!(layer_text_color(&layers), Some(Color::WHITE));
    }

    #[test]
    fn hidden_or_plain_layers_contribute_nothing() {
        let layers = vec![
            LayerEntry::new("plain"),
            LayerEntry::new("mapped")
                .with_visible(false)
                .with_colormap(Colormap::new(ColormapKind::Linear, vec![Color::WHITE])),
        ];
        // Top visible layer has no colormap.
        assert_eq!(layer_text_color(&layers), None);
        assert_eq!(layer_text_color(&[]), None);
    }
}
