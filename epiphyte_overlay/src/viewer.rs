// Copyright 2026 the Epiphyte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Read-only snapshots of the viewer context the overlays react to.

use peniko::Color;

/// The viewer-context state an overlay update reads.
///
/// This is a read-only view handed to the controller per update; the
/// overlay engine never mutates it. `zoom` is canvas pixels per world
/// unit, so the world size of one canvas pixel is `1 / zoom`.
#[derive(Clone, Debug)]
pub struct ViewerState {
    /// Camera zoom in canvas pixels per world unit.
    pub zoom: f64,
    /// Name of the active theme.
    pub theme: String,
    /// The canvas's direct background color, when the canvas exposes one.
    pub canvas_background: Option<Color>,
    /// Layers in stacking order; the last entry is top-most.
    pub layers: Vec<LayerEntry>,
}

impl ViewerState {
    /// Returns the top-most visible layer, if any.
    #[must_use]
    pub fn top_visible_layer(&self) -> Option<&LayerEntry> {
        self.layers.iter().rev().find(|layer| layer.visible)
    }

    /// Returns the names of visible layers, top-most first.
    pub fn visible_layer_names(&self) -> impl Iterator<Item = &str> {
        self.layers
            .iter()
            .rev()
            .filter(|layer| layer.visible)
            .map(|layer| layer.name.as_str())
    }
}

impl Default for ViewerState {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            theme: "dark".to_owned(),
            canvas_background: None,
            layers: Vec::new(),
        }
    }
}

/// The slice of a viewer layer the overlays read.
#[derive(Clone, Debug)]
pub struct LayerEntry {
    /// Layer name as displayed in the info box.
    pub name: String,
    /// Whether the layer is currently shown.
    pub visible: bool,
    /// The layer's colormap, when it exposes one.
    pub colormap: Option<Colormap>,
}

impl LayerEntry {
    /// Creates a visible layer without a colormap.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visible: true,
            colormap: None,
        }
    }

    /// Sets layer visibility, builder style.
    #[must_use]
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Attaches a colormap, builder style.
    #[must_use]
    pub fn with_colormap(mut self, colormap: Colormap) -> Self {
        self.colormap = Some(colormap);
        self
    }
}

/// How a colormap's entries are meant to be read.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColormapKind {
    /// A label colormap: entry 0 is the background label, entry 1 the
    /// first real label.
    Labels,
    /// A generic gradient colormap.
    Linear,
}

/// A layer colormap: an ordered list of colors plus how to read it.
#[derive(Clone, Debug, PartialEq)]
pub struct Colormap {
    /// How the entries are interpreted.
    pub kind: ColormapKind,
    /// The color entries.
    pub colors: Vec<Color>,
}

impl Colormap {
    /// Creates a colormap of the given kind.
    #[must_use]
    pub fn new(kind: ColormapKind, colors: Vec<Color>) -> Self {
        Self { kind, colors }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_visible_layer_is_last_visible_entry() {
        let view = ViewerState {
            layers: vec![
                LayerEntry::new("membrane"),
                LayerEntry::new("nuclei"),
                LayerEntry::new("mask").with_visible(false),
            ],
            ..ViewerState::default()
        };
        assert_eq!(view.top_visible_layer().unwrap().name, "nuclei");
    }

    #[test]
    fn visible_layer_names_are_reversed() {
        let view = ViewerState {
            layers: vec![LayerEntry::new("membrane"), LayerEntry::new("nuclei")],
            ..ViewerState::default()
        };
        let names: Vec<_> = view.visible_layer_names().collect();
        assert_eq!(names, ["nuclei", "membrane"]);
    }

    #[test]
    fn no_visible_layers() {
        let view = ViewerState {
            layers: vec![LayerEntry::new("hidden").with_visible(false)],
            ..ViewerState::default()
        };
        assert!(view.top_visible_layer().is_none());
        assert_eq!(view.visible_layer_names().count(), 0);
    }
}
