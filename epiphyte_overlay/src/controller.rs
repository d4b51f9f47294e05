// Copyright 2026 the Epiphyte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The overlay controller: dispatch table and recompute passes.

use bitflags::bitflags;
use kurbo::Size;

use epiphyte_theme::ThemeRegistry;
use epiphyte_units::{format_quantity, select_nice_length};

use crate::anchor::{anchor_for, offset_correction};
use crate::color::{layer_text_color, negotiate, resolve_background};
use crate::model::OverlayModel;
use crate::topic::{Topic, TopicSet};
use crate::viewer::ViewerState;
use crate::visual::OverlayVisual;

/// The overlay variants the controller drives.
///
/// One controller serves both; the differences are captured in a small
/// behavior descriptor rather than separate controller types.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum OverlayKind {
    /// The zoom-tracking scale indicator.
    ScaleIndicator,
    /// The visible-layer-names info box.
    LayersInfoBox,
}

/// What a variant opts into.
#[derive(Copy, Clone, Debug)]
struct Behavior {
    /// Derives a bar length from zoom and renders a quantity label.
    has_length: bool,
    /// Prefers the top visible layer's colormap for the text color.
    layer_color_override: bool,
}

impl OverlayKind {
    const fn behavior(self) -> Behavior {
        match self {
            Self::ScaleIndicator => Behavior {
                has_length: true,
                layer_color_override: false,
            },
            Self::LayersInfoBox => Behavior {
                has_length: false,
                layer_color_override: true,
            },
        }
    }
}

bitflags! {
    /// The recompute passes a change topic fans out to.
    ///
    /// Every pass is idempotent: running it twice against unchanged
    /// inputs writes the same render-node state both times, so multiple
    /// triggers converging on one pass in a cycle is harmless.
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct Passes: u8 {
        /// Whole-node visibility, opacity, and paint order.
        const BASE = 1 << 0;
        /// Nice-length selection and bar scaling from the camera zoom.
        const LENGTH = 1 << 1;
        /// Text/shape anchors and the viewport-edge offset correction.
        const ANCHOR = 1 << 2;
        /// Sub-node visibility: background box and tick marks.
        const GEOMETRY = 1 << 3;
        /// Color negotiation for text and box.
        const COLOR = 1 << 4;
        /// Text content and font size.
        const TEXT = 1 << 5;
    }
}

/// Suppress zoom recomputation below this log10 delta.
const ZOOM_DEAD_BAND: f64 = 1e-4;

/// Default canvas length the scale indicator aims to fill, in pixels.
const DEFAULT_TARGET_CANVAS_PX: f64 = 150.0;

/// Gap kept between an overlay and the viewport edge, in pixels.
const EDGE_MARGIN_PX: f64 = 10.0;

/// On-screen thickness of the scale bar, in pixels.
const SCALE_THICKNESS_PX: f64 = 6.0;

/// Nominal on-screen size of the info box, in pixels.
const INFO_BOX_SIZE_PX: Size = Size::new(150.0, 20.0);

/// Stateful coordinator of one overlay.
///
/// The controller maps change topics to recompute passes and applies the
/// derived state to the render node. It owns the only mutable caches in
/// the pipeline: the previous zoom (for the dead-band), the rendered bar
/// size, and the last formatted label. The pure pieces — color
/// negotiation, nice-length selection, anchor mapping — live in their own
/// modules and are composed here.
///
/// All work is synchronous and single-threaded: each recompute completes
/// before the triggering event handler returns, and within one update the
/// passes run in a fixed dependency order (length before anchor, anchor
/// before geometry and color).
#[derive(Clone, Debug)]
pub struct OverlayController {
    kind: OverlayKind,
    themes: ThemeRegistry,
    target_canvas_px: f64,
    margin_px: f64,
    prev_log_zoom: Option<f64>,
    force_refresh: bool,
    bar_px: f64,
    world_length: f64,
    label: String,
}

impl OverlayController {
    /// Creates a controller for the given overlay kind.
    ///
    /// The theme registry is injected here; the controller never reaches
    /// into ambient global state.
    #[must_use]
    pub fn new(kind: OverlayKind, themes: ThemeRegistry) -> Self {
        Self {
            kind,
            themes,
            target_canvas_px: DEFAULT_TARGET_CANVAS_PX,
            margin_px: EDGE_MARGIN_PX,
            prev_log_zoom: None,
            force_refresh: true,
            bar_px: 0.0,
            world_length: 0.0,
            label: String::new(),
        }
    }

    /// The overlay kind this controller drives.
    #[must_use]
    pub fn kind(&self) -> OverlayKind {
        self.kind
    }

    /// The current scale length in world units.
    #[must_use]
    pub fn world_length(&self) -> f64 {
        self.world_length
    }

    /// The current formatted quantity label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The canvas length the scale indicator aims to fill.
    #[must_use]
    pub fn target_canvas_px(&self) -> f64 {
        self.target_canvas_px
    }

    /// Sets the target canvas length. Takes effect on the next length
    /// recompute; pair with [`OverlayController::force_refresh`] to apply
    /// immediately on the next zoom notification.
    pub fn set_target_canvas_px(&mut self, length: f64) {
        self.target_canvas_px = length;
    }

    /// Arms the forced-refresh flag, so the next zoom notification
    /// recomputes even inside the dead-band.
    pub fn force_refresh(&mut self) {
        self.force_refresh = true;
    }

    /// Runs every recompute pass against the current state.
    ///
    /// Called once after construction and again whenever the overlay is
    /// reattached to a different canvas. Pending model notifications are
    /// drained (the full run covers them) and the dead-band cache is
    /// primed from the current zoom.
    pub fn reset<V>(&mut self, model: &mut OverlayModel, view: &ViewerState, visual: &mut V)
    where
        V: OverlayVisual + ?Sized,
    {
        let _ = model.take_pending();
        if view.zoom.is_finite() && view.zoom > 0.0 {
            self.prev_log_zoom = Some(view.zoom.log10());
        }
        self.force_refresh = false;
        self.run(Passes::all(), model, view, visual);
    }

    /// Processes one batch of change notifications.
    ///
    /// `topics` is the union of drained model notifications
    /// ([`OverlayModel::take_pending`]) and any viewer-context topics
    /// ([`Topic::ZOOM`], [`Topic::THEME`], [`Topic::LAYERS`]) that fired.
    /// Topics the dispatch table does not know are silent no-ops.
    pub fn process<V>(
        &mut self,
        topics: TopicSet,
        model: &mut OverlayModel,
        view: &ViewerState,
        visual: &mut V,
    ) where
        V: OverlayVisual + ?Sized,
    {
        let mut passes = Passes::empty();
        for topic in topics {
            if topic == Topic::ZOOM {
                passes |= self.zoom_passes(view);
            } else {
                passes |= self.passes_for(topic);
            }
        }
        self.run(passes, model, view, visual);
    }

    /// The dispatch table: which passes a topic fans out to.
    ///
    /// [`Topic::ZOOM`] is absent here; it is gated by the dead-band in
    /// [`OverlayController::process`].
    fn passes_for(&self, topic: Topic) -> Passes {
        match topic {
            Topic::VISIBLE | Topic::OPACITY | Topic::ORDER => Passes::BASE,
            Topic::POSITION => Passes::ANCHOR,
            Topic::COLORED | Topic::COLOR | Topic::BOX_COLOR | Topic::FONT_SIZE => {
                Passes::COLOR | Passes::TEXT
            }
            // The negotiation tier depends on the box flag, so a box
            // toggle renegotiates the text color too.
            Topic::BOX => Passes::GEOMETRY | Passes::COLOR,
            Topic::TICKS => Passes::GEOMETRY,
            Topic::LENGTH | Topic::UNIT => Passes::LENGTH | Passes::ANCHOR | Passes::TEXT,
            Topic::THEME => Passes::COLOR | Passes::TEXT,
            Topic::LAYERS => {
                if self.kind.behavior().layer_color_override {
                    Passes::TEXT | Passes::COLOR
                } else {
                    Passes::TEXT
                }
            }
            _ => Passes::empty(),
        }
    }

    /// The flag armed by [`OverlayController::force_refresh`] is consumed
    /// here and nowhere else, so it survives unrelated model notifications
    /// until a zoom notification actually arrives.
    fn zoom_passes(&mut self, view: &ViewerState) -> Passes {
        let exceeded = self.dead_band_exceeded(view.zoom);
        let forced = core::mem::take(&mut self.force_refresh);
        if !(exceeded || forced) {
            return Passes::empty();
        }
        let mut passes = Passes::ANCHOR;
        if self.kind.behavior().has_length {
            passes |= Passes::LENGTH;
        }
        passes
    }

    /// Dead-band check on `log10(zoom)`; sub-pixel zoom jitter is treated
    /// as unchanged. The cached value only advances when the band is
    /// exceeded, so jitter cannot creep past the threshold unnoticed.
    fn dead_band_exceeded(&mut self, zoom: f64) -> bool {
        if !(zoom.is_finite() && zoom > 0.0) {
            // Degenerate zoom: let the length pass clamp it.
            return true;
        }
        let log = zoom.log10();
        match self.prev_log_zoom {
            Some(prev) if (log - prev).abs() < ZOOM_DEAD_BAND => false,
            _ => {
                self.prev_log_zoom = Some(log);
                true
            }
        }
    }

    /// Runs the requested passes in dependency order: length feeds the
    /// anchor offset, and anchors are settled before geometry and color.
    fn run<V>(
        &mut self,
        passes: Passes,
        model: &mut OverlayModel,
        view: &ViewerState,
        visual: &mut V,
    ) where
        V: OverlayVisual + ?Sized,
    {
        if passes.contains(Passes::BASE) {
            self.refresh_base(model, visual);
        }
        if passes.contains(Passes::LENGTH) {
            self.refresh_length(model, view, visual);
        }
        if passes.contains(Passes::ANCHOR) {
            self.refresh_anchor(model, visual);
        }
        if passes.contains(Passes::GEOMETRY) {
            self.refresh_geometry(model, visual);
        }
        if passes.contains(Passes::COLOR) {
            self.refresh_color(model, view, visual);
        }
        if passes.contains(Passes::TEXT) {
            self.refresh_text(model, view, visual);
        }
    }

    fn refresh_base<V>(&self, model: &OverlayModel, visual: &mut V)
    where
        V: OverlayVisual + ?Sized,
    {
        visual.set_node_visible(model.visible());
        visual.set_node_opacity(model.opacity());
        visual.set_paint_order(model.order());
    }

    /// Selects the scale length for the current zoom and scales the bar.
    ///
    /// An explicit model length bypasses the nice-value search and the
    /// unit auto-scaling: the literal value is rendered in the model's
    /// configured unit.
    fn refresh_length<V>(&mut self, model: &OverlayModel, view: &ViewerState, visual: &mut V)
    where
        V: OverlayVisual + ?Sized,
    {
        if !self.kind.behavior().has_length {
            return;
        }
        let zoom = view.zoom;
        let usable_zoom = zoom.is_finite() && zoom > 0.0;
        let (world, label) = match model.length() {
            Some(length) => (length, format_quantity(length, model.unit())),
            None => {
                let target_world = if usable_zoom {
                    self.target_canvas_px / zoom
                } else {
                    0.0
                };
                let nice = select_nice_length(target_world, model.unit());
                (nice.world, nice.label)
            }
        };
        self.world_length = world;
        self.label = label;
        self.bar_px = if usable_zoom { world * zoom } else { 0.0 };
        visual.set_bar_scale(self.bar_px);
    }

    fn refresh_anchor<V>(&self, model: &OverlayModel, visual: &mut V)
    where
        V: OverlayVisual + ?Sized,
    {
        let position = model.position();
        let (horizontal, vertical) = anchor_for(position);
        visual.set_text_anchor(horizontal, vertical);
        visual.set_canvas_offset(offset_correction(position, self.element_size(), self.margin_px));
    }

    fn refresh_geometry<V>(&self, model: &OverlayModel, visual: &mut V)
    where
        V: OverlayVisual + ?Sized,
    {
        visual.set_rect_visible(model.box_visible());
        if self.kind.behavior().has_length {
            visual.set_ticks_visible(model.ticks());
        }
    }

    fn refresh_color<V>(&self, model: &mut OverlayModel, view: &ViewerState, visual: &mut V)
    where
        V: OverlayVisual + ?Sized,
    {
        let behavior = self.kind.behavior();
        let overridden = if behavior.layer_color_override && !model.colored() {
            layer_text_color(&view.layers)
        } else {
            None
        };
        let effective = overridden.unwrap_or_else(|| {
            negotiate(
                model.colored(),
                model.color(),
                model.box_visible(),
                model.box_color(),
                || resolve_background(view.canvas_background, &self.themes, &view.theme),
            )
        });
        if !model.colored() {
            model.store_derived_color(effective);
        }
        visual.set_text_color(effective);
        visual.set_rect_color(model.box_color());
    }

    fn refresh_text<V>(&self, model: &OverlayModel, view: &ViewerState, visual: &mut V)
    where
        V: OverlayVisual + ?Sized,
    {
        visual.set_font_size(model.font_size());
        match self.kind {
            OverlayKind::ScaleIndicator => visual.set_text(&self.label),
            OverlayKind::LayersInfoBox => {
                let names: Vec<&str> = view.visible_layer_names().collect();
                visual.set_text(&names.join("\n"));
            }
        }
    }

    /// The element's on-screen size used for the anchor offset.
    fn element_size(&self) -> Size {
        match self.kind {
            OverlayKind::ScaleIndicator => Size::new(self.bar_px, SCALE_THICKNESS_PX),
            OverlayKind::LayersInfoBox => INFO_BOX_SIZE_PX,
        }
    }
}
