// Copyright 2026 the Epiphyte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The render-node boundary: the write surface the controller targets.

use kurbo::Vec2;
use peniko::Color;

use crate::anchor::{HorizontalAnchor, VerticalAnchor};

/// The write surface of an overlay's compound render node.
///
/// A compound node groups a rectangle sub-node (the background box), a
/// tick sub-node (scale-indicator end marks), a text sub-node, and a
/// transform. Backends adapt this trait onto their scene graph; the
/// controller is the only writer and only ever calls it from the UI
/// thread. All writes are last-write-wins; a backend may elide a write
/// whose value matches current state.
pub trait OverlayVisual {
    /// Shows or hides the whole compound node.
    fn set_node_visible(&mut self, visible: bool);
    /// Sets whole-node opacity in `[0, 1]`.
    fn set_node_opacity(&mut self, opacity: f32);
    /// Sets the paint order; lower paints first.
    fn set_paint_order(&mut self, order: i64);
    /// Shows or hides the background rectangle.
    fn set_rect_visible(&mut self, visible: bool);
    /// Sets the background rectangle color.
    fn set_rect_color(&mut self, color: Color);
    /// Shows or hides the scale tick marks.
    fn set_ticks_visible(&mut self, visible: bool);
    /// Replaces the text content.
    fn set_text(&mut self, text: &str);
    /// Sets the text color.
    fn set_text_color(&mut self, color: Color);
    /// Sets the text font size in points.
    fn set_font_size(&mut self, size: f32);
    /// Sets the text/shape anchor pair.
    fn set_text_anchor(&mut self, horizontal: HorizontalAnchor, vertical: VerticalAnchor);
    /// Sets the transform's x scale: the bar length in canvas pixels.
    fn set_bar_scale(&mut self, scale: f64);
    /// Sets the canvas-pixel offset from the anchored viewport point.
    fn set_canvas_offset(&mut self, offset: Vec2);
}

/// Everything a [`MemoryVisual`] has been told, as plain data.
#[derive(Clone, Debug, PartialEq)]
pub struct VisualState {
    /// Whole-node visibility.
    pub node_visible: bool,
    /// Whole-node opacity.
    pub node_opacity: f32,
    /// Paint order.
    pub paint_order: i64,
    /// Background rectangle visibility.
    pub rect_visible: bool,
    /// Background rectangle color.
    pub rect_color: Color,
    /// Tick-mark visibility.
    pub ticks_visible: bool,
    /// Text content.
    pub text: String,
    /// Text color.
    pub text_color: Color,
    /// Font size in points.
    pub font_size: f32,
    /// Horizontal text/shape anchor.
    pub anchor_x: HorizontalAnchor,
    /// Vertical text/shape anchor.
    pub anchor_y: VerticalAnchor,
    /// Bar length in canvas pixels (transform x scale).
    pub bar_scale: f64,
    /// Canvas-pixel offset from the anchored viewport point.
    pub offset: Vec2,
}

impl Default for VisualState {
    fn default() -> Self {
        Self {
            node_visible: false,
            node_opacity: 1.0,
            paint_order: 0,
            rect_visible: false,
            rect_color: Color::TRANSPARENT,
            ticks_visible: false,
            text: String::new(),
            text_color: Color::WHITE,
            font_size: 10.0,
            anchor_x: HorizontalAnchor::Center,
            anchor_y: VerticalAnchor::Center,
            bar_scale: 1.0,
            offset: Vec2::ZERO,
        }
    }
}

/// A reference [`OverlayVisual`] that records writes into plain state.
///
/// Used by tests to compare controller output bit-for-bit, and usable by
/// embedders as a state cache in front of a real scene graph. `writes`
/// counts every setter call, so suppressed recomputation (the zoom
/// dead-band) is observable.
#[derive(Clone, Debug, Default)]
pub struct MemoryVisual {
    /// The recorded node state.
    pub state: VisualState,
    /// Total number of setter calls received.
    pub writes: u64,
}

impl MemoryVisual {
    /// Creates a visual with default state and a zero write count.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl OverlayVisual for MemoryVisual {
    fn set_node_visible(&mut self, visible: bool) {
        self.state.node_visible = visible;
        self.writes += 1;
    }

    fn set_node_opacity(&mut self, opacity: f32) {
        self.state.node_opacity = opacity;
        self.writes += 1;
    }

    fn set_paint_order(&mut self, order: i64) {
        self.state.paint_order = order;
        self.writes += 1;
    }

    fn set_rect_visible(&mut self, visible: bool) {
        self.state.rect_visible = visible;
        self.writes += 1;
    }

    fn set_rect_color(&mut self, color: Color) {
        self.state.rect_color = color;
        self.writes += 1;
    }

    fn set_ticks_visible(&mut self, visible: bool) {
        self.state.ticks_visible = visible;
        self.writes += 1;
    }

    fn set_text(&mut self, text: &str) {
        self.state.text.clear();
        self.state.text.push_str(text);
        self.writes += 1;
    }

    fn set_text_color(&mut self, color: Color) {
        self.state.text_color = color;
        self.writes += 1;
    }

    fn set_font_size(&mut self, size: f32) {
        self.state.font_size = size;
        self.writes += 1;
    }

    fn set_text_anchor(&mut self, horizontal: HorizontalAnchor, vertical: VerticalAnchor) {
        self.state.anchor_x = horizontal;
        self.state.anchor_y = vertical;
        self.writes += 1;
    }

    fn set_bar_scale(&mut self, scale: f64) {
        self.state.bar_scale = scale;
        self.writes += 1;
    }

    fn set_canvas_offset(&mut self, offset: Vec2) {
        self.state.offset = offset;
        self.writes += 1;
    }
}
