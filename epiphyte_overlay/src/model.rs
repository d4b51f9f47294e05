// Copyright 2026 the Epiphyte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlay configuration models and their change notifications.

use peniko::Color;

use epiphyte_units::LengthUnit;

use crate::topic::{Topic, TopicSet};

/// The nine fixed canvas positions an overlay can anchor to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CanvasPosition {
    /// Top-left corner.
    TopLeft,
    /// Middle of the top edge.
    TopCenter,
    /// Top-right corner.
    TopRight,
    /// Middle of the left edge.
    CenterLeft,
    /// Center of the canvas.
    CenterCenter,
    /// Middle of the right edge.
    CenterRight,
    /// Bottom-left corner.
    BottomLeft,
    /// Middle of the bottom edge.
    BottomCenter,
    /// Bottom-right corner.
    BottomRight,
}

/// The horizontal component of a [`CanvasPosition`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HorizontalSide {
    /// Attached to the left canvas edge.
    Left,
    /// Horizontally centered.
    Center,
    /// Attached to the right canvas edge.
    Right,
}

/// The vertical component of a [`CanvasPosition`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum VerticalSide {
    /// Attached to the top canvas edge.
    Top,
    /// Vertically centered.
    Center,
    /// Attached to the bottom canvas edge.
    Bottom,
}

impl CanvasPosition {
    /// All nine positions, for exhaustive iteration in tests and pickers.
    pub const ALL: [Self; 9] = [
        Self::TopLeft,
        Self::TopCenter,
        Self::TopRight,
        Self::CenterLeft,
        Self::CenterCenter,
        Self::CenterRight,
        Self::BottomLeft,
        Self::BottomCenter,
        Self::BottomRight,
    ];

    /// Returns the horizontal component of this position.
    #[must_use]
    pub const fn horizontal(self) -> HorizontalSide {
        match self {
            Self::TopLeft | Self::CenterLeft | Self::BottomLeft => HorizontalSide::Left,
            Self::TopCenter | Self::CenterCenter | Self::BottomCenter => HorizontalSide::Center,
            Self::TopRight | Self::CenterRight | Self::BottomRight => HorizontalSide::Right,
        }
    }

    /// Returns the vertical component of this position.
    #[must_use]
    pub const fn vertical(self) -> VerticalSide {
        match self {
            Self::TopLeft | Self::TopCenter | Self::TopRight => VerticalSide::Top,
            Self::CenterLeft | Self::CenterCenter | Self::CenterRight => VerticalSide::Center,
            Self::BottomLeft | Self::BottomCenter | Self::BottomRight => VerticalSide::Bottom,
        }
    }
}

/// Observable configuration of one canvas overlay.
///
/// One instance exists per overlay kind (scale indicator, layers info
/// box) for the lifetime of the viewer. Every setter records exactly one
/// change notification for its property, even when the new value equals
/// the old one; consumers are idempotent, the model is not filtered.
/// Pending notifications are drained with [`OverlayModel::take_pending`]
/// and fed to the controller.
///
/// When `colored` is `false`, the stored `color` is a cache of the last
/// derived value, not user intent; the controller refreshes it via
/// [`OverlayModel::store_derived_color`] on every color recompute.
#[derive(Clone, Debug)]
pub struct OverlayModel {
    visible: bool,
    opacity: f32,
    order: i64,
    position: CanvasPosition,
    colored: bool,
    color: Color,
    box_visible: bool,
    box_color: Color,
    font_size: f32,
    length: Option<f64>,
    unit: LengthUnit,
    ticks: bool,
    pending: TopicSet,
}

impl OverlayModel {
    /// Creates the model for a scale indicator, with its default styling.
    #[must_use]
    pub fn scale_indicator() -> Self {
        Self {
            visible: false,
            opacity: 1.0,
            order: 1_000_000,
            position: CanvasPosition::BottomRight,
            colored: false,
            color: Color::new([1.0, 0.0, 1.0, 1.0]),
            box_visible: false,
            box_color: Color::new([0.0, 0.0, 0.0, 0.6]),
            font_size: 10.0,
            length: None,
            unit: LengthUnit::Pixel,
            ticks: true,
            pending: TopicSet::empty(),
        }
    }

    /// Creates the model for a layers info box, with its default styling.
    #[must_use]
    pub fn layers_info_box() -> Self {
        Self {
            position: CanvasPosition::TopLeft,
            ticks: false,
            ..Self::scale_indicator()
        }
    }

    /// Drains and returns the pending change notifications.
    pub fn take_pending(&mut self) -> TopicSet {
        core::mem::take(&mut self.pending)
    }

    /// Whether the overlay is shown at all.
    #[must_use]
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Sets overlay visibility.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        self.pending.insert(Topic::VISIBLE);
    }

    /// Whole-overlay opacity in `[0, 1]`.
    #[must_use]
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Sets overlay opacity, clamped into `[0, 1]`.
    pub fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity.clamp(0.0, 1.0);
        self.pending.insert(Topic::OPACITY);
    }

    /// Paint order; lower values are painted first.
    #[must_use]
    pub fn order(&self) -> i64 {
        self.order
    }

    /// Sets the paint order.
    pub fn set_order(&mut self, order: i64) {
        self.order = order;
        self.pending.insert(Topic::ORDER);
    }

    /// The canvas position the overlay is anchored to.
    #[must_use]
    pub fn position(&self) -> CanvasPosition {
        self.position
    }

    /// Sets the anchor position.
    pub fn set_position(&mut self, position: CanvasPosition) {
        self.position = position;
        self.pending.insert(Topic::POSITION);
    }

    /// Whether the explicit color is authoritative.
    #[must_use]
    pub fn colored(&self) -> bool {
        self.colored
    }

    /// Sets whether the explicit color is authoritative.
    pub fn set_colored(&mut self, colored: bool) {
        self.colored = colored;
        self.pending.insert(Topic::COLORED);
    }

    /// The overlay color. With `colored` unset this is the cache of the
    /// last derived value.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Sets the explicit overlay color.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
        self.pending.insert(Topic::COLOR);
    }

    /// Overwrites the color cache with a derived value.
    ///
    /// Unlike [`OverlayModel::set_color`] this emits no notification; it
    /// is the controller writing back the result of color negotiation,
    /// not a configuration change.
    pub fn store_derived_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Whether the background box is visible.
    #[must_use]
    pub fn box_visible(&self) -> bool {
        self.box_visible
    }

    /// Sets background box visibility.
    pub fn set_box_visible(&mut self, visible: bool) {
        self.box_visible = visible;
        self.pending.insert(Topic::BOX);
    }

    /// The background box color.
    #[must_use]
    pub fn box_color(&self) -> Color {
        self.box_color
    }

    /// Sets the background box color.
    pub fn set_box_color(&mut self, color: Color) {
        self.box_color = color;
        self.pending.insert(Topic::BOX_COLOR);
    }

    /// The text font size in points.
    #[must_use]
    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    /// Sets the text font size in points.
    pub fn set_font_size(&mut self, size: f32) {
        self.font_size = size;
        self.pending.insert(Topic::FONT_SIZE);
    }

    /// An explicit scale length in world units, or `None` to derive a
    /// nice length from the camera zoom.
    #[must_use]
    pub fn length(&self) -> Option<f64> {
        self.length
    }

    /// Sets or clears the explicit scale length.
    ///
    /// Only finite positive lengths are meaningful; anything else falls
    /// back to `None`, i.e. deriving the length from the camera zoom.
    pub fn set_length(&mut self, length: Option<f64>) {
        self.length = length.filter(|value| value.is_finite() && *value > 0.0);
        self.pending.insert(Topic::LENGTH);
    }

    /// The world unit of the scale indicator.
    #[must_use]
    pub fn unit(&self) -> LengthUnit {
        self.unit
    }

    /// Sets the world unit of the scale indicator.
    pub fn set_unit(&mut self, unit: LengthUnit) {
        self.unit = unit;
        self.pending.insert(Topic::UNIT);
    }

    /// Whether the scale indicator draws tick marks at its ends.
    #[must_use]
    pub fn ticks(&self) -> bool {
        self.ticks
    }

    /// Sets tick-mark visibility.
    pub fn set_ticks(&mut self, ticks: bool) {
        self.ticks = ticks;
        self.pending.insert(Topic::TICKS);
    }
}
