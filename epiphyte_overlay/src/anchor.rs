// Copyright 2026 the Epiphyte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Anchor mapping: canvas positions to text/shape anchors and offsets.

use kurbo::{Size, Vec2};

use crate::model::{CanvasPosition, HorizontalSide, VerticalSide};

/// Horizontal text/shape anchor of a drawable element.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HorizontalAnchor {
    /// The element extends rightward from its anchor point.
    Left,
    /// The element is centered on its anchor point.
    Center,
    /// The element extends leftward from its anchor point.
    Right,
}

/// Vertical text/shape anchor of a drawable element.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum VerticalAnchor {
    /// The element extends downward from its anchor point.
    Top,
    /// The element is centered on its anchor point.
    Center,
    /// The element extends upward from its anchor point.
    Bottom,
}

/// Maps a canvas position to the element's text/shape anchor pair.
///
/// The vertical mapping is inverted: an element pinned to the top edge
/// hangs its anchor on its own bottom so the body renders below the
/// anchor point, into the viewport, and vice versa. The horizontal
/// mapping is direct.
#[must_use]
pub fn anchor_for(position: CanvasPosition) -> (HorizontalAnchor, VerticalAnchor) {
    let horizontal = match position.horizontal() {
        HorizontalSide::Left => HorizontalAnchor::Left,
        HorizontalSide::Center => HorizontalAnchor::Center,
        HorizontalSide::Right => HorizontalAnchor::Right,
    };
    let vertical = match position.vertical() {
        VerticalSide::Top => VerticalAnchor::Bottom,
        VerticalSide::Center => VerticalAnchor::Center,
        VerticalSide::Bottom => VerticalAnchor::Top,
    };
    (horizontal, vertical)
}

/// Canvas-pixel offset pulling a center-origin element clear of the
/// viewport edge it is anchored to.
///
/// The underlying shape's coordinate origin is its center, not its edge,
/// so an element parked exactly on an edge point would straddle it. The
/// correction moves the element into the viewport by half its on-screen
/// size plus `margin` on each non-centered axis. Canvas y grows downward.
#[must_use]
pub fn offset_correction(position: CanvasPosition, size: Size, margin: f64) -> Vec2 {
    let x = match position.horizontal() {
        HorizontalSide::Left => margin + size.width / 2.0,
        HorizontalSide::Center => 0.0,
        HorizontalSide::Right => -(margin + size.width / 2.0),
    };
    let y = match position.vertical() {
        VerticalSide::Top => margin + size.height / 2.0,
        VerticalSide::Center => 0.0,
        VerticalSide::Bottom => -(margin + size.height / 2.0),
    };
    Vec2::new(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_table_matches_inversion_rules() {
        use CanvasPosition::*;
        use HorizontalAnchor as H;
        use VerticalAnchor as V;
        let table = [
            (TopLeft, H::Left, V::Bottom),
            (TopCenter, H::Center, V::Bottom),
            (TopRight, H::Right, V::Bottom),
            (CenterLeft, H::Left, V::Center),
            (CenterCenter, H::Center, V::Center),
            (CenterRight, H::Right, V::Center),
            (BottomLeft, H::Left, V::Top),
            (BottomCenter, H::Center, V::Top),
            (BottomRight, H::Right, V::Top),
        ];
        for (position, h, v) in table {
            assert_eq!(anchor_for(position), (h, v), "{position:?}");
        }
    }

    #[test]
    fn offsets_point_into_the_viewport() {
        let size = Size::new(150.0, 6.0);
        let margin = 10.0;

        let top_left = offset_correction(CanvasPosition::TopLeft, size, margin);
        assert_eq!(top_left, Vec2::new(85.0, 13.0));

        let bottom_right = offset_correction(CanvasPosition::BottomRight, size, margin);
        assert_eq!(bottom_right, Vec2::new(-85.0, -13.0));
    }

    #[test]
    fn centered_axes_have_no_correction() {
        let size = Size::new(100.0, 20.0);
        assert_eq!(
            offset_correction(CanvasPosition::CenterCenter, size, 10.0),
            Vec2::ZERO
        );
        let top_center = offset_correction(CanvasPosition::TopCenter, size, 10.0);
        assert_eq!(top_center.x, 0.0);
        assert!(top_center.y > 0.0);
    }

    #[test]
    fn offset_magnitude_tracks_element_size() {
        let small = offset_correction(CanvasPosition::BottomLeft, Size::new(50.0, 5.0), 10.0);
        let large = offset_correction(CanvasPosition::BottomLeft, Size::new(200.0, 5.0), 10.0);
        assert!(large.x > small.x);
    }
}
