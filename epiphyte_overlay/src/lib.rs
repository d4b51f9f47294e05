// Copyright 2026 the Epiphyte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Epiphyte Overlay: reactive canvas-overlay engine for an nD data viewer.
//!
//! This crate reconciles two auxiliary annotation overlays — a scale
//! indicator and a visible-layers info box — against camera zoom, layer
//! state, and the active theme. It translates change notifications into
//! concrete visual attributes (geometry, color, text, anchors) and writes
//! them onto a small compound render node.
//!
//! # Architecture
//!
//! Control flow is trigger-driven; nothing polls:
//!
//! ```text
//! viewer events ─┐
//!                ├─> OverlayController dispatch table ─> pure recompute
//! model setters ─┘        (Topic -> Passes)              functions ─> OverlayVisual
//! ```
//!
//! - [`OverlayModel`]: the observable configuration bag. Each setter
//!   records one change [`Topic`], drained with
//!   [`OverlayModel::take_pending`].
//! - [`OverlayController`]: the only stateful piece. Maps topics to
//!   recompute [`Passes`](controller::Passes), owns the zoom dead-band
//!   cache, and runs the passes in dependency order.
//! - Pure functions: color negotiation ([`color`]), nice-length selection
//!   (`epiphyte_units`), and anchor mapping ([`anchor`]).
//! - [`OverlayVisual`]: the render-node write surface; [`MemoryVisual`]
//!   is a plain-state reference implementation.
//!
//! The scene graph, windowing, layer data model, and theme definitions
//! stay outside; the engine only reads snapshots ([`ViewerState`],
//! `epiphyte_theme::ThemeRegistry`) and writes the visual.
//!
//! # Example
//!
//! ```rust
//! use epiphyte_overlay::{
//!     MemoryVisual, OverlayController, OverlayKind, OverlayModel, Topic, ViewerState,
//! };
//! use epiphyte_theme::ThemeRegistry;
//! use epiphyte_units::LengthUnit;
//!
//! let mut controller =
//!     OverlayController::new(OverlayKind::ScaleIndicator, ThemeRegistry::builtin());
//! let mut model = OverlayModel::scale_indicator();
//! let mut visual = MemoryVisual::new();
//! let mut view = ViewerState::default();
//! view.zoom = 2.0;
//!
//! model.set_visible(true);
//! model.set_unit(LengthUnit::Micrometer);
//! controller.reset(&mut model, &view, &mut visual);
//! assert_eq!(visual.state.text, "75 µm");
//!
//! // A zoom change from the viewer:
//! view.zoom = 4.0;
//! controller.process(Topic::ZOOM.into_set(), &mut model, &view, &mut visual);
//! assert_eq!(visual.state.text, "25 µm");
//!
//! // A model change:
//! model.set_box_visible(true);
//! let pending = model.take_pending();
//! controller.process(pending, &mut model, &view, &mut visual);
//! assert!(visual.state.rect_visible);
//! ```

pub mod anchor;
pub mod color;
pub mod controller;
pub mod model;
pub mod topic;
pub mod viewer;
pub mod visual;

pub use anchor::{HorizontalAnchor, VerticalAnchor, anchor_for, offset_correction};
pub use controller::{OverlayController, OverlayKind, Passes};
pub use model::{CanvasPosition, HorizontalSide, OverlayModel, VerticalSide};
pub use topic::{Topic, TopicSet, TopicSetIter};
pub use viewer::{Colormap, ColormapKind, LayerEntry, ViewerState};
pub use visual::{MemoryVisual, OverlayVisual, VisualState};
