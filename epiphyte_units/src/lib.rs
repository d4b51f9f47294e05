// Copyright 2026 the Epiphyte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Epiphyte Units: length units and "nice" rounded length selection.
//!
//! This crate provides the small dimensional-unit vocabulary used by the
//! overlay engine:
//! - [`LengthUnit`]: metric length units plus a dimensionless pixel tier.
//! - Conversion and auto-scaling helpers ([`convert`], [`best_fit`],
//!   [`format_quantity`]).
//! - [`select_nice_length`]: pick the largest human-friendly rounded length
//!   that fits a target, for scale-indicator labeling.
//!
//! It is headless and has no opinion about rendering. Callers hand it a
//! target length in world units and get back a rounded world length for
//! geometry plus a formatted, auto-scaled label.
//!
//! ## Example
//!
//! ```rust
//! use epiphyte_units::{LengthUnit, select_nice_length};
//!
//! // A 75 µm target hits the nice value 75 exactly.
//! let nice = select_nice_length(75.0, LengthUnit::Micrometer);
//! assert_eq!(nice.world, 75.0);
//! assert_eq!(nice.label, "75 µm");
//!
//! // An 80 µm target rounds down to the largest nice value that fits.
//! let nice = select_nice_length(80.0, LengthUnit::Micrometer);
//! assert_eq!(nice.world, 75.0);
//! ```

mod nice;
mod unit;

pub use nice::{NICE_MAGNITUDES, NiceLength, select_nice_length};
pub use unit::{LengthUnit, UnitTier, best_fit, convert, format_quantity};
