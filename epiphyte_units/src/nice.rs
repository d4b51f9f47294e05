// Copyright 2026 the Epiphyte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! "Nice" rounded length selection for scale labeling.

use crate::unit::{LengthUnit, best_fit, format_quantity};

/// Human-friendly leading magnitudes, ascending within one decade.
///
/// Scaled by powers of ten, these form the candidate ladder for
/// [`select_nice_length`]. The set deliberately overlaps decades (75 of one
/// decade exceeds 10 of the next) so the search below compares across two
/// adjacent decades rather than assuming a globally sorted ladder.
pub const NICE_MAGNITUDES: [f64; 8] = [1.0, 2.0, 5.0, 10.0, 20.0, 25.0, 50.0, 75.0];

/// Highest power of ten (of the tier's finest unit) the ladder spans.
///
/// 75 × 10¹⁵ nm is 7.5 × 10⁴ km, comfortably past any magnification a
/// viewer camera reaches.
const MAX_DECADE: i32 = 15;

/// Relative tolerance when comparing a candidate against the target, so a
/// target that is exactly a nice value selects itself despite conversion
/// rounding.
const EPSILON: f64 = 1e-9;

/// A rounded length chosen by [`select_nice_length`].
#[derive(Clone, Debug, PartialEq)]
pub struct NiceLength {
    /// The chosen length re-expressed in the caller's world unit, for
    /// geometry scaling.
    pub world: f64,
    /// The display magnitude after auto-scaling.
    pub value: f64,
    /// The display unit after auto-scaling.
    pub unit: LengthUnit,
    /// `value` and `unit` formatted as a label, e.g. `"75 µm"`.
    pub label: String,
}

/// Picks the largest nice length not exceeding `target_world`.
///
/// The target is expressed in `world_unit`. Candidates are enumerated in
/// the finest unit of the target's tier; the winner is converted back to
/// world units and auto-scaled to the coarsest unit whose magnitude stays
/// at least 1 for labeling.
///
/// Degenerate targets (zero, negative, non-finite) fit no candidate and
/// yield the smallest defined nice length, so a caller always has
/// something to render.
#[must_use]
pub fn select_nice_length(target_world: f64, world_unit: LengthUnit) -> NiceLength {
    let finest = world_unit.finest();
    let target = finest.from_finest(world_unit.to_finest(target_world));

    let mut best = None;
    if target.is_finite() && target > 0.0 {
        let limit = target * (1.0 + EPSILON);
        for decade in 0..=MAX_DECADE {
            let scale = 10_f64.powi(decade);
            // The smallest member of this decade already exceeds the
            // target, so every later decade does too.
            if NICE_MAGNITUDES[0] * scale > limit {
                break;
            }
            for magnitude in NICE_MAGNITUDES {
                let candidate = magnitude * scale;
                if candidate <= limit {
                    best = Some(match best {
                        Some(current) if current >= candidate => current,
                        _ => candidate,
                    });
                }
            }
        }
    }
    let chosen_in_finest = best.unwrap_or(NICE_MAGNITUDES[0]);

    let world = world_unit.from_finest(finest.to_finest(chosen_in_finest));
    let (value, unit) = best_fit(chosen_in_finest, finest);
    let label = format_quantity(value, unit);
    NiceLength {
        world,
        value,
        unit,
        label,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_nice(value: f64) -> bool {
        // value must be m × 10^k with m in the nice set.
        let exponent = value.abs().log10().floor() as i32;
        for shift in [exponent - 1, exponent, exponent + 1] {
            let scaled = value / 10_f64.powi(shift);
            if NICE_MAGNITUDES
                .iter()
                .any(|m| (scaled - m).abs() < 1e-6 * m)
            {
                return true;
            }
        }
        false
    }

    #[test]
    fn exact_nice_target_selects_itself() {
        let nice = select_nice_length(75.0, LengthUnit::Micrometer);
        assert_eq!(nice.world, 75.0);
        assert_eq!(nice.unit, LengthUnit::Micrometer);
        assert_eq!(nice.label, "75 µm");
    }

    #[test]
    fn result_never_exceeds_target_and_is_nice() {
        for target in [0.3, 1.7, 8.0, 12.0, 80.0, 130.0, 2_600.0, 99_999.0] {
            let nice = select_nice_length(target, LengthUnit::Micrometer);
            assert!(
                nice.world <= target * (1.0 + 1e-9),
                "{} exceeded target {target}",
                nice.world
            );
            assert!(is_nice(nice.world * 1e3), "{} is not nice", nice.world);
        }
    }

    #[test]
    fn rounds_eighty_down_to_seventy_five() {
        let nice = select_nice_length(80.0, LengthUnit::Micrometer);
        assert_eq!(nice.world, 75.0);
    }

    #[test]
    fn auto_scales_to_coarser_unit() {
        // 2000 µm target: the winner is 2000 µm itself, labeled as 2 mm.
        let nice = select_nice_length(2000.0, LengthUnit::Micrometer);
        assert_eq!(nice.world, 2000.0);
        assert_eq!(nice.unit, LengthUnit::Millimeter);
        assert_eq!(nice.value, 2.0);
        assert_eq!(nice.label, "2 mm");
    }

    #[test]
    fn sub_unit_target_uses_finer_unit() {
        // 0.8 µm = 800 nm; largest nice value at or below is 750 nm.
        let nice = select_nice_length(0.8, LengthUnit::Micrometer);
        assert_eq!(nice.unit, LengthUnit::Nanometer);
        assert_eq!(nice.value, 750.0);
        assert!((nice.world - 0.75).abs() < 1e-12);
    }

    #[test]
    fn degenerate_targets_clamp_to_smallest_nice_length() {
        for target in [0.0, -3.0, f64::NAN, f64::NEG_INFINITY] {
            let nice = select_nice_length(target, LengthUnit::Micrometer);
            assert_eq!(nice.unit, LengthUnit::Nanometer);
            assert_eq!(nice.value, 1.0);
        }
    }

    #[test]
    fn pixel_tier_stays_in_pixels() {
        let nice = select_nice_length(130.0, LengthUnit::Pixel);
        assert_eq!(nice.world, 100.0);
        assert_eq!(nice.unit, LengthUnit::Pixel);
        assert_eq!(nice.label, "100 px");
    }
}
