// Copyright 2026 the Epiphyte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Length units, conversion, and quantity formatting.

/// A length unit understood by the overlay engine.
///
/// Two tiers exist: the metric tier (power-of-three SI prefixes from
/// nanometers to kilometers) and the dimensionless pixel tier. Conversion
/// is only defined within a tier; see [`convert`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    /// 10⁻⁹ meters.
    Nanometer,
    /// 10⁻⁶ meters.
    Micrometer,
    /// 10⁻³ meters.
    Millimeter,
    /// The SI base length unit.
    Meter,
    /// 10³ meters.
    Kilometer,
    /// A dimensionless canvas/world pixel.
    Pixel,
}

/// The dimension a [`LengthUnit`] belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum UnitTier {
    /// Physical metric lengths.
    Metric,
    /// Dimensionless pixels.
    Pixel,
}

/// Metric units ordered coarsest first, used for auto-scaling.
const METRIC_COARSE_TO_FINE: [LengthUnit; 5] = [
    LengthUnit::Kilometer,
    LengthUnit::Meter,
    LengthUnit::Millimeter,
    LengthUnit::Micrometer,
    LengthUnit::Nanometer,
];

impl LengthUnit {
    /// Returns the abbreviated unit symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Nanometer => "nm",
            Self::Micrometer => "µm",
            Self::Millimeter => "mm",
            Self::Meter => "m",
            Self::Kilometer => "km",
            Self::Pixel => "px",
        }
    }

    /// Returns the tier (dimension) this unit belongs to.
    #[must_use]
    pub const fn tier(self) -> UnitTier {
        match self {
            Self::Pixel => UnitTier::Pixel,
            _ => UnitTier::Metric,
        }
    }

    /// Returns the finest unit of this unit's tier.
    ///
    /// The finest unit is the reference scale for the nice-length search:
    /// candidate lengths are enumerated in it so the ladder covers the
    /// tier's full convertible range.
    #[must_use]
    pub const fn finest(self) -> Self {
        match self.tier() {
            UnitTier::Metric => Self::Nanometer,
            UnitTier::Pixel => Self::Pixel,
        }
    }

    /// Returns `true` if values can be converted between the two units.
    #[must_use]
    pub const fn compatible(self, other: Self) -> bool {
        matches!(
            (self.tier(), other.tier()),
            (UnitTier::Metric, UnitTier::Metric) | (UnitTier::Pixel, UnitTier::Pixel)
        )
    }

    /// How many finest-tier units one of this unit is.
    const fn factor_to_finest(self) -> f64 {
        match self {
            Self::Nanometer => 1.0,
            Self::Micrometer => 1e3,
            Self::Millimeter => 1e6,
            Self::Meter => 1e9,
            Self::Kilometer => 1e12,
            Self::Pixel => 1.0,
        }
    }

    /// Converts a value in this unit into the tier's finest unit.
    pub(crate) fn to_finest(self, value: f64) -> f64 {
        value * self.factor_to_finest()
    }

    /// Converts a value in the tier's finest unit into this unit.
    pub(crate) fn from_finest(self, value: f64) -> f64 {
        value / self.factor_to_finest()
    }
}

/// Converts a magnitude between two compatible units.
///
/// Returns `None` when the units belong to different tiers (e.g. pixels to
/// millimeters); there is no conversion across dimensions.
#[must_use]
pub fn convert(value: f64, from: LengthUnit, to: LengthUnit) -> Option<f64> {
    if !from.compatible(to) {
        return None;
    }
    Some(to.from_finest(from.to_finest(value)))
}

/// Re-expresses a magnitude in the coarsest unit where it stays at least 1.
///
/// This is the auto-scaling step of quantity formatting: "2 mm" is
/// preferred over "2000 µm" or "0.002 m". Magnitudes smaller than one of
/// the tier's finest unit stay in the finest unit. Pixel quantities are
/// never rescaled.
#[must_use]
pub fn best_fit(value: f64, unit: LengthUnit) -> (f64, LengthUnit) {
    if unit.tier() == UnitTier::Pixel {
        return (value, unit);
    }
    let in_finest = unit.to_finest(value);
    for candidate in METRIC_COARSE_TO_FINE {
        let scaled = candidate.from_finest(in_finest);
        if scaled.abs() >= 1.0 {
            return (scaled, candidate);
        }
    }
    let finest = unit.finest();
    (finest.from_finest(in_finest), finest)
}

/// Formats a magnitude and unit as a human-readable quantity string.
///
/// Integral magnitudes render without a fractional part; others are
/// rendered with up to three decimals, trailing zeros trimmed.
#[must_use]
pub fn format_quantity(value: f64, unit: LengthUnit) -> String {
    format!("{} {}", format_magnitude(value), unit.symbol())
}

fn format_magnitude(value: f64) -> String {
    if value == value.trunc() && value.abs() < 1e15 {
        return format!("{value:.0}");
    }
    let mut text = format!("{value:.3}");
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_within_metric_tier() {
        assert_eq!(
            convert(2.0, LengthUnit::Millimeter, LengthUnit::Micrometer),
            Some(2000.0)
        );
        assert_eq!(
            convert(2000.0, LengthUnit::Micrometer, LengthUnit::Millimeter),
            Some(2.0)
        );
        assert_eq!(
            convert(1.5, LengthUnit::Kilometer, LengthUnit::Meter),
            Some(1500.0)
        );
    }

    #[test]
    fn convert_across_tiers_is_undefined() {
        assert_eq!(convert(1.0, LengthUnit::Pixel, LengthUnit::Meter), None);
        assert_eq!(convert(1.0, LengthUnit::Nanometer, LengthUnit::Pixel), None);
    }

    #[test]
    fn convert_pixel_to_pixel_is_identity() {
        assert_eq!(convert(42.0, LengthUnit::Pixel, LengthUnit::Pixel), Some(42.0));
    }

    #[test]
    fn best_fit_prefers_coarsest_unit_at_least_one() {
        assert_eq!(
            best_fit(2000.0, LengthUnit::Micrometer),
            (2.0, LengthUnit::Millimeter)
        );
        let (value, unit) = best_fit(0.002, LengthUnit::Meter);
        assert_eq!(unit, LengthUnit::Millimeter);
        assert!((value - 2.0).abs() < 1e-9, "got {value}");
        assert_eq!(best_fit(75.0, LengthUnit::Micrometer), (75.0, LengthUnit::Micrometer));
        assert_eq!(best_fit(1500.0, LengthUnit::Meter), (1.5, LengthUnit::Kilometer));
    }

    #[test]
    fn best_fit_clamps_to_finest_unit() {
        let (value, unit) = best_fit(0.5, LengthUnit::Nanometer);
        assert_eq!(unit, LengthUnit::Nanometer);
        assert!((value - 0.5).abs() < 1e-12);
    }

    #[test]
    fn best_fit_leaves_pixels_alone() {
        assert_eq!(best_fit(2000.0, LengthUnit::Pixel), (2000.0, LengthUnit::Pixel));
    }

    #[test]
    fn format_quantity_trims_decimals() {
        assert_eq!(format_quantity(75.0, LengthUnit::Micrometer), "75 µm");
        assert_eq!(format_quantity(2.5, LengthUnit::Millimeter), "2.5 mm");
        assert_eq!(format_quantity(0.25, LengthUnit::Meter), "0.25 m");
        assert_eq!(format_quantity(100.0, LengthUnit::Pixel), "100 px");
    }
}
