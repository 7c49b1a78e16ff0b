//! Threshold constants for the grading rule table.
//!
//! Hue bounds are in degrees, saturation and value on the 8-bit `0..=255`
//! scale. Endpoint inclusivity is part of each rule: a hue of exactly 140
//! degrees is Ceremonial-eligible but not Culinary-eligible.

/// Ceremonial hue band, inclusive on both ends.
pub const CEREMONIAL_HUE_MIN: f64 = 90.0;
pub const CEREMONIAL_HUE_MAX: f64 = 140.0;
pub const CEREMONIAL_MIN_SATURATION: f64 = 100.0;
pub const CEREMONIAL_MIN_VALUE: f64 = 60.0;

/// Yellower culinary band, `[70, 90)`.
pub const CULINARY_WARM_HUE_MIN: f64 = 70.0;
pub const CULINARY_WARM_HUE_MAX: f64 = 90.0;
/// Bluer culinary band, `(140, 160]`.
pub const CULINARY_COOL_HUE_MIN: f64 = 140.0;
pub const CULINARY_COOL_HUE_MAX: f64 = 160.0;
pub const CULINARY_MIN_SATURATION: f64 = 70.0;

/// A hue interval with explicit endpoint inclusivity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HueRange {
    pub low: f64,
    pub high: f64,
    pub low_inclusive: bool,
    pub high_inclusive: bool,
}

impl HueRange {
    /// `[low, high]`
    pub const fn closed(low: f64, high: f64) -> Self {
        Self {
            low,
            high,
            low_inclusive: true,
            high_inclusive: true,
        }
    }

    /// `[low, high)`
    pub const fn closed_open(low: f64, high: f64) -> Self {
        Self {
            low,
            high,
            low_inclusive: true,
            high_inclusive: false,
        }
    }

    /// `(low, high]`
    pub const fn open_closed(low: f64, high: f64) -> Self {
        Self {
            low,
            high,
            low_inclusive: false,
            high_inclusive: true,
        }
    }

    pub fn contains(&self, hue: f64) -> bool {
        let above = if self.low_inclusive {
            hue >= self.low
        } else {
            hue > self.low
        };
        let below = if self.high_inclusive {
            hue <= self.high
        } else {
            hue < self.high
        };
        above && below
    }
}

/// The full rule table, evaluated by [`classify`](super::classify).
///
/// `Default` yields the standard thresholds above. Custom tables exist so
/// the rule order and boundaries can be tested in isolation.
#[derive(Debug, Clone, PartialEq)]
pub struct GradingThresholds {
    pub ceremonial_hue: HueRange,
    pub ceremonial_min_saturation: f64,
    pub ceremonial_min_value: f64,
    pub culinary_hues: [HueRange; 2],
    pub culinary_min_saturation: f64,
}

impl Default for GradingThresholds {
    fn default() -> Self {
        Self {
            ceremonial_hue: HueRange::closed(CEREMONIAL_HUE_MIN, CEREMONIAL_HUE_MAX),
            ceremonial_min_saturation: CEREMONIAL_MIN_SATURATION,
            ceremonial_min_value: CEREMONIAL_MIN_VALUE,
            culinary_hues: [
                HueRange::closed_open(CULINARY_WARM_HUE_MIN, CULINARY_WARM_HUE_MAX),
                HueRange::open_closed(CULINARY_COOL_HUE_MIN, CULINARY_COOL_HUE_MAX),
            ],
            culinary_min_saturation: CULINARY_MIN_SATURATION,
        }
    }
}
