//! Unit conversions shared by the analytics and web layers.

/// Parsec to light-year conversion factor.
pub const PARSEC_TO_LIGHT_YEARS: f64 = 3.26156;

/// Width of one star-age histogram bin, in billions of years.
pub const STAR_AGE_BIN_GYR: f64 = 2.0;

/// Round to two decimal places, the precision used by every displayed figure.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Convert a distance in parsecs to light-years, rounded for display.
pub fn parsecs_to_light_years(parsecs: f64) -> f64 {
    round2(parsecs * PARSEC_TO_LIGHT_YEARS)
}
