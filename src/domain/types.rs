/// Shared unit-conversion constants used throughout the domain layer
///
/// The empirical coefficients in the calorie formulas live next to the
/// variant that owns them; the constants here are the unit conversions
/// every variant shares, plus the standard action lengths.

/// Meters in one kilometer.
pub const M_PER_KM: f64 = 1000.0;

/// Minutes in one hour.
pub const MIN_PER_HOUR: f64 = 60.0;

/// Centimeters in one meter.
pub const CM_PER_M: f64 = 100.0;

/// Milliseconds in one minute.
pub const MS_PER_MIN: f64 = 60_000.0;

/// Conversion factor from km/h to m/s.
pub const KMH_TO_MSEC: f64 = 0.278;

/// Length of one step in meters (running and walking).
pub const STEP_LEN_M: f64 = 0.65;

/// Length of one stroke in meters (swimming).
pub const STROKE_LEN_M: f64 = 1.38;
