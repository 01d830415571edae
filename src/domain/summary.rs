/// Workout summary value and its fixed-layout text rendering
///
/// This module defines the WorkoutSummary struct that holds the computed
/// metrics for one workout, and the Display impl that renders it into
/// the five-line report block.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Computed metrics for a single workout, ready for rendering
///
/// This is a derived, read-only value produced per report. The duration
/// is carried as fractional minutes because that is the unit the report
/// prints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSummary {
    /// Training type label (e.g. "Swimming")
    pub label: String,
    /// Workout duration in minutes
    pub duration_min: f64,
    /// Distance covered in kilometers
    pub distance_km: f64,
    /// Mean speed in km/h
    pub speed_kmh: f64,
    /// Calories burned in kcal
    pub calories: f64,
}

impl fmt::Display for WorkoutSummary {
    /// Render the fixed five-line report block
    ///
    /// Metric fields always print with exactly two decimals; the duration
    /// prints with default float formatting, so an integral number of
    /// minutes renders without a decimal point (e.g. "90").
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Training type: {}", self.label)?;
        writeln!(f, "Duration: {} min", self.duration_min)?;
        writeln!(f, "Distance: {:.2} km.", self.distance_km)?;
        writeln!(f, "Avg speed: {:.2} km/h", self.speed_kmh)?;
        writeln!(f, "Calories burned: {:.2}", self.calories)
    }
}
