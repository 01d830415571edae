/// Activity trait shared by all training variants
///
/// This module defines the capability set every training variant
/// provides: a calorie formula, a mean-speed formula, and a summary
/// builder. Variants share the base record via composition and may
/// override the provided methods.

use crate::domain::{Workout, WorkoutSummary};

/// Capability set over the training variants
///
/// The provided `summary` resolves `self.mean_speed_kmh()` through the
/// trait, so a variant that overrides the speed formula (swimming) gets
/// its own value into the summary without reimplementing the builder.
pub trait Activity {
    /// Access to the shared measurement record
    fn workout(&self) -> &Workout;

    /// Calories burned over the workout, in kcal
    fn calories(&self) -> f64;

    /// Mean speed in km/h; defaults to the base record's formula
    fn mean_speed_kmh(&self) -> f64 {
        self.workout().mean_speed_kmh()
    }

    /// Build the summary for this workout with calories left at zero
    fn summary(&self) -> WorkoutSummary {
        self.workout().summary_with_speed(self.mean_speed_kmh())
    }
}
