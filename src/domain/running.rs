/// Running training variant
///
/// Running adds nothing to the base measurement record; it only brings
/// its own calorie formula.

use crate::domain::types::{MIN_PER_HOUR, M_PER_KM};
use crate::domain::{Activity, Workout};

/// Empirical calorie-per-speed multiplier for running.
const CALORIES_SPEED_MULTIPLIER: f64 = 18.0;
/// Empirical calorie-per-speed shift for running.
const CALORIES_SPEED_SHIFT: f64 = 1.79;

/// A running workout
#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    /// Shared measurement record
    pub workout: Workout,
}

impl Running {
    /// Wrap a validated measurement record as a running workout
    pub fn new(workout: Workout) -> Self {
        Self { workout }
    }
}

impl Activity for Running {
    fn workout(&self) -> &Workout {
        &self.workout
    }

    /// `(18 * speed + 1.79) * weight / 1000 * hours * 60`
    ///
    /// Returns 0 when the duration is zero.
    fn calories(&self) -> f64 {
        let hours = self.workout.duration_hours();
        if hours == 0.0 {
            return 0.0;
        }

        let calories_mean =
            CALORIES_SPEED_MULTIPLIER * self.mean_speed_kmh() + CALORIES_SPEED_SHIFT;
        calories_mean * self.workout.weight_kg / M_PER_KM * hours * MIN_PER_HOUR
    }
}
