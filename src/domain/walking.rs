/// Walking training variant
///
/// Walking adds the walker's height to the base record; the calorie
/// formula divides by it, so a non-positive height is rejected at
/// construction.

use crate::domain::types::{CM_PER_M, KMH_TO_MSEC};
use crate::domain::{Activity, DomainError, Workout};

/// Empirical weight multiplier for walking.
const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
/// Empirical speed-over-height multiplier for walking.
const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

/// A walking workout
#[derive(Debug, Clone, PartialEq)]
pub struct Walking {
    /// Shared measurement record
    pub workout: Workout,
    /// Walker's height in centimeters
    pub height_cm: f64,
}

impl Walking {
    /// Create a new walking workout with validation
    ///
    /// The height must be a positive number of centimeters; the calorie
    /// formula divides by it.
    pub fn new(workout: Workout, height_cm: f64) -> Result<Self, DomainError> {
        Self::validate_height(height_cm)?;

        Ok(Self { workout, height_cm })
    }

    /// Validate that the height is a positive number
    fn validate_height(height_cm: f64) -> Result<(), DomainError> {
        if !height_cm.is_finite() || height_cm <= 0.0 {
            return Err(DomainError::InvalidHeight(format!(
                "Height must be a positive number of centimeters, got {}",
                height_cm
            )));
        }
        Ok(())
    }
}

impl Activity for Walking {
    fn workout(&self) -> &Workout {
        &self.workout
    }

    /// `(0.035 * weight + speed_ms^2 / height_m * 0.029 * weight) * minutes`
    ///
    /// Speed is converted to m/s and height to meters first. A zero
    /// duration yields 0 through the minutes factor.
    fn calories(&self) -> f64 {
        let mean_speed_msec = self.mean_speed_kmh() * KMH_TO_MSEC;
        let height_m = self.height_cm / CM_PER_M;

        let calories_per_min = CALORIES_WEIGHT_MULTIPLIER * self.workout.weight_kg
            + mean_speed_msec.powi(2) / height_m
                * CALORIES_SPEED_HEIGHT_MULTIPLIER
                * self.workout.weight_kg;

        calories_per_min * self.workout.duration_minutes()
    }
}
