/// Workout measurement record shared by all training types
///
/// This module defines the Workout struct that holds the raw activity
/// measurements (action count, action length, duration, weight) along
/// with validation and the base distance/speed computations.

use chrono::Duration;

use crate::domain::types::{MIN_PER_HOUR, MS_PER_MIN, M_PER_KM};
use crate::domain::{DomainError, WorkoutSummary};

/// Raw measurements recorded for a single workout
///
/// This is the record every training variant wraps. An "action" is one
/// unit of movement (a step for running and walking, a stroke for
/// swimming), and distance is derived from the action count and the
/// length of one action.
#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    /// Training type label shown in the report header (e.g. "Running")
    pub label: String,
    /// Number of actions performed (steps or strokes)
    pub action_count: u32,
    /// Length of one action in meters
    pub action_len_m: f64,
    /// How long the workout lasted
    pub duration: Duration,
    /// Body weight in kilograms
    pub weight_kg: f64,
}

impl Workout {
    /// Create a new workout record with validation
    ///
    /// This is the main constructor that validates all fields and returns
    /// an error if any validation fails.
    pub fn new(
        label: String,
        action_count: u32,
        action_len_m: f64,
        duration: Duration,
        weight_kg: f64,
    ) -> Result<Self, DomainError> {
        // Validate the measurement data
        Self::validate_label(&label)?;
        Self::validate_duration(&duration)?;
        Self::validate_weight(weight_kg)?;

        Ok(Self {
            label,
            action_count,
            action_len_m,
            duration,
            weight_kg,
        })
    }

    /// Distance covered in kilometers, derived from the action count
    pub fn distance_km(&self) -> f64 {
        self.action_count as f64 * self.action_len_m / M_PER_KM
    }

    /// Mean speed in km/h over the whole workout
    ///
    /// Returns 0 when the duration is zero instead of dividing by zero.
    pub fn mean_speed_kmh(&self) -> f64 {
        let hours = self.duration_hours();
        if hours == 0.0 {
            return 0.0;
        }
        self.distance_km() / hours
    }

    /// Workout duration as fractional minutes
    pub fn duration_minutes(&self) -> f64 {
        self.duration.num_milliseconds() as f64 / MS_PER_MIN
    }

    /// Workout duration as fractional hours
    pub fn duration_hours(&self) -> f64 {
        self.duration_minutes() / MIN_PER_HOUR
    }

    /// Build a summary for this record using the given mean speed
    ///
    /// The speed is taken as a parameter so that variants which override
    /// the speed formula (swimming) land their own value in the summary.
    /// Calories are left at zero; the report driver fills them in.
    pub fn summary_with_speed(&self, speed_kmh: f64) -> WorkoutSummary {
        WorkoutSummary {
            label: self.label.clone(),
            duration_min: self.duration_minutes(),
            distance_km: self.distance_km(),
            speed_kmh,
            calories: 0.0,
        }
    }

    // Validation helper methods

    /// Validate the training type label
    fn validate_label(label: &str) -> Result<(), DomainError> {
        if label.trim().is_empty() {
            return Err(DomainError::InvalidLabel(
                "Workout label cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Validate that the duration is not negative
    fn validate_duration(duration: &Duration) -> Result<(), DomainError> {
        if *duration < Duration::zero() {
            return Err(DomainError::InvalidDuration(
                "Workout duration cannot be negative".to_string(),
            ));
        }
        Ok(())
    }

    /// Validate that the body weight is a positive number
    fn validate_weight(weight_kg: f64) -> Result<(), DomainError> {
        if !weight_kg.is_finite() || weight_kg <= 0.0 {
            return Err(DomainError::InvalidWeight(format!(
                "Body weight must be a positive number of kilograms, got {}",
                weight_kg
            )));
        }
        Ok(())
    }
}
