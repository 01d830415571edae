/// Swimming training variant
///
/// Swimming adds the pool length and lap count to the base record and
/// overrides the mean-speed formula to use them instead of the stroke
/// count. Distance still derives from strokes.

use crate::domain::types::M_PER_KM;
use crate::domain::{Activity, DomainError, Workout};

/// Empirical speed offset for swimming.
const CALORIES_SPEED_SHIFT: f64 = 1.1;
/// Empirical weight multiplier for swimming.
const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

/// A swimming workout
#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    /// Shared measurement record
    pub workout: Workout,
    /// One-way pool length in meters
    pub pool_len_m: f64,
    /// Number of pool lengths completed
    pub pool_laps: u32,
}

impl Swimming {
    /// Create a new swimming workout with validation
    pub fn new(workout: Workout, pool_len_m: f64, pool_laps: u32) -> Result<Self, DomainError> {
        Self::validate_pool_len(pool_len_m)?;

        Ok(Self {
            workout,
            pool_len_m,
            pool_laps,
        })
    }

    /// Validate that the pool length is a positive number
    fn validate_pool_len(pool_len_m: f64) -> Result<(), DomainError> {
        if !pool_len_m.is_finite() || pool_len_m <= 0.0 {
            return Err(DomainError::InvalidPoolLength(format!(
                "Pool length must be a positive number of meters, got {}",
                pool_len_m
            )));
        }
        Ok(())
    }
}

impl Activity for Swimming {
    fn workout(&self) -> &Workout {
        &self.workout
    }

    /// `pool_len * laps / 1000 / hours`, 0 when the duration is zero
    fn mean_speed_kmh(&self) -> f64 {
        let hours = self.workout.duration_hours();
        if hours == 0.0 {
            return 0.0;
        }
        self.pool_len_m * self.pool_laps as f64 / M_PER_KM / hours
    }

    /// `(speed + 1.1) * 2 * weight * hours`
    fn calories(&self) -> f64 {
        (self.mean_speed_kmh() + CALORIES_SPEED_SHIFT)
            * CALORIES_WEIGHT_MULTIPLIER
            * self.workout.weight_kg
            * self.workout.duration_hours()
    }
}
