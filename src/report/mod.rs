/// Report rendering for training variants
///
/// This module implements the report driver: given any training variant,
/// it computes the calories, builds the summary, fills the calorie field
/// in, and renders the fixed five-line text block.

use tracing::debug;

use crate::domain::Activity;

/// Render the text report for a workout
///
/// The calorie value is computed through the variant's own formula and
/// assigned into the summary before rendering; everything else in the
/// summary comes from the shared builder.
pub fn render<A: Activity>(activity: &A) -> String {
    let calories = activity.calories();
    let mut summary = activity.summary();
    summary.calories = calories;

    debug!(
        "Rendered report for {}: {:.2} km, {:.2} km/h, {:.2} kcal",
        summary.label, summary.distance_km, summary.speed_kmh, summary.calories
    );

    summary.to_string()
}
