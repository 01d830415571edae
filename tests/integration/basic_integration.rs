/// Integration tests covering the full compute-and-render pipeline
use workout_report::*;

use chrono::Duration;

#[cfg(test)]
mod basic_integration_tests {
    use super::*;

    fn swimming_fixture() -> Swimming {
        Swimming::new(
            Workout::new(
                "Swimming".to_string(),
                2000,
                STROKE_LEN_M,
                Duration::minutes(90),
                85.0,
            )
            .expect("Failed to build swimming record"),
            50.0,
            5,
        )
        .expect("Failed to build swimming workout")
    }

    fn walking_fixture() -> Walking {
        Walking::new(
            Workout::new(
                "Walking".to_string(),
                20000,
                STEP_LEN_M,
                Duration::hours(3) + Duration::minutes(45),
                85.0,
            )
            .expect("Failed to build walking record"),
            185.0,
        )
        .expect("Failed to build walking workout")
    }

    fn running_fixture() -> Running {
        Running::new(
            Workout::new(
                "Running".to_string(),
                5000,
                STEP_LEN_M,
                Duration::minutes(30),
                85.0,
            )
            .expect("Failed to build running record"),
        )
    }

    #[test]
    fn test_swimming_report() {
        let text = render(&swimming_fixture());

        assert_eq!(
            text,
            "Training type: Swimming\n\
             Duration: 90 min\n\
             Distance: 2.76 km.\n\
             Avg speed: 0.17 km/h\n\
             Calories burned: 323.00\n"
        );
    }

    #[test]
    fn test_walking_report() {
        let text = render(&walking_fixture());

        assert_eq!(
            text,
            "Training type: Walking\n\
             Duration: 225 min\n\
             Distance: 13.00 km.\n\
             Avg speed: 3.47 km/h\n\
             Calories burned: 947.82\n"
        );
    }

    #[test]
    fn test_running_report() {
        let text = render(&running_fixture());

        assert_eq!(
            text,
            "Training type: Running\n\
             Duration: 30 min\n\
             Distance: 3.25 km.\n\
             Avg speed: 6.50 km/h\n\
             Calories burned: 302.91\n"
        );
    }

    #[test]
    fn test_swimming_report_does_not_use_stroke_speed() {
        // The same raw numbers run through the base formula would give a
        // very different speed line (2.76 km over 1.5 h is 1.84 km/h)
        let swim = swimming_fixture();
        let stroke_speed = swim.workout().mean_speed_kmh();

        let text = render(&swim);
        assert!(text.contains("Avg speed: 0.17 km/h"));
        assert!(!text.contains(&format!("Avg speed: {:.2} km/h", stroke_speed)));
    }

    #[test]
    fn test_zero_duration_reports_zero_metrics() {
        let running = Running::new(
            Workout::new(
                "Running".to_string(),
                5000,
                STEP_LEN_M,
                Duration::zero(),
                85.0,
            )
            .expect("Failed to build running record"),
        );

        let text = render(&running);
        assert!(text.contains("Avg speed: 0.00 km/h"));
        assert!(text.contains("Calories burned: 0.00"));
    }

    #[test]
    fn test_summary_serde_round_trip() {
        let mut summary = walking_fixture().summary();
        summary.calories = walking_fixture().calories();

        let json = serde_json::to_string(&summary).expect("Failed to serialize summary");
        let back: WorkoutSummary =
            serde_json::from_str(&json).expect("Failed to deserialize summary");

        assert_eq!(back, summary);
    }
}
