// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Persisted workout layout.
//!
//! `StoredWorkout` is plain data matching the JSON objects kept under the
//! `workouts` storage key. It is never handed to callers directly: loading
//! rehydrates each entry into a full `Workout`, re-running validation and
//! recomputing the derived metric.

use crate::error::ValidationError;
use crate::models::workout::{label_for, Coordinates, Workout, WorkoutId};
use crate::models::WorkoutKind;
use crate::services::validation::validate;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Relative tolerance when comparing a stored metric with the recomputed one.
const METRIC_TOLERANCE: f64 = 1e-9;

/// One workout as persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct StoredWorkout {
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub date: DateTime<Utc>,
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub id: WorkoutId,
    #[serde(default)]
    pub clicks: u32,
    #[cfg_attr(feature = "binding-generation", ts(type = "[number, number]"))]
    pub coords: Coordinates,
    pub distance: f64,
    pub duration: f64,
    #[serde(rename = "type")]
    pub kind: WorkoutKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cadence: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pace: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevation_gain: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
    #[serde(default)]
    pub description: String,
}

impl From<&Workout> for StoredWorkout {
    fn from(workout: &Workout) -> Self {
        let (cadence, pace, elevation_gain, speed) = match workout.kind() {
            WorkoutKind::Running => (Some(workout.extra()), Some(workout.metric()), None, None),
            WorkoutKind::Cycling => (None, None, Some(workout.extra()), Some(workout.metric())),
        };

        Self {
            date: workout.created_at(),
            id: workout.id().clone(),
            clicks: workout.interaction_count(),
            coords: workout.coordinates(),
            distance: workout.distance_km(),
            duration: workout.duration_min(),
            kind: workout.kind(),
            cadence,
            pace,
            elevation_gain,
            speed,
            description: workout.label().to_string(),
        }
    }
}

impl StoredWorkout {
    /// Rebuild a live workout from persisted data.
    ///
    /// The stored label and click count are kept; the derived metric is
    /// always recomputed from the inputs.
    pub fn rehydrate(self) -> Result<Workout, ValidationError> {
        let StoredWorkout {
            date,
            id,
            clicks,
            coords,
            distance,
            duration,
            kind,
            cadence,
            pace,
            elevation_gain,
            speed,
            description,
        } = self;

        let rules = kind.rules();
        let (extra, stored_metric) = match kind {
            WorkoutKind::Running => (cadence, pace),
            WorkoutKind::Cycling => (elevation_gain, speed),
        };
        let extra = extra.ok_or(ValidationError::MissingField {
            field: rules.extra_field,
        })?;

        validate(kind, coords, distance, duration, extra)?;

        let label = if description.trim().is_empty() {
            label_for(kind, date)
        } else {
            description
        };

        let mut workout =
            Workout::with_label(id, date, kind, coords, distance, duration, extra, label);
        workout.set_interaction_count(clicks);

        if let Some(stored) = stored_metric {
            let recomputed = workout.metric();
            if (stored - recomputed).abs() > METRIC_TOLERANCE * recomputed.abs().max(1.0) {
                tracing::warn!(
                    id = %workout.id(),
                    field = rules.metric_field,
                    stored,
                    recomputed,
                    "Stored metric disagrees with inputs, using recomputed value"
                );
            }
        }

        Ok(workout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RUNNING_JSON: &str = r#"{
        "date": "2024-04-14T09:30:00.000Z",
        "id": "3087000123",
        "clicks": 0,
        "coords": [51.5, -0.1],
        "distance": 5.2,
        "duration": 24,
        "type": "running",
        "cadence": 178,
        "pace": 4.615384615384615,
        "description": "Running on April 14"
    }"#;

    #[test]
    fn test_parse_stored_running() {
        let stored: StoredWorkout = serde_json::from_str(RUNNING_JSON).unwrap();
        assert_eq!(stored.kind, WorkoutKind::Running);
        assert_eq!(stored.coords, Coordinates::new(51.5, -0.1));
        assert_eq!(stored.cadence, Some(178.0));
        assert_eq!(stored.elevation_gain, None);
    }

    #[test]
    fn test_rehydrate_keeps_label_and_recomputes_pace() {
        let stored: StoredWorkout = serde_json::from_str(RUNNING_JSON).unwrap();
        let workout = stored.rehydrate().unwrap();

        assert_eq!(workout.id().as_str(), "3087000123");
        assert_eq!(workout.label(), "Running on April 14");
        assert!((workout.pace_min_per_km().unwrap() - 24.0 / 5.2).abs() < 1e-12);
    }

    #[test]
    fn test_rehydrated_workout_accepts_interactions() {
        let stored: StoredWorkout = serde_json::from_str(RUNNING_JSON).unwrap();
        let mut workout = stored.rehydrate().unwrap();
        workout.record_interaction();
        assert_eq!(workout.interaction_count(), 1);
    }

    #[test]
    fn test_rehydrate_missing_extra_field() {
        let mut stored: StoredWorkout = serde_json::from_str(RUNNING_JSON).unwrap();
        stored.cadence = None;
        assert_eq!(
            stored.rehydrate(),
            Err(ValidationError::MissingField { field: "cadence" })
        );
    }

    #[test]
    fn test_rehydrate_rejects_invalid_numbers() {
        let mut stored: StoredWorkout = serde_json::from_str(RUNNING_JSON).unwrap();
        stored.distance = 0.0;
        assert_eq!(
            stored.rehydrate(),
            Err(ValidationError::NotPositive { field: "distance" })
        );
    }

    #[test]
    fn test_cycling_fields_use_camel_case() {
        let workout = Workout::new(
            WorkoutId::from("0000000009"),
            Utc::now(),
            WorkoutKind::Cycling,
            Coordinates::new(51.5, -0.1),
            27.0,
            95.0,
            523.0,
        );
        let value = serde_json::to_value(StoredWorkout::from(&workout)).unwrap();

        assert_eq!(value["type"], "cycling");
        assert_eq!(value["elevationGain"], 523.0);
        assert!(value.get("cadence").is_none());
        assert!(value.get("speed").is_some());
    }
}
