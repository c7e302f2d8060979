// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Presentation records handed to the map and list renderers.

use crate::models::workout::{Coordinates, Workout, WorkoutId};
use crate::models::WorkoutKind;
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// A marker to place on the map for one workout.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct MapMarker {
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub id: WorkoutId,
    #[cfg_attr(feature = "binding-generation", ts(type = "[number, number]"))]
    pub coords: Coordinates,
    #[serde(rename = "type")]
    pub kind: WorkoutKind,
    pub description: String,
    /// Popup content, e.g. "🏃‍♂️ Running on April 14"
    pub popup_content: String,
    /// CSS class of the popup, e.g. "running-popup"
    pub popup_class: String,
}

impl From<&Workout> for MapMarker {
    fn from(workout: &Workout) -> Self {
        let kind = workout.kind();
        Self {
            id: workout.id().clone(),
            coords: workout.coordinates(),
            kind,
            description: workout.label().to_string(),
            popup_content: format!("{} {}", kind.rules().icon, workout.label()),
            popup_class: format!("{}-popup", kind),
        }
    }
}

/// One row of the workout list, with values already formatted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListEntry {
    pub id: WorkoutId,
    #[serde(rename = "type")]
    pub kind: WorkoutKind,
    pub title: String,
    pub icon: &'static str,
    pub distance: String,
    pub duration: String,
    /// Pace or speed, one decimal place.
    pub metric: String,
    pub metric_unit: &'static str,
    /// Cadence or elevation gain, as entered.
    pub extra: String,
    pub extra_unit: &'static str,
}

impl From<&Workout> for ListEntry {
    fn from(workout: &Workout) -> Self {
        let kind = workout.kind();
        let rules = kind.rules();
        Self {
            id: workout.id().clone(),
            kind,
            title: workout.label().to_string(),
            icon: rules.icon,
            distance: workout.distance_km().to_string(),
            duration: workout.duration_min().to_string(),
            metric: format!("{:.1}", workout.metric()),
            metric_unit: rules.metric_unit,
            extra: workout.extra().to_string(),
            extra_unit: rules.extra_unit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn cycling() -> Workout {
        Workout::new(
            WorkoutId::from("0000000007"),
            Utc::now(),
            WorkoutKind::Cycling,
            Coordinates::new(51.5, -0.1),
            27.0,
            95.0,
            523.0,
        )
    }

    #[test]
    fn test_marker_popup() {
        let workout = cycling();
        let marker = MapMarker::from(&workout);
        assert_eq!(marker.popup_class, "cycling-popup");
        assert!(marker.popup_content.ends_with(workout.label()));
        assert_eq!(marker.coords, Coordinates::new(51.5, -0.1));
    }

    #[test]
    fn test_list_entry_formats_values() {
        let entry = ListEntry::from(&cycling());
        assert_eq!(entry.distance, "27");
        assert_eq!(entry.duration, "95");
        assert_eq!(entry.metric, "17.1");
        assert_eq!(entry.metric_unit, "km/h");
        assert_eq!(entry.extra, "523");
        assert_eq!(entry.extra_unit, "m");
    }
}
