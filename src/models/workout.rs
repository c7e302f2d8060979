// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Live workout records.
//!
//! A `Workout` is built once from inputs the caller has already validated and
//! never changes afterwards, except for its interaction counter. Derived
//! metrics and the label are computed in the constructor and cached.

use crate::models::kind::WorkoutKind;
use crate::time_utils::{local_month_day, month_name};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A map position as (latitude, longitude), stored as `[lat, lng]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

impl From<[f64; 2]> for Coordinates {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self { lat, lng }
    }
}

impl From<Coordinates> for [f64; 2] {
    fn from(c: Coordinates) -> Self {
        [c.lat, c.lng]
    }
}

impl From<Coordinates> for geo::Point<f64> {
    /// Geo points are (x, y), i.e. (lng, lat).
    fn from(c: Coordinates) -> Self {
        geo::Point::new(c.lng, c.lat)
    }
}

/// Workout identifier, derived from the creation stamp.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkoutId(String);

impl WorkoutId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value of the id, when it is one of ours.
    pub fn stamp(&self) -> Option<i64> {
        self.0.parse().ok()
    }
}

impl fmt::Display for WorkoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WorkoutId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Kind-specific input and its derived metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorkoutDetails {
    Running {
        cadence_spm: f64,
        pace_min_per_km: f64,
    },
    Cycling {
        elevation_gain_m: f64,
        speed_km_per_h: f64,
    },
}

impl WorkoutDetails {
    pub fn kind(&self) -> WorkoutKind {
        match self {
            WorkoutDetails::Running { .. } => WorkoutKind::Running,
            WorkoutDetails::Cycling { .. } => WorkoutKind::Cycling,
        }
    }
}

/// One logged activity.
#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    id: WorkoutId,
    created_at: DateTime<Utc>,
    coordinates: Coordinates,
    distance_km: f64,
    duration_min: f64,
    details: WorkoutDetails,
    label: String,
    interaction_count: u32,
}

impl Workout {
    /// Build a workout from inputs that have already been validated.
    ///
    /// No bounds checking happens here; `extra` is the cadence for running
    /// and the elevation gain for cycling.
    pub fn new(
        id: WorkoutId,
        created_at: DateTime<Utc>,
        kind: WorkoutKind,
        coordinates: Coordinates,
        distance_km: f64,
        duration_min: f64,
        extra: f64,
    ) -> Self {
        let label = label_for(kind, created_at);
        Self::with_label(
            id,
            created_at,
            kind,
            coordinates,
            distance_km,
            duration_min,
            extra,
            label,
        )
    }

    /// Like `new`, but with a label computed earlier (restored records).
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn with_label(
        id: WorkoutId,
        created_at: DateTime<Utc>,
        kind: WorkoutKind,
        coordinates: Coordinates,
        distance_km: f64,
        duration_min: f64,
        extra: f64,
        label: String,
    ) -> Self {
        let metric = (kind.rules().metric)(distance_km, duration_min);
        let details = match kind {
            WorkoutKind::Running => WorkoutDetails::Running {
                cadence_spm: extra,
                pace_min_per_km: metric,
            },
            WorkoutKind::Cycling => WorkoutDetails::Cycling {
                elevation_gain_m: extra,
                speed_km_per_h: metric,
            },
        };

        Self {
            id,
            created_at,
            coordinates,
            distance_km,
            duration_min,
            details,
            label,
            interaction_count: 0,
        }
    }

    pub(crate) fn set_interaction_count(&mut self, count: u32) {
        self.interaction_count = count;
    }

    /// Count one more selection of this workout.
    pub fn record_interaction(&mut self) {
        self.interaction_count = self.interaction_count.saturating_add(1);
    }

    pub fn id(&self) -> &WorkoutId {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    pub fn duration_min(&self) -> f64 {
        self.duration_min
    }

    pub fn kind(&self) -> WorkoutKind {
        self.details.kind()
    }

    pub fn details(&self) -> &WorkoutDetails {
        &self.details
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn interaction_count(&self) -> u32 {
        self.interaction_count
    }

    /// Cadence (running) or elevation gain (cycling).
    pub fn extra(&self) -> f64 {
        match self.details {
            WorkoutDetails::Running { cadence_spm, .. } => cadence_spm,
            WorkoutDetails::Cycling {
                elevation_gain_m, ..
            } => elevation_gain_m,
        }
    }

    /// Pace (running) or speed (cycling).
    pub fn metric(&self) -> f64 {
        match self.details {
            WorkoutDetails::Running {
                pace_min_per_km, ..
            } => pace_min_per_km,
            WorkoutDetails::Cycling { speed_km_per_h, .. } => speed_km_per_h,
        }
    }

    pub fn pace_min_per_km(&self) -> Option<f64> {
        match self.details {
            WorkoutDetails::Running {
                pace_min_per_km, ..
            } => Some(pace_min_per_km),
            WorkoutDetails::Cycling { .. } => None,
        }
    }

    pub fn speed_km_per_h(&self) -> Option<f64> {
        match self.details {
            WorkoutDetails::Cycling { speed_km_per_h, .. } => Some(speed_km_per_h),
            WorkoutDetails::Running { .. } => None,
        }
    }
}

/// Build a label such as "Running on April 14" from a 0-based month.
pub fn describe(kind: WorkoutKind, month0: u32, day: u32) -> String {
    format!(
        "{} on {} {}",
        kind.display_name(),
        month_name(month0).unwrap_or("Unknown"),
        day
    )
}

/// Label for a workout created at `created_at`, in local time.
pub fn label_for(kind: WorkoutKind, created_at: DateTime<Utc>) -> String {
    let (month0, day) = local_month_day(created_at);
    describe(kind, month0, day)
}
