// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout kinds and the per-kind rules that drive validation and metrics.

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Discriminator for the closed set of workout kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum WorkoutKind {
    Running,
    Cycling,
}

/// What distinguishes one kind from another.
#[derive(Debug)]
pub struct KindRules {
    /// Name of the kind-specific input, as stored.
    pub extra_field: &'static str,
    /// Unit of the kind-specific input.
    pub extra_unit: &'static str,
    /// Whether the kind-specific input must be strictly positive.
    pub extra_must_be_positive: bool,
    /// Name of the derived metric, as stored.
    pub metric_field: &'static str,
    /// Unit of the derived metric.
    pub metric_unit: &'static str,
    /// Derived metric from (distance km, duration min).
    pub metric: fn(f64, f64) -> f64,
    /// Icon shown next to the workout in lists and popups.
    pub icon: &'static str,
}

static RUNNING_RULES: KindRules = KindRules {
    extra_field: "cadence",
    extra_unit: "spm",
    extra_must_be_positive: true,
    metric_field: "pace",
    metric_unit: "min/km",
    metric: pace_min_per_km,
    icon: "🏃‍♂️",
};

// Elevation loss is a valid ride, so only finiteness is enforced here.
static CYCLING_RULES: KindRules = KindRules {
    extra_field: "elevationGain",
    extra_unit: "m",
    extra_must_be_positive: false,
    metric_field: "speed",
    metric_unit: "km/h",
    metric: speed_km_per_h,
    icon: "🚴‍♀️",
};

/// Running pace in min/km.
pub fn pace_min_per_km(distance_km: f64, duration_min: f64) -> f64 {
    duration_min / distance_km
}

/// Cycling speed in km/h.
pub fn speed_km_per_h(distance_km: f64, duration_min: f64) -> f64 {
    distance_km / (duration_min / 60.0)
}

impl WorkoutKind {
    pub const ALL: [WorkoutKind; 2] = [WorkoutKind::Running, WorkoutKind::Cycling];

    /// The strategy record for this kind.
    pub fn rules(self) -> &'static KindRules {
        match self {
            WorkoutKind::Running => &RUNNING_RULES,
            WorkoutKind::Cycling => &CYCLING_RULES,
        }
    }

    /// Lowercase name, as persisted.
    pub fn as_str(self) -> &'static str {
        match self {
            WorkoutKind::Running => "running",
            WorkoutKind::Cycling => "cycling",
        }
    }

    /// Capitalized name used in labels.
    pub fn display_name(self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::Cycling => "Cycling",
        }
    }

    /// The kind the form switches to when its type selector is toggled.
    pub fn toggled(self) -> Self {
        match self {
            WorkoutKind::Running => WorkoutKind::Cycling,
            WorkoutKind::Cycling => WorkoutKind::Running,
        }
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkoutKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        WorkoutKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ValidationError::UnknownKind(s.to_string()))
    }
}
