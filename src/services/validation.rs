// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Numeric input validation for new and restored workouts.

use crate::error::ValidationError;
use crate::models::{Coordinates, WorkoutKind};

/// Check workout inputs against the rules for `kind`.
///
/// Every value must be finite. Distance and duration must be positive, and
/// so must the extra value when the kind says so. Cycling elevation gain is
/// deliberately only checked for finiteness: a ride can lose height.
pub fn validate(
    kind: WorkoutKind,
    coordinates: Coordinates,
    distance_km: f64,
    duration_min: f64,
    extra: f64,
) -> Result<(), ValidationError> {
    let rules = kind.rules();
    let inputs = [
        ("distance", distance_km, true),
        ("duration", duration_min, true),
        (rules.extra_field, extra, rules.extra_must_be_positive),
    ];

    if let Some(&(field, _, _)) = inputs.iter().find(|(_, value, _)| !value.is_finite()) {
        return Err(ValidationError::NotFinite { field });
    }

    if let Some(&(field, _, _)) = inputs
        .iter()
        .find(|(_, value, must_be_positive)| *must_be_positive && *value <= 0.0)
    {
        return Err(ValidationError::NotPositive { field });
    }

    if !coordinates.is_finite() {
        return Err(ValidationError::NotFinite { field: "coords" });
    }

    Ok(())
}
