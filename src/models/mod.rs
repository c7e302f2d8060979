// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod kind;
pub mod marker;
pub mod stored;
pub mod workout;

pub use kind::{KindRules, WorkoutKind};
pub use marker::{ListEntry, MapMarker};
pub use stored::StoredWorkout;
pub use workout::{Coordinates, Workout, WorkoutDetails, WorkoutId};
