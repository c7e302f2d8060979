// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod markers;
pub mod validation;
pub mod workouts;

pub use validation::validate;
pub use workouts::{ResetSignal, WorkoutCollection};
