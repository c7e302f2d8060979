// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Workout Tracker: log runs and rides on a map
//!
//! This crate provides the core of a client-side workout tracker: the
//! workout records, the collection that owns and persists them, and the
//! controller that drives a map and list view from user events.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod services;
pub mod time_utils;
pub mod ui;

use config::Config;
use db::KeyValueStore;
use services::WorkoutCollection;

/// Application context, built once at startup and handed to the controller.
pub struct AppState<S> {
    pub config: Config,
    pub workouts: WorkoutCollection<S>,
}

impl<S: KeyValueStore> AppState<S> {
    /// Build the context around `store`. Nothing is loaded until the
    /// controller starts.
    pub fn new(config: Config, store: S) -> Self {
        Self {
            config,
            workouts: WorkoutCollection::new(store),
        }
    }
}
