// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Event controller.
//!
//! Handles the user's events one at a time:
//! - position known → center the map, place markers for saved workouts
//! - map click → show the form for that location
//! - form submit → validate, record, render, hide the form
//! - list click → pan to the workout
//! - delete click → remove the workout and its list entry

use crate::db::KeyValueStore;
use crate::error::{AppError, Result};
use crate::models::{Coordinates, ListEntry, MapMarker, Workout, WorkoutId, WorkoutKind};
use crate::services::ResetSignal;
use crate::ui::{FormInput, View};
use crate::AppState;

const POSITION_UNAVAILABLE: &str = "Could not get your position";

/// Where the new-workout flow stands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrackerState {
    /// No location chosen; the form is hidden.
    Idle,
    /// A map location was clicked and the form is open for it.
    AwaitingFormInput { coords: Coordinates },
}

/// Drives a [`View`] from user events.
pub struct Tracker<S> {
    state: AppState<S>,
    flow: TrackerState,
    form_kind: WorkoutKind,
    map_ready: bool,
}

impl<S: KeyValueStore> Tracker<S> {
    pub fn new(state: AppState<S>) -> Self {
        Self {
            state,
            flow: TrackerState::Idle,
            form_kind: WorkoutKind::Running,
            map_ready: false,
        }
    }

    pub fn state(&self) -> &AppState<S> {
        &self.state
    }

    pub fn flow(&self) -> TrackerState {
        self.flow
    }

    pub fn form_kind(&self) -> WorkoutKind {
        self.form_kind
    }

    pub fn workouts(&self) -> &[Workout] {
        self.state.workouts.workouts()
    }

    /// Load saved workouts and render them in the list.
    ///
    /// Markers wait for `on_position`, since the map does not exist yet.
    pub fn start(&mut self, view: &mut dyn View) -> Result<()> {
        self.state.workouts.load_from_storage()?;
        for workout in self.state.workouts.workouts() {
            view.render_workout(&ListEntry::from(workout));
        }
        Ok(())
    }

    /// The user's position is known: show the map there with every marker.
    pub fn on_position(&mut self, coords: Coordinates, view: &mut dyn View) {
        self.map_ready = true;
        view.center_on(coords, self.state.config.map_zoom_level);
        for marker in self.state.workouts.markers() {
            view.place_marker(&marker);
        }
        tracing::debug!(
            markers = self.state.workouts.len(),
            "Map ready"
        );
    }

    pub fn on_position_unavailable(&mut self, view: &mut dyn View) {
        tracing::warn!("Geolocation unavailable");
        view.alert(POSITION_UNAVAILABLE);
    }

    /// A map location was picked for a new workout.
    pub fn on_map_click(&mut self, coords: Coordinates, view: &mut dyn View) {
        self.flow = TrackerState::AwaitingFormInput { coords };
        view.show_form();
    }

    /// The form's type selector changed.
    pub fn toggle_kind_field(&mut self, view: &mut dyn View) {
        self.form_kind = self.form_kind.toggled();
        view.show_kind_field(self.form_kind);
    }

    /// Submit the form for the pending location.
    ///
    /// Rejected input raises an alert and leaves the form open with its
    /// values; the caller should not clear it.
    pub fn submit_form(&mut self, input: &FormInput, view: &mut dyn View) -> Result<Workout> {
        let TrackerState::AwaitingFormInput { coords } = self.flow else {
            return Err(AppError::NoPendingLocation);
        };

        let result = input.parse().map_err(AppError::from).and_then(|form| {
            self.state.workouts.add_workout(
                form.kind,
                coords,
                form.distance_km,
                form.duration_min,
                form.extra,
            )
        });

        match result {
            Ok(workout) => {
                view.place_marker(&MapMarker::from(&workout));
                view.render_workout(&ListEntry::from(&workout));
                view.hide_form();
                self.flow = TrackerState::Idle;
                Ok(workout)
            }
            Err(err) => {
                view.alert(&err.user_message());
                Err(err)
            }
        }
    }

    /// A list entry was clicked: pan the map to that workout.
    ///
    /// Nothing happens before the map is ready or for an unknown id.
    pub fn on_workout_click(&mut self, id: &WorkoutId, view: &mut dyn View) -> Result<()> {
        if !self.map_ready {
            return Ok(());
        }

        if let Some(coords) = self.state.workouts.select_workout(id)? {
            view.pan_to(coords, self.state.config.map_zoom_level);
        }
        Ok(())
    }

    /// A list entry's delete button was clicked.
    ///
    /// The workout's map marker stays until the next reload.
    pub fn on_workout_delete(&mut self, id: &WorkoutId, view: &mut dyn View) -> Result<bool> {
        let removed = self.state.workouts.remove_workout(id)?;
        if removed {
            view.remove_workout(id);
        }
        Ok(removed)
    }

    /// Forget every workout and rebuild the page.
    pub fn reset(&mut self, view: &mut dyn View) -> Result<()> {
        let ResetSignal = self.state.workouts.clear_all()?;
        self.flow = TrackerState::Idle;
        self.map_ready = false;
        view.reload();
        Ok(())
    }
}
