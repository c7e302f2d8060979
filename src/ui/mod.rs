// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! UI layer: the collaborator contract and the event controller.
//!
//! Map tiles, geolocation and the DOM are outside this crate. Whatever
//! renders them implements [`View`]; the [`Tracker`] turns user events into
//! collection operations and tells the view what to draw.

pub mod controller;
pub mod form;
pub mod log_view;

pub use controller::{Tracker, TrackerState};
pub use form::FormInput;
pub use log_view::LogView;

use crate::models::{Coordinates, ListEntry, MapMarker, WorkoutId, WorkoutKind};

/// Rendering collaborator driven by the [`Tracker`].
pub trait View {
    // ─── Map ─────────────────────────────────────────────────────

    /// Initial map placement once the user's position is known.
    fn center_on(&mut self, coords: Coordinates, zoom: u8);

    /// Animated move to a selected workout.
    fn pan_to(&mut self, coords: Coordinates, zoom: u8);

    fn place_marker(&mut self, marker: &MapMarker);

    // ─── List ────────────────────────────────────────────────────

    fn render_workout(&mut self, entry: &ListEntry);

    fn remove_workout(&mut self, id: &WorkoutId);

    // ─── Form ────────────────────────────────────────────────────

    fn show_form(&mut self);

    /// Hide the form and clear its inputs.
    fn hide_form(&mut self);

    /// Show the cadence row for running or the elevation row for cycling.
    fn show_kind_field(&mut self, kind: WorkoutKind);

    // ─── Page ────────────────────────────────────────────────────

    fn alert(&mut self, message: &str);

    /// Rebuild all presentation state from scratch.
    fn reload(&mut self);
}
