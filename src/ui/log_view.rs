// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! A headless view that reports what would be drawn as tracing events.

use crate::models::{Coordinates, ListEntry, MapMarker, WorkoutId, WorkoutKind};
use crate::ui::View;

#[derive(Debug, Default)]
pub struct LogView {
    rendered: usize,
}

impl LogView {
    /// Number of list entries currently shown.
    pub fn rendered(&self) -> usize {
        self.rendered
    }
}

impl View for LogView {
    fn center_on(&mut self, coords: Coordinates, zoom: u8) {
        tracing::info!(lat = coords.lat, lng = coords.lng, zoom, "Map centered");
    }

    fn pan_to(&mut self, coords: Coordinates, zoom: u8) {
        tracing::info!(lat = coords.lat, lng = coords.lng, zoom, "Map panned");
    }

    fn place_marker(&mut self, marker: &MapMarker) {
        tracing::info!(
            id = %marker.id,
            lat = marker.coords.lat,
            lng = marker.coords.lng,
            popup = %marker.popup_content,
            "Marker placed"
        );
    }

    fn render_workout(&mut self, entry: &ListEntry) {
        self.rendered += 1;
        tracing::info!(
            id = %entry.id,
            title = %entry.title,
            distance_km = %entry.distance,
            duration_min = %entry.duration,
            metric = %format!("{} {}", entry.metric, entry.metric_unit),
            extra = %format!("{} {}", entry.extra, entry.extra_unit),
            "Workout listed"
        );
    }

    fn remove_workout(&mut self, id: &WorkoutId) {
        self.rendered = self.rendered.saturating_sub(1);
        tracing::info!(%id, "Workout unlisted");
    }

    fn show_form(&mut self) {
        tracing::debug!("Form shown");
    }

    fn hide_form(&mut self) {
        tracing::debug!("Form hidden");
    }

    fn show_kind_field(&mut self, kind: WorkoutKind) {
        tracing::debug!(field = kind.rules().extra_field, "Form field switched");
    }

    fn alert(&mut self, message: &str) {
        tracing::warn!(alert = message, "Alert shown");
    }

    fn reload(&mut self) {
        self.rendered = 0;
        tracing::info!("Reload requested");
    }
}
