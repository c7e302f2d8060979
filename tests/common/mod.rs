// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use std::cell::Cell;
use std::rc::Rc;
use workout_tracker::config::Config;
use workout_tracker::db::{KeyValueStore, MemoryStore};
use workout_tracker::error::StorageError;
use workout_tracker::models::{Coordinates, ListEntry, MapMarker, WorkoutId, WorkoutKind};
use workout_tracker::services::WorkoutCollection;
use workout_tracker::ui::{Tracker, View};
use workout_tracker::AppState;

#[allow(dead_code)]
pub const LONDON: Coordinates = Coordinates {
    lat: 51.5,
    lng: -0.1,
};

/// Everything a view was asked to do, in order.
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq)]
pub enum ViewCall {
    CenterOn(Coordinates, u8),
    PanTo(Coordinates, u8),
    PlaceMarker(MapMarker),
    RenderWorkout(ListEntry),
    RemoveWorkout(WorkoutId),
    ShowForm,
    HideForm,
    ShowKindField(WorkoutKind),
    Alert(String),
    Reload,
}

/// A view that records calls for assertions.
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct RecordingView {
    pub calls: Vec<ViewCall>,
}

#[allow(dead_code)]
impl RecordingView {
    pub fn alerts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                ViewCall::Alert(msg) => Some(msg.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn markers(&self) -> Vec<&MapMarker> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                ViewCall::PlaceMarker(marker) => Some(marker),
                _ => None,
            })
            .collect()
    }

    pub fn list_entries(&self) -> Vec<&ListEntry> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                ViewCall::RenderWorkout(entry) => Some(entry),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl View for RecordingView {
    fn center_on(&mut self, coords: Coordinates, zoom: u8) {
        self.calls.push(ViewCall::CenterOn(coords, zoom));
    }

    fn pan_to(&mut self, coords: Coordinates, zoom: u8) {
        self.calls.push(ViewCall::PanTo(coords, zoom));
    }

    fn place_marker(&mut self, marker: &MapMarker) {
        self.calls.push(ViewCall::PlaceMarker(marker.clone()));
    }

    fn render_workout(&mut self, entry: &ListEntry) {
        self.calls.push(ViewCall::RenderWorkout(entry.clone()));
    }

    fn remove_workout(&mut self, id: &WorkoutId) {
        self.calls.push(ViewCall::RemoveWorkout(id.clone()));
    }

    fn show_form(&mut self) {
        self.calls.push(ViewCall::ShowForm);
    }

    fn hide_form(&mut self) {
        self.calls.push(ViewCall::HideForm);
    }

    fn show_kind_field(&mut self, kind: WorkoutKind) {
        self.calls.push(ViewCall::ShowKindField(kind));
    }

    fn alert(&mut self, message: &str) {
        self.calls.push(ViewCall::Alert(message.to_string()));
    }

    fn reload(&mut self) {
        self.calls.push(ViewCall::Reload);
    }
}

/// An empty in-memory collection.
#[allow(dead_code)]
pub fn memory_collection() -> WorkoutCollection<MemoryStore> {
    WorkoutCollection::new(MemoryStore::new())
}

/// A started tracker over `store`.
#[allow(dead_code)]
pub fn started_tracker(store: MemoryStore, view: &mut RecordingView) -> Tracker<MemoryStore> {
    let mut tracker = Tracker::new(AppState::new(Config::default(), store));
    tracker.start(view).expect("start should not fail on a memory store");
    tracker
}

/// A memory store whose writes can be made to fail.
///
/// The switch is shared, so it can be flipped while a collection owns the
/// store.
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct FlakyStore {
    pub inner: MemoryStore,
    fail_writes: Rc<Cell<bool>>,
}

#[allow(dead_code)]
impl FlakyStore {
    /// Handle that turns write failures on and off.
    pub fn switch(&self) -> Rc<Cell<bool>> {
        Rc::clone(&self.fail_writes)
    }

    fn check(&self, key: &str) -> Result<(), StorageError> {
        if self.fail_writes.get() {
            return Err(StorageError::Write {
                key: key.to_string(),
                source: std::io::Error::other("disk full"),
            });
        }
        Ok(())
    }
}

impl KeyValueStore for FlakyStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check(key)?;
        self.inner.set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.check(key)?;
        self.inner.remove(key)
    }
}
