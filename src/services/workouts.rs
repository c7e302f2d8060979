// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout collection manager.
//!
//! Owns the ordered list of workouts for the session and mirrors it to a
//! key-value store:
//! 1. Validate input and build the record
//! 2. Append / remove in memory
//! 3. Overwrite the whole persisted array after every mutation
//!
//! Ids reuse the 10-digit millisecond format. When that stamp is already taken
//! in the collection (two workouts in the same millisecond, or a restored id)
//! the next free stamp is used instead, so ids are unique per collection.

use crate::db::{keys, KeyValueStore};
use crate::error::{Result, StorageError};
use crate::models::{Coordinates, MapMarker, StoredWorkout, Workout, WorkoutId, WorkoutKind};
use crate::services::validation::validate;
use crate::time_utils::{id_from_millis, id_stamp};
use chrono::{DateTime, Utc};

/// Returned by `clear_all`: the caller must rebuild its presentation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "presentation state must be reinitialized after clearing"]
pub struct ResetSignal;

/// The session's workouts, in display order (most recent last).
pub struct WorkoutCollection<S> {
    store: S,
    workouts: Vec<Workout>,
}

impl<S: KeyValueStore> WorkoutCollection<S> {
    /// Create an empty collection backed by `store`. Call `load_from_storage`
    /// to pick up previously saved workouts.
    pub fn new(store: S) -> Self {
        Self {
            store,
            workouts: Vec::new(),
        }
    }

    /// Create a collection and load whatever `store` already holds.
    pub fn open(store: S) -> Result<Self> {
        let mut collection = Self::new(store);
        collection.load_from_storage()?;
        Ok(collection)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }

    /// Markers for every workout, in display order.
    pub fn markers(&self) -> Vec<MapMarker> {
        self.workouts.iter().map(MapMarker::from).collect()
    }

    /// Validate and record a new workout, stamped with the current time.
    pub fn add_workout(
        &mut self,
        kind: WorkoutKind,
        coordinates: Coordinates,
        distance_km: f64,
        duration_min: f64,
        extra: f64,
    ) -> Result<Workout> {
        self.add_workout_at(
            Utc::now(),
            kind,
            coordinates,
            distance_km,
            duration_min,
            extra,
        )
    }

    /// Validate and record a new workout created at `now`.
    ///
    /// Nothing changes if validation or saving fails.
    pub fn add_workout_at(
        &mut self,
        now: DateTime<Utc>,
        kind: WorkoutKind,
        coordinates: Coordinates,
        distance_km: f64,
        duration_min: f64,
        extra: f64,
    ) -> Result<Workout> {
        if let Err(err) = validate(kind, coordinates, distance_km, duration_min, extra) {
            tracing::debug!(%kind, error = %err, "Rejected workout input");
            return Err(err.into());
        }

        let id = self.next_id(now);
        let workout = Workout::new(
            id,
            now,
            kind,
            coordinates,
            distance_km,
            duration_min,
            extra,
        );
        self.workouts.push(workout.clone());

        if let Err(err) = self.persist() {
            self.workouts.pop();
            tracing::error!(id = %workout.id(), error = %err, "Failed to save new workout");
            return Err(err);
        }

        tracing::info!(
            id = %workout.id(),
            %kind,
            distance_km,
            duration_min,
            "Workout added"
        );
        Ok(workout)
    }

    /// Remove the workout with `id`. Returns whether one was removed.
    ///
    /// Storage is only rewritten when something was removed, and the workout
    /// is put back if that fails. Map markers are the renderer's business and
    /// are left alone.
    pub fn remove_workout(&mut self, id: &WorkoutId) -> Result<bool> {
        let Some(index) = self.workouts.iter().position(|w| w.id() == id) else {
            tracing::debug!(%id, "Remove requested for unknown workout");
            return Ok(false);
        };

        let workout = self.workouts.remove(index);
        if let Err(err) = self.persist() {
            self.workouts.insert(index, workout);
            tracing::error!(%id, error = %err, "Failed to save after removal");
            return Err(err);
        }

        tracing::info!(%id, remaining = self.workouts.len(), "Workout removed");
        Ok(true)
    }

    pub fn find_workout(&self, id: &WorkoutId) -> Option<&Workout> {
        self.workouts.iter().find(|w| w.id() == id)
    }

    /// Resolve a list selection: count the interaction and return where to
    /// center the map. Unknown ids are a no-op; the count is restored if
    /// saving fails.
    pub fn select_workout(&mut self, id: &WorkoutId) -> Result<Option<Coordinates>> {
        let Some(index) = self.workouts.iter().position(|w| w.id() == id) else {
            return Ok(None);
        };

        let workout = &mut self.workouts[index];
        let previous = workout.interaction_count();
        workout.record_interaction();
        let coordinates = workout.coordinates();

        if let Err(err) = self.persist() {
            self.workouts[index].set_interaction_count(previous);
            tracing::error!(%id, error = %err, "Failed to save selection");
            return Err(err);
        }

        tracing::debug!(%id, clicks = previous + 1, "Workout selected");
        Ok(Some(coordinates))
    }

    /// Replace the in-memory collection with what storage holds.
    ///
    /// A missing key means no workouts. Unparseable data is logged and
    /// treated the same way; individual entries that fail to rehydrate are
    /// skipped. Only a failing storage backend is an error.
    pub fn load_from_storage(&mut self) -> Result<()> {
        let workouts = match self.store.get(keys::WORKOUTS)? {
            Some(raw) => parse_workouts(&raw),
            None => Vec::new(),
        };

        self.workouts = workouts;

        tracing::info!(count = self.workouts.len(), "Loaded workouts from storage");
        Ok(())
    }

    /// Write the whole collection to storage.
    pub fn persist(&mut self) -> Result<()> {
        let stored: Vec<StoredWorkout> = self.workouts.iter().map(StoredWorkout::from).collect();
        let json = serde_json::to_string(&stored).map_err(StorageError::from)?;
        self.store.set(keys::WORKOUTS, &json)?;

        tracing::debug!(count = stored.len(), bytes = json.len(), "Persisted workouts");
        Ok(())
    }

    /// Drop every workout, in memory and in storage. Memory is only cleared
    /// once storage has been.
    pub fn clear_all(&mut self) -> Result<ResetSignal> {
        self.store.remove(keys::WORKOUTS)?;
        let cleared = self.workouts.len();
        self.workouts.clear();

        tracing::info!(cleared, "Cleared all workouts");
        Ok(ResetSignal)
    }

    /// Id for a workout created at `now`, skipping stamps already in use.
    fn next_id(&self, now: DateTime<Utc>) -> WorkoutId {
        let mut stamp = id_stamp(now.timestamp_millis());
        while self.workouts.iter().any(|w| w.id().stamp() == Some(stamp)) {
            stamp = id_stamp(stamp + 1);
        }
        WorkoutId::new(id_from_millis(stamp))
    }
}

/// Parse the persisted array, skipping entries that cannot be rehydrated.
fn parse_workouts(raw: &str) -> Vec<Workout> {
    let entries: Vec<serde_json::Value> = match serde_json::from_str(raw) {
        Ok(serde_json::Value::Array(entries)) => entries,
        Ok(serde_json::Value::Null) => return Vec::new(),
        Ok(_) => {
            tracing::warn!("Stored workouts are not a JSON array, starting empty");
            return Vec::new();
        }
        Err(e) => {
            tracing::warn!(error = %e, "Stored workouts are corrupt, starting empty");
            return Vec::new();
        }
    };

    entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            let stored: StoredWorkout = match serde_json::from_value(entry) {
                Ok(stored) => stored,
                Err(e) => {
                    tracing::warn!(index, error = %e, "Skipping unreadable stored workout");
                    return None;
                }
            };
            let id = stored.id.clone();
            match stored.rehydrate() {
                Ok(workout) => Some(workout),
                Err(e) => {
                    tracing::warn!(index, %id, error = %e, "Skipping invalid stored workout");
                    None
                }
            }
        })
        .collect()
}
