// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Property tests for derived metrics, validation and persistence.

use proptest::prelude::*;
use workout_tracker::db::MemoryStore;
use workout_tracker::models::{Coordinates, WorkoutKind};
use workout_tracker::services::WorkoutCollection;

fn positive() -> impl Strategy<Value = f64> {
    0.01f64..10_000.0
}

fn coordinates() -> impl Strategy<Value = Coordinates> {
    (-90.0f64..=90.0, -180.0f64..=180.0).prop_map(|(lat, lng)| Coordinates::new(lat, lng))
}

fn not_positive() -> impl Strategy<Value = f64> {
    prop_oneof![
        Just(0.0),
        -10_000.0f64..0.0,
        Just(f64::NAN),
        Just(f64::INFINITY),
        Just(f64::NEG_INFINITY),
    ]
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * b.abs().max(1.0)
}

proptest! {
    #[test]
    fn running_pace_is_duration_over_distance(
        coords in coordinates(),
        distance in positive(),
        duration in positive(),
        cadence in positive(),
    ) {
        let mut collection = WorkoutCollection::new(MemoryStore::new());
        let workout = collection
            .add_workout(WorkoutKind::Running, coords, distance, duration, cadence)
            .unwrap();
        prop_assert!(close(workout.pace_min_per_km().unwrap(), duration / distance));
    }

    #[test]
    fn cycling_speed_is_distance_over_hours(
        coords in coordinates(),
        distance in positive(),
        duration in positive(),
        elevation in -5_000.0f64..5_000.0,
    ) {
        let mut collection = WorkoutCollection::new(MemoryStore::new());
        let workout = collection
            .add_workout(WorkoutKind::Cycling, coords, distance, duration, elevation)
            .unwrap();
        prop_assert!(close(workout.speed_km_per_h().unwrap(), distance / (duration / 60.0)));
    }

    #[test]
    fn invalid_required_field_is_rejected(
        bad in not_positive(),
        slot in 0usize..3,
        cycling in any::<bool>(),
    ) {
        let kind = if cycling { WorkoutKind::Cycling } else { WorkoutKind::Running };
        let mut values = [5.0, 25.0, 170.0];
        values[slot] = bad;
        // Cycling elevation only has to be finite
        prop_assume!(!(cycling && slot == 2 && bad.is_finite()));

        let mut collection = WorkoutCollection::new(MemoryStore::new());
        let result = collection.add_workout(
            kind,
            Coordinates::new(51.5, -0.1),
            values[0],
            values[1],
            values[2],
        );
        prop_assert!(result.is_err());
        prop_assert!(collection.is_empty());
    }

    #[test]
    fn persist_then_load_reproduces_collection(
        entries in prop::collection::vec(
            (any::<bool>(), coordinates(), positive(), positive(), positive()),
            0..8,
        ),
    ) {
        let mut store = MemoryStore::new();
        let mut original = WorkoutCollection::new(&mut store);
        for (cycling, coords, distance, duration, extra) in entries {
            let kind = if cycling { WorkoutKind::Cycling } else { WorkoutKind::Running };
            original.add_workout(kind, coords, distance, duration, extra).unwrap();
        }
        original.persist().unwrap();
        let before = original.workouts().to_vec();
        drop(original);

        let restored = WorkoutCollection::open(&mut store).unwrap();
        prop_assert_eq!(restored.len(), before.len());
        for (a, b) in before.iter().zip(restored.workouts()) {
            prop_assert_eq!(a.id(), b.id());
            prop_assert_eq!(a.coordinates(), b.coordinates());
            prop_assert_eq!(a.distance_km(), b.distance_km());
            prop_assert_eq!(a.duration_min(), b.duration_min());
            prop_assert_eq!(a.extra(), b.extra());
            prop_assert_eq!(a.metric(), b.metric());
        }
    }
}
