// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout Tracker headless viewer
//!
//! Loads the saved workouts, reports the list through the log, and prints
//! the markers as GeoJSON on stdout for an external map renderer.

use workout_tracker::{
    config::Config, db::FileStore, services::markers, ui::LogView, ui::Tracker, AppState,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    init_logging();

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(
        storage = %config.storage_dir.display(),
        zoom = config.map_zoom_level,
        "Starting Workout Tracker"
    );

    let store = FileStore::open(&config.storage_dir)?;
    let mut tracker = Tracker::new(AppState::new(config, store));

    let mut view = LogView::default();
    tracker.start(&mut view)?;
    tracing::info!(count = view.rendered(), "Workouts restored");

    let collection = markers::to_feature_collection(tracker.workouts());
    println!("{}", serde_json::to_string_pretty(&collection)?);
    Ok(())
}

/// Initialize structured JSON logging on stderr.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("workout_tracker=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
