// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! GeoJSON export of workout markers for map renderers.

use crate::models::{MapMarker, Workout};
use geojson::{feature::Id, Feature, FeatureCollection, Geometry, JsonObject};

/// Build a point feature for one workout marker.
pub fn to_feature(marker: &MapMarker) -> Feature {
    let point: geo::Point<f64> = marker.coords.into();

    let mut properties = JsonObject::new();
    properties.insert("id".to_string(), marker.id.as_str().into());
    properties.insert("type".to_string(), marker.kind.as_str().into());
    properties.insert("description".to_string(), marker.description.clone().into());
    properties.insert("popupContent".to_string(), marker.popup_content.clone().into());
    properties.insert("popupClass".to_string(), marker.popup_class.clone().into());

    Feature {
        bbox: None,
        geometry: Some(Geometry::new(geojson::Value::from(&point))),
        id: Some(Id::String(marker.id.to_string())),
        properties: Some(properties),
        foreign_members: None,
    }
}

/// All workouts as a feature collection, in display order.
pub fn to_feature_collection(workouts: &[Workout]) -> FeatureCollection {
    let features = workouts
        .iter()
        .map(|w| to_feature(&MapMarker::from(w)))
        .collect();

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}
