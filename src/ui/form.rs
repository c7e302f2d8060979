// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Raw values read from the new-workout form.

use crate::error::ValidationError;
use crate::models::WorkoutKind;

/// Form fields exactly as typed by the user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormInput {
    pub kind: String,
    pub distance: String,
    pub duration: String,
    pub cadence: String,
    pub elevation: String,
}

/// Numbers parsed from a [`FormInput`], not yet validated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedForm {
    pub kind: WorkoutKind,
    pub distance_km: f64,
    pub duration_min: f64,
    /// Cadence for running, elevation gain for cycling.
    pub extra: f64,
}

impl FormInput {
    pub fn running(distance: &str, duration: &str, cadence: &str) -> Self {
        Self {
            kind: WorkoutKind::Running.to_string(),
            distance: distance.to_string(),
            duration: duration.to_string(),
            cadence: cadence.to_string(),
            elevation: String::new(),
        }
    }

    pub fn cycling(distance: &str, duration: &str, elevation: &str) -> Self {
        Self {
            kind: WorkoutKind::Cycling.to_string(),
            distance: distance.to_string(),
            duration: duration.to_string(),
            cadence: String::new(),
            elevation: elevation.to_string(),
        }
    }

    /// Parse the fields. Only the kind can fail here; bad numbers become NaN
    /// and are rejected later by validation.
    pub fn parse(&self) -> Result<ParsedForm, ValidationError> {
        let kind: WorkoutKind = self.kind.parse()?;
        let extra = match kind {
            WorkoutKind::Running => &self.cadence,
            WorkoutKind::Cycling => &self.elevation,
        };

        Ok(ParsedForm {
            kind,
            distance_km: parse_number(&self.distance),
            duration_min: parse_number(&self.duration),
            extra: parse_number(extra),
        })
    }
}

/// Number input semantics: blank is 0, anything unparseable is NaN.
fn parse_number(raw: &str) -> f64 {
    let raw = raw.trim();
    if raw.is_empty() {
        return 0.0;
    }
    raw.parse().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("5.2"), 5.2);
        assert_eq!(parse_number(" 24 "), 24.0);
        assert_eq!(parse_number(""), 0.0);
        assert_eq!(parse_number("-50"), -50.0);
        assert!(parse_number("abc").is_nan());
    }

    #[test]
    fn test_parse_picks_kind_field() {
        let parsed = FormInput::cycling("27", "95", "523").parse().unwrap();
        assert_eq!(parsed.kind, WorkoutKind::Cycling);
        assert_eq!(parsed.extra, 523.0);

        let mut input = FormInput::running("5", "25", "170");
        input.elevation = "999".to_string();
        assert_eq!(input.parse().unwrap().extra, 170.0);
    }

    #[test]
    fn test_parse_unknown_kind() {
        let input = FormInput {
            kind: "rowing".to_string(),
            ..FormInput::default()
        };
        assert!(matches!(
            input.parse(),
            Err(ValidationError::UnknownKind(_))
        ));
    }
}
