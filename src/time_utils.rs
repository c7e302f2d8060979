// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time formatting.

use chrono::{DateTime, Datelike, Local, Utc};

/// English month names indexed by 0-based month number.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Workout ids keep the last 10 digits of the creation stamp.
const ID_MODULUS: i64 = 10_000_000_000;

/// Look up a month name by 0-based index.
pub fn month_name(month0: u32) -> Option<&'static str> {
    MONTH_NAMES.get(month0 as usize).copied()
}

/// The (0-based month, day-of-month) of a timestamp in the local timezone.
pub fn local_month_day(date: DateTime<Utc>) -> (u32, u32) {
    let local = date.with_timezone(&Local);
    (local.month0(), local.day())
}

/// Reduce an epoch-millisecond value to the part kept in workout ids.
pub fn id_stamp(millis: i64) -> i64 {
    millis.rem_euclid(ID_MODULUS)
}

/// Render an epoch-millisecond stamp as a 10-digit id string.
pub fn id_from_millis(millis: i64) -> String {
    format!("{:010}", id_stamp(millis))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_name_bounds() {
        assert_eq!(month_name(0), Some("January"));
        assert_eq!(month_name(3), Some("April"));
        assert_eq!(month_name(11), Some("December"));
        assert_eq!(month_name(12), None);
    }

    #[test]
    fn test_id_keeps_last_ten_digits() {
        assert_eq!(id_from_millis(1_713_081_600_123), "3081600123");
        assert_eq!(id_from_millis(42), "0000000042");
    }
}
