use chrono::{DateTime, Utc};

use crate::types::TimeOfDayPhase;

/// Half-width of the dawn and dusk windows, centred on sunrise and sunset.
pub const TRANSITION_WINDOW_SECS: i64 = 30 * 60;

/// Phase of day for `dt` given the day's sunrise and sunset (Unix seconds).
///
/// Windows are tested in order dawn, day, dusk, so when sunrise and sunset are
/// closer than two windows apart dawn takes priority and `Day` may never occur.
pub fn day_phase(dt: i64, sunrise: i64, sunset: i64) -> TimeOfDayPhase {
    let w = TRANSITION_WINDOW_SECS;
    if dt < sunrise.saturating_sub(w) {
        TimeOfDayPhase::Night
    } else if dt < sunrise.saturating_add(w) {
        TimeOfDayPhase::Dawn
    } else if dt < sunset.saturating_sub(w) {
        TimeOfDayPhase::Day
    } else if dt < sunset.saturating_add(w) {
        TimeOfDayPhase::Dusk
    } else {
        TimeOfDayPhase::Night
    }
}

pub fn day_phase_at(now: DateTime<Utc>, sunrise: i64, sunset: i64) -> TimeOfDayPhase {
    day_phase(now.timestamp(), sunrise, sunset)
}

/// 0 at sunrise, 0.5 at solar noon, 1 from sunset onwards.
pub fn sun_progress(dt: i64, sunrise: i64, sunset: i64) -> f64 {
    if dt <= sunrise {
        return 0.0;
    }
    if dt >= sunset {
        return 1.0;
    }
    (i128::from(dt) - i128::from(sunrise)) as f64 / (i128::from(sunset) - i128::from(sunrise)) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_is_thirty_minutes() {
        assert_eq!(TRANSITION_WINDOW_SECS, 1800);
    }

    #[test]
    fn extreme_timestamps_do_not_overflow() {
        assert_eq!(day_phase(i64::MIN, i64::MIN, i64::MAX), TimeOfDayPhase::Dawn);
        assert_eq!(day_phase(i64::MAX, 0, 0), TimeOfDayPhase::Night);
    }
}
