//! Optional relative-time phrasing for scheduled arrivals.
//!
//! A scheduled entry only carries an HHMM clock time; phrasing it
//! relative to now ("23 minutes from now") is a cosmetic enrichment.
//! The capability is pluggable: [`NoHumanizer`] degrades to no phrase
//! at all, and correctness never depends on which implementation is
//! installed.

use chrono::{Days, Local, NaiveDateTime, Timelike};

/// Turns an HH:MM arrival time into a relative phrase, or `None` when
/// no phrase is available.
pub trait TimeHumanizer: Send + Sync {
    fn phrase(&self, hour: u32, minute: u32) -> Option<String>;
}

/// Humanizer that never produces a phrase.
pub struct NoHumanizer;

impl TimeHumanizer for NoHumanizer {
    fn phrase(&self, _hour: u32, _minute: u32) -> Option<String> {
        None
    }
}

/// Humanizer that phrases the next future occurrence of HH:MM
/// relative to the local wall clock.
pub struct RelativeTime;

impl TimeHumanizer for RelativeTime {
    fn phrase(&self, hour: u32, minute: u32) -> Option<String> {
        phrase_at(Local::now().naive_local(), hour, minute)
    }
}

/// The next occurrence of the given clock time at or after `now`.
/// A time-of-day already past today means tomorrow.
///
/// Returns `None` for out-of-range values (hour > 23, minute > 59).
fn next_occurrence(now: NaiveDateTime, hour: u32, minute: u32) -> Option<NaiveDateTime> {
    let today = now.with_hour(hour)?.with_minute(minute)?.with_second(0)?;
    if today < now {
        today.checked_add_days(Days::new(1))
    } else {
        Some(today)
    }
}

fn phrase_at(now: NaiveDateTime, hour: u32, minute: u32) -> Option<String> {
    let then = next_occurrence(now, hour, minute)?;
    let minutes = (then - now).num_minutes();

    let phrase = match minutes {
        0 => "a moment from now".to_string(),
        1 => "a minute from now".to_string(),
        2..=44 => format!("{minutes} minutes from now"),
        45..=89 => "an hour from now".to_string(),
        90..=1439 => format!("{} hours from now", minutes / 60),
        _ => "a day from now".to_string(),
    };
    Some(phrase)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 8, 30)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn next_occurrence_later_today() {
        let then = next_occurrence(at(10, 0), 14, 30).unwrap();
        assert_eq!(then, at(14, 30));
    }

    #[test]
    fn next_occurrence_already_passed_rolls_to_tomorrow() {
        let then = next_occurrence(at(15, 0), 14, 30).unwrap();
        assert_eq!(
            then,
            NaiveDate::from_ymd_opt(2026, 8, 31)
                .unwrap()
                .and_hms_opt(14, 30, 0)
                .unwrap()
        );
    }

    #[test]
    fn next_occurrence_exactly_now_stays_today() {
        assert_eq!(next_occurrence(at(14, 30), 14, 30).unwrap(), at(14, 30));
    }

    #[test]
    fn next_occurrence_rejects_out_of_range() {
        assert!(next_occurrence(at(10, 0), 24, 0).is_none());
        assert!(next_occurrence(at(10, 0), 10, 60).is_none());
    }

    #[test]
    fn phrase_buckets() {
        assert_eq!(phrase_at(at(10, 0), 10, 0).unwrap(), "a moment from now");
        assert_eq!(phrase_at(at(10, 0), 10, 1).unwrap(), "a minute from now");
        assert_eq!(phrase_at(at(10, 0), 10, 23).unwrap(), "23 minutes from now");
        assert_eq!(phrase_at(at(10, 0), 11, 0).unwrap(), "an hour from now");
        assert_eq!(phrase_at(at(10, 0), 13, 0).unwrap(), "3 hours from now");
    }

    #[test]
    fn phrase_crosses_midnight() {
        // 23:50 now, 00:05 next: 15 minutes away, tomorrow's date
        assert_eq!(phrase_at(at(23, 50), 0, 5).unwrap(), "15 minutes from now");
    }

    #[test]
    fn no_humanizer_yields_nothing() {
        assert_eq!(NoHumanizer.phrase(14, 30), None);
    }
}
