use chrono::{Duration, NaiveDate};

use dreamgarden_types::models::{SleepRecord, SleepStats};

use crate::plant::round_half_up;

/// Summary shown on the garden and diary pages.
///
/// The streak counts consecutive nights ending on `today`; the first missing
/// day stops it.
pub fn sleep_stats(records: &[SleepRecord], today: NaiveDate) -> SleepStats {
    if records.is_empty() {
        return SleepStats {
            average_rating: 0.0,
            streak_days: 0,
            total_records: 0,
        };
    }

    let total: u32 = records.iter().map(|r| r.rating.get() as u32).sum();
    let average = total as f64 / records.len() as f64;

    let mut dates: Vec<NaiveDate> = records.iter().map(|r| r.date).collect();
    dates.sort_unstable_by(|a, b| b.cmp(a));

    let streak_days = dates
        .iter()
        .enumerate()
        .take_while(|(i, date)| **date == today - Duration::days(*i as i64))
        .count() as u32;

    SleepStats {
        average_rating: round_half_up(average * 10.0) / 10.0,
        streak_days,
        total_records: records.len(),
    }
}
