//! Conversion between provider timestamps and domain dates.

use std::collections::BTreeMap;

use brandreturns_primitives::{Date, MonthlyBar, YearWindow};
use brandreturns_traits::SourceError;
use chrono::{DateTime, Datelike, NaiveTime};
use time::OffsetDateTime;

const SECONDS_PER_DAY: i64 = 86_400;

/// Largest offset of any exchange's local midnight from UTC.
const MAX_UTC_OFFSET_SECS: i64 = 14 * 3_600;

/// Quote fields needed to build a monthly bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawBar {
    /// Unix timestamp of the bar's opening.
    pub timestamp: i64,
    /// Opening price.
    pub open: f64,
    /// Closing price.
    pub close: f64,
    /// Adjusted closing price.
    pub adjclose: f64,
}

impl RawBar {
    fn is_usable(&self) -> bool {
        [self.open, self.close, self.adjclose].iter().all(|p| p.is_finite() && *p > 0.0)
    }

    /// First day of the month the bar opens.
    ///
    /// Monthly bars are stamped at exchange-local midnight, which east of
    /// UTC falls on the last evening of the previous month.
    fn month(&self) -> Option<Date> {
        DateTime::from_timestamp(self.timestamp.checked_add(MAX_UTC_OFFSET_SECS)?, 0)
            .and_then(|dt| dt.date_naive().with_day(1))
    }
}

fn unix_midnight(date: Date) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp()
}

/// Request bounds for a window: midnight UTC on its first day, and midnight
/// after its last day.
///
/// # Errors
/// Returns `SourceError::InvalidWindow` if a bound is outside the supported range.
pub fn window_bounds(window: YearWindow) -> Result<(OffsetDateTime, OffsetDateTime), SourceError> {
    let invalid = |message: String| SourceError::InvalidWindow { year: window.year, message };
    let start = window.start().ok_or_else(|| invalid("start date out of range".to_string()))?;
    let end = window.end().ok_or_else(|| invalid("end date out of range".to_string()))?;

    let at = |date: Date, days_after: i64| {
        OffsetDateTime::from_unix_timestamp(unix_midnight(date) + days_after * SECONDS_PER_DAY)
            .map_err(|e| invalid(e.to_string()))
    };
    Ok((at(start, 0)?, at(end, 1)?))
}

/// Monthly bars of `raw` whose month lies inside `window`, oldest first.
///
/// Quotes with a missing or non-positive price are dropped. When the
/// provider repeats a month, the last quote wins.
#[must_use]
pub fn bars_in_window(raw: impl IntoIterator<Item = RawBar>, window: YearWindow) -> Vec<MonthlyBar> {
    let mut by_month = BTreeMap::new();
    for bar in raw {
        if !bar.is_usable() {
            continue;
        }
        let Some(month) = bar.month().filter(|m| window.contains(*m)) else {
            continue;
        };
        by_month.insert(month, MonthlyBar::new(month, bar.open, bar.close, bar.adjclose));
    }
    by_month.into_values().collect()
}
