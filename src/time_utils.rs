use chrono::{Datelike, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Weekday};

/// Canonical day order. The work week starts on Saturday and ends on Friday.
pub const DAY_NAMES: [&str; 7] = [
    "Saturday",
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
];

pub fn day_name(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
    }
}

fn days_since_saturday(date: NaiveDate) -> i64 {
    ((date.weekday().num_days_from_sunday() + 1) % 7) as i64
}

/// Half-open week window `[start, end)` on the server-local calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl WeekWindow {
    /// Window for the week `week_offset` weeks before the one containing `today`.
    /// Offset 0 is the current week.
    pub fn for_offset(today: NaiveDate, week_offset: u32) -> Self {
        let start_date =
            today - Duration::days(days_since_saturday(today) + week_offset as i64 * 7);
        let start = start_date.and_time(NaiveTime::MIN);
        Self {
            start,
            end: start + Duration::days(7),
        }
    }

    pub fn contains(&self, at: NaiveDateTime) -> bool {
        at >= self.start && at < self.end
    }
}

/// Local wall-clock time of an epoch-seconds message timestamp.
pub fn local_datetime(epoch_secs: i64) -> Option<NaiveDateTime> {
    Local
        .timestamp_opt(epoch_secs, 0)
        .single()
        .map(|dt| dt.naive_local())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn day_names_follow_the_calendar() {
        // 2025-01-04 is a Saturday.
        assert_eq!(day_name(date(2025, 1, 4)), "Saturday");
        assert_eq!(day_name(date(2025, 1, 5)), "Sunday");
        assert_eq!(day_name(date(2025, 1, 10)), "Friday");
    }

    #[test]
    fn current_week_starts_on_the_previous_saturday() {
        let window = WeekWindow::for_offset(date(2025, 1, 8), 0);
        assert_eq!(window.start.date(), date(2025, 1, 4));
        assert_eq!(window.end.date(), date(2025, 1, 11));
    }

    #[test]
    fn saturday_is_its_own_week_start() {
        let window = WeekWindow::for_offset(date(2025, 1, 4), 0);
        assert_eq!(window.start.date(), date(2025, 1, 4));
    }

    #[test]
    fn offset_shifts_back_whole_weeks() {
        let window = WeekWindow::for_offset(date(2025, 1, 8), 1);
        assert_eq!(window.start.date(), date(2024, 12, 28));
        assert_eq!(window.end.date(), date(2025, 1, 4));
    }

    #[test]
    fn window_is_half_open() {
        let window = WeekWindow::for_offset(date(2025, 1, 8), 0);
        assert!(window.contains(window.start));
        assert!(!window.contains(window.end));
        assert!(window.contains(window.end - Duration::seconds(1)));
    }
}
