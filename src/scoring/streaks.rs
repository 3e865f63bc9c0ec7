use crate::domain::models::{AttendanceStatus, WeeklyAttendance};
use crate::time_utils::DAY_NAMES;
use std::collections::BTreeMap;

/// Consecutive attended days, scanning backward from the end of the week.
/// Present or Late both count; an explicit Absent breaks the streak; a day
/// with no recorded status is skipped without breaking it.
///
/// Attendance asks "how current is your presence", so it scans backward; the
/// task streak below asks "did you start and sustain the week", so it scans
/// forward. The asymmetry is deliberate.
pub fn attendance_streak(name: &str, weekly: &WeeklyAttendance) -> u32 {
    let mut streak = 0;
    for day in DAY_NAMES.iter().rev() {
        match weekly.get(*day).and_then(|people| people.get(name)) {
            Some(AttendanceStatus::Present) | Some(AttendanceStatus::Late) => streak += 1,
            Some(AttendanceStatus::Absent) => break,
            None => {}
        }
    }
    streak
}

/// Consecutive task-posting days from Saturday through Thursday; Friday is
/// the rest day and never scanned. Zero-task days before the streak starts
/// are skipped; once started, the first zero-task day ends it.
pub fn task_streak(daily_task_counts: &BTreeMap<String, usize>) -> u32 {
    let mut streak = 0;
    for day in &DAY_NAMES[..6] {
        let count = daily_task_counts.get(*day).copied().unwrap_or(0);
        if count > 0 {
            streak += 1;
        } else if streak > 0 {
            break;
        }
    }
    streak
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weekly(entries: &[(&str, AttendanceStatus)]) -> WeeklyAttendance {
        entries
            .iter()
            .map(|(day, status)| {
                (
                    day.to_string(),
                    BTreeMap::from([("Ali".to_string(), *status)]),
                )
            })
            .collect()
    }

    fn counts(entries: &[(&str, usize)]) -> BTreeMap<String, usize> {
        entries
            .iter()
            .map(|(day, n)| (day.to_string(), *n))
            .collect()
    }

    #[test]
    fn absent_breaks_the_attendance_streak() {
        let weekly = weekly(&[
            ("Saturday", AttendanceStatus::Present),
            ("Sunday", AttendanceStatus::Late),
            ("Monday", AttendanceStatus::Absent),
            ("Tuesday", AttendanceStatus::Present),
        ]);
        // Scanning back from Friday: Tue counts, Mon is Absent and breaks.
        assert_eq!(attendance_streak("Ali", &weekly), 1);
    }

    #[test]
    fn days_without_data_do_not_break_the_attendance_streak() {
        let weekly = weekly(&[
            ("Saturday", AttendanceStatus::Present),
            ("Monday", AttendanceStatus::Present),
            ("Thursday", AttendanceStatus::Late),
        ]);
        assert_eq!(attendance_streak("Ali", &weekly), 3);
    }

    #[test]
    fn unknown_person_has_no_streak() {
        let weekly = weekly(&[("Saturday", AttendanceStatus::Present)]);
        assert_eq!(attendance_streak("Bea", &weekly), 0);
    }

    #[test]
    fn task_streak_breaks_at_the_first_zero_day() {
        let counts = counts(&[("Saturday", 2), ("Sunday", 1), ("Monday", 0), ("Tuesday", 3)]);
        assert_eq!(task_streak(&counts), 2);
    }

    #[test]
    fn task_streak_may_start_later_in_the_week() {
        let counts = counts(&[("Monday", 1), ("Tuesday", 2), ("Wednesday", 1)]);
        assert_eq!(task_streak(&counts), 3);
    }

    #[test]
    fn friday_tasks_never_count() {
        let counts = counts(&[
            ("Saturday", 1),
            ("Sunday", 1),
            ("Monday", 1),
            ("Tuesday", 1),
            ("Wednesday", 1),
            ("Thursday", 1),
            ("Friday", 9),
        ]);
        assert_eq!(task_streak(&counts), 6);
    }

    #[test]
    fn no_tasks_means_no_streak() {
        assert_eq!(task_streak(&BTreeMap::new()), 0);
    }
}
