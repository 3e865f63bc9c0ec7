use crate::domain::models::{AttendanceStatus, Employee, WeeklyAttendance};

/// Weight table for the score formula. Each contribution is a named field so
/// the formula stays an order-independent sum that can be retuned without
/// touching control flow.
#[derive(Debug, Clone)]
pub struct ScoreWeights {
    pub present_day: i64,
    pub late_day: i64,
    pub week_task: i64,
    pub completed_task: i64,
    pub full_completion_bonus: i64,
    pub high_completion_bonus: i64,
    pub good_completion_bonus: i64,
    pub daily_completion_bonus: i64,
    pub completed_today_task: i64,
    pub present_and_productive_bonus: i64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            present_day: 20,
            late_day: 10,
            week_task: 3,
            completed_task: 10,
            full_completion_bonus: 50,
            high_completion_bonus: 30,
            good_completion_bonus: 15,
            daily_completion_bonus: 20,
            completed_today_task: 5,
            present_and_productive_bonus: 15,
        }
    }
}

/// Total points for one employee. Today's attendance is counted on top of
/// its day in the weekly map on purpose: presence right now weighs more than
/// a day in the history.
pub fn points(employee: &Employee, weekly: &WeeklyAttendance, w: &ScoreWeights) -> i64 {
    let history: i64 = weekly
        .values()
        .filter_map(|day| day.get(&employee.name))
        .map(|status| attendance_value(*status, w))
        .sum();

    let today = attendance_value(employee.attendance, w);

    let in_progress = employee.week_tasks.len() as i64 * w.week_task;
    let completed = employee.week_completed_tasks.len() as i64 * w.completed_task;
    let completion = completion_bonus(employee, w);

    let today_completed = if employee.today_completed_tasks.is_empty() {
        0
    } else {
        w.daily_completion_bonus
            + employee.today_completed_tasks.len() as i64 * w.completed_today_task
    };

    let productive = if employee.attendance == AttendanceStatus::Present
        && !employee.today_completed_tasks.is_empty()
    {
        w.present_and_productive_bonus
    } else {
        0
    };

    history + today + in_progress + completed + completion + today_completed + productive
}

fn attendance_value(status: AttendanceStatus, w: &ScoreWeights) -> i64 {
    match status {
        AttendanceStatus::Present => w.present_day,
        AttendanceStatus::Late => w.late_day,
        AttendanceStatus::Absent => 0,
    }
}

fn completion_bonus(employee: &Employee, w: &ScoreWeights) -> i64 {
    let total = employee.week_tasks.len() + employee.week_completed_tasks.len();
    if total == 0 {
        return 0;
    }
    let rate = employee.week_completed_tasks.len() as f64 / total as f64;
    if rate >= 1.0 {
        w.full_completion_bonus
    } else if rate >= 0.8 {
        w.high_completion_bonus
    } else if rate >= 0.5 {
        w.good_completion_bonus
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Task;
    use std::collections::BTreeMap;

    fn task(text: &str) -> Task {
        Task {
            text: text.to_string(),
            timestamp: 1_736_000_000,
        }
    }

    fn employee(attendance: AttendanceStatus) -> Employee {
        Employee {
            id: "U1".to_string(),
            name: "Ali".to_string(),
            email: "ali@example.com".to_string(),
            photo: None,
            role: String::new(),
            today_tasks: Vec::new(),
            week_tasks: Vec::new(),
            today_completed_tasks: Vec::new(),
            week_completed_tasks: Vec::new(),
            daily_task_counts: BTreeMap::new(),
            attendance,
        }
    }

    fn day(entries: &[(&str, AttendanceStatus)]) -> BTreeMap<String, AttendanceStatus> {
        entries
            .iter()
            .map(|(name, status)| (name.to_string(), *status))
            .collect()
    }

    #[test]
    fn present_today_with_three_week_tasks_and_no_history_is_29() {
        let mut emp = employee(AttendanceStatus::Present);
        emp.week_tasks = vec![task("a"), task("b"), task("c")];
        let weekly = WeeklyAttendance::new();
        // 20 for today + 3 * 3 per in-progress task.
        assert_eq!(points(&emp, &weekly, &ScoreWeights::default()), 29);
    }

    #[test]
    fn weekly_history_adds_per_day_attendance_values() {
        let emp = employee(AttendanceStatus::Absent);
        let weekly = WeeklyAttendance::from([
            ("Saturday".to_string(), day(&[("Ali", AttendanceStatus::Present)])),
            ("Sunday".to_string(), day(&[("Ali", AttendanceStatus::Late)])),
            ("Monday".to_string(), day(&[("Ali", AttendanceStatus::Absent)])),
            ("Tuesday".to_string(), day(&[("Bea", AttendanceStatus::Present)])),
        ]);
        // 20 + 10 + 0; Bea's day contributes nothing; Absent today adds 0.
        assert_eq!(points(&emp, &weekly, &ScoreWeights::default()), 30);
    }

    #[test]
    fn todays_attendance_double_counts_over_the_weekly_map() {
        let emp = employee(AttendanceStatus::Present);
        let weekly = WeeklyAttendance::from([(
            "Wednesday".to_string(),
            day(&[("Ali", AttendanceStatus::Present)]),
        )]);
        assert_eq!(points(&emp, &weekly, &ScoreWeights::default()), 40);
    }

    #[test]
    fn completion_rate_tiers() {
        let weekly = WeeklyAttendance::new();
        let w = ScoreWeights::default();

        let mut emp = employee(AttendanceStatus::Absent);
        emp.week_completed_tasks = vec![task("x"), task("y")];
        // 2 completed * 10 + full completion bonus 50.
        assert_eq!(points(&emp, &weekly, &w), 70);

        emp.week_tasks = vec![task("a")];
        emp.week_completed_tasks = vec![task("x"), task("y"), task("z"), task("q")];
        // rate 4/5 = 0.8 -> 30; 4 * 10 completed + 1 * 3 in progress.
        assert_eq!(points(&emp, &weekly, &w), 30 + 40 + 3);

        emp.week_tasks = vec![task("a"), task("b")];
        emp.week_completed_tasks = vec![task("x"), task("y")];
        // rate 0.5 -> 15; 2 * 10 + 2 * 3.
        assert_eq!(points(&emp, &weekly, &w), 15 + 20 + 6);
    }

    #[test]
    fn completing_work_today_while_present_earns_both_bonuses() {
        let mut emp = employee(AttendanceStatus::Present);
        emp.today_completed_tasks = vec![task("x"), task("y")];
        emp.week_completed_tasks = vec![task("x"), task("y")];
        let weekly = WeeklyAttendance::new();
        // today 20 + completed 2*10 + full completion 50
        // + daily bonus 20 + 2*5 per completed-today + productive 15.
        assert_eq!(points(&emp, &weekly, &ScoreWeights::default()), 135);
    }

    #[test]
    fn no_activity_scores_zero() {
        let emp = employee(AttendanceStatus::Absent);
        assert_eq!(points(&emp, &WeeklyAttendance::new(), &ScoreWeights::default()), 0);
    }
}
