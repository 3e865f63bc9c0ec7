use crate::domain::models::{AttendanceStatus, Employee, WeeklyAttendance};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Badge {
    pub id: &'static str,
    pub icon: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

pub struct BadgeContext<'a> {
    pub employee: &'a Employee,
    pub weekly: &'a WeeklyAttendance,
    pub attendance_streak: u32,
}

struct BadgeSpec {
    badge: Badge,
    earned: fn(&BadgeContext) -> bool,
}

const MIN_RECORDED_DAYS_FOR_PERFECT_WEEK: usize = 5;
const CONSISTENT_DAYS: usize = 5;
const ON_FIRE_STREAK: u32 = 5;

/// One entry per badge: descriptor plus its predicate. Badges are
/// independent; an employee may hold any subset.
const CATALOG: [BadgeSpec; 5] = [
    BadgeSpec {
        badge: Badge {
            id: "early-bird",
            icon: "fa-sun",
            name: "Early Bird",
            description: "Arrived before 9:00 AM",
        },
        earned: early_bird,
    },
    BadgeSpec {
        badge: Badge {
            id: "task-poster",
            icon: "fa-clipboard-list",
            name: "Active Poster",
            description: "Posted tasks today",
        },
        earned: task_poster,
    },
    BadgeSpec {
        badge: Badge {
            id: "perfect-week",
            icon: "fa-calendar-check",
            name: "Perfect Week",
            description: "100% attendance this week",
        },
        earned: perfect_week,
    },
    BadgeSpec {
        badge: Badge {
            id: "consistent",
            icon: "fa-star",
            name: "Consistent",
            description: "Posted tasks on 5 or more days this week",
        },
        earned: consistent,
    },
    BadgeSpec {
        badge: Badge {
            id: "streak-5",
            icon: "fa-fire",
            name: "On Fire!",
            description: "5-day attendance streak",
        },
        earned: on_fire,
    },
];

pub fn badges_for(
    employee: &Employee,
    weekly: &WeeklyAttendance,
    attendance_streak: u32,
) -> Vec<Badge> {
    let ctx = BadgeContext {
        employee,
        weekly,
        attendance_streak,
    };
    CATALOG
        .iter()
        .filter(|spec| (spec.earned)(&ctx))
        .map(|spec| spec.badge)
        .collect()
}

fn early_bird(ctx: &BadgeContext) -> bool {
    ctx.employee.attendance == AttendanceStatus::Present
}

fn task_poster(ctx: &BadgeContext) -> bool {
    !ctx.employee.today_tasks.is_empty()
}

fn perfect_week(ctx: &BadgeContext) -> bool {
    let recorded: Vec<&AttendanceStatus> = ctx
        .weekly
        .values()
        .filter_map(|people| people.get(&ctx.employee.name))
        .collect();
    recorded.len() >= MIN_RECORDED_DAYS_FOR_PERFECT_WEEK
        && recorded
            .iter()
            .all(|status| **status == AttendanceStatus::Present)
}

fn consistent(ctx: &BadgeContext) -> bool {
    ctx.employee
        .daily_task_counts
        .values()
        .filter(|count| **count > 0)
        .count()
        >= CONSISTENT_DAYS
}

fn on_fire(ctx: &BadgeContext) -> bool {
    ctx.attendance_streak >= ON_FIRE_STREAK
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Task;
    use std::collections::BTreeMap;

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

    fn ids(badges: &[Badge]) -> Vec<&'static str> {
        badges.iter().map(|b| b.id).collect()
    }

    #[test]
    fn present_today_earns_only_early_bird() {
        let emp = employee(AttendanceStatus::Present);
        let badges = badges_for(&emp, &WeeklyAttendance::new(), 0);
        assert_eq!(ids(&badges), vec!["early-bird"]);
    }

    #[test]
    fn absent_with_no_activity_earns_nothing() {
        let emp = employee(AttendanceStatus::Absent);
        assert!(badges_for(&emp, &WeeklyAttendance::new(), 0).is_empty());
    }

    #[test]
    fn posting_today_earns_task_poster() {
        let mut emp = employee(AttendanceStatus::Absent);
        emp.today_tasks = vec![Task {
            text: "t".to_string(),
            timestamp: 0,
        }];
        assert_eq!(
            ids(&badges_for(&emp, &WeeklyAttendance::new(), 0)),
            vec!["task-poster"]
        );
    }

    #[test]
    fn perfect_week_needs_five_recorded_present_days() {
        let emp = employee(AttendanceStatus::Absent);
        let four_days: WeeklyAttendance = ["Saturday", "Sunday", "Monday", "Tuesday"]
            .iter()
            .map(|day| {
                (
                    day.to_string(),
                    BTreeMap::from([("Ali".to_string(), AttendanceStatus::Present)]),
                )
            })
            .collect();
        assert!(!ids(&badges_for(&emp, &four_days, 0)).contains(&"perfect-week"));

        let mut five_days = four_days.clone();
        five_days.insert(
            "Wednesday".to_string(),
            BTreeMap::from([("Ali".to_string(), AttendanceStatus::Present)]),
        );
        assert!(ids(&badges_for(&emp, &five_days, 0)).contains(&"perfect-week"));

        let mut with_late = five_days;
        with_late.insert(
            "Thursday".to_string(),
            BTreeMap::from([("Ali".to_string(), AttendanceStatus::Late)]),
        );
        assert!(!ids(&badges_for(&emp, &with_late, 0)).contains(&"perfect-week"));
    }

    #[test]
    fn consistent_counts_distinct_posting_days() {
        let mut emp = employee(AttendanceStatus::Absent);
        emp.daily_task_counts = [("Saturday", 3), ("Sunday", 1), ("Monday", 1), ("Tuesday", 1)]
            .iter()
            .map(|(d, n)| (d.to_string(), *n))
            .collect();
        assert!(!ids(&badges_for(&emp, &WeeklyAttendance::new(), 0)).contains(&"consistent"));

        emp.daily_task_counts
            .insert("Wednesday".to_string(), 1);
        assert!(ids(&badges_for(&emp, &WeeklyAttendance::new(), 0)).contains(&"consistent"));
    }

    #[test]
    fn five_day_streak_earns_on_fire() {
        let emp = employee(AttendanceStatus::Absent);
        assert!(!ids(&badges_for(&emp, &WeeklyAttendance::new(), 4)).contains(&"streak-5"));
        assert!(ids(&badges_for(&emp, &WeeklyAttendance::new(), 5)).contains(&"streak-5"));
    }

    #[test]
    fn badges_stack_independently() {
        let mut emp = employee(AttendanceStatus::Present);
        emp.today_tasks = vec![Task {
            text: "t".to_string(),
            timestamp: 0,
        }];
        let badges = badges_for(&emp, &WeeklyAttendance::new(), 5);
        assert_eq!(ids(&badges), vec!["early-bird", "task-poster", "streak-5"]);
    }
}
