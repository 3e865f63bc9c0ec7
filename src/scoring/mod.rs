//! Gamification scoring: pure, stateless functions over an employee record
//! and the week's attendance map. Nothing here touches I/O or the clock, so
//! every rule is testable term-by-term.

pub mod badges;
pub mod levels;
pub mod points;
pub mod streaks;

pub use badges::Badge;
pub use levels::LevelInfo;
pub use points::ScoreWeights;

use crate::domain::models::{Employee, WeeklyAttendance};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredEmployee {
    #[serde(flatten)]
    pub employee: Employee,
    pub points: i64,
    pub level: LevelInfo,
    pub badges: Vec<Badge>,
    pub attendance_streak: u32,
    pub task_streak: u32,
}

pub fn score_employee(
    employee: Employee,
    weekly: &WeeklyAttendance,
    weights: &ScoreWeights,
) -> ScoredEmployee {
    let points = points::points(&employee, weekly, weights);
    let level = levels::level_info(points);
    let attendance_streak = streaks::attendance_streak(&employee.name, weekly);
    let task_streak = streaks::task_streak(&employee.daily_task_counts);
    let badges = badges::badges_for(&employee, weekly, attendance_streak);
    ScoredEmployee {
        employee,
        points,
        level,
        badges,
        attendance_streak,
        task_streak,
    }
}
