use crate::scoring::ScoredEmployee;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Attendance for one day, once resolved, is exactly one of these. `Late` is
/// part of the taxonomy and scoreable, but the default check-in policy maps
/// tardy arrivals to `Absent` (see `domain::attendance`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
}

/// person name -> status for one day.
pub type DayAttendance = BTreeMap<String, AttendanceStatus>;

/// day name -> per-person statuses. Only days that had at least one check-in
/// event carry a key; a missing day means "no data", not Absent. That
/// defaulting happens when the employee record is assembled.
pub type WeeklyAttendance = BTreeMap<String, DayAttendance>;

/// person name -> most recently observed status across the week.
pub type CurrentAttendance = BTreeMap<String, AttendanceStatus>;

/// A channel message as the gateway hands it to the pipeline.
#[derive(Debug, Clone)]
pub struct RawMessage {
    pub author_id: Option<String>,
    pub text: String,
    /// Epoch seconds.
    pub posted_at: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    pub text: String,
    pub timestamp: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsItem {
    pub text: String,
    pub user: String,
    pub timestamp: i64,
}

/// One tracked team member. Rebuilt from scratch on every aggregation cycle,
/// never mutated in place. The completed-task lists stay empty until a
/// completion source is wired up; they are explicit fields rather than
/// sometimes-present dynamic shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub email: String,
    pub photo: Option<String>,
    pub role: String,
    pub today_tasks: Vec<Task>,
    pub week_tasks: Vec<Task>,
    pub today_completed_tasks: Vec<Task>,
    pub week_completed_tasks: Vec<Task>,
    /// day name -> number of this week's task posts on that day.
    pub daily_task_counts: BTreeMap<String, usize>,
    pub attendance: AttendanceStatus,
}

/// The full current-week aggregation result, as served over HTTP and pushed
/// to websocket clients. Compared by equality to suppress redundant pushes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSnapshot {
    pub employees: Vec<ScoredEmployee>,
    pub news: Vec<NewsItem>,
    pub weekly_attendance: WeeklyAttendance,
}
