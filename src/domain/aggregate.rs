//! The per-invocation aggregation pipeline: directory + attendance +
//! activity -> scored team snapshot. Every upstream facet degrades to empty
//! on failure so one bad call never takes down the whole snapshot.

use crate::config::Config;
use crate::domain::activity::{self, ActivityWindow};
use crate::domain::attendance;
use crate::domain::models::{AttendanceStatus, Employee, RawMessage, TeamSnapshot};
use crate::scoring::{self, ScoreWeights, ScoredEmployee};
use crate::slack::ChatGateway;
use crate::time_utils::WeekWindow;
use chrono::Local;

pub const ATTENDANCE_HISTORY_LIMIT: u32 = 1000;
pub const TASKS_HISTORY_LIMIT: u32 = 100;
pub const NEWS_HISTORY_LIMIT: u32 = 50;

/// Builds a fresh snapshot for the requested week. Attendance honors the
/// offset; tasks and news always describe the current week and today.
pub async fn team_snapshot(
    gateway: &dyn ChatGateway,
    config: &Config,
    week_offset: u32,
) -> TeamSnapshot {
    let users = match gateway.list_users().await {
        Ok(users) => users,
        Err(e) => {
            tracing::warn!("user directory unavailable: {e}");
            Vec::new()
        }
    };

    let now = Local::now().naive_local();
    let today = now.date();
    let window = WeekWindow::for_offset(today, week_offset);
    let current_week = WeekWindow::for_offset(today, 0);

    let attendance_msgs =
        channel_messages(gateway, &config.attendance_channel, ATTENDANCE_HISTORY_LIMIT).await;
    let weekly = attendance::derive_weekly(&attendance_msgs, &window, &config.name_aliases);
    let current = attendance::flatten_current(&weekly);

    let task_msgs = channel_messages(gateway, &config.tasks_channel, TASKS_HISTORY_LIMIT).await;
    let news_msgs = channel_messages(gateway, &config.news_channel, NEWS_HISTORY_LIMIT).await;
    let news = activity::news_feed(&news_msgs, &users, today);

    let activity_window = ActivityWindow {
        today,
        week_start: current_week.start,
        now,
    };

    let mut employees = Vec::new();
    for user in &users {
        if user.is_bot || user.deleted {
            continue;
        }
        let profile = match gateway.get_profile(&user.id).await {
            Ok(profile) => profile,
            Err(e) => {
                tracing::warn!(user = %user.id, "profile fetch failed, skipping: {e}");
                continue;
            }
        };
        // No email means not a tracked employee (integration and guest
        // accounts have profiles without one).
        let Some(email) = profile.email.clone().filter(|email| !email.is_empty()) else {
            continue;
        };

        let name = user.display_name().to_string();
        let user_activity = activity::tasks_for_user(&task_msgs, &user.id, &activity_window);
        let attendance_today = current
            .get(&name)
            .copied()
            .unwrap_or(AttendanceStatus::Absent);

        employees.push(Employee {
            id: user.id.clone(),
            name,
            email,
            photo: profile.image_192.clone(),
            role: profile.title.clone().unwrap_or_default(),
            today_tasks: user_activity.today_tasks,
            week_tasks: user_activity.week_tasks,
            today_completed_tasks: Vec::new(),
            week_completed_tasks: Vec::new(),
            daily_task_counts: user_activity.daily_task_counts,
            attendance: attendance_today,
        });
    }

    let weights = ScoreWeights::default();
    let mut scored: Vec<ScoredEmployee> = employees
        .into_iter()
        .map(|employee| scoring::score_employee(employee, &weekly, &weights))
        .collect();
    scored.sort_by(|a, b| b.points.cmp(&a.points));

    TeamSnapshot {
        employees: scored,
        news,
        weekly_attendance: weekly,
    }
}

async fn channel_messages(
    gateway: &dyn ChatGateway,
    channel_name: &str,
    limit: u32,
) -> Vec<RawMessage> {
    let channel_id = match gateway.find_channel_by_name(channel_name).await {
        Ok(Some(id)) => id,
        Ok(None) => {
            tracing::warn!(channel = channel_name, "channel not found");
            return Vec::new();
        }
        Err(e) => {
            tracing::warn!(channel = channel_name, "channel lookup failed: {e}");
            return Vec::new();
        }
    };
    match gateway.get_recent_messages(&channel_id, limit).await {
        Ok(messages) => messages,
        Err(e) => {
            tracing::warn!(channel = channel_name, "history fetch failed: {e}");
            Vec::new()
        }
    }
}
