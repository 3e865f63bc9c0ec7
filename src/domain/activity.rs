//! Task-channel and news-channel aggregation.
//!
//! A message counts toward an employee when they authored it or it carries a
//! mention token for their id. Order is preserved as the gateway returned it;
//! the caps take the first N in that order.

use crate::domain::models::{NewsItem, RawMessage, Task};
use crate::slack::types::SlackUser;
use crate::time_utils;
use chrono::{NaiveDate, NaiveDateTime};
use std::collections::BTreeMap;

pub const TODAY_TASK_CAP: usize = 5;
pub const WEEK_TASK_CAP: usize = 10;
pub const NEWS_CAP: usize = 5;

/// "today" and "this week so far" as seen by the aggregation run.
#[derive(Debug, Clone, Copy)]
pub struct ActivityWindow {
    pub today: NaiveDate,
    pub week_start: NaiveDateTime,
    pub now: NaiveDateTime,
}

#[derive(Debug, Default, Clone)]
pub struct UserActivity {
    pub today_tasks: Vec<Task>,
    pub week_tasks: Vec<Task>,
    pub daily_task_counts: BTreeMap<String, usize>,
}

pub fn tasks_for_user(
    messages: &[RawMessage],
    user_id: &str,
    window: &ActivityWindow,
) -> UserActivity {
    let mention = format!("<@{user_id}>");
    let mut activity = UserActivity::default();

    for msg in messages {
        if msg.author_id.as_deref() != Some(user_id) && !msg.text.contains(&mention) {
            continue;
        }
        let Some(at) = time_utils::local_datetime(msg.posted_at) else {
            continue;
        };
        if at.date() == window.today && activity.today_tasks.len() < TODAY_TASK_CAP {
            activity.today_tasks.push(task_of(msg));
        }
        if at >= window.week_start && at < window.now {
            if activity.week_tasks.len() < WEEK_TASK_CAP {
                activity.week_tasks.push(task_of(msg));
            }
            // The count map is uncapped; the task streak needs every day.
            *activity
                .daily_task_counts
                .entry(time_utils::day_name(at.date()).to_string())
                .or_insert(0) += 1;
        }
    }
    activity
}

fn task_of(msg: &RawMessage) -> Task {
    Task {
        text: msg.text.clone(),
        timestamp: msg.posted_at,
    }
}

/// Up to five of today's posts from the news channel, each attributed to the
/// author's display name, or "Unknown" when the author left the directory.
pub fn news_feed(messages: &[RawMessage], users: &[SlackUser], today: NaiveDate) -> Vec<NewsItem> {
    messages
        .iter()
        .filter_map(|msg| {
            let at = time_utils::local_datetime(msg.posted_at)?;
            if at.date() != today {
                return None;
            }
            let user = msg
                .author_id
                .as_ref()
                .and_then(|id| users.iter().find(|u| &u.id == id))
                .map(|u| u.display_name().to_string())
                .unwrap_or_else(|| "Unknown".to_string());
            Some(NewsItem {
                text: msg.text.clone(),
                user,
                timestamp: msg.posted_at,
            })
        })
        .take(NEWS_CAP)
        .collect()
}
