//! Check-in parsing.
//!
//! The attendance channel carries time-clock integration posts of the form
//! `<name> *jibbled in* via ...` / `<name> *jibbled out* via ...`. Only "in"
//! events carry an attendance signal; "out" events are ignored entirely.
//! A check-in strictly after 09:00:00 local counts as a miss for that day.
//!
//! Messages are processed strictly oldest-to-newest, so when someone checks
//! in more than once on the same day the chronologically last event wins.

use crate::domain::models::{AttendanceStatus, CurrentAttendance, RawMessage, WeeklyAttendance};
use crate::time_utils::{self, WeekWindow};
use chrono::{NaiveTime, Timelike};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

static JIBBLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(.+?) \*jibbled (in|out)\*").expect("jibble pattern"));

/// Derives per-day attendance for the given week from raw channel messages.
/// Deterministic and idempotent over the same message set and window,
/// regardless of the order the gateway returned the messages in.
pub fn derive_weekly(
    messages: &[RawMessage],
    window: &WeekWindow,
    aliases: &HashMap<String, String>,
) -> WeeklyAttendance {
    let mut ordered: Vec<&RawMessage> = messages.iter().collect();
    ordered.sort_by_key(|msg| msg.posted_at);

    let mut weekly = WeeklyAttendance::new();
    for msg in ordered {
        let Some(at) = time_utils::local_datetime(msg.posted_at) else {
            continue;
        };
        if !window.contains(at) {
            continue;
        }
        let Some(caps) = JIBBLE_RE.captures(&msg.text) else {
            continue;
        };
        if !caps[2].eq_ignore_ascii_case("in") {
            continue;
        }
        let captured = caps[1].trim();
        let name = aliases
            .get(captured)
            .cloned()
            .unwrap_or_else(|| captured.to_string());
        let status = if is_late(at.time()) {
            AttendanceStatus::Absent
        } else {
            AttendanceStatus::Present
        };
        weekly
            .entry(time_utils::day_name(at.date()).to_string())
            .or_default()
            .insert(name, status);
    }
    weekly
}

// Strictly after 09:00:00: hour > 9, or hour == 9 with any minute past zero.
fn is_late(t: NaiveTime) -> bool {
    t.hour() > 9 || (t.hour() == 9 && t.minute() > 0)
}

/// Flattens the week in canonical day order; the latest day seen for a
/// person is their current status.
pub fn flatten_current(weekly: &WeeklyAttendance) -> CurrentAttendance {
    let mut current = CurrentAttendance::new();
    for day in time_utils::DAY_NAMES {
        if let Some(people) = weekly.get(day) {
            for (name, status) in people {
                current.insert(name.clone(), *status);
            }
        }
    }
    current
}
