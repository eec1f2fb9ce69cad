//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::events::Worker;
use crate::models::SessionStatus;
use chrono::{DateTime, Local, Utc};
use ratatui::prelude::Color;

/// Get a ratatui color for a worker based on its type
pub fn get_worker_color(worker: &Worker) -> Color {
    match worker {
        Worker::Refresher => Color::Cyan,
        Worker::Scheduler => Color::Yellow,
        Worker::Dashboard => Color::Magenta,
    }
}

/// Badge color for a session status
pub fn status_color(status: SessionStatus) -> Color {
    match status {
        SessionStatus::Completed => Color::Green,
        SessionStatus::Active => Color::LightBlue,
        SessionStatus::Pending => Color::Yellow,
    }
}

/// Formats an integer with `,` thousands separators (en-US grouping).
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Session start time in the viewer's local timezone, e.g. `Oct 18, 09:30`
pub fn format_start_time(start: &DateTime<Utc>) -> String {
    start.with_timezone(&Local).format("%b %d, %H:%M").to_string()
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    if let Some(date_part) = timestamp.split(' ').next() {
        if let Some(time_part) = timestamp.split(' ').nth(1) {
            // Extract MM-DD from date and HH:MM from time
            if let Some(month_day) = date_part.get(5..10) {
                if let Some(hour_min) = time_part.get(0..5) {
                    return format!("{} {}", month_day, hour_min);
                }
            }
        }
    }
    // Fallback to original timestamp if parsing fails
    timestamp.to_string()
}

/// Clean HTTP error messages
pub fn clean_http_error_message(msg: &str) -> String {
    if msg.contains("Reqwest error") && msg.contains("timed out") {
        return shorten_fallback(msg, "request timed out");
    }
    if msg.contains("Reqwest error") {
        return shorten_fallback(msg, "backend unreachable");
    }
    msg.to_string()
}

/// Replaces the parenthesised transport error in a fallback message with a short cause.
fn shorten_fallback(msg: &str, cause: &str) -> String {
    match (msg.find('('), msg.rfind(')')) {
        (Some(start), Some(end)) if start < end => {
            format!("{}({}){}", &msg[..start], cause, &msg[end + 1..])
        }
        _ => format!("Network error: {}", cause),
    }
}
