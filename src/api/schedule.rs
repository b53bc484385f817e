use chrono::{DateTime, FixedOffset, TimeZone};

use super::models::ScheduleSlot;

pub const UNKNOWN_STAGES: &str = "???";

/// One rotation ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleLine {
    pub window: String,
    pub rule: Option<String>,
    pub stages: String,
}

/// `HH:MM` of `time` as seen in `tz`.
pub fn format_clock<Tz: TimeZone>(time: &DateTime<FixedOffset>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    time.with_timezone(tz).format("%H:%M").to_string()
}

/// The first `limit` rotations of a list.
pub fn schedule_lines<Tz: TimeZone>(slots: &[ScheduleSlot], limit: usize, tz: &Tz) -> Vec<ScheduleLine>
where
    Tz::Offset: std::fmt::Display,
{
    slots
        .iter()
        .take(limit)
        .map(|slot| {
            let stages = match &slot.stages {
                Some(stages) if !stages.is_empty() => stages
                    .iter()
                    .map(|s| s.name.as_str())
                    .collect::<Vec<_>>()
                    .join(" / "),
                _ => UNKNOWN_STAGES.to_string(),
            };

            ScheduleLine {
                window: format!(
                    "{} - {}",
                    format_clock(&slot.start_time, tz),
                    format_clock(&slot.end_time, tz)
                ),
                rule: slot.rule.as_ref().map(|r| r.name.clone()),
                stages,
            }
        })
        .collect()
}
