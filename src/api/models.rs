use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

// GET /api/schedule response
#[derive(Debug, Deserialize)]
pub struct ScheduleResponse {
    pub result: ScheduleResult,
}

#[derive(Debug, Deserialize, Default)]
pub struct ScheduleResult {
    /// X Battle rotations.
    #[serde(default)]
    pub x: Vec<ScheduleSlot>,
    /// Anarchy Battle (Open) rotations.
    #[serde(default)]
    pub bankara_open: Vec<ScheduleSlot>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ScheduleSlot {
    pub start_time: DateTime<FixedOffset>,
    pub end_time: DateTime<FixedOffset>,
    #[serde(default)]
    pub rule: Option<Rule>,
    #[serde(default)]
    pub stages: Option<Vec<Stage>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Rule {
    #[serde(default)]
    pub key: String,
    pub name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Stage {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub image: String,
}
