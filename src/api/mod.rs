pub mod client;
pub mod models;
pub mod schedule;

pub use client::ScheduleClient;
pub use schedule::{schedule_lines, ScheduleLine};
