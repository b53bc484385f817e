use crate::config::Config;
use crate::error::AppError;
use tracing::{debug, info};

use super::models::*;

const USER_AGENT: &str = concat!("splat_tracker/", env!("CARGO_PKG_VERSION"));

pub struct ScheduleClient {
    config: Config,
}

impl ScheduleClient {
    pub fn new(config: Config) -> Self {
        ScheduleClient { config }
    }

    // Single attempt; a failed fetch is reported, not retried.
    fn execute_request(&self, url: &str) -> Result<String, AppError> {
        debug!(url, "requesting schedule");

        let response = ureq::get(url)
            .set("User-Agent", USER_AGENT)
            .call()
            .map_err(|e| AppError::HttpError(e.to_string()))?;

        response
            .into_string()
            .map_err(|e| AppError::HttpError(e.to_string()))
    }

    pub fn fetch(&self) -> Result<ScheduleResult, AppError> {
        let body = self.execute_request(&self.config.api_url)?;
        let schedule = parse_schedule(&body)?;

        info!(
            x = schedule.x.len(),
            bankara_open = schedule.bankara_open.len(),
            "schedule fetched"
        );
        Ok(schedule)
    }
}

pub fn parse_schedule(body: &str) -> Result<ScheduleResult, AppError> {
    serde_json::from_str::<ScheduleResponse>(body)
        .map(|resp| resp.result)
        .map_err(|e| AppError::JsonError(e.to_string()))
}
