use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::backend::StorageBackend;
use crate::catalog::WeaponCatalog;
use crate::error::AppError;

pub const STORAGE_KEY: &str = "spla3_battle_records";

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MatchOutcome {
    Win,
    Lose,
}

impl MatchOutcome {
    pub fn from_win(is_win: bool) -> Self {
        if is_win {
            MatchOutcome::Win
        } else {
            MatchOutcome::Lose
        }
    }

    pub fn is_win(self) -> bool {
        self == MatchOutcome::Win
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    pub weapon: String,
    pub result: MatchOutcome,
    #[serde(rename = "date")]
    pub timestamp: DateTime<Utc>,
}

impl MatchRecord {
    pub fn new(weapon: &str, result: MatchOutcome, timestamp: DateTime<Utc>) -> Self {
        MatchRecord {
            weapon: weapon.to_string(),
            result,
            timestamp,
        }
    }
}

/// Owns the persisted match history. Every write replaces the whole slot.
pub struct RecordStore<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> RecordStore<B> {
    pub fn new(backend: B) -> Self {
        RecordStore { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Records in insertion order. Unreadable or corrupt data loads as empty.
    pub fn load(&self) -> Vec<MatchRecord> {
        match self.try_load() {
            Ok(records) => records,
            Err(e) => {
                warn!(error = %e, "match records unavailable, treating as empty");
                Vec::new()
            }
        }
    }

    /// Like `load`, but unreadable or corrupt data is an error.
    fn try_load(&self) -> Result<Vec<MatchRecord>, AppError> {
        let raw = match self.backend.read(STORAGE_KEY)? {
            Some(raw) => raw,
            None => return Ok(Vec::new()),
        };

        let records: Vec<MatchRecord> = serde_json::from_str(&raw).map_err(|e| {
            AppError::StorageError(format!("Stored match records are malformed: {}", e))
        })?;
        debug!(count = records.len(), "loaded match records");
        Ok(records)
    }

    fn save(&mut self, records: &[MatchRecord]) -> Result<(), AppError> {
        let json = serde_json::to_string(records).map_err(|e| {
            AppError::JsonError(format!("Failed to serialize match records: {}", e))
        })?;
        self.backend.write(STORAGE_KEY, &json)
    }

    /// Validates `weapon` against the catalog and persists a new record.
    /// Fails without writing if the existing history cannot be read.
    pub fn append(
        &mut self,
        catalog: &dyn WeaponCatalog,
        weapon: &str,
        is_win: bool,
    ) -> Result<MatchRecord, AppError> {
        let weapon = weapon.trim();
        if catalog.find_by_display_name(weapon).is_none() {
            return Err(AppError::UnknownWeapon(weapon.to_string()));
        }

        let record = MatchRecord::new(weapon, MatchOutcome::from_win(is_win), Utc::now());

        // Never overwrite history that could not be read back.
        let mut records = self.try_load()?;
        records.push(record.clone());
        self.save(&records)?;

        info!(weapon = %record.weapon, result = ?record.result, total = records.len(), "match recorded");
        Ok(record)
    }

    /// Drops every record, but only once `confirm` agrees.
    /// Returns whether anything was cleared.
    pub fn clear<F>(&mut self, confirm: F) -> Result<bool, AppError>
    where
        F: FnOnce() -> bool,
    {
        if !confirm() {
            debug!("clear cancelled");
            return Ok(false);
        }

        self.backend.remove(STORAGE_KEY)?;
        info!("match records cleared");
        Ok(true)
    }
}
