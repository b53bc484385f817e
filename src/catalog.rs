use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::AppError;

const BUILTIN_WEAPON_DB: &str = include_str!("../data/weapons.json");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeaponCatalogEntry {
    pub display_name: String,
    pub secondary_name: String,
    pub special_name: String,
}

impl WeaponCatalogEntry {
    pub fn new(display_name: &str, secondary_name: &str, special_name: &str) -> Self {
        WeaponCatalogEntry {
            display_name: display_name.to_string(),
            secondary_name: secondary_name.to_string(),
            special_name: special_name.to_string(),
        }
    }
}

/// Read-only weapon lookup keyed by exact display name.
pub trait WeaponCatalog {
    fn find_by_display_name(&self, name: &str) -> Option<&WeaponCatalogEntry>;

    /// Display names in catalog order.
    fn display_names(&self) -> Vec<&str>;
}

// Upstream weapon DB layout: localized names under `name.<locale>`.
#[derive(Debug, Deserialize)]
struct WeaponDbRecord {
    name: HashMap<String, String>,
    sub: NamedPart,
    special: NamedPart,
}

#[derive(Debug, Deserialize)]
struct NamedPart {
    name: HashMap<String, String>,
}

#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    entries: Vec<WeaponCatalogEntry>,
    index: HashMap<String, usize>,
}

impl StaticCatalog {
    pub fn from_entries(entries: Vec<WeaponCatalogEntry>) -> Self {
        let mut index = HashMap::new();
        for (pos, entry) in entries.iter().enumerate() {
            // first entry wins on duplicate names
            index.entry(entry.display_name.clone()).or_insert(pos);
        }
        StaticCatalog { entries, index }
    }

    pub fn from_weapon_db_json(json: &str, locale: &str) -> Result<Self, AppError> {
        let records: Vec<WeaponDbRecord> = serde_json::from_str(json)
            .map_err(|e| AppError::CatalogError(format!("Failed to parse weapon DB: {}", e)))?;

        let total = records.len();
        let entries: Vec<WeaponCatalogEntry> = records
            .into_iter()
            .filter_map(|record| {
                let display_name = record.name.get(locale)?;
                let secondary = record.sub.name.get(locale);
                let special = record.special.name.get(locale);
                match (secondary, special) {
                    (Some(secondary), Some(special)) => {
                        Some(WeaponCatalogEntry::new(display_name, secondary, special))
                    }
                    _ => {
                        debug!(weapon = %display_name, locale, "weapon lacks localized sub/special name, skipping");
                        None
                    }
                }
            })
            .collect();

        if entries.len() < total {
            debug!(kept = entries.len(), total, locale, "weapon DB entries filtered by locale");
        }

        Ok(Self::from_entries(entries))
    }

    pub fn builtin(locale: &str) -> Result<Self, AppError> {
        Self::from_weapon_db_json(BUILTIN_WEAPON_DB, locale)
    }

    pub fn load(path: &Path, locale: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::CatalogError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_weapon_db_json(&content, locale)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl WeaponCatalog for StaticCatalog {
    fn find_by_display_name(&self, name: &str) -> Option<&WeaponCatalogEntry> {
        self.index.get(name).map(|&pos| &self.entries[pos])
    }

    fn display_names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.display_name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_DB: &str = r#"[
        {
            "key": "sshooter_normal",
            "name": { "ja_JP": "スプラシューター", "en_US": "Splattershot" },
            "sub": { "name": { "ja_JP": "キューバンボム", "en_US": "Suction Bomb" } },
            "special": { "name": { "ja_JP": "ウルトラショット", "en_US": "Trizooka" } }
        },
        {
            "name": { "ja_JP": "わかばシューター" },
            "sub": { "name": { "ja_JP": "スプラッシュボム" } },
            "special": { "name": { "ja_JP": "グレートバリア" } }
        }
    ]"#;

    #[test]
    fn parses_weapon_db_for_locale() {
        let catalog = StaticCatalog::from_weapon_db_json(SAMPLE_DB, "ja_JP").unwrap();
        assert_eq!(catalog.len(), 2);

        let entry = catalog.find_by_display_name("スプラシューター").unwrap();
        assert_eq!(entry.secondary_name, "キューバンボム");
        assert_eq!(entry.special_name, "ウルトラショット");
    }

    #[test]
    fn skips_entries_missing_locale() {
        let catalog = StaticCatalog::from_weapon_db_json(SAMPLE_DB, "en_US").unwrap();
        assert_eq!(catalog.display_names(), vec!["Splattershot"]);
    }

    #[test]
    fn lookup_is_exact_match() {
        let catalog = StaticCatalog::from_entries(vec![WeaponCatalogEntry::new(
            "Splattershot",
            "Suction Bomb",
            "Trizooka",
        )]);

        assert!(catalog.find_by_display_name("Splattershot").is_some());
        assert!(catalog.find_by_display_name("splattershot").is_none());
        assert!(catalog.find_by_display_name(" Splattershot").is_none());
        assert!(catalog.find_by_display_name("Splatter").is_none());
    }

    #[test]
    fn duplicate_names_resolve_to_first() {
        let catalog = StaticCatalog::from_entries(vec![
            WeaponCatalogEntry::new("Splattershot", "Suction Bomb", "Trizooka"),
            WeaponCatalogEntry::new("Splattershot", "Splat Bomb", "Big Bubbler"),
        ]);
        let entry = catalog.find_by_display_name("Splattershot").unwrap();
        assert_eq!(entry.secondary_name, "Suction Bomb");
    }

    #[test]
    fn builtin_catalog_has_both_locales() {
        let ja = StaticCatalog::builtin("ja_JP").unwrap();
        let en = StaticCatalog::builtin("en_US").unwrap();
        assert!(!ja.is_empty());
        assert_eq!(ja.len(), en.len());
        assert_eq!(
            en.find_by_display_name("Splattershot").map(|e| e.special_name.as_str()),
            Some("Trizooka")
        );
    }

    #[test]
    fn malformed_db_is_catalog_error() {
        let err = StaticCatalog::from_weapon_db_json("{not json", "ja_JP").unwrap_err();
        assert!(matches!(err, AppError::CatalogError(_)));
    }
}
