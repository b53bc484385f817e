use chrono::Utc;
use splat_tracker::analysis::{AggregateBucket, AggregationEngine};
use splat_tracker::catalog::{StaticCatalog, WeaponCatalogEntry};
use splat_tracker::records::{MatchOutcome, MatchRecord, MemoryBackend, RecordStore};

fn record(weapon: &str, won: bool) -> MatchRecord {
    MatchRecord::new(weapon, MatchOutcome::from_win(won), Utc::now())
}

fn bucket(key: &str, wins: u32, total: u32) -> AggregateBucket {
    AggregateBucket {
        key: key.to_string(),
        wins,
        total,
    }
}

fn catalog() -> StaticCatalog {
    StaticCatalog::from_entries(vec![
        WeaponCatalogEntry::new("Splattershot", "Splat Bomb", "Trizooka"),
        WeaponCatalogEntry::new("Splattershot Jr.", "Splat Bomb", "Big Bubbler"),
        WeaponCatalogEntry::new("Splat Roller", "Curling Bomb", "Big Bubbler"),
        WeaponCatalogEntry::new("Splat Charger", "Splat Bomb", "Ink Vac"),
        WeaponCatalogEntry::new("Carbon Roller", "Autobomb", "Zipcaster"),
        WeaponCatalogEntry::new("Tri-Stringer", "Toxic Mist", "Killer Wail 5.1"),
    ])
}

#[test]
fn empty_history_has_no_data() {
    let report = AggregationEngine::default().compute(&[], &catalog());

    assert!(report.is_empty());
    assert!(report.by_weapon.is_empty());
    assert!(report.by_secondary.is_empty());
    assert!(report.by_special.is_empty());
}

#[test]
fn single_win_lands_in_every_summary() {
    let report = AggregationEngine::default().compute(&[record("Splattershot", true)], &catalog());

    assert!(!report.is_empty());
    assert_eq!(report.by_weapon.entries, vec![bucket("Splattershot", 1, 1)]);
    assert_eq!(report.by_secondary.entries, vec![bucket("Splat Bomb", 1, 1)]);
    assert_eq!(report.by_special.entries, vec![bucket("Trizooka", 1, 1)]);
}

#[test]
fn six_weapons_truncate_to_five() {
    let records: Vec<MatchRecord> = [
        "Splattershot",
        "Splattershot Jr.",
        "Splat Roller",
        "Splat Charger",
        "Carbon Roller",
        "Tri-Stringer",
    ]
    .iter()
    .map(|w| record(w, true))
    .collect();

    let report = AggregationEngine::default().compute(&records, &catalog());

    assert_eq!(report.by_weapon.entries.len(), 5);
    assert_eq!(report.by_weapon.omitted, 1);
    // equal totals keep first-seen order, so the last weapon is the one cut
    assert!(report.by_weapon.find("Tri-Stringer").is_none());
    assert_eq!(report.by_weapon.entries[0].key, "Splattershot");
}

#[test]
fn rejected_append_leaves_aggregates_alone() {
    let catalog = catalog();
    let engine = AggregationEngine::default();
    let mut store = RecordStore::new(MemoryBackend::new());
    store.append(&catalog, "Splat Roller", true).unwrap();
    let before = engine.compute(&store.load(), &catalog);

    assert!(store.append(&catalog, "Dynamo Roller", true).is_err());

    assert_eq!(engine.compute(&store.load(), &catalog), before);
}

#[test]
fn removed_weapon_counts_for_primary_only() {
    let records = vec![
        record("Splattershot", true),
        record("Retired Blaster", true),
        record("Retired Blaster", false),
    ];

    let report = AggregationEngine::default().compute(&records, &catalog());

    assert_eq!(report.total_matches, 3);
    assert_eq!(report.by_weapon.find("Retired Blaster"), Some(&bucket("Retired Blaster", 1, 2)));
    assert_eq!(report.by_secondary.entries, vec![bucket("Splat Bomb", 1, 1)]);
    assert_eq!(report.by_special.entries, vec![bucket("Trizooka", 1, 1)]);
}

#[test]
fn shared_loadout_parts_merge_across_weapons() {
    let records = vec![
        record("Splattershot", true),
        record("Splat Charger", false),
        record("Splattershot Jr.", true),
        record("Splat Roller", false),
    ];

    let report = AggregationEngine::default().compute(&records, &catalog());

    assert_eq!(
        report.by_secondary.entries,
        vec![bucket("Splat Bomb", 2, 3), bucket("Curling Bomb", 0, 1)]
    );
    assert_eq!(
        report.by_special.entries,
        vec![
            bucket("Big Bubbler", 1, 2),
            bucket("Trizooka", 1, 1),
            bucket("Ink Vac", 0, 1),
        ]
    );
}

#[test]
fn ranking_is_by_match_count_not_win_rate() {
    let records = vec![
        record("Splat Charger", true),
        record("Splat Roller", false),
        record("Splat Roller", false),
        record("Splat Roller", false),
    ];

    let report = AggregationEngine::default().compute(&records, &catalog());
    let keys: Vec<&str> = report.by_weapon.entries.iter().map(|b| b.key.as_str()).collect();
    assert_eq!(keys, vec!["Splat Roller", "Splat Charger"]);
}

#[test]
fn custom_top_n_is_honoured() {
    let records: Vec<MatchRecord> = ["Splattershot", "Splat Roller", "Splat Charger"]
        .iter()
        .map(|w| record(w, false))
        .collect();

    let report = AggregationEngine::new(2).compute(&records, &catalog());
    assert_eq!(report.by_weapon.entries.len(), 2);
    assert_eq!(report.by_weapon.omitted, 1);
}

#[test]
fn builtin_catalog_resolves_loadouts() {
    let catalog = StaticCatalog::builtin("ja_JP").unwrap();
    let report = AggregationEngine::default().compute(&[record("スプラシューター", true)], &catalog);

    assert_eq!(report.by_secondary.entries, vec![bucket("キューバンボム", 1, 1)]);
    assert_eq!(report.by_special.entries, vec![bucket("ウルトラショット", 1, 1)]);
}
