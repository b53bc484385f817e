use tracing::{debug, trace};

use super::ranking::RankedSummary;
use super::weapon_stats::BucketTally;
use crate::catalog::WeaponCatalog;
use crate::config::DEFAULT_TOP_N;
use crate::records::MatchRecord;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsReport {
    pub total_matches: usize,
    pub by_weapon: RankedSummary,
    pub by_secondary: RankedSummary,
    pub by_special: RankedSummary,
}

impl StatsReport {
    /// True when there were no records at all.
    pub fn is_empty(&self) -> bool {
        self.total_matches == 0
    }
}

/// Recomputes per-weapon, per-secondary and per-special summaries
/// from a full record snapshot.
#[derive(Debug, Clone, Copy)]
pub struct AggregationEngine {
    top_n: usize,
}

impl Default for AggregationEngine {
    fn default() -> Self {
        AggregationEngine::new(DEFAULT_TOP_N)
    }
}

impl AggregationEngine {
    pub fn new(top_n: usize) -> Self {
        AggregationEngine { top_n }
    }

    pub fn compute(&self, records: &[MatchRecord], catalog: &dyn WeaponCatalog) -> StatsReport {
        let mut by_weapon = BucketTally::new();
        let mut by_secondary = BucketTally::new();
        let mut by_special = BucketTally::new();
        let mut unresolved = 0usize;

        for record in records {
            let won = record.result.is_win();
            by_weapon.add(&record.weapon, won);

            // Weapons dropped from the catalog only count toward the primary tally.
            match catalog.find_by_display_name(&record.weapon) {
                Some(entry) => {
                    by_secondary.add(&entry.secondary_name, won);
                    by_special.add(&entry.special_name, won);
                }
                None => {
                    trace!(weapon = %record.weapon, "weapon not in catalog, skipping loadout tallies");
                    unresolved += 1;
                }
            }
        }

        debug!(
            records = records.len(),
            weapons = by_weapon.len(),
            secondaries = by_secondary.len(),
            specials = by_special.len(),
            unresolved,
            "aggregated match records"
        );

        StatsReport {
            total_matches: records.len(),
            by_weapon: RankedSummary::rank(by_weapon.into_buckets(), self.top_n),
            by_secondary: RankedSummary::rank(by_secondary.into_buckets(), self.top_n),
            by_special: RankedSummary::rank(by_special.into_buckets(), self.top_n),
        }
    }
}
