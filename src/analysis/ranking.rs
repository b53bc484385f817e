use super::weapon_stats::AggregateBucket;

/// The top buckets by match count, plus how many were cut.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankedSummary {
    pub entries: Vec<AggregateBucket>,
    pub omitted: usize,
}

impl RankedSummary {
    /// Sorts by `total` descending and keeps the first `top_n`.
    /// The sort is stable so equal totals stay in the order given.
    pub fn rank(mut buckets: Vec<AggregateBucket>, top_n: usize) -> Self {
        buckets.sort_by(|a, b| b.total.cmp(&a.total));

        let omitted = buckets.len().saturating_sub(top_n);
        buckets.truncate(top_n);

        RankedSummary {
            entries: buckets,
            omitted,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn find(&self, key: &str) -> Option<&AggregateBucket> {
        self.entries.iter().find(|b| b.key == key)
    }
}
