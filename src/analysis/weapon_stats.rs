use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateBucket {
    pub key: String,
    pub wins: u32,
    pub total: u32,
}

impl AggregateBucket {
    pub fn new(key: String) -> Self {
        AggregateBucket {
            key,
            wins: 0,
            total: 0,
        }
    }

    pub fn record(&mut self, won: bool) {
        self.total += 1;
        if won {
            self.wins += 1;
        }
    }

    pub fn losses(&self) -> u32 {
        self.total - self.wins
    }

    /// Win ratio in `[0, 1]`.
    pub fn win_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.wins as f64 / self.total as f64
        }
    }

    /// Win rate as a whole percent, rounded to nearest with ties going up.
    pub fn win_percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        let wins = self.wins as u64;
        let total = self.total as u64;
        ((wins * 100 + total / 2) / total) as u32
    }

    /// Compares the unrounded rate, so 49.5% is not winning.
    pub fn is_winning(&self) -> bool {
        self.win_rate() >= 0.5
    }
}

/// Buckets keyed by name, remembering the order keys were first seen.
#[derive(Debug, Default)]
pub struct BucketTally {
    buckets: Vec<AggregateBucket>,
    positions: HashMap<String, usize>,
}

impl BucketTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: &str, won: bool) {
        let pos = match self.positions.get(key) {
            Some(&pos) => pos,
            None => {
                self.buckets.push(AggregateBucket::new(key.to_string()));
                let pos = self.buckets.len() - 1;
                self.positions.insert(key.to_string(), pos);
                pos
            }
        };
        self.buckets[pos].record(won);
    }

    pub fn get(&self, key: &str) -> Option<&AggregateBucket> {
        self.positions.get(key).map(|&pos| &self.buckets[pos])
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Buckets in first-encounter order.
    pub fn into_buckets(self) -> Vec<AggregateBucket> {
        self.buckets
    }
}
