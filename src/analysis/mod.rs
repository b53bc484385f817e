pub mod aggregator;
pub mod ranking;
pub mod weapon_stats;

pub use aggregator::{AggregationEngine, StatsReport};
pub use ranking::RankedSummary;
pub use weapon_stats::{AggregateBucket, BucketTally};
