mod median_aggregator;
mod removal_policy;
mod snapshot;
mod strategy;

pub use median_aggregator::MedianAggregator;
pub use removal_policy::RemovalPolicy;
pub use snapshot::MedianSnapshot;
pub use strategy::{MedianElement, MedianStrategy};
