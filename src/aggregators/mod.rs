mod aggregator;
mod error;
pub mod median;

pub use aggregator::AttributeAggregator;
pub use error::AggregateError;
