use crate::aggregators::AggregateError;
use crate::core::attributes::{AttributeType, AttributeValue};

/// Stateful attribute aggregator driven by an external windowing engine.
///
/// The engine calls [`add`] for every value entering the window and
/// [`remove`] for every value leaving it, in window-eviction order. After
/// each call the aggregator reports its current statistic as an `f64`.
///
/// Implementations own their state exclusively and perform no I/O; the
/// hosting engine is responsible for serializing calls to a single
/// instance. Independent instances must share no mutable state.
pub trait AttributeAggregator {
    /// The type of the emitted statistic. Fixed after construction.
    fn return_type(&self) -> AttributeType;

    /// Incorporates a value entering the window and returns the updated
    /// statistic.
    ///
    /// Fails if the value's runtime type disagrees with the type the
    /// aggregator was configured for; a failed call leaves state intact.
    fn add(&mut self, value: AttributeValue) -> Result<f64, AggregateError>;

    /// Rejects multi-attribute input.
    ///
    /// This aggregator is defined over a single scalar attribute; an array
    /// of co-arriving values always fails.
    fn add_batch(&mut self, values: &[AttributeValue]) -> Result<f64, AggregateError>;

    /// Retires a value leaving the window and returns the statistic.
    ///
    /// Same type check as [`add`]. Which statistic is returned (cached or
    /// recomputed) is an implementation policy.
    fn remove(&mut self, value: AttributeValue) -> Result<f64, AggregateError>;

    /// Rejects multi-attribute input, mirroring [`add_batch`].
    fn remove_batch(&mut self, values: &[AttributeValue]) -> Result<f64, AggregateError>;

    /// Clears all accumulated state and returns 0.0.
    fn reset(&mut self) -> f64;
}
