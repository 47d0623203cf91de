/// What `remove` reports after retiring a value.
///
/// The legacy engine returned the median cached by the last `add`, which
/// is stale relative to the post-removal window. `CachedMedian` keeps that
/// behavior for compatibility; `Recompute` reports the median of the
/// values actually remaining.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RemovalPolicy {
    #[default]
    CachedMedian,
    Recompute,
}
