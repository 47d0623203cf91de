use crate::aggregators::median::{MedianSnapshot, RemovalPolicy};
use log::warn;
use std::cmp::Ordering;

/// Element type a [`MedianStrategy`] can aggregate.
///
/// `widen` converts to the `f64` the median is reported in. Widening is
/// exact for i32, f32 and f64; i64 values beyond 2^53 lose precision,
/// which matches the legacy engine's double-typed output.
pub trait MedianElement: Copy + PartialEq + PartialOrd {
    fn widen(self) -> f64;
}

impl MedianElement for i32 {
    #[inline]
    fn widen(self) -> f64 {
        f64::from(self)
    }
}

impl MedianElement for i64 {
    #[inline]
    fn widen(self) -> f64 {
        self as f64
    }
}

impl MedianElement for f32 {
    #[inline]
    fn widen(self) -> f64 {
        f64::from(self)
    }
}

impl MedianElement for f64 {
    #[inline]
    fn widen(self) -> f64 {
        self
    }
}

/// Median accumulator over the values currently inside an external window.
///
/// `add` re-sorts the whole collection and recomputes; `remove` retires
/// one occurrence and, under [`RemovalPolicy::CachedMedian`], reports the
/// median cached by the previous `add`. `count` is the logical element
/// counter and equals `values.len()` except after a partial restore, where
/// it carries the checkpointed baseline while the window refills.
#[derive(Debug, Clone, PartialEq)]
pub struct MedianStrategy<T> {
    values: Vec<T>,
    count: i64,
    current_median: f64,
    policy: RemovalPolicy,
    warned_empty: bool,
}

impl<T: MedianElement> MedianStrategy<T> {
    pub fn new(policy: RemovalPolicy) -> Self {
        Self {
            values: Vec::new(),
            count: 0,
            current_median: 0.0,
            policy,
            warned_empty: false,
        }
    }

    /// Inserts `v` and returns the recomputed median.
    pub fn add(&mut self, v: T) -> f64 {
        self.values.push(v);
        self.count += 1;
        self.current_median = self.compute_median();
        self.current_median
    }

    /// Retires one occurrence equal to `v`, if present.
    ///
    /// The counter decrements even when no occurrence matched, clamped at
    /// zero. The returned median follows the configured [`RemovalPolicy`].
    pub fn remove(&mut self, v: T) -> f64 {
        if let Some(pos) = self.values.iter().position(|x| *x == v) {
            self.values.remove(pos);
        }
        self.count = (self.count - 1).max(0);
        if self.policy == RemovalPolicy::Recompute {
            self.current_median = self.compute_median();
        }
        self.current_median
    }

    pub fn reset(&mut self) -> f64 {
        self.values.clear();
        self.count = 0;
        self.current_median = 0.0;
        0.0
    }

    pub fn snapshot(&self) -> MedianSnapshot {
        MedianSnapshot {
            median: self.current_median,
            count: self.count,
            version: 0,
        }
    }

    /// Reinstates the checkpointed median and counter.
    ///
    /// The element multiset is not part of the checkpoint, so `values`
    /// is left as-is; medians computed after a restore reflect only the
    /// elements actually present.
    pub fn restore(&mut self, state: &MedianSnapshot) {
        self.current_median = state.median;
        self.count = state.count;
    }

    #[inline]
    pub fn count(&self) -> i64 {
        self.count
    }

    #[inline]
    pub fn current_median(&self) -> f64 {
        self.current_median
    }

    /// Full re-sort median, indexed by the elements actually present.
    ///
    /// Even count averages the two middle elements after widening, odd
    /// count widens the middle element. An empty window yields 0.0 and a
    /// one-shot warning; it occurs transiently at window start-up and is
    /// not an error.
    fn compute_median(&mut self) -> f64 {
        let n = self.values.len();
        if n == 0 {
            if !self.warned_empty {
                warn!("median requested over an empty window, reporting 0.0");
                self.warned_empty = true;
            }
            return 0.0;
        }

        self.values
            .sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

        let mid = n / 2;
        if n % 2 == 0 {
            (self.values[mid].widen() + self.values[mid - 1].widen()) / 2.0
        } else {
            self.values[mid].widen()
        }
    }
}
