use crate::aggregators::{AggregateError, AttributeAggregator};
use crate::core::attributes::AttributeValue;
use std::collections::VecDeque;

/// Scripted sliding length-window driver for tests.
///
/// Replays the host engine's contract against an aggregator: once the
/// window holds `size` values, each incoming value first retires the
/// oldest one via `remove`, then enters via `add`. The reported median is
/// the one returned by `add`.
pub struct LengthWindow {
    size: usize,
    buffer: VecDeque<AttributeValue>,
}

impl LengthWindow {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            buffer: VecDeque::with_capacity(size),
        }
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Slides the window by one event and returns the updated median.
    pub fn process<A: AttributeAggregator>(
        &mut self,
        aggregator: &mut A,
        value: AttributeValue,
    ) -> Result<f64, AggregateError> {
        if self.buffer.len() == self.size {
            if let Some(expired) = self.buffer.pop_front() {
                aggregator.remove(expired)?;
            }
        }
        self.buffer.push_back(value);
        aggregator.add(value)
    }
}
