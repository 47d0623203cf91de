use crate::aggregators::median::{MedianSnapshot, MedianStrategy, RemovalPolicy};
use crate::aggregators::{AggregateError, AttributeAggregator};
use crate::core::attributes::{AttributeType, AttributeValue};

/// One strategy instantiation per supported element width, fixed at
/// construction. Dispatch after that point is a plain exhaustive match.
#[derive(Debug, Clone, PartialEq)]
enum TypedStrategy {
    Int(MedianStrategy<i32>),
    Long(MedianStrategy<i64>),
    Float(MedianStrategy<f32>),
    Double(MedianStrategy<f64>),
}

/// Incremental median over the values an external window currently holds.
///
/// Configured once with the declared type of its single input attribute;
/// every later call routes to the strategy instantiated for that type.
/// The median is always reported as an `f64`, whatever the element type.
///
/// ```
/// use rollmed::aggregators::AttributeAggregator;
/// use rollmed::aggregators::median::MedianAggregator;
/// use rollmed::core::attributes::AttributeType;
///
/// let mut median = MedianAggregator::new(&[AttributeType::Int]).unwrap();
/// median.add(1.into()).unwrap();
/// median.add(2.into()).unwrap();
/// assert_eq!(median.add(3.into()).unwrap(), 2.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MedianAggregator {
    strategy: TypedStrategy,
    element_type: AttributeType,
}

impl MedianAggregator {
    /// Configures an aggregator for exactly one declared attribute type.
    ///
    /// Fails when given zero or several descriptors, or a non-numeric
    /// type. Uses the legacy [`RemovalPolicy::CachedMedian`].
    pub fn new(params: &[AttributeType]) -> Result<Self, AggregateError> {
        Self::with_policy(params, RemovalPolicy::default())
    }

    /// Same as [`new`], with an explicit removal policy.
    ///
    /// [`new`]: MedianAggregator::new
    pub fn with_policy(
        params: &[AttributeType],
        policy: RemovalPolicy,
    ) -> Result<Self, AggregateError> {
        let [element_type] = params else {
            return Err(AggregateError::WrongParameterCount(params.len()));
        };

        let strategy = match element_type {
            AttributeType::Int => TypedStrategy::Int(MedianStrategy::new(policy)),
            AttributeType::Long => TypedStrategy::Long(MedianStrategy::new(policy)),
            AttributeType::Float => TypedStrategy::Float(MedianStrategy::new(policy)),
            AttributeType::Double => TypedStrategy::Double(MedianStrategy::new(policy)),
            AttributeType::String | AttributeType::Bool | AttributeType::Object => {
                return Err(AggregateError::UnsupportedType(*element_type));
            }
        };

        Ok(Self {
            strategy,
            element_type: *element_type,
        })
    }

    /// The declared type of the input attribute.
    #[inline]
    pub fn element_type(&self) -> AttributeType {
        self.element_type
    }

    /// Logical element counter, including any restored baseline.
    pub fn count(&self) -> i64 {
        match &self.strategy {
            TypedStrategy::Int(s) => s.count(),
            TypedStrategy::Long(s) => s.count(),
            TypedStrategy::Float(s) => s.count(),
            TypedStrategy::Double(s) => s.count(),
        }
    }

    /// Median cached by the most recent recomputation.
    pub fn current_median(&self) -> f64 {
        match &self.strategy {
            TypedStrategy::Int(s) => s.current_median(),
            TypedStrategy::Long(s) => s.current_median(),
            TypedStrategy::Float(s) => s.current_median(),
            TypedStrategy::Double(s) => s.current_median(),
        }
    }

    /// Extracts the checkpoint record: the cached median and the counter.
    pub fn snapshot(&self) -> MedianSnapshot {
        match &self.strategy {
            TypedStrategy::Int(s) => s.snapshot(),
            TypedStrategy::Long(s) => s.snapshot(),
            TypedStrategy::Float(s) => s.snapshot(),
            TypedStrategy::Double(s) => s.snapshot(),
        }
    }

    /// Reinstates a checkpoint record.
    ///
    /// Only the median and the counter are checkpointed; the element
    /// multiset is not repopulated, so medians computed after a restore
    /// reflect only the values added since.
    pub fn restore(&mut self, state: &MedianSnapshot) {
        match &mut self.strategy {
            TypedStrategy::Int(s) => s.restore(state),
            TypedStrategy::Long(s) => s.restore(state),
            TypedStrategy::Float(s) => s.restore(state),
            TypedStrategy::Double(s) => s.restore(state),
        }
    }

    fn type_mismatch(&self, value: AttributeValue) -> AggregateError {
        AggregateError::TypeMismatch {
            expected: self.element_type,
            actual: value.attribute_type(),
        }
    }
}

impl AttributeAggregator for MedianAggregator {
    fn return_type(&self) -> AttributeType {
        AttributeType::Double
    }

    fn add(&mut self, value: AttributeValue) -> Result<f64, AggregateError> {
        match (&mut self.strategy, value) {
            (TypedStrategy::Int(s), AttributeValue::Int(v)) => Ok(s.add(v)),
            (TypedStrategy::Long(s), AttributeValue::Long(v)) => Ok(s.add(v)),
            (TypedStrategy::Float(s), AttributeValue::Float(v)) => Ok(s.add(v)),
            (TypedStrategy::Double(s), AttributeValue::Double(v)) => Ok(s.add(v)),
            _ => Err(self.type_mismatch(value)),
        }
    }

    fn add_batch(&mut self, values: &[AttributeValue]) -> Result<f64, AggregateError> {
        Err(AggregateError::ArrayInput(values.len()))
    }

    fn remove(&mut self, value: AttributeValue) -> Result<f64, AggregateError> {
        match (&mut self.strategy, value) {
            (TypedStrategy::Int(s), AttributeValue::Int(v)) => Ok(s.remove(v)),
            (TypedStrategy::Long(s), AttributeValue::Long(v)) => Ok(s.remove(v)),
            (TypedStrategy::Float(s), AttributeValue::Float(v)) => Ok(s.remove(v)),
            (TypedStrategy::Double(s), AttributeValue::Double(v)) => Ok(s.remove(v)),
            _ => Err(self.type_mismatch(value)),
        }
    }

    fn remove_batch(&mut self, values: &[AttributeValue]) -> Result<f64, AggregateError> {
        Err(AggregateError::ArrayInput(values.len()))
    }

    fn reset(&mut self) -> f64 {
        match &mut self.strategy {
            TypedStrategy::Int(s) => s.reset(),
            TypedStrategy::Long(s) => s.reset(),
            TypedStrategy::Float(s) => s.reset(),
            TypedStrategy::Double(s) => s.reset(),
        }
    }
}
