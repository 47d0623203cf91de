use crate::core::attributes::AttributeType;
use std::fmt::{Display, Formatter, Result};

/// Runtime-typed scalar carried by a single stream event.
///
/// Equality is derived, so float variants compare bitwise. Equality-based
/// removal from a window relies on this: the value that leaves the window
/// is the same value that entered it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttributeValue {
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
}

impl AttributeValue {
    /// The declared type this value belongs to.
    #[inline]
    pub fn attribute_type(&self) -> AttributeType {
        match self {
            AttributeValue::Int(_) => AttributeType::Int,
            AttributeValue::Long(_) => AttributeType::Long,
            AttributeValue::Float(_) => AttributeType::Float,
            AttributeValue::Double(_) => AttributeType::Double,
        }
    }
}

impl From<i32> for AttributeValue {
    fn from(v: i32) -> Self {
        AttributeValue::Int(v)
    }
}

impl From<i64> for AttributeValue {
    fn from(v: i64) -> Self {
        AttributeValue::Long(v)
    }
}

impl From<f32> for AttributeValue {
    fn from(v: f32) -> Self {
        AttributeValue::Float(v)
    }
}

impl From<f64> for AttributeValue {
    fn from(v: f64) -> Self {
        AttributeValue::Double(v)
    }
}

impl Display for AttributeValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            AttributeValue::Int(v) => write!(f, "{v}"),
            AttributeValue::Long(v) => write!(f, "{v}"),
            AttributeValue::Float(v) => write!(f, "{v}"),
            AttributeValue::Double(v) => write!(f, "{v}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_matching_attribute_type() {
        assert_eq!(AttributeValue::from(1i32).attribute_type(), AttributeType::Int);
        assert_eq!(AttributeValue::from(1i64).attribute_type(), AttributeType::Long);
        assert_eq!(AttributeValue::from(1.0f32).attribute_type(), AttributeType::Float);
        assert_eq!(AttributeValue::from(1.0f64).attribute_type(), AttributeType::Double);
    }

    #[test]
    fn same_typed_values_compare_equal() {
        assert_eq!(AttributeValue::Double(8.94775), AttributeValue::Double(8.94775));
        assert_ne!(AttributeValue::Int(1), AttributeValue::Long(1));
    }
}
