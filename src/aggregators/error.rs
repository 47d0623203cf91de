use crate::core::attributes::AttributeType;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AggregateError {
    #[error("median aggregator has to have exactly 1 parameter, currently {0} parameters provided")]
    WrongParameterCount(usize),

    #[error("median is not supported for {0} attributes")]
    UnsupportedType(AttributeType),

    #[error("expected a {expected} value, got {actual}")]
    TypeMismatch {
        expected: AttributeType,
        actual: AttributeType,
    },

    #[error("median cannot process an array of {0} values")]
    ArrayInput(usize),
}
