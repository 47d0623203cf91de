use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Declared type of a stream attribute, fixed by the query definition.
///
/// Aggregators receive exactly one of these at construction time and bind
/// to it for their whole lifetime. Numeric aggregators accept only the
/// four numeric variants and must reject the rest during configuration.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AttributeType {
    Int,
    Long,
    Float,
    Double,
    String,
    Bool,
    Object,
}

impl AttributeType {
    /// Whether values of this type can feed a numeric aggregator.
    #[inline]
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            AttributeType::Int | AttributeType::Long | AttributeType::Float | AttributeType::Double
        )
    }
}
