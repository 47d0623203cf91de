mod attribute_type;
mod attribute_value;

pub use attribute_type::AttributeType;
pub use attribute_value::AttributeValue;
