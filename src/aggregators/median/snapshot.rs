use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Checkpoint record for a median aggregator.
///
/// The version-0 wire shape is a mapping with exactly two fields,
/// `"Median"` and `"Count"`, matching the legacy engine's persisted state.
/// `version` is omitted from the serialized form while it is 0, so V0
/// records stay byte-compatible; a legacy record deserializes with
/// `version == 0`.
///
/// The element multiset is not part of the record, so a restored
/// aggregator starts from an empty window. See [`MedianAggregator::restore`]
/// for the consequences.
///
/// [`MedianAggregator::restore`]: crate::aggregators::median::MedianAggregator::restore
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MedianSnapshot {
    #[serde(rename = "Median")]
    pub median: f64,

    #[serde(rename = "Count")]
    pub count: i64,

    #[serde(rename = "Version", default, skip_serializing_if = "is_v0")]
    pub version: u32,
}

fn is_v0(version: &u32) -> bool {
    *version == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn v0_serializes_to_exactly_two_fields() {
        let snapshot = MedianSnapshot {
            median: 8.68211,
            count: 5,
            version: 0,
        };
        let value = serde_json::to_value(snapshot).unwrap();
        assert_eq!(value, json!({ "Median": 8.68211, "Count": 5 }));
    }

    #[test]
    fn legacy_two_field_record_deserializes_as_v0() {
        let raw = r#"{ "Median": 2.5, "Count": 4 }"#;
        let snapshot: MedianSnapshot = serde_json::from_str(raw).unwrap();
        assert_eq!(snapshot.median, 2.5);
        assert_eq!(snapshot.count, 4);
        assert_eq!(snapshot.version, 0);
    }

    #[test]
    fn versioned_record_round_trips() {
        let snapshot = MedianSnapshot {
            median: 1.0,
            count: 1,
            version: 1,
        };
        let raw = serde_json::to_string(&snapshot).unwrap();
        let back: MedianSnapshot = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, snapshot);
        assert!(raw.contains("\"Version\""));
    }
}
