//! Outage records carried by tile files.

use serde::{Serialize, Serializer};
use serde_json::value::RawValue;

/// One record from a tile file.
///
/// The body is kept as the exact JSON text the server sent; only the
/// `desc.cluster` flag is interpreted. A cluster record aggregates outages
/// for a region whose child tiles may hold more specific data.
#[derive(Debug, Clone)]
pub struct TileRecord {
    body: Box<RawValue>,
    cluster: bool,
}

impl TileRecord {
    /// Creates a record from its raw body and cluster flag.
    pub fn new(body: Box<RawValue>, cluster: bool) -> Self {
        Self { body, cluster }
    }

    /// Returns true if this record aggregates sub-tile data.
    #[inline]
    pub fn is_cluster(&self) -> bool {
        self.cluster
    }

    /// Returns the raw JSON body of the record.
    pub fn body(&self) -> &RawValue {
        &self.body
    }
}

impl Serialize for TileRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.body.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(json: &str) -> Box<RawValue> {
        RawValue::from_string(json.to_string()).unwrap()
    }

    #[test]
    fn test_serializes_body_verbatim() {
        let record = TileRecord::new(raw(r#"{"id":"x","desc":{"cluster":true},"n":1}"#), true);
        let out = serde_json::to_string(&record).unwrap();
        assert_eq!(out, r#"{"id":"x","desc":{"cluster":true},"n":1}"#);
    }

    #[test]
    fn test_cluster_flag() {
        assert!(TileRecord::new(raw("{}"), true).is_cluster());
        assert!(!TileRecord::new(raw("{}"), false).is_cluster());
    }
}
