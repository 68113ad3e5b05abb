//! Flattening and serialization of traversal results.

use std::io::{self, Write};

use crate::merge::MergeStore;
use crate::tile::TileRecord;

/// Concatenates every stored record sequence into one list.
///
/// Follows the store's insertion order. An empty store gives an empty list,
/// which serializes as `[]`.
pub fn flatten(store: MergeStore) -> Vec<TileRecord> {
    let mut out = Vec::with_capacity(store.record_count());
    for records in store.into_values() {
        out.extend(records);
    }
    out
}

/// Writes records as a JSON array followed by a newline.
pub fn write_records<W: Write>(mut writer: W, records: &[TileRecord], pretty: bool) -> io::Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut writer, records)?;
    } else {
        serde_json::to_writer(&mut writer, records)?;
    }
    writer.write_all(b"\n")?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::TileId;
    use serde_json::value::RawValue;

    fn record(json: &str) -> TileRecord {
        TileRecord::new(RawValue::from_string(json.to_string()).unwrap(), false)
    }

    #[test]
    fn test_flatten_concatenates_in_store_order() {
        let mut store = MergeStore::new();
        store.put(TileId::parse("B").unwrap(), vec![record("1"), record("2")]);
        store.put(TileId::parse("A").unwrap(), vec![record("3")]);

        let records = flatten(store);
        let out: Vec<&str> = records.iter().map(|r| r.body().get()).collect();
        assert_eq!(out, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_empty_store_writes_empty_array() {
        let records = flatten(MergeStore::new());

        let mut buf = Vec::new();
        write_records(&mut buf, &records, false).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "[]\n");
    }

    #[test]
    fn test_write_records_compact() {
        let records = vec![record(r#"{"id":"a"}"#), record(r#"{"id":"b","n":[1,2]}"#)];

        let mut buf = Vec::new();
        write_records(&mut buf, &records, false).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "[{\"id\":\"a\"},{\"id\":\"b\",\"n\":[1,2]}]\n"
        );
    }

    #[test]
    fn test_write_records_pretty_is_valid_json() {
        let records = vec![record(r#"{"id":"a"}"#)];

        let mut buf = Vec::new();
        write_records(&mut buf, &records, true).unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed, serde_json::json!([{"id": "a"}]));
    }
}
