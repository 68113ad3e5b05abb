//! Tile file envelope decoding.
//!
//! A tile file looks like:
//!
//! ```text
//! { "file_data": [ { "desc": { "cluster": true, ... }, ... }, ... ] }
//! ```
//!
//! Only `desc.cluster` is read from each record; the record itself is kept
//! as raw JSON.

use serde::Deserialize;
use serde_json::value::RawValue;

use crate::tile::TileRecord;

#[derive(Deserialize)]
struct RawTileFile {
    #[serde(default, alias = "File_data", alias = "FILE_DATA")]
    file_data: Vec<Box<RawValue>>,
}

#[derive(Deserialize)]
struct RecordHeader {
    #[serde(default, alias = "Desc")]
    desc: Option<RecordDesc>,
}

#[derive(Deserialize)]
struct RecordDesc {
    #[serde(default, alias = "Cluster")]
    cluster: bool,
}

/// Decodes a tile file body into its records.
///
/// Record order is preserved. Returns the serde error message on failure.
pub fn decode_tile_file(body: &[u8]) -> Result<Vec<TileRecord>, String> {
    let raw: RawTileFile = serde_json::from_slice(body).map_err(|e| e.to_string())?;

    raw.file_data
        .into_iter()
        .enumerate()
        .map(|(index, body)| {
            let header: RecordHeader = serde_json::from_str(body.get())
                .map_err(|e| format!("record {}: {}", index, e))?;
            let cluster = header.desc.is_some_and(|d| d.cluster);
            Ok(TileRecord::new(body, cluster))
        })
        .collect()
}
