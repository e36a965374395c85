// JSON payload parsing for the csv2json endpoint.
//
// Expected shape: `[ { "data": [ { "PLAYER": .., "POS": .., "OPS": .. }, .. ] } ]`.
// Anything short of that outer shape is `MalformedData`. Individual rows that
// cannot be read, or lack a name or position, are skipped with a warning;
// the rest still load.

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use opsboard_core::{LoadError, PlayerRecord};

use super::row_record;

/// One spreadsheet row. Extra columns are ignored.
#[derive(Debug, Deserialize)]
#[allow(non_snake_case)]
struct RawRow {
    #[serde(default)]
    PLAYER: String,
    #[serde(default)]
    POS: String,
    #[serde(default)]
    OPS: Option<Value>,
}

/// Parse a response body into player records.
///
/// A body that is not JSON at all is a fetch failure, the same as a broken
/// transfer. Valid JSON without the record collection is malformed data.
pub fn parse_payload(body: &str) -> Result<Vec<PlayerRecord>, LoadError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| LoadError::fetch(format!("response body is not JSON: {e}")))?;
    records_from_value(&value)
}

/// Extract records from an already-decoded payload.
pub fn records_from_value(value: &Value) -> Result<Vec<PlayerRecord>, LoadError> {
    let outer = value
        .as_array()
        .ok_or_else(|| LoadError::malformed("expected a JSON array at the top level"))?;
    let first = outer
        .first()
        .ok_or_else(|| LoadError::malformed("top-level array is empty"))?;
    let rows = first
        .get("data")
        .and_then(Value::as_array)
        .ok_or_else(|| LoadError::malformed("first element has no `data` array"))?;

    let mut records = Vec::with_capacity(rows.len());
    for (idx, row) in rows.iter().enumerate() {
        match RawRow::deserialize(row) {
            Ok(raw) => records.extend(row_record(
                idx,
                &raw.PLAYER,
                &raw.POS,
                ops_cell_text(raw.OPS.as_ref()),
            )),
            Err(e) => warn!("skipping malformed row {}: {}", idx, e),
        }
    }
    Ok(records)
}

/// OPS usually arrives as text ("0.900"), occasionally as a bare number.
fn ops_cell_text(cell: Option<&Value>) -> String {
    match cell {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}
