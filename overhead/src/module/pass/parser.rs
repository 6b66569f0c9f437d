///! Pass-list extraction from the raw pass-prediction payload.

use serde::Deserialize;

use super::types::PassRecord;
use crate::module::error::FetchError;

/// Wrapper for the JSON response; the pass list lives under `response`
#[derive(Debug, Deserialize)]
struct FlyoverResponse {
    response: Vec<PassRecord>,
}

/// Parse the raw pass-prediction JSON into the list of [`PassRecord`]s.
///
/// Upstream order is kept as-is, it is never re-sorted here.
pub fn parse_flyover_json(raw: &str) -> Result<Vec<PassRecord>, FetchError> {
    let parsed: FlyoverResponse = serde_json::from_str(raw).map_err(|e| FetchError::Parse {
        what: "flyover times",
        source: e,
    })?;
    Ok(parsed.response)
}
