///! Client for the ISS pass-prediction service.

use reqwest::Client;

use crate::module::error::FetchError;
use crate::module::locate::Coordinates;

/// Fetch upcoming ISS fly-over times for the given coordinates.
///
/// Returns the raw JSON body on success; extracting the pass list is
/// the caller's job (see [`super::parser::parse_flyover_json`]).
pub async fn fetch_flyover_raw(
    client: &Client,
    api_url: &str,
    coords: &Coordinates,
) -> Result<String, FetchError> {
    const WHAT: &str = "flyover times";

    let url = format!("{}?lat={}&lon={}", api_url, coords.latitude, coords.longitude);
    tracing::debug!("Fetching {} from {}", WHAT, url);

    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| FetchError::Transport { what: WHAT, source: e })?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| FetchError::Transport { what: WHAT, source: e })?;

    if !status.is_success() {
        return Err(FetchError::BadStatus { what: WHAT, status, body });
    }

    Ok(body)
}
