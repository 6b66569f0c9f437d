///! Clients for the public-IP and IP-geolocation services.

use reqwest::Client;
use serde::Deserialize;

use crate::module::error::FetchError;

/// JSON body returned by the public-IP service
#[derive(Debug, Deserialize)]
struct IpResponse {
    ip: String,
}

/// Fetch the caller's public IP address.
///
/// # Returns
/// The address as a string on success, e.g. "162.245.144.188"
pub async fn fetch_my_ip(client: &Client, api_url: &str) -> Result<String, FetchError> {
    const WHAT: &str = "IP address";

    let body = get_text(client, api_url, WHAT).await?;

    let parsed: IpResponse = serde_json::from_str(&body).map_err(|e| FetchError::Parse {
        what: WHAT,
        source: e,
    })?;

    Ok(parsed.ip)
}

/// Fetch the geolocation record for `ip`.
///
/// Returns the raw JSON body on success; extracting the coordinates is
/// the caller's job (see [`super::parser::parse_coordinates`]).
pub async fn fetch_coords_raw(
    client: &Client,
    api_url: &str,
    ip: &str,
) -> Result<String, FetchError> {
    let url = format!("{}/{}", api_url.trim_end_matches('/'), ip);
    get_text(client, &url, "coordinates for IP").await
}

/// GET `url` and return the body text, mapping transport failures and
/// non-success status codes onto [`FetchError`].
async fn get_text(client: &Client, url: &str, what: &'static str) -> Result<String, FetchError> {
    tracing::debug!("Fetching {} from {}", what, url);

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| FetchError::Transport { what, source: e })?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| FetchError::Transport { what, source: e })?;

    if !status.is_success() {
        return Err(FetchError::BadStatus { what, status, body });
    }

    Ok(body)
}
