///! Sequential orchestration of the three public-API calls.
///!
///! Public-IP discovery → IP geolocation → pass prediction.  Each step
///! consumes the previous step's output, so the calls are strictly
///! ordered and the first failure stops the run before the later
///! services are ever contacted.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;

use super::error::FetchError;
use super::locate;
use super::pass::{self, PassRecord};
use crate::config::{AppConfig, Endpoints};

/// One orchestration run's dependencies: a shared HTTP client plus the
/// three service endpoints.
pub struct FlyoverPipeline {
    client: Client,
    endpoints: Endpoints,
}

impl FlyoverPipeline {
    /// Build the pipeline from configuration.
    pub fn new(config: &AppConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            endpoints: config.endpoints.clone(),
        })
    }

    /// Determine the next ISS passes over the caller's current location.
    ///
    /// A failed step returns its error immediately; the raw geolocation
    /// and pass payloads are parsed here, at the stage boundary.
    pub async fn next_passes(&self) -> Result<Vec<PassRecord>, FetchError> {
        let ip = locate::fetch_my_ip(&self.client, &self.endpoints.ip_api).await?;
        tracing::debug!("Public IP: {}", ip);

        let raw = locate::fetch_coords_raw(&self.client, &self.endpoints.geo_api, &ip).await?;
        let coords = locate::parse_coordinates(&raw)?;
        tracing::debug!("Coordinates: {:.4}, {:.4}", coords.latitude, coords.longitude);

        let raw = pass::fetch_flyover_raw(&self.client, &self.endpoints.pass_api, &coords).await?;
        let passes = pass::parse_flyover_json(&raw)?;
        tracing::info!("Received {} upcoming passes", passes.len());

        Ok(passes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    const IP_BODY: &str = r#"{"ip":"162.245.144.188"}"#;
    const GEO_BODY: &str = r#"{"latitude": 40.7, "longitude": -74.0}"#;
    const PASS_BODY: &str = r#"{"response":[{"risetime":1579000000,"duration":600}]}"#;

    fn test_config(server: &MockServer) -> AppConfig {
        AppConfig {
            log_level: "info".to_string(),
            request_timeout_secs: 5,
            endpoints: Endpoints {
                ip_api: format!("{}/ip", server.base_url()),
                geo_api: format!("{}/json", server.base_url()),
                pass_api: format!("{}/iss-pass.json", server.base_url()),
            },
        }
    }

    #[tokio::test]
    async fn test_all_steps_succeed() {
        let server = MockServer::start();
        let ip_mock = server.mock(|when, then| {
            when.method(Method::GET).path("/ip");
            then.status(200).body(IP_BODY);
        });
        let geo_mock = server.mock(|when, then| {
            when.method(Method::GET).path("/json/162.245.144.188");
            then.status(200).body(GEO_BODY);
        });
        let pass_mock = server.mock(|when, then| {
            when.method(Method::GET)
                .path("/iss-pass.json")
                .query_param("lat", "40.7")
                .query_param("lon", "-74");
            then.status(200).body(PASS_BODY);
        });

        let pipeline = FlyoverPipeline::new(&test_config(&server)).unwrap();
        let passes = pipeline.next_passes().await.unwrap();

        assert_eq!(
            passes,
            vec![PassRecord {
                risetime: 1579000000,
                duration: 600
            }]
        );
        ip_mock.assert();
        geo_mock.assert();
        pass_mock.assert();
    }

    #[tokio::test]
    async fn test_ip_failure_short_circuits() {
        let server = MockServer::start();
        let _ip_mock = server.mock(|when, then| {
            when.method(Method::GET).path("/ip");
            then.status(500).body("ip service down");
        });
        let geo_mock = server.mock(|when, then| {
            when.method(Method::GET).path("/json/162.245.144.188");
            then.status(200).body(GEO_BODY);
        });
        let pass_mock = server.mock(|when, then| {
            when.method(Method::GET).path("/iss-pass.json");
            then.status(200).body(PASS_BODY);
        });

        let pipeline = FlyoverPipeline::new(&test_config(&server)).unwrap();
        let err = pipeline.next_passes().await.unwrap_err();

        assert!(matches!(err, FetchError::BadStatus { .. }));
        assert!(err.to_string().contains("ip service down"));
        // The later services were never contacted
        assert_eq!(geo_mock.calls(), 0);
        assert_eq!(pass_mock.calls(), 0);
    }

    #[tokio::test]
    async fn test_ip_transport_failure_short_circuits() {
        let server = MockServer::start();
        let geo_mock = server.mock(|when, then| {
            when.method(Method::GET).path("/json/162.245.144.188");
            then.status(200).body(GEO_BODY);
        });

        let mut config = test_config(&server);
        config.endpoints.ip_api = "http://127.0.0.1:9/ip".to_string();

        let pipeline = FlyoverPipeline::new(&config).unwrap();
        let err = pipeline.next_passes().await.unwrap_err();

        assert!(matches!(err, FetchError::Transport { .. }));
        assert_eq!(geo_mock.calls(), 0);
    }

    #[tokio::test]
    async fn test_flyover_failure_is_reported() {
        // A failed flyover lookup must reach the caller, not vanish
        let server = MockServer::start();
        let ip_mock = server.mock(|when, then| {
            when.method(Method::GET).path("/ip");
            then.status(200).body(IP_BODY);
        });
        let geo_mock = server.mock(|when, then| {
            when.method(Method::GET).path("/json/162.245.144.188");
            then.status(200).body(GEO_BODY);
        });
        let _pass_mock = server.mock(|when, then| {
            when.method(Method::GET).path("/iss-pass.json");
            then.status(503).body("no predictions available");
        });

        let pipeline = FlyoverPipeline::new(&test_config(&server)).unwrap();
        let err = pipeline.next_passes().await.unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("503"), "message was: {}", msg);
        assert!(msg.contains("no predictions available"), "message was: {}", msg);
        assert_eq!(ip_mock.calls(), 1);
        assert_eq!(geo_mock.calls(), 1);
    }

    #[tokio::test]
    async fn test_malformed_geo_body_stops_before_flyover() {
        let server = MockServer::start();
        let _ip_mock = server.mock(|when, then| {
            when.method(Method::GET).path("/ip");
            then.status(200).body(IP_BODY);
        });
        let _geo_mock = server.mock(|when, then| {
            when.method(Method::GET).path("/json/162.245.144.188");
            then.status(200).body("<html>maintenance</html>");
        });
        let pass_mock = server.mock(|when, then| {
            when.method(Method::GET).path("/iss-pass.json");
            then.status(200).body(PASS_BODY);
        });

        let pipeline = FlyoverPipeline::new(&test_config(&server)).unwrap();
        let err = pipeline.next_passes().await.unwrap_err();

        assert!(matches!(err, FetchError::Parse { .. }));
        assert!(err.to_string().contains("coordinates"));
        assert_eq!(pass_mock.calls(), 0);
    }

    #[tokio::test]
    async fn test_repeated_runs_are_identical() {
        let server = MockServer::start();
        let ip_mock = server.mock(|when, then| {
            when.method(Method::GET).path("/ip");
            then.status(200).body(IP_BODY);
        });
        let _geo_mock = server.mock(|when, then| {
            when.method(Method::GET).path("/json/162.245.144.188");
            then.status(200).body(GEO_BODY);
        });
        let _pass_mock = server.mock(|when, then| {
            when.method(Method::GET).path("/iss-pass.json");
            then.status(200).body(PASS_BODY);
        });

        let pipeline = FlyoverPipeline::new(&test_config(&server)).unwrap();
        let first = pipeline.next_passes().await.unwrap();
        let second = pipeline.next_passes().await.unwrap();

        assert_eq!(first, second);
        assert_eq!(ip_mock.calls(), 2);
    }
}
