//! HTTP geolocation provider client.

use std::net::IpAddr;
use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};

use super::Geolocator;
use crate::error_handling::{categorize_geolocation_error, ErrorType, ProcessingStats};
use crate::models::Geolocation;

/// Looks addresses up with `GET <endpoint><ip>` and decodes the JSON body.
pub struct HttpGeolocator {
    client: Arc<reqwest::Client>,
    endpoint: String,
    stats: Arc<ProcessingStats>,
}

impl HttpGeolocator {
    /// Creates a geolocator for an endpoint prefix such as `https://freegeoip.app/json/`.
    pub fn new(
        client: Arc<reqwest::Client>,
        endpoint: String,
        stats: Arc<ProcessingStats>,
    ) -> Self {
        Self {
            client,
            endpoint,
            stats,
        }
    }

    /// The lookup URL for `ip`.
    pub fn lookup_url(&self, ip: IpAddr) -> String {
        format!("{}{}", self.endpoint, ip)
    }

    async fn fetch_body(&self, url: &str) -> Result<String, reqwest::Error> {
        self.client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await
    }
}

#[async_trait]
impl Geolocator for HttpGeolocator {
    async fn locate(&self, ip: IpAddr) -> Option<Geolocation> {
        let url = self.lookup_url(ip);

        let body = match self.fetch_body(&url).await {
            Ok(body) => body,
            Err(e) => {
                self.stats.increment_error(categorize_geolocation_error(&e));
                warn!("Geolocation request for {ip} failed: {e}");
                return None;
            }
        };

        match serde_json::from_str::<Geolocation>(&body) {
            Ok(location) => {
                debug!(
                    "Located {ip} in {} ({})",
                    location.country_name, location.country_code
                );
                Some(location)
            }
            Err(e) => {
                self.stats.increment_error(ErrorType::GeolocationDecodeError);
                warn!("Failed to decode geolocation for {ip}: {e}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httptest::{matchers::*, responders::*, Expectation, Server};

    use crate::config::DEFAULT_USER_AGENT;

    fn geolocator(server: &Server, stats: Arc<ProcessingStats>) -> HttpGeolocator {
        let client = reqwest::Client::builder()
            .user_agent(DEFAULT_USER_AGENT)
            .timeout(std::time::Duration::from_secs(5))
            .build()
            .unwrap();
        HttpGeolocator::new(Arc::new(client), server.url_str("/json/"), stats)
    }

    #[test]
    fn test_lookup_url_appends_ip() {
        let geolocator = HttpGeolocator::new(
            Arc::new(reqwest::Client::new()),
            "https://freegeoip.app/json/".to_string(),
            Arc::new(ProcessingStats::new()),
        );
        assert_eq!(
            geolocator.lookup_url("93.184.216.34".parse().unwrap()),
            "https://freegeoip.app/json/93.184.216.34"
        );
    }

    #[tokio::test]
    async fn test_locate_decodes_provider_response() {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/json/93.184.216.34"),
                request::headers(contains(("user-agent", DEFAULT_USER_AGENT))),
            ])
            .respond_with(json_encoded(serde_json::json!({
                "ip": "93.184.216.34",
                "country_code": "US",
                "country_name": "United States",
                "region_code": "MA",
                "region_name": "Massachusetts",
                "city": "Norwell",
                "zip_code": "02061",
                "time_zone": "America/New_York",
                "latitude": 42.1508,
                "longitude": -70.8228,
                "metro_code": 506
            }))),
        );
        let stats = Arc::new(ProcessingStats::new());

        let location = geolocator(&server, Arc::clone(&stats))
            .locate("93.184.216.34".parse().unwrap())
            .await
            .expect("location should decode");

        assert_eq!(location.country_code, "US");
        assert_eq!(location.city, "Norwell");
        assert_eq!(location.metro_code, 506);
        assert_eq!(stats.total_errors(), 0);
    }

    #[tokio::test]
    async fn test_locate_malformed_body_is_absent() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/json/10.0.0.1"))
                .respond_with(status_code(200).body("<html>rate limited</html>")),
        );
        let stats = Arc::new(ProcessingStats::new());

        let location = geolocator(&server, Arc::clone(&stats))
            .locate("10.0.0.1".parse().unwrap())
            .await;

        assert!(location.is_none());
        assert_eq!(stats.get_error_count(ErrorType::GeolocationDecodeError), 1);
    }

    #[tokio::test]
    async fn test_locate_error_status_is_absent() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/json/10.0.0.2"))
                .respond_with(status_code(503)),
        );
        let stats = Arc::new(ProcessingStats::new());

        let location = geolocator(&server, Arc::clone(&stats))
            .locate("10.0.0.2".parse().unwrap())
            .await;

        assert!(location.is_none());
        assert_eq!(stats.get_error_count(ErrorType::GeolocationStatusError), 1);
    }

    #[tokio::test]
    async fn test_locate_error_status_ignores_json_body() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/json/10.0.0.3")).respond_with(
                status_code(429)
                    .insert_header("content-type", "application/json")
                    .body(r#"{"message": "quota exceeded"}"#),
            ),
        );
        let stats = Arc::new(ProcessingStats::new());

        let location = geolocator(&server, Arc::clone(&stats))
            .locate("10.0.0.3".parse().unwrap())
            .await;

        assert!(location.is_none());
        assert_eq!(stats.get_error_count(ErrorType::GeolocationStatusError), 1);
        assert_eq!(stats.get_error_count(ErrorType::GeolocationDecodeError), 0);
    }

    #[tokio::test]
    async fn test_locate_unreachable_provider_is_absent() {
        let stats = Arc::new(ProcessingStats::new());
        let geolocator = HttpGeolocator::new(
            Arc::new(reqwest::Client::new()),
            "http://127.0.0.1:9/json/".to_string(),
            Arc::clone(&stats),
        );

        let location = geolocator.locate("10.0.0.3".parse().unwrap()).await;

        assert!(location.is_none());
        assert_eq!(stats.total_errors(), 1);
    }
}
