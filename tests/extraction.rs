//! End-to-end extraction through the public API, with in-process collaborators.

mod helpers;

use std::sync::atomic::Ordering;

use helpers::Scenario;
use url_features::error_handling::InfoType;
use url_features::ExtractError;

#[tokio::test]
async fn test_extract_example_com() {
    let (extractor, _, stats) = Scenario::example_com().build();
    let features = extractor.extract_str("example.com").await.unwrap();

    assert_eq!(features.full_url, "example.com");
    assert_eq!(features.hostname, "example.com");
    assert_eq!(features.length, 11);
    assert_eq!(features.num_links, 10);
    assert!((features.google_score - 10.0 / 251.0).abs() < 1e-9);
    assert!((features.google_score - 0.0398).abs() < 1e-4);
    assert!(features.is_https);

    let ips: Vec<String> = features
        .ipv4
        .iter()
        .map(|entry| entry.ip.unwrap().to_string())
        .collect();
    assert_eq!(ips, ["93.184.216.34", "93.184.216.35"]);
    assert_eq!(features.ipv4[0].ttl, 3600);
    assert_eq!(
        features.ipv4[1].geolocation.as_ref().unwrap().country_code,
        "NL"
    );

    assert_eq!(features.mx_ips.len(), 1);
    assert_eq!(features.mx_ips[0].name, "mail.example.com.");
    assert_eq!(features.mx_ips[0].ip_features.ttl, 300);
    assert_eq!(stats.extractions(), 1);
}

#[tokio::test]
async fn test_submitted_string_is_kept_verbatim() {
    let (extractor, _, _) = Scenario::example_com().build();
    let features = extractor
        .extract_str("http://example.com/a?b=1")
        .await
        .unwrap();
    assert_eq!(features.full_url, "http://example.com/a?b=1");
    assert_eq!(features.length, "http://example.com/a?b=1".len());
    assert_eq!(features.hostname, "example.com");
}

#[tokio::test]
async fn test_hostname_comes_from_input_not_links() {
    let scenario = Scenario {
        links: vec![
            "https://cdn.other.net/a".to_string(),
            "https://static.elsewhere.org/b".to_string(),
            "http://mirror.third.io/c".to_string(),
        ],
        ..Scenario::example_com()
    };
    let (extractor, _, _) = scenario.build();
    let features = extractor.extract_str("www.example.com").await.unwrap();

    assert_eq!(features.hostname, "www.example.com");
    assert!(!features.is_https);
    assert_eq!(features.num_links, 3);
    assert!((features.google_score - 3.0 / 251.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_url_without_host_makes_no_outbound_calls() {
    let (extractor, calls, stats) = Scenario::example_com().build();

    let err = extractor.extract_str("http://").await.unwrap_err();
    assert!(matches!(err, ExtractError::InvalidUrl { .. }));

    assert!(extractor.extract_str("").await.is_err());
    assert!(extractor.extract_str("http://exa mple.com").await.is_err());

    assert_eq!(calls.total(), 0);
    assert_eq!(stats.extractions(), 0);
}

#[tokio::test]
async fn test_extraction_is_idempotent() {
    let (extractor, _, _) = Scenario::example_com().build();
    let first = extractor.extract_str("example.com").await.unwrap();
    let second = extractor.extract_str("example.com").await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_no_links_still_resolves_and_geolocates() {
    let scenario = Scenario {
        links: Vec::new(),
        ..Scenario::example_com()
    };
    let (extractor, calls, stats) = scenario.build();
    let features = extractor.extract_str("example.com").await.unwrap();

    assert_eq!(features.num_links, 0);
    assert_eq!(features.google_score, 0.0);
    assert!(!features.is_https);
    assert_eq!(features.ipv4.len(), 2);
    assert!(features.ipv4.iter().all(|entry| entry.geolocation.is_some()));
    assert_eq!(calls.dns.load(Ordering::SeqCst), 1);
    assert_eq!(calls.geolocation.load(Ordering::SeqCst), 2);
    assert_eq!(stats.get_info_count(InfoType::SearchNoLinks), 1);
}

#[tokio::test]
async fn test_dns_failure_leaves_both_sequences_empty() {
    let scenario = Scenario {
        a: Vec::new(),
        mx: Vec::new(),
        ..Scenario::example_com()
    };
    let (extractor, calls, _) = scenario.build();
    let features = extractor.extract_str("example.com").await.unwrap();

    assert!(features.ipv4.is_empty());
    assert!(features.mx_ips.is_empty());
    assert_eq!(features.num_links, 10);
    assert_eq!(calls.geolocation.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_geolocation_failure_is_isolated_to_one_address() {
    let scenario = Scenario {
        known: vec![("93.184.216.35", "NL")],
        ..Scenario::example_com()
    };
    let (extractor, _, _) = scenario.build();
    let features = extractor.extract_str("example.com").await.unwrap();

    assert_eq!(features.ipv4.len(), 2);
    assert!(features.ipv4[0].geolocation.is_none());
    assert_eq!(features.ipv4[0].ttl, 3600);
    assert_eq!(
        features.ipv4[1].geolocation.as_ref().unwrap().country_code,
        "NL"
    );
}

#[tokio::test]
async fn test_score_saturates() {
    let scenario = Scenario {
        links: (0..300).map(|i| format!("http://example.com/{i}")).collect(),
        ..Scenario::example_com()
    };
    let (extractor, _, _) = scenario.build();
    let extractor = extractor.with_max_results(300);
    let features = extractor.extract_str("example.com").await.unwrap();
    assert_eq!(features.num_links, 300);
    assert_eq!(features.google_score, 1.0);
}

#[tokio::test]
async fn test_json_document_shape() {
    let (extractor, _, _) = Scenario::example_com().build();
    let features = extractor.extract_str("example.com").await.unwrap();
    let value = serde_json::to_value(&features).unwrap();

    assert_eq!(value["Fullurl"], "example.com");
    assert_eq!(value["NumLinks"], 10);
    assert_eq!(value["IsHttps"], true);
    assert_eq!(value["IPv4"][0]["IP"], "93.184.216.34");
    assert_eq!(value["IPv4"][0]["Geolocation"]["country_code"], "US");
    assert_eq!(value["MXIPs"][0]["Name"], "mail.example.com.");
    assert!(value["MXIPs"][0]["IP"].is_null());
}
