use std::time::Duration;

use vantage_common::location;
use vantage_core::probe::{HttpProbe, LatencyProbe, ProbeError};

use crate::util;

const SUMMARY_BODY: &str = "PING google.com (142.250.4.100) 56(84) bytes of data.\n\
    --- google.com ping statistics ---\n\
    5 packets transmitted, 5 received, 0% packet loss, time 4005ms\n\
    rtt min/avg/max/mdev = 1.1/2.2/3.3/0.4 ms\n";

#[tokio::test]
async fn http_probe_parses_summary_from_ok_response() {
    let responder = util::respond_with("200 OK", SUMMARY_BODY).await;
    let probe = HttpProbe::new(&responder.config(Duration::from_secs(5))).unwrap();
    let singapore = location::find("sg").unwrap();

    let result = probe.probe(singapore, "google.com").await.unwrap();

    assert_eq!(result.location, "Singapore");
    assert_eq!(result.summary.min, 1.1);
    assert_eq!(result.summary.avg, 2.2);
    assert_eq!(result.summary.max, 3.3);
    assert_eq!(result.summary.mdev, 0.4);
}

#[tokio::test]
async fn http_probe_sends_remote_id_and_query() {
    let responder = util::respond_with("200 OK", SUMMARY_BODY).await;
    let probe = HttpProbe::new(&responder.config(Duration::from_secs(5))).unwrap();
    let frankfurt = location::find("de").unwrap();

    probe.probe(frankfurt, "example.com").await.unwrap();

    let lines = responder.request_lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("GET /fra-de/ajax.php?"), "{}", lines[0]);
    assert!(lines[0].contains("cmd=ping"));
    assert!(lines[0].contains("host=example.com"));
}

#[tokio::test]
async fn http_probe_reports_parse_error_for_unexpected_body() {
    let responder = util::respond_with("200 OK", "ping: unknown host google.com\n").await;
    let probe = HttpProbe::new(&responder.config(Duration::from_secs(5))).unwrap();

    let err = probe
        .probe(location::find("jp").unwrap(), "google.com")
        .await
        .unwrap_err();

    assert!(matches!(err, ProbeError::Parse), "unexpected error: {err}");
}

#[tokio::test]
async fn http_probe_reports_transport_error_for_server_error() {
    let responder = util::respond_with("500 Internal Server Error", SUMMARY_BODY).await;
    let probe = HttpProbe::new(&responder.config(Duration::from_secs(5))).unwrap();

    let err = probe
        .probe(location::find("jp").unwrap(), "google.com")
        .await
        .unwrap_err();

    assert!(matches!(err, ProbeError::Transport(_)), "unexpected error: {err}");
}

#[tokio::test]
async fn http_probe_reports_transport_error_when_refused() {
    let cfg = vantage_common::config::Config {
        endpoint: util::closed_endpoint().await,
        timeout: Duration::from_secs(5),
        ..Default::default()
    };
    let probe = HttpProbe::new(&cfg).unwrap();

    let err = probe
        .probe(location::find("uk").unwrap(), "google.com")
        .await
        .unwrap_err();

    assert_eq!(err.kind(), "transport");
}

#[tokio::test]
async fn http_probe_times_out_as_transport_error() {
    let responder = util::silent().await;
    let probe = HttpProbe::new(&responder.config(Duration::from_millis(200))).unwrap();

    let err = tokio::time::timeout(
        Duration::from_secs(5),
        probe.probe(location::find("nl").unwrap(), "google.com"),
    )
    .await
    .expect("per-probe timeout did not fire")
    .unwrap_err();

    assert!(matches!(err, ProbeError::Transport(_)));
}
