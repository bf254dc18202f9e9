use std::sync::Arc;
use std::time::Duration;

use vantage_common::location::{self, LocationCode};
use vantage_core::report;
use vantage_core::scheduler::ProbeScheduler;

use crate::util::FakeProbe;

fn select(codes: &[&str]) -> Vec<&'static location::VantagePoint> {
    let codes: Vec<LocationCode> = codes.iter().map(|c| c.parse().unwrap()).collect();
    location::resolve(&codes)
}

/// sg answers at 10ms and jp at 5ms, so Tokyo must come out on top.
#[tokio::test]
async fn sweep_ranks_fastest_location_first() {
    let probe = Arc::new(FakeProbe::new(&[("sg", Some(10.0)), ("jp", Some(5.0))]));
    let scheduler = ProbeScheduler::new(probe);

    let sweep = scheduler.run(&select(&["sg", "jp"]), "google.com").await;
    let table = report::render(&sweep.results);

    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[0][0].trim(), "1");
    assert_eq!(table.rows[0][1].trim(), "Tokyo, Japan");
    assert_eq!(table.rows[0][3].trim(), "5.000");
    assert_eq!(table.rows[1][0].trim(), "2");
    assert_eq!(table.rows[1][1].trim(), "Singapore");
    assert_eq!(table.rows[1][3].trim(), "10.000");
}

#[tokio::test]
async fn sweep_over_region_survives_one_unreachable_location() {
    let probe = Arc::new(FakeProbe::new(&[
        ("de", Some(12.0)),
        ("fr", None),
        ("nl", Some(9.5)),
        ("uk", Some(11.0)),
        ("au", Some(210.0)),
    ]));
    let points = select(&["eu", "de"]);
    assert_eq!(points.len(), 5);

    let sweep = tokio::time::timeout(
        Duration::from_secs(5),
        ProbeScheduler::new(probe).run(&points, "google.com"),
    )
    .await
    .expect("sweep should settle");

    assert_eq!(sweep.results.len(), 4);
    assert_eq!(sweep.failures.len(), 1);
    assert_eq!(sweep.failures[0].vantage_point.display_name, "Paris, FR");

    let ranked: Vec<String> = report::rank(&sweep.results)
        .into_iter()
        .map(|row| row.location)
        .collect();
    assert_eq!(
        ranked,
        vec!["Amsterdam, NL", "London, UK", "Frankfurt, DE", "Sydney, Australia"]
    );
}

#[tokio::test]
async fn fully_failed_sweep_renders_header_only_table() {
    let probe = Arc::new(FakeProbe::new(&[("sg", None), ("jp", None)]));

    let sweep = ProbeScheduler::new(probe)
        .run(&select(&["as"]), "google.com")
        .await;
    let table = report::render(&sweep.results);

    assert_eq!(sweep.failures.len(), 2);
    assert!(table.rows.is_empty());
    assert_eq!(table.to_string().lines().count(), 2);
}
