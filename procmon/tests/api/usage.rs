use std::time::Instant;

use axum::http::StatusCode;

use super::common;

#[tokio::test]
async fn test_usage_in_range_and_waits_for_window() {
    let started = Instant::now();
    let (status, body) = common::get(common::router(), "/api/usage").await;

    assert_eq!(status, StatusCode::OK);
    assert!(started.elapsed() >= common::SAMPLE_WINDOW);

    let cpu = body["cpu"].as_f64().unwrap();
    let memory = body["memory"].as_f64().unwrap();
    assert!((0.0..=100.0).contains(&cpu), "{}", body);
    assert!((0.0..=100.0).contains(&memory), "{}", body);
    assert!(memory > 0.0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_listing_not_blocked_by_usage() {
    let app = common::router();

    let usage = tokio::spawn(common::get(app.clone(), "/api/usage"));
    // let the usage request start its sampling window
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;

    let started = Instant::now();
    let (list_status, _) = common::get(app, "/api/processes").await;
    let list_elapsed = started.elapsed();

    let (usage_status, _) = usage.await.unwrap();

    assert_eq!(list_status, StatusCode::OK);
    assert_eq!(usage_status, StatusCode::OK);
    assert!(
        list_elapsed < common::SAMPLE_WINDOW,
        "listing took {:?}",
        list_elapsed
    );
}
