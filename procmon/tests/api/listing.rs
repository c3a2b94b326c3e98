use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};

use super::common;

#[tokio::test]
async fn test_list_returns_well_formed_records() {
    let (status, body) = common::get(common::router(), "/api/processes").await;
    assert_eq!(status, StatusCode::OK);

    let records = body.as_array().expect("array of processes");
    assert!(!records.is_empty());

    for record in records {
        assert!(record["pid"].is_u64(), "{}", record);
        assert!(record["name"].is_string(), "{}", record);

        let cpu = record["cpu_percent"].as_f64().unwrap();
        let mem = record["memory_percent"].as_f64().unwrap();
        assert!((0.0..=100.0).contains(&cpu), "{}", record);
        assert!((0.0..=100.0).contains(&mem), "{}", record);
    }
}

#[tokio::test]
async fn test_list_includes_test_process() {
    let pids = common::listed_pids(common::router()).await;
    assert!(pids.contains(&u64::from(std::process::id())));
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/processes")
        .header(header::ORIGIN, "http://dashboard.example")
        .body(Body::empty())
        .unwrap();

    let response = tower::ServiceExt::oneshot(common::router(), request)
        .await
        .unwrap();
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let (status, _) = common::get(common::router(), "/api/nothing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[cfg(target_os = "linux")]
#[tokio::test]
async fn test_list_includes_kernel_threads() {
    // kthreadd is pid 2 on a host pid namespace
    let is_kthreadd = std::fs::read_to_string("/proc/2/comm")
        .map(|comm| comm.trim() == "kthreadd")
        .unwrap_or(false);
    if !is_kthreadd {
        return;
    }

    let pids = common::listed_pids(common::router()).await;
    assert!(pids.contains(&2), "kthreadd missing from listing");
}
