use axum::http::StatusCode;

use super::common;

// Above the default Linux pid_max, so never allocated
const UNUSED_PID: u32 = 4_194_304 + 17;

#[tokio::test]
async fn test_terminate_unknown_pid() {
    let body = format!(r#"{{"pid": {}}}"#, UNUSED_PID);
    let (status, body) = common::post_json(common::router(), "/api/terminate", &body).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], "error");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains(&UNUSED_PID.to_string()));
}

#[tokio::test]
async fn test_terminate_missing_pid() {
    let (status, body) = common::post_json(common::router(), "/api/terminate", "{}").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");
    assert!(body["message"].as_str().unwrap().contains("pid"));
}

#[tokio::test]
async fn test_terminate_malformed_body() {
    for raw in [r#"{"pid": "12"}"#, r#"{"pid": 1.5}"#, "not json", ""] {
        let (status, body) = common::post_json(common::router(), "/api/terminate", raw).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body {:?}", raw);
        assert_eq!(body["status"], "error", "body {:?}", raw);
    }
}

#[tokio::test]
async fn test_terminate_rejects_process_groups() {
    for pid in ["0", "-1"] {
        let body = format!(r#"{{"pid": {}}}"#, pid);
        let (status, body) = common::post_json(common::router(), "/api/terminate", &body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], "error");
    }
}

#[tokio::test]
async fn test_terminate_self_refused() {
    let body = format!(r#"{{"pid": {}}}"#, std::process::id());
    let (status, body) = common::post_json(common::router(), "/api/terminate", &body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");
}

#[cfg(target_os = "linux")]
#[tokio::test]
async fn test_terminate_foreign_process_forbidden() {
    use std::os::unix::fs::MetadataExt;

    // only meaningful when pid 1 belongs to someone else and we are not root
    let euid = unsafe { libc::geteuid() };
    let foreign = std::fs::metadata("/proc/1")
        .map(|meta| euid != 0 && meta.uid() != euid)
        .unwrap_or(false);
    if !foreign {
        return;
    }

    let (status, body) =
        common::post_json(common::router(), "/api/terminate", r#"{"pid": 1}"#).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["status"], "error");
    assert!(body["message"].as_str().unwrap().contains("pid=1"));
}

#[tokio::test]
async fn test_legacy_status_codes() {
    let body = format!(r#"{{"pid": {}}}"#, UNUSED_PID);
    let (status, body) =
        common::post_json(common::router_with(true), "/api/terminate", &body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "error");
}

#[cfg(unix)]
#[tokio::test]
async fn test_terminate_live_child() {
    use std::os::unix::process::ExitStatusExt;
    use std::process::Command;
    use std::time::Duration;

    let mut child = Command::new("sleep").arg("30").spawn().unwrap();
    let pid = child.id();

    let body = format!(r#"{{"pid": {}}}"#, pid);
    let (status, body) = common::post_json(common::router(), "/api/terminate", &body).await;

    assert_eq!(status, StatusCode::OK, "{}", body);
    assert_eq!(body["status"], "success");
    assert_eq!(body["message"], format!("Process {} terminated.", pid));

    let exit = tokio::task::spawn_blocking(move || child.wait())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(exit.signal(), Some(libc::SIGTERM));

    let mut gone = false;
    for _ in 0..20 {
        if !common::listed_pids(common::router())
            .await
            .contains(&u64::from(pid))
        {
            gone = true;
            break;
        }
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
    assert!(gone, "pid {} still listed", pid);
}
