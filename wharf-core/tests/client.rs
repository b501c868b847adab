use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
use wharf_core::{EntityKind, FsClient, FsError, TaskKind, TaskState};

#[tokio::test]
async fn fs_get_sends_path_and_password() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/fs/get"))
        .and(body_partial_json(json!({
            "path": "/docs/readme.md",
            "password": "secret",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 200,
            "message": "success",
            "data": {
                "name": "readme.md",
                "size": 120,
                "is_dir": false,
                "modified": "2024-05-01T10:00:00Z",
                "type": 4,
                "raw_url": "http://example.test/d/docs/readme.md",
                "provider": "Local"
            }
        })))
        .mount(&server)
        .await;

    let client = FsClient::with_base_url(&server.uri()).unwrap();
    let data = client.fs_get("/docs/readme.md", "secret").await.unwrap();

    assert!(!data.entity.is_dir);
    assert_eq!(data.entity.kind, EntityKind::Text);
    assert_eq!(data.raw_url, "http://example.test/d/docs/readme.md");
    assert_eq!(data.provider, "Local");
}

#[tokio::test]
async fn fs_list_sends_pagination_fields() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/fs/list"))
        .and(body_partial_json(json!({
            "path": "/docs",
            "page": 2,
            "per_page": 50,
            "refresh": true,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 200,
            "message": "success",
            "data": {
                "content": [
                    {"name": "a.txt", "size": 1, "is_dir": false},
                    {"name": "b", "is_dir": true, "type": 1}
                ],
                "total": 125,
                "write": true,
                "provider": "Local"
            }
        })))
        .mount(&server)
        .await;

    let client = FsClient::with_base_url(&server.uri()).unwrap();
    let data = client.fs_list("/docs", "", 2, 50, true).await.unwrap();

    let content = data.content.unwrap();
    assert_eq!(content.len(), 2);
    assert_eq!(content[1].kind, EntityKind::Folder);
    assert_eq!(data.total, 125);
    assert!(data.write);
}

#[tokio::test]
async fn fs_list_tolerates_null_content() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/fs/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 200,
            "message": "success",
            "data": {
                "content": null,
                "total": 0,
                "provider": "Local"
            }
        })))
        .mount(&server)
        .await;

    let client = FsClient::with_base_url(&server.uri()).unwrap();
    let data = client.fs_list("/empty", "", 1, 50, false).await.unwrap();

    assert!(data.content.is_none());
    assert_eq!(data.total, 0);
}

#[tokio::test]
async fn envelope_failure_surfaces_code_and_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/fs/get"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 403,
            "message": "password is incorrect",
        })))
        .mount(&server)
        .await;

    let client = FsClient::with_base_url(&server.uri()).unwrap();
    let err = client.fs_get("/private", "wrong").await.unwrap_err();

    assert!(err.is_auth_required());
    assert_eq!(err.to_string(), "password is incorrect");
}

#[tokio::test]
async fn http_failure_is_not_an_envelope_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/fs/list"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let client = FsClient::with_base_url(&server.uri()).unwrap();
    let err = client.fs_list("/docs", "", 1, 50, false).await.unwrap_err();

    assert!(matches!(err, FsError::Http { .. }));
    assert_eq!(err.code(), None);
}

#[tokio::test]
async fn archive_meta_reports_password_requirement() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/fs/archive/meta"))
        .and(body_partial_json(json!({
            "path": "/backups/site.zip",
            "archive_pass": "",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 202,
            "message": "wrong archive password",
        })))
        .mount(&server)
        .await;

    let client = FsClient::with_base_url(&server.uri()).unwrap();
    let err = client
        .fs_archive_meta("/backups/site.zip", "", "", false)
        .await
        .unwrap_err();

    assert_eq!(err.code(), Some(202));
}

#[tokio::test]
async fn archive_list_walks_inner_path() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/fs/archive/list"))
        .and(body_partial_json(json!({
            "path": "/backups/site.zip",
            "inner_path": "/assets",
            "page": 1,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 200,
            "message": "success",
            "data": {
                "content": [
                    {"name": "logo.png", "size": 2048, "is_dir": false, "type": 5}
                ],
                "total": 1
            }
        })))
        .mount(&server)
        .await;

    let client = FsClient::with_base_url(&server.uri()).unwrap();
    let data = client
        .fs_archive_list("/backups/site.zip", "", "", "/assets", 1, 0, false)
        .await
        .unwrap();

    assert_eq!(data.total, 1);
    assert_eq!(data.content[0].kind, EntityKind::Image);
}

#[tokio::test]
async fn task_undone_attaches_token_and_parses_states() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/task/upload/undone"))
        .and(header("authorization", "admin-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 200,
            "message": "success",
            "data": [
                {
                    "id": "t1",
                    "name": "upload big.iso to [/downloads](/)",
                    "state": 1,
                    "status": "uploading",
                    "progress": 41.5
                }
            ]
        })))
        .mount(&server)
        .await;

    let client = FsClient::with_base_url(&server.uri())
        .unwrap()
        .with_token("admin-token");
    let tasks = client.task_undone(TaskKind::Upload).await.unwrap();

    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].state, TaskState::Running);
    assert!(!tasks[0].state.is_done());
}

#[tokio::test]
async fn task_done_with_null_payload_is_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/task/copy/done"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 200,
            "message": "success",
            "data": null
        })))
        .mount(&server)
        .await;

    let client = FsClient::with_base_url(&server.uri()).unwrap();
    let tasks = client.task_done(TaskKind::Copy).await.unwrap();

    assert!(tasks.is_empty());
}

#[tokio::test]
async fn task_cancel_passes_task_id_as_query() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/task/offline_download/cancel"))
        .and(query_param("tid", "t42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 200,
            "message": "success"
        })))
        .mount(&server)
        .await;

    let client = FsClient::with_base_url(&server.uri()).unwrap();
    client
        .task_cancel(TaskKind::OfflineDownload, "t42")
        .await
        .unwrap();
}

#[tokio::test]
async fn task_retry_failed_posts_without_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/task/decompress/retry_failed"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 200,
            "message": "success"
        })))
        .mount(&server)
        .await;

    let client = FsClient::with_base_url(&server.uri()).unwrap();
    client.task_retry_failed(TaskKind::Decompress).await.unwrap();
}
