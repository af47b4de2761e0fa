mod common;

use common::test_client;
use mockito::Server;
use pythonanywhere_client::api::files::Files;
use pythonanywhere_client::error::ApiError;
use pythonanywhere_client::model::{PathContents, SharingStatus};

#[tokio::test]
async fn path_get_returns_directory_listing_for_json() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v0/user/testuser/files/path/home/testuser")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"README.txt":{"type":"file","url":"/api/v0/user/testuser/files/path/home/testuser/README.txt"}}"#,
        )
        .create_async()
        .await;

    let files = Files::new(test_client(&server.url()));
    let contents = files
        .path_get("/home/testuser")
        .await
        .expect("path_get should succeed");
    match contents {
        PathContents::Directory(entries) => {
            assert_eq!(entries["README.txt"].kind, "file");
        }
        PathContents::File(_) => panic!("expected a directory listing"),
    }
    mock.assert_async().await;
}

#[tokio::test]
async fn path_get_returns_bytes_for_files() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v0/user/testuser/files/path/home/testuser/README.txt")
        .with_status(200)
        .with_header("content-type", "application/octet-stream")
        .with_body("hello world")
        .create_async()
        .await;

    let files = Files::new(test_client(&server.url()));
    let contents = files
        .path_get("/home/testuser/README.txt")
        .await
        .expect("path_get should succeed");
    assert_eq!(contents, PathContents::File(b"hello world".to_vec()));
    mock.assert_async().await;
}

#[tokio::test]
async fn path_get_failure_uses_json_detail() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v0/user/testuser/files/path/nope")
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(r#"{"detail": "File not found"}"#)
        .create_async()
        .await;

    let files = Files::new(test_client(&server.url()));
    let err = files.path_get("/nope").await.err().expect("404 should fail");
    match err {
        ApiError::Api { status, body, .. } => {
            assert_eq!(status, 404);
            assert_eq!(body, "File not found");
        }
        other => panic!("Unexpected error: {other:?}"),
    }
    mock.assert_async().await;
}

#[tokio::test]
async fn path_post_distinguishes_created_from_updated() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/v0/user/testuser/files/path/home/testuser/new.txt")
        .with_status(201)
        .create_async()
        .await;

    let files = Files::new(test_client(&server.url()));
    let status = files
        .path_post("/home/testuser/new.txt", b"data".to_vec())
        .await
        .expect("upload should succeed");
    assert_eq!(status, 201);
    mock.assert_async().await;
}

#[tokio::test]
async fn path_post_failure_carries_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/v0/user/testuser/files/path/home/other/file.txt")
        .with_status(403)
        .with_body("You do not have permission")
        .create_async()
        .await;

    let files = Files::new(test_client(&server.url()));
    let err = files
        .path_post("/home/other/file.txt", b"data".to_vec())
        .await
        .err()
        .expect("403 should fail");
    match err {
        ApiError::Api { body, .. } => assert!(body.contains("permission")),
        other => panic!("Unexpected error: {other:?}"),
    }
    mock.assert_async().await;
}

#[tokio::test]
async fn path_delete_expects_204() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("DELETE", "/api/v0/user/testuser/files/path/home/testuser/old.txt")
        .with_status(204)
        .create_async()
        .await;

    let files = Files::new(test_client(&server.url()));
    let status = files
        .path_delete("/home/testuser/old.txt")
        .await
        .expect("delete should succeed");
    assert_eq!(status, 204);
    mock.assert_async().await;
}

#[tokio::test]
async fn sharing_post_reports_fresh_share() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/v0/user/testuser/files/sharing/")
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(r#"{"url": "/user/testuser/shares/abc123/"}"#)
        .create_async()
        .await;

    let files = Files::new(test_client(&server.url()));
    let (status, url) = files
        .sharing_post("/home/testuser/script.py")
        .await
        .expect("sharing should succeed");
    assert_eq!(status, SharingStatus::SuccessfullyShared);
    assert_eq!(url, format!("{}/user/testuser/shares/abc123/", server.url()));
    mock.assert_async().await;
}

#[tokio::test]
async fn sharing_post_reports_already_shared() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/v0/user/testuser/files/sharing/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"url": "/user/testuser/shares/abc123/"}"#)
        .create_async()
        .await;

    let files = Files::new(test_client(&server.url()));
    let (status, _) = files
        .sharing_post("/home/testuser/script.py")
        .await
        .expect("sharing should succeed");
    assert_eq!(status, SharingStatus::AlreadyShared);
    assert_eq!(status.as_str(), "was already shared");
    mock.assert_async().await;
}

#[tokio::test]
async fn sharing_get_returns_link_when_shared() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock(
            "GET",
            "/api/v0/user/testuser/files/sharing/?path=/home/testuser/script.py",
        )
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"url": "/user/testuser/shares/abc123/"}"#)
        .create_async()
        .await;

    let files = Files::new(test_client(&server.url()));
    let url = files
        .sharing_get("/home/testuser/script.py")
        .await
        .expect("sharing_get should succeed");
    assert_eq!(
        url,
        Some(format!("{}/user/testuser/shares/abc123/", server.url()))
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn sharing_get_returns_none_when_not_shared() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock(
            "GET",
            "/api/v0/user/testuser/files/sharing/?path=/home/testuser/private.py",
        )
        .with_status(404)
        .create_async()
        .await;

    let files = Files::new(test_client(&server.url()));
    let url = files
        .sharing_get("/home/testuser/private.py")
        .await
        .expect("sharing_get should not error on 404");
    assert!(url.is_none());
    mock.assert_async().await;
}

#[tokio::test]
async fn sharing_delete_returns_status_as_is() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock(
            "DELETE",
            "/api/v0/user/testuser/files/sharing/?path=/home/testuser/script.py",
        )
        .with_status(204)
        .create_async()
        .await;

    let files = Files::new(test_client(&server.url()));
    let status = files
        .sharing_delete("/home/testuser/script.py")
        .await
        .expect("unshare should succeed");
    assert_eq!(status, 204);
    mock.assert_async().await;
}

#[tokio::test]
async fn tree_get_lists_directory() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v0/user/testuser/files/tree/?path=/home/testuser")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"["/home/testuser/README.txt", "/home/testuser/projects/"]"#)
        .create_async()
        .await;

    let files = Files::new(test_client(&server.url()));
    let entries = files
        .tree_get("/home/testuser")
        .await
        .expect("tree should succeed");
    assert_eq!(entries.len(), 2);
    mock.assert_async().await;
}
