//! API integration tests
//!
//! Each test spins up the full Axum application on an ephemeral port with
//! in-memory store doubles, then drives it over HTTP with reqwest.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, fixtures::*, ScriptedBlobStore, TestServer, TEST_ADMIN_PASSWORD,
};
use reqwest::StatusCode;

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/health").await.unwrap();
    let health: HealthJson = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(health.status, "ok");
    assert!(health.timestamp.ends_with("+07:00"));
}

#[tokio::test]
async fn test_unknown_route_returns_envelope() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/nope").await.unwrap();
    let error: ErrorEnvelope = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();

    assert!(!error.success);
    assert_eq!(error.message, "Endpoint not found");
}

// ============================================================================
// Submission
// ============================================================================

#[tokio::test]
async fn test_submit_text_only() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.submit("  hello there  ", vec![], "10.0.0.1").await.unwrap();
    let sent: SendEnvelope = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(sent.success);
    assert!(!sent.data.id.is_empty());
    assert_eq!(sent.data.files_uploaded, 0);
    assert_eq!(sent.data.files_total, 0);

    // Text arrives trimmed, provenance recorded
    let response = server
        .get_admin("/api/messages", TEST_ADMIN_PASSWORD)
        .await
        .unwrap();
    let list: ListEnvelope = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(list.data[0].text, "hello there");
    assert_eq!(list.data[0].client_ip, "10.0.0.1");
    assert!(list.data[0].submitted_at.ends_with("+07:00"));
}

#[tokio::test]
async fn test_submit_empty_rejected() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.submit("   ", vec![], "10.0.0.2").await.unwrap();
    let error: ErrorEnvelope = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();

    assert!(!error.success);
    assert_eq!(server.store.record_count(), 0);
}

#[tokio::test]
async fn test_submit_text_too_long_rejected() {
    let server = TestServer::start().await.expect("Failed to start server");

    let long_text = "a".repeat(5001);
    let response = server.submit(&long_text, vec![], "10.0.0.3").await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_submit_with_attachment() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .submit("photo attached", vec![png_file("photo.png")], "10.0.0.4")
        .await
        .unwrap();
    let sent: SendEnvelope = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(sent.data.files_uploaded, 1);
    assert_eq!(sent.data.files_total, 1);

    let response = server
        .get_admin("/api/messages", TEST_ADMIN_PASSWORD)
        .await
        .unwrap();
    let list: ListEnvelope = assert_json(response, StatusCode::OK).await.unwrap();

    let message = &list.data[0];
    assert!(message.has_attachments);
    assert_eq!(message.attachment_count, 1);

    let attachment = &message.attachments[0];
    assert_eq!(attachment.original_name, "photo.png");
    assert_eq!(attachment.mime_type, "image/png");
    assert_eq!(attachment.category, "image");
    assert_eq!(attachment.url, "https://files.test/photo.png");
    assert_eq!(attachment.size_bytes, 8);
    assert_eq!(attachment.size_display, "8 Bytes");
}

#[tokio::test]
async fn test_submit_empty_text_with_file_accepted() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .submit("", vec![pdf_file("doc.pdf")], "10.0.0.5")
        .await
        .unwrap();
    let sent: SendEnvelope = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(sent.data.files_uploaded, 1);
}

#[tokio::test]
async fn test_submit_disallowed_mime_rejected() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .submit("look at this", vec![exe_file("tool.exe")], "10.0.0.6")
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(server.store.record_count(), 0);
}

#[tokio::test]
async fn test_submit_too_many_files_rejected() {
    let server = TestServer::start().await.expect("Failed to start server");

    let files = vec![
        png_file("1.png"),
        png_file("2.png"),
        png_file("3.png"),
        png_file("4.png"),
        png_file("5.png"),
    ];
    let response = server.submit("five files", files, "10.0.0.7").await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_failed_upload_does_not_lose_message() {
    let server = TestServer::start_with_blobs(ScriptedBlobStore::failing_names_containing("bad"))
        .await
        .expect("Failed to start server");

    let response = server
        .submit(
            "one of these fails",
            vec![png_file("good.png"), png_file("bad.png")],
            "10.0.0.8",
        )
        .await
        .unwrap();
    let sent: SendEnvelope = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(sent.success);
    assert_eq!(sent.data.files_uploaded, 1);
    assert_eq!(sent.data.files_total, 2);

    let response = server
        .get_admin("/api/messages", TEST_ADMIN_PASSWORD)
        .await
        .unwrap();
    let list: ListEnvelope = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(list.data[0].attachments.len(), 1);
    assert_eq!(list.data[0].attachments[0].original_name, "good.png");
}

// ============================================================================
// Rate limiting
// ============================================================================

#[tokio::test]
async fn test_rate_limit_enforced_per_client() {
    let server = TestServer::start().await.expect("Failed to start server");

    for i in 0..5 {
        let response = server
            .submit(&format!("message {i}"), vec![], "198.51.100.1")
            .await
            .unwrap();
        let remaining = response
            .headers()
            .get("ratelimit-remaining")
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(remaining.as_deref(), Some(format!("{}", 4 - i).as_str()));
    }

    // Sixth submission from the same client is rejected
    let response = server
        .submit("message 6", vec![], "198.51.100.1")
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(
        response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok()),
        Some("3600")
    );
    let error: ErrorEnvelope = serde_json::from_str(&response.text().await.unwrap()).unwrap();
    assert!(!error.success);
    assert_eq!(error.retry_after, Some(3600));

    // A different client is unaffected
    let response = server
        .submit("other client", vec![], "198.51.100.2")
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_rate_limit_does_not_cover_other_endpoints() {
    let server = TestServer::start().await.expect("Failed to start server");

    for _ in 0..5 {
        server.submit("fill", vec![], "198.51.100.3").await.unwrap();
    }

    // Submission is exhausted but health and admin stay reachable
    let response = server.get("/api/health").await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = server
        .get_admin("/api/messages", TEST_ADMIN_PASSWORD)
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

// ============================================================================
// Admin authentication
// ============================================================================

#[tokio::test]
async fn test_admin_requires_password() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/messages").await.unwrap();
    let error: ErrorEnvelope = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert!(!error.success);

    let response = server.get_admin("/api/messages", "wrong").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server.get("/api/stats").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_admin_password_via_query_parameter() {
    let server = TestServer::start().await.expect("Failed to start server");

    let path = format!("/api/messages?password={TEST_ADMIN_PASSWORD}");
    let response = server.get(&path).await.unwrap();
    let list: ListEnvelope = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(list.success);
}

#[tokio::test]
async fn test_admin_unconfigured_password_reports_server_error() {
    let mut config = integration_tests::test_config();
    config.admin.password = None;
    let server = TestServer::start_with(config, ScriptedBlobStore::reliable())
        .await
        .expect("Failed to start server");

    let response = server
        .get_admin("/api/messages", TEST_ADMIN_PASSWORD)
        .await
        .unwrap();
    assert_status(response, StatusCode::INTERNAL_SERVER_ERROR)
        .await
        .unwrap();
}

// ============================================================================
// Listing and deletion
// ============================================================================

#[tokio::test]
async fn test_list_newest_first_with_category_filter() {
    let server = TestServer::start().await.expect("Failed to start server");

    server
        .submit("first", vec![png_file("a.png")], "10.1.0.1")
        .await
        .unwrap();
    server
        .submit("second", vec![mp4_file("b.mp4")], "10.1.0.1")
        .await
        .unwrap();
    server.submit("third", vec![], "10.1.0.1").await.unwrap();

    let response = server
        .get_admin("/api/messages", TEST_ADMIN_PASSWORD)
        .await
        .unwrap();
    let list: ListEnvelope = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(list.count, 3);
    assert_eq!(list.filter, "all");
    let texts: Vec<_> = list.data.iter().map(|m| m.text.as_str()).collect();
    assert_eq!(texts, vec!["third", "second", "first"]);

    let response = server
        .get_admin("/api/messages?category=video", TEST_ADMIN_PASSWORD)
        .await
        .unwrap();
    let list: ListEnvelope = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(list.count, 1);
    assert_eq!(list.filter, "video");
    assert_eq!(list.data[0].text, "second");
}

#[tokio::test]
async fn test_list_rejects_unknown_category() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .get_admin("/api/messages?category=gif", TEST_ADMIN_PASSWORD)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_list_respects_limit() {
    let server = TestServer::start().await.expect("Failed to start server");

    for i in 0..4 {
        server
            .submit(&format!("msg {i}"), vec![], "10.1.0.2")
            .await
            .unwrap();
    }

    let response = server
        .get_admin("/api/messages?limit=2", TEST_ADMIN_PASSWORD)
        .await
        .unwrap();
    let list: ListEnvelope = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(list.count, 2);
}

#[tokio::test]
async fn test_delete_message() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.submit("to delete", vec![], "10.1.0.3").await.unwrap();
    let sent: SendEnvelope = assert_json(response, StatusCode::OK).await.unwrap();

    let path = format!("/api/messages/{}", sent.data.id);
    let response = server.delete_admin(&path, TEST_ADMIN_PASSWORD).await.unwrap();
    let deleted: DeleteEnvelope = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(deleted.success);
    assert_eq!(server.store.record_count(), 0);

    // Deleting again is still a success
    let response = server.delete_admin(&path, TEST_ADMIN_PASSWORD).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // Deletion requires the secret
    let url = format!("{}{}", server.base_url(), path);
    let response = server.client.delete(&url).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ============================================================================
// Statistics
// ============================================================================

#[tokio::test]
async fn test_stats_aggregation() {
    let server = TestServer::start().await.expect("Failed to start server");

    server
        .submit("images", vec![png_file("a.png"), png_file("b.png")], "10.2.0.1")
        .await
        .unwrap();
    server
        .submit("video", vec![mp4_file("c.mp4")], "10.2.0.1")
        .await
        .unwrap();
    server.submit("plain", vec![], "10.2.0.1").await.unwrap();

    let response = server
        .get_admin("/api/stats", TEST_ADMIN_PASSWORD)
        .await
        .unwrap();
    let stats: StatsEnvelope = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(stats.success);
    assert_eq!(stats.data.total_messages, 3);
    assert_eq!(stats.data.messages_with_attachments, 2);
    assert_eq!(stats.data.messages_text_only, 1);
    assert_eq!(stats.data.total_attachments, 3);
    assert_eq!(stats.data.attachments_by_category.image, 2);
    assert_eq!(stats.data.attachments_by_category.video, 1);
    assert_eq!(stats.data.attachments_by_category.other, 0);
    assert!(!stats.data.total_size.is_empty());
}

#[tokio::test]
async fn test_stats_empty() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .get_admin("/api/stats", TEST_ADMIN_PASSWORD)
        .await
        .unwrap();
    let stats: StatsEnvelope = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(stats.data.total_messages, 0);
    assert_eq!(stats.data.total_size, "0 Bytes");
}
