//! End-to-end report generation against a mock YouTube Data API.

mod common;

use common::*;
use serde_json::json;
use wiremock::MockServer;

use yt_playlist::commands::report::generate;
use yt_playlist::error::Error;

async fn three_video_playlist(server: &MockServer) {
    mount_playlist(server, playlist_body(3)).await;
    let page = ids("vid", 0..3);
    mount_items_page(server, None, playlist_items_body(&page, None)).await;
    mount_videos_batch(
        server,
        &page,
        videos_body(vec![
            video_json("vid0", "PT1M", 999, 10, 1),
            video_json("vid1", "PT1M30S", 1_500, 40, 2),
            video_json("vid2", "PT2M5S", 2_500_000, 20, 3),
        ]),
    )
    .await;
}

#[tokio::test]
async fn test_report_file_contents() {
    let server = MockServer::start().await;
    three_video_playlist(&server).await;
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("playlist_details.txt");

    let count = generate(&client_for(&server), PLAYLIST_ID, &output)
        .await
        .unwrap();
    assert_eq!(count, 3);

    let report = std::fs::read_to_string(&output).unwrap();
    assert!(report.starts_with(&"=".repeat(60)));
    assert!(report.contains("PLAYLIST: Rust in Production\n"));
    assert!(report.contains("Channel: Ferris Talks\n"));
    assert!(report.contains("Published: May 01, 2023\n"));
    assert!(report.contains("Total Videos: 3\n"));
    assert!(report.contains("• Total Duration: 0h 4m 35s\n"));
    assert!(report.contains("• Average Video Length: 0h 1m 31s\n"));
    assert!(report.contains("• Total Views: 2.5M\n"));
    assert!(report.contains("• Total Likes: 70\n"));
    assert!(report.contains("• Total Comments: 6\n"));
    assert!(report.contains("👀 Most Viewed: Video vid2 (2.5M views)\n   https://youtu.be/vid2\n"));
    assert!(report.contains("❤️  Most Liked: Video vid1 (40 likes)\n   https://youtu.be/vid1\n"));
    assert!(report.contains("📺 ALL VIDEOS"));
    assert!(report.contains("\n1. Video vid0\n   ⏱️  0h 1m 0s | 👁️  999 views | ❤️  10\n   📅 Jun 15, 2023\n"));
    assert!(report.contains("\n3. Video vid2\n"));
    assert!(report.contains("   🔗 https://youtu.be/vid0\n2. Video vid1\n"));
    assert!(report.ends_with("   🔗 https://youtu.be/vid2\n"));
}

#[tokio::test]
async fn test_report_overwrites_previous_file() {
    let server = MockServer::start().await;
    three_video_playlist(&server).await;
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("playlist_details.txt");
    std::fs::write(&output, "stale report from an earlier run").unwrap();

    generate(&client_for(&server), PLAYLIST_ID, &output)
        .await
        .unwrap();

    let report = std::fs::read_to_string(&output).unwrap();
    assert!(!report.contains("stale report"));
}

#[tokio::test]
async fn test_bad_video_timestamp_leaves_no_file() {
    let server = MockServer::start().await;
    mount_playlist(&server, playlist_body(1)).await;
    let page = vec!["odd".to_string()];
    mount_items_page(&server, None, playlist_items_body(&page, None)).await;
    let mut video = video_json("odd", "PT1M", 1, 1, 1);
    video["snippet"]["publishedAt"] = json!("last Tuesday");
    mount_videos_batch(&server, &page, videos_body(vec![video])).await;

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("playlist_details.txt");

    let result = generate(&client_for(&server), PLAYLIST_ID, &output).await;
    assert!(matches!(result, Err(Error::Parse(_))));
    assert!(!output.exists());
}

#[tokio::test]
async fn test_missing_playlist_writes_nothing() {
    let server = MockServer::start().await;
    mount_playlist(&server, json!({ "items": [] })).await;
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("playlist_details.txt");

    let err = generate(&client_for(&server), PLAYLIST_ID, &output)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
    assert_eq!(err.exit_code(), 0);
    assert!(!output.exists());
}
