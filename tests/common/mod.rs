//! Mock YouTube Data API responses shared by the integration tests.

#![allow(dead_code)]

use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use yt_playlist::youtube::YouTubeClient;

pub const API_KEY: &str = "test-key";
pub const PLAYLIST_ID: &str = "PLtest123";

pub fn client_for(server: &MockServer) -> YouTubeClient {
    YouTubeClient::with_base_url(API_KEY, server.uri()).unwrap()
}

pub fn playlist_body(item_count: u64) -> Value {
    json!({
        "kind": "youtube#playlistListResponse",
        "items": [{
            "id": PLAYLIST_ID,
            "snippet": {
                "title": "Rust in Production",
                "channelTitle": "Ferris Talks",
                "publishedAt": "2023-05-01T10:00:00.123456Z"
            },
            "contentDetails": { "itemCount": item_count }
        }]
    })
}

pub fn playlist_items_body(ids: &[String], next_page_token: Option<&str>) -> Value {
    let items: Vec<Value> = ids
        .iter()
        .map(|id| json!({ "contentDetails": { "videoId": id } }))
        .collect();
    let mut body = json!({ "items": items });
    if let Some(token) = next_page_token {
        body["nextPageToken"] = json!(token);
    }
    body
}

pub fn video_json(id: &str, duration: &str, views: u64, likes: u64, comments: u64) -> Value {
    json!({
        "id": id,
        "snippet": {
            "title": format!("Video {}", id),
            "publishedAt": "2023-06-15T08:30:00Z"
        },
        "contentDetails": { "duration": duration },
        "statistics": {
            "viewCount": views.to_string(),
            "likeCount": likes.to_string(),
            "commentCount": comments.to_string()
        }
    })
}

pub fn videos_body(videos: Vec<Value>) -> Value {
    json!({ "items": videos })
}

pub fn ids(prefix: &str, range: std::ops::Range<usize>) -> Vec<String> {
    range.map(|i| format!("{}{}", prefix, i)).collect()
}

pub async fn mount_playlist(server: &MockServer, body: Value) {
    Mock::given(method("GET"))
        .and(path("/playlists"))
        .and(query_param("id", PLAYLIST_ID))
        .and(query_param("key", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Mount one page of playlist items; `page_token` is the token this page is requested with
pub async fn mount_items_page(server: &MockServer, page_token: Option<&str>, body: Value) {
    let mock = Mock::given(method("GET"))
        .and(path("/playlistItems"))
        .and(query_param("playlistId", PLAYLIST_ID))
        .and(query_param("maxResults", "50"));
    let mock = match page_token {
        Some(token) => mock.and(query_param("pageToken", token)),
        None => mock.and(query_param_is_missing("pageToken")),
    };
    mock.respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

/// Mount a detail batch that must be requested exactly once with exactly `ids`
pub async fn mount_videos_batch(server: &MockServer, ids: &[String], body: Value) {
    Mock::given(method("GET"))
        .and(path("/videos"))
        .and(query_param("id", ids.join(",")))
        .and(query_param("part", "contentDetails,statistics,snippet"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}
