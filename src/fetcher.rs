use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::parse::{parse_count, parse_iso8601_duration, parse_timestamp};
use crate::youtube::{Video, YouTubeClient};

/// Playlist header, read once before paging through the items
#[derive(Debug, Clone)]
pub struct PlaylistInfo {
    pub id: String,
    pub title: String,
    pub channel_title: String,
    pub published_at: DateTime<Utc>,
    pub total_video_count: u64,
}

/// One video of the playlist with missing counters already zeroed
#[derive(Debug, Clone, PartialEq)]
pub struct VideoRecord {
    pub id: String,
    pub title: String,
    pub duration_seconds: f64,
    pub view_count: u64,
    pub like_count: u64,
    pub comment_count: u64,
    /// Raw API timestamp, reformatted when the report is rendered
    pub published_at: String,
    pub url: String,
}

impl VideoRecord {
    fn from_api(video: &Video) -> Result<Self> {
        let stats = &video.statistics;
        Ok(Self {
            id: video.id.clone(),
            title: video.snippet.title.clone(),
            duration_seconds: parse_iso8601_duration(&video.content_details.duration)?,
            view_count: parse_count(stats.view_count.as_deref())?,
            like_count: parse_count(stats.like_count.as_deref())?,
            comment_count: parse_count(stats.comment_count.as_deref())?,
            published_at: video.snippet.published_at.clone(),
            url: format!("https://youtu.be/{}", video.id),
        })
    }
}

/// Fetch the playlist header
pub async fn fetch_playlist_info(client: &YouTubeClient, playlist_id: &str) -> Result<PlaylistInfo> {
    let response = client.list_playlists(playlist_id).await?;

    let playlist = response
        .items
        .into_iter()
        .next()
        .ok_or_else(|| Error::NotFound(format!("playlist {}", playlist_id)))?;

    Ok(PlaylistInfo {
        published_at: parse_timestamp(&playlist.snippet.published_at)?,
        id: playlist.id,
        title: playlist.snippet.title,
        channel_title: playlist.snippet.channel_title,
        total_video_count: playlist.content_details.item_count,
    })
}

#[derive(Debug)]
enum PageState {
    Start,
    Next(String),
    Done,
}

/// Cursor over the pages of a playlist.
///
/// Each call to [`PlaylistPages::next_page`] lists one page of playlist items,
/// resolves them with a single batched `videos` lookup and returns the records
/// in playlist order. Once the API stops returning a continuation token, or
/// after any error, the cursor is exhausted for good.
pub struct PlaylistPages<'a> {
    client: &'a YouTubeClient,
    playlist_id: String,
    state: PageState,
    pages_fetched: usize,
}

impl<'a> PlaylistPages<'a> {
    pub fn new(client: &'a YouTubeClient, playlist_id: impl Into<String>) -> Self {
        Self {
            client,
            playlist_id: playlist_id.into(),
            state: PageState::Start,
            pages_fetched: 0,
        }
    }

    pub fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }

    pub fn is_done(&self) -> bool {
        matches!(self.state, PageState::Done)
    }

    pub async fn next_page(&mut self) -> Result<Option<Vec<VideoRecord>>> {
        let token = match std::mem::replace(&mut self.state, PageState::Done) {
            PageState::Done => return Ok(None),
            PageState::Start => None,
            PageState::Next(token) => Some(token),
        };

        let page = self
            .client
            .list_playlist_items(&self.playlist_id, token.as_deref())
            .await?;
        self.pages_fetched += 1;

        let video_ids: Vec<String> = page
            .items
            .into_iter()
            .map(|item| item.content_details.video_id)
            .collect();
        debug!(
            page = self.pages_fetched,
            items = video_ids.len(),
            has_next = page.next_page_token.is_some(),
            "Fetched playlist page"
        );

        let records = self.resolve_videos(&video_ids).await?;

        if let Some(next) = page.next_page_token.filter(|t| !t.is_empty()) {
            self.state = PageState::Next(next);
        }

        Ok(Some(records))
    }

    /// One record per playlist item. A video listed more than once is looked
    /// up once and repeated at each of its positions.
    async fn resolve_videos(&self, video_ids: &[String]) -> Result<Vec<VideoRecord>> {
        if video_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut unique_ids: Vec<String> = Vec::with_capacity(video_ids.len());
        for id in video_ids {
            if !unique_ids.contains(id) {
                unique_ids.push(id.clone());
            }
        }

        let response = self.client.list_videos(&unique_ids).await?;
        let by_id: HashMap<String, Video> = response
            .items
            .into_iter()
            .map(|video| (video.id.clone(), video))
            .collect();

        let mut records = Vec::with_capacity(video_ids.len());
        for id in video_ids {
            match by_id.get(id) {
                Some(video) => records.push(VideoRecord::from_api(video)?),
                None => warn!(video_id = %id, "Video details unavailable, skipping"),
            }
        }
        Ok(records)
    }
}

/// Fetch every video of the playlist, in playlist order
pub async fn fetch_all_videos(client: &YouTubeClient, playlist_id: &str) -> Result<Vec<VideoRecord>> {
    let mut pages = PlaylistPages::new(client, playlist_id);
    let mut videos = Vec::new();

    while let Some(records) = pages.next_page().await? {
        videos.extend(records);
    }

    debug!(pages = pages.pages_fetched(), videos = videos.len(), "Playlist fetch complete");
    Ok(videos)
}
