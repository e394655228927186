use crate::fetcher::VideoRecord;

/// Totals and extremal picks over a playlist's videos.
///
/// `most_viewed` and `most_liked` borrow from the slice the stats were built
/// from; both are `None` for an empty playlist.
#[derive(Debug, Clone, Default)]
pub struct AggregateStats<'a> {
    pub total_duration_seconds: f64,
    pub video_count: usize,
    pub total_views: u64,
    pub total_likes: u64,
    pub total_comments: u64,
    pub most_viewed: Option<&'a VideoRecord>,
    pub most_liked: Option<&'a VideoRecord>,
}

impl AggregateStats<'_> {
    pub fn average_duration_seconds(&self) -> f64 {
        if self.video_count == 0 {
            0.0
        } else {
            self.total_duration_seconds / self.video_count as f64
        }
    }

    /// Whether the most-liked video is a different video from the most-viewed one
    pub fn most_liked_is_distinct(&self) -> bool {
        match (self.most_viewed, self.most_liked) {
            (Some(viewed), Some(liked)) => viewed.url != liked.url,
            (None, Some(_)) => true,
            _ => false,
        }
    }
}

/// Single pass over `videos`. Ties keep the first video encountered.
pub fn aggregate(videos: &[VideoRecord]) -> AggregateStats<'_> {
    let mut stats = AggregateStats::default();

    for video in videos {
        stats.video_count += 1;
        stats.total_duration_seconds += video.duration_seconds;
        stats.total_views += video.view_count;
        stats.total_likes += video.like_count;
        stats.total_comments += video.comment_count;

        if stats.most_viewed.is_none_or(|best| video.view_count > best.view_count) {
            stats.most_viewed = Some(video);
        }
        if stats.most_liked.is_none_or(|best| video.like_count > best.like_count) {
            stats.most_liked = Some(video);
        }
    }

    stats
}
