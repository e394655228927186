use crate::error::Result;
use crate::fetcher::{PlaylistInfo, VideoRecord};
use crate::format::{format_count, format_duration};
use crate::parse::parse_timestamp;
use crate::stats::AggregateStats;

const SEPARATOR_WIDTH: usize = 60;

fn heavy_rule() -> String {
    "=".repeat(SEPARATOR_WIDTH)
}

fn light_rule() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

/// Playlist title block
pub fn render_header(info: &PlaylistInfo) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}\n", heavy_rule()));
    output.push_str(&format!("PLAYLIST: {}\n", info.title));
    output.push_str(&format!("Channel: {}\n", info.channel_title));
    output.push_str(&format!(
        "Published: {}\n",
        info.published_at.format("%B %d, %Y")
    ));
    output.push_str(&format!("Total Videos: {}\n", info.total_video_count));
    output.push_str(&format!("{}\n\n", heavy_rule()));
    output
}

pub fn render_statistics(stats: &AggregateStats) -> String {
    let mut output = String::new();
    output.push_str("📊 PLAYLIST STATISTICS\n");
    output.push_str(&format!("{}\n", light_rule()));
    output.push_str(&format!(
        "• Total Duration: {}\n",
        format_duration(stats.total_duration_seconds)
    ));
    output.push_str(&format!(
        "• Average Video Length: {}\n",
        format_duration(stats.average_duration_seconds())
    ));
    output.push_str(&format!("• Total Views: {}\n", format_count(stats.total_views)));
    output.push_str(&format!("• Total Likes: {}\n", format_count(stats.total_likes)));
    output.push_str(&format!(
        "• Total Comments: {}\n\n",
        format_count(stats.total_comments)
    ));
    output
}

/// Most viewed and most liked videos. The liked line is omitted when it is
/// the same video as the viewed one.
pub fn render_top_videos(stats: &AggregateStats) -> String {
    let mut output = String::new();
    output.push_str("🏆 TOP VIDEOS\n");
    output.push_str(&format!("{}\n", light_rule()));

    if let Some(video) = stats.most_viewed {
        output.push_str(&format!(
            "👀 Most Viewed: {} ({} views)\n",
            video.title,
            format_count(video.view_count)
        ));
        output.push_str(&format!("   {}\n", video.url));
    }

    if let Some(video) = stats.most_liked.filter(|_| stats.most_liked_is_distinct()) {
        output.push_str(&format!(
            "❤️  Most Liked: {} ({} likes)\n",
            video.title,
            format_count(video.like_count)
        ));
        output.push_str(&format!("   {}\n", video.url));
    }

    output
}

/// Numbered listing of every video, entries separated by a single line break.
/// Fails on a publish timestamp in neither accepted format.
pub fn render_video_listing(videos: &[VideoRecord]) -> Result<String> {
    let mut output = String::new();
    output.push_str("\n📺 ALL VIDEOS\n");
    output.push_str(&format!("{}\n", light_rule()));

    for (idx, video) in videos.iter().enumerate() {
        let published = parse_timestamp(&video.published_at)?;

        output.push_str(&format!("\n{}. {}\n", idx + 1, video.title));
        output.push_str(&format!(
            "   ⏱️  {} | 👁️  {} views | ❤️  {}\n",
            format_duration(video.duration_seconds),
            format_count(video.view_count),
            format_count(video.like_count)
        ));
        output.push_str(&format!("   📅 {}\n", published.format("%b %d, %Y")));
        output.push_str(&format!("   🔗 {}", video.url));
    }
    if !videos.is_empty() {
        output.push('\n');
    }

    Ok(output)
}

/// Console view: header, statistics and top videos
pub fn render_summary(info: &PlaylistInfo, stats: &AggregateStats) -> String {
    let mut output = render_header(info);
    output.push_str(&render_statistics(stats));
    output.push_str(&render_top_videos(stats));
    output
}

/// File view: the console summary followed by the full video listing
pub fn render_report(
    info: &PlaylistInfo,
    stats: &AggregateStats,
    videos: &[VideoRecord],
) -> Result<String> {
    let mut output = render_summary(info, stats);
    output.push_str(&render_video_listing(videos)?);
    Ok(output)
}
