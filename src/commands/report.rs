use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::config::{api_base_url, require_api_key, youtube_api_key};
use crate::error::{Error, Result};
use crate::fetcher::{fetch_all_videos, fetch_playlist_info};
use crate::report::{render_header, render_report, render_statistics, render_top_videos};
use crate::stats::aggregate;
use crate::youtube::YouTubeClient;

fn prompt_playlist_id(input: &mut impl BufRead) -> Result<String> {
    print!("Enter YouTube Playlist ID: ");
    io::stdout().flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line)
}

/// Trim a user-supplied playlist id; blank input is rejected
pub fn normalize_playlist_id(raw: &str) -> Result<&str> {
    let id = raw.trim();
    if id.is_empty() {
        return Err(Error::EmptyInput);
    }
    Ok(id)
}

/// Check the API key, then take the playlist id from the argument or prompt
/// for it on `input`. A missing key fails before anything is read.
pub fn startup_inputs(
    api_key: Option<String>,
    playlist_id: Option<String>,
    input: &mut impl BufRead,
) -> Result<(String, String)> {
    let api_key = require_api_key(api_key)?;

    let raw = match playlist_id {
        Some(id) => id,
        None => prompt_playlist_id(input)?,
    };
    let playlist_id = normalize_playlist_id(&raw)?.to_string();

    Ok((api_key, playlist_id))
}

pub async fn run(playlist_id: Option<String>, output: &Path) -> Result<()> {
    let (api_key, playlist_id) =
        startup_inputs(youtube_api_key(), playlist_id, &mut io::stdin().lock())?;

    let client = YouTubeClient::with_base_url(api_key, api_base_url())?;
    generate(&client, &playlist_id, output).await?;
    Ok(())
}

/// Fetch, summarize and save one playlist. Returns the number of videos in the report.
pub async fn generate(client: &YouTubeClient, playlist_id: &str, output: &Path) -> Result<usize> {
    let info = fetch_playlist_info(client, playlist_id).await?;
    print!("{}", render_header(&info));

    eprintln!("Fetching {} video(s)...", info.total_video_count);
    let videos = fetch_all_videos(client, playlist_id).await?;
    let stats = aggregate(&videos);

    print!("{}", render_statistics(&stats));
    print!("{}", render_top_videos(&stats));

    // Render completely before touching the file so a bad timestamp leaves no partial report
    let report = render_report(&info, &stats, &videos)?;
    std::fs::write(output, report)?;

    println!(
        "\n✅ Playlist details have been saved to '{}'.",
        output.display()
    );

    Ok(videos.len())
}
