use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("YOUTUBE_API_KEY not set. Run `yt-playlist init` or add it to a .env file.")]
    ApiKeyMissing,

    #[error("Playlist ID cannot be empty")]
    EmptyInput,

    #[error("YouTube API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Too many video ids in one request: {requested} (limit {max})")]
    BatchTooLarge { requested: usize, max: usize },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Network, auth and quota failures reported by the remote API.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Api { .. } | Error::Http(_))
    }

    /// Process exit status for this error. A missing playlist is reported, not failed.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::NotFound(_) => 0,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
