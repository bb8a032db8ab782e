use thiserror::Error;

/// Message printed when the API key or secret is missing from the environment.
pub const MISSING_API_CREDENTIALS: &str = "Ensure that READABILITY_API_KEY and READABILITY_API_SECRET are set.\nSee https://github.com/robinjmurphy/later#installation.";

#[derive(Error, Debug)]
pub enum LaterError {
    #[error("{}", MISSING_API_CREDENTIALS)]
    MissingApiCredentials,

    #[error("Unable to determine the home directory of the current user")]
    HomeDir,

    #[error("Login failed. Please check your username and password.")]
    Authentication,

    #[error("The URL {0} is already bookmarked")]
    AlreadyBookmarked(String),

    #[error("Malformed URL {0}")]
    BadRequest(String),

    #[error("Failed to bookmark {url}. Status code {status}.")]
    BookmarkFailed { url: String, status: u16 },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Serde(#[from] serde_json::Error),

    #[error("Invalid API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl LaterError {
    /// Whether the CLI should answer this error with its usage text.
    pub fn is_usage(&self) -> bool {
        matches!(self, LaterError::BadRequest(_))
    }
}
