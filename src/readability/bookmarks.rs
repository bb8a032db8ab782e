use reqwest::StatusCode;

use crate::{Res, error::LaterError, readability::ReadabilityClient, types::Credentials};

/// Adds `url` to the user's reading list.
///
/// # Status Handling
///
/// - `202 Accepted` (or any other 2xx) - bookmark created
/// - `409 Conflict` - [`LaterError::AlreadyBookmarked`]
/// - `400 Bad Request` - [`LaterError::BadRequest`], the URL was rejected
/// - anything else - [`LaterError::BookmarkFailed`] with the status code
pub async fn add_bookmark(
    client: &ReadabilityClient,
    credentials: &Credentials,
    url: &str,
) -> Res<()> {
    let token = credentials.as_token_pair();
    let response = client
        .signed_post(client.bookmarks_url(), Some(&token), &[("url", url)])
        .await?;

    bookmark_result(response.status(), url)
}

fn bookmark_result(status: StatusCode, url: &str) -> Res<()> {
    match status {
        StatusCode::CONFLICT => Err(LaterError::AlreadyBookmarked(url.to_string())),
        StatusCode::BAD_REQUEST => Err(LaterError::BadRequest(url.to_string())),
        s if s.is_success() => Ok(()),
        s => Err(LaterError::BookmarkFailed {
            url: url.to_string(),
            status: s.as_u16(),
        }),
    }
}
