//! # Readability API
//!
//! Client for the two Readability Reader API endpoints later needs:
//!
//! - `POST /oauth/access_token/` - xAuth exchange of username/password for
//!   an access token ([`auth`])
//! - `POST /bookmarks` - add a URL to the reading list ([`bookmarks`])
//!
//! Both calls are form POSTs authenticated with an OAuth 1.0a
//! `Authorization` header. [`ReadabilityClient::signed_post`] computes that
//! header and sends the request on the same `reqwest::Client`, so a signed
//! request can never leave through a different, unsigned transport.

pub mod auth;
pub mod bookmarks;

use reqwest::{Client, Response, header::AUTHORIZATION};

use crate::{Res, config::Config, oauth, types::TokenPair};

pub struct ReadabilityClient {
    http: Client,
    consumer: TokenPair,
    access_token_url: String,
    bookmarks_url: String,
}

impl ReadabilityClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: Client::new(),
            consumer: config.consumer(),
            access_token_url: config.access_token_url.clone(),
            bookmarks_url: config.bookmarks_url.clone(),
        }
    }

    /// Signs a form POST with the consumer credentials and `token`, then
    /// sends it.
    ///
    /// # Arguments
    ///
    /// * `url` - Absolute endpoint URL
    /// * `token` - Access token, `None` for the token exchange itself
    /// * `form` - Body parameters; they are covered by the signature
    ///
    /// # Errors
    ///
    /// Returns an error if `url` is not absolute or the request cannot be
    /// sent. HTTP error statuses are returned as a normal `Response`.
    pub async fn signed_post(
        &self,
        url: &str,
        token: Option<&TokenPair>,
        form: &[(&str, &str)],
    ) -> Res<Response> {
        let authorization = oauth::authorization_header("POST", url, &self.consumer, token, form)?;

        let response = self
            .http
            .post(url)
            .header(AUTHORIZATION, authorization)
            .form(form)
            .send()
            .await?;

        Ok(response)
    }

    pub fn access_token_url(&self) -> &str {
        &self.access_token_url
    }

    pub fn bookmarks_url(&self) -> &str {
        &self.bookmarks_url
    }
}
