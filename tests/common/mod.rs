#![allow(dead_code)]

use std::{
    collections::VecDeque,
    io,
    net::SocketAddr,
    path::PathBuf,
    sync::{Arc, Mutex},
};

use axum::{
    Router,
    extract::State,
    http::{HeaderMap, StatusCode, Uri, header},
    routing::post,
};
use later::{config::Config, oauth, prompt::CredentialPrompt, types::TokenPair};
use percent_encoding::percent_decode_str;
use rand::{Rng, distr::Alphanumeric};

pub const API_KEY: &str = "test-key";
pub const API_SECRET: &str = "test-secret";

/// A request as seen by the mock provider.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub form: Vec<(String, String)>,
    pub oauth: Vec<(String, String)>,
    pub signature_valid: bool,
}

impl Recorded {
    pub fn form_value(&self, key: &str) -> Option<&str> {
        lookup(&self.form, key)
    }

    pub fn oauth_value(&self, key: &str) -> Option<&str> {
        lookup(&self.oauth, key)
    }
}

fn lookup<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
}

/// Stand-in for the Readability token and bookmark endpoints.
pub struct MockProvider {
    pub token_status: u16,
    pub token_body: String,
    pub bookmark_status: u16,
    /// Token secret the client is expected to sign bookmark requests with.
    pub token_secret: String,
    pub token_requests: Mutex<Vec<Recorded>>,
    pub bookmark_requests: Mutex<Vec<Recorded>>,
}

impl MockProvider {
    pub fn new(token_status: u16, token_body: &str, bookmark_status: u16) -> Self {
        Self {
            token_status,
            token_body: token_body.to_string(),
            bookmark_status,
            token_secret: String::new(),
            token_requests: Mutex::new(Vec::new()),
            bookmark_requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_token_secret(mut self, secret: &str) -> Self {
        self.token_secret = secret.to_string();
        self
    }

    pub fn token_requests(&self) -> Vec<Recorded> {
        self.token_requests.lock().unwrap().clone()
    }

    pub fn bookmark_requests(&self) -> Vec<Recorded> {
        self.bookmark_requests.lock().unwrap().clone()
    }
}

/// Serves `provider` on an ephemeral local port and returns its base URL.
pub async fn spawn(provider: Arc<MockProvider>) -> String {
    let app = Router::new()
        .route("/oauth/access_token/", post(access_token))
        .route("/bookmarks", post(bookmarks))
        .with_state(provider);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

async fn access_token(
    State(provider): State<Arc<MockProvider>>,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, String) {
    let recorded = record(&uri, &headers, &body, None);
    provider.token_requests.lock().unwrap().push(recorded);

    (
        StatusCode::from_u16(provider.token_status).unwrap(),
        provider.token_body.clone(),
    )
}

async fn bookmarks(
    State(provider): State<Arc<MockProvider>>,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> StatusCode {
    let recorded = record(&uri, &headers, &body, Some(&provider.token_secret));
    provider.bookmark_requests.lock().unwrap().push(recorded);

    StatusCode::from_u16(provider.bookmark_status).unwrap()
}

fn record(uri: &Uri, headers: &HeaderMap, body: &str, token_secret: Option<&str>) -> Recorded {
    let form: Vec<(String, String)> = url::form_urlencoded::parse(body.as_bytes())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let oauth = parse_authorization(&authorization);

    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    let url = format!("http://{host}{}", uri.path());

    let signature_valid = verify(&url, &authorization, &oauth, &form, token_secret);

    Recorded {
        form,
        oauth,
        signature_valid,
    }
}

/// Recomputes the header from the received nonce and timestamp and compares.
fn verify(
    url: &str,
    authorization: &str,
    oauth: &[(String, String)],
    form: &[(String, String)],
    token_secret: Option<&str>,
) -> bool {
    let (Some(nonce), Some(timestamp)) = (
        lookup(oauth, "oauth_nonce"),
        lookup(oauth, "oauth_timestamp").and_then(|t| t.parse::<i64>().ok()),
    ) else {
        return false;
    };

    let consumer = TokenPair::new(API_KEY, API_SECRET);
    let token = match (lookup(oauth, "oauth_token"), token_secret) {
        (Some(token), Some(secret)) => Some(TokenPair::new(token, secret)),
        (None, None) => None,
        _ => return false,
    };
    let params: Vec<(&str, &str)> = form.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();

    match oauth::sign_with("POST", url, &consumer, token.as_ref(), &params, nonce, timestamp) {
        Ok(expected) => expected == authorization,
        Err(_) => false,
    }
}

pub fn parse_authorization(header: &str) -> Vec<(String, String)> {
    let Some(fields) = header.strip_prefix("OAuth ") else {
        return Vec::new();
    };

    fields
        .split(", ")
        .filter_map(|field| {
            let (key, value) = field.split_once('=')?;
            let value = value.trim_matches('"');
            Some((
                key.to_string(),
                percent_decode_str(value).decode_utf8_lossy().into_owned(),
            ))
        })
        .collect()
}

/// Prompt that answers from a fixed list and records every question.
pub struct CannedPrompt {
    answers: VecDeque<String>,
    pub asked: Vec<String>,
}

impl CannedPrompt {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| a.to_string()).collect(),
            asked: Vec::new(),
        }
    }
}

impl CredentialPrompt for CannedPrompt {
    fn ask(&mut self, label: &str) -> io::Result<String> {
        self.asked.push(label.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no more answers"))
    }
}

/// A fresh, empty directory under the system temp dir.
pub fn temp_dir() -> PathBuf {
    let suffix: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(12)
        .map(char::from)
        .collect();
    let dir = std::env::temp_dir().join(format!("later-test-{suffix}"));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

pub fn config(base_url: &str, store_path: PathBuf) -> Config {
    Config::new(API_KEY, API_SECRET, store_path, base_url)
}
