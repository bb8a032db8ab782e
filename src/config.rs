//! Configuration management for later.
//!
//! Values come from the process environment, optionally seeded from a `.env`
//! file in the local data directory. Everything the rest of the crate needs
//! is collected once into a [`Config`] and passed down explicitly, so no
//! module reads the environment on its own.
//!
//! Lookup order:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Built-in defaults (API base URL, `~/.later`)

use std::{env, path::PathBuf};

use url::Url;

use crate::{Res, error::LaterError, types::TokenPair};

pub const API_KEY_VAR: &str = "READABILITY_API_KEY";
pub const API_SECRET_VAR: &str = "READABILITY_API_SECRET";
pub const API_URL_VAR: &str = "READABILITY_API_URL";
pub const STORE_PATH_VAR: &str = "LATER_STORE_PATH";

pub const DEFAULT_API_URL: &str = "https://www.readability.com/api/rest/v1";
pub const ACCESS_TOKEN_PATH: &str = "/oauth/access_token/";
pub const BOOKMARKS_PATH: &str = "/bookmarks";
pub const STORE_FILE_NAME: &str = ".later";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// The file is optional. When it exists its variables are added to the
/// process environment without overriding values that are already set.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/later/.env`
/// - macOS: `~/Library/Application Support/later/.env`
/// - Windows: `%LOCALAPPDATA%/later/.env`
///
/// # Errors
///
/// Returns an error message if the file exists but cannot be read or parsed.
pub fn load_env() -> Result<(), String> {
    let path = env_path();
    if !path.is_file() {
        return Ok(());
    }

    dotenv::from_path(&path)
        .map(|_| ())
        .map_err(|e| format!("{}: {}", path.display(), e))
}

/// Location of the optional `.env` file.
pub fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("later/.env");
    path
}

/// Default location of the credential store, `<home>/.later`.
///
/// # Errors
///
/// Returns [`LaterError::HomeDir`] if the current user's home directory
/// cannot be resolved.
pub fn default_store_path() -> Res<PathBuf> {
    let home = dirs::home_dir().ok_or(LaterError::HomeDir)?;
    Ok(home.join(STORE_FILE_NAME))
}

/// Runtime configuration for one invocation.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub api_secret: String,
    pub store_path: PathBuf,
    pub access_token_url: String,
    pub bookmarks_url: String,
}

impl Config {
    /// Builds a configuration from explicit values.
    ///
    /// `api_base` is the API root without a trailing slash requirement,
    /// e.g. `https://www.readability.com/api/rest/v1`.
    pub fn new(
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
        store_path: impl Into<PathBuf>,
        api_base: &str,
    ) -> Self {
        let base = api_base.trim_end_matches('/');
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            store_path: store_path.into(),
            access_token_url: format!("{base}{ACCESS_TOKEN_PATH}"),
            bookmarks_url: format!("{base}{BOOKMARKS_PATH}"),
        }
    }

    /// Reads the configuration from the process environment.
    ///
    /// `READABILITY_API_KEY` and `READABILITY_API_SECRET` are required and
    /// must be non-empty. `READABILITY_API_URL` and `LATER_STORE_PATH` are
    /// optional overrides.
    ///
    /// # Errors
    ///
    /// - [`LaterError::MissingApiCredentials`] if the key or secret is unset
    /// - [`LaterError::InvalidUrl`] if `READABILITY_API_URL` is not an
    ///   absolute URL
    /// - [`LaterError::HomeDir`] if no store override is given and the home
    ///   directory cannot be resolved
    pub fn from_env() -> Res<Self> {
        let api_key = env::var(API_KEY_VAR).unwrap_or_default();
        let api_secret = env::var(API_SECRET_VAR).unwrap_or_default();
        if api_key.is_empty() || api_secret.is_empty() {
            return Err(LaterError::MissingApiCredentials);
        }

        let api_base = env::var(API_URL_VAR)
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Url::parse(&api_base)?;

        let store_path = match env::var(STORE_PATH_VAR) {
            Ok(path) if !path.is_empty() => PathBuf::from(path),
            _ => default_store_path()?,
        };

        Ok(Self::new(api_key, api_secret, store_path, &api_base))
    }

    /// The application's consumer credentials.
    pub fn consumer(&self) -> TokenPair {
        TokenPair::new(&self.api_key, &self.api_secret)
    }
}
