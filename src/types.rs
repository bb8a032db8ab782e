use serde::{Deserialize, Serialize};

/// Access token and secret cached in the credential store.
///
/// An empty `access_token` means there is no saved session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(rename = "AccessToken", default)]
    pub access_token: String,
    #[serde(rename = "AccessTokenSecret", default)]
    pub access_token_secret: String,
}

impl Credentials {
    pub fn new(access_token: impl Into<String>, access_token_secret: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            access_token_secret: access_token_secret.into(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        !self.access_token.is_empty()
    }

    pub fn as_token_pair(&self) -> TokenPair {
        TokenPair::new(&self.access_token, &self.access_token_secret)
    }
}

/// An OAuth key/secret pair, used for both consumer and access credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    pub token: String,
    pub secret: String,
}

impl TokenPair {
    pub fn new(token: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            secret: secret.into(),
        }
    }
}
