//! OAuth 1.0a request signing (RFC 5849) with HMAC-SHA1.
//!
//! Readability authenticates every API call with an `Authorization: OAuth ...`
//! header. The signature covers the HTTP method, the normalized request URL,
//! the `oauth_*` protocol parameters, any query parameters and the form body.
//! It is keyed with the consumer secret and, once the user has logged in, the
//! access token secret.

use base64::{Engine, engine::general_purpose::STANDARD};
use hmac::{Hmac, Mac};
use sha1::Sha1;
use url::Url;

use crate::{Res, types::TokenPair, utils};

type HmacSha1 = Hmac<Sha1>;

pub const SIGNATURE_METHOD: &str = "HMAC-SHA1";
pub const OAUTH_VERSION: &str = "1.0";

/// Builds the `Authorization` header for a request with a fresh nonce and
/// the current timestamp.
///
/// # Arguments
///
/// * `method` - HTTP method, e.g. `POST`
/// * `url` - Absolute request URL
/// * `consumer` - Application key and secret
/// * `token` - Access token and secret, `None` for the initial token exchange
/// * `params` - Form body parameters, which are part of the signature
pub fn authorization_header(
    method: &str,
    url: &str,
    consumer: &TokenPair,
    token: Option<&TokenPair>,
    params: &[(&str, &str)],
) -> Res<String> {
    sign_with(
        method,
        url,
        consumer,
        token,
        params,
        &utils::generate_nonce(),
        utils::timestamp(),
    )
}

/// Same as [`authorization_header`] with a caller-supplied nonce and timestamp.
pub fn sign_with(
    method: &str,
    url: &str,
    consumer: &TokenPair,
    token: Option<&TokenPair>,
    params: &[(&str, &str)],
    nonce: &str,
    timestamp: i64,
) -> Res<String> {
    let url = Url::parse(url)?;

    let mut oauth_params = vec![
        ("oauth_consumer_key".to_string(), consumer.token.clone()),
        ("oauth_nonce".to_string(), nonce.to_string()),
        ("oauth_signature_method".to_string(), SIGNATURE_METHOD.to_string()),
        ("oauth_timestamp".to_string(), timestamp.to_string()),
    ];
    if let Some(token) = token {
        oauth_params.push(("oauth_token".to_string(), token.token.clone()));
    }
    oauth_params.push(("oauth_version".to_string(), OAUTH_VERSION.to_string()));

    let mut signed_params: Vec<(String, String)> = oauth_params.clone();
    signed_params.extend(url.query_pairs().map(|(k, v)| (k.into_owned(), v.into_owned())));
    signed_params.extend(params.iter().map(|(k, v)| (k.to_string(), v.to_string())));

    let base = signature_base_string(method, &url, &signed_params);
    let token_secret = token.map(|t| t.secret.as_str()).unwrap_or_default();
    let signature = sign(&base, &consumer.secret, token_secret);

    oauth_params.push(("oauth_signature".to_string(), signature));
    oauth_params.sort();

    let fields: Vec<String> = oauth_params
        .iter()
        .map(|(k, v)| format!("{}=\"{}\"", utils::percent_encode(k), utils::percent_encode(v)))
        .collect();

    Ok(format!("OAuth {}", fields.join(", ")))
}

/// The signature base string: `METHOD&enc(base_url)&enc(normalized_params)`.
pub fn signature_base_string(method: &str, url: &Url, params: &[(String, String)]) -> String {
    let mut encoded: Vec<(String, String)> = params
        .iter()
        .map(|(k, v)| (utils::percent_encode(k), utils::percent_encode(v)))
        .collect();
    encoded.sort();

    let normalized = encoded
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");

    format!(
        "{}&{}&{}",
        method.to_uppercase(),
        utils::percent_encode(&base_url(url)),
        utils::percent_encode(&normalized)
    )
}

/// Scheme, host, non-default port and path; query and fragment are dropped.
pub fn base_url(url: &Url) -> String {
    let mut base = format!(
        "{}://{}",
        url.scheme(),
        url.host_str().unwrap_or_default().to_lowercase()
    );
    if let Some(port) = url.port() {
        base.push_str(&format!(":{port}"));
    }
    base.push_str(url.path());
    base
}

fn sign(base_string: &str, consumer_secret: &str, token_secret: &str) -> String {
    let key = format!(
        "{}&{}",
        utils::percent_encode(consumer_secret),
        utils::percent_encode(token_secret)
    );
    let mut mac =
        HmacSha1::new_from_slice(key.as_bytes()).expect("HMAC accepts keys of any length");
    mac.update(base_string.as_bytes());
    STANDARD.encode(mac.finalize().into_bytes())
}
