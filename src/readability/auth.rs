use reqwest::StatusCode;

use crate::{
    Res,
    error::LaterError,
    management::CredentialStore,
    prompt::CredentialPrompt,
    readability::ReadabilityClient,
    types::Credentials,
    utils,
};

/// Resolves the credentials for this run.
///
/// Saved credentials with a non-empty access token are returned as they are,
/// without asking the server whether they are still valid. Otherwise the user
/// is asked for a username and password, which are exchanged for an access
/// token that is then written to the store.
///
/// # Arguments
///
/// * `client` - Readability client carrying the consumer credentials
/// * `store` - Credential store to read from and, after a login, write to
/// * `prompt` - Source of the username and password
///
/// # Errors
///
/// - [`LaterError::Authentication`] if the server rejects the login
/// - [`LaterError::Io`] if reading the prompt or writing the store fails
/// - [`LaterError::Http`] on network failures
///
/// The username and password only live for the duration of this call.
pub async fn login(
    client: &ReadabilityClient,
    store: &CredentialStore,
    prompt: &mut impl CredentialPrompt,
) -> Res<Credentials> {
    let saved = store.load().await;
    if saved.is_authenticated() {
        return Ok(saved);
    }

    let username = prompt.ask("Username: ")?;
    let password = prompt.ask("Password: ")?;

    let credentials = request_access_token(client, &username, &password).await?;
    store.save(&credentials).await?;

    Ok(credentials)
}

/// Exchanges a username and password for an access token (xAuth).
///
/// The request is signed with the consumer credentials only, since no token
/// exists yet. Any status other than 200 is reported as a failed login.
pub async fn request_access_token(
    client: &ReadabilityClient,
    username: &str,
    password: &str,
) -> Res<Credentials> {
    let response = client
        .signed_post(
            client.access_token_url(),
            None,
            &[
                ("x_auth_username", username),
                ("x_auth_password", password),
                ("x_auth_mode", "client_auth"),
            ],
        )
        .await?;

    if response.status() != StatusCode::OK {
        return Err(LaterError::Authentication);
    }

    let body = response.text().await?;
    parse_token_response(&body)
}

/// Extracts `oauth_token` and `oauth_token_secret` from a form-encoded body.
pub fn parse_token_response(body: &str) -> Res<Credentials> {
    let token = utils::form_value(body, "oauth_token").unwrap_or_default();
    if token.is_empty() {
        return Err(LaterError::InvalidResponse(
            "token response has no oauth_token".to_string(),
        ));
    }
    let secret = utils::form_value(body, "oauth_token_secret").unwrap_or_default();

    Ok(Credentials::new(token, secret))
}
