use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    Res,
    config::Config,
    management::CredentialStore,
    prompt::CredentialPrompt,
    readability::{ReadabilityClient, auth, bookmarks},
    success,
};

/// Logs in (from the store or interactively) and bookmarks `url`.
///
/// Prints a success line on completion. Errors are returned to the caller,
/// which decides how to report them and with which exit code.
///
/// # Flow
///
/// 1. Load saved credentials from the configured store path
/// 2. If there are none, prompt for username/password and exchange them
/// 3. Submit the bookmark while showing a spinner
///
/// # Example Output
///
/// ```text
/// Username: alice
/// Password: secret1
/// [✓] Successfully bookmarked https://example.com/article
/// ```
pub async fn bookmark(config: &Config, url: &str, prompt: &mut impl CredentialPrompt) -> Res<()> {
    let client = ReadabilityClient::new(config);
    let store = CredentialStore::new(&config.store_path);

    let credentials = auth::login(&client, &store, prompt).await?;

    let pb = ProgressBar::new_spinner();
    pb.set_message(format!("Bookmarking {url}..."));
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }

    let result = bookmarks::add_bookmark(&client, &credentials, url).await;
    pb.finish_and_clear();
    result?;

    success!("Successfully bookmarked {}", url);
    Ok(())
}
