//! later: save URLs to a Readability reading list from the command line.
//!
//! The library holds everything the `later` binary does between parsing its
//! single URL argument and printing the outcome: configuration, the local
//! credential store, OAuth 1.0a request signing and the two Readability API
//! calls (xAuth token exchange and bookmark creation).
//!
//! # Modules
//!
//! - `cli` - Command implementations that print progress and results
//! - `config` - Environment loading and the explicit [`config::Config`]
//! - `error` - The crate-wide [`error::LaterError`]
//! - `management` - The `~/.later` credential store
//! - `oauth` - OAuth 1.0a HMAC-SHA1 signing
//! - `prompt` - Interactive username/password input
//! - `readability` - Readability API client, login and bookmarks
//! - `types` - Data structures shared between modules
//! - `utils` - Nonce, timestamp and encoding helpers
//!
//! # Example
//!
//! ```
//! use later::{config, readability};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> later::Res<()> {
//!     let config = config::Config::from_env()?;
//!     let client = readability::ReadabilityClient::new(&config);
//!     // login, then add_bookmark...
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod management;
pub mod oauth;
pub mod prompt;
pub mod readability;
pub mod types;
pub mod utils;

/// Result alias used across the crate.
///
/// Every fallible operation reports a [`error::LaterError`], so callers can
/// match on the failure kind (authentication, conflict, usage...) instead of
/// inspecting message strings.
pub type Res<T> = std::result::Result<T, error::LaterError>;

/// Prints a success message with a green checkmark.
///
/// ```
/// success!("Successfully bookmarked {}", url);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// The process terminates with exit code 1 right after printing, so this is
/// only meant for the command layer where nothing is left to clean up.
///
/// ```
/// error!("Failed to save credentials: {}", err);
/// // Program exits here
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// ```
/// warning!("Ignoring unreadable credential file: {}", err);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
