//! # CLI Module
//!
//! Command implementations for the `later` binary. The binary parses its
//! arguments and builds the [`crate::config::Config`]; everything after that
//! happens here, on top of the [`crate::readability`] client and the
//! [`crate::management`] credential store.
//!
//! ## Usage
//!
//! ```bash
//! later https://example.com/article   # bookmark a URL, logging in if needed
//! ```
//!
//! ## Output
//!
//! Status lines use the crate's `success!`/`warning!`/`error!` macros; the
//! bookmark request shows a spinner while it is in flight.

mod bookmark;

pub use bookmark::bookmark;
