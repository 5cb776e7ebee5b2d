//! # Userdesk
//!
//! `userdesk` is a console for administering the users of a remote user-directory
//! REST API. It signs operators in and up, keeps the session token in a small
//! key-value store, and drives a paginated user table with edit and delete actions.
//!
//! ## Flows
//!
//! 1. **Sign up:** `POST /register`. On success the submitted credentials are parked
//!    as *pending credentials* and the operator is sent to the sign-in page.
//! 2. **Sign in:** the sign-in form consumes the pending credentials exactly once to
//!    pre-fill itself, then `POST /login`. The returned token is persisted.
//! 3. **User management:** guarded by the presence of the session token. Loads one
//!    page at a time and applies edits and deletes to the local page after the
//!    server acknowledges them.
//!
//! The remote API is the only authority; nothing here revalidates the token.

pub mod api;
pub mod cli;
pub mod config;
pub mod features;
pub mod notify;
pub mod routes;
pub mod storage;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub static APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
