//! Crate-wide error type.
//!
//! Most failures in the hub degrade to a safe default before they reach the
//! user; this enum is what the lower layers propagate until that happens.

use thiserror::Error;

/// Errors raised while loading configuration, parsing game URLs, or
/// talking to the persisted key-value store.
#[derive(Debug, Error)]
pub enum HubError {
    /// The static catalog configuration could not be parsed.
    #[error("invalid catalog configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// A game's target URL is not an absolute URL.
    #[error("invalid game url `{url}`: {source}")]
    GameUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The backing store refused a read or write.
    #[error("storage error for `{key}`: {reason}")]
    Storage { key: String, reason: String },

    /// A persisted entry exists but does not hold a list of ids.
    #[error("malformed value stored under `{key}`")]
    MalformedValue { key: String },
}

/// Shorthand used throughout the crate.
pub type Result<T> = std::result::Result<T, HubError>;
