// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error types.
//!
//! Most of the posting machinery is infallible: vetoes, redundant
//! removals and unknown items are silent no-ops. The only request the manager
//! refuses is one whose item is already being tracked.

use crate::domain::ItemId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Config Error: {0}")]
    Config(String),
    #[error("Post Error: {0}")]
    Post(#[from] PostError),
}

/// Reasons a [`crate::post::PostRequest`] is refused at the `post` boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PostError {
    /// The item is already queued or presented by this manager.
    #[error("item {0} is already queued or presented")]
    AlreadyTracked(ItemId),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
