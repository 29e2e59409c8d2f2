use crate::error::CoreError;
use crate::validation::{self, ValidationErrors};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Store-assigned identifier of a [`Link`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinkId(i64);

impl LinkId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl Display for LinkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for LinkId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Parses a path segment. Only `[0-9]+` that fits in an `i64` is accepted,
/// so signs and whitespace are rejected.
impl FromStr for LinkId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CoreError::InvalidLinkId(s.to_owned()));
        }

        s.parse::<i64>()
            .map(Self)
            .map_err(|_| CoreError::InvalidLinkId(s.to_owned()))
    }
}

/// A stored link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub id: LinkId,
    pub title: String,
    pub url: String,
    /// Set once by the store on insert.
    pub created_at: Timestamp,
}

/// The client-controlled part of a link, already validated.
///
/// Repositories only accept this type, so nothing reaches the store without
/// passing [`validation::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    title: String,
    url: String,
}

impl NewLink {
    /// Validates `title` and `url` and builds a `NewLink` from them.
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
    ) -> std::result::Result<Self, ValidationErrors> {
        let title = title.into();
        let url = url.into();
        validation::validate(&title, &url)?;
        Ok(Self { title, url })
    }

    /// Creates a `NewLink` without validation.
    ///
    /// Use this only for values that come from a trusted source, such as
    /// rows already read back from the store.
    pub fn new_unchecked(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Attaches the store-assigned fields.
    pub fn into_link(self, id: LinkId, created_at: Timestamp) -> Link {
        Link {
            id,
            title: self.title,
            url: self.url,
            created_at,
        }
    }
}
