//! Current-location handling.
//!
//! The location is owned by whatever drives navigation (the platform router);
//! the shell only ever sees it as an explicitly passed [`Location`] value.
//! Each observation of a new location is tagged with a sequence number so
//! that results computed for a superseded location can be discarded.

use std::fmt;

/// A normalized URL path, e.g. `/` or `/nodes`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location(String);

impl Location {
    /// Normalize a raw location string.
    ///
    /// - query string and fragment are dropped
    /// - an empty path becomes `/`
    /// - a leading `/` is ensured
    /// - trailing slashes are dropped (except for the root itself)
    pub fn parse(raw: &str) -> Self {
        let path = raw
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim();

        let trimmed = path.trim_end_matches('/');
        if trimmed.is_empty() {
            return Self::root();
        }

        if trimmed.starts_with('/') {
            Self(trimmed.to_string())
        } else {
            Self(format!("/{trimmed}"))
        }
    }

    /// The root location `/`.
    pub fn root() -> Self {
        Self("/".to_string())
    }

    /// Build a location from router path segments (`["nodes"]` -> `/nodes`).
    pub fn from_segments<S: AsRef<str>>(segments: &[S]) -> Self {
        let joined = segments
            .iter()
            .map(AsRef::as_ref)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("/");
        Self::parse(&joined)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0 == "/"
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Location {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

/// A location paired with the sequence number it was observed at.
///
/// Sequence numbers are handed out by [`crate::core::ShellState::observe`]
/// and grow monotonically; a higher number always means a newer location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    pub seq: u64,
    pub location: Location,
}
