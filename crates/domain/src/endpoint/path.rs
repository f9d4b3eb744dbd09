//! Resolved endpoint paths.

use std::fmt;

use url::Url;

use crate::error::{DomainError, DomainResult};

/// A descriptor path with every placeholder filled in.
///
/// Segments are stored unencoded; [`ResourcePath::join`] percent-encodes them,
/// so a character name such as `Zojja Of Rata` or a value containing `/`
/// stays a single path segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourcePath {
    segments: Vec<String>,
}

impl ResourcePath {
    pub(crate) const fn from_segments(segments: Vec<String>) -> Self {
        Self { segments }
    }

    /// The unencoded path segments.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Returns a new path with `extra` segments appended.
    #[must_use]
    pub fn child<I, S>(&self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut segments = self.segments.clone();
        segments.extend(extra.into_iter().map(Into::into));
        Self { segments }
    }

    /// Appends this path to `base`, keeping any path the base already has.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::CannotBeABase`] if `base` cannot carry a path.
    pub fn join(&self, base: &Url) -> DomainResult<Url> {
        let mut url = base.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|()| DomainError::CannotBeABase(base.to_string()))?;
            path.pop_if_empty();
            path.extend(&self.segments);
        }
        Ok(url)
    }
}

impl fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("/"))
    }
}
