//! Endpoint descriptors.
//!
//! A descriptor is a `const` value declared once per remote resource family.
//! It names the path template, the query parameter used for bulk id lookups
//! and whether the remote side accepts `ids=all`.

use std::fmt;

use crate::endpoint::ResourcePath;
use crate::error::{DomainError, DomainResult};

/// The query parameter used for bulk id lookups unless a descriptor overrides it.
pub const DEFAULT_IDS_PARAM: &str = "ids";

/// Advisory cache lifetime in seconds for descriptors that do not set one.
const DEFAULT_CACHE_HINT_SECS: u64 = 5 * 60;

/// How a single record is addressed on an enumerable endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdLookup {
    /// `GET /path?id=<id>` and `GET /path?<ids_param>=a,b,c`.
    Query,
    /// `GET /path/<id>/<suffix>`; no bulk parameter exists.
    PathSuffix(&'static str),
}

/// Fetch surface of an endpoint, reported by each shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointShape {
    /// One record per request.
    Single,
    /// The whole collection of structured records in one request.
    List,
    /// The whole collection of bare strings or numbers in one request.
    RawList,
    /// Id enumeration plus bulk hydration.
    Enumerable,
    /// Enumerable, and the remote side accepts `ids=all`.
    AllIds,
}

impl fmt::Display for EndpointShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Single => "single",
            Self::List => "list",
            Self::RawList => "raw-list",
            Self::Enumerable => "enumerable",
            Self::AllIds => "all-ids",
        };
        f.write_str(name)
    }
}

/// Static metadata identifying one remote resource family.
///
/// `path` is relative to the API base URL and may contain `{}` placeholders
/// that are filled positionally by [`EndpointDescriptor::resolve`].
///
/// ```
/// use gw2_domain::endpoint::EndpointDescriptor;
///
/// const FLOORS: EndpointDescriptor = EndpointDescriptor::new("continents/{}/floors");
/// let path = FLOORS.resolve([1]).unwrap();
/// assert_eq!(path.to_string(), "continents/1/floors");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointDescriptor {
    path: &'static str,
    ids_param: &'static str,
    cache_hint_secs: Option<u64>,
    all_ids: bool,
    lookup: IdLookup,
}

impl EndpointDescriptor {
    /// Creates a descriptor with the default `ids` parameter and query lookup.
    #[must_use]
    pub const fn new(path: &'static str) -> Self {
        Self {
            path,
            ids_param: DEFAULT_IDS_PARAM,
            cache_hint_secs: Some(DEFAULT_CACHE_HINT_SECS),
            all_ids: false,
            lookup: IdLookup::Query,
        }
    }

    /// Overrides the bulk id parameter name (e.g. `tabs`).
    #[must_use]
    pub const fn with_ids_param(mut self, ids_param: &'static str) -> Self {
        self.ids_param = ids_param;
        self
    }

    /// Sets the advisory cache lifetime. `None` means "do not cache".
    #[must_use]
    pub const fn with_cache_hint(mut self, secs: Option<u64>) -> Self {
        self.cache_hint_secs = secs;
        self
    }

    /// Marks the endpoint as accepting `<ids_param>=all`.
    #[must_use]
    pub const fn with_all_ids(mut self) -> Self {
        self.all_ids = true;
        self
    }

    /// Addresses records as `/<id>/<suffix>` instead of `?id=<id>`.
    #[must_use]
    pub const fn with_path_lookup(mut self, suffix: &'static str) -> Self {
        self.lookup = IdLookup::PathSuffix(suffix);
        self
    }

    /// The path template.
    #[must_use]
    pub const fn path(&self) -> &'static str {
        self.path
    }

    /// The query parameter used for bulk lookups.
    #[must_use]
    pub const fn ids_param(&self) -> &'static str {
        self.ids_param
    }

    /// Advisory cache lifetime in seconds. Not used by the client itself.
    #[must_use]
    pub const fn cache_hint_secs(&self) -> Option<u64> {
        self.cache_hint_secs
    }

    /// Whether `<ids_param>=all` is accepted.
    #[must_use]
    pub const fn supports_all_ids(&self) -> bool {
        self.all_ids
    }

    /// How single records are addressed.
    #[must_use]
    pub const fn lookup(&self) -> IdLookup {
        self.lookup
    }

    /// Number of `{}` placeholders in the template.
    #[must_use]
    pub fn placeholder_count(&self) -> usize {
        self.path.split('/').filter(|part| *part == "{}").count()
    }

    /// Fills the template's placeholders with `segments`, in order.
    ///
    /// Segment values are kept verbatim; percent-encoding happens when the
    /// path is joined onto a base URL.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::SegmentCount`] if the number of values does not
    /// match the number of placeholders, and [`DomainError::EmptySegment`] if
    /// any value is empty, and [`DomainError::DotSegment`] if any value is
    /// `.` or `..`.
    pub fn resolve<I, S>(&self, segments: I) -> DomainResult<ResourcePath>
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        let values: Vec<String> = segments.into_iter().map(|s| s.to_string()).collect();
        let expected = self.placeholder_count();
        if values.len() != expected {
            return Err(DomainError::SegmentCount {
                template: self.path,
                expected,
                actual: values.len(),
            });
        }

        let mut values = values.into_iter();
        let mut resolved = Vec::new();
        for part in self.path.split('/').filter(|part| !part.is_empty()) {
            if part == "{}" {
                // Count was checked above.
                let Some(value) = values.next() else {
                    break;
                };
                if value.is_empty() {
                    return Err(DomainError::EmptySegment(self.path));
                }
                if value == "." || value == ".." {
                    return Err(DomainError::DotSegment {
                        template: self.path,
                        value,
                    });
                }
                resolved.push(value);
            } else {
                resolved.push(part.to_string());
            }
        }
        Ok(ResourcePath::from_segments(resolved))
    }
}
