//! Endpoint ids, id selections and request chunking.

use std::fmt::Display;

use serde::de::DeserializeOwned;

/// Largest number of ids the API accepts in one `ids` parameter.
pub const MAX_IDS_PER_REQUEST: usize = 200;

/// Literal value selecting a whole collection in one request.
pub const ALL_IDS: &str = "all";

/// A key on an enumerable endpoint: numeric ids, or names such as character
/// names and guild ids.
pub trait EndpointId: Display + DeserializeOwned + Clone + Send + Sync + 'static {}

impl<T> EndpointId for T where T: Display + DeserializeOwned + Clone + Send + Sync + 'static {}

/// Which records a bulk lookup should return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdSelection<Id> {
    /// These ids, in this order.
    Ids(Vec<Id>),
    /// The whole collection in one request (`ids=all`).
    All,
}

impl<Id> From<Vec<Id>> for IdSelection<Id> {
    fn from(ids: Vec<Id>) -> Self {
        Self::Ids(ids)
    }
}

impl<Id: Clone> From<&[Id]> for IdSelection<Id> {
    fn from(ids: &[Id]) -> Self {
        Self::Ids(ids.to_vec())
    }
}

/// Joins ids into the comma separated form the API expects.
#[must_use]
pub fn join_ids<Id: Display>(ids: &[Id]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Splits `ids` into consecutive chunks of at most `size` ids.
///
/// Chunks partition the input in order. A `size` of zero is treated as one.
#[must_use]
pub fn chunk_ids<Id>(ids: &[Id], size: usize) -> Vec<&[Id]> {
    ids.chunks(size.max(1)).collect()
}

/// Number of requests needed for `count` ids at `size` ids per request.
#[must_use]
pub const fn chunk_count(count: usize, size: usize) -> usize {
    let size = if size == 0 { 1 } else { size };
    count.div_ceil(size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_join_ids() {
        assert_eq!(join_ids(&[1, 2, 3]), "1,2,3");
        assert_eq!(join_ids(&["a", "b"]), "a,b");
        assert_eq!(join_ids::<u32>(&[]), "");
    }

    #[test]
    fn test_chunking_partitions_in_order() {
        let ids: Vec<u32> = (0..450).collect();
        let chunks = chunk_ids(&ids, MAX_IDS_PER_REQUEST);

        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks.len(), chunk_count(ids.len(), MAX_IDS_PER_REQUEST));
        assert!(chunks.iter().all(|c| c.len() <= MAX_IDS_PER_REQUEST));
        assert_eq!(chunks[2].len(), 50);

        let rejoined: Vec<u32> = chunks.concat();
        assert_eq!(rejoined, ids);
    }

    #[test]
    fn test_chunk_counts_at_boundaries() {
        for (n, expected) in [(0, 0), (1, 1), (199, 1), (200, 1), (201, 2), (400, 2), (401, 3)] {
            let ids: Vec<usize> = (0..n).collect();
            assert_eq!(chunk_ids(&ids, 200).len(), expected, "n = {n}");
            assert_eq!(chunk_count(n, 200), expected, "n = {n}");
        }
    }

    #[test]
    fn test_zero_chunk_size_is_one() {
        let ids = [1, 2, 3];
        assert_eq!(chunk_ids(&ids, 0).len(), 3);
        assert_eq!(chunk_count(3, 0), 3);
    }

    #[test]
    fn test_selection_from_vec() {
        let selection: IdSelection<u32> = vec![1, 2].into();
        assert_eq!(selection, IdSelection::Ids(vec![1, 2]));
    }
}
