//! Bulk resolution: turning an id list into an ordered stream of records.

use std::future::Future;

use futures::future::try_join_all;
use futures::stream::{self, BoxStream, StreamExt, TryStreamExt};
use tracing::debug;

use crate::error::ApiResult;

/// A stream of decoded records, in request order.
pub type ItemStream<'a, T> = BoxStream<'a, ApiResult<T>>;

/// How the chunks of a bulk lookup are dispatched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Resolution {
    /// One chunk at a time. The next request is only sent once the consumer
    /// has drained the previous chunk, so early termination saves requests.
    #[default]
    Sequential,
    /// All chunks in flight at once. Results are buffered and yielded in
    /// chunk order once every chunk has completed; the first failure fails
    /// the whole lookup.
    Concurrent,
}

/// Resolves `chunks` with `fetch` and flattens the results.
///
/// Items of chunk `n` always precede items of chunk `n + 1`, whatever order
/// the requests complete in. A chunk may yield fewer items than it had ids
/// when the server answers with partial content; nothing is padded.
pub fn resolve_chunks<'a, C, T, F, Fut>(
    chunks: Vec<C>,
    resolution: Resolution,
    fetch: F,
) -> ItemStream<'a, T>
where
    C: Send + 'a,
    T: Send + 'a,
    F: Fn(C) -> Fut + Send + 'a,
    Fut: Future<Output = ApiResult<Vec<T>>> + Send + 'a,
{
    debug!(chunks = chunks.len(), ?resolution, "resolving bulk lookup");
    match resolution {
        Resolution::Sequential => stream::iter(chunks)
            .then(fetch)
            .map_ok(|items| stream::iter(items.into_iter().map(Ok)))
            .try_flatten()
            .boxed(),
        Resolution::Concurrent => {
            let requests: Vec<Fut> = chunks.into_iter().map(fetch).collect();
            stream::once(try_join_all(requests))
                .map_ok(|batches| stream::iter(batches.into_iter().flatten().map(Ok)))
                .try_flatten()
                .boxed()
        }
    }
}
