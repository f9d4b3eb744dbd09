//! The endpoint contract and its shapes.
//!
//! An endpoint instance is a [`ClientSession`] wrapped in one of the shapes
//! below. The shape decides which fetch operations exist: [`Single`] and
//! [`ListAll`]/[`RawList`] have `get`, [`Enumerable`] has `ids`, `one`,
//! `many` and `all`.

mod enumerable;
mod list;
mod session;
mod single;
mod traits;

pub use enumerable::Enumerable;
pub use list::{ListAll, RawList};
pub use session::{ClientSession, EndpointBuilder, SessionContext};
pub use single::Single;
pub use traits::{Endpoint, EnumerableFetch, FromSession, ListFetch, SingleFetch};
