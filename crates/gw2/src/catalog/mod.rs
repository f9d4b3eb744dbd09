//! Endpoint declarations.
//!
//! Each submodule declares the descriptors for one area of the API and adds
//! the matching constructors to [`crate::Gw2Client`].

mod account;
mod achievements;
mod build;
mod characters;
mod colors;
mod continents;
mod dungeons;
mod files;
mod guild;
mod items;
mod quaggans;
mod recipes;
mod wvw;

pub use account::AccountEndpoint;
pub use characters::CharacterEndpoint;
pub use continents::ContinentEndpoint;
pub use guild::GuildSearch;
pub use recipes::RecipeQuery;
