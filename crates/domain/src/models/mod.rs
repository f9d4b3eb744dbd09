//! Response models for the endpoints the catalogue declares.
//!
//! Models are plain `serde` types. Optional fields are those the API only
//! returns for some records or with some key permissions.

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

pub use account::{Account, AccountAchievement, InventorySlot, WalletEntry};
pub use achievements::{Achievement, AchievementTier};
pub use build::Build;
pub use characters::{BuildTab, Character, CharacterCore, TabBuild};
pub use colors::{Color, ColorMaterial};
pub use continents::{Continent, Floor};
pub use dungeons::{Dungeon, DungeonPath, DungeonPathKind};
pub use files::File;
pub use guild::Guild;
pub use items::Item;
pub use quaggans::Quaggan;
pub use recipes::{Recipe, RecipeIngredient};
pub use wvw::{Match, TeamValues};
