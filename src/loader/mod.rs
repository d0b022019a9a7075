//! Loads inventories from the Steam Community inventory endpoints.

mod builder;
mod helpers;
mod user_inventory;

pub use builder::SteamUserInventoryBuilder;
pub use helpers::{validate_params, validate_envelope};
pub use user_inventory::SteamUserInventory;

/// The Steam Community hostname.
pub const HOSTNAME: &str = "https://steamcommunity.com";
