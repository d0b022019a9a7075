//! Loads a Steam user's inventory and normalizes it into a flat list of [`Item`]s.
//! 
//! Inventories can be loaded from either the legacy `inventory/json` endpoint or the current
//! paginated `inventory` endpoint. Both response schemas are normalized into the same [`Item`]
//! shape.
//! 
//! ```no_run
//! use steam_user_inventory::{SteamUserInventory, InventoryOptions, EndpointMode};
//! 
//! # async fn run() -> Result<(), steam_user_inventory::Error> {
//! let inventory = SteamUserInventory::new()?;
//! let options = InventoryOptions::builder("76561198000000000")
//!     .appid(730)
//!     .contextid(2)
//!     .build();
//! let items = inventory.load_and_format(&options, EndpointMode::Current).await?;
//! 
//! println!("{} items in inventory", items.len());
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod helpers;
mod loader;
mod serialize;

pub mod enums;
pub mod normalize;
pub mod request;
pub mod response;
pub mod types;

pub use client::{HttpClient, HttpResponse, ReqwestClient};
pub use enums::{EndpointMode, Language};
pub use error::Error;
pub use loader::{
    SteamUserInventory,
    SteamUserInventoryBuilder,
    validate_params,
    validate_envelope,
    HOSTNAME,
};
pub use request::{InventoryOptions, OldInventoryOptions, RequestOptions};
pub use response::{Envelope, InventoryPage, Item};
pub use steamid_ng::SteamID;
