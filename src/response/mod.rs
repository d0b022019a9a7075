//! Response types.

mod envelope;
mod inventory;
mod item;
mod raw;

pub use envelope::{Envelope, InventoryPage};
pub use inventory::{LegacyInventory, CurrentInventory};
pub use item::{Item, ItemDetails, ItemTags, RawItem, AVAILABLE_TAGS};
pub use raw::{RawAsset, RawDescription, RawAction, RawTag};
