//! Options for requests.

mod inventory;
mod options;

pub use inventory::{
    OldInventoryOptions,
    InventoryOptions,
    InventoryOptionsBuilder,
    DEFAULT_APPID,
    DEFAULT_CONTEXTID,
    MAX_PAGE_SIZE,
};
pub use options::RequestOptions;
