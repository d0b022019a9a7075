use super::{RawAsset, RawDescription};
use crate::helpers::is_truthy;
use crate::serialize;
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

/// Body of a response from the legacy `/profiles/{steamid}/inventory/json` endpoint.
#[derive(Debug, Deserialize, PartialEq, Clone, Default)]
pub struct LegacyInventory {
    /// Assets keyed by asset ID, in the order they were sent.
    #[serde(rename = "rgInventory", default)]
    #[serde(deserialize_with = "serialize::map_or_empty_seq")]
    pub rg_inventory: IndexMap<String, RawAsset>,
    /// Descriptions keyed by `"{classid}_{instanceid}"`.
    #[serde(rename = "rgDescriptions", default)]
    #[serde(deserialize_with = "serialize::map_or_empty_seq")]
    pub rg_descriptions: IndexMap<String, RawDescription>,
    /// Whether the inventory continues past this response.
    #[serde(default)]
    pub more: Option<Value>,
    /// Where the next response would start. `false` when there is none.
    #[serde(default)]
    pub more_start: Option<Value>,
}

impl LegacyInventory {
    /// Whether the inventory has more items than this response holds.
    pub fn has_more(&self) -> bool {
        self.more.as_ref().is_some_and(is_truthy)
    }
}

/// Body of a response from the current `/inventory/{steamid}` endpoint.
#[derive(Debug, Deserialize, PartialEq, Clone, Default)]
pub struct CurrentInventory {
    /// The total number of items in the inventory across all pages.
    #[serde(default)]
    pub total_inventory_count: u64,
    #[serde(default)]
    pub assets: Vec<RawAsset>,
    #[serde(default)]
    pub descriptions: Vec<RawDescription>,
    /// The ID of the last asset on this page, sent when more pages follow.
    #[serde(default)]
    #[serde(deserialize_with = "serialize::option_string_or_number")]
    pub last_assetid: Option<String>,
    /// Whether more pages follow this one.
    #[serde(default)]
    pub more_items: Option<Value>,
}

impl CurrentInventory {
    /// Whether more pages follow this one.
    pub fn has_more(&self) -> bool {
        self.more_items.as_ref().is_some_and(is_truthy)
    }
    
    /// The asset ID of the last asset on this page. The next page starts after it.
    pub fn last_asset_id(&self) -> Option<&str> {
        self.assets.last()?.assetid.as_deref()
    }
}
