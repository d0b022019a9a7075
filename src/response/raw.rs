//! Raw asset and description records as sent by both inventory endpoints.

use crate::serialize;
use serde::Deserialize;
use serde_json::Value;

/// One inventory slot. The legacy endpoint identifies it by `id`, the current endpoint by
/// `assetid`.
#[derive(Debug, Deserialize, PartialEq, Clone, Default)]
#[serde(try_from = "Value")]
pub struct RawAsset {
    /// The asset ID from the legacy endpoint.
    pub id: Option<String>,
    /// The asset ID from the current endpoint.
    pub assetid: Option<String>,
    /// The ID of the item's class.
    pub classid: Option<String>,
    /// The ID of the item's class instance.
    pub instanceid: Option<String>,
    /// The amount for stackable items.
    pub amount: Option<String>,
    /// The record exactly as it was received.
    pub source: Value,
}

#[derive(Deserialize)]
struct AssetFields {
    #[serde(default, deserialize_with = "serialize::option_string_or_number")]
    id: Option<String>,
    #[serde(default, deserialize_with = "serialize::option_string_or_number")]
    assetid: Option<String>,
    #[serde(default, deserialize_with = "serialize::option_string_or_number")]
    classid: Option<String>,
    #[serde(default, deserialize_with = "serialize::option_string_or_number")]
    instanceid: Option<String>,
    #[serde(default, deserialize_with = "serialize::option_string_or_number")]
    amount: Option<String>,
}

impl TryFrom<Value> for RawAsset {
    type Error = serde_json::Error;
    
    fn try_from(source: Value) -> Result<Self, Self::Error> {
        let AssetFields {
            id,
            assetid,
            classid,
            instanceid,
            amount,
        } = AssetFields::deserialize(&source)?;
        
        Ok(Self {
            id,
            assetid,
            classid,
            instanceid,
            amount,
            source,
        })
    }
}

impl RawAsset {
    /// The asset's ID, preferring `id` over `assetid`.
    pub fn asset_id(&self) -> Option<&str> {
        non_empty(&self.id).or_else(|| non_empty(&self.assetid))
    }
    
    /// The `"{classid}_{instanceid}"` key joining this asset to its description.
    pub fn class_instance_key(&self) -> Option<String> {
        crate::normalize::class_instance_key(
            self.classid.as_deref(),
            self.instanceid.as_deref(),
        )
    }
}

/// Metadata shared by every asset of an item class. `appid`, the flags and the trade
/// restriction are sent as strings by one endpoint and numbers by the other, so they are kept as
/// plain JSON values.
#[derive(Debug, Deserialize, PartialEq, Clone, Default)]
#[serde(try_from = "Value")]
pub struct RawDescription {
    pub appid: Option<Value>,
    pub classid: Option<String>,
    pub instanceid: Option<String>,
    /// The name of the item.
    pub name: Option<String>,
    /// The name of the item on the Steam Community Market.
    pub market_name: Option<String>,
    /// The market hash name. This is used to link to the item on the Steam Community Market.
    pub market_hash_name: Option<String>,
    pub tradable: Option<Value>,
    pub marketable: Option<Value>,
    /// How many days the item has left until it can be traded.
    pub market_tradable_restriction: Option<Value>,
    /// The path of the icon on the economy image CDN.
    pub icon_url: Option<String>,
    /// The path of the large icon on the economy image CDN.
    pub icon_url_large: Option<String>,
    pub actions: Option<Vec<RawAction>>,
    pub tags: Option<Vec<RawTag>>,
    /// The record exactly as it was received, including fields such as `descriptions`,
    /// `name_color` or `app_data`.
    pub source: Value,
}

#[derive(Deserialize)]
struct DescriptionFields {
    #[serde(default)]
    appid: Option<Value>,
    #[serde(default, deserialize_with = "serialize::option_string_or_number")]
    classid: Option<String>,
    #[serde(default, deserialize_with = "serialize::option_string_or_number")]
    instanceid: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    market_name: Option<String>,
    #[serde(default)]
    market_hash_name: Option<String>,
    #[serde(default)]
    tradable: Option<Value>,
    #[serde(default)]
    marketable: Option<Value>,
    #[serde(default)]
    market_tradable_restriction: Option<Value>,
    #[serde(default)]
    icon_url: Option<String>,
    #[serde(default)]
    icon_url_large: Option<String>,
    #[serde(default, deserialize_with = "serialize::option_seq_or_map")]
    actions: Option<Vec<RawAction>>,
    #[serde(default, deserialize_with = "serialize::option_seq_or_map")]
    tags: Option<Vec<RawTag>>,
}

impl TryFrom<Value> for RawDescription {
    type Error = serde_json::Error;
    
    fn try_from(source: Value) -> Result<Self, Self::Error> {
        let DescriptionFields {
            appid,
            classid,
            instanceid,
            name,
            market_name,
            market_hash_name,
            tradable,
            marketable,
            market_tradable_restriction,
            icon_url,
            icon_url_large,
            actions,
            tags,
        } = DescriptionFields::deserialize(&source)?;
        
        Ok(Self {
            appid,
            classid,
            instanceid,
            name,
            market_name,
            market_hash_name,
            tradable,
            marketable,
            market_tradable_restriction,
            icon_url,
            icon_url_large,
            actions,
            tags,
            source,
        })
    }
}

impl RawDescription {
    /// The `"{classid}_{instanceid}"` key assets are joined on.
    pub fn class_instance_key(&self) -> Option<String> {
        crate::normalize::class_instance_key(
            self.classid.as_deref(),
            self.instanceid.as_deref(),
        )
    }
}

/// An action, such as inspecting the item in game.
#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Default)]
pub struct RawAction {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

/// A tag e.g. for Counter-Strike 2 items: "Field-Tested" under the "Exterior" category.
#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Default)]
pub struct RawTag {
    #[serde(default)]
    pub category: Option<String>,
    /// The name of this tag as sent by the legacy endpoint.
    #[serde(default)]
    pub name: Option<String>,
    /// The name of this tag as sent by the current endpoint.
    #[serde(default)]
    pub localized_tag_name: Option<String>,
}

impl RawTag {
    /// The name of this tag from whichever field the endpoint used.
    pub fn tag_name(&self) -> Option<&str> {
        self.name.as_deref().or(self.localized_tag_name.as_deref())
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}
