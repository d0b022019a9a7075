use crate::types::AppId;
use serde::Serialize;
use serde_json::Value;

pub const CATEGORY_TAG: &str = "Category";
pub const TYPE_TAG: &str = "Type";
pub const EXTERIOR_TAG: &str = "Exterior";
pub const QUALITY_TAG: &str = "Quality";
/// The tag categories copied onto an [`Item`]. Each is stored under its lower-cased name.
pub const AVAILABLE_TAGS: [&str; 4] = [
    CATEGORY_TAG,
    TYPE_TAG,
    EXTERIOR_TAG,
    QUALITY_TAG,
];

/// A normalized inventory item. Produced from either endpoint's response in the same shape.
#[derive(Debug, Serialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// The asset ID. Equal to `asset_id`.
    pub id: Option<String>,
    /// The asset ID.
    pub asset_id: Option<String>,
    /// The amount for stackable items.
    pub amount: Option<String>,
    /// The ID of the item's class.
    pub class_id: Option<String>,
    /// The ID of the item's class instance.
    pub instance_id: Option<String>,
    /// Fields taken from the item's description. `None` when the response had no description
    /// for this item.
    #[serde(flatten)]
    pub details: Option<ItemDetails>,
    /// Whether the response was missing a description for this item.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub description_not_exist: bool,
    /// The records this item was built from.
    pub raw: RawItem,
}

impl Item {
    /// The item's name, if it has a description.
    pub fn name(&self) -> Option<&str> {
        self.details.as_ref()?.name.as_deref()
    }
}

/// Fields of an [`Item`] taken from its description.
#[derive(Debug, Serialize, PartialEq, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ItemDetails {
    pub app_id: Option<AppId>,
    /// The name of the item.
    pub name: Option<String>,
    /// The market hash name. This is used to link to the item on the Steam Community Market.
    pub market_hash_name: Option<String>,
    /// Whether this item can be traded or not.
    pub tradable: bool,
    /// Whether this item is marketable or not.
    pub marketable: bool,
    /// How many days the item has left until it can be traded.
    pub market_tradable_restriction: Option<u32>,
    /// The link to inspect this item in game.
    pub link: Option<String>,
    /// URL of the large image.
    pub image_large: Option<String>,
    /// URL of the small image.
    pub image_small: Option<String>,
    /// URL of the image to display: the large image, or the small one when there is no large
    /// image.
    pub image: Option<String>,
    #[serde(flatten)]
    pub tags: ItemTags,
}

/// Tag values for the categories in [`AVAILABLE_TAGS`].
#[derive(Debug, Serialize, PartialEq, Eq, Clone, Default)]
pub struct ItemTags {
    pub category: Option<String>,
    #[serde(rename = "type")]
    pub r#type: Option<String>,
    pub exterior: Option<String>,
    pub quality: Option<String>,
}

impl ItemTags {
    /// Sets the value for `category`. Categories outside of [`AVAILABLE_TAGS`] are ignored.
    pub fn set(&mut self, category: &str, name: Option<String>) {
        let slot = match category {
            CATEGORY_TAG => &mut self.category,
            TYPE_TAG => &mut self.r#type,
            EXTERIOR_TAG => &mut self.exterior,
            QUALITY_TAG => &mut self.quality,
            _ => return,
        };
        
        *slot = name;
    }
}

/// The asset and description an [`Item`] was built from, exactly as they were received.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct RawItem {
    pub base: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Value>,
}
