//! Normalizes raw assets and descriptions from either inventory endpoint into [`Item`]s.

mod schema;

pub use schema::{InventorySchema, format_data_from_old_endpoint, format_data_from_new_endpoint};

use crate::helpers::{is_truthy, value_to_number};
use crate::response::{Item, ItemDetails, ItemTags, RawAsset, RawDescription, RawItem};
use crate::types::DescriptionIndex;

/// Base URL of the economy image CDN.
pub const IMAGE_CDN_URL: &str = "https://steamcommunity-a.akamaihd.net/economy/image/";
/// Name of the action holding an item's inspect link.
pub const INSPECT_ACTION_NAME: &str = "Inspect in Game...";

/// Builds the `"{classid}_{instanceid}"` key used to join assets to descriptions. `None` when
/// either part is missing or empty; such records cannot be matched.
pub fn class_instance_key(
    classid: Option<&str>,
    instanceid: Option<&str>,
) -> Option<String> {
    match (classid, instanceid) {
        (Some(classid), Some(instanceid)) if !classid.is_empty() && !instanceid.is_empty() => {
            Some(format!("{classid}_{instanceid}"))
        },
        _ => None,
    }
}

/// Gets the URL of the description's large or small image.
pub fn image_url(description: &RawDescription, large: bool) -> Option<String> {
    let icon = if large {
        &description.icon_url_large
    } else {
        &description.icon_url
    };
    
    icon.as_deref()
        .filter(|icon| !icon.is_empty())
        .map(|icon| format!("{IMAGE_CDN_URL}{icon}"))
}

/// Gets the link of the first "Inspect in Game..." action that has a link.
pub fn inspect_link(description: &RawDescription) -> Option<String> {
    description.actions
        .as_deref()?
        .iter()
        .find(|action| {
            action.name.as_deref() == Some(INSPECT_ACTION_NAME) &&
            action.link.as_deref().is_some_and(|link| !link.is_empty())
        })
        .and_then(|action| action.link.clone())
}

/// Builds an [`Item`] from an asset and its description. Items without a description are
/// flagged with `description_not_exist`.
pub fn format_item(asset: &RawAsset, description: Option<&RawDescription>) -> Item {
    let id = asset.asset_id().map(String::from);
    let details = description.map(format_details);
    
    Item {
        asset_id: id.clone(),
        id,
        amount: asset.amount.clone(),
        class_id: asset.classid.clone(),
        instance_id: asset.instanceid.clone(),
        description_not_exist: details.is_none(),
        details,
        raw: RawItem {
            base: asset.source.clone(),
            description: description.map(|description| description.source.clone()),
        },
    }
}

fn format_details(description: &RawDescription) -> ItemDetails {
    let image_large = image_url(description, true);
    let image_small = image_url(description, false);
    let mut tags = ItemTags::default();
    
    for tag in description.tags.iter().flatten() {
        if let Some(category) = &tag.category {
            tags.set(category, tag.tag_name().map(String::from));
        }
    }
    
    ItemDetails {
        app_id: description.appid.as_ref().and_then(value_to_number),
        name: description.name.clone(),
        market_hash_name: description.market_hash_name.clone(),
        tradable: description.tradable.as_ref().is_some_and(is_truthy),
        marketable: description.marketable.as_ref().is_some_and(is_truthy),
        market_tradable_restriction: description.market_tradable_restriction
            .as_ref()
            .and_then(value_to_number),
        link: inspect_link(description),
        image: image_large.clone().or_else(|| image_small.clone()),
        image_large,
        image_small,
        tags,
    }
}

/// Formats each asset with its description from `descriptions`. The output has one item per
/// asset in the same order.
pub fn format_batch<'a, I>(assets: I, descriptions: &DescriptionIndex) -> Vec<Item>
where
    I: IntoIterator<Item = &'a RawAsset>,
{
    assets
        .into_iter()
        .map(|asset| {
            let description = asset
                .class_instance_key()
                .and_then(|key| descriptions.get(&key));
            
            if description.is_none() {
                log::warn!(
                    "No description for asset {:?} ({:?}_{:?})",
                    asset.asset_id(),
                    asset.classid,
                    asset.instanceid,
                );
            }
            
            format_item(asset, description)
        })
        .collect()
}

/// Indexes descriptions by their `"{classid}_{instanceid}"` key. Later duplicates replace
/// earlier ones. Descriptions without a key are skipped.
pub fn build_description_index<'a, I>(descriptions: I) -> DescriptionIndex
where
    I: IntoIterator<Item = &'a RawDescription>,
{
    descriptions
        .into_iter()
        .filter_map(|description| {
            description
                .class_instance_key()
                .map(|key| (key, description.clone()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::{RawAction, RawTag};
    
    fn asset(id: &str, classid: &str, instanceid: &str) -> RawAsset {
        RawAsset {
            assetid: Some(id.into()),
            classid: Some(classid.into()),
            instanceid: Some(instanceid.into()),
            amount: Some("1".into()),
            ..Default::default()
        }
    }
    
    fn description(classid: &str, instanceid: &str, name: &str) -> RawDescription {
        RawDescription {
            classid: Some(classid.into()),
            instanceid: Some(instanceid.into()),
            name: Some(name.into()),
            ..Default::default()
        }
    }
    
    fn action(name: &str, link: Option<&str>) -> RawAction {
        RawAction {
            name: Some(name.into()),
            link: link.map(String::from),
            ..Default::default()
        }
    }
    
    #[test]
    fn builds_class_instance_key() {
        assert_eq!(class_instance_key(Some("1"), Some("2")).as_deref(), Some("1_2"));
        assert_eq!(class_instance_key(Some("1"), Some("0")).as_deref(), Some("1_0"));
        assert_eq!(class_instance_key(Some(""), Some("2")), None);
        assert_eq!(class_instance_key(Some("1"), None), None);
        assert_eq!(class_instance_key(None, None), None);
    }
    
    #[test]
    fn builds_image_urls() {
        let description = RawDescription {
            icon_url: Some("small".into()),
            ..Default::default()
        };
        
        assert_eq!(
            image_url(&description, false).as_deref(),
            Some("https://steamcommunity-a.akamaihd.net/economy/image/small"),
        );
        assert_eq!(image_url(&description, true), None);
    }
    
    #[test]
    fn gets_first_inspect_link() {
        let mut description = RawDescription {
            actions: Some(vec![
                action("Wiki", Some("https://example.com/wiki")),
                action("Inspect in Game...", None),
                action("Inspect in Game...", Some("steam://first")),
                action("Inspect in Game...", Some("steam://second")),
            ]),
            ..Default::default()
        };
        
        assert_eq!(inspect_link(&description).as_deref(), Some("steam://first"));
        
        description.actions = Some(Vec::new());
        
        assert_eq!(inspect_link(&description), None);
        
        description.actions = None;
        
        assert_eq!(inspect_link(&description), None);
    }
    
    #[test]
    fn formats_item_with_description() {
        let description = RawDescription {
            appid: Some("730".into()),
            icon_url: Some("small".into()),
            tradable: Some(1.into()),
            marketable: Some(0.into()),
            market_tradable_restriction: Some("7".into()),
            tags: Some(vec![
                RawTag {
                    category: Some("Exterior".into()),
                    localized_tag_name: Some("Minimal Wear".into()),
                    ..Default::default()
                },
                RawTag {
                    category: Some("Weapon".into()),
                    name: Some("AK-47".into()),
                    ..Default::default()
                },
            ]),
            ..description("1", "2", "AK-47 | Redline")
        };
        let item = format_item(&asset("10", "1", "2"), Some(&description));
        let details = item.details.as_ref().unwrap();
        
        assert_eq!(item.id.as_deref(), Some("10"));
        assert_eq!(item.asset_id, item.id);
        assert!(!item.description_not_exist);
        assert_eq!(details.app_id, Some(730));
        assert!(details.tradable);
        assert!(!details.marketable);
        assert_eq!(details.market_tradable_restriction, Some(7));
        assert_eq!(details.image, details.image_small);
        assert!(details.image_large.is_none());
        assert_eq!(details.tags.exterior.as_deref(), Some("Minimal Wear"));
        assert!(details.tags.category.is_none());
        assert_eq!(item.raw.description.as_ref(), Some(&description.source));
    }
    
    #[test]
    fn formats_item_without_description() {
        let item = format_item(&asset("10", "1", "2"), None);
        
        assert!(item.description_not_exist);
        assert!(item.details.is_none());
        assert!(item.raw.description.is_none());
        assert_eq!(item.class_id.as_deref(), Some("1"));
    }
    
    #[test]
    fn formats_batch_in_asset_order() {
        let assets = vec![
            asset("3", "1", "0"),
            asset("1", "9", "9"),
            asset("2", "1", "0"),
            RawAsset {
                classid: None,
                ..asset("4", "1", "0")
            },
        ];
        let index = build_description_index(&[description("1", "0", "Key")]);
        let items = format_batch(&assets, &index);
        let ids = items.iter().map(|item| item.id.as_deref().unwrap()).collect::<Vec<_>>();
        
        assert_eq!(items.len(), assets.len());
        assert_eq!(ids, vec!["3", "1", "2", "4"]);
        assert_eq!(items[0].name(), Some("Key"));
        assert!(items[1].description_not_exist);
        assert_eq!(items[2].name(), Some("Key"));
        assert!(items[3].description_not_exist);
    }
    
    #[test]
    fn later_duplicate_descriptions_win() {
        let index = build_description_index(&[
            description("1", "0", "First"),
            RawDescription {
                classid: None,
                ..description("1", "0", "Unkeyed")
            },
            description("1", "0", "Second"),
        ]);
        
        assert_eq!(index.len(), 1);
        assert_eq!(index["1_0"].name.as_deref(), Some("Second"));
    }
}
