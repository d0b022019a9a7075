use super::{build_description_index, format_batch};
use crate::response::{Item, LegacyInventory, CurrentInventory};
use crate::types::DescriptionIndex;

/// A response body holding assets and their descriptions.
pub trait InventorySchema {
    /// Normalizes the assets in this body, in the order they were sent.
    fn format_items(&self) -> Vec<Item>;
}

impl InventorySchema for LegacyInventory {
    fn format_items(&self) -> Vec<Item> {
        // Descriptions are already keyed by class and instance.
        let descriptions = self.rg_descriptions
            .iter()
            .map(|(key, description)| (key.clone(), description.clone()))
            .collect::<DescriptionIndex>();
        
        format_batch(self.rg_inventory.values(), &descriptions)
    }
}

impl InventorySchema for CurrentInventory {
    fn format_items(&self) -> Vec<Item> {
        let descriptions = build_description_index(&self.descriptions);
        
        format_batch(&self.assets, &descriptions)
    }
}

/// Normalizes a response body from the legacy endpoint.
pub fn format_data_from_old_endpoint(body: &LegacyInventory) -> Vec<Item> {
    body.format_items()
}

/// Normalizes a response body from the current endpoint.
pub fn format_data_from_new_endpoint(body: &CurrentInventory) -> Vec<Item> {
    body.format_items()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    
    #[test]
    fn formats_legacy_fixture() {
        let body: LegacyInventory = serde_json::from_value(json!({
            "success": true,
            "rgInventory": {
                "a": { "id": "a", "classid": "1", "instanceid": "2", "amount": "1" },
            },
            "rgDescriptions": {
                "1_2": { "name": "Widget", "tags": [{ "category": "Type", "name": "Gadget" }] },
            },
        })).unwrap();
        let items = format_data_from_old_endpoint(&body);
        let details = items[0].details.as_ref().unwrap();
        
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id.as_deref(), Some("a"));
        assert_eq!(details.name.as_deref(), Some("Widget"));
        assert_eq!(details.tags.r#type.as_deref(), Some("Gadget"));
        assert_eq!(details.tags.category, None);
    }
    
    #[test]
    fn keeps_raw_records_as_received() {
        let asset = json!({ "amount": 1, "classid": 1, "id": "a", "instanceid": "2" });
        let description = json!({
            "actions": "",
            "name": "Widget",
            "tags": {
                "0": { "category": "Type", "name": "Gadget" },
            },
        });
        let body: LegacyInventory = serde_json::from_value(json!({
            "success": true,
            "rgInventory": { "a": asset },
            "rgDescriptions": { "1_2": description },
        })).unwrap();
        let items = format_data_from_old_endpoint(&body);
        let details = items[0].details.as_ref().unwrap();
        
        assert_eq!(items[0].amount.as_deref(), Some("1"));
        assert_eq!(items[0].class_id.as_deref(), Some("1"));
        assert_eq!(details.tags.r#type.as_deref(), Some("Gadget"));
        assert_eq!(details.link, None);
        assert_eq!(items[0].raw.base, asset);
        assert_eq!(items[0].raw.description.as_ref(), Some(&description));
        
        let serialized = serde_json::to_value(&items[0]).unwrap();
        
        assert_eq!(serialized["raw"]["base"], asset);
        assert_eq!(serialized["raw"]["description"], description);
    }
    
    #[test]
    fn both_schemas_produce_same_items() {
        let legacy: LegacyInventory = serde_json::from_str(include_str!("../response/fixtures/inventory_legacy.json")).unwrap();
        let current: CurrentInventory = serde_json::from_str(include_str!("../response/fixtures/inventory_current.json")).unwrap();
        let legacy_items = format_data_from_old_endpoint(&legacy);
        let current_items = format_data_from_new_endpoint(&current);
        
        assert_eq!(legacy_items.len(), 3);
        assert_eq!(current_items.len(), 3);
        
        for (legacy_item, current_item) in legacy_items.iter().zip(&current_items) {
            assert_eq!(legacy_item.id, current_item.id);
            assert_eq!(legacy_item.details, current_item.details);
            assert_eq!(legacy_item.description_not_exist, current_item.description_not_exist);
        }
        
        let redline = current_items[0].details.as_ref().unwrap();
        
        assert_eq!(redline.app_id, Some(730));
        assert_eq!(redline.tags.exterior.as_deref(), Some("Field-Tested"));
        assert_eq!(redline.tags.quality.as_deref(), Some("Normal"));
        assert_eq!(redline.image.as_deref(), Some("https://steamcommunity-a.akamaihd.net/economy/image/icon-ak47-large"));
        assert!(redline.link.as_deref().unwrap().starts_with("steam://rungame/730/"));
        assert!(current_items[2].description_not_exist);
    }
}
