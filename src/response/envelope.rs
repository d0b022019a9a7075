use super::{LegacyInventory, CurrentInventory, Item};
use crate::client::HttpResponse;
use crate::error::Error;
use crate::normalize::InventorySchema;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// A response whose body exists and declares success, parsed into `T`.
#[derive(Debug, PartialEq, Clone)]
pub struct Envelope<T> {
    /// The HTTP status of the response.
    pub status: StatusCode,
    /// The body exactly as it was received.
    pub raw: Value,
    /// The parsed body.
    pub body: T,
}

impl<T> Envelope<T>
where
    T: DeserializeOwned,
{
    /// Parses the body of an already validated response.
    pub(crate) fn parse(response: HttpResponse) -> Result<Self, Error> {
        let HttpResponse { status, body } = response;
        let raw = body.unwrap_or_default();
        let body = serde_json::from_value(raw.clone())?;
        
        Ok(Self {
            status,
            raw,
            body,
        })
    }
}

impl<T> Envelope<T>
where
    T: InventorySchema,
{
    /// Normalizes the items in this envelope.
    pub fn format_items(&self) -> Vec<Item> {
        self.body.format_items()
    }
}

/// A page loaded from either endpoint.
#[derive(Debug, PartialEq, Clone)]
pub enum InventoryPage {
    /// A response from the legacy endpoint.
    Legacy(Envelope<LegacyInventory>),
    /// A page from the current endpoint.
    Current(Envelope<CurrentInventory>),
}

impl InventoryPage {
    /// Normalizes the items on this page using the adapter for its schema.
    pub fn format_items(&self) -> Vec<Item> {
        match self {
            Self::Legacy(envelope) => envelope.format_items(),
            Self::Current(envelope) => envelope.format_items(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    
    #[test]
    fn parses_validated_response() {
        let response = HttpResponse {
            status: StatusCode::OK,
            body: Some(json!({
                "success": 1,
                "total_inventory_count": 1,
                "assets": [{ "assetid": "5", "classid": "1", "instanceid": "0", "amount": "1" }],
                "descriptions": [],
            })),
        };
        let envelope = Envelope::<CurrentInventory>::parse(response).unwrap();
        
        assert_eq!(envelope.body.total_inventory_count, 1);
        assert_eq!(envelope.body.last_asset_id(), Some("5"));
        assert_eq!(envelope.raw["success"], json!(1));
    }
    
    #[test]
    fn rejects_body_not_matching_schema() {
        let response = HttpResponse {
            status: StatusCode::OK,
            body: Some(json!({ "success": true, "assets": "nope" })),
        };
        
        assert!(matches!(
            Envelope::<CurrentInventory>::parse(response),
            Err(Error::Parse(_)),
        ));
    }
}
