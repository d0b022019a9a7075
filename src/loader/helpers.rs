use crate::client::HttpResponse;
use crate::error::Error;
use crate::helpers::is_truthy;
use crate::request::InventoryOptions;
use crate::types::{AppId, ContextId};
use steamid_ng::SteamID;
use serde_json::Value;
use url::Url;

/// Checks that `steamid` is present and numeric. App and context IDs are numeric by type.
pub fn validate_params(steamid: &str) -> Result<SteamID, Error> {
    if steamid.is_empty() {
        return Err(Error::Parameter("steamid is required"));
    }
    
    let steamid = steamid.parse::<u64>()
        .map_err(|_| Error::Parameter("steamid must be a number"))?;
    
    Ok(SteamID::from(steamid))
}

/// Checks that the response has a JSON object body with a truthy `success` field.
pub fn validate_envelope(response: HttpResponse) -> Result<HttpResponse, Error> {
    let success = match response.body.as_ref() {
        Some(Value::Object(body)) => Some(body.get("success").is_some_and(is_truthy)),
        _ => None,
    };
    
    match success {
        None => Err(Error::EmptyResponse(Box::new(response))),
        Some(false) => Err(Error::UnsuccessfulResponse(Box::new(response))),
        Some(true) => Ok(response),
    }
}

pub fn legacy_inventory_url(
    hostname: &str,
    steamid: SteamID,
    appid: AppId,
    contextid: ContextId,
) -> String {
    let sid = u64::from(steamid);
    
    format!("{hostname}/profiles/{sid}/inventory/json/{appid}/{contextid}/")
}

pub fn inventory_url(
    hostname: &str,
    steamid: SteamID,
    options: &InventoryOptions,
) -> Result<String, Error> {
    let sid = u64::from(steamid);
    let InventoryOptions {
        appid,
        contextid,
        ..
    } = options;
    let mut params = vec![
        ("l", options.language.api_language_code()),
        ("count", options.page_size().to_string()),
    ];
    
    if let Some(cursor) = options.numeric_cursor() {
        params.push(("start_assetid", cursor.to_string()));
    }
    
    let url = Url::parse_with_params(
        &format!("{hostname}/inventory/{sid}/{appid}/{contextid}"),
        &params,
    )?;
    
    Ok(url.into())
}
