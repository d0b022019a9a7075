use super::SteamUserInventoryBuilder;
use super::helpers::{validate_params, validate_envelope, legacy_inventory_url, inventory_url};
use crate::client::{HttpClient, ReqwestClient};
use crate::enums::EndpointMode;
use crate::error::Error;
use crate::normalize::InventorySchema;
use crate::request::{InventoryOptions, OldInventoryOptions, RequestOptions};
use crate::response::{Envelope, InventoryPage, Item, LegacyInventory, CurrentInventory};
use std::future::Future;
use futures::future::{self, AbortRegistration, Abortable};
use serde::de::DeserializeOwned;

/// Loads a user's inventory from the Steam Community inventory endpoints.
///
/// Responses are only returned once complete. When loading every page of an inventory, a failed
/// page fails the whole load and the pages loaded before it are discarded.
#[derive(Debug, Clone)]
pub struct SteamUserInventory<C = ReqwestClient> {
    pub(crate) client: C,
    pub(crate) default_request_options: RequestOptions,
    pub(crate) hostname: String,
}

impl SteamUserInventory<ReqwestClient> {
    /// Creates a new [`SteamUserInventory`] using the default `reqwest` client.
    pub fn new() -> Result<Self, Error> {
        SteamUserInventoryBuilder::new().build()
    }
    
    /// Creates a builder for [`SteamUserInventory`].
    pub fn builder() -> SteamUserInventoryBuilder {
        SteamUserInventoryBuilder::new()
    }
}

impl<C> SteamUserInventory<C>
where
    C: HttpClient,
{
    /// Creates a new [`SteamUserInventory`] using `client` for requests.
    pub fn with_client(client: C) -> Self {
        SteamUserInventoryBuilder::new().build_with_client(client)
    }
    
    /// Sends a request with `request_options` merged over the default options and validates
    /// the response.
    async fn request<T>(
        &self,
        url: &str,
        request_options: &RequestOptions,
    ) -> Result<Envelope<T>, Error>
    where
        T: DeserializeOwned,
    {
        let request_options = self.default_request_options.merge(request_options);
        
        log::debug!("GET {url}");
        
        let response = self.client.get_json(url, &request_options).await?;
        
        Envelope::parse(validate_envelope(response)?)
    }
    
    /// Loads an inventory from the legacy endpoint in a single request.
    pub async fn request_legacy(
        &self,
        options: &OldInventoryOptions,
    ) -> Result<Envelope<LegacyInventory>, Error> {
        let steamid = validate_params(&options.steamid)?;
        let url = legacy_inventory_url(
            &self.hostname,
            steamid,
            options.appid,
            options.contextid,
        );
        let envelope = self.request::<LegacyInventory>(&url, &options.request_options).await?;
        
        if envelope.body.has_more() {
            log::debug!("Legacy inventory for {} has more items than one response holds", options.steamid);
        }
        
        Ok(envelope)
    }
    
    /// Loads one page of an inventory from the current endpoint.
    pub async fn request_current(
        &self,
        options: &InventoryOptions,
    ) -> Result<Envelope<CurrentInventory>, Error> {
        let steamid = validate_params(&options.steamid)?;
        let url = inventory_url(&self.hostname, steamid, options)?;
        
        self.request(&url, &options.request_options).await
    }
    
    /// Loads the page following `previous`, starting after its last asset.
    pub async fn request_next_page(
        &self,
        options: &InventoryOptions,
        previous: &Envelope<CurrentInventory>,
    ) -> Result<Envelope<CurrentInventory>, Error> {
        let cursor = previous.body
            .last_asset_id()
            .ok_or(Error::MissingCursor)?;
        let options = InventoryOptions {
            cursor: Some(cursor.to_string()),
            ..options.clone()
        };
        
        self.request_current(&options).await
    }
    
    /// Loads every page of an inventory from the current endpoint. `options.count` is the page
    /// size and `options.cursor` is ignored.
    pub async fn load_all_pages(
        &self,
        options: &InventoryOptions,
    ) -> Result<Vec<Envelope<CurrentInventory>>, Error> {
        self.load_all_pages_with(options, || {
            future::ready(Ok(options.request_options.clone()))
        }).await
    }
    
    /// Loads every page of an inventory from the current endpoint, calling `get_request_options`
    /// for the request options of each page after the first.
    pub async fn load_all_pages_with<F, Fut>(
        &self,
        options: &InventoryOptions,
        mut get_request_options: F,
    ) -> Result<Vec<Envelope<CurrentInventory>>, Error>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<RequestOptions, Error>>,
    {
        validate_params(&options.steamid)?;
        
        let mut options = InventoryOptions {
            cursor: None,
            ..options.clone()
        };
        let page_size = u64::from(options.page_size());
        let first = self.request_current(&options).await?;
        let total = first.body.total_inventory_count;
        
        if total <= page_size || page_size == 0 {
            return Ok(vec![first]);
        }
        
        let page_count = total.div_ceil(page_size);
        let mut pages = Vec::new();
        let mut previous = first;
        let mut remaining = page_count - 1;
        
        while remaining > 0 {
            options.request_options = get_request_options().await?;
            
            log::debug!(
                "Loading page {} of {page_count} for {}",
                page_count - remaining + 1,
                options.steamid,
            );
            
            let page = self.request_next_page(&options, &previous).await?;
            
            pages.push(std::mem::replace(&mut previous, page));
            remaining -= 1;
        }
        
        if previous.body.has_more() {
            log::debug!("Stopped after {page_count} pages with more items remaining");
        }
        
        pages.push(previous);
        
        Ok(pages)
    }
    
    /// Loads every page of an inventory from the current endpoint, stopping with
    /// [`Error::Aborted`] when the [`futures::future::AbortHandle`] paired with `registration` is
    /// aborted. The request in flight is dropped.
    pub async fn load_all_pages_abortable(
        &self,
        options: &InventoryOptions,
        registration: AbortRegistration,
    ) -> Result<Vec<Envelope<CurrentInventory>>, Error> {
        Abortable::new(self.load_all_pages(options), registration).await?
    }
    
    /// Same as [`SteamUserInventory::load_all_pages_abortable`], calling `get_request_options`
    /// for the request options of each page after the first.
    pub async fn load_all_pages_abortable_with<F, Fut>(
        &self,
        options: &InventoryOptions,
        registration: AbortRegistration,
        get_request_options: F,
    ) -> Result<Vec<Envelope<CurrentInventory>>, Error>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<RequestOptions, Error>>,
    {
        let load = self.load_all_pages_with(options, get_request_options);
        
        Abortable::new(load, registration).await?
    }
    
    /// Loads an inventory from the legacy endpoint and normalizes it.
    pub async fn load_old_and_format(
        &self,
        options: &OldInventoryOptions,
    ) -> Result<Vec<Item>, Error> {
        let envelope = self.request_legacy(options).await?;
        
        Ok(envelope.body.format_items())
    }
    
    /// Loads one page of an inventory from the current endpoint and normalizes it.
    pub async fn load_current_and_format(
        &self,
        options: &InventoryOptions,
    ) -> Result<Vec<Item>, Error> {
        let envelope = self.request_current(options).await?;
        
        Ok(envelope.body.format_items())
    }
    
    /// Loads every page of an inventory from the current endpoint and normalizes it.
    pub async fn load_all_pages_and_format(
        &self,
        options: &InventoryOptions,
    ) -> Result<Vec<Item>, Error> {
        let pages = self.load_all_pages(options).await?;
        
        Ok(pages.iter().flat_map(|page| page.body.format_items()).collect())
    }
    
    /// Loads an inventory from the endpoint selected by `mode`. The current endpoint loads every
    /// page, the legacy endpoint loads a single response.
    pub async fn load(
        &self,
        options: &InventoryOptions,
        mode: EndpointMode,
    ) -> Result<Vec<InventoryPage>, Error> {
        self.load_with(options, mode, || {
            future::ready(Ok(options.request_options.clone()))
        }).await
    }
    
    /// Same as [`SteamUserInventory::load`], calling `get_request_options` for the request
    /// options of each page after the first when loading from the current endpoint.
    pub async fn load_with<F, Fut>(
        &self,
        options: &InventoryOptions,
        mode: EndpointMode,
        get_request_options: F,
    ) -> Result<Vec<InventoryPage>, Error>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<RequestOptions, Error>>,
    {
        match mode {
            EndpointMode::Current => {
                let pages = self.load_all_pages_with(options, get_request_options).await?;
                
                Ok(pages.into_iter().map(InventoryPage::Current).collect())
            },
            EndpointMode::Legacy => {
                let envelope = self.request_legacy(&OldInventoryOptions::from(options)).await?;
                
                Ok(vec![InventoryPage::Legacy(envelope)])
            },
        }
    }
    
    /// Loads an inventory from the endpoint selected by `mode` and normalizes it.
    pub async fn load_and_format(
        &self,
        options: &InventoryOptions,
        mode: EndpointMode,
    ) -> Result<Vec<Item>, Error> {
        self.load_and_format_with(options, mode, || {
            future::ready(Ok(options.request_options.clone()))
        }).await
    }
    
    /// Same as [`SteamUserInventory::load_and_format`], calling `get_request_options` for the
    /// request options of each page after the first when loading from the current endpoint.
    pub async fn load_and_format_with<F, Fut>(
        &self,
        options: &InventoryOptions,
        mode: EndpointMode,
        get_request_options: F,
    ) -> Result<Vec<Item>, Error>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<RequestOptions, Error>>,
    {
        let pages = self.load_with(options, mode, get_request_options).await?;
        
        Ok(pages.iter().flat_map(InventoryPage::format_items).collect())
    }
}
