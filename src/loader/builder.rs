use super::SteamUserInventory;
use crate::client::{HttpClient, ReqwestClient};
use crate::error::Error;
use crate::request::RequestOptions;
use reqwest_middleware::ClientWithMiddleware;

/// Builder for constructing a [`SteamUserInventory`].
#[derive(Debug, Clone)]
pub struct SteamUserInventoryBuilder {
    /// Options merged under the options of every request.
    pub(crate) default_request_options: RequestOptions,
    /// Client to use for requests.
    pub(crate) client: Option<ClientWithMiddleware>,
    /// The base URL for inventory requests.
    pub(crate) hostname: String,
}

impl Default for SteamUserInventoryBuilder {
    fn default() -> Self {
        Self {
            default_request_options: RequestOptions::default(),
            client: None,
            hostname: super::HOSTNAME.into(),
        }
    }
}

impl SteamUserInventoryBuilder {
    /// Creates a new [`SteamUserInventoryBuilder`].
    pub fn new() -> Self {
        Self::default()
    }
    
    /// Options merged under the options of every request. Options given for a call take
    /// precedence field by field.
    pub fn default_request_options(mut self, request_options: RequestOptions) -> Self {
        self.default_request_options = request_options;
        self
    }
    
    /// Client to use for requests.
    pub fn client(mut self, client: ClientWithMiddleware) -> Self {
        self.client = Some(client);
        self
    }
    
    /// The base URL for inventory requests. Defaults to `https://steamcommunity.com`.
    pub fn hostname<T>(mut self, hostname: T) -> Self
    where
        T: Into<String>,
    {
        self.hostname = hostname.into();
        self
    }
    
    /// Builds the [`SteamUserInventory`] using the default `reqwest` client.
    pub fn build(self) -> Result<SteamUserInventory<ReqwestClient>, Error> {
        let client = match self.client {
            Some(client) => ReqwestClient::from(client),
            None => ReqwestClient::new()?,
        };
        
        Ok(SteamUserInventory {
            client,
            default_request_options: self.default_request_options,
            hostname: self.hostname,
        })
    }
    
    /// Builds the [`SteamUserInventory`] using `client` for requests.
    pub fn build_with_client<C>(self, client: C) -> SteamUserInventory<C>
    where
        C: HttpClient,
    {
        SteamUserInventory {
            client,
            default_request_options: self.default_request_options,
            hostname: self.hostname,
        }
    }
}
