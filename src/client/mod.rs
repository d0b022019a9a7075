//! The HTTP client used to make requests.

use crate::error::Error;
use crate::helpers::{get_default_middleware, check_response, USER_AGENT_STRING};
use crate::request::RequestOptions;
use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::{REFERER, USER_AGENT};
use reqwest_middleware::ClientWithMiddleware;

/// A response with its body decoded as JSON.
#[derive(Debug, PartialEq, Clone)]
pub struct HttpResponse {
    /// The HTTP status.
    pub status: StatusCode,
    /// The decoded body. `None` when the response had no body or the body was not JSON.
    pub body: Option<serde_json::Value>,
}

/// Makes GET requests and decodes their bodies as JSON. Transport concerns such as retries,
/// redirects, proxies and timeouts belong to the implementor.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Sends a GET request to `url` using `options`.
    async fn get_json(
        &self,
        url: &str,
        options: &RequestOptions,
    ) -> Result<HttpResponse, Error>;
}

/// The default [`HttpClient`], backed by `reqwest` with a middleware retrying transient
/// failures.
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    client: ClientWithMiddleware,
}

impl ReqwestClient {
    /// Creates a new [`ReqwestClient`] with the default middleware.
    pub fn new() -> Result<Self, Error> {
        Ok(Self {
            client: get_default_middleware(None, USER_AGENT_STRING)?,
        })
    }
}

impl From<ClientWithMiddleware> for ReqwestClient {
    fn from(client: ClientWithMiddleware) -> Self {
        Self {
            client,
        }
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn get_json(
        &self,
        url: &str,
        options: &RequestOptions,
    ) -> Result<HttpResponse, Error> {
        // Proxies are configured per client so a dedicated one is built for this request.
        let proxied;
        let client = if let Some(proxy) = &options.proxy {
            proxied = get_default_middleware(
                Some(reqwest::Proxy::all(proxy.as_str())?),
                USER_AGENT_STRING,
            )?;
            &proxied
        } else {
            &self.client
        };
        let mut request = client.get(url)
            .headers(options.headers.clone());
        
        if let Some(referer) = &options.referer {
            request = request.header(REFERER, referer);
        }
        
        if let Some(user_agent) = &options.user_agent {
            request = request.header(USER_AGENT, user_agent);
        }
        
        if let Some(timeout) = options.timeout {
            request = request.timeout(timeout);
        }
        
        let response = request.send().await?;
        let status = response.status();
        let bytes = check_response(response).await?;
        let body = serde_json::from_slice::<serde_json::Value>(&bytes).ok();
        
        if body.is_none() {
            log::debug!("Response from {url} is not JSON ({} bytes)", bytes.len());
        }
        
        Ok(HttpResponse {
            status,
            body,
        })
    }
}
