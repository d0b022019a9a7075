use std::time::Duration;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

/// Options passed to the [`crate::HttpClient`] for each request. Every field is optional.
///
/// Options are layered: the defaults configured on [`crate::SteamUserInventory`] are merged with
/// the options given for a call using [`RequestOptions::merge`], where the call's options win
/// field by field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    /// Extra headers. Merged by name; a header in the overriding options replaces all values of
    /// the same header in the base options.
    pub headers: HeaderMap,
    /// The `Referer` header.
    pub referer: Option<String>,
    /// The `User-Agent` header.
    pub user_agent: Option<String>,
    /// Timeout for the whole request.
    pub timeout: Option<Duration>,
    /// URL of a proxy to send the request through.
    pub proxy: Option<String>,
}

impl RequestOptions {
    /// Creates empty [`RequestOptions`].
    pub fn new() -> Self {
        Self::default()
    }
    
    /// Adds a header.
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
    
    /// The `Referer` header.
    pub fn referer<T>(mut self, referer: T) -> Self
    where
        T: Into<String>,
    {
        self.referer = Some(referer.into());
        self
    }
    
    /// The `User-Agent` header.
    pub fn user_agent<T>(mut self, user_agent: T) -> Self
    where
        T: Into<String>,
    {
        self.user_agent = Some(user_agent.into());
        self
    }
    
    /// Timeout for the whole request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
    
    /// URL of a proxy to send the request through.
    pub fn proxy<T>(mut self, proxy: T) -> Self
    where
        T: Into<String>,
    {
        self.proxy = Some(proxy.into());
        self
    }
    
    /// Merges `overrides` on top of these options. Fields set in `overrides` take precedence.
    pub fn merge(&self, overrides: &RequestOptions) -> RequestOptions {
        let mut headers = self.headers.clone();
        
        for name in overrides.headers.keys() {
            headers.remove(name);
            
            for value in overrides.headers.get_all(name) {
                headers.append(name.clone(), value.clone());
            }
        }
        
        RequestOptions {
            headers,
            referer: overrides.referer.clone().or_else(|| self.referer.clone()),
            user_agent: overrides.user_agent.clone().or_else(|| self.user_agent.clone()),
            timeout: overrides.timeout.or(self.timeout),
            proxy: overrides.proxy.clone().or_else(|| self.proxy.clone()),
        }
    }
}
