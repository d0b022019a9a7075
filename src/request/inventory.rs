use super::RequestOptions;
use crate::enums::Language;
use crate::types::{AppId, ContextId};

/// The app ID used when none is given. Counter-Strike 2.
pub const DEFAULT_APPID: AppId = 730;
/// The context ID used when none is given.
pub const DEFAULT_CONTEXTID: ContextId = 2;
/// The largest page the current endpoint serves.
pub const MAX_PAGE_SIZE: u32 = 5000;

/// Options for loading an inventory from the legacy endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct OldInventoryOptions {
    /// The user's 64-bit Steam ID as a decimal string.
    pub steamid: String,
    /// App ID of inventory. Defaults to 730.
    pub appid: AppId,
    /// Context ID of inventory. Defaults to 2.
    pub contextid: ContextId,
    /// Options for the request, merged over the loader's defaults.
    pub request_options: RequestOptions,
}

impl OldInventoryOptions {
    /// Creates a new [`OldInventoryOptions`] for the default app and context.
    pub fn new<T>(steamid: T) -> Self
    where
        T: Into<String>,
    {
        Self {
            steamid: steamid.into(),
            appid: DEFAULT_APPID,
            contextid: DEFAULT_CONTEXTID,
            request_options: RequestOptions::default(),
        }
    }
}

impl From<&InventoryOptions> for OldInventoryOptions {
    fn from(options: &InventoryOptions) -> Self {
        Self {
            steamid: options.steamid.clone(),
            appid: options.appid,
            contextid: options.contextid,
            request_options: options.request_options.clone(),
        }
    }
}

/// Options for loading an inventory from the current endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryOptions {
    /// The user's 64-bit Steam ID as a decimal string.
    pub steamid: String,
    /// App ID of inventory. Defaults to 730.
    pub appid: AppId,
    /// Context ID of inventory. Defaults to 2.
    pub contextid: ContextId,
    /// The language to use for descriptions.
    pub language: Language,
    /// The number of items per page. Values outside of `0..=5000` are replaced with 5000.
    pub count: i64,
    /// The asset ID to start the page after.
    pub cursor: Option<String>,
    /// Options for the request, merged over the loader's defaults.
    pub request_options: RequestOptions,
}

impl InventoryOptions {
    /// Creates a new [`InventoryOptions`] for the default app and context.
    pub fn new<T>(steamid: T) -> Self
    where
        T: Into<String>,
    {
        Self::builder(steamid).build()
    }
    
    /// Creates a builder for [`InventoryOptions`].
    pub fn builder<T>(steamid: T) -> InventoryOptionsBuilder
    where
        T: Into<String>,
    {
        InventoryOptionsBuilder::new(steamid)
    }
    
    /// The page size sent to Steam. Out-of-range counts fall back to 5000 rather than failing.
    pub fn page_size(&self) -> u32 {
        u32::try_from(self.count)
            .ok()
            .filter(|count| *count <= MAX_PAGE_SIZE)
            .unwrap_or(MAX_PAGE_SIZE)
    }
    
    /// The cursor, if it is present and numeric.
    pub fn numeric_cursor(&self) -> Option<&str> {
        self.cursor
            .as_deref()
            .filter(|cursor| cursor.parse::<u64>().is_ok())
    }
}

/// Builder for [`InventoryOptions`].
#[derive(Debug, Clone)]
pub struct InventoryOptionsBuilder {
    options: InventoryOptions,
}

impl InventoryOptionsBuilder {
    /// Creates a new [`InventoryOptionsBuilder`].
    pub fn new<T>(steamid: T) -> Self
    where
        T: Into<String>,
    {
        Self {
            options: InventoryOptions {
                steamid: steamid.into(),
                appid: DEFAULT_APPID,
                contextid: DEFAULT_CONTEXTID,
                language: Language::English,
                count: MAX_PAGE_SIZE as i64,
                cursor: None,
                request_options: RequestOptions::default(),
            },
        }
    }
    
    /// App ID of inventory.
    pub fn appid(mut self, appid: AppId) -> Self {
        self.options.appid = appid;
        self
    }
    
    /// Context ID of inventory.
    pub fn contextid(mut self, contextid: ContextId) -> Self {
        self.options.contextid = contextid;
        self
    }
    
    /// The language to use for descriptions.
    pub fn language(mut self, language: Language) -> Self {
        self.options.language = language;
        self
    }
    
    /// The number of items per page.
    pub fn count(mut self, count: i64) -> Self {
        self.options.count = count;
        self
    }
    
    /// The asset ID to start the page after.
    pub fn cursor<T>(mut self, cursor: T) -> Self
    where
        T: Into<String>,
    {
        self.options.cursor = Some(cursor.into());
        self
    }
    
    /// Options for the request.
    pub fn request_options(mut self, request_options: RequestOptions) -> Self {
        self.options.request_options = request_options;
        self
    }
    
    /// Builds the [`InventoryOptions`].
    pub fn build(self) -> InventoryOptions {
        self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn clamps_out_of_range_counts() {
        let page_size = |count| InventoryOptions::builder("76561198000000000")
            .count(count)
            .build()
            .page_size();
        
        assert_eq!(page_size(-1), 5000);
        assert_eq!(page_size(0), 0);
        assert_eq!(page_size(5000), 5000);
        assert_eq!(page_size(5001), 5000);
        assert_eq!(page_size(6000), 5000);
        assert_eq!(page_size(100), 100);
    }
    
    #[test]
    fn ignores_non_numeric_cursor() {
        let options = InventoryOptions::builder("76561198000000000")
            .cursor("abc")
            .build();
        
        assert!(options.numeric_cursor().is_none());
        
        let options = InventoryOptions::builder("76561198000000000")
            .cursor("27346489411")
            .build();
        
        assert_eq!(options.numeric_cursor(), Some("27346489411"));
    }
    
    #[test]
    fn uses_defaults() {
        let options = InventoryOptions::new("76561198000000000");
        
        assert_eq!(options.appid, 730);
        assert_eq!(options.contextid, 2);
        assert_eq!(options.language, Language::English);
        assert_eq!(options.page_size(), 5000);
    }
}
