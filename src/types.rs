//! Types for common values in Steam responses.

/// Uniquely identifies an application on Steam. For example: 730 for Counter-Strike 2.
pub type AppId = u32;
/// A context ID belonging to an [`AppId`].
pub type ContextId = u64;

/// Maps `"{classid}_{instanceid}"` keys to their descriptions.
pub type DescriptionIndex = std::collections::HashMap<String, crate::response::RawDescription>;
