//! Enumerated types.

mod endpoint_mode;
mod language;

pub use endpoint_mode::EndpointMode;
pub use language::Language;
