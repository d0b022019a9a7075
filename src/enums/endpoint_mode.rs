use strum_macros::{Display, EnumString};

/// Which endpoint to load an inventory from.
#[derive(Default, Debug, Display, EnumString, PartialEq, Eq, Clone, Copy)]
#[strum(serialize_all = "lowercase")]
pub enum EndpointMode {
    /// The paginated `/inventory/{steamid}` endpoint. Every page is loaded.
    #[default]
    Current,
    /// The `/profiles/{steamid}/inventory/json` endpoint, loaded in a single request.
    Legacy,
}
