use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Languages for item descriptions. Displays as the code sent in the `l` query parameter, e.g.
/// `english`, and parses from the same code.
/// 
/// See <https://partner.steamgames.com/doc/store/localization/languages> for more information.
#[derive(Default, Debug, Deserialize, Serialize, Display, EnumString, PartialEq, Eq, Clone, Copy)]
#[strum(serialize_all = "lowercase")]
pub enum Language {
    Arabic,
    Bulgarian,
    #[strum(serialize = "schinese")]
    ChineseSimplified,
    #[strum(serialize = "tchinese")]
    ChineseTraditional,
    Czech,
    Danish,
    Dutch,
    /// This is the default language.
    #[default]
    English,
    Finnish,
    French,
    German,
    Greek,
    Hungarian,
    Italian,
    Japanese,
    #[strum(serialize = "koreana")]
    Korean,
    Norwegian,
    Polish,
    Portuguese,
    #[strum(serialize = "brazilian")]
    PortugueseBrazil,
    Romanian,
    Russian,
    #[strum(serialize = "spanish")]
    SpanishSpain,
    #[strum(serialize = "latam")]
    SpanishLatinAmerica,
    Swedish,
    Thai,
    Turkish,
    Ukrainian,
    Vietnamese,
}

impl Language {
    /// The code used for the `l` query parameter.
    pub fn api_language_code(&self) -> String {
        self.to_string()
    }
}
