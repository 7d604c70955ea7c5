// Storefronts with their own gamefixes package

use crate::error::UnknownStore;
use std::fmt;
use std::str::FromStr;

/// Recognized values of the `STORE` hint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Store {
    Steam,
    Amazon,
    Battlenet,
    Ea,
    Egs,
    Gog,
    Humble,
    Itchio,
    Ubisoft,
    Umu,
    ZoomPlatform,
}

impl Store {
    pub const ALL: [Store; 11] = [
        Store::Steam,
        Store::Amazon,
        Store::Battlenet,
        Store::Ea,
        Store::Egs,
        Store::Gog,
        Store::Humble,
        Store::Itchio,
        Store::Ubisoft,
        Store::Umu,
        Store::ZoomPlatform,
    ];

    /// Lowercase name, as used in `gamefixes-{name}`
    pub fn as_str(self) -> &'static str {
        match self {
            Store::Steam => "steam",
            Store::Amazon => "amazon",
            Store::Battlenet => "battlenet",
            Store::Ea => "ea",
            Store::Egs => "egs",
            Store::Gog => "gog",
            Store::Humble => "humble",
            Store::Itchio => "itchio",
            Store::Ubisoft => "ubisoft",
            Store::Umu => "umu",
            Store::ZoomPlatform => "zoomplatform",
        }
    }

    /// Lenient parse of a `STORE` value: empty or unknown gives `None`
    pub fn from_hint(hint: &str) -> Option<Store> {
        hint.parse().ok()
    }
}

impl FromStr for Store {
    type Err = UnknownStore;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Store::ALL
            .into_iter()
            .find(|store| store.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownStore(s.to_string()))
    }
}

impl fmt::Display for Store {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
