// Environment access for the resolvers
// Every read goes through `Environment` so the core logic can run against a fixed map

use std::collections::HashMap;

/// Store hint consulted for non-numeric game ids
pub const STORE_VAR: &str = "STORE";

/// A variable that may carry the game id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdSource {
    SteamAppId,
    UmuId,
    SteamGameId,
    SteamCompatDataPath,
}

impl IdSource {
    /// Name of the environment variable backing this source
    pub fn var_name(self) -> &'static str {
        match self {
            IdSource::SteamAppId => "SteamAppId",
            IdSource::UmuId => "UMU_ID",
            IdSource::SteamGameId => "SteamGameId",
            IdSource::SteamCompatDataPath => "STEAM_COMPAT_DATA_PATH",
        }
    }
}

/// Id sources in lookup order, paired with their priority (1 = checked first)
pub const ID_SOURCES: [(IdSource, u8); 4] = [
    (IdSource::SteamAppId, 1),
    (IdSource::UmuId, 2),
    (IdSource::SteamGameId, 3),
    (IdSource::SteamCompatDataPath, 4),
];

/// Read-only view of environment variables
pub trait Environment {
    /// Value of `key`, or `None` when unset or not valid unicode
    fn var(&self, key: &str) -> Option<String>;

    /// Like [`Environment::var`] but treats an empty value as unset
    fn non_empty(&self, key: &str) -> Option<String> {
        self.var(key).filter(|value| !value.is_empty())
    }
}

impl<E: Environment + ?Sized> Environment for &E {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}

/// The environment of the running process
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// In-memory environment
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.vars.remove(key)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl Environment for MapEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}
