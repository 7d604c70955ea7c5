// Game id resolution from launch environment signals

use crate::env::{Environment, IdSource, ProcessEnv, ID_SOURCES};
use std::fmt;
use std::ops::Deref;
use std::sync::OnceLock;

/// Process-wide result of the first [`resolve_identifier`] call.
/// `Some(None)` records that no source was set.
static GAME_ID: OnceLock<Option<GameId>> = OnceLock::new();

/// Game id as found in the environment, passed through verbatim
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameId {
    value: String,
    source: IdSource,
}

impl GameId {
    pub fn new(value: impl Into<String>, source: IdSource) -> Self {
        Self {
            value: value.into(),
            source,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Variable the id was read from
    pub fn source(&self) -> IdSource {
        self.source
    }

    pub fn into_string(self) -> String {
        self.value
    }
}

impl Deref for GameId {
    type Target = str;

    fn deref(&self) -> &str {
        &self.value
    }
}

impl AsRef<str> for GameId {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// Find the game id in `env`
///
/// Priority:
/// 1. SteamAppId
/// 2. UMU_ID
/// 3. SteamGameId
/// 4. STEAM_COMPAT_DATA_PATH
///
/// Empty values are skipped. No caching.
pub fn lookup_game_id<E: Environment>(env: &E) -> Option<GameId> {
    for (source, priority) in ID_SOURCES {
        if let Some(value) = env.non_empty(source.var_name()) {
            log::debug!(
                "game id {:?} from {} (priority {})",
                value,
                source.var_name(),
                priority
            );
            return Some(GameId::new(value, source));
        }
    }

    log::warn!("no game id found in environment");
    None
}

/// Read the game id from the process environment, bypassing the cache
pub fn resolve_identifier_uncached() -> Option<GameId> {
    lookup_game_id(&ProcessEnv)
}

/// Game id of the running process
///
/// Computed on first call and reused for the rest of the process, including
/// when nothing was found. Later environment changes are not observed; use
/// [`resolve_identifier_uncached`] for a fresh read.
pub fn resolve_identifier() -> Option<&'static GameId> {
    GAME_ID.get_or_init(resolve_identifier_uncached).as_ref()
}
