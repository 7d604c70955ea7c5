// Fix module name resolution
// Maps a game id plus the STORE hint to a dotted module path

use crate::config::Config;
use crate::env::{Environment, ProcessEnv, STORE_VAR};
use crate::store::Store;
use std::fmt;
use std::sync::OnceLock;

/// Packages used by [`resolve_module_name`]
static DEFAULT_CONFIG: OnceLock<Config> = OnceLock::new();

fn default_config() -> &'static Config {
    DEFAULT_CONFIG.get_or_init(Config::default)
}

/// Which package family a module name points into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModuleKind {
    /// `localfixes.*`
    Local,
    /// `protonfixes.gamefixes-{store}.*`
    Store(Store),
}

/// Flags for [`resolve_module_name_with`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModuleQuery {
    /// Use the default module of the selected package instead of the game id
    pub default: bool,
    /// Look in the local fixes package
    pub local: bool,
}

impl ModuleQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default(mut self, default: bool) -> Self {
        self.default = default;
        self
    }

    pub fn with_local(mut self, local: bool) -> Self {
        self.local = local;
        self
    }
}

/// Fully qualified fix module path
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleName {
    path: String,
    kind: ModuleKind,
}

impl ModuleName {
    pub fn as_str(&self) -> &str {
        &self.path
    }

    pub fn kind(&self) -> ModuleKind {
        self.kind
    }

    /// Storefront package, `None` for local fixes
    pub fn store(&self) -> Option<Store> {
        match self.kind {
            ModuleKind::Store(store) => Some(store),
            ModuleKind::Local => None,
        }
    }

    pub fn into_string(self) -> String {
        self.path
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.path)
    }
}

impl AsRef<str> for ModuleName {
    fn as_ref(&self) -> &str {
        &self.path
    }
}

impl PartialEq<str> for ModuleName {
    fn eq(&self, other: &str) -> bool {
        self.path == other
    }
}

impl PartialEq<&str> for ModuleName {
    fn eq(&self, other: &&str) -> bool {
        self.path == *other
    }
}

impl From<ModuleName> for String {
    fn from(name: ModuleName) -> Self {
        name.path
    }
}

/// True when `id` is non-empty and made only of ASCII decimal digits
pub fn is_numeric_id(id: &str) -> bool {
    !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit())
}

/// Module name for `identifier` using the process `STORE` and default packages
///
/// Precedence:
/// 1. `local`: `localfixes.{id}` (`localfixes.default` with `default`)
/// 2. numeric id: `protonfixes.gamefixes-steam.{id}`, `STORE` ignored
/// 3. otherwise: `protonfixes.gamefixes-{STORE}.{id}`, or `gamefixes-umu`
///    when `STORE` is empty, unset or unrecognized
///
/// With `default`, the id is replaced by `default` in whichever package is chosen.
pub fn resolve_module_name(identifier: &str, default: bool, local: bool) -> ModuleName {
    let query = ModuleQuery { default, local };
    resolve_module_name_with(&ProcessEnv, default_config(), identifier, query)
}

/// [`resolve_module_name`] against an explicit environment and config.
/// `STORE` is read on every call.
pub fn resolve_module_name_with<E: Environment>(
    env: &E,
    config: &Config,
    identifier: &str,
    query: ModuleQuery,
) -> ModuleName {
    let stem = if query.default {
        config.default_module.as_str()
    } else {
        identifier
    };

    if query.local {
        return ModuleName {
            path: format!("{}.{}", config.local_package, stem),
            kind: ModuleKind::Local,
        };
    }

    let store = if is_numeric_id(identifier) {
        Store::Steam
    } else {
        store_for_non_steam(env, identifier)
    };

    ModuleName {
        path: format!(
            "{}.{}{}.{}",
            config.fix_package,
            config.family_prefix,
            store.as_str(),
            stem
        ),
        kind: ModuleKind::Store(store),
    }
}

fn store_for_non_steam<E: Environment>(env: &E, identifier: &str) -> Store {
    let Some(hint) = env.non_empty(STORE_VAR) else {
        log::info!("Non-steam game ({}), no store hint", identifier);
        return Store::Umu;
    };

    match Store::from_hint(&hint) {
        Some(store) => {
            log::info!("Non-steam game ({}) from store {}", identifier, store);
            store
        }
        None => {
            log::warn!("Unknown store {:?} for {}, using umu", hint, identifier);
            Store::Umu
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::MapEnv;

    fn resolve(env: &MapEnv, id: &str, default: bool, local: bool) -> ModuleName {
        resolve_module_name_with(env, &Config::default(), id, ModuleQuery { default, local })
    }

    #[test]
    fn test_numeric_detection() {
        assert!(is_numeric_id("1091500"));
        assert!(is_numeric_id("0"));
        assert!(!is_numeric_id(""));
        assert!(!is_numeric_id("umu-1091500"));
        assert!(!is_numeric_id("-10"));
        assert!(!is_numeric_id(" 10"));
        assert!(!is_numeric_id("١٢٣"));
    }

    #[test]
    fn test_numeric_is_steam_regardless_of_store() {
        for store in ["", "none", "gog", "GOG", "umu", "foo"] {
            let env = MapEnv::new().with("STORE", store);
            let name = resolve(&env, "1091500", false, false);
            assert_eq!(name, "protonfixes.gamefixes-steam.1091500");
            assert_eq!(name.kind(), ModuleKind::Store(Store::Steam));
        }
    }

    #[test]
    fn test_numeric_default() {
        let env = MapEnv::new().with("STORE", "gog");
        assert_eq!(
            resolve(&env, "1091500", true, false),
            "protonfixes.gamefixes-steam.default"
        );
    }

    #[test]
    fn test_store_hint() {
        let env = MapEnv::new().with("STORE", "GOG");
        let name = resolve(&env, "umu-1091500", false, false);
        assert_eq!(name, "protonfixes.gamefixes-gog.umu-1091500");
        assert_eq!(name.store(), Some(Store::Gog));

        let env = MapEnv::new().with("STORE", "egs");
        assert_eq!(
            resolve(&env, "umu-dauntless", false, false),
            "protonfixes.gamefixes-egs.umu-dauntless"
        );
    }

    #[test]
    fn test_steam_store_hint_for_non_numeric() {
        let env = MapEnv::new().with("STORE", "Steam");
        assert_eq!(
            resolve(&env, "umu-1091500", false, false),
            "protonfixes.gamefixes-steam.umu-1091500"
        );
    }

    #[test]
    fn test_umu_fallback() {
        let unset = MapEnv::new();
        let empty = MapEnv::new().with("STORE", "");
        let unknown = MapEnv::new().with("STORE", "foo");

        for env in [&unset, &empty, &unknown] {
            let name = resolve(env, "umu-1091500", false, false);
            assert_eq!(name, "protonfixes.gamefixes-umu.umu-1091500");
            assert_eq!(name.store(), Some(Store::Umu));
        }
    }

    #[test]
    fn test_padded_store_hint_falls_back_to_umu() {
        let env = MapEnv::new().with("STORE", " gog ");
        let name = resolve(&env, "umu-1091500", false, false);
        assert_eq!(name, "protonfixes.gamefixes-umu.umu-1091500");
        assert_eq!(name.store(), Some(Store::Umu));
    }

    #[test]
    fn test_default_config_shared() {
        assert!(std::ptr::eq(default_config(), default_config()));
        assert_eq!(default_config(), &Config::default());
    }

    #[test]
    fn test_empty_identifier() {
        let env = MapEnv::new().with("STORE", "");
        assert_eq!(resolve(&env, "", false, false), "protonfixes.gamefixes-umu.");
    }

    #[test]
    fn test_non_numeric_default_follows_store() {
        let env = MapEnv::new();
        assert_eq!(
            resolve(&env, "umu-default", true, false),
            "protonfixes.gamefixes-umu.default"
        );

        let env = MapEnv::new().with("STORE", "gog");
        assert_eq!(
            resolve(&env, "umu-1091500", true, false),
            "protonfixes.gamefixes-gog.default"
        );
    }

    #[test]
    fn test_local() {
        let env = MapEnv::new().with("STORE", "gog");

        let name = resolve(&env, "1091500", false, true);
        assert_eq!(name, "localfixes.1091500");
        assert_eq!(name.kind(), ModuleKind::Local);
        assert_eq!(name.store(), None);

        assert_eq!(resolve(&env, "umu-1091500", false, true), "localfixes.umu-1091500");
        assert_eq!(resolve(&env, "1091500", true, true), "localfixes.default");
        assert_eq!(resolve(&env, "", true, true), "localfixes.default");
    }

    #[test]
    fn test_custom_config() {
        let config = Config {
            fix_package: "fixes".to_string(),
            local_package: "userfixes".to_string(),
            default_module: "base".to_string(),
            family_prefix: "games_".to_string(),
        };
        let env = MapEnv::new().with("STORE", "humble");

        let name = resolve_module_name_with(&env, &config, "umu-x", ModuleQuery::new());
        assert_eq!(name, "fixes.games_humble.umu-x");

        let query = ModuleQuery::new().with_local(true).with_default(true);
        let name = resolve_module_name_with(&env, &config, "umu-x", query);
        assert_eq!(name, "userfixes.base");
    }

    #[test]
    fn test_store_read_on_every_call() {
        let mut env = MapEnv::new().with("STORE", "gog");
        assert_eq!(
            resolve(&env, "umu-1", false, false),
            "protonfixes.gamefixes-gog.umu-1"
        );

        env.set("STORE", "amazon");
        assert_eq!(
            resolve(&env, "umu-1", false, false),
            "protonfixes.gamefixes-amazon.umu-1"
        );
    }
}
