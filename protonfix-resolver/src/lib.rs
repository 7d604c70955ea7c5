// protonfix-resolver - Fix module dispatch for protonfixes
// Picks the game id from the launch environment and maps it to a fix module path

pub mod config;
pub mod env;
pub mod error;
pub mod game_id;
pub mod module_name;
pub mod resolver;
pub mod store;

pub use config::Config;
pub use env::{Environment, IdSource, MapEnv, ProcessEnv, ID_SOURCES, STORE_VAR};
pub use error::{ConfigError, UnknownStore};
pub use game_id::{lookup_game_id, resolve_identifier, resolve_identifier_uncached, GameId};
pub use module_name::{
    is_numeric_id, resolve_module_name, resolve_module_name_with, ModuleKind, ModuleName,
    ModuleQuery,
};
pub use resolver::Resolver;
pub use store::Store;
