// Resolver bundling an environment with a config

use crate::config::Config;
use crate::env::{Environment, ProcessEnv};
use crate::game_id::{lookup_game_id, GameId};
use crate::module_name::{resolve_module_name_with, ModuleName, ModuleQuery};

/// Resolves game ids and module names against one environment.
///
/// Nothing is cached here; the process-wide cache lives behind
/// [`resolve_identifier`](crate::resolve_identifier).
#[derive(Debug, Clone, Default)]
pub struct Resolver<E = ProcessEnv> {
    env: E,
    config: Config,
}

impl Resolver<ProcessEnv> {
    /// Resolver over the process environment with default packages
    pub fn from_process() -> Self {
        Self::default()
    }
}

impl<E: Environment> Resolver<E> {
    pub fn new(env: E, config: Config) -> Self {
        Self { env, config }
    }

    pub fn with_env(env: E) -> Self {
        Self::new(env, Config::default())
    }

    pub fn env(&self) -> &E {
        &self.env
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn game_id(&self) -> Option<GameId> {
        lookup_game_id(&self.env)
    }

    pub fn module_name(&self, identifier: &str, query: ModuleQuery) -> ModuleName {
        resolve_module_name_with(&self.env, &self.config, identifier, query)
    }

    /// Module name for the game id found in the environment, if any
    pub fn module_for_game(&self, query: ModuleQuery) -> Option<ModuleName> {
        let id = self.game_id()?;
        Some(self.module_name(id.as_str(), query))
    }
}
