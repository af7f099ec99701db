use std::sync::Arc;

use crate::config::{AppConfig, Environment};
use crate::runner::ScriptRunner;

/// Shared, read-only handler state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub env: Arc<Environment>,
    pub runner: Arc<dyn ScriptRunner>,
}

impl AppState {
    pub fn new(config: AppConfig, env: Environment, runner: Arc<dyn ScriptRunner>) -> Self {
        Self {
            config: Arc::new(config),
            env: Arc::new(env),
            runner,
        }
    }
}
