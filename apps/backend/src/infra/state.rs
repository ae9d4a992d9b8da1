use db_infra::bootstrap_db;
use db_infra::db::{DbKind, RuntimeEnv};
use sea_orm::DatabaseConnection;

use crate::config::AppConfig;
use crate::error::AppError;
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    config: AppConfig,
    env: RuntimeEnv,
    db_kind: Option<DbKind>,
    existing_db: Option<DatabaseConnection>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
            env: RuntimeEnv::Prod,
            db_kind: None,
            existing_db: None,
        }
    }

    pub fn with_env(mut self, env: RuntimeEnv) -> Self {
        self.env = env;
        self
    }

    /// Connect to (and, for SQLite, migrate) a database of this kind on build.
    pub fn with_db(mut self, db_kind: DbKind) -> Self {
        self.db_kind = Some(db_kind);
        self
    }

    /// Use a connection that is already open and migrated.
    pub fn with_existing_db(mut self, db: DatabaseConnection) -> Self {
        self.existing_db = Some(db);
        self
    }

    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        if let Some(db) = self.existing_db {
            return Ok(AppState::new(db, self.config));
        }

        match self.db_kind {
            Some(db_kind) => {
                let conn = bootstrap_db(self.env, db_kind).await?;
                Ok(AppState::new(conn, self.config))
            }
            None => Ok(AppState::without_db(self.config)),
        }
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
