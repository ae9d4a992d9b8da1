use sea_orm::DatabaseConnection;

use crate::config::AppConfig;

/// Shared resources handed to every handler through `web::Data`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Database connection (absent in tests that exercise the no-DB path)
    pub db: Option<DatabaseConnection>,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(db: DatabaseConnection, config: AppConfig) -> Self {
        Self {
            db: Some(db),
            config,
        }
    }

    pub fn without_db(config: AppConfig) -> Self {
        Self { db: None, config }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }

    pub fn questions_per_page(&self) -> u64 {
        self.config.questions_per_page
    }
}
