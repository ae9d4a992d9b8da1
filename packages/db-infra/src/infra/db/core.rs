use std::future::Future;
use std::time::Duration;

use migration::{migrate, MigrationCommand, MigrationName, Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use tracing::{info, trace, warn};

use super::{DbKind, DbOwner, RuntimeEnv};
use crate::config::db::{make_conn_spec, validate_db_config};
use crate::error::DbInfraError;

const CONNECT_ATTEMPTS: u32 = 5;
const CONNECT_INTERVAL_MS: u64 = 500;

/// Retry a connection attempt with fixed interval delays.
/// Returns the error of the last attempt once all retries are exhausted.
async fn retry_connection<T, F, Fut>(
    mut connect_fn: F,
    max_attempts: u32,
    interval_ms: u64,
) -> Result<T, DbInfraError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, DbInfraError>>,
{
    let mut attempt = 1;
    loop {
        match connect_fn().await {
            Ok(result) => {
                if attempt > 1 {
                    info!(attempts = attempt, interval_ms, "connection_retry=success");
                }
                return Ok(result);
            }
            Err(e) if attempt >= max_attempts => return Err(e),
            Err(_) => {
                warn!(attempt, max_attempts, interval_ms, "connection_retry=failed");
                tokio::time::sleep(Duration::from_millis(interval_ms)).await;
                attempt += 1;
            }
        }
    }
}

fn connect_options(url: &str, db_kind: DbKind) -> ConnectOptions {
    let mut opt = ConnectOptions::new(url);
    opt.acquire_timeout(Duration::from_secs(5)).sqlx_logging(false);

    match db_kind {
        // Every pooled connection to `sqlite::memory:` must see the same database.
        DbKind::SqliteMemory => {
            opt.min_connections(1).max_connections(1);
        }
        DbKind::SqliteFile => {
            opt.max_connections(1);
        }
        DbKind::Postgres => {
            opt.min_connections(1).max_connections(10);
        }
    }
    opt
}

/// Open a connection pool for the given environment, engine and role.
///
/// Does NOT run any migrations.
pub async fn connect_db(
    env: RuntimeEnv,
    db_kind: DbKind,
    owner: DbOwner,
) -> Result<DatabaseConnection, DbInfraError> {
    let url = make_conn_spec(env, db_kind, owner)?;
    let opt = connect_options(&url, db_kind);

    info!(
        env = ?env,
        db_kind = %db_kind,
        url = %sanitize_db_url(&url),
        "db.connect"
    );

    if db_kind == DbKind::Postgres {
        retry_connection(
            || {
                let opt = opt.clone();
                async move {
                    Database::connect(opt)
                        .await
                        .map_err(|e| DbInfraError::Connect {
                            message: format!("failed to connect to Postgres: {e}"),
                        })
                }
            },
            CONNECT_ATTEMPTS,
            CONNECT_INTERVAL_MS,
        )
        .await
    } else {
        Database::connect(opt)
            .await
            .map_err(|e| DbInfraError::Connect {
                message: format!("failed to connect to SQLite: {e}"),
            })
    }
}

/// Connect the application pool and make sure the schema is current.
///
/// SQLite databases are migrated in place. Postgres is only checked: the
/// application role has no DDL rights, so an outdated schema is reported and
/// the migration CLI must be run.
pub async fn bootstrap_db(
    env: RuntimeEnv,
    db_kind: DbKind,
) -> Result<DatabaseConnection, DbInfraError> {
    validate_db_config(env, db_kind)?;
    let conn = connect_db(env, db_kind, DbOwner::App).await?;

    if schema_is_current(&conn).await? {
        trace!(db_kind = %db_kind, "bootstrap fast path: schema current");
        return Ok(conn);
    }

    if db_kind.is_sqlite() {
        migrate(&conn, MigrationCommand::Up)
            .await
            .map_err(|e| DbInfraError::Migration {
                message: e.to_string(),
            })?;
        return Ok(conn);
    }

    Err(DbInfraError::SchemaNotReady {
        message: "pending migrations; run the migration CLI (`migration up`) first".to_string(),
    })
}

/// Entry point for the migration CLI: connect with the owner role and run `command`.
pub async fn orchestrate_migration(
    env: RuntimeEnv,
    db_kind: DbKind,
    command: MigrationCommand,
) -> Result<(), DbInfraError> {
    if db_kind == DbKind::SqliteMemory {
        return Err(DbInfraError::config(
            "sqlite-memory databases vanish when the CLI exits; use postgres or sqlite-file",
        ));
    }

    let owner = if db_kind == DbKind::Postgres {
        DbOwner::Owner
    } else {
        DbOwner::App
    };
    let conn = connect_db(env, db_kind, owner).await?;

    info!(env = ?env, db_kind = %db_kind, cmd = ?command, "migrate=start");
    migrate(&conn, command)
        .await
        .map_err(|e| DbInfraError::Migration {
            message: e.to_string(),
        })?;
    info!("migrate=done");
    Ok(())
}

async fn schema_is_current(conn: &DatabaseConnection) -> Result<bool, DbInfraError> {
    let expected = Migrator::migrations()
        .last()
        .map(|m| m.name().to_string());

    match Migrator::get_applied_migrations(conn).await {
        Ok(applied) => {
            let current = applied.last().map(|m| m.name().to_string());
            Ok(applied.len() == Migrator::migrations().len() && current == expected)
        }
        // Migration table doesn't exist yet
        Err(DbErr::Exec(_)) => Ok(false),
        Err(e) => Err(DbInfraError::Migration {
            message: format!("failed to read applied migrations: {e}"),
        }),
    }
}

/// Mask the password in a connection string for logging.
pub fn sanitize_db_url(url: &str) -> String {
    let Some((auth, host)) = url.rsplit_once('@') else {
        return url.to_string();
    };
    match auth.rfind(':') {
        Some(colon) if auth[..colon].contains("://") => {
            format!("{}:***@{host}", &auth[..colon])
        }
        _ => url.to_string(),
    }
}
