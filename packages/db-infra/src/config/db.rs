use std::env;
use std::fmt;
use std::str::FromStr;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use crate::error::DbInfraError;

/// Which environment the process runs in. Decides the database name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeEnv {
    Prod,
    Test,
}

/// Supported database engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbKind {
    Postgres,
    SqliteFile,
    SqliteMemory,
}

impl DbKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Postgres => "postgres",
            Self::SqliteFile => "sqlite-file",
            Self::SqliteMemory => "sqlite-memory",
        }
    }

    pub const fn is_sqlite(&self) -> bool {
        matches!(self, Self::SqliteFile | Self::SqliteMemory)
    }
}

impl fmt::Display for DbKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DbKind {
    type Err = DbInfraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "sqlite-file" | "sqlite_file" => Ok(Self::SqliteFile),
            "sqlite-memory" | "sqlite_memory" | "memory" => Ok(Self::SqliteMemory),
            other => Err(DbInfraError::config(format!(
                "unsupported database kind '{other}' (expected postgres | sqlite-file | sqlite-memory)"
            ))),
        }
    }
}

/// Database role used for the connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbOwner {
    /// Application-level access (DML only)
    App,
    /// Owner-level access (DDL, used for migrations)
    Owner,
}

/// Reject combinations that can never work before any connection is attempted.
pub fn validate_db_config(env: RuntimeEnv, db_kind: DbKind) -> Result<(), DbInfraError> {
    if env == RuntimeEnv::Prod && db_kind == DbKind::SqliteMemory {
        return Err(DbInfraError::config(
            "sqlite-memory is only supported for the test environment",
        ));
    }
    Ok(())
}

/// Build the connection string for `db_kind` from process environment variables.
pub fn make_conn_spec(
    env: RuntimeEnv,
    db_kind: DbKind,
    owner: DbOwner,
) -> Result<String, DbInfraError> {
    make_conn_spec_with(env, db_kind, owner, |name| std::env::var(name).ok())
}

/// Same as [`make_conn_spec`] but reads variables through `lookup`.
pub fn make_conn_spec_with<F>(
    env: RuntimeEnv,
    db_kind: DbKind,
    owner: DbOwner,
    lookup: F,
) -> Result<String, DbInfraError>
where
    F: Fn(&str) -> Option<String>,
{
    validate_db_config(env, db_kind)?;

    match db_kind {
        DbKind::SqliteMemory => Ok("sqlite::memory:".to_string()),
        DbKind::SqliteFile => {
            let path = must_var(&lookup, "SQLITE_DB_PATH")?;
            Ok(format!("sqlite://{path}?mode=rwc"))
        }
        DbKind::Postgres => {
            let host = lookup("POSTGRES_HOST").unwrap_or_else(|| "localhost".to_string());
            let port = lookup("POSTGRES_PORT").unwrap_or_else(|| "5432".to_string());
            let db_name = db_name(&lookup, env)?;
            let (username, password) = credentials(&lookup, owner)?;
            let username = utf8_percent_encode(&username, NON_ALPHANUMERIC);
            let password = utf8_percent_encode(&password, NON_ALPHANUMERIC);
            Ok(format!(
                "postgresql://{username}:{password}@{host}:{port}/{db_name}"
            ))
        }
    }
}

/// Read `TRIVIA_DB_KIND`, defaulting to Postgres.
pub fn db_kind_from_env() -> Result<DbKind, DbInfraError> {
    match env::var("TRIVIA_DB_KIND") {
        Ok(raw) => raw.parse(),
        Err(env::VarError::NotPresent) => Ok(DbKind::Postgres),
        Err(e) => Err(DbInfraError::config(format!(
            "failed to read TRIVIA_DB_KIND: {e}"
        ))),
    }
}

fn db_name<F>(lookup: &F, env: RuntimeEnv) -> Result<String, DbInfraError>
where
    F: Fn(&str) -> Option<String>,
{
    match env {
        RuntimeEnv::Prod => must_var(lookup, "PROD_DB"),
        RuntimeEnv::Test => {
            let db_name = must_var(lookup, "TEST_DB")?;
            // Enforce safety: test DB must end with "_test"
            if !db_name.ends_with("_test") {
                return Err(DbInfraError::config(format!(
                    "Test profile requires database name to end with '_test', but got: '{db_name}'"
                )));
            }
            Ok(db_name)
        }
    }
}

fn credentials<F>(lookup: &F, owner: DbOwner) -> Result<(String, String), DbInfraError>
where
    F: Fn(&str) -> Option<String>,
{
    match owner {
        DbOwner::App => Ok((
            must_var(lookup, "APP_DB_USER")?,
            must_var(lookup, "APP_DB_PASSWORD")?,
        )),
        DbOwner::Owner => Ok((
            must_var(lookup, "TRIVIA_OWNER_USER")?,
            must_var(lookup, "TRIVIA_OWNER_PASSWORD")?,
        )),
    }
}

fn must_var<F>(lookup: &F, name: &str) -> Result<String, DbInfraError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name).ok_or_else(|| {
        DbInfraError::config(format!("Required environment variable '{name}' is not set"))
    })
}
