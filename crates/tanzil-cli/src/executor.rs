//! Running the assembled script against the database.

use std::fmt;

use postgres::{Client, NoTls};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExecuteError {
    #[error("failed to connect to {target}: {source}")]
    Connect {
        target: String,
        #[source]
        source: postgres::Error,
    },

    #[error("failed to start transaction: {0}")]
    Begin(#[source] postgres::Error),

    #[error("database rejected the import script: {0}")]
    Execute(#[source] postgres::Error),

    #[error("failed to commit import: {0}")]
    Commit(#[source] postgres::Error),

    #[error("failed to close connection: {0}")]
    Close(#[source] postgres::Error),
}

/// Something that can run a batch of SQL statements as one unit.
pub trait StatementExecutor {
    /// Execute `sql` and commit, or leave nothing behind on failure.
    fn execute_statements(&mut self, sql: &str) -> Result<(), ExecuteError>;
}

/// Connection parameters, in the order they are given on the command line.
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionSettings {
    pub database: String,
    pub host: String,
    pub user: String,
    pub password: String,
    pub port: u16,
}

impl ConnectionSettings {
    /// `user@host:port/database`, safe to log.
    pub fn target(&self) -> String {
        format!(
            "{}@{}:{}/{}",
            self.user, self.host, self.port, self.database
        )
    }
}

impl fmt::Debug for ConnectionSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionSettings")
            .field("database", &self.database)
            .field("host", &self.host)
            .field("user", &self.user)
            .field("password", &"[REDACTED]")
            .field("port", &self.port)
            .finish()
    }
}

/// PostgreSQL executor: the whole script runs in one transaction.
pub struct PostgresExecutor {
    client: Client,
}

impl PostgresExecutor {
    pub fn connect(settings: &ConnectionSettings) -> Result<Self, ExecuteError> {
        let target = settings.target();
        debug!(database = %target, "connecting to database");

        let mut config = postgres::Config::new();
        config
            .dbname(&settings.database)
            .host(&settings.host)
            .user(&settings.user)
            .password(&settings.password)
            .port(settings.port);
        let client = config
            .connect(NoTls)
            .map_err(|source| ExecuteError::Connect { target, source })?;
        Ok(Self { client })
    }

    pub fn close(self) -> Result<(), ExecuteError> {
        self.client.close().map_err(ExecuteError::Close)
    }
}

impl StatementExecutor for PostgresExecutor {
    fn execute_statements(&mut self, sql: &str) -> Result<(), ExecuteError> {
        let mut transaction = self.client.transaction().map_err(ExecuteError::Begin)?;
        transaction
            .batch_execute(sql)
            .map_err(ExecuteError::Execute)?;
        transaction.commit().map_err(ExecuteError::Commit)?;
        info!(bytes = sql.len(), "import script committed");
        Ok(())
    }
}
