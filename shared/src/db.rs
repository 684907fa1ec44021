//! Database connection management.

use std::time::Duration;

use mongodb::options::ClientOptions;
use mongodb::{Client, Database};
use tracing::{debug, info};

use crate::config::DEFAULT_DATABASE;
use crate::{Config, Result};

/// How long the driver waits to find a reachable server before failing.
const SERVER_SELECTION_TIMEOUT: Duration = Duration::from_secs(5);

/// An open database connection scoped to one unit of work.
///
/// Scripts open one, pass it by reference to each operation and call
/// [`Connection::close`] on every exit path.
pub struct Connection {
    client: Client,
    database: Database,
}

impl Connection {
    /// Connect using the given configuration.
    ///
    /// The database is taken from [`Config::database_name`], then from the
    /// connection string, then [`DEFAULT_DATABASE`].
    pub async fn open(config: &Config) -> Result<Self> {
        let mut options = ClientOptions::parse(&config.database_uri).await?;
        if options.server_selection_timeout.is_none() {
            options.server_selection_timeout = Some(SERVER_SELECTION_TIMEOUT);
        }
        options.app_name.get_or_insert_with(|| "event-admin".to_string());

        let client = Client::with_options(options)?;
        let database = match config.database_name.as_deref() {
            Some(name) => client.database(name),
            None => client
                .default_database()
                .unwrap_or_else(|| client.database(DEFAULT_DATABASE)),
        };

        info!(
            uri = %config.redacted_uri(),
            source = config.uri_var,
            database = database.name(),
            "Opened database connection"
        );

        Ok(Self { client, database })
    }

    /// The database this connection is bound to.
    pub fn database(&self) -> &Database {
        &self.database
    }

    /// Names of all collections in the database.
    ///
    /// This is the first call that actually reaches the server, so it doubles
    /// as a connectivity check.
    pub async fn collection_names(&self) -> Result<Vec<String>> {
        let mut names = self.database.list_collection_names().await?;
        names.sort();
        Ok(names)
    }

    /// Release the connection.
    pub async fn close(self) {
        let Connection { client, database } = self;
        debug!(database = database.name(), "Closing database connection");
        drop(database);
        client.shutdown().await;
    }
}
