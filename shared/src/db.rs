//! Database connection management.

use mongodb::options::ClientOptions;
use mongodb::{Client, Collection};
use std::time::Duration;
use tokio::sync::OnceCell;

use crate::models::HolidayDocument;
use crate::{Config, Result};

/// Connect to the MongoDB deployment named by the configuration.
pub async fn connect(config: &Config) -> Result<Client> {
    tracing::info!("Connecting to MongoDB database {}", config.db_name);

    let mut options = ClientOptions::parse(&config.mongodb_uri).await?;
    options.app_name = Some("holiday-api".to_string());
    options.server_selection_timeout = Some(Duration::from_secs(3));

    let client = Client::with_options(options)?;

    Ok(client)
}

/// Lazily-initialized handle to the holidays collection.
///
/// The first request establishes the connection and caches the collection
/// handle for the remainder of the execution context's lifetime. A failed
/// initialization leaves the slot empty, so every subsequent request reports
/// the cause again instead of holding a dead handle.
#[derive(Default)]
pub struct HolidayStore {
    collection: OnceCell<Collection<HolidayDocument>>,
}

impl HolidayStore {
    pub fn new() -> Self {
        Self {
            collection: OnceCell::new(),
        }
    }

    /// Get the holidays collection, connecting on first use.
    pub async fn collection(&self) -> Result<&Collection<HolidayDocument>> {
        self.collection
            .get_or_try_init(|| async {
                let config = Config::from_env()?;
                let client = connect(&config).await?;
                Ok(client
                    .database(&config.db_name)
                    .collection(&config.collection))
            })
            .await
    }
}
