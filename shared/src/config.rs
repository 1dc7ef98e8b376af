//! Configuration management for Lambda functions.

use std::env;

use crate::{Error, Result};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// MongoDB connection string
    pub mongodb_uri: String,
    /// Database name
    pub db_name: String,
    /// Holidays collection name
    pub collection: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A missing `MONGODB_URI` is a configuration error reported to the
    /// caller as a 500, not a startup failure.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            mongodb_uri: env::var("MONGODB_URI")
                .map_err(|_| Error::Config("MONGODB_URI not set".to_string()))?,
            db_name: env::var("DATABASE_NAME").unwrap_or_else(|_| "jadwal-pjr".to_string()),
            collection: env::var("HOLIDAYS_COLLECTION").unwrap_or_else(|_| "holidays".to_string()),
        })
    }
}
