//! Service configuration and store selection.

use episodic_database::{DEFAULT_POOL_SIZE, DatabaseEpisodeStore};
use episodic_error::{ConfigError, EpisodicResult};
use episodic_interface::EpisodeStore;
use episodic_storage::InMemoryEpisodeStore;
use std::{net::SocketAddr, sync::Arc};
use tracing::{info, warn};

/// Default listen address.
pub const DEFAULT_BIND: &str = "127.0.0.1:8000";

/// Configuration for the HTTP service.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ServiceConfig {
    /// Address the listener binds to
    pub bind: SocketAddr,
    /// SQLite database URL; `None` keeps episodes in memory
    pub database_url: Option<String>,
    /// Maximum pooled database connections
    pub pool_size: u32,
}

impl ServiceConfig {
    /// Create a configuration from raw settings.
    ///
    /// An empty database URL counts as unset.
    ///
    /// # Examples
    ///
    /// ```
    /// use episodic_server::ServiceConfig;
    ///
    /// let config = ServiceConfig::new("0.0.0.0:9000", Some("".into()), 4).unwrap();
    /// assert_eq!(config.bind.port(), 9000);
    /// assert!(config.database_url.is_none());
    ///
    /// assert!(ServiceConfig::new("not-an-address", None, 4).is_err());
    /// ```
    pub fn new(
        bind: &str,
        database_url: Option<String>,
        pool_size: u32,
    ) -> Result<Self, ConfigError> {
        let bind = bind
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::new(format!("Invalid bind address '{}': {}", bind, e)))?;

        if pool_size == 0 {
            return Err(ConfigError::new("Pool size must be at least 1"));
        }

        Ok(Self {
            bind,
            database_url: database_url.filter(|url| !url.trim().is_empty()),
            pool_size,
        })
    }

    /// Open the episode store this configuration selects.
    ///
    /// A database URL selects the SQLite store; otherwise episodes live in
    /// memory and are lost on shutdown.
    pub fn open_store(&self) -> EpisodicResult<Arc<dyn EpisodeStore>> {
        match &self.database_url {
            Some(url) => {
                let store = DatabaseEpisodeStore::open(url, self.pool_size)?;
                info!(pool_size = self.pool_size, "Using SQLite episode store");
                Ok(Arc::new(store))
            }
            None => {
                warn!("No database URL configured, episodes are kept in memory only");
                Ok(Arc::new(InMemoryEpisodeStore::new()))
            }
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 8000)),
            database_url: None,
            pool_size: DEFAULT_POOL_SIZE,
        }
    }
}
