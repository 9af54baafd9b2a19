//! Server settings loaded via OrthoConfig and the derived server
//! configuration.

use std::net::{Ipv4Addr, SocketAddr};

use drafts::outbound::persistence::{DbPool, PoolConfig};
use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_POOL_MAX_SIZE: u32 = 10;

/// Settings read from `DRAFTS_*` environment variables, CLI flags and
/// configuration files.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "DRAFTS")]
pub struct ServerSettings {
    /// Socket address to listen on.
    pub bind_addr: Option<SocketAddr>,
    /// PostgreSQL URL. Without one the server keeps data in memory.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub pool_max_size: Option<u32>,
    /// Apply embedded migrations before serving.
    pub run_migrations: Option<bool>,
}

impl ServerSettings {
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
            .unwrap_or_else(|| SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)))
    }

    pub fn database_url(&self) -> Option<&str> {
        self.database_url.as_deref().filter(|url| !url.trim().is_empty())
    }

    pub fn pool_max_size(&self) -> u32 {
        self.pool_max_size.unwrap_or(DEFAULT_POOL_MAX_SIZE)
    }

    pub fn run_migrations(&self) -> bool {
        self.run_migrations.unwrap_or(true)
    }

    /// Pool settings, when a database is configured.
    pub fn pool_config(&self) -> Option<PoolConfig> {
        self.database_url()
            .map(|url| PoolConfig::new(url).with_max_size(self.pool_max_size()))
    }
}

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            db_pool: None,
        }
    }

    /// Back the stores with PostgreSQL instead of memory.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 4] = [
        "DRAFTS_BIND_ADDR",
        "DRAFTS_DATABASE_URL",
        "DRAFTS_POOL_MAX_SIZE",
        "DRAFTS_RUN_MIGRATIONS",
    ];

    fn load_from_empty_args() -> ServerSettings {
        ServerSettings::load_from_iter([OsString::from("drafts")]).expect("config should load")
    }

    #[rstest]
    fn defaults_apply_when_unset() {
        let _guard = lock_env(VARS.map(|var| (var, None::<String>)));

        let settings = load_from_empty_args();
        assert_eq!(settings.bind_addr(), "0.0.0.0:8080".parse::<SocketAddr>().expect("address"));
        assert!(settings.database_url().is_none());
        assert!(settings.pool_config().is_none());
        assert_eq!(settings.pool_max_size(), 10);
        assert!(settings.run_migrations());
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("DRAFTS_BIND_ADDR", Some("127.0.0.1:9000".to_owned())),
            (
                "DRAFTS_DATABASE_URL",
                Some("postgres://localhost/drafts".to_owned()),
            ),
            ("DRAFTS_POOL_MAX_SIZE", Some("4".to_owned())),
            ("DRAFTS_RUN_MIGRATIONS", Some("false".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.bind_addr(), "127.0.0.1:9000".parse::<SocketAddr>().expect("address"));
        assert!(!settings.run_migrations());
        let pool = settings.pool_config().expect("database configured");
        assert_eq!(pool.database_url(), "postgres://localhost/drafts");
        assert_eq!(pool.max_size(), 4);
    }

    #[rstest]
    fn blank_database_url_means_memory() {
        let _guard = lock_env([
            ("DRAFTS_BIND_ADDR", None),
            ("DRAFTS_DATABASE_URL", Some("  ".to_owned())),
            ("DRAFTS_POOL_MAX_SIZE", None),
            ("DRAFTS_RUN_MIGRATIONS", None),
        ]);

        assert!(load_from_empty_args().pool_config().is_none());
    }
}
