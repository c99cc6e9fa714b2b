use std::{env, path::PathBuf};

use anyhow::{Context, bail};

use crate::contact::ContactConfig;

pub const DEFAULT_CATALOG_PATH: &str = "data/fashionProducts.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    /// Whole catalog kept in one JSON slot on disk.
    Local { path: PathBuf },
    /// `products` table reached through SeaORM.
    Remote { database_url: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub backend: StoreBackend,
    pub seed_defaults: bool,
    pub contact: ContactConfig,
    pub jwt_secret: String,
    pub body_limit_bytes: usize,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);

        let backend = match env::var("STORE_BACKEND")
            .unwrap_or_else(|_| "local".to_string())
            .to_ascii_lowercase()
            .as_str()
        {
            "local" => StoreBackend::Local {
                path: env::var("CATALOG_PATH")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| PathBuf::from(DEFAULT_CATALOG_PATH)),
            },
            "remote" => StoreBackend::Remote {
                database_url: env::var("DATABASE_URL")
                    .context("DATABASE_URL is required when STORE_BACKEND=remote")?,
            },
            other => bail!("unknown STORE_BACKEND {other:?}, expected \"local\" or \"remote\""),
        };

        let seed_defaults = env::var("SEED_DEFAULTS")
            .ok()
            .map(|v| parse_flag(&v))
            .unwrap_or(true);

        let contact = env::var("CONTACT_PHONE")
            .map(ContactConfig::new)
            .unwrap_or_default();

        let jwt_secret = env::var("JWT_SECRET").context("JWT_SECRET is not set")?;

        let body_limit_bytes = env::var("BODY_LIMIT_BYTES")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(10 * 1024 * 1024);

        Ok(Self {
            host,
            port,
            backend,
            seed_defaults,
            contact,
            jwt_secret,
            body_limit_bytes,
        })
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}

#[cfg(test)]
mod tests {
    use super::parse_flag;

    #[test]
    fn flags_default_to_enabled() {
        assert!(parse_flag("true"));
        assert!(parse_flag("1"));
        assert!(parse_flag("yes"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag(" OFF "));
        assert!(!parse_flag("0"));
    }
}
