use std::env;

/// Environment variable names - single source of truth
pub mod env_vars {
    pub const PORT: &str = "PORT";
    pub const BIND_HOST: &str = "BIND_HOST";
    pub const DATABASE_URL: &str = "DATABASE_URL";
    /// Maximum number of pooled SQLite connections.
    pub const DB_POOL_SIZE: &str = "DB_POOL_SIZE";
}

/// Default values
pub mod defaults {
    pub const PORT: u16 = 8080;
    pub const BIND_HOST: &str = "0.0.0.0";
    pub const DATABASE_URL: &str = "./.db/notes.db";
    pub const DB_POOL_SIZE: u32 = 8;
}

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub bind_host: String,
    pub database_url: String,
    pub db_pool_size: u32,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build a config from an arbitrary variable source.
    /// Missing values use defaults; unparseable numbers are logged and replaced by defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let db_pool_size = parse_or_default(&lookup, env_vars::DB_POOL_SIZE, defaults::DB_POOL_SIZE);

        Self {
            port: parse_or_default(&lookup, env_vars::PORT, defaults::PORT),
            bind_host: lookup(env_vars::BIND_HOST)
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| defaults::BIND_HOST.to_string()),
            database_url: lookup(env_vars::DATABASE_URL)
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| defaults::DATABASE_URL.to_string()),
            // r2d2 rejects a zero-sized pool
            db_pool_size: if db_pool_size == 0 { defaults::DB_POOL_SIZE } else { db_pool_size },
        }
    }
}

fn parse_or_default<F, T>(lookup: &F, name: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr + std::fmt::Display + Copy,
{
    match lookup(name) {
        Some(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                log::warn!("Invalid value for {}: {:?}, using default {}", name, raw, default);
                default
            }
        },
        None => default,
    }
}
