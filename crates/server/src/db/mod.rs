//! Database connectivity probe

use appstatus_core::{ProbeError, Settings};
use async_trait::async_trait;
use sqlx::{Connection, mysql::MySqlConnectOptions, mysql::MySqlConnection};

/// Default MySQL port
const DEFAULT_PORT: u16 = 3306;

/// A single best-effort attempt to reach the configured database
#[async_trait]
pub trait DatabaseProbe: Send + Sync {
    async fn probe(&self, settings: &Settings) -> Result<(), ProbeError>;
}

/// Opens one MySQL connection per probe and closes it before returning
#[derive(Debug, Clone, Copy, Default)]
pub struct MySqlProbe;

#[async_trait]
impl DatabaseProbe for MySqlProbe {
    async fn probe(&self, settings: &Settings) -> Result<(), ProbeError> {
        let conn = MySqlConnection::connect_with(&connect_options(settings))
            .await
            .map_err(|e| ProbeError::Connect(e.to_string()))?;

        // Sends COM_QUIT and waits for the socket to shut down.
        if let Err(e) = conn.close().await {
            tracing::debug!(error = %e, "Database connection closed with error");
        }

        Ok(())
    }
}

fn connect_options(settings: &Settings) -> MySqlConnectOptions {
    let opts = MySqlConnectOptions::new()
        .username(&settings.db_user)
        .password(&settings.db_password)
        .database(&settings.db_name);

    match split_host_port(&settings.db_host) {
        Endpoint::Socket(path) => opts.socket(path),
        Endpoint::Tcp(host, port) => opts.host(host).port(port.unwrap_or(DEFAULT_PORT)),
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Endpoint<'a> {
    Tcp(&'a str, Option<u16>),
    Socket(&'a str),
}

/// Split `DB_HOST` into host and optional port.
///
/// Accepts `host`, `host:port`, `[v6addr]:port`, bare IPv6 addresses and
/// absolute Unix socket paths.
fn split_host_port(raw: &str) -> Endpoint<'_> {
    if raw.starts_with('/') {
        return Endpoint::Socket(raw);
    }

    if let Some(rest) = raw.strip_prefix('[') {
        if let Some((addr, tail)) = rest.split_once(']') {
            let port = tail.strip_prefix(':').and_then(|p| p.parse().ok());
            return Endpoint::Tcp(addr, port);
        }
    }

    match raw.rsplit_once(':') {
        Some((host, port)) if !host.contains(':') => match port.parse() {
            Ok(port) => Endpoint::Tcp(host, Some(port)),
            Err(_) => Endpoint::Tcp(raw, None),
        },
        _ => Endpoint::Tcp(raw, None),
    }
}
