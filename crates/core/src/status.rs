//! The status document returned by the diagnostic endpoint

use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};

use crate::connection::ConnectionResult;
use crate::settings::Settings;

/// Label reported in the `app` field
pub const APP_LABEL: &str = "PHP Application on Google Cloud Run";

/// Placeholder for metadata that could not be gathered
pub const UNKNOWN: &str = "Unknown";

const REQUEST_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Host and runtime metadata
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerInfo {
    pub php_version: String,
    pub server_software: String,
    pub hostname: String,
    pub remote_addr: String,
    pub request_time: String,
    pub environment: String,
}

impl ServerInfo {
    /// Gather metadata for the current request, using the machine hostname
    /// and the local clock.
    pub fn collect(
        runtime_version: &str,
        server_software: Option<&str>,
        remote_addr: Option<&str>,
        environment: &str,
    ) -> Self {
        Self::new(
            runtime_version,
            server_software,
            machine_hostname().as_deref(),
            remote_addr,
            &Local::now(),
            environment,
        )
    }

    pub fn new<Tz: TimeZone>(
        runtime_version: &str,
        server_software: Option<&str>,
        hostname: Option<&str>,
        remote_addr: Option<&str>,
        request_time: &DateTime<Tz>,
        environment: &str,
    ) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        Self {
            php_version: known(Some(runtime_version)),
            server_software: known(server_software),
            hostname: known(hostname),
            remote_addr: known(remote_addr),
            request_time: request_time.format(REQUEST_TIME_FORMAT).to_string(),
            environment: environment.to_string(),
        }
    }
}

fn known(value: Option<&str>) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or(UNKNOWN)
        .to_string()
}

fn machine_hostname() -> Option<String> {
    hostname::get()
        .ok()
        .map(|name| name.to_string_lossy().into_owned())
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DatabaseSection {
    pub host: String,
    pub name: String,
    pub connection: ConnectionResult,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StorageSection {
    pub bucket: String,
}

/// Top-level status document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusResponse {
    pub app: String,
    pub status: String,
    pub server_info: ServerInfo,
    pub database: DatabaseSection,
    pub storage: StorageSection,
}

impl StatusResponse {
    pub fn new(settings: &Settings, server_info: ServerInfo, connection: ConnectionResult) -> Self {
        Self {
            app: APP_LABEL.to_string(),
            status: "running".to_string(),
            server_info,
            database: DatabaseSection {
                host: settings.db_host.clone(),
                name: settings.db_name.clone(),
                connection,
            },
            storage: StorageSection {
                bucket: settings.storage_bucket.clone(),
            },
        }
    }

    /// Render as indented, multi-line JSON
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::{Value, json};
    use std::collections::HashMap;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 7, 9, 5, 1).unwrap()
    }

    #[test]
    fn request_time_is_zero_padded() {
        let info = ServerInfo::new("rustc 1.85.0", None, None, None, &fixed_time(), "dev");

        assert_eq!(info.request_time, "2026-03-07 09:05:01");
    }

    #[test]
    fn missing_metadata_becomes_unknown() {
        let info = ServerInfo::new("", None, Some(""), None, &fixed_time(), "dev");

        assert_eq!(info.php_version, UNKNOWN);
        assert_eq!(info.server_software, UNKNOWN);
        assert_eq!(info.hostname, UNKNOWN);
        assert_eq!(info.remote_addr, UNKNOWN);
    }

    #[test]
    fn document_has_fixed_shape() {
        let settings = Settings::load(&HashMap::<String, String>::new());
        let info = ServerInfo::new(
            "rustc 1.85.0",
            Some("appstatus-server/0.1.0"),
            Some("web-1"),
            Some("10.1.2.3"),
            &fixed_time(),
            &settings.environment,
        );
        let response = StatusResponse::new(&settings, info, ConnectionResult::skipped());

        let value: Value = serde_json::from_str(&response.to_pretty_json().unwrap()).unwrap();
        assert_eq!(
            value,
            json!({
                "app": "PHP Application on Google Cloud Run",
                "status": "running",
                "server_info": {
                    "php_version": "rustc 1.85.0",
                    "server_software": "appstatus-server/0.1.0",
                    "hostname": "web-1",
                    "remote_addr": "10.1.2.3",
                    "request_time": "2026-03-07 09:05:01",
                    "environment": "dev"
                },
                "database": {
                    "host": "localhost",
                    "name": "php_app",
                    "connection": {
                        "status": "not_tested",
                        "message": "Connection test skipped"
                    }
                },
                "storage": { "bucket": "demo-bucket" }
            })
        );
    }

    #[test]
    fn pretty_json_keeps_field_order() {
        let settings = Settings::load(&HashMap::<String, String>::new());
        let info = ServerInfo::new("x", None, None, None, &fixed_time(), "dev");
        let body = StatusResponse::new(&settings, info, ConnectionResult::skipped())
            .to_pretty_json()
            .unwrap();

        assert!(body.starts_with("{\n  \"app\": "));
        let order = ["\"app\"", "\"status\"", "\"server_info\"", "\"database\"", "\"storage\""];
        let positions: Vec<usize> = order.iter().map(|k| body.find(k).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
