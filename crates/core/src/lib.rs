//! appstatus-core: Shared types for the status endpoint
//!
//! This crate provides the settings loader, the server metadata collector,
//! the probe outcome type and the status document itself.

pub mod connection;
pub mod error;
pub mod settings;
pub mod status;

pub use connection::ConnectionResult;
pub use error::ProbeError;
pub use settings::{EnvSource, ProcessEnv, Settings};
pub use status::{DatabaseSection, ServerInfo, StatusResponse, StorageSection};
