use thiserror::Error;

/// Failure to reach the configured database.
///
/// Displays as the driver's own message, so it can be embedded verbatim in
/// the status document.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("{0}")]
    Connect(String),
}
