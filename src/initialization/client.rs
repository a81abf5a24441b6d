//! HTTP client initialization.

use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::HTTP_TIMEOUT_SECS;
use crate::error_handling::InitializationError;

/// Initializes the HTTP client used by the recommendation service call.
///
/// # Returns
///
/// A configured `reqwest::Client` behind an `Arc`, or an
/// `InitializationError` if client creation fails.
pub fn init_client() -> Result<Arc<reqwest::Client>, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .user_agent(concat!("mail_posture/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(Arc::new(client))
}
