//! Network plumbing for the browser client.
//!
//! SYSTEM CONTEXT
//! ==============
//! The `yoga` gateways are transport-agnostic; this module supplies the
//! browser implementation and the API configuration the page is built with.

pub mod transport;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use yoga::ClientConfig;

/// API origin baked in at build time, if any.
const BUILD_API_BASE_URL: Option<&str> = option_env!("YOGA_API_BASE_URL");

/// Config for the page's API client.
///
/// An explicit base URL wins; otherwise (or if it is malformed) requests go
/// to the page's own origin.
pub fn api_config(base_url: Option<&str>) -> ClientConfig {
    match base_url.map(ClientConfig::with_base_url) {
        Some(Ok(config)) => config,
        Some(Err(_)) | None => ClientConfig::same_origin(),
    }
}

/// [`api_config`] over the build-time `YOGA_API_BASE_URL`.
pub fn build_config() -> ClientConfig {
    api_config(BUILD_API_BASE_URL)
}
