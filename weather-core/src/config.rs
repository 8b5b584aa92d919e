use std::env;

use tracing::debug;

use crate::error::Error;

/// Environment variable consulted when no key is passed on the command line.
pub const API_KEY_VAR: &str = "API_KEY";

/// Resolve the OpenWeather API key.
///
/// An explicit, non-empty key wins and the environment is never consulted.
/// Otherwise a local `.env` file is loaded (if one exists) and `API_KEY` is
/// read from the process environment. An empty value counts as missing.
pub fn resolve_api_key(explicit: Option<String>) -> Result<String, Error> {
    if let Some(key) = explicit.filter(|key| !key.is_empty()) {
        return Ok(key);
    }

    // Missing .env is fine; the variable may be set in the environment proper.
    dotenv::dotenv().ok();

    match env::var(API_KEY_VAR) {
        Ok(key) if !key.is_empty() => {
            debug!("Using API key from the environment");
            Ok(key)
        }
        _ => Err(Error::MissingApiKey),
    }
}
