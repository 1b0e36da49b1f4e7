use super::{HttpProvider, Provider};
use crate::config::ProviderSettings;
use crate::{Error, Result};
use std::sync::Arc;

/// Name of the JSON-over-HTTP provider.
pub const HTTP_PROVIDER: &str = "http";

/// Build a provider by name from unresolved settings.
///
/// Only [`HTTP_PROVIDER`] is known. The name is checked before the settings are
/// resolved, so an unknown provider is reported even when the settings are empty.
pub fn create_provider(provider_name: &str, settings: &ProviderSettings) -> Result<Arc<dyn Provider>> {
    match provider_name {
        HTTP_PROVIDER => {
            let config = settings.resolve()?;
            Ok(Arc::new(HttpProvider::new(config)?))
        }
        other => Err(Error::configuration(format!(
            "Unsupported provider '{}'.",
            other
        ))),
    }
}
