//! Remote registry loading.
//!
//! Each enabled registry is fetched in stored order. A registry that fails
//! to fetch or decode is logged and skipped; the others still contribute.

use tracing::{debug, warn};

use super::fetch::HttpFetcher;
use crate::catalog::{Template, TemplateRegistry};
use crate::config::Configuration;
use crate::error::{BoilerplateError, Result};

/// Fetch and decode one registry document.
///
/// The token is attached only when the registry requires auth and a
/// non-empty token is available.
pub fn fetch_registry(
    fetcher: &HttpFetcher,
    url: &str,
    token: Option<&str>,
    requires_auth: bool,
) -> Result<TemplateRegistry> {
    let token = token.filter(|t| requires_auth && !t.is_empty());
    let body = fetcher.fetch(url, token)?;

    serde_json::from_str(&body).map_err(|e| BoilerplateError::RegistryDecode {
        url: url.to_string(),
        message: e.to_string(),
    })
}

/// Fetch every enabled registry and flatten their templates.
///
/// Order follows the registries' stored order, then each document's entry
/// order. Repos are resolved against the document's `default_repo`.
pub fn fetch_all_registries(fetcher: &HttpFetcher, config: &Configuration) -> Vec<Template> {
    let mut templates = Vec::new();

    for registry in &config.registries {
        if !registry.enabled {
            debug!(registry = %registry.id, "skipping disabled registry");
            continue;
        }

        match fetch_registry(fetcher, &registry.url, config.token(), registry.requires_auth) {
            Ok(document) => {
                debug!(
                    registry = %registry.id,
                    count = document.templates.len(),
                    "fetched registry"
                );
                let default_repo = document.default_repo;
                templates.extend(
                    document
                        .templates
                        .into_iter()
                        .map(|entry| entry.into_template(&registry.id, &default_repo)),
                );
            }
            Err(e) => {
                warn!(registry = %registry.id, error = %e, "failed to fetch registry");
            }
        }
    }

    templates
}
