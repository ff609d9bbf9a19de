//! Resolves service names to cached, credentialed translation services.

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::{Config, ConfigManager, Credential};
use crate::error::{Result, TranslateError};
use crate::translation::{ServiceKind, TranslationService};

/// Process-scoped context owning the config store and the live services.
///
/// At most one service instance exists per provider. Updating a provider's
/// credential evicts its instance so the next [`resolve`](Self::resolve)
/// builds a fresh one.
pub struct ServiceRegistry {
    config: ConfigManager,
    services: HashMap<ServiceKind, Arc<TranslationService>>,
}

impl ServiceRegistry {
    pub fn new(config: ConfigManager) -> Self {
        Self {
            config,
            services: HashMap::new(),
        }
    }

    pub const fn config_manager(&self) -> &ConfigManager {
        &self.config
    }

    /// Reads the current config, seeding built-in defaults on first use only.
    pub fn config(&self) -> Result<Config> {
        self.config.load_or_seed()
    }

    /// Returns the service for `service`, or for the configured default when `None`.
    ///
    /// Fails with [`TranslateError::MissingCredential`] when no complete
    /// credential is stored; no request is made in that case.
    pub fn resolve(&mut self, service: Option<&str>) -> Result<Arc<TranslationService>> {
        let config = self.config()?;
        let name = service.unwrap_or(config.default_service.as_str());
        let kind: ServiceKind = name.parse()?;

        if let Some(existing) = self.services.get(&kind) {
            return Ok(Arc::clone(existing));
        }

        let credential = config
            .credential(kind.as_str())
            .cloned()
            .ok_or_else(|| TranslateError::MissingCredential(kind.to_string()))?;

        tracing::debug!(service = %kind, "constructing translation service");
        let instance = Arc::new(TranslationService::new(kind, credential));
        self.services.insert(kind, Arc::clone(&instance));

        Ok(instance)
    }

    /// Stores `credential` for `service` and evicts any cached instance.
    pub fn set_credential(&mut self, service: &str, credential: Credential) -> Result<()> {
        let kind: ServiceKind = service.parse()?;
        if !credential.is_complete() {
            return Err(TranslateError::ConfigFormat(
                "appKey and appSecret must both be non-empty".to_string(),
            ));
        }

        self.config.update(|config| {
            config.api_keys.insert(kind.to_string(), credential);
        })?;

        if self.services.remove(&kind).is_some() {
            tracing::debug!(service = %kind, "evicted cached service after credential update");
        }
        Ok(())
    }

    pub fn set_default_service(&self, service: &str) -> Result<()> {
        let kind: ServiceKind = service.parse()?;
        self.config.update(|config| {
            config.default_service = kind.to_string();
        })?;
        Ok(())
    }

    /// Updates whichever of the default languages are given.
    pub fn set_default_languages(&self, from: Option<&str>, to: Option<&str>) -> Result<()> {
        self.config.update(|config| {
            if let Some(from) = from {
                config.default_source_lang = from.to_string();
            }
            if let Some(to) = to {
                config.default_target_lang = to.to_string();
            }
        })?;
        Ok(())
    }

    /// Restores the built-in defaults and drops every cached service.
    pub fn reset(&mut self) -> Result<()> {
        self.config.save(&Config::default())?;
        self.services.clear();
        tracing::debug!("configuration reset to defaults");
        Ok(())
    }
}
