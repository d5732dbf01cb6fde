//! # Template Gateway
//!
//! Client-side facade over a [`TemplateTransport`] with a last-known-good
//! cache.
//!
//! ```text
//! caller ──▶ TemplateGateway ──▶ transport ──▶ store
//!                 │   ▲
//!                 ▼   │ fallback on Transport/Decode errors
//!              local cache
//! ```
//!
//! Store verdicts (`NotFound`, `ProtectedTemplate`, `Conflict`) always reach
//! the caller and leave the cache untouched. Channel failures never do when
//! the cache can answer: reads return cached copies and writes are applied
//! to the cache optimistically, flagged with a warning.

use crate::errors::{GatewayError, Result};
use crate::transport::TemplateTransport;
use chrono::Utc;
use pagekit_schema::Template;
use std::collections::BTreeMap;
use tracing::{debug, warn};
use uuid::Uuid;

/// Where a gateway result came from
#[derive(Debug, Clone, PartialEq)]
pub enum Synced<T> {
    /// Confirmed by the store
    Remote(T),
    /// Served or applied locally while the store was unreachable
    Offline { value: T, warning: String },
}

impl<T> Synced<T> {
    pub fn value(&self) -> &T {
        match self {
            Synced::Remote(value) | Synced::Offline { value, .. } => value,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Synced::Remote(value) | Synced::Offline { value, .. } => value,
        }
    }

    pub fn is_offline(&self) -> bool {
        matches!(self, Synced::Offline { .. })
    }

    pub fn warning(&self) -> Option<&str> {
        match self {
            Synced::Offline { warning, .. } => Some(warning),
            Synced::Remote(_) => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Synced<U> {
        match self {
            Synced::Remote(value) => Synced::Remote(f(value)),
            Synced::Offline { value, warning } => Synced::Offline {
                value: f(value),
                warning,
            },
        }
    }
}

fn offline_warning(op: &str, err: &GatewayError) -> String {
    format!("{} applied locally; store unreachable ({})", op, err)
}

pub struct TemplateGateway<T> {
    transport: T,
    cache: BTreeMap<String, Template>,
}

impl<T: TemplateTransport> TemplateGateway<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            cache: BTreeMap::new(),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn cached(&self, id: &str) -> Option<&Template> {
        self.cache.get(id)
    }

    /// Cached templates in listing order
    pub fn cached_templates(&self) -> Vec<Template> {
        let mut all: Vec<Template> = self.cache.values().cloned().collect();
        all.sort_by(Template::listing_order);
        all
    }

    fn remember(&mut self, template: &Template) {
        self.cache.insert(template.id.clone(), template.clone());
    }

    pub async fn list(&mut self) -> Result<Synced<Vec<Template>>> {
        debug!("gateway list");
        match self.transport.list().await {
            Ok(templates) => {
                self.cache = templates
                    .iter()
                    .map(|t| (t.id.clone(), t.clone()))
                    .collect();
                Ok(Synced::Remote(templates))
            }
            Err(err) if err.is_recoverable() => {
                warn!(error = %err, "serving cached template list");
                Ok(Synced::Offline {
                    value: self.cached_templates(),
                    warning: format!("showing cached templates; store unreachable ({})", err),
                })
            }
            Err(err) => Err(err),
        }
    }

    pub async fn get(&mut self, id: &str) -> Result<Synced<Template>> {
        debug!(id, "gateway get");
        match self.transport.get(id).await {
            Ok(template) => {
                self.remember(&template);
                Ok(Synced::Remote(template))
            }
            Err(err) if err.is_recoverable() => match self.cache.get(id) {
                Some(cached) => {
                    warn!(id, error = %err, "serving cached template");
                    Ok(Synced::Offline {
                        value: cached.clone(),
                        warning: format!("showing cached copy; store unreachable ({})", err),
                    })
                }
                None => Err(err),
            },
            Err(err) => Err(err),
        }
    }

    pub async fn create(&mut self, template: &Template) -> Result<Synced<Template>> {
        debug!(name = %template.name, "gateway create");
        match self.transport.create(template).await {
            Ok(stored) => {
                self.remember(&stored);
                Ok(Synced::Remote(stored))
            }
            Err(err) if err.is_recoverable() => {
                let now = Utc::now();
                let local = Template {
                    id: format!("local-{}", Uuid::new_v4().simple()),
                    created_at: now,
                    updated_at: now,
                    is_default: false,
                    usage_count: 0,
                    version: 1,
                    ..template.clone()
                };
                warn!(id = %local.id, error = %err, "template created locally");
                self.remember(&local);
                Ok(Synced::Offline {
                    value: local,
                    warning: offline_warning("create", &err),
                })
            }
            Err(err) => Err(err),
        }
    }

    pub async fn update(
        &mut self,
        id: &str,
        template: &Template,
        expected_version: Option<u64>,
    ) -> Result<Synced<Template>> {
        debug!(id, ?expected_version, "gateway update");
        match self.transport.update(id, template, expected_version).await {
            Ok(stored) => {
                self.remember(&stored);
                Ok(Synced::Remote(stored))
            }
            Err(err) if err.is_recoverable() => {
                let Some(cached) = self.cache.get_mut(id) else {
                    return Err(err);
                };
                if let Some(expected) = expected_version {
                    if expected != cached.version {
                        return Err(GatewayError::Conflict {
                            expected,
                            actual: cached.version,
                        });
                    }
                }
                cached.name = template.name.clone();
                cached.description = template.description.clone();
                cached.category = template.category;
                cached.thumbnail = template.thumbnail.clone();
                cached.components = template.components.clone();
                cached.updated_at = Utc::now();
                cached.version += 1;
                warn!(id, error = %err, "template updated locally");
                Ok(Synced::Offline {
                    value: cached.clone(),
                    warning: offline_warning("update", &err),
                })
            }
            Err(err) => Err(err),
        }
    }

    /// Delete a template. Cached defaults are refused before any network call.
    pub async fn delete(&mut self, id: &str) -> Result<Synced<()>> {
        if self.cache.get(id).is_some_and(|t| t.is_default) {
            return Err(GatewayError::ProtectedTemplate(id.to_string()));
        }

        debug!(id, "gateway delete");
        match self.transport.delete(id).await {
            Ok(()) => {
                self.cache.remove(id);
                Ok(Synced::Remote(()))
            }
            Err(err) if err.is_recoverable() => {
                if self.cache.remove(id).is_none() {
                    return Err(err);
                }
                warn!(id, error = %err, "template deleted locally");
                Ok(Synced::Offline {
                    value: (),
                    warning: offline_warning("delete", &err),
                })
            }
            Err(err) => Err(err),
        }
    }

    /// Record that the template was applied to a live page
    pub async fn apply(&mut self, id: &str) -> Result<Synced<Template>> {
        debug!(id, "gateway apply");
        match self.transport.apply(id).await {
            Ok(stored) => {
                self.remember(&stored);
                Ok(Synced::Remote(stored))
            }
            Err(err) if err.is_recoverable() => {
                let Some(cached) = self.cache.get_mut(id) else {
                    return Err(err);
                };
                cached.usage_count += 1;
                warn!(id, error = %err, "usage recorded locally");
                Ok(Synced::Offline {
                    value: cached.clone(),
                    warning: offline_warning("apply", &err),
                })
            }
            Err(err) => Err(err),
        }
    }

    /// Copy a template under a new id with a "(copy)" name
    pub async fn duplicate(&mut self, id: &str) -> Result<Synced<Template>> {
        let source = self.get(id).await?;
        let source_warning = source.warning().map(str::to_string);
        let copy = source.into_value().copy_of();

        let created = self.create(&copy).await?;
        Ok(match (created, source_warning) {
            (Synced::Remote(value), Some(warning)) => Synced::Offline { value, warning },
            (created, _) => created,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synced_accessors() {
        let remote = Synced::Remote(1);
        assert!(!remote.is_offline());
        assert_eq!(remote.warning(), None);

        let offline = Synced::Offline {
            value: 2,
            warning: "down".to_string(),
        };
        assert!(offline.is_offline());
        assert_eq!(offline.warning(), Some("down"));
        assert_eq!(offline.map(|v| v * 10).into_value(), 20);
    }
}
