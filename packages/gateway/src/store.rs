//! # Template Repository
//!
//! Authoritative template store. The server wraps one of these; tests and
//! offline tooling use it in-process through `LocalTransport`.
//!
//! System-managed fields (`id`, `createdAt`, `isDefault`, `usageCount`,
//! `version`) are only ever set here; values supplied by callers are ignored.

use crate::errors::{GatewayError, Result};
use chrono::Utc;
use pagekit_schema::Template;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Clone, Default)]
pub struct TemplateRepository {
    templates: BTreeMap<String, Template>,
}

fn new_template_id() -> String {
    format!("tpl-{}", Uuid::new_v4().simple())
}

impl TemplateRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// All templates, defaults first, then most recently updated
    pub fn list(&self) -> Vec<Template> {
        let mut all: Vec<Template> = self.templates.values().cloned().collect();
        all.sort_by(Template::listing_order);
        all
    }

    pub fn get(&self, id: &str) -> Result<Template> {
        self.templates
            .get(id)
            .cloned()
            .ok_or_else(|| GatewayError::NotFound(id.to_string()))
    }

    /// Store a new template under a fresh id
    pub fn create(&mut self, template: Template) -> Template {
        let now = Utc::now();
        let stored = Template {
            id: new_template_id(),
            created_at: now,
            updated_at: now,
            is_default: false,
            usage_count: 0,
            version: 1,
            ..template
        };
        debug!(id = %stored.id, name = %stored.name, "template created");
        self.templates.insert(stored.id.clone(), stored.clone());
        stored
    }

    /// Store a shipped default template. A non-empty `id` is kept so seeding
    /// the same default twice replaces rather than duplicates it.
    pub fn seed_default(&mut self, template: Template) -> Template {
        let now = Utc::now();
        let id = if template.id.is_empty() {
            new_template_id()
        } else {
            template.id.clone()
        };
        let stored = Template {
            id,
            created_at: now,
            updated_at: now,
            is_default: true,
            usage_count: 0,
            version: 1,
            ..template
        };
        self.templates.insert(stored.id.clone(), stored.clone());
        stored
    }

    /// Replace the editable fields of a stored template.
    ///
    /// With `expected_version` set, fails with `Conflict` unless it matches
    /// the stored version.
    pub fn update(
        &mut self,
        id: &str,
        template: Template,
        expected_version: Option<u64>,
    ) -> Result<Template> {
        let existing = self
            .templates
            .get_mut(id)
            .ok_or_else(|| GatewayError::NotFound(id.to_string()))?;

        if let Some(expected) = expected_version {
            if expected != existing.version {
                return Err(GatewayError::Conflict {
                    expected,
                    actual: existing.version,
                });
            }
        }

        existing.name = template.name;
        existing.description = template.description;
        existing.category = template.category;
        existing.thumbnail = template.thumbnail;
        existing.components = template.components;
        existing.updated_at = Utc::now().max(existing.updated_at);
        existing.version += 1;

        debug!(id, version = existing.version, "template updated");
        Ok(existing.clone())
    }

    pub fn delete(&mut self, id: &str) -> Result<()> {
        let existing = self
            .templates
            .get(id)
            .ok_or_else(|| GatewayError::NotFound(id.to_string()))?;
        if existing.is_default {
            return Err(GatewayError::ProtectedTemplate(id.to_string()));
        }
        self.templates.remove(id);
        debug!(id, "template deleted");
        Ok(())
    }

    /// Record one use of the template
    pub fn apply(&mut self, id: &str) -> Result<Template> {
        let existing = self
            .templates
            .get_mut(id)
            .ok_or_else(|| GatewayError::NotFound(id.to_string()))?;
        existing.usage_count += 1;
        Ok(existing.clone())
    }

    pub fn duplicate(&mut self, id: &str) -> Result<Template> {
        let source = self.get(id)?;
        Ok(self.create(source.copy_of()))
    }

    /// Load a snapshot written by [`save_snapshot`](Self::save_snapshot).
    /// A missing file yields an empty repository.
    pub fn load_snapshot(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }
        let raw = fs::read_to_string(path)
            .map_err(|e| GatewayError::Transport(format!("read {}: {}", path.display(), e)))?;
        let templates: Vec<Template> = serde_json::from_str(&raw)
            .map_err(|e| GatewayError::Decode(format!("{}: {}", path.display(), e)))?;

        Ok(Self {
            templates: templates
                .into_iter()
                .map(|t| (t.id.clone(), t))
                .collect(),
        })
    }

    /// Write all templates as a JSON array, replacing the file atomically
    pub fn save_snapshot(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.list())
            .map_err(|e| GatewayError::Decode(e.to_string()))?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    GatewayError::Transport(format!("create {}: {}", parent.display(), e))
                })?;
            }
        }

        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json)
            .map_err(|e| GatewayError::Transport(format!("write {}: {}", tmp.display(), e)))?;
        fs::rename(&tmp, path)
            .map_err(|e| GatewayError::Transport(format!("rename {}: {}", path.display(), e)))?;
        Ok(())
    }
}
