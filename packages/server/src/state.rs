use crate::config::ServerConfig;
use crate::seed::seed_defaults;
use pagekit_gateway::{GatewayError, TemplateRepository};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

/// Shared handler state
#[derive(Debug, Clone)]
pub struct AppState {
    pub repo: Arc<Mutex<TemplateRepository>>,
    pub snapshot: Option<PathBuf>,
}

impl AppState {
    /// In-memory store without a snapshot file
    pub fn new(repo: TemplateRepository) -> Self {
        Self {
            repo: Arc::new(Mutex::new(repo)),
            snapshot: None,
        }
    }

    pub fn with_snapshot(mut self, path: impl Into<PathBuf>) -> Self {
        self.snapshot = Some(path.into());
        self
    }

    /// Build state from config: load the snapshot, then seed defaults
    pub fn from_config(config: &ServerConfig) -> Result<Self, GatewayError> {
        let snapshot = config.snapshot();
        let mut repo = match &snapshot {
            Some(path) => TemplateRepository::load_snapshot(path)?,
            None => TemplateRepository::new(),
        };
        info!(templates = repo.len(), "template store loaded");

        if config.seed_defaults {
            let seeded = seed_defaults(&mut repo);
            if seeded > 0 {
                info!(seeded, "default templates seeded");
                if let Some(path) = &snapshot {
                    repo.save_snapshot(path)?;
                }
            }
        }

        Ok(Self {
            repo: Arc::new(Mutex::new(repo)),
            snapshot,
        })
    }

    /// Run a mutation against a copy of the store, write the snapshot, then
    /// publish the copy. A failed mutation or snapshot write leaves the live
    /// store untouched.
    pub async fn commit<T>(
        &self,
        mutate: impl FnOnce(&mut TemplateRepository) -> Result<T, GatewayError>,
    ) -> Result<T, GatewayError> {
        let mut repo = self.repo.lock().await;
        let mut next = repo.clone();
        let out = mutate(&mut next)?;

        if let Some(path) = self.snapshot.clone() {
            next = tokio::task::spawn_blocking(move || {
                next.save_snapshot(&path).map(|()| next)
            })
            .await
            .map_err(|e| GatewayError::Transport(format!("snapshot task: {}", e)))??;
        }

        *repo = next;
        Ok(out)
    }
}
