//! Transport seam between the gateway and a template store.

use crate::errors::{GatewayError, Result};
use crate::store::TemplateRepository;
use async_trait::async_trait;
use pagekit_schema::Template;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Remote template store operations. One attempt per call; no retries.
#[async_trait]
pub trait TemplateTransport: Send + Sync {
    async fn list(&self) -> Result<Vec<Template>>;

    async fn get(&self, id: &str) -> Result<Template>;

    /// The store assigns id and timestamps; the template's own id is ignored
    async fn create(&self, template: &Template) -> Result<Template>;

    async fn update(
        &self,
        id: &str,
        template: &Template,
        expected_version: Option<u64>,
    ) -> Result<Template>;

    async fn delete(&self, id: &str) -> Result<()>;

    /// Record one use of the template
    async fn apply(&self, id: &str) -> Result<Template>;
}

/// In-process transport over a shared repository.
///
/// `set_online(false)` makes every call fail with a transport error, which
/// is how offline behavior is exercised without a network.
#[derive(Debug, Clone)]
pub struct LocalTransport {
    repo: Arc<Mutex<TemplateRepository>>,
    online: Arc<AtomicBool>,
}

impl LocalTransport {
    pub fn new(repo: TemplateRepository) -> Self {
        Self::shared(Arc::new(Mutex::new(repo)))
    }

    pub fn shared(repo: Arc<Mutex<TemplateRepository>>) -> Self {
        Self {
            repo,
            online: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn repository(&self) -> Arc<Mutex<TemplateRepository>> {
        Arc::clone(&self.repo)
    }

    pub fn set_online(&self, online: bool) {
        self.online.store(online, Ordering::SeqCst);
    }

    pub fn is_online(&self) -> bool {
        self.online.load(Ordering::SeqCst)
    }

    fn check_online(&self) -> Result<()> {
        if self.is_online() {
            Ok(())
        } else {
            Err(GatewayError::Transport("store unreachable".to_string()))
        }
    }
}

#[async_trait]
impl TemplateTransport for LocalTransport {
    async fn list(&self) -> Result<Vec<Template>> {
        self.check_online()?;
        Ok(self.repo.lock().await.list())
    }

    async fn get(&self, id: &str) -> Result<Template> {
        self.check_online()?;
        self.repo.lock().await.get(id)
    }

    async fn create(&self, template: &Template) -> Result<Template> {
        self.check_online()?;
        Ok(self.repo.lock().await.create(template.clone()))
    }

    async fn update(
        &self,
        id: &str,
        template: &Template,
        expected_version: Option<u64>,
    ) -> Result<Template> {
        self.check_online()?;
        self.repo
            .lock()
            .await
            .update(id, template.clone(), expected_version)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.check_online()?;
        self.repo.lock().await.delete(id)
    }

    async fn apply(&self, id: &str) -> Result<Template> {
        self.check_online()?;
        self.repo.lock().await.apply(id)
    }
}
