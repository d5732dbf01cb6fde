//! # Pagekit Gateway
//!
//! Template persistence: the authoritative store, the transports that reach
//! it, and the caching gateway editors talk to.
//!
//! ```text
//! ┌──────────────────┐     ┌────────────────────┐
//! │ TemplateGateway  │────▶│ TemplateTransport  │
//! │ (cache, Synced)  │     │  Local │ Http      │
//! └──────────────────┘     └─────┬──────┬───────┘
//!                                │      │ REST + JSON envelopes
//!                                ▼      ▼
//!                         ┌────────────────────┐
//!                         │ TemplateRepository │──▶ JSON snapshot
//!                         └────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use pagekit_gateway::{LocalTransport, TemplateGateway, TemplateRepository};
//! use pagekit_schema::{Template, TemplateCategory};
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let transport = LocalTransport::new(TemplateRepository::new());
//! let mut gateway = TemplateGateway::new(transport.clone());
//!
//! let saved = gateway
//!     .create(&Template::new("Landing", TemplateCategory::Homepage))
//!     .await
//!     .unwrap()
//!     .into_value();
//!
//! transport.set_online(false);
//! let listed = gateway.list().await.unwrap();
//! assert!(listed.is_offline());
//! assert_eq!(listed.value()[0].id, saved.id);
//! # });
//! ```

mod errors;
mod gateway;
mod http;
mod store;
mod transport;
pub mod wire;

pub use errors::{GatewayError, Result};
pub use gateway::{Synced, TemplateGateway};
pub use http::HttpTransport;
pub use store::TemplateRepository;
pub use transport::{LocalTransport, TemplateTransport};
