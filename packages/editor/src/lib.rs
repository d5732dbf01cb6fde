//! # Pagekit Editor
//!
//! In-memory editing engine for page documents.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ EditorSession                               │
//! │  - selection, view mode, viewport, drag     │
//! │  - high-level operations (add, move, ...)   │
//! └─────────────────────────────────────────────┘
//!                     ↓ resolved Mutation
//! ┌─────────────────────────────────────────────┐
//! │ EditHistory: inverses captured, atomic undo │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ PageDocument (ordered ComponentInstances)   │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Document is source of truth**: render trees are derived views
//! 2. **Stale ids are no-ops**: session operations never fail on a missing id
//! 3. **Everything undoes**: each content change is a recorded mutation
//!
//! ## Usage
//!
//! ```rust
//! use pagekit_editor::{Direction, EditorSession};
//! use pagekit_schema::{ComponentType, PropBag, Template, TemplateCategory};
//!
//! let mut session = EditorSession::new(Template::new("Home", TemplateCategory::Homepage));
//! let hero = session.add_component(ComponentType::Hero);
//! let products = session.add_component(ComponentType::Products);
//!
//! session.update_props(&hero, &PropBag::new().with("title", "Sale"));
//! session.move_component(&products, Direction::Up);
//!
//! assert_eq!(session.components()[0].id, products);
//! session.undo();
//! assert_eq!(session.components()[0].id, hero);
//! ```

mod errors;
mod history;
mod mutations;
mod session;
mod theme;

pub use errors::MutationError;
pub use mutations::Mutation;
pub use session::{Applied, Direction, EditorSession, Selection, ViewMode};
pub use theme::{apply_theme, Theme};
pub use history::{EditHistory, DEFAULT_HISTORY_LIMIT};
