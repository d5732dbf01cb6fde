//! # Edit History
//!
//! Undo/redo for a page document. Each entry is one operator-visible edit:
//! the mutations that were applied and the inverses that revert them,
//! captured against the document before each mutation ran.
//!
//! Replaying an entry is all-or-nothing. Steps run against a scratch copy of
//! the document, which replaces the live one only when every step succeeds;
//! on failure the document and both stacks are left exactly as they were.
//!
//! ```rust
//! use pagekit_editor::{EditHistory, Mutation};
//! use pagekit_schema::{ComponentInstance, ComponentType, Template, TemplateCategory};
//!
//! let mut doc = Template::new("Home", TemplateCategory::Homepage);
//! let mut history = EditHistory::new();
//!
//! let hero = ComponentInstance::new(ComponentType::Hero);
//! history
//!     .record(Mutation::Insert { index: 0, component: hero }, &mut doc)
//!     .unwrap();
//!
//! assert!(history.undo(&mut doc).unwrap());
//! assert!(doc.components.is_empty());
//! assert!(history.redo(&mut doc).unwrap());
//! assert_eq!(doc.components.len(), 1);
//! ```

use crate::{Mutation, MutationError};
use pagekit_schema::PageDocument;
use std::collections::VecDeque;
use tracing::{debug, warn};

/// Undo depth used by editor sessions unless configured otherwise
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

#[derive(Debug, Clone)]
struct Edit {
    label: Option<String>,
    /// In application order
    forward: Vec<Mutation>,
    /// In revert order (reverse of `forward`)
    backward: Vec<Mutation>,
}

/// Apply every step to a copy of `doc`, then swap it in
fn replay(steps: &[Mutation], doc: &mut PageDocument) -> Result<(), MutationError> {
    let mut scratch = doc.clone();
    for step in steps {
        step.apply(&mut scratch)?;
    }
    *doc = scratch;
    Ok(())
}

/// Undo and redo stacks for one editing session
#[derive(Debug)]
pub struct EditHistory {
    done: VecDeque<Edit>,
    undone: Vec<Edit>,
    /// Oldest edits are forgotten past this depth (0 = unlimited)
    limit: usize,
}

impl EditHistory {
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }

    pub fn with_limit(limit: usize) -> Self {
        Self {
            done: VecDeque::new(),
            undone: Vec::new(),
            limit,
        }
    }

    /// Apply one mutation as its own undo step. Nothing is recorded on error.
    pub fn record(&mut self, mutation: Mutation, doc: &mut PageDocument) -> Result<(), MutationError> {
        let inverse = mutation.to_inverse(doc)?;
        mutation.apply(doc)?;
        self.push(Edit {
            label: None,
            forward: vec![mutation],
            backward: vec![inverse],
        });
        Ok(())
    }

    /// Apply mutations as a single labelled undo step.
    ///
    /// Mutations that no longer fit the document are skipped. Returns how many
    /// were applied; when none were, no step is recorded.
    pub fn record_group(
        &mut self,
        label: impl Into<String>,
        mutations: Vec<Mutation>,
        doc: &mut PageDocument,
    ) -> usize {
        let mut edit = Edit {
            label: Some(label.into()),
            forward: Vec::with_capacity(mutations.len()),
            backward: Vec::with_capacity(mutations.len()),
        };

        for mutation in mutations {
            let applied = mutation
                .to_inverse(doc)
                .and_then(|inverse| mutation.apply(doc).map(|()| inverse));
            match applied {
                Ok(inverse) => {
                    edit.forward.push(mutation);
                    edit.backward.push(inverse);
                }
                Err(err) => warn!(error = %err, id = mutation.target_id(), "grouped mutation skipped"),
            }
        }

        let count = edit.forward.len();
        if count > 0 {
            edit.backward.reverse();
            self.push(edit);
        }
        count
    }

    fn push(&mut self, edit: Edit) {
        self.done.push_back(edit);
        if self.limit > 0 {
            while self.done.len() > self.limit {
                self.done.pop_front();
            }
        }
        self.undone.clear();
    }

    /// Revert the latest edit. `Ok(false)` when there is nothing to undo.
    pub fn undo(&mut self, doc: &mut PageDocument) -> Result<bool, MutationError> {
        let Some(edit) = self.done.pop_back() else {
            return Ok(false);
        };
        if let Err(err) = replay(&edit.backward, doc) {
            debug!(error = %err, "undo left document unchanged");
            self.done.push_back(edit);
            return Err(err);
        }
        self.undone.push(edit);
        Ok(true)
    }

    /// Reapply the latest undone edit. `Ok(false)` when there is nothing to redo.
    pub fn redo(&mut self, doc: &mut PageDocument) -> Result<bool, MutationError> {
        let Some(edit) = self.undone.pop() else {
            return Ok(false);
        };
        if let Err(err) = replay(&edit.forward, doc) {
            debug!(error = %err, "redo left document unchanged");
            self.undone.push(edit);
            return Err(err);
        }
        self.done.push_back(edit);
        Ok(true)
    }

    pub fn can_undo(&self) -> bool {
        !self.done.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }

    /// Label of the edit `undo` would revert, for grouped edits
    pub fn undo_label(&self) -> Option<&str> {
        self.done.back().and_then(|edit| edit.label.as_deref())
    }
}

impl Default for EditHistory {
    fn default() -> Self {
        Self::new()
    }
}
