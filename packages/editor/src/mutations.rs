//! # Page Mutations
//!
//! Resolved, replayable operations on a page document.
//!
//! ## Design Principles
//!
//! 1. **Resolved**: every mutation carries concrete data (an inserted
//!    component includes its generated id), so replaying it is exact
//! 2. **Invertible**: each mutation can produce its inverse against the
//!    document it is about to be applied to
//! 3. **Validated**: structural checks run before anything changes
//!
//! ## Mutation Semantics
//!
//! ### Insert
//! - Index is clamped to the sequence length
//! - Fails if the id already exists in the document
//!
//! ### Move
//! - Removes the component and reinserts it at `index`
//! - Index is clamped to `[0, len - 1]`
//!
//! ### UpdateProps
//! - Shallow merge: keys in the patch overwrite, other keys are untouched

use crate::errors::MutationError;
use pagekit_schema::{ComponentInstance, PageDocument, PropBag};
use serde::{Deserialize, Serialize};

/// Operation on the ordered component sequence of a page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Mutation {
    /// Insert a component at index
    Insert {
        index: usize,
        component: ComponentInstance,
    },

    /// Remove a component
    Remove { id: String },

    /// Shallow-merge a patch into a component's props
    UpdateProps { id: String, patch: PropBag },

    /// Replace a component's props wholesale
    ReplaceProps { id: String, props: PropBag },

    /// Relocate a component to index
    Move { id: String, index: usize },
}

impl Mutation {
    /// Id of the component this mutation targets
    pub fn target_id(&self) -> &str {
        match self {
            Mutation::Insert { component, .. } => &component.id,
            Mutation::Remove { id }
            | Mutation::UpdateProps { id, .. }
            | Mutation::ReplaceProps { id, .. }
            | Mutation::Move { id, .. } => id,
        }
    }

    pub fn validate(&self, doc: &PageDocument) -> Result<(), MutationError> {
        match self {
            Mutation::Insert { component, .. } => {
                if doc.index_of(&component.id).is_some() {
                    return Err(MutationError::DuplicateId(component.id.clone()));
                }
                Ok(())
            }
            other => {
                let id = other.target_id();
                doc.index_of(id)
                    .map(|_| ())
                    .ok_or_else(|| MutationError::ComponentNotFound(id.to_string()))
            }
        }
    }

    /// Apply mutation to the document with validation
    pub fn apply(&self, doc: &mut PageDocument) -> Result<(), MutationError> {
        self.validate(doc)?;

        match self {
            Mutation::Insert { index, component } => {
                let at = (*index).min(doc.components.len());
                doc.components.insert(at, component.clone());
            }

            Mutation::Remove { id } => {
                let at = Self::position(doc, id)?;
                doc.components.remove(at);
            }

            Mutation::UpdateProps { id, patch } => {
                Self::component_mut(doc, id)?.props.merge(patch);
            }

            Mutation::ReplaceProps { id, props } => {
                Self::component_mut(doc, id)?.props = props.clone();
            }

            Mutation::Move { id, index } => {
                let from = Self::position(doc, id)?;
                let component = doc.components.remove(from);
                let at = (*index).min(doc.components.len());
                doc.components.insert(at, component);
            }
        }

        Ok(())
    }

    /// Mutation that undoes `self` when applied right after it.
    ///
    /// Must be computed against the document state *before* `self` is applied.
    pub fn to_inverse(&self, doc: &PageDocument) -> Result<Mutation, MutationError> {
        self.validate(doc)?;

        match self {
            Mutation::Insert { component, .. } => Ok(Mutation::Remove {
                id: component.id.clone(),
            }),

            Mutation::Remove { id } => {
                let index = Self::position(doc, id)?;
                Ok(Mutation::Insert {
                    index,
                    component: doc.components[index].clone(),
                })
            }

            Mutation::UpdateProps { id, .. } | Mutation::ReplaceProps { id, .. } => {
                let current = Self::component(doc, id)?;
                Ok(Mutation::ReplaceProps {
                    id: id.clone(),
                    props: current.props.clone(),
                })
            }

            Mutation::Move { id, .. } => Ok(Mutation::Move {
                id: id.clone(),
                index: Self::position(doc, id)?,
            }),
        }
    }

    fn position(doc: &PageDocument, id: &str) -> Result<usize, MutationError> {
        doc.index_of(id)
            .ok_or_else(|| MutationError::ComponentNotFound(id.to_string()))
    }

    fn component<'a>(doc: &'a PageDocument, id: &str) -> Result<&'a ComponentInstance, MutationError> {
        doc.component(id)
            .ok_or_else(|| MutationError::ComponentNotFound(id.to_string()))
    }

    fn component_mut<'a>(
        doc: &'a mut PageDocument,
        id: &str,
    ) -> Result<&'a mut ComponentInstance, MutationError> {
        doc.component_mut(id)
            .ok_or_else(|| MutationError::ComponentNotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagekit_schema::{ComponentType, Template, TemplateCategory};

    fn doc_with(ids: &[&str]) -> PageDocument {
        Template::new("Test", TemplateCategory::Custom).with_components(
            ids.iter()
                .map(|id| ComponentInstance::new(ComponentType::Text).with_id(*id))
                .collect(),
        )
    }

    fn order(doc: &PageDocument) -> Vec<&str> {
        doc.components.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_insert_clamps_index() {
        let mut doc = doc_with(&["a"]);
        let mutation = Mutation::Insert {
            index: 99,
            component: ComponentInstance::new(ComponentType::Spacer).with_id("b"),
        };
        mutation.apply(&mut doc).unwrap();
        assert_eq!(order(&doc), vec!["a", "b"]);
    }

    #[test]
    fn test_insert_duplicate_id_fails() {
        let mut doc = doc_with(&["a"]);
        let mutation = Mutation::Insert {
            index: 0,
            component: ComponentInstance::new(ComponentType::Spacer).with_id("a"),
        };
        assert_eq!(
            mutation.apply(&mut doc),
            Err(MutationError::DuplicateId("a".to_string()))
        );
        assert_eq!(doc.components.len(), 1);
    }

    #[test]
    fn test_missing_target_fails_validation() {
        let mut doc = doc_with(&["a"]);
        let mutation = Mutation::Remove {
            id: "ghost".to_string(),
        };
        assert_eq!(
            mutation.apply(&mut doc),
            Err(MutationError::ComponentNotFound("ghost".to_string()))
        );
    }

    #[test]
    fn test_move_and_inverse() {
        let mut doc = doc_with(&["a", "b", "c", "d"]);
        let mutation = Mutation::Move {
            id: "a".to_string(),
            index: 2,
        };
        let inverse = mutation.to_inverse(&doc).unwrap();

        mutation.apply(&mut doc).unwrap();
        assert_eq!(order(&doc), vec!["b", "c", "a", "d"]);

        inverse.apply(&mut doc).unwrap();
        assert_eq!(order(&doc), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_update_props_inverse_restores_bag() {
        let mut doc = doc_with(&["a"]);
        let before = doc.components[0].props.clone();
        let mutation = Mutation::UpdateProps {
            id: "a".to_string(),
            patch: PropBag::new().with("content", "Changed").with("extra", 1),
        };
        let inverse = mutation.to_inverse(&doc).unwrap();

        mutation.apply(&mut doc).unwrap();
        assert_eq!(doc.components[0].props.get_str("content"), Some("Changed"));

        inverse.apply(&mut doc).unwrap();
        assert_eq!(doc.components[0].props, before);
    }

    #[test]
    fn test_remove_inverse_reinserts_at_same_index() {
        let mut doc = doc_with(&["a", "b", "c"]);
        let mutation = Mutation::Remove { id: "b".to_string() };
        let inverse = mutation.to_inverse(&doc).unwrap();

        mutation.apply(&mut doc).unwrap();
        inverse.apply(&mut doc).unwrap();
        assert_eq!(order(&doc), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_mutation_serializes() {
        let mutation = Mutation::Move {
            id: "a".to_string(),
            index: 1,
        };
        let json = serde_json::to_string(&mutation).unwrap();
        assert_eq!(json, r#"{"Move":{"id":"a","index":1}}"#);
    }
}
