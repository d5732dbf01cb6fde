//! # Editor Session
//!
//! One operator's in-memory editing state for a single page.
//!
//! ```text
//!  Editing ◀──toggle──▶ Previewing        NoSelection ◀──▶ Component(id)
//! ```
//!
//! Every content operation is translated into a resolved [`Mutation`] and
//! recorded in the edit history. Operations that target an id no longer in the
//! document return [`Applied::NoOp`]: a stale reference from a race between
//! two panels must never corrupt the session.

use crate::mutations::Mutation;
use crate::theme::{apply_theme, Theme};
use crate::history::EditHistory;
use pagekit_renderer::{RenderContext, RenderMode, RenderedPage, Renderer};
use pagekit_schema::{ComponentInstance, ComponentType, PageDocument, PropBag, RegistryError, Viewport};
use std::str::FromStr;
use tracing::{debug, warn};

/// Outcome of a session operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Changed,
    NoOp,
}

impl Applied {
    pub fn changed(self) -> bool {
        self == Applied::Changed
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    None,
    Component(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Editing,
    Previewing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Editing state for one page document
#[derive(Debug)]
pub struct EditorSession {
    document: PageDocument,
    selection: Selection,
    view_mode: ViewMode,
    viewport: Viewport,
    active_drag: Option<String>,
    history: EditHistory,

    /// Incremented on every document change, including undo/redo
    version: u64,
    dirty: bool,
}

impl EditorSession {
    pub fn new(document: PageDocument) -> Self {
        Self {
            document,
            selection: Selection::None,
            view_mode: ViewMode::Editing,
            viewport: Viewport::Desktop,
            active_drag: None,
            history: EditHistory::new(),
            version: 0,
            dirty: false,
        }
    }

    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history = EditHistory::with_limit(limit);
        self
    }

    pub fn document(&self) -> &PageDocument {
        &self.document
    }

    pub fn components(&self) -> &[ComponentInstance] {
        &self.document.components
    }

    /// Hand the document back, ending the session
    pub fn into_document(self) -> PageDocument {
        self.document
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selected_id(&self) -> Option<&str> {
        match &self.selection {
            Selection::Component(id) => Some(id),
            Selection::None => None,
        }
    }

    pub fn selected_component(&self) -> Option<&ComponentInstance> {
        self.selected_id().and_then(|id| self.document.component(id))
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn active_drag(&self) -> Option<&str> {
        self.active_drag.as_deref()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// True when the document changed since the last save
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Label of the grouped edit the next undo reverts, e.g. a theme change
    pub fn undo_label(&self) -> Option<&str> {
        self.history.undo_label()
    }

    fn commit(&mut self, mutation: Mutation) -> Applied {
        match self.history.record(mutation, &mut self.document) {
            Ok(()) => {
                self.touch();
                Applied::Changed
            }
            Err(err) => {
                debug!(error = %err, "mutation skipped");
                Applied::NoOp
            }
        }
    }

    fn touch(&mut self) {
        self.version += 1;
        self.dirty = true;
    }

    fn stale(&self, op: &str, id: &str) -> Applied {
        debug!(op, component_id = id, "stale component reference");
        Applied::NoOp
    }

    /// Append a component with registry defaults. Not selected automatically.
    pub fn add_component(&mut self, component_type: ComponentType) -> String {
        let index = self.document.components.len();
        self.insert_component(component_type, index)
    }

    /// Append a component by type name
    pub fn add_component_by_name(&mut self, type_name: &str) -> Result<String, RegistryError> {
        let component_type = ComponentType::from_str(type_name)?;
        Ok(self.add_component(component_type))
    }

    /// Insert a new component at `index` (clamped to the sequence length)
    pub fn insert_component(&mut self, component_type: ComponentType, index: usize) -> String {
        let component = ComponentInstance::new(component_type);
        let id = component.id.clone();
        self.commit(Mutation::Insert { index, component });
        id
    }

    pub fn select_component(&mut self, id: &str) -> Applied {
        if self.document.index_of(id).is_none() {
            return self.stale("select", id);
        }
        if self.selected_id() == Some(id) {
            return Applied::NoOp;
        }
        self.selection = Selection::Component(id.to_string());
        Applied::Changed
    }

    pub fn clear_selection(&mut self) -> Applied {
        if self.selection == Selection::None {
            return Applied::NoOp;
        }
        self.selection = Selection::None;
        Applied::Changed
    }

    /// Shallow-merge `patch` into the component's props
    pub fn update_props(&mut self, id: &str, patch: &PropBag) -> Applied {
        let Some(component) = self.document.component(id) else {
            return self.stale("update_props", id);
        };
        if component.props.merged(patch) == component.props {
            return Applied::NoOp;
        }
        self.commit(Mutation::UpdateProps {
            id: id.to_string(),
            patch: patch.clone(),
        })
    }

    /// Remove a component; clears the selection if it pointed at it
    pub fn delete_component(&mut self, id: &str) -> Applied {
        if self.document.index_of(id).is_none() {
            return self.stale("delete", id);
        }
        let applied = self.commit(Mutation::Remove { id: id.to_string() });
        self.drop_dangling_state();
        applied
    }

    /// Swap with the neighbor in `direction`; no-op at the boundary
    pub fn move_component(&mut self, id: &str, direction: Direction) -> Applied {
        let Some(index) = self.document.index_of(id) else {
            return self.stale("move", id);
        };
        let target = match direction {
            Direction::Up if index > 0 => index - 1,
            Direction::Down if index + 1 < self.document.components.len() => index + 1,
            _ => return Applied::NoOp,
        };
        self.commit(Mutation::Move {
            id: id.to_string(),
            index: target,
        })
    }

    /// Move to `new_index`, clamped to `[0, len - 1]`, shifting the rest
    pub fn reorder(&mut self, id: &str, new_index: usize) -> Applied {
        let Some(index) = self.document.index_of(id) else {
            return self.stale("reorder", id);
        };
        let target = new_index.min(self.document.components.len().saturating_sub(1));
        if target == index {
            return Applied::NoOp;
        }
        self.commit(Mutation::Move {
            id: id.to_string(),
            index: target,
        })
    }

    /// Insert a copy with a fresh id right after the original.
    ///
    /// Returns the new id, or `None` when `id` is stale.
    pub fn duplicate_component(&mut self, id: &str) -> Option<String> {
        let Some(index) = self.document.index_of(id) else {
            self.stale("duplicate", id);
            return None;
        };
        let copy = self.document.components[index].duplicate();
        let new_id = copy.id.clone();
        match self.commit(Mutation::Insert {
            index: index + 1,
            component: copy,
        }) {
            Applied::Changed => Some(new_id),
            Applied::NoOp => None,
        }
    }

    pub fn set_preview_mode(&mut self, mode: ViewMode) -> Applied {
        if self.view_mode == mode {
            return Applied::NoOp;
        }
        self.view_mode = mode;
        Applied::Changed
    }

    pub fn toggle_preview(&mut self) -> ViewMode {
        self.view_mode = match self.view_mode {
            ViewMode::Editing => ViewMode::Previewing,
            ViewMode::Previewing => ViewMode::Editing,
        };
        self.view_mode
    }

    pub fn set_viewport(&mut self, viewport: Viewport) -> Applied {
        if self.viewport == viewport {
            return Applied::NoOp;
        }
        self.viewport = viewport;
        Applied::Changed
    }

    /// Start a reorder gesture
    pub fn begin_drag(&mut self, id: &str) -> Applied {
        if self.document.index_of(id).is_none() {
            return self.stale("begin_drag", id);
        }
        self.active_drag = Some(id.to_string());
        Applied::Changed
    }

    /// Finish the gesture by moving the dragged component to `index`
    pub fn drop_at(&mut self, index: usize) -> Applied {
        match self.active_drag.take() {
            Some(id) => self.reorder(&id, index),
            None => Applied::NoOp,
        }
    }

    pub fn cancel_drag(&mut self) -> Applied {
        match self.active_drag.take() {
            Some(_) => Applied::Changed,
            None => Applied::NoOp,
        }
    }

    /// Recolor every known component as one undo step
    pub fn apply_theme(&mut self, theme: &Theme) -> Applied {
        let replacements: Vec<Mutation> = self
            .document
            .components
            .iter()
            .filter_map(|component| {
                let component_type = component.component_type()?;
                let themed = apply_theme(component_type, &component.props, theme);
                (themed != component.props).then(|| Mutation::ReplaceProps {
                    id: component.id.clone(),
                    props: themed,
                })
            })
            .collect();

        if replacements.is_empty() {
            return Applied::NoOp;
        }

        let label = format!("Apply {} theme", theme.name);
        if self.history.record_group(label, replacements, &mut self.document) == 0 {
            return Applied::NoOp;
        }
        self.touch();
        Applied::Changed
    }

    pub fn undo(&mut self) -> Applied {
        self.replay(true)
    }

    pub fn redo(&mut self) -> Applied {
        self.replay(false)
    }

    fn replay(&mut self, undo: bool) -> Applied {
        let result = if undo {
            self.history.undo(&mut self.document)
        } else {
            self.history.redo(&mut self.document)
        };

        match result {
            Ok(true) => {
                self.touch();
                self.drop_dangling_state();
                Applied::Changed
            }
            Ok(false) => Applied::NoOp,
            Err(err) => {
                warn!(error = %err, undo, "history replay failed");
                Applied::NoOp
            }
        }
    }

    /// Clear selection and drag state that point at removed components
    fn drop_dangling_state(&mut self) {
        if let Some(id) = self.selected_id() {
            if self.document.index_of(id).is_none() {
                self.selection = Selection::None;
            }
        }
        if let Some(id) = &self.active_drag {
            if self.document.index_of(id).is_none() {
                self.active_drag = None;
            }
        }
    }

    /// Record a successful save. `saved` is the stored copy; its server-assigned
    /// metadata is adopted while the local component sequence is kept.
    pub fn mark_saved(&mut self, saved: &PageDocument) {
        self.document.id = saved.id.clone();
        self.document.created_at = saved.created_at;
        self.document.updated_at = saved.updated_at;
        self.document.is_default = saved.is_default;
        self.document.usage_count = saved.usage_count;
        self.document.version = saved.version;
        self.dirty = false;
    }

    /// Render the document the way the editor preview shows it
    pub fn render_preview(&self, ctx: RenderContext) -> RenderedPage {
        let mode = match self.view_mode {
            ViewMode::Editing => RenderMode::Editor {
                selected: self.selected_id().map(str::to_string),
            },
            ViewMode::Previewing => RenderMode::Live,
        };
        Renderer::new(ctx.with_viewport(self.viewport).with_mode(mode))
            .render_template(&self.document)
    }
}
