//! Editor Context
//!
//! The form model shared with every component via the Leptos Context API.

use leptos::prelude::*;
use rubric_form::{FormResult, RubricEditor};

/// Editor handle plus the signals views track.
///
/// `structure` moves when items are added or removed (lists re-render);
/// `revision` moves on every commit (labels, marks and totals refresh).
#[derive(Clone, Copy)]
pub struct EditorContext {
    editor: StoredValue<RubricEditor, LocalStorage>,
    /// Add/remove counter - read
    pub structure: ReadSignal<u32>,
    /// Add/remove counter - write
    set_structure: WriteSignal<u32>,
    /// Commit counter - read
    pub revision: ReadSignal<u32>,
    /// Commit counter - write
    set_revision: WriteSignal<u32>,
}

impl EditorContext {
    pub fn new(editor: RubricEditor) -> Self {
        let (structure, set_structure) = signal(0u32);
        let (revision, set_revision) = signal(0u32);
        Self {
            editor: StoredValue::new_local(editor),
            structure,
            set_structure,
            revision,
            set_revision,
        }
    }

    /// Read without tracking
    pub fn read<R>(&self, f: impl FnOnce(&RubricEditor) -> R) -> R {
        self.editor.with_value(f)
    }

    /// Read and re-run when items are added or removed
    pub fn watch_structure<R>(&self, f: impl FnOnce(&RubricEditor) -> R) -> R {
        self.structure.track();
        self.read(f)
    }

    /// Read and re-run on any commit
    pub fn watch<R>(&self, f: impl FnOnce(&RubricEditor) -> R) -> R {
        self.structure.track();
        self.revision.track();
        self.read(f)
    }

    /// Write a field while typing; nothing re-renders
    pub fn edit<R>(&self, f: impl FnOnce(&mut RubricEditor) -> R) -> Option<R> {
        self.editor.try_update_value(f)
    }

    /// Finalize an edit
    pub fn commit<R>(&self, f: impl FnOnce(&mut RubricEditor) -> R) -> Option<R> {
        let result = self.editor.try_update_value(f);
        self.set_revision.update(|v| *v += 1);
        result
    }

    /// Add or remove items
    pub fn reshape<R>(&self, f: impl FnOnce(&mut RubricEditor) -> R) -> Option<R> {
        let result = self.editor.try_update_value(f);
        self.set_structure.update(|v| *v += 1);
        self.set_revision.update(|v| *v += 1);
        result
    }
}

/// Log a failed editor operation
pub fn report(tag: &str, result: Option<FormResult<()>>) {
    if let Some(Err(e)) = result {
        log::error!("[{}] {}", tag, e);
    }
}

pub fn use_editor() -> EditorContext {
    use_context::<EditorContext>().expect("EditorContext should be provided")
}
