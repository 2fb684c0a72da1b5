//! In-Memory Options View Model
//!
//! Holds the committed options state plus edits the user made since the last
//! refresh. `update()` applies the pending edits, so refreshing twice in a row
//! yields the same state as refreshing once.

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, RwLock};

use async_trait::async_trait;
use portability_session_core::{CoreResult, OptionsSnapshot, OptionsViewModel};
use tracing::{debug, warn};

/// A user edit to the options UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionsEdit {
    /// Select or deselect one version of a platform (valid or invalid).
    SelectVersion {
        platform: String,
        version: String,
        selected: bool,
    },
    /// Select or deselect an output format.
    SelectFormat { name: String, selected: bool },
    SetOutputDirectory(PathBuf),
    SetDefaultOutputName(String),
    SetSaveMetadata(bool),
}

/// Options view model backed by memory.
#[derive(Debug, Default)]
pub struct InMemoryOptionsViewModel {
    committed: RwLock<OptionsSnapshot>,
    pending: Mutex<Vec<OptionsEdit>>,
    updates: AtomicUsize,
}

impl InMemoryOptionsViewModel {
    pub fn new(initial: OptionsSnapshot) -> Self {
        Self {
            committed: RwLock::new(initial),
            pending: Mutex::new(Vec::new()),
            updates: AtomicUsize::new(0),
        }
    }

    /// Queue an edit. It becomes visible after the next `update()`.
    pub fn edit(&self, edit: OptionsEdit) {
        self.pending
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(edit);
    }

    /// Number of completed `update()` calls.
    pub fn update_count(&self) -> usize {
        self.updates.load(Ordering::SeqCst)
    }

    fn apply(snapshot: &mut OptionsSnapshot, edit: OptionsEdit) {
        match edit {
            OptionsEdit::SelectVersion {
                platform,
                version,
                selected,
            } => {
                let found = snapshot
                    .targets
                    .iter_mut()
                    .chain(snapshot.invalid_targets.iter_mut())
                    .filter(|p| p.name == platform)
                    .flat_map(|p| p.versions.iter_mut())
                    .filter(|v| v.name == version)
                    .map(|v| v.is_selected = selected)
                    .count();
                if found == 0 {
                    warn!(platform = %platform, version = %version, "ignoring edit for unknown platform version");
                }
            }
            OptionsEdit::SelectFormat { name, selected } => {
                match snapshot.formats.iter_mut().find(|f| f.display_name == name) {
                    Some(format) => format.is_selected = selected,
                    None => warn!(format = %name, "ignoring edit for unknown format"),
                }
            }
            OptionsEdit::SetOutputDirectory(dir) => snapshot.output_directory = dir,
            OptionsEdit::SetDefaultOutputName(name) => snapshot.default_output_name = name,
            OptionsEdit::SetSaveMetadata(save) => snapshot.save_metadata = save,
        }
    }
}

#[async_trait]
impl OptionsViewModel for InMemoryOptionsViewModel {
    async fn update(&self) -> CoreResult<()> {
        let edits: Vec<OptionsEdit> = std::mem::take(
            &mut *self.pending.lock().unwrap_or_else(|e| e.into_inner()),
        );

        if !edits.is_empty() {
            let mut committed = self.committed.write().unwrap_or_else(|e| e.into_inner());
            debug!(edits = edits.len(), "applying pending option edits");
            for edit in edits {
                Self::apply(&mut committed, edit);
            }
        }

        self.updates.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn snapshot(&self) -> OptionsSnapshot {
        self.committed
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}
