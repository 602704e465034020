use std::collections::HashSet;

use crate::view_model::PanelViewModel;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckSettings {
    pub case_sensitive: bool,
    pub check_on_submit: bool,
    pub show_notifications: bool,
}

impl Default for CheckSettings {
    fn default() -> Self {
        Self {
            case_sensitive: true,
            check_on_submit: true,
            show_notifications: true,
        }
    }
}

/// Panel placement, persisted across page loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanelSettings {
    pub left: i32,
    pub top: i32,
    pub minimized: bool,
}

/// One extracted row: sequence label plus the URL to verify.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelfCheckEntry {
    pub sequence: String,
    pub url: String,
}

/// Pending pasted URLs plus the cursor of the next one to place.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BatchQueue {
    urls: Vec<String>,
    index: usize,
}

impl BatchQueue {
    pub fn load(&mut self, urls: Vec<String>) {
        self.urls = urls;
        self.index = 0;
    }

    pub fn next_pending(&self) -> Option<&str> {
        self.urls.get(self.index).map(String::as_str)
    }

    pub fn advance(&mut self) {
        self.index += 1;
    }

    pub fn pending(&self) -> usize {
        self.urls.len().saturating_sub(self.index)
    }

    pub fn is_drained(&self) -> bool {
        self.index >= self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AgentState {
    pub(crate) seen: HashSet<String>,
    pub(crate) settings: CheckSettings,
    pub(crate) batch: BatchQueue,
    pub(crate) self_check_active: bool,
    pub(crate) self_check_entries: Vec<SelfCheckEntry>,
    pub(crate) panel: PanelSettings,
    dirty: bool,
}

impl AgentState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> PanelViewModel {
        PanelViewModel {
            seen_count: self.seen.len(),
            self_check_active: self.self_check_active,
            entries: self.self_check_entries.clone(),
            pending_batch: self.batch.pending(),
            case_sensitive: self.settings.case_sensitive,
            check_on_submit: self.settings.check_on_submit,
            show_notifications: self.settings.show_notifications,
            minimized: self.panel.minimized,
        }
    }

    pub fn settings(&self) -> &CheckSettings {
        &self.settings
    }

    pub fn panel(&self) -> PanelSettings {
        self.panel
    }

    pub fn self_check_active(&self) -> bool {
        self.self_check_active
    }

    pub fn self_check_entries(&self) -> &[SelfCheckEntry] {
        &self.self_check_entries
    }

    pub fn seen_count(&self) -> usize {
        self.seen.len()
    }

    pub fn pending_batch(&self) -> usize {
        self.batch.pending()
    }

    /// Returns whether a re-render is due and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
