use std::collections::HashMap;

use async_trait::async_trait;
use checker_coordinator::{Bounds, HostError, TabId, WindowHost, WindowId, WindowPlan};
use checker_core::{
    DocumentSnapshot, FieldId, FieldRole, FieldSnapshot, Highlight, RowSnapshot,
};

/// The page surface the agent observes and mutates.
///
/// A browser content script implements this against the live DOM;
/// [`InMemoryHostPage`] backs the CLI demo and the tests.
pub trait HostPage {
    fn document(&self) -> DocumentSnapshot;

    /// Snapshot of one field plus its enclosing row, if the field exists.
    fn find_field(&self, field: FieldId) -> Option<(FieldSnapshot, Option<RowSnapshot>)>;

    fn set_field_text(&mut self, field: FieldId, text: &str);
    fn set_highlight(&mut self, field: FieldId, highlight: Highlight);
    fn clear_highlights(&mut self);
    fn flash_field(&mut self, field: FieldId);
    fn notify(&mut self, message: &str, warning: bool);
    fn block_submit(&mut self);
}

/// In-memory form document recording every mutation the agent makes.
#[derive(Debug, Default)]
pub struct InMemoryHostPage {
    rows: Vec<RowSnapshot>,
    highlights: HashMap<FieldId, Highlight>,
    notices: Vec<(String, bool)>,
    flashes: Vec<FieldId>,
    submit_blocked: bool,
    next_field: FieldId,
}

impl InMemoryHostPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a row holding one wide URL slot and one narrow level field;
    /// returns their IDs.
    pub fn push_url_row(&mut self, sequence: &str) -> (FieldId, FieldId) {
        let url_id = self.next_field;
        let level_id = self.next_field + 1;
        self.next_field += 2;
        self.rows.push(RowSnapshot {
            sequence: sequence.to_string(),
            fields: vec![
                FieldSnapshot {
                    id: url_id,
                    role: FieldRole::Url,
                    text: String::new(),
                    width: 400,
                },
                FieldSnapshot {
                    id: level_id,
                    role: FieldRole::Level,
                    text: String::new(),
                    width: 80,
                },
            ],
        });
        (url_id, level_id)
    }

    pub fn rows(&self) -> &[RowSnapshot] {
        &self.rows
    }

    pub fn field_text(&self, field: FieldId) -> Option<&str> {
        self.rows
            .iter()
            .flat_map(|row| row.fields.iter())
            .find(|candidate| candidate.id == field)
            .map(|candidate| candidate.text.as_str())
    }

    pub fn highlight(&self, field: FieldId) -> Option<Highlight> {
        self.highlights.get(&field).copied()
    }

    pub fn notices(&self) -> &[(String, bool)] {
        &self.notices
    }

    pub fn flashes(&self) -> &[FieldId] {
        &self.flashes
    }

    pub fn submit_blocked(&self) -> bool {
        self.submit_blocked
    }

    fn field_mut(&mut self, field: FieldId) -> Option<&mut FieldSnapshot> {
        self.rows
            .iter_mut()
            .flat_map(|row| row.fields.iter_mut())
            .find(|candidate| candidate.id == field)
    }
}

impl HostPage for InMemoryHostPage {
    fn document(&self) -> DocumentSnapshot {
        DocumentSnapshot {
            rows: self.rows.clone(),
        }
    }

    fn find_field(&self, field: FieldId) -> Option<(FieldSnapshot, Option<RowSnapshot>)> {
        self.rows.iter().find_map(|row| {
            row.fields
                .iter()
                .find(|candidate| candidate.id == field)
                .map(|candidate| (candidate.clone(), Some(row.clone())))
        })
    }

    fn set_field_text(&mut self, field: FieldId, text: &str) {
        if let Some(target) = self.field_mut(field) {
            target.text = text.to_string();
        }
    }

    fn set_highlight(&mut self, field: FieldId, highlight: Highlight) {
        self.highlights.insert(field, highlight);
    }

    fn clear_highlights(&mut self) {
        self.highlights.clear();
    }

    fn flash_field(&mut self, field: FieldId) {
        self.flashes.push(field);
    }

    fn notify(&mut self, message: &str, warning: bool) {
        self.notices.push((message.to_string(), warning));
    }

    fn block_submit(&mut self) {
        self.submit_blocked = true;
    }
}

/// Stands in for the browser when none is attached; every window call
/// fails, which the coordinator surfaces as an error reply.
pub struct DetachedWindowHost;

#[async_trait]
impl WindowHost for DetachedWindowHost {
    async fn window_bounds(&self, _window: WindowId) -> Result<Bounds, HostError> {
        Err(HostError::Api("no browser attached".to_string()))
    }

    async fn primary_work_area(&self) -> Result<Bounds, HostError> {
        Err(HostError::NoDisplay)
    }

    async fn create_window(
        &self,
        _urls: &[String],
        _plan: &WindowPlan,
    ) -> Result<Vec<TabId>, HostError> {
        Err(HostError::Api("no browser attached".to_string()))
    }

    async fn close_tab(&self, _tab: TabId) -> Result<(), HostError> {
        Err(HostError::Api("no browser attached".to_string()))
    }
}
