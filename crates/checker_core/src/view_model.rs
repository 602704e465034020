use crate::SelfCheckEntry;

/// Everything the panel rendering needs, derived from [`crate::AgentState`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PanelViewModel {
    pub seen_count: usize,
    pub self_check_active: bool,
    pub entries: Vec<SelfCheckEntry>,
    pub pending_batch: usize,
    pub case_sensitive: bool,
    pub check_on_submit: bool,
    pub show_notifications: bool,
    pub minimized: bool,
}
