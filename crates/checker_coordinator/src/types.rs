/// Opaque browser window identifier.
pub type WindowId = u64;

/// Opaque browser tab identifier.
pub type TabId = u64;

/// Session-storage key under which the managed tab IDs are persisted.
pub const MANAGED_TAB_IDS_KEY: &str = "selfCheckManagedTabIds";

/// Screen-space rectangle in pixels; used both for window bounds and for
/// the primary display's usable work area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

/// Placement for the self-check window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowPlan {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
    pub focused: bool,
}

/// Reply to an open request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenReply {
    Completed { count: usize },
    Error { message: String },
}

/// Reply to a close request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CloseReply {
    Closed { count: usize },
    NoTabsToClose,
}
