//! Privileged coordinator: side-window placement, tab tracking and teardown.
mod coordinator;
mod error;
mod geometry;
mod handle;
mod host;
mod store;
mod types;

pub use coordinator::Coordinator;
pub use error::{CoordinatorError, RequestError};
pub use geometry::plan_side_window;
pub use handle::CoordinatorHandle;
pub use host::{HostError, WindowHost};
pub use store::{MemorySessionStore, SessionStore};
pub use types::{Bounds, CloseReply, OpenReply, TabId, WindowId, WindowPlan, MANAGED_TAB_IDS_KEY};
