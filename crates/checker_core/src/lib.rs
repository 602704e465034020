//! Checker core: pure state machine for the page agent.
mod check;
mod depth;
mod effect;
mod msg;
mod snapshot;
mod state;
mod update;
mod view_model;

pub use check::{check_value, normalize_value, CheckOutcome, Classification};
pub use depth::path_depth;
pub use effect::{Effect, Highlight};
pub use msg::Msg;
pub use snapshot::{
    DocumentSnapshot, FieldId, FieldRole, FieldSnapshot, RowSnapshot, URL_FIELD_WIDTH_THRESHOLD,
};
pub use state::{AgentState, BatchQueue, CheckSettings, PanelSettings, SelfCheckEntry};
pub use update::update;
pub use view_model::PanelViewModel;
