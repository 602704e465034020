use crate::{FieldId, PanelSettings};

/// Visual state the host should apply to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    Duplicate,
    QueryMarker,
    FragmentMarker,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    SetHighlight { field: FieldId, highlight: Highlight },
    ClearAllHighlights,
    SetFieldText { field: FieldId, text: String },
    /// Brief confirmation flash; the duration is the host's concern.
    FlashField { field: FieldId },
    Notify { message: String, warning: bool },
    /// Cancel the intercepted form submission.
    BlockSubmit,
    /// Ask the privileged coordinator to open the self-check window.
    OpenSelfCheckWindow { urls: Vec<String> },
    /// Ask the privileged coordinator to close the tracked tabs.
    CloseSelfCheckWindow,
    SavePanelSettings(PanelSettings),
}
