use crate::{DocumentSnapshot, FieldSnapshot, PanelSettings, RowSnapshot};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Debounced edit of a text field, with its enclosing row when known.
    FieldEdited {
        field: FieldSnapshot,
        row: Option<RowSnapshot>,
    },
    /// Intercepted form submission, carrying every field of the form.
    FormSubmitted { fields: Vec<FieldSnapshot> },
    /// User flipped the case-sensitivity toggle.
    CaseSensitiveToggled(bool),
    /// User flipped the check-on-submit toggle.
    CheckOnSubmitToggled(bool),
    /// User flipped the notifications toggle.
    NotificationsToggled(bool),
    /// User clicked "clear history".
    ClearHistory,
    /// Newline-delimited URL block pasted for batch filling.
    BatchPasted {
        raw: String,
        document: DocumentSnapshot,
    },
    /// User asked to continue filling on a fresh page of fields.
    FillRequested { document: DocumentSnapshot },
    /// Self-check panel toggled; snapshot taken at toggle time.
    SelfCheckToggled { document: DocumentSnapshot },
    /// User ended the self-check session.
    SelfCheckEnded,
    /// Coordinator reply: the side window opened with this many tabs.
    SelfCheckOpened { count: usize },
    /// Coordinator reply or channel failure while opening.
    SelfCheckOpenFailed { message: String },
    /// Coordinator reply: this many tracked tabs were closed.
    SelfCheckClosed { count: usize },
    /// Channel failure while closing.
    SelfCheckCloseFailed { message: String },
    /// Coordinator reply: no tabs were tracked for closing.
    SelfCheckNothingToClose,
    /// Panel drag finished at a new position.
    PanelMoved { left: i32, top: i32 },
    /// Panel header clicked to minimize or restore.
    PanelMinimizeToggled,
    /// Restore persisted panel settings at startup.
    RestorePanelSettings(PanelSettings),
    /// Fallback for placeholder wiring.
    NoOp,
}
