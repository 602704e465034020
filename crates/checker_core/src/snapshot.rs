/// Opaque identifier the platform layer assigns to each observed field.
pub type FieldId = u64;

/// Inputs narrower than this are assumed not to be URL slots.
pub const URL_FIELD_WIDTH_THRESHOLD: u32 = 150;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRole {
    /// A URL slot.
    Url,
    /// The derived "path depth" field of a row.
    Level,
    /// Free-text remarks, excluded from URL handling.
    Remarks,
    /// Anything else.
    Other,
}

/// Point-in-time view of one text input, taken by the platform layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSnapshot {
    pub id: FieldId,
    pub role: FieldRole,
    pub text: String,
    pub width: u32,
}

impl FieldSnapshot {
    pub fn is_wide(&self) -> bool {
        self.width > URL_FIELD_WIDTH_THRESHOLD
    }

    /// A field the tool treats as a URL slot.
    pub fn is_eligible_url_field(&self) -> bool {
        self.role == FieldRole::Url && self.is_wide()
    }
}

/// One form row: a sequence label plus its fields in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowSnapshot {
    pub sequence: String,
    pub fields: Vec<FieldSnapshot>,
}

impl RowSnapshot {
    pub fn level_field(&self) -> Option<&FieldSnapshot> {
        self.fields.iter().find(|field| field.role == FieldRole::Level)
    }

    pub fn has_url_field(&self) -> bool {
        self.fields.iter().any(FieldSnapshot::is_eligible_url_field)
    }
}

/// All rows currently visible on the page, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DocumentSnapshot {
    pub rows: Vec<RowSnapshot>,
}
