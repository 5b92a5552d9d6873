//! Human-readable description records attached to moves.

/// Recognized description fields, in lookup priority order.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
pub enum MoveField {
    /// Narrative text for the move (e.g. "Draw a card").
    Event,
    /// Short mechanical label (e.g. "Draw").
    Action,
}

impl MoveField {
    /// Fields are consulted in this order when describing a move.
    pub const PRIORITY: [MoveField; 2] = [MoveField::Event, MoveField::Action];
}

/// One row of the move description table.
///
/// Both fields are optional; a row may be partially filled while data is
/// still loading or simply incomplete.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveRecord {
    #[cfg_attr(
        feature = "serde",
        serde(rename = "Event", default, skip_serializing_if = "Option::is_none")
    )]
    pub event: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "Action", default, skip_serializing_if = "Option::is_none")
    )]
    pub action: Option<String>,
}

impl MoveRecord {
    pub fn new(event: Option<String>, action: Option<String>) -> Self {
        Self { event, action }
    }

    pub fn with_event(mut self, event: impl Into<String>) -> Self {
        self.event = Some(event.into());
        self
    }

    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// Returns the field value if present and non-empty.
    pub fn field(&self, field: MoveField) -> Option<&str> {
        let value = match field {
            MoveField::Event => self.event.as_deref(),
            MoveField::Action => self.action.as_deref(),
        }?;
        (!value.is_empty()).then_some(value)
    }

    /// First non-empty field in [`MoveField::PRIORITY`] order.
    pub fn first_populated(&self) -> Option<(MoveField, &str)> {
        MoveField::PRIORITY
            .into_iter()
            .find_map(|field| self.field(field).map(|value| (field, value)))
    }
}
