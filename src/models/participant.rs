//! Participant and the Slot a participant (or a bye) occupies in a match.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a participant (used in matches and lookups).
pub type ParticipantId = Uuid;

/// Display label of the synthetic bye opponent.
pub const BYE_LABEL: &str = "Bye";

/// A person entered into the tournament. Immutable once the tournament has started.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
}

impl Participant {
    /// Create a new participant with a fresh id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }
}

/// One side of a match: a real participant or a bye placeholder.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Slot {
    Player(Participant),
    /// Placeholder opponent that always loses. Has no id and is never entered by the user.
    Bye,
}

impl Slot {
    pub fn is_bye(&self) -> bool {
        matches!(self, Slot::Bye)
    }

    /// The participant in this slot, `None` for a bye.
    pub fn participant(&self) -> Option<&Participant> {
        match self {
            Slot::Player(p) => Some(p),
            Slot::Bye => None,
        }
    }

    pub fn id(&self) -> Option<ParticipantId> {
        self.participant().map(|p| p.id)
    }

    pub fn name(&self) -> &str {
        match self {
            Slot::Player(p) => &p.name,
            Slot::Bye => BYE_LABEL,
        }
    }

    /// True if this slot holds the participant with the given id.
    pub fn holds(&self, id: ParticipantId) -> bool {
        self.id() == Some(id)
    }
}

impl From<Participant> for Slot {
    fn from(p: Participant) -> Self {
        Slot::Player(p)
    }
}
