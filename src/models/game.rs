//! Match, Round, and SpecialMatch for single-elimination play.

use crate::models::participant::{Participant, ParticipantId, Slot};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// The two matches played after the semifinal split.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialMatch {
    /// Third place: the two semifinal losers.
    Bronze,
    /// First place: the two semifinal winners.
    Final,
}

/// A single match between two slots.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    pub player_1: Slot,
    pub player_2: Slot,
    /// None if not yet played. Always the participant of one of the two slots.
    pub winner: Option<Participant>,
}

impl Match {
    pub fn new(player_1: impl Into<Slot>, player_2: impl Into<Slot>) -> Self {
        Self {
            id: Uuid::new_v4(),
            player_1: player_1.into(),
            player_2: player_2.into(),
            winner: None,
        }
    }

    /// A participant against a bye.
    pub fn against_bye(player: Participant) -> Self {
        Self::new(player, Slot::Bye)
    }

    pub fn is_decided(&self) -> bool {
        self.winner.is_some()
    }

    pub fn has_bye(&self) -> bool {
        self.player_1.is_bye() || self.player_2.is_bye()
    }

    /// True if the participant plays in this match (byes never match).
    pub fn involves(&self, id: ParticipantId) -> bool {
        self.player_1.holds(id) || self.player_2.holds(id)
    }

    /// The slot holding the given participant, if any.
    pub fn slot_of(&self, id: ParticipantId) -> Option<&Slot> {
        [&self.player_1, &self.player_2]
            .into_iter()
            .find(|s| s.holds(id))
    }

    pub fn winner_id(&self) -> Option<ParticipantId> {
        self.winner.as_ref().map(|w| w.id)
    }

    /// The slot that did not win. None while undecided.
    pub fn loser(&self) -> Option<&Slot> {
        let winner = self.winner_id()?;
        if self.player_1.holds(winner) {
            Some(&self.player_2)
        } else {
            Some(&self.player_1)
        }
    }

    /// The only real participant of a match against a bye. None if both sides are real
    /// or both are byes.
    pub fn walkover_participant(&self) -> Option<&Participant> {
        match (&self.player_1, &self.player_2) {
            (Slot::Player(p), Slot::Bye) | (Slot::Bye, Slot::Player(p)) => Some(p),
            _ => None,
        }
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} vs. {}", self.player_1.name(), self.player_2.name())?;
        if let Some(w) = &self.winner {
            write!(f, " -> {}", w.name)?;
        }
        Ok(())
    }
}

/// One knockout round. Membership is fixed at creation; only winners change.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Round {
    pub matches: Vec<Match>,
}

impl Round {
    pub fn new(matches: Vec<Match>) -> Self {
        Self { matches }
    }

    pub fn is_complete(&self) -> bool {
        self.matches.iter().all(Match::is_decided)
    }

    pub fn get_match_mut(&mut self, id: MatchId) -> Option<&mut Match> {
        self.matches.iter_mut().find(|m| m.id == id)
    }
}
