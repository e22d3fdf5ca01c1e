//! Tournament, Stage, and the read-only TournamentSnapshot.

use crate::models::game::{Match, MatchId, Round};
use crate::models::participant::{Participant, ParticipantId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Minimum number of participants needed to start.
pub const MIN_PARTICIPANTS: usize = 2;

/// Errors that can occur during tournament operations.
///
/// Every transition leaves the tournament untouched when it returns one of these.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// Tournament is not in a stage that allows this action.
    InvalidState,
    /// Participant name is empty after trimming.
    EmptyName,
    /// A participant with this exact name already exists.
    DuplicateParticipantName,
    /// Not enough participants to start.
    NotEnoughParticipants { required: usize },
    /// Participant not found in the entry list.
    ParticipantNotFound(ParticipantId),
    /// Match not found in the current round.
    MatchNotFound(MatchId),
    /// The chosen participant does not play in that match.
    NotInMatch(ParticipantId),
    /// The match already has a different winner.
    WinnerAlreadyPicked,
    /// Not all matches have a winner.
    IncompleteResults,
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::InvalidState => write!(f, "Invalid state for this action"),
            TournamentError::EmptyName => write!(f, "Participant name must not be empty"),
            TournamentError::DuplicateParticipantName => {
                write!(f, "A participant with this name already exists")
            }
            TournamentError::NotEnoughParticipants { required } => {
                write!(f, "Need at least {} participants to start", required)
            }
            TournamentError::ParticipantNotFound(_) => write!(f, "Participant not found"),
            TournamentError::MatchNotFound(_) => write!(f, "Match not found"),
            TournamentError::NotInMatch(_) => write!(f, "Participant does not play in this match"),
            TournamentError::WinnerAlreadyPicked => write!(f, "This match already has a winner"),
            TournamentError::IncompleteResults => write!(f, "Not all matches have a winner"),
        }
    }
}

impl std::error::Error for TournamentError {}

/// Current stage of the tournament.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Entering participants; not started.
    #[default]
    Entry,
    /// Knockout rounds until two matches remain.
    Matches,
    /// Third-place match between the semifinal losers.
    Bronze,
    /// Final between the semifinal winners.
    Final,
    /// Finished; podium is set.
    Award,
}

/// Full tournament state: participants, round history, special matches and podium.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Tournament {
    pub stage: Stage,
    /// Entered participants, in entry order.
    pub participants: Vec<Participant>,
    /// Round history, append-only. The last entry is the current round.
    pub rounds: Vec<Round>,
    pub bronze_match: Option<Match>,
    pub final_match: Option<Match>,
    /// 1st, 2nd, 3rd (3rd absent in a two-participant tournament).
    pub podium: Vec<Participant>,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl Tournament {
    /// Create an empty tournament in Entry stage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tournament with initial participants. Still in Entry until started.
    pub fn with_participants(participants: Vec<Participant>) -> Self {
        Self {
            participants,
            ..Self::new()
        }
    }

    /// Matches of the current round (empty before start).
    pub fn current_matches(&self) -> &[Match] {
        self.rounds
            .last()
            .map(|r| r.matches.as_slice())
            .unwrap_or_default()
    }

    /// 1-based number of the current round, 0 before start.
    pub fn round_number(&self) -> usize {
        self.rounds.len()
    }

    pub fn current_round_mut(&mut self) -> Option<&mut Round> {
        self.rounds.last_mut()
    }

    pub fn get_participant(&self, id: ParticipantId) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == id)
    }

    /// Add a participant (Entry only). Names are trimmed and must be unique (case-sensitive).
    pub fn add_participant(&mut self, name: impl Into<String>) -> Result<ParticipantId, TournamentError> {
        if self.stage != Stage::Entry {
            return Err(TournamentError::InvalidState);
        }
        let name = name.into();
        let name_trimmed = name.trim();
        if name_trimmed.is_empty() {
            return Err(TournamentError::EmptyName);
        }
        if self.participants.iter().any(|p| p.name == name_trimmed) {
            return Err(TournamentError::DuplicateParticipantName);
        }
        let participant = Participant::new(name_trimmed);
        let id = participant.id;
        log::debug!("Added participant {:?} ({})", participant.name, id);
        self.participants.push(participant);
        Ok(id)
    }

    /// Remove a participant by id (Entry only).
    pub fn remove_participant(&mut self, id: ParticipantId) -> Result<(), TournamentError> {
        if self.stage != Stage::Entry {
            return Err(TournamentError::InvalidState);
        }
        let idx = self
            .participants
            .iter()
            .position(|p| p.id == id)
            .ok_or(TournamentError::ParticipantNotFound(id))?;
        self.participants.remove(idx);
        Ok(())
    }

    /// Clear everything and go back to Entry.
    pub fn reset_all(&mut self) {
        log::info!("Tournament reset");
        *self = Self::new();
    }

    /// Back to Entry with the same participants (any started stage). Clears rounds and results.
    pub fn restart_tournament(&mut self) -> Result<(), TournamentError> {
        if self.stage == Stage::Entry {
            return Err(TournamentError::InvalidState);
        }
        let participants = std::mem::take(&mut self.participants);
        log::info!("Tournament restarted with {} participants", participants.len());
        *self = Self::with_participants(participants);
        Ok(())
    }

    /// Read-only projection for the presentation layer.
    pub fn snapshot(&self) -> TournamentSnapshot {
        TournamentSnapshot {
            stage: self.stage,
            participants: self.participants.clone(),
            rounds: self.rounds.clone(),
            current_matches: self.current_matches().to_vec(),
            round_number: self.round_number(),
            bronze_match: self.bronze_match.clone(),
            final_match: self.final_match.clone(),
            podium: self.podium.clone(),
            started_at: self.started_at,
            completed_at: self.completed_at,
        }
    }
}

/// Everything a presentation layer needs to render the tournament.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TournamentSnapshot {
    pub stage: Stage,
    pub participants: Vec<Participant>,
    pub rounds: Vec<Round>,
    pub current_matches: Vec<Match>,
    pub round_number: usize,
    pub bronze_match: Option<Match>,
    pub final_match: Option<Match>,
    pub podium: Vec<Participant>,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
}
