//! Data structures for the knockout tournament: participants, matches, tournament state.

mod game;
mod participant;
mod tournament;

pub use game::{Match, MatchId, Round, SpecialMatch};
pub use participant::{Participant, ParticipantId, Slot, BYE_LABEL};
pub use tournament::{Stage, Tournament, TournamentError, TournamentSnapshot, MIN_PARTICIPANTS};
