//! Table tennis knockout tournament: library with models and business logic.

pub mod logic;
pub mod models;

pub use logic::{
    bracket_overview, finish_round, next_round, pick_special_winner, pick_winner,
    process_bronze_result, process_final_result, process_round_results, resolve_byes,
    seed_first_round, start_tournament, start_tournament_with, EntryOrder, RandomOrder, SeedOrder,
};
pub use models::{
    Match, MatchId, Participant, ParticipantId, Round, Slot, SpecialMatch, Stage, Tournament,
    TournamentError, TournamentSnapshot, BYE_LABEL, MIN_PARTICIPANTS,
};
