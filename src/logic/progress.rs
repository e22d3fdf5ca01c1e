//! Stage-aware "finish round" used by every caller that drives the tournament forward.

use crate::logic::finals::{process_bronze_result, process_final_result};
use crate::logic::knockout::process_round_results;
use crate::models::{Stage, Tournament, TournamentError};

/// Finish whatever is currently being played: a knockout round, the bronze match, or the final.
pub fn finish_round(tournament: &mut Tournament) -> Result<(), TournamentError> {
    match tournament.stage {
        Stage::Matches => process_round_results(tournament),
        Stage::Bronze => process_bronze_result(tournament),
        Stage::Final => process_final_result(tournament),
        Stage::Entry | Stage::Award => Err(TournamentError::InvalidState),
    }
}
