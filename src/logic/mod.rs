//! Tournament business logic: bracket building, setup, knockout rounds, finals.

mod bracket;
mod finals;
mod knockout;
mod overview;
mod progress;
mod setup;

pub use bracket::{next_round, resolve_byes, seed_first_round, EntryOrder, RandomOrder, SeedOrder};
pub use finals::{pick_special_winner, process_bronze_result, process_final_result};
pub use knockout::{pick_winner, process_round_results};
pub use overview::bracket_overview;
pub use progress::finish_round;
pub use setup::{start_tournament, start_tournament_with};
