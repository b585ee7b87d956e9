//! Backgammon rules: move generation, move application, scoring, and the
//! turn/cube state machine.
//!
//! Every function here is pure: it reads a `GameState` and returns a new
//! value. Nothing is mutated in place, which lets the dice-usage rule and the
//! AI apply candidate moves to hypothetical futures.

pub mod apply;
pub mod engine;
pub mod movegen;
pub mod scoring;

pub use apply::apply_move;
pub use engine::{
    can_offer_double, dispatch, reduce, replay, selected_destinations, Reduction,
};
pub use movegen::{
    can_bear_off, has_legal_moves, legal_bar_entries, legal_moves, legal_moves_from,
};
pub use scoring::{bear_off_winner, check_game_over, detect_win_type, score};
