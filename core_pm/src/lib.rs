//! Grid generation and cursor movement for pacmaze
//!
//! The only crate with real invariants; hosts such as `gui_pm` drive a
//! [`SessionState`](game_state::SessionState) with [`Action`](game_state::Action)s and render
//! what it exposes.

pub mod constants;
pub mod error;
pub mod game_state;
pub mod grid;
