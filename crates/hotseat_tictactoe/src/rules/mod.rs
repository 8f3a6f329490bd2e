//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! board storage so the game, the invariants and the views can share them.

pub mod tie;
pub mod win;

pub use tie::check_tie;
pub use win::{LINES, check_win, winner, winning_line};
