//! Movement rules and capture resolution.
//!
//! Rules are free functions over [`GameState`](crate::board::GameState);
//! the engine's move entry point drives them. Every rejection is returned
//! before any token state is written, so a failed move leaves the state
//! untouched.

pub mod capture;
pub mod movement;

pub use capture::{try_capture, CaptureEvent};
pub use movement::{
    advance_in_lane, apply_move, can_traverse, enter_finish_lane, squares_until_finish,
    Destination, MoveError, MoveOutcome,
};
