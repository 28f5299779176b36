//! Core engine types: seats, RNG, configuration, actions.
//!
//! These are independent of the table state machine and are shared by the
//! game, the rules seam and any adapter built on top.

pub mod player;
pub mod rng;
pub mod config;
pub mod action;

pub use player::{PlayerId, PlayerMap, NUM_PLAYERS};
pub use rng::GameRng;
pub use config::{GameConfig, MAX_HAND_SIZE};
pub use action::{Action, ActionRecord, NUM_ACTIONS, NUM_BID_ACTIONS};
