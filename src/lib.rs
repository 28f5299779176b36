//! # judgement-engine
//!
//! A deterministic, reversible engine for Judgement (Oh Hell), built for
//! RL agents and tree search.
//!
//! ## Design Principles
//!
//! 1. **Reversible**: every successful `step` can be undone by `step_back`,
//!    restoring the previous state exactly, shuffle RNG included.
//!
//! 2. **Validate Before Mutate**: an illegal action returns an error and
//!    leaves the engine untouched.
//!
//! 3. **Imperfect Information**: agents see a [`PlayerView`] with only their
//!    own hand. The full table is available separately for debugging.
//!
//! ## Architecture
//!
//! - **Snapshot Undo**: the whole mutable table is one value; a snapshot is
//!   a clone. Trick history and the action log use `im` vectors so clones
//!   share structure.
//!
//! - **Seeded Shuffles**: the deck is shuffled with a ChaCha8 stream, so a
//!   seed reproduces a whole match.
//!
//! ## Modules
//!
//! - `core`: Players, actions, RNG, configuration
//! - `cards`: Suits, ranks and cards
//! - `rules`: RulesEngine trait and generic exploration helpers
//! - `games`: The Judgement implementation
//! - `error`: Engine and configuration errors

pub mod cards;
pub mod core;
pub mod error;
pub mod games;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, GameConfig, GameRng, PlayerId, PlayerMap, NUM_ACTIONS, NUM_PLAYERS,
};

pub use crate::cards::{Card, Rank, Suit};

pub use crate::rules::{count_leaves, random_playout, GameResult, RulesEngine};

pub use crate::error::{ConfigError, EngineError};

pub use crate::games::judgement::{
    JudgementGame, PerfectInformation, Phase, PlayerView, TrickRecord,
};
