//! Rules engine trait and engine-agnostic exploration.
//!
//! Games implement `RulesEngine`; adapters, agents and search code drive
//! them only through it. Perfect-information accessors are deliberately
//! not part of the trait.

pub mod engine;
pub mod explore;

pub use engine::{GameResult, RulesEngine};
pub use explore::{count_leaves, random_playout};
