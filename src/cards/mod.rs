//! Card values shared by every part of the engine.

pub mod card;

pub use card::{Card, Rank, Suit};
