//! Error types for the engine and its configuration.
//!
//! Every failure here is a deterministic consequence of invalid input.
//! The engine validates before it mutates, so an `Err` from `step` leaves
//! the table and the snapshot history exactly as they were.

use thiserror::Error;

use crate::cards::Card;
use crate::core::PlayerId;

/// Errors raised while building or validating a [`GameConfig`](crate::core::GameConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Starting hand size must be in `1..=13`.
    #[error("starting_set_cards must be between 1 and 13, got {0}")]
    InvalidStartingSetCards(u32),

    /// Options could not be parsed.
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors raised by the game engine.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("{player} cannot bid {bid}")]
    IllegalBid { player: PlayerId, bid: u8 },

    #[error("{player} cannot play {card}")]
    IllegalPlay { player: PlayerId, card: Card },

    #[error("card {0} is not in hand")]
    CardNotInHand(Card),

    #[error("deck has {remaining} cards, {requested} requested")]
    DeckExhausted { requested: usize, remaining: usize },

    #[error("the match is over")]
    GameOver,

    /// Exploration needs snapshots but the engine was configured without them.
    #[error("step_back is disabled")]
    StepBackDisabled,

    /// Only a trick holding one card per seat can be resolved.
    #[error("cannot resolve a trick holding {cards} cards")]
    IncompleteTrick { cards: usize },

    #[error("action id {0} is out of range")]
    InvalidActionId(usize),

    #[error("cannot parse card: {0}")]
    ParseCard(String),

    /// A card is missing or owned twice across deck, hands, trick and history.
    #[error("card conservation violated for {card}")]
    CardConservation { card: Card },

    #[error(transparent)]
    Config(#[from] ConfigError),
}
