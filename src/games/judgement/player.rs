//! A seat's private hand and per-round counters.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Suit};
use crate::core::PlayerId;
use crate::error::EngineError;

/// One seat at the table.
///
/// The hand is owned exclusively by the player; callers only ever see
/// copies through views.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    hand: Vec<Card>,
    bid: Option<u8>,
    tricks_won: u8,
}

impl Player {
    #[must_use]
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            hand: Vec::new(),
            bid: None,
            tricks_won: 0,
        }
    }

    /// Empty the hand and clear the round counters.
    pub fn reset(&mut self) {
        self.hand.clear();
        self.bid = None;
        self.tricks_won = 0;
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    #[must_use]
    pub fn bid(&self) -> Option<u8> {
        self.bid
    }

    #[must_use]
    pub fn tricks_won(&self) -> u8 {
        self.tricks_won
    }

    pub(crate) fn set_bid(&mut self, bid: u8) {
        self.bid = Some(bid);
    }

    pub(crate) fn win_trick(&mut self) {
        self.tricks_won += 1;
    }

    /// Add a dealt card. Dealing without replacement keeps hands duplicate-free.
    pub(crate) fn receive(&mut self, card: Card) {
        debug_assert!(!self.hand.contains(&card), "{card} dealt twice to {}", self.id);
        self.hand.push(card);
    }

    /// Remove `card` from the hand.
    pub fn play(&mut self, card: Card) -> Result<Card, EngineError> {
        let pos = self
            .hand
            .iter()
            .position(|&c| c == card)
            .ok_or(EngineError::CardNotInHand(card))?;
        Ok(self.hand.remove(pos))
    }

    #[must_use]
    pub fn holds(&self, card: Card) -> bool {
        self.hand.contains(&card)
    }

    /// Cards of `suit`, in hand order.
    #[must_use]
    pub fn cards_of_suit(&self, suit: Suit) -> Vec<Card> {
        self.hand.iter().copied().filter(|c| c.suit == suit).collect()
    }

    #[must_use]
    pub fn has_suit(&self, suit: Suit) -> bool {
        self.hand.iter().any(|c| c.suit == suit)
    }
}
