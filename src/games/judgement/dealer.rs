//! Deck construction, shuffling, dealing and the trump cycle.

use super::player::Player;
use crate::cards::{Card, Rank, Suit};
use crate::core::GameRng;
use crate::error::EngineError;

/// Trump suit cycle, indexed by `(round_number - 1) mod 4`.
pub const TRUMP_ORDER: [Suit; 4] = [Suit::Spades, Suit::Diamonds, Suit::Clubs, Suit::Hearts];

/// Builds, shuffles and deals decks.
///
/// The dealer owns the shuffle source. Inject a seeded [`GameRng`] for
/// reproducible deals.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dealer {
    rng: GameRng,
}

impl Dealer {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }

    /// All 52 cards in canonical index order, unshuffled.
    #[must_use]
    pub fn build_deck() -> Vec<Card> {
        Suit::ALL
            .into_iter()
            .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| Card::new(suit, rank)))
            .collect()
    }

    /// Uniformly permute `deck` in place.
    pub fn shuffle(&mut self, deck: &mut [Card]) {
        self.rng.shuffle(deck);
    }

    /// Move `n` cards from the end of `deck` into `player`'s hand.
    ///
    /// Fails without dealing anything if the deck is short.
    pub fn deal(deck: &mut Vec<Card>, player: &mut Player, n: usize) -> Result<(), EngineError> {
        if deck.len() < n {
            return Err(EngineError::DeckExhausted {
                requested: n,
                remaining: deck.len(),
            });
        }
        let start = deck.len() - n;
        for card in deck.drain(start..) {
            player.receive(card);
        }
        Ok(())
    }

    /// Trump suit for a 1-based round number.
    #[must_use]
    pub fn trump_for(round_number: u32) -> Suit {
        TRUMP_ORDER[(round_number.saturating_sub(1) % 4) as usize]
    }
}
