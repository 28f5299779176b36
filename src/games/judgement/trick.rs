//! Trick comparison and resolution.
//!
//! Ordering within a trick:
//! - any trump beats any non-trump, regardless of rank
//! - between trumps, higher rank wins
//! - a lead-suit card beats any card that is neither trump nor lead suit
//! - between lead-suit cards, higher rank wins
//! - a card that is neither trump nor lead suit never wins

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, Suit};
use crate::core::{PlayerId, NUM_PLAYERS};

/// One card placed into a trick.
pub type Play = (PlayerId, Card);

/// Cards in play order. Never holds more than four.
pub type Trick = SmallVec<[Play; NUM_PLAYERS]>;

/// A resolved trick.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrickRecord {
    pub winner: PlayerId,
    pub cards: Trick,
}

/// Does `challenger` beat the current best card `incumbent`?
#[must_use]
pub fn card_beats(challenger: Card, incumbent: Card, lead: Suit, trump: Suit) -> bool {
    let challenger_trump = challenger.suit == trump;
    let incumbent_trump = incumbent.suit == trump;

    match (challenger_trump, incumbent_trump) {
        (true, false) => true,
        (false, true) => false,
        (true, true) => challenger.rank > incumbent.rank,
        (false, false) => {
            if challenger.suit != lead {
                false
            } else if incumbent.suit != lead {
                true
            } else {
                challenger.rank > incumbent.rank
            }
        }
    }
}

/// Winner of a set of plays. The first play fixes the lead suit.
///
/// Returns `None` for an empty trick.
#[must_use]
pub fn trick_winner(plays: &[Play], trump: Suit) -> Option<PlayerId> {
    let (&first, rest) = plays.split_first()?;
    let lead = first.1.suit;

    let (winner, _) = rest.iter().fold(first, |best, &play| {
        if card_beats(play.1, best.1, lead, trump) {
            play
        } else {
            best
        }
    });
    Some(winner)
}
