//! Action representation: a bid or a card play.
//!
//! Actions are a tagged value rather than an overloaded integer. The flat
//! integer mapping used by learning agents is provided by [`Action::id`] and
//! [`Action::from_id`]:
//!
//! - ids `0..=13` bid that many tricks
//! - ids `14..=65` play the card whose canonical index is `id - 14`

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::cards::Card;
use crate::error::EngineError;

/// Number of bid ids (bids 0 through 13).
pub const NUM_BID_ACTIONS: usize = 14;

/// Size of the flat action space: 14 bids + 52 cards.
pub const NUM_ACTIONS: usize = NUM_BID_ACTIONS + Card::COUNT;

/// A complete game action.
///
/// ## Example
///
/// ```
/// use judgement_engine::cards::{Card, Rank, Suit};
/// use judgement_engine::core::Action;
///
/// let bid = Action::Bid(3);
/// assert_eq!(bid.id(), 3);
///
/// let play = Action::Play(Card::new(Suit::Diamonds, Rank::Two));
/// assert_eq!(play.id(), 14 + 13);
/// assert_eq!(Action::from_id(27).unwrap(), play);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Action {
    /// Bid a number of tricks during the bidding phase.
    Bid(u8),
    /// Play a card during the playing phase.
    Play(Card),
}

impl Action {
    /// Flat action id in `0..66`.
    #[must_use]
    pub fn id(self) -> usize {
        match self {
            Action::Bid(bid) => bid as usize,
            Action::Play(card) => NUM_BID_ACTIONS + card.index() as usize,
        }
    }

    /// Decode a flat action id.
    pub fn from_id(id: usize) -> Result<Action, EngineError> {
        if id < NUM_BID_ACTIONS {
            return Ok(Action::Bid(id as u8));
        }
        u8::try_from(id - NUM_BID_ACTIONS)
            .ok()
            .and_then(Card::from_index)
            .map(Action::Play)
            .ok_or(EngineError::InvalidActionId(id))
    }

    /// Is this a bid?
    #[must_use]
    pub fn is_bid(self) -> bool {
        matches!(self, Action::Bid(_))
    }
}

impl TryFrom<usize> for Action {
    type Error = EngineError;

    fn try_from(id: usize) -> Result<Self, Self::Error> {
        Action::from_id(id)
    }
}

impl From<Action> for usize {
    fn from(action: Action) -> usize {
        action.id()
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Bid(bid) => write!(f, "bid {bid}"),
            Action::Play(card) => write!(f, "play {card}"),
        }
    }
}

/// A recorded action with the seat that took it and when.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Round number when the action was taken.
    pub round: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: Action, round: u32) -> Self {
        Self {
            player,
            action,
            round,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn test_bid_ids() {
        for bid in 0..=13u8 {
            assert_eq!(Action::Bid(bid).id(), bid as usize);
            assert_eq!(Action::from_id(bid as usize).unwrap(), Action::Bid(bid));
        }
    }

    #[test]
    fn test_card_ids_cover_deck() {
        assert_eq!(Action::Play(Card::new(Suit::Spades, Rank::Two)).id(), 14);
        assert_eq!(Action::Play(Card::new(Suit::Clubs, Rank::Ace)).id(), 65);

        for id in NUM_BID_ACTIONS..NUM_ACTIONS {
            let action = Action::from_id(id).unwrap();
            assert!(!action.is_bid());
            assert_eq!(action.id(), id);
        }
    }

    #[test]
    fn test_out_of_range_id() {
        assert!(matches!(
            Action::from_id(NUM_ACTIONS),
            Err(EngineError::InvalidActionId(66))
        ));
        assert!(Action::try_from(10_000usize).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Action::Bid(2).to_string(), "bid 2");
        assert_eq!(
            Action::Play(Card::new(Suit::Hearts, Rank::King)).to_string(),
            "play KH"
        );
    }

    #[test]
    fn test_action_record_serialization() {
        let action = Action::Play(Card::new(Suit::Spades, Rank::Ace));
        let record = ActionRecord::new(PlayerId::new(1), action, 2);

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ActionRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
