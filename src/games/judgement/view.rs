//! Read-only projections of the table.
//!
//! [`PlayerView`] is what a seat is allowed to see: its own hand plus the
//! public state. [`PerfectInformation`] exposes everything, for offline
//! analysis and invariant checks only. Both are owned copies, so nothing a
//! caller does to them reaches back into the engine.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::dealer::Dealer;
use super::table::{Phase, TableState};
use super::trick::{Play, TrickRecord};
use crate::cards::{Card, Suit};
use crate::core::{Action, ActionRecord, PlayerId, PlayerMap, NUM_PLAYERS};
use crate::error::EngineError;

/// Hidden-information view for one seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub player_id: PlayerId,
    /// This seat's hand, in canonical order.
    pub hand: Vec<Card>,
    pub phase: Phase,
    pub trump_suit: Suit,
    /// Bids are public once placed.
    pub bids: PlayerMap<Option<u8>>,
    pub tricks_won: PlayerMap<u8>,
    pub current_trick: Vec<Play>,
    pub lead_suit: Option<Suit>,
    pub dealer_id: PlayerId,
    pub current_player: PlayerId,
    pub num_cards: u8,
    pub played_cards_history: Vec<TrickRecord>,
    /// Legal actions for this seat.
    pub legal_actions: Vec<Action>,
}

impl PlayerView {
    pub(crate) fn new(table: &TableState, player: PlayerId) -> Self {
        let mut hand = table.players[player].hand().to_vec();
        hand.sort();

        Self {
            player_id: player,
            hand,
            phase: table.phase,
            trump_suit: table.trump(),
            bids: table.bids(),
            tricks_won: table.tricks_won(),
            current_trick: table.current_trick.to_vec(),
            lead_suit: table.lead_suit,
            dealer_id: table.dealer_id,
            current_player: table.current_player,
            num_cards: table.num_cards,
            played_cards_history: table.played_cards_history.iter().cloned().collect(),
            legal_actions: table.legal_actions(player),
        }
    }

    /// Legal actions as flat action ids.
    #[must_use]
    pub fn legal_action_ids(&self) -> Vec<usize> {
        self.legal_actions.iter().map(|a| a.id()).collect()
    }
}

/// Where a card sits right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CardLocation {
    Deck,
    Hand(PlayerId),
    Trick,
    /// Index into the played-tricks history.
    History(usize),
}

/// Full engine state. Debugging and offline analysis only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PerfectInformation {
    pub phase: Phase,
    pub trump_suit: Suit,
    pub round_number: u32,
    pub num_cards: u8,
    pub current_set_start: u8,
    pub dealer_id: PlayerId,
    pub current_player: PlayerId,
    pub bidding_order: [PlayerId; NUM_PLAYERS],
    pub bids_made: u8,
    pub bids: PlayerMap<Option<u8>>,
    pub tricks_won: PlayerMap<u8>,
    pub hands: PlayerMap<Vec<Card>>,
    pub deck: Vec<Card>,
    pub current_trick: Vec<Play>,
    pub lead_suit: Option<Suit>,
    pub trick_number: u8,
    pub played_cards_history: Vec<TrickRecord>,
    pub cumulative_scores: PlayerMap<i64>,
    pub actions: Vec<ActionRecord>,
    pub game_over: bool,
}

impl PerfectInformation {
    pub(crate) fn new(table: &TableState) -> Self {
        Self {
            phase: table.phase,
            trump_suit: table.trump(),
            round_number: table.round_number,
            num_cards: table.num_cards,
            current_set_start: table.current_set_start,
            dealer_id: table.dealer_id,
            current_player: table.current_player,
            bidding_order: table.bidding_order,
            bids_made: table.bids_made,
            bids: table.bids(),
            tricks_won: table.tricks_won(),
            hands: table.players.map(|p| p.hand().to_vec()),
            deck: table.deck.clone(),
            current_trick: table.current_trick.to_vec(),
            lead_suit: table.lead_suit,
            trick_number: table.trick_number,
            played_cards_history: table.played_cards_history.iter().cloned().collect(),
            cumulative_scores: table.cumulative_scores.clone(),
            actions: table.actions.iter().cloned().collect(),
            game_over: table.game_over,
        }
    }

    /// Locate every card, checking that each of the 52 is owned exactly once.
    pub fn census(&self) -> Result<FxHashMap<Card, CardLocation>, EngineError> {
        let deck = self.deck.iter().map(|&c| (c, CardLocation::Deck));
        let hands = self
            .hands
            .iter()
            .flat_map(|(p, hand)| hand.iter().map(move |&c| (c, CardLocation::Hand(p))));
        let trick = self.current_trick.iter().map(|&(_, c)| (c, CardLocation::Trick));
        let history = self
            .played_cards_history
            .iter()
            .enumerate()
            .flat_map(|(i, record)| {
                record
                    .cards
                    .iter()
                    .map(move |&(_, c)| (c, CardLocation::History(i)))
            });

        let mut locations = FxHashMap::default();
        for (card, location) in deck.chain(hands).chain(trick).chain(history) {
            if locations.insert(card, location).is_some() {
                return Err(EngineError::CardConservation { card });
            }
        }

        if let Some(card) = Dealer::build_deck()
            .into_iter()
            .find(|c| !locations.contains_key(c))
        {
            return Err(EngineError::CardConservation { card });
        }
        Ok(locations)
    }
}
