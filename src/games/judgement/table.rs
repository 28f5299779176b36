//! The full mutable table: bidding, playing, trick resolution, round and
//! set progression, and scoring.
//!
//! Everything that `step` can change lives in one [`TableState`] value, so a
//! snapshot is just a clone. Played-trick history is an `im::Vector` and the
//! action log shares structure the same way, keeping clones cheap during
//! tree search.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use super::dealer::Dealer;
use super::player::Player;
use super::scoring::round_payoffs;
use super::trick::{trick_winner, Trick, TrickRecord};
use crate::cards::{Card, Suit};
use crate::core::{Action, ActionRecord, PlayerId, PlayerMap, NUM_PLAYERS};
use crate::error::EngineError;

/// Phase of the current round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Bidding,
    Playing,
}

/// Complete engine state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableState {
    pub(crate) phase: Phase,
    pub(crate) players: PlayerMap<Player>,
    pub(crate) dealer: Dealer,
    /// Undealt cards for the current round.
    pub(crate) deck: Vec<Card>,

    pub(crate) starting_set_cards: u8,
    pub(crate) current_set_start: u8,
    pub(crate) num_cards: u8,
    pub(crate) round_number: u32,
    pub(crate) dealer_id: PlayerId,
    pub(crate) current_player: PlayerId,

    pub(crate) bidding_order: [PlayerId; NUM_PLAYERS],
    pub(crate) bids_made: u8,

    pub(crate) current_trick: Trick,
    pub(crate) lead_suit: Option<Suit>,
    /// 1-based during play; exceeding `num_cards` means the round is done.
    pub(crate) trick_number: u8,
    pub(crate) played_cards_history: Vector<TrickRecord>,

    pub(crate) cumulative_scores: PlayerMap<i64>,
    pub(crate) actions: Vector<ActionRecord>,
    pub(crate) game_over: bool,
}

impl TableState {
    /// An undealt table. Call [`TableState::reset_match`] before play.
    #[must_use]
    pub fn new(starting_set_cards: u8, dealer: Dealer) -> Self {
        let dealer_id = PlayerId::new(0);
        Self {
            phase: Phase::Bidding,
            players: PlayerMap::new(Player::new),
            dealer,
            deck: Vec::new(),
            starting_set_cards,
            current_set_start: starting_set_cards,
            num_cards: starting_set_cards,
            round_number: 1,
            dealer_id,
            current_player: dealer_id.next(),
            bidding_order: Self::order_after(dealer_id),
            bids_made: 0,
            current_trick: Trick::new(),
            lead_suit: None,
            trick_number: 0,
            played_cards_history: Vector::new(),
            cumulative_scores: PlayerMap::with_value(0),
            actions: Vector::new(),
            game_over: false,
        }
    }

    fn order_after(dealer_id: PlayerId) -> [PlayerId; NUM_PLAYERS] {
        std::array::from_fn(|i| dealer_id.offset(i + 1))
    }

    // === Progression ===

    /// Restart the match from round 1 and deal it.
    pub fn reset_match(&mut self) -> Result<(), EngineError> {
        self.round_number = 1;
        self.dealer_id = PlayerId::new(0);
        self.current_set_start = self.starting_set_cards;
        self.num_cards = self.starting_set_cards;
        self.cumulative_scores = PlayerMap::with_value(0);
        self.actions = Vector::new();
        self.game_over = false;
        self.begin_round()
    }

    /// Deal a fresh shuffled deck and open bidding.
    fn begin_round(&mut self) -> Result<(), EngineError> {
        for (_, player) in self.players.iter_mut() {
            player.reset();
        }

        let mut deck = Dealer::build_deck();
        self.dealer.shuffle(&mut deck);
        for (_, player) in self.players.iter_mut() {
            Dealer::deal(&mut deck, player, self.num_cards as usize)?;
        }
        self.deck = deck;

        self.phase = Phase::Bidding;
        self.bids_made = 0;
        self.bidding_order = Self::order_after(self.dealer_id);
        self.current_player = self.bidding_order[0];
        self.current_trick.clear();
        self.lead_suit = None;
        self.trick_number = 0;
        self.played_cards_history = Vector::new();

        debug!(
            round = self.round_number,
            num_cards = self.num_cards,
            dealer = %self.dealer_id,
            trump = %self.trump(),
            "dealt round"
        );
        Ok(())
    }

    fn start_playing(&mut self) {
        self.phase = Phase::Playing;
        self.trick_number = 1;
        self.current_player = self.dealer_id.next();
        self.current_trick.clear();
        self.lead_suit = None;
        trace!(bids = ?self.bids().to_vec(), "bidding complete");
    }

    // === Queries ===

    /// Trump suit, derived from the round number.
    #[must_use]
    pub fn trump(&self) -> Suit {
        Dealer::trump_for(self.round_number)
    }

    #[must_use]
    pub fn bids(&self) -> PlayerMap<Option<u8>> {
        self.players.map(Player::bid)
    }

    #[must_use]
    pub fn tricks_won(&self) -> PlayerMap<u8> {
        self.players.map(Player::tricks_won)
    }

    #[must_use]
    pub fn is_round_over(&self) -> bool {
        self.phase == Phase::Playing && self.trick_number > self.num_cards
    }

    /// Legal bids for `player`, ascending.
    ///
    /// The dealer may not bid the value that would make the bids sum to the
    /// hand size.
    #[must_use]
    pub fn legal_bids(&self, player: PlayerId) -> Vec<u8> {
        let forbidden = if player == self.dealer_id {
            let placed: u32 = self.players.values().filter_map(Player::bid).map(u32::from).sum();
            u32::from(self.num_cards).checked_sub(placed)
        } else {
            None
        };

        (0..=self.num_cards)
            .filter(|&bid| Some(u32::from(bid)) != forbidden)
            .collect()
    }

    /// Cards `player` may play, in canonical order.
    ///
    /// A player holding the lead suit must follow it; otherwise any card
    /// in hand is legal.
    #[must_use]
    pub fn legal_cards(&self, player: PlayerId) -> Vec<Card> {
        let player = &self.players[player];
        let mut cards = match self.lead_suit {
            Some(lead) if !self.current_trick.is_empty() && player.has_suit(lead) => {
                player.cards_of_suit(lead)
            }
            _ => player.hand().to_vec(),
        };
        cards.sort();
        cards
    }

    /// Legal actions for `player` in the current phase.
    #[must_use]
    pub fn legal_actions(&self, player: PlayerId) -> Vec<Action> {
        if self.game_over {
            return Vec::new();
        }
        match self.phase {
            Phase::Bidding => self.legal_bids(player).into_iter().map(Action::Bid).collect(),
            Phase::Playing => self.legal_cards(player).into_iter().map(Action::Play).collect(),
        }
    }

    /// Check `action` for the current player without touching state.
    pub fn check(&self, action: Action) -> Result<(), EngineError> {
        if self.game_over {
            return Err(EngineError::GameOver);
        }
        let player = self.current_player;
        match (self.phase, action) {
            (Phase::Bidding, Action::Bid(bid)) if self.legal_bids(player).contains(&bid) => Ok(()),
            (Phase::Playing, Action::Play(card)) if self.legal_cards(player).contains(&card) => {
                Ok(())
            }
            (_, Action::Bid(bid)) => Err(EngineError::IllegalBid { player, bid }),
            (_, Action::Play(card)) => Err(EngineError::IllegalPlay { player, card }),
        }
    }

    // === Transitions ===

    /// Apply a legal action for the current player.
    pub fn apply(&mut self, action: Action) -> Result<(), EngineError> {
        self.check(action)?;

        let player = self.current_player;
        self.actions
            .push_back(ActionRecord::new(player, action, self.round_number));
        trace!(%player, %action, "apply");

        match action {
            Action::Bid(bid) => {
                self.apply_bid(player, bid);
                Ok(())
            }
            Action::Play(card) => self.apply_play(player, card),
        }
    }

    fn apply_bid(&mut self, player: PlayerId, bid: u8) {
        self.players[player].set_bid(bid);
        self.bids_made += 1;

        if self.bids_made as usize == NUM_PLAYERS {
            self.start_playing();
        } else {
            self.current_player = self.bidding_order[self.bids_made as usize];
        }
    }

    fn apply_play(&mut self, player: PlayerId, card: Card) -> Result<(), EngineError> {
        let card = self.players[player].play(card)?;
        self.current_trick.push((player, card));
        if self.current_trick.len() == 1 {
            self.lead_suit = Some(card.suit);
        }

        if self.current_trick.len() == NUM_PLAYERS {
            self.resolve_trick()
        } else {
            self.current_player = player.next();
            Ok(())
        }
    }

    fn resolve_trick(&mut self) -> Result<(), EngineError> {
        let cards = self.current_trick.len();
        let winner = trick_winner(&self.current_trick, self.trump())
            .filter(|_| cards == NUM_PLAYERS)
            .ok_or(EngineError::IncompleteTrick { cards })?;

        self.players[winner].win_trick();
        let cards = std::mem::take(&mut self.current_trick);
        debug!(
            trick = self.trick_number,
            %winner,
            cards = ?cards.iter().map(|(_, c)| c.to_string()).collect::<Vec<_>>(),
            "trick resolved"
        );
        self.played_cards_history
            .push_back(TrickRecord { winner, cards });
        self.lead_suit = None;
        self.trick_number += 1;

        if self.trick_number > self.num_cards {
            self.settle_round()
        } else {
            self.current_player = winner;
            Ok(())
        }
    }

    fn settle_round(&mut self) -> Result<(), EngineError> {
        let payoffs = round_payoffs(&self.players);
        for (player, score) in self.cumulative_scores.iter_mut() {
            *score += payoffs[player];
        }
        debug!(
            round = self.round_number,
            payoffs = ?payoffs.to_vec(),
            totals = ?self.cumulative_scores.to_vec(),
            "round settled"
        );

        self.round_number += 1;
        if self.num_cards > 1 {
            self.num_cards -= 1;
            return self.begin_round();
        }

        if self.current_set_start <= 1 {
            self.game_over = true;
            info!(
                rounds = self.round_number - 1,
                scores = ?self.cumulative_scores.to_vec(),
                "match complete"
            );
            return Ok(());
        }

        self.current_set_start -= 1;
        self.num_cards = self.current_set_start;
        self.dealer_id = self.dealer_id.next();
        debug!(
            set_start = self.current_set_start,
            dealer = %self.dealer_id,
            "set complete, rotating dealer"
        );
        self.begin_round()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameRng;

    fn table(cards: u8) -> TableState {
        let mut table = TableState::new(cards, Dealer::new(GameRng::new(5)));
        table.reset_match().unwrap();
        table
    }

    fn card(s: &str) -> Card {
        s.parse().unwrap()
    }

    /// Replace every hand with the given cards and put the rest back in the deck.
    fn set_hands(table: &mut TableState, hands: [&[&str]; 4]) {
        let mut deck = Dealer::build_deck();
        for (player, cards) in PlayerId::all().zip(hands) {
            let seat = &mut table.players[player];
            let bid = seat.bid();
            seat.reset();
            if let Some(bid) = bid {
                seat.set_bid(bid);
            }
            for c in cards {
                let c = card(c);
                deck.retain(|&d| d != c);
                seat.receive(c);
            }
        }
        table.deck = deck;
    }

    #[test]
    fn test_new_round_layout() {
        let t = table(3);

        assert_eq!(t.phase, Phase::Bidding);
        assert_eq!(t.round_number, 1);
        assert_eq!(t.trump(), Suit::Spades);
        assert_eq!(t.current_player, PlayerId::new(1));
        assert_eq!(
            t.bidding_order,
            [PlayerId::new(1), PlayerId::new(2), PlayerId::new(3), PlayerId::new(0)]
        );
        assert_eq!(t.deck.len(), 52 - 12);
        for p in t.players.values() {
            assert_eq!(p.hand().len(), 3);
        }
    }

    #[test]
    fn test_forced_dealer_bid_is_excluded() {
        let mut t = table(3);
        t.apply(Action::Bid(1)).unwrap();
        t.apply(Action::Bid(1)).unwrap();
        t.apply(Action::Bid(0)).unwrap();

        assert_eq!(t.current_player, t.dealer_id);
        assert_eq!(t.legal_bids(t.dealer_id), vec![0, 2, 3]);
        assert!(matches!(
            t.check(Action::Bid(1)),
            Err(EngineError::IllegalBid { bid: 1, .. })
        ));
    }

    #[test]
    fn test_no_exclusion_when_bids_already_exceed() {
        let mut t = table(2);
        t.apply(Action::Bid(2)).unwrap();
        t.apply(Action::Bid(2)).unwrap();
        t.apply(Action::Bid(0)).unwrap();

        assert_eq!(t.legal_bids(t.dealer_id), vec![0, 1, 2]);
    }

    #[test]
    fn test_non_dealer_bids_unrestricted() {
        let t = table(4);
        assert_eq!(t.legal_bids(PlayerId::new(1)), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_bidding_completes_into_play() {
        let mut t = table(2);
        for bid in [0, 0, 0, 1] {
            t.apply(Action::Bid(bid)).unwrap();
        }

        assert_eq!(t.phase, Phase::Playing);
        assert_eq!(t.trick_number, 1);
        assert_eq!(t.current_player, PlayerId::new(1));
        assert_eq!(t.bids().to_vec(), vec![Some(1), Some(0), Some(0), Some(0)]);
    }

    #[test]
    fn test_must_follow_suit() {
        let mut t = table(2);
        for bid in [0, 0, 0, 1] {
            t.apply(Action::Bid(bid)).unwrap();
        }
        set_hands(
            &mut t,
            [&["AC", "3D"], &["5H", "9C"], &["KH", "2S"], &["10D", "JD"]],
        );

        t.apply(Action::Play(card("5H"))).unwrap();
        assert_eq!(t.lead_suit, Some(Suit::Hearts));

        // Player 2 holds a heart and must play it.
        assert_eq!(t.legal_cards(PlayerId::new(2)), vec![card("KH")]);
        assert!(matches!(
            t.check(Action::Play(card("2S"))),
            Err(EngineError::IllegalPlay { .. })
        ));

        // Player 3 has no hearts and may play anything.
        assert_eq!(t.legal_cards(PlayerId::new(3)), vec![card("10D"), card("JD")]);
    }

    #[test]
    fn test_trick_resolution_and_winner_leads() {
        let mut t = table(2);
        for bid in [1, 0, 0, 0] {
            t.apply(Action::Bid(bid)).unwrap();
        }
        set_hands(
            &mut t,
            [&["AC", "3D"], &["5H", "9C"], &["KH", "2S"], &["10D", "JD"]],
        );

        for c in ["5H", "KH", "10D", "AC"] {
            t.apply(Action::Play(card(c))).unwrap();
        }

        // Spades are trump in round 1; nobody trumped, so the king of hearts wins.
        assert_eq!(t.played_cards_history.len(), 1);
        assert_eq!(t.played_cards_history[0].winner, PlayerId::new(2));
        assert_eq!(t.tricks_won()[PlayerId::new(2)], 1);
        assert_eq!(t.current_player, PlayerId::new(2));
        assert_eq!(t.trick_number, 2);
        assert!(t.current_trick.is_empty());
        assert_eq!(t.lead_suit, None);
    }

    #[test]
    fn test_last_round_settles_and_ends_match() {
        let mut t = table(1);
        // Hand size 1 with starting set 1 is the whole match.
        for bid in [1, 0, 0, 1] {
            t.apply(Action::Bid(bid)).unwrap();
        }
        set_hands(&mut t, [&["2C"], &["AS"], &["KS"], &["3H"]]);

        for c in ["AS", "KS", "3H", "2C"] {
            t.apply(Action::Play(card(c))).unwrap();
        }

        assert!(t.game_over);
        assert!(t.is_round_over());
        assert_eq!(t.round_number, 2);
        // P1 bid 1 and won; P0 bid 1 and lost; P2, P3 bid 0 and won nothing.
        assert_eq!(t.cumulative_scores.to_vec(), vec![-21, 21, 10, 10]);
        assert!(t.legal_actions(t.current_player).is_empty());
        assert!(matches!(t.check(Action::Bid(0)), Err(EngineError::GameOver)));
    }

    #[test]
    fn test_resolving_partial_trick_fails_without_change() {
        let mut t = table(2);
        assert!(matches!(
            t.resolve_trick(),
            Err(EngineError::IncompleteTrick { cards: 0 })
        ));

        for bid in [0, 0, 0, 1] {
            t.apply(Action::Bid(bid)).unwrap();
        }
        let lead = t.legal_cards(t.current_player)[0];
        t.apply(Action::Play(lead)).unwrap();
        let before = t.clone();

        assert!(matches!(
            t.resolve_trick(),
            Err(EngineError::IncompleteTrick { cards: 1 })
        ));
        assert_eq!(t, before);
    }

    #[test]
    fn test_wrong_action_kind_for_phase() {
        let t = table(2);
        assert!(matches!(
            t.check(Action::Play(card("AS"))),
            Err(EngineError::IllegalPlay { .. })
        ));
    }

    #[test]
    fn test_failed_apply_does_not_mutate() {
        let mut t = table(3);
        let before = t.clone();
        assert!(t.apply(Action::Bid(9)).is_err());
        assert_eq!(t, before);
    }
}
