//! The Judgement game engine.

use tracing::trace;

use super::dealer::Dealer;
use super::table::{Phase, TableState};
use super::view::{PerfectInformation, PlayerView};
use crate::cards::Suit;
use crate::core::{Action, GameConfig, GameRng, PlayerId, PlayerMap, NUM_ACTIONS, NUM_PLAYERS};
use crate::error::EngineError;
use crate::rules::RulesEngine;

/// Four-seat Judgement (Oh Hell) with reversible steps.
///
/// A match is a sequence of sets. The first set deals `starting_set_cards`
/// cards and counts down to one; each following set starts one lower, with
/// the dealer moving one seat clockwise, until the one-card set finishes.
///
/// ## Example
///
/// ```
/// use judgement_engine::core::{Action, GameConfig};
/// use judgement_engine::games::judgement::JudgementGame;
/// use judgement_engine::rules::RulesEngine;
///
/// let config = GameConfig::new().with_starting_set_cards(2).with_seed(7);
/// let mut game = JudgementGame::new(config).unwrap();
///
/// let first = game.current_player();
/// game.step(Action::Bid(0)).unwrap();
/// assert_ne!(game.current_player(), first);
///
/// assert!(game.step_back());
/// assert_eq!(game.current_player(), first);
/// ```
#[derive(Clone, Debug)]
pub struct JudgementGame {
    config: GameConfig,
    table: TableState,
    /// Snapshots taken before each step, newest last.
    history: Vec<TableState>,
}

impl JudgementGame {
    pub const NUM_PLAYERS: usize = NUM_PLAYERS;
    pub const NUM_ACTIONS: usize = NUM_ACTIONS;

    /// Create a game and deal its first round.
    pub fn new(config: GameConfig) -> Result<Self, EngineError> {
        config.validate()?;
        let table = TableState::new(config.starting_set_cards as u8, Self::dealer_for(&config));
        let mut game = Self {
            config,
            table,
            history: Vec::new(),
        };
        game.table.reset_match()?;
        Ok(game)
    }

    fn dealer_for(config: &GameConfig) -> Dealer {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Dealer::new(rng)
    }

    /// Replace the configuration and restart the match.
    ///
    /// An invalid configuration is rejected and the current game is left as is.
    pub fn configure(&mut self, config: GameConfig) -> Result<(), EngineError> {
        config.validate()?;
        self.table = TableState::new(config.starting_set_cards as u8, Self::dealer_for(&config));
        self.config = config;
        self.history.clear();
        self.table.reset_match()
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    // === Queries ===

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.table.phase
    }

    #[must_use]
    pub fn trump(&self) -> Suit {
        self.table.trump()
    }

    /// Hand size of the current round.
    #[must_use]
    pub fn num_cards(&self) -> u8 {
        self.table.num_cards
    }

    /// 1-based round counter. Reads one past the last round once the match is over.
    #[must_use]
    pub fn round_number(&self) -> u32 {
        self.table.round_number
    }

    #[must_use]
    pub fn dealer_id(&self) -> PlayerId {
        self.table.dealer_id
    }

    #[must_use]
    pub fn trick_number(&self) -> u8 {
        self.table.trick_number
    }

    /// Number of snapshots available to `step_back`.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// True once every trick of the round is played and the next round has
    /// not been dealt, which only happens at the end of the match.
    #[must_use]
    pub fn is_round_over(&self) -> bool {
        self.table.is_round_over()
    }

    #[must_use]
    pub fn num_players(&self) -> usize {
        Self::NUM_PLAYERS
    }

    #[must_use]
    pub fn num_actions(&self) -> usize {
        Self::NUM_ACTIONS
    }

    /// Every hand, the undealt deck and all counters.
    ///
    /// For debugging and offline analysis only. Agents must use
    /// [`RulesEngine::player_view`].
    #[must_use]
    pub fn perfect_information(&self) -> PerfectInformation {
        PerfectInformation::new(&self.table)
    }
}

impl RulesEngine for JudgementGame {
    type View = PlayerView;

    fn init_game(&mut self) -> Result<(PlayerView, PlayerId), EngineError> {
        self.history.clear();
        self.table.reset_match()?;
        let player = self.table.current_player;
        Ok((self.player_view(player), player))
    }

    fn step(&mut self, action: Action) -> Result<(PlayerView, PlayerId), EngineError> {
        self.table.check(action)?;

        let mut next = self.table.clone();
        next.apply(action)?;
        debug_assert!(
            PerfectInformation::new(&next).census().is_ok(),
            "card conservation broken after {action}"
        );

        let previous = std::mem::replace(&mut self.table, next);
        if self.config.allow_step_back {
            self.history.push(previous);
            trace!(depth = self.history.len(), "snapshot pushed");
        }

        let player = self.table.current_player;
        Ok((self.player_view(player), player))
    }

    fn step_back(&mut self) -> bool {
        if !self.config.allow_step_back {
            return false;
        }
        match self.history.pop() {
            Some(snapshot) => {
                self.table = snapshot;
                trace!(depth = self.history.len(), "snapshot restored");
                true
            }
            None => false,
        }
    }

    fn supports_step_back(&self) -> bool {
        self.config.allow_step_back
    }

    fn current_player(&self) -> PlayerId {
        self.table.current_player
    }

    fn legal_actions(&self, player: PlayerId) -> Vec<Action> {
        self.table.legal_actions(player)
    }

    fn player_view(&self, player: PlayerId) -> PlayerView {
        PlayerView::new(&self.table, player)
    }

    fn is_over(&self) -> bool {
        self.table.game_over
    }

    fn payoffs(&self) -> PlayerMap<i64> {
        self.table.cumulative_scores.clone()
    }
}
