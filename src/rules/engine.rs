//! Rules engine trait: the seam between the game and its consumers.
//!
//! Adapters and search algorithms drive a game only through this trait:
//! - What actions are legal for a seat
//! - How an action advances the state (`step`)
//! - How to retract the last action (`step_back`)
//! - What each seat is allowed to observe
//! - Whether the match is over, and the scores

use crate::core::action::Action;
use crate::core::player::{PlayerId, PlayerMap};
use crate::error::EngineError;

/// Result of a completed match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single highest score.
    Winner(PlayerId),
    /// Several seats tied for the highest score.
    Winners(Vec<PlayerId>),
}

impl GameResult {
    /// Seats holding the highest score.
    #[must_use]
    pub fn from_scores(scores: &PlayerMap<i64>) -> Self {
        let best = scores.values().copied().max().unwrap_or(0);
        let mut leaders: Vec<PlayerId> = scores
            .iter()
            .filter(|&(_, &score)| score == best)
            .map(|(p, _)| p)
            .collect();

        if leaders.len() == 1 {
            GameResult::Winner(leaders.remove(0))
        } else {
            GameResult::Winners(leaders)
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Winners(ps) => ps.contains(&player),
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `step` must validate before mutating: an `Err` leaves state untouched
/// - `step_back` returns `false` (never panics) when nothing can be undone
/// - `player_view` must not expose other seats' hidden information
pub trait RulesEngine {
    /// Per-seat observation type.
    type View;

    /// Start a new match. Returns the first seat's view and id.
    fn init_game(&mut self) -> Result<(Self::View, PlayerId), EngineError>;

    /// Apply an action for the current player. Returns the next seat's view and id.
    fn step(&mut self, action: Action) -> Result<(Self::View, PlayerId), EngineError>;

    /// Undo the most recent `step`. Returns `false` if there is nothing to undo.
    fn step_back(&mut self) -> bool;

    /// Whether `step` keeps snapshots, i.e. whether a successful `step` can
    /// always be followed by a successful `step_back`.
    fn supports_step_back(&self) -> bool;

    /// Seat whose turn it is.
    fn current_player(&self) -> PlayerId;

    /// Legal actions for a seat, in action-id order.
    fn legal_actions(&self, player: PlayerId) -> Vec<Action>;

    /// What `player` is allowed to see.
    fn player_view(&self, player: PlayerId) -> Self::View;

    fn is_over(&self) -> bool;

    /// Cumulative scores. Final once `is_over` is true.
    fn payoffs(&self) -> PlayerMap<i64>;

    // === Convenience Methods ===

    /// Apply an action given as a flat action id.
    fn step_id(&mut self, id: usize) -> Result<(Self::View, PlayerId), EngineError> {
        self.step(Action::from_id(id)?)
    }

    /// Legal actions as flat ids, for the current player when `player` is `None`.
    fn legal_action_ids(&self, player: Option<PlayerId>) -> Vec<usize> {
        let player = player.unwrap_or_else(|| self.current_player());
        self.legal_actions(player).into_iter().map(Action::id).collect()
    }

    /// Match result, or `None` while play continues.
    fn result(&self) -> Option<GameResult> {
        self.is_over().then(|| GameResult::from_scores(&self.payoffs()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_result_single_winner() {
        let scores = PlayerMap::new(|p| [10, -21, 43, 0][p.index()]);
        let result = GameResult::from_scores(&scores);

        assert_eq!(result, GameResult::Winner(PlayerId::new(2)));
        assert!(result.is_winner(PlayerId::new(2)));
        assert!(!result.is_winner(PlayerId::new(0)));
    }

    #[test]
    fn test_game_result_tie() {
        let scores = PlayerMap::new(|p| [21, 21, -10, 21][p.index()]);
        let result = GameResult::from_scores(&scores);

        assert_eq!(
            result,
            GameResult::Winners(vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(3)])
        );
        assert!(result.is_winner(PlayerId::new(3)));
        assert!(!result.is_winner(PlayerId::new(2)));
    }
}
