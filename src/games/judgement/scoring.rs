//! Round payoffs.
//!
//! Making the bid exactly pays `(bid + 1) * 10 + bid`; missing it costs the
//! same amount. The magnitude always comes from the bid, never from the
//! tricks actually won.

use super::player::Player;
use crate::core::PlayerMap;

/// Payoff for one seat's round.
#[must_use]
pub fn round_payoff(bid: u8, tricks_won: u8) -> i64 {
    let magnitude = (i64::from(bid) + 1) * 10 + i64::from(bid);
    if tricks_won == bid {
        magnitude
    } else {
        -magnitude
    }
}

/// Payoffs for every seat at the end of a round.
///
/// A seat with no bid recorded is scored as a bid of zero.
#[must_use]
pub fn round_payoffs(players: &PlayerMap<Player>) -> PlayerMap<i64> {
    players.map(|p| round_payoff(p.bid().unwrap_or(0), p.tricks_won()))
}
