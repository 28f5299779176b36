//! Judgement (also known as Oh Hell) for four players.
//!
//! - Each round deals a fixed hand size; trump cycles `S, D, C, H` by round
//! - Everyone bids how many tricks they will take, dealer last; the dealer
//!   may not make the bids add up to the hand size
//! - Players must follow the lead suit when able; highest trump, else
//!   highest lead-suit card, takes the trick
//! - Exact bids score `(bid + 1) * 10 + bid`, misses lose the same

pub mod dealer;
pub mod game;
pub mod player;
pub mod scoring;
pub mod table;
pub mod trick;
pub mod view;

pub use dealer::{Dealer, TRUMP_ORDER};
pub use game::JudgementGame;
pub use player::Player;
pub use scoring::{round_payoff, round_payoffs};
pub use table::{Phase, TableState};
pub use trick::{card_beats, trick_winner, Play, Trick, TrickRecord};
pub use view::{CardLocation, PerfectInformation, PlayerView};
