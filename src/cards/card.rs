//! Playing cards: suits, ranks and the canonical 0-51 card index.
//!
//! The index is suit-major, rank-minor with suits ordered `S, D, H, C` and
//! ranks ordered `2..A`, so `index = suit * 13 + rank`. The index is the
//! card's identity at the action-id boundary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Card suit, declared in canonical index order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Spades,
    Diamonds,
    Hearts,
    Clubs,
}

impl Suit {
    /// All suits in canonical order.
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Diamonds, Suit::Hearts, Suit::Clubs];

    /// Position in canonical order (0-3).
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub fn from_index(index: u8) -> Option<Suit> {
        Self::ALL.get(index as usize).copied()
    }

    /// Single-letter symbol (`S`, `D`, `H`, `C`).
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Spades => 'S',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Clubs => 'C',
        }
    }

    fn from_symbol(c: char) -> Option<Suit> {
        match c {
            'S' => Some(Suit::Spades),
            'D' => Some(Suit::Diamonds),
            'H' => Some(Suit::Hearts),
            'C' => Some(Suit::Clubs),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Card rank, lowest first. Derived `Ord` is trick-taking strength.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// All ranks, lowest first.
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Position in rank order (0 = Two, 12 = Ace).
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub fn from_index(index: u8) -> Option<Rank> {
        Self::ALL.get(index as usize).copied()
    }

    fn label(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }

    fn from_label(s: &str) -> Option<Rank> {
        match s {
            "T" => Some(Rank::Ten),
            _ => Self::ALL.into_iter().find(|r| r.label() == s),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An immutable playing card.
///
/// Field order makes the derived `Ord` match the canonical index, which is
/// only meant for stable sorting. Trick comparisons live in
/// [`trick`](crate::games::judgement::trick).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    /// Number of distinct cards.
    pub const COUNT: usize = 52;

    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Canonical index in `0..52`.
    #[must_use]
    pub const fn index(self) -> u8 {
        self.suit.index() * 13 + self.rank.index()
    }

    /// Inverse of [`Card::index`]. Returns `None` for indices `>= 52`.
    #[must_use]
    pub fn from_index(index: u8) -> Option<Card> {
        let suit = Suit::from_index(index / 13)?;
        let rank = Rank::from_index(index % 13)?;
        Some(Card { suit, rank })
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = EngineError;

    /// Parses rank-then-suit text such as `"AS"`, `"10H"` or `"TH"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err = || EngineError::ParseCard(s.to_string());

        let suit_ch = s.chars().last().ok_or_else(parse_err)?;
        let suit = Suit::from_symbol(suit_ch).ok_or_else(parse_err)?;
        let rank = Rank::from_label(&s[..s.len() - suit_ch.len_utf8()]).ok_or_else(parse_err)?;

        Ok(Card { suit, rank })
    }
}
