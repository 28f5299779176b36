//! Seat identification and per-seat data storage.
//!
//! ## PlayerId
//!
//! Type-safe seat identifier for the four seats at the table. Seats are
//! numbered clockwise, so "next player" is always `(id + 1) mod 4`.
//!
//! ## PlayerMap
//!
//! Fixed-size per-seat storage with O(1) access, indexable by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Number of seats at a Judgement table.
pub const NUM_PLAYERS: usize = 4;

/// Seat identifier in `0..4`.
///
/// The only public constructor is [`PlayerId::new`], which wraps, so every
/// id indexes a [`PlayerMap`] safely. Deserialization wraps the same way.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "u8")]
pub struct PlayerId(u8);

impl From<u8> for PlayerId {
    fn from(id: u8) -> Self {
        Self::new(id)
    }
}

impl PlayerId {
    /// Create a new player ID. Values wrap around the table.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id % NUM_PLAYERS as u8)
    }

    /// Get the raw seat index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat `steps` places clockwise from this one.
    #[must_use]
    pub const fn offset(self, steps: usize) -> Self {
        Self(((self.0 as usize + steps) % NUM_PLAYERS) as u8)
    }

    /// The next seat clockwise.
    #[must_use]
    pub const fn next(self) -> Self {
        self.offset(1)
    }

    /// Iterate over all seats in order.
    ///
    /// ```
    /// use judgement_engine::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all().collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all() -> impl Iterator<Item = PlayerId> {
        (0..NUM_PLAYERS as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-seat data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use judgement_engine::core::{PlayerId, PlayerMap};
///
/// let mut scores: PlayerMap<i64> = PlayerMap::with_value(0);
/// scores[PlayerId::new(1)] += 21;
/// assert_eq!(scores[PlayerId::new(1)], 21);
/// assert_eq!(scores.to_vec(), vec![0, 21, 0, 0]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; NUM_PLAYERS],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: std::array::from_fn(|i| factory(PlayerId(i as u8))),
        }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Project every entry through `f`.
    pub fn map<U>(&self, f: impl Fn(&T) -> U) -> PlayerMap<U> {
        PlayerMap {
            data: std::array::from_fn(|i| f(&self.data[i])),
        }
    }

    /// Copy out the entries in seat order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.to_vec()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p0), "Player 0");
    }

    #[test]
    fn test_player_id_wraps() {
        assert_eq!(PlayerId::new(5), PlayerId::new(1));
        assert_eq!(PlayerId::new(3).next(), PlayerId::new(0));
        assert_eq!(PlayerId::new(2).offset(3), PlayerId::new(1));
    }

    #[test]
    fn test_player_id_all() {
        let players: Vec<_> = PlayerId::all().collect();
        assert_eq!(
            players,
            vec![PlayerId(0), PlayerId(1), PlayerId(2), PlayerId(3)]
        );
    }

    #[test]
    fn test_player_id_deserialize_wraps() {
        let id: PlayerId = serde_json::from_str("7").unwrap();
        assert_eq!(id, PlayerId::new(3));
        assert_eq!(serde_json::to_string(&id).unwrap(), "3");

        let map: PlayerMap<u8> = PlayerMap::new(|p| p.index() as u8);
        assert_eq!(map[id], 3);
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<i32> = PlayerMap::new(|p| p.index() as i32 * 10);

        assert_eq!(map[PlayerId::new(0)], 0);
        assert_eq!(map[PlayerId::new(1)], 10);
        assert_eq!(map[PlayerId::new(2)], 20);
        assert_eq!(map[PlayerId::new(3)], 30);
    }

    #[test]
    fn test_player_map_mutation() {
        let mut map: PlayerMap<i32> = PlayerMap::with_value(0);

        map[PlayerId::new(0)] = 10;
        map[PlayerId::new(1)] = 20;

        assert_eq!(map[PlayerId::new(0)], 10);
        assert_eq!(map[PlayerId::new(1)], 20);
    }

    #[test]
    fn test_player_map_iter_and_map() {
        let map: PlayerMap<i32> = PlayerMap::new(|p| p.index() as i32);

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs[2], (PlayerId::new(2), &2));

        let doubled = map.map(|v| v * 2);
        assert_eq!(doubled.to_vec(), vec![0, 2, 4, 6]);
    }

    #[test]
    fn test_player_map_serialization() {
        let map: PlayerMap<Option<u8>> =
            PlayerMap::new(|p| (p.index() > 1).then_some(p.index() as u8));
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<Option<u8>> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
