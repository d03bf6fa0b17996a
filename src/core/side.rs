//! Side identification and per-side data storage.
//!
//! ## Side
//!
//! A battle always has exactly two sides: the local player's circle
//! (`Side::Mine`) and the adversary (`Side::Opponent`).
//!
//! ## SideMap
//!
//! Per-side data storage with O(1) access, indexable by `Side`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two sides of a battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The side that issues commands.
    Mine,
    /// The side driven by the opponent policy.
    Opponent,
}

impl Side {
    /// Both sides, in command order.
    pub const ALL: [Side; 2] = [Side::Mine, Side::Opponent];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::Mine => Side::Opponent,
            Side::Opponent => Side::Mine,
        }
    }

    /// Storage index (0 for mine, 1 for the opponent).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::Mine => 0,
            Side::Opponent => 1,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Mine => write!(f, "mine"),
            Side::Opponent => write!(f, "opponent"),
        }
    }
}

/// Per-side data storage.
///
/// ## Example
///
/// ```
/// use circle_battle::core::{Side, SideMap};
///
/// let mut lives: SideMap<u32> = SideMap::with_value(3);
/// lives[Side::Opponent] -= 1;
///
/// assert_eq!(lives[Side::Mine], 3);
/// assert_eq!(lives[Side::Opponent], 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(mut factory: impl FnMut(Side) -> T) -> Self {
        Self {
            data: [factory(Side::Mine), factory(Side::Opponent)],
        }
    }

    /// Create a map from explicit values.
    pub fn from_pair(mine: T, opponent: T) -> Self {
        Self {
            data: [mine, opponent],
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Iterate over (Side, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_opponent() {
        assert_eq!(Side::Mine.opponent(), Side::Opponent);
        assert_eq!(Side::Opponent.opponent(), Side::Mine);
        assert_eq!(format!("{}", Side::Opponent), "opponent");
    }

    #[test]
    fn test_side_map_new() {
        let map: SideMap<usize> = SideMap::new(|s| s.index() * 10);
        assert_eq!(map[Side::Mine], 0);
        assert_eq!(map[Side::Opponent], 10);
    }

    #[test]
    fn test_side_map_mutation() {
        let mut map = SideMap::from_pair("a".to_string(), "b".to_string());
        map[Side::Mine].push('!');

        assert_eq!(map[Side::Mine], "a!");
        assert_eq!(map[Side::Opponent], "b");
    }

    #[test]
    fn test_side_map_iter() {
        let map = SideMap::from_pair(1, 2);
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(Side::Mine, &1), (Side::Opponent, &2)]);
    }

    #[test]
    fn test_side_map_serialization() {
        let map = SideMap::from_pair(3u32, 1u32);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: SideMap<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
