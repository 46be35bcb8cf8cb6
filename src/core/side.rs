//! Playing sides and per-side data storage.
//!
//! ## PlayingSide
//!
//! The two sides of a game: blue and orange.
//!
//! ## SideMap
//!
//! Fixed two-slot storage indexed by `PlayingSide`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two sides of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlayingSide {
    Blue,
    Orange,
}

impl PlayingSide {
    /// Both sides, blue first.
    pub const ALL: [PlayingSide; 2] = [PlayingSide::Blue, PlayingSide::Orange];

    /// The other side.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            PlayingSide::Blue => PlayingSide::Orange,
            PlayingSide::Orange => PlayingSide::Blue,
        }
    }
}

impl std::fmt::Display for PlayingSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayingSide::Blue => write!(f, "blue"),
            PlayingSide::Orange => write!(f, "orange"),
        }
    }
}

/// Per-side data storage.
///
/// ## Example
///
/// ```
/// use the_drake::core::{PlayingSide, SideMap};
///
/// let mut captured: SideMap<u32> = SideMap::with_value(0);
/// captured[PlayingSide::Orange] += 1;
///
/// assert_eq!(captured[PlayingSide::Blue], 0);
/// assert_eq!(captured[PlayingSide::Orange], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    blue: T,
    orange: T,
}

impl<T> SideMap<T> {
    /// Create a SideMap with values from a factory function.
    pub fn new(factory: impl Fn(PlayingSide) -> T) -> Self {
        Self {
            blue: factory(PlayingSide::Blue),
            orange: factory(PlayingSide::Orange),
        }
    }

    /// Create a SideMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    #[must_use]
    pub fn get(&self, side: PlayingSide) -> &T {
        match side {
            PlayingSide::Blue => &self.blue,
            PlayingSide::Orange => &self.orange,
        }
    }

    pub fn get_mut(&mut self, side: PlayingSide) -> &mut T {
        match side {
            PlayingSide::Blue => &mut self.blue,
            PlayingSide::Orange => &mut self.orange,
        }
    }

    /// Iterate over (PlayingSide, &T) pairs, blue first.
    pub fn iter(&self) -> impl Iterator<Item = (PlayingSide, &T)> {
        PlayingSide::ALL.into_iter().map(move |side| (side, self.get(side)))
    }
}

impl<T> Index<PlayingSide> for SideMap<T> {
    type Output = T;

    fn index(&self, side: PlayingSide) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<PlayingSide> for SideMap<T> {
    fn index_mut(&mut self, side: PlayingSide) -> &mut Self::Output {
        self.get_mut(side)
    }
}
