//! Troop identities and faces.
//!
//! `Troop` identifies a unit type ("Drake", "Clubman", ...). Its movement
//! patterns and actions belong to the rule layer; here it is an opaque token
//! compared by name.

use serde::{Deserialize, Serialize};

/// Opaque unit-type identity.
///
/// ```
/// use the_drake::troops::Troop;
///
/// let drake = Troop::new("Drake");
/// assert_eq!(drake.name(), "Drake");
/// assert_eq!(drake, Troop::new("Drake"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Troop {
    name: String,
}

impl Troop {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for Troop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// Which side of a troop tile is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TroopFace {
    /// Front face. Troops are placed obverse up.
    #[default]
    Obverse,
    Reverse,
}

impl TroopFace {
    /// The other face.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            TroopFace::Obverse => TroopFace::Reverse,
            TroopFace::Reverse => TroopFace::Obverse,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_flip() {
        assert_eq!(TroopFace::Obverse.flipped(), TroopFace::Reverse);
        assert_eq!(TroopFace::Reverse.flipped(), TroopFace::Obverse);
    }

    #[test]
    fn test_troop_display() {
        assert_eq!(format!("{}", Troop::new("Spearman")), "Spearman");
    }

    #[test]
    fn test_troop_serialization() {
        let troop = Troop::new("Archer");
        let json = serde_json::to_string(&troop).unwrap();
        let deserialized: Troop = serde_json::from_str(&json).unwrap();
        assert_eq!(troop, deserialized);
    }
}
