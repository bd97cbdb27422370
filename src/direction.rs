//! Slug to compass-direction mapping
//!
//! The slug is hashed with SHA-256 and every hex digit of the digest becomes
//! one cardinal step: `0-3 → N`, `4-7 → E`, `8-b → S`, `c-f → W`.

use sha2::{Digest, Sha256};
use std::fmt;

/// Number of directions produced per slug (hex digits of a SHA-256 digest).
pub const SEQUENCE_LEN: usize = 64;

/// A single cardinal step of the walker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    N,
    E,
    S,
    W,
}

impl Direction {
    /// Map one lowercase hex digit onto its direction group.
    ///
    /// Returns `None` for anything that is not `[0-9a-f]`.
    pub fn from_hex_digit(digit: char) -> Option<Self> {
        match digit {
            '0'..='3' => Some(Direction::N),
            '4'..='7' => Some(Direction::E),
            '8' | '9' | 'a' | 'b' => Some(Direction::S),
            'c'..='f' => Some(Direction::W),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Direction::N => 'N',
            Direction::E => 'E',
            Direction::S => 'S',
            Direction::W => 'W',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// The ordered directions derived from a slug.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DirectionSequence {
    steps: Vec<Direction>,
}

impl DirectionSequence {
    /// Hash `slug` and map each digest digit to a direction.
    pub fn from_slug(slug: &str) -> Self {
        let digest = hex::encode(Sha256::digest(slug.as_bytes()));
        let steps = digest
            .chars()
            .filter_map(Direction::from_hex_digit)
            .collect::<Vec<_>>();
        debug_assert_eq!(steps.len(), SEQUENCE_LEN);
        Self { steps }
    }

    /// Build a sequence from explicit steps (mostly useful for tests and
    /// hand-crafted walks).
    pub fn from_steps(steps: Vec<Direction>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[Direction] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl fmt::Display for DirectionSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            write!(f, "{}", step)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_digits_partition_into_four_groups() {
        let mapped: String = "0123456789abcdef"
            .chars()
            .map(|c| Direction::from_hex_digit(c).unwrap().as_char())
            .collect();
        assert_eq!(mapped, "NNNNEEEESSSSWWWW");
        assert_eq!(Direction::from_hex_digit('g'), None);
        assert_eq!(Direction::from_hex_digit('A'), None);
    }

    #[test]
    fn empty_slug_maps_known_digest() {
        // sha256("") = e3b0c442...
        let seq = DirectionSequence::from_slug("");
        assert_eq!(seq.len(), SEQUENCE_LEN);
        assert_eq!(
            seq.to_string(),
            "WNSNWEENSSWWNWNESSWSWEWSSSEWSSNENESWENWEEESSSNEWSESESSNSESENSSEE"
        );
    }

    #[test]
    fn near_identical_slugs_diverge() {
        let a = DirectionSequence::from_slug("hello");
        let b = DirectionSequence::from_slug("hellp");
        assert_ne!(a, b);
        assert_eq!(
            a.to_string(),
            "NWWNEWSSEWSNSNNWNEWSNSNSWESSWNSWNSNENWEWNWSEENEWENNENNENSNSSSSNE"
        );
    }
}
