use crate::cards::{parse_ranks, Rank, RankParseError};
use std::fmt;
use std::str::FromStr;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("expected exactly three flop ranks, got {0}")]
    FlopCount(usize),
    #[error("expected exactly five hand ranks, got {0}")]
    HandCount(usize),
    #[error("duplicate ranks in hand")]
    DuplicateHandRanks,
    #[error(transparent)]
    Rank(#[from] RankParseError),
}

/// The three shared board ranks, stored ascending.
///
/// Duplicates are allowed — paired and trips flops change classification but
/// never search semantics.
///
/// ```
/// use wrap_rs::board::Flop;
/// use wrap_rs::cards::Rank;
///
/// let flop: Flop = "J45".parse().unwrap();
/// assert_eq!(flop.to_string(), "45J");
/// assert_eq!(flop.high(), Rank::Jack);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Flop([Rank; 3]);

impl Flop {
    pub fn new(a: Rank, b: Rank, c: Rank) -> Self {
        let mut ranks = [a, b, c];
        ranks.sort_unstable();
        Self(ranks)
    }

    pub fn from_ranks(ranks: [Rank; 3]) -> Self {
        Self::new(ranks[0], ranks[1], ranks[2])
    }

    pub const fn ranks(&self) -> &[Rank; 3] {
        &self.0
    }

    pub fn contains(&self, rank: Rank) -> bool {
        self.0.contains(&rank)
    }

    pub const fn low(&self) -> Rank {
        self.0[0]
    }

    pub const fn high(&self) -> Rank {
        self.0[2]
    }
}

impl fmt::Display for Flop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in self.0 {
            write!(f, "{r}")?;
        }
        Ok(())
    }
}

impl FromStr for Flop {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ranks = parse_ranks(s)?;
        if ranks.len() != 3 {
            return Err(HandError::FlopCount(ranks.len()));
        }
        Ok(Flop::new(ranks[0], ranks[1], ranks[2]))
    }
}

/// A player's five private hole ranks, stored ascending.
///
/// Ranks must be distinct: repeated ranks can never increase straight
/// coverage, so the enumeration restricts itself to distinct-rank hands.
///
/// ```
/// use wrap_rs::board::Hand;
///
/// let hand: Hand = "K7632".parse().unwrap();
/// assert_eq!(hand.to_string(), "2367K");
/// assert!("22345".parse::<Hand>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hand([Rank; 5]);

impl Hand {
    pub fn try_new(ranks: [Rank; 5]) -> Result<Self, HandError> {
        let mut sorted = ranks;
        sorted.sort_unstable();
        if sorted.windows(2).any(|w| w[0] == w[1]) {
            return Err(HandError::DuplicateHandRanks);
        }
        Ok(Self(sorted))
    }

    pub const fn ranks(&self) -> &[Rank; 5] {
        &self.0
    }

    pub fn contains(&self, rank: Rank) -> bool {
        self.0.contains(&rank)
    }

    /// A hand is "clean" on a flop when it shares no rank with it; clean
    /// hands are preferred as wrap-class representatives.
    pub fn is_clean_on(&self, flop: &Flop) -> bool {
        !self.0.iter().any(|r| flop.contains(*r))
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in self.0 {
            write!(f, "{r}")?;
        }
        Ok(())
    }
}

impl FromStr for Hand {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ranks = parse_ranks(s)?;
        if ranks.len() != 5 {
            return Err(HandError::HandCount(ranks.len()));
        }
        Hand::try_new([ranks[0], ranks[1], ranks[2], ranks[3], ranks[4]])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flop_normalizes_to_ascending() {
        let flop = Flop::new(Rank::Jack, Rank::Five, Rank::Four);
        assert_eq!(flop.ranks(), &[Rank::Four, Rank::Five, Rank::Jack]);
        assert_eq!(flop.to_string(), "45J");
    }

    #[test]
    fn flop_permits_pairs_and_trips() {
        let paired: Flop = "AA2".parse().unwrap();
        assert_eq!(paired.to_string(), "2AA");
        let trips: Flop = "222".parse().unwrap();
        assert_eq!(trips.ranks(), &[Rank::Two, Rank::Two, Rank::Two]);
    }

    #[test]
    fn flop_parse_checks_count_and_glyphs() {
        assert!(matches!("45".parse::<Flop>(), Err(HandError::FlopCount(2))));
        assert!(matches!("45x".parse::<Flop>(), Err(HandError::Rank(_))));
    }

    #[test]
    fn hand_rejects_duplicates() {
        let err = Hand::try_new([Rank::Two, Rank::Two, Rank::Five, Rank::Six, Rank::Nine]);
        assert!(matches!(err, Err(HandError::DuplicateHandRanks)));
    }

    #[test]
    fn hand_parses_and_sorts() {
        let hand: Hand = "A2345".parse().unwrap();
        assert_eq!(
            hand.ranks(),
            &[Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Ace]
        );
        assert!(matches!("A234".parse::<Hand>(), Err(HandError::HandCount(4))));
    }

    #[test]
    fn cleanliness_checks_flop_overlap() {
        let flop: Flop = "45J".parse().unwrap();
        let clean: Hand = "2367K".parse().unwrap();
        let unclean: Hand = "23467".parse().unwrap();
        assert!(clean.is_clean_on(&flop));
        assert!(!unclean.is_clean_on(&flop));
    }
}
