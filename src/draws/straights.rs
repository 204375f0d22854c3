use crate::cards::Rank;

/// Whether five ranks form a straight, and the rank that tops it.
///
/// The single source of truth for straight detection: the wheel special case
/// (A-2-3-4-5, topped by the Five) lives here and nowhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub is_straight: bool,
    pub top_rank: Option<Rank>,
}

impl StraightInfo {
    /// Detect a straight in five ranks, in any order. Any duplicated rank
    /// disqualifies the set.
    pub fn detect(ranks: &[Rank; 5]) -> Self {
        let mut sorted = *ranks;
        sorted.sort_unstable();

        if sorted.windows(2).any(|w| w[0] == w[1]) {
            return StraightInfo { is_straight: false, top_rank: None };
        }

        // Wheel: ace plays low, the Five is the top card
        if sorted == [Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Ace] {
            return StraightInfo { is_straight: true, top_rank: Some(Rank::Five) };
        }

        let consecutive =
            (0..4).all(|i| sorted[i + 1].value() == sorted[i].value() + 1);
        if consecutive {
            StraightInfo { is_straight: true, top_rank: Some(sorted[4]) }
        } else {
            StraightInfo { is_straight: false, top_rank: None }
        }
    }
}

/// Convenience predicate over [`StraightInfo::detect`].
pub fn is_straight(ranks: &[Rank; 5]) -> bool {
    StraightInfo::detect(ranks).is_straight
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regular_straight() {
        let ranks = [Rank::King, Rank::Queen, Rank::Jack, Rank::Ten, Rank::Nine];
        let info = StraightInfo::detect(&ranks);
        assert!(info.is_straight);
        assert_eq!(info.top_rank, Some(Rank::King));
    }

    #[test]
    fn ace_high_straight() {
        let ranks = [Rank::Ace, Rank::King, Rank::Queen, Rank::Jack, Rank::Ten];
        let info = StraightInfo::detect(&ranks);
        assert!(info.is_straight);
        assert_eq!(info.top_rank, Some(Rank::Ace));
    }

    #[test]
    fn wheel_tops_at_five() {
        let ranks = [Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five];
        let info = StraightInfo::detect(&ranks);
        assert!(info.is_straight);
        assert_eq!(info.top_rank, Some(Rank::Five));
    }

    #[test]
    fn duplicate_rank_disqualifies() {
        let ranks = [Rank::Five, Rank::Five, Rank::Six, Rank::Seven, Rank::Eight];
        let info = StraightInfo::detect(&ranks);
        assert!(!info.is_straight);
        assert_eq!(info.top_rank, None);

        // A near-wheel with a paired ace is not a straight either
        let ranks = [Rank::Ace, Rank::Ace, Rank::Three, Rank::Four, Rank::Five];
        assert!(!is_straight(&ranks));
    }

    #[test]
    fn gapped_ranks_are_not_a_straight() {
        let ranks = [Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Seven];
        assert!(!is_straight(&ranks));
        let ranks = [Rank::Ace, Rank::King, Rank::Queen, Rank::Jack, Rank::Nine];
        assert!(!is_straight(&ranks));
    }

    #[test]
    fn unsorted_input_is_detected() {
        let ranks = [Rank::Nine, Rank::King, Rank::Ten, Rank::Jack, Rank::Queen];
        let info = StraightInfo::detect(&ranks);
        assert!(info.is_straight);
        assert_eq!(info.top_rank, Some(Rank::King));
    }

    #[test]
    fn exactly_ten_runs_plus_wheel_exist() {
        use crate::draws::combinations::choose;

        let hits = choose::<5, Rank>(&Rank::ALL).filter(is_straight).count();
        // 9 consecutive runs topped Six through Ace, plus the wheel
        assert_eq!(hits, 10);
    }
}
