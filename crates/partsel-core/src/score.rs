//! # Score Module
//!
//! Integer match-score arithmetic.
//!
//! - Score is the share of satisfied criteria, as a whole percentage
//! - Every criterion counts once; weights never enter the arithmetic
//! - Halves round to the even neighbour (`1/8 = 12.5 -> 12`)

/// Match score for one evaluated component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchScore {
    /// Score from 0 to 100.
    pub score: u8,
    /// Number of satisfied criteria.
    pub matched: usize,
    /// Number of criteria evaluated.
    pub total: usize,
}

impl MatchScore {
    /// Derive the score from verdict counts. `matched` is clamped to `total`.
    #[must_use]
    pub fn from_counts(matched: usize, total: usize) -> Self {
        let matched = matched.min(total);
        Self {
            score: percent_rounded(matched, total),
            matched,
            total,
        }
    }
}

/// `matched / total` as a whole percentage, halves rounded to even.
///
/// Returns 0 when `total` is 0. Uses integer arithmetic only.
#[must_use]
pub fn percent_rounded(matched: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let matched = matched.min(total) as u128;
    let total = total as u128;

    let scaled = matched * 100;
    let quotient = scaled / total;
    let twice_remainder = (scaled % total) * 2;

    let rounded = match twice_remainder.cmp(&total) {
        std::cmp::Ordering::Less => quotient,
        std::cmp::Ordering::Greater => quotient + 1,
        std::cmp::Ordering::Equal => quotient + (quotient % 2),
    };
    rounded.min(100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_zero_total() {
        assert_eq!(percent_rounded(0, 0), 0);
        assert_eq!(MatchScore::from_counts(3, 0), MatchScore::default());
    }

    #[test]
    fn score_common_fractions() {
        assert_eq!(percent_rounded(7, 7), 100);
        assert_eq!(percent_rounded(5, 6), 83);
        assert_eq!(percent_rounded(2, 3), 67);
        assert_eq!(percent_rounded(1, 3), 33);
        assert_eq!(percent_rounded(4, 5), 80);
        assert_eq!(percent_rounded(6, 7), 86);
    }

    #[test]
    fn score_halves_round_to_even() {
        // 1/8 = 12.5, 3/8 = 37.5, 5/8 = 62.5, 1/200 = 0.5
        assert_eq!(percent_rounded(1, 8), 12);
        assert_eq!(percent_rounded(3, 8), 38);
        assert_eq!(percent_rounded(5, 8), 62);
        assert_eq!(percent_rounded(1, 200), 0);
        assert_eq!(percent_rounded(3, 200), 2);
    }

    #[test]
    fn score_clamps_matched() {
        let score = MatchScore::from_counts(9, 5);
        assert_eq!(score.matched, 5);
        assert_eq!(score.score, 100);
    }
}
