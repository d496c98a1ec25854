//! Scoring module - points per lock
//!
//! A lock that clears N lines scores `LINE_SCORES[N]`: 100, 300, 500 or 800.
//! There are no levels, combos or drop bonuses.

use crate::types::LINE_SCORES;

/// Points for clearing `lines` rows with a single lock.
///
/// More than four lines cannot happen on this board; it scores nothing.
pub fn line_clear_score(lines: u32) -> u32 {
    LINE_SCORES.get(lines as usize).copied().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_clear_score() {
        assert_eq!(line_clear_score(0), 0);
        assert_eq!(line_clear_score(1), 100);
        assert_eq!(line_clear_score(2), 300);
        assert_eq!(line_clear_score(3), 500);
        assert_eq!(line_clear_score(4), 800);
    }

    #[test]
    fn test_more_than_four_lines_scores_nothing() {
        assert_eq!(line_clear_score(5), 0);
        assert_eq!(line_clear_score(u32::MAX), 0);
    }
}
