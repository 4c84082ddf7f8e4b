//! Scoring module - line score, level and gravity rules
//!
//! Rules are intentionally flat:
//! - Every cleared line is worth [`LINE_SCORE`] points, regardless of how many
//!   lines one lock clears.
//! - Level is `lines / LINES_PER_LEVEL + 1` and never decreases.
//! - Gravity starts at [`BASE_DROP_MS`] and speeds up by [`DROP_STEP_MS`] per
//!   level down to [`DROP_FLOOR_MS`].

use crate::types::{BASE_DROP_MS, DROP_FLOOR_MS, DROP_STEP_MS, LINES_PER_LEVEL, LINE_SCORE};

/// Points for clearing `lines` rows in a single lock.
pub fn line_clear_score(lines: u32) -> u32 {
    lines.saturating_mul(LINE_SCORE)
}

/// Level reached after `total_lines` cleared lines (1-based).
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + 1
}

/// Gravity interval in milliseconds for a level.
///
/// `max(50, 500 - (level - 1) * 30)`, saturating for very large levels.
pub fn drop_interval_ms(level: u32) -> u32 {
    let speedup = level.saturating_sub(1).saturating_mul(DROP_STEP_MS);
    BASE_DROP_MS.saturating_sub(speedup).max(DROP_FLOOR_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_clear_score_is_flat() {
        assert_eq!(line_clear_score(0), 0);
        assert_eq!(line_clear_score(1), 100);
        assert_eq!(line_clear_score(2), 200);
        assert_eq!(line_clear_score(4), 400);
    }

    #[test]
    fn test_level_for_lines() {
        assert_eq!(level_for_lines(0), 1);
        assert_eq!(level_for_lines(4), 1);
        assert_eq!(level_for_lines(5), 2);
        assert_eq!(level_for_lines(9), 2);
        assert_eq!(level_for_lines(10), 3);
        assert_eq!(level_for_lines(52), 11);
    }

    #[test]
    fn test_drop_interval_by_level() {
        assert_eq!(drop_interval_ms(1), 500);
        assert_eq!(drop_interval_ms(2), 470);
        assert_eq!(drop_interval_ms(3), 440);
        assert_eq!(drop_interval_ms(15), 80);
        assert_eq!(drop_interval_ms(16), 50);
        assert_eq!(drop_interval_ms(17), 50);
        assert_eq!(drop_interval_ms(u32::MAX), 50);
    }

    #[test]
    fn test_drop_interval_level_zero_does_not_underflow() {
        assert_eq!(drop_interval_ms(0), 500);
    }

    #[test]
    fn test_drop_interval_monotonic() {
        let mut prev = drop_interval_ms(1);
        for level in 2..40 {
            let cur = drop_interval_ms(level);
            assert!(cur <= prev);
            prev = cur;
        }
    }
}
