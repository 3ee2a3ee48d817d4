//! Formatting utilities for terminal output

use crate::core::PUZZLE_LETTER_COUNT;

/// Render the hive as three lines of uppercase letters, center bracketed
///
/// Layout mirrors the on-screen hive: two outer letters up top, two
/// flanking the center, two below.
#[must_use]
pub fn hive_lines(letters: [char; PUZZLE_LETTER_COUNT]) -> [String; 3] {
    let up: Vec<char> = letters.iter().map(|c| c.to_ascii_uppercase()).collect();

    [
        format!("   {}   {}", up[1], up[2]),
        format!(" {}  [{}]  {}", up[3], up[0], up[4]),
        format!("   {}   {}", up[5], up[6]),
    ]
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a score as a bar scaled against the set's best score
#[must_use]
pub fn score_bar(score: u32, best: u32, width: usize) -> String {
    create_progress_bar(f64::from(score), f64::from(best.max(1)), width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hive_centers_the_first_letter() {
        let lines = hive_lines(['b', 'a', 'e', 'n', 'r', 's', 't']);
        assert_eq!(lines[0], "   A   E");
        assert_eq!(lines[1], " N  [B]  R");
        assert_eq!(lines[2], "   S   T");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn score_bar_scales_to_best() {
        assert_eq!(score_bar(5, 10, 10), "█████░░░░░");
        assert_eq!(score_bar(10, 10, 10), "██████████");
        // Zero best never divides by zero
        assert_eq!(score_bar(0, 0, 10), "░░░░░░░░░░");
    }
}
