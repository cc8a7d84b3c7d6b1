//! Formatting utilities for terminal output

use crate::core::{Feedback, Verdict, Word};
use colored::{ColoredString, Colorize};

/// Format feedback as an emoji string
#[must_use]
pub fn feedback_to_emoji(feedback: Feedback) -> String {
    feedback
        .verdicts()
        .iter()
        .map(|verdict| match verdict {
            Verdict::Absent => '⬜',
            Verdict::Present => '🟨',
            Verdict::Exact => '🟩',
        })
        .collect()
}

/// Colour each letter of `guess` by its verdict
#[must_use]
pub fn feedback_tiles(guess: &Word, feedback: Feedback) -> String {
    guess
        .text()
        .chars()
        .zip(feedback.verdicts())
        .map(|(letter, verdict)| tile(letter, verdict).to_string())
        .collect()
}

fn tile(letter: char, verdict: Verdict) -> ColoredString {
    let text = format!(" {letter} ").bold();
    match verdict {
        Verdict::Absent => text.white().on_bright_black(),
        Verdict::Present => text.black().on_yellow(),
        Verdict::Exact => text.black().on_green(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emoji_all_absent() {
        assert_eq!(feedback_to_emoji(Feedback::new(0)), "⬜⬜⬜⬜⬜");
    }

    #[test]
    fn emoji_all_exact() {
        assert_eq!(feedback_to_emoji(Feedback::SOLVED), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn emoji_follows_positions() {
        let feedback: Feedback = "yggwg".parse().unwrap();
        assert_eq!(feedback_to_emoji(feedback), "🟨🟩🟩⬜🟩");
    }

    #[test]
    fn tiles_keep_letters_in_order() {
        colored::control::set_override(false);
        let guess = Word::new("CRANE").unwrap();
        let tiles = feedback_tiles(&guess, Feedback::SOLVED);
        assert_eq!(tiles, " C  R  A  N  E ");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }
}
