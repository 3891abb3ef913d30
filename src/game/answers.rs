//! Answer Set Builder
//!
//! For one selected entry, builds the shuffled multiple-choice set:
//! exactly one correct option, and distractors drawn from the same genre so
//! wrong answers stay plausible.

use crate::core::rng::GameRng;
use crate::game::catalog::{ContentEntry, Genre};

/// An answer option before the assembler numbers it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerDraft {
    /// Option text (artist name, or track title when the artist is unknown).
    pub text: String,
    /// Hint text (track title, optionally with album).
    pub hint: String,
    /// Whether this option names the selected entry.
    pub correct: bool,
}

impl AnswerDraft {
    fn from_entry(entry: &ContentEntry, correct: bool) -> Self {
        Self {
            text: entry.answer_text().to_string(),
            hint: entry.answer_hint(),
            correct,
        }
    }
}

/// Build the answer set for `selected`, drawing distractors from `genre`.
///
/// Takes `answer_count - 1` distractors after shuffling the genre's other
/// entries, then shuffles the combined list so the correct option's
/// position is not predictable from selection order.
///
/// A genre with too few other entries yields a shorter set - a content-data
/// limitation, not a validation failure.
///
/// Invariant: exactly one returned draft has `correct = true`.
pub fn build_answer_set(
    rng: &mut GameRng,
    selected: &ContentEntry,
    genre: &Genre,
    answer_count: u32,
) -> Vec<AnswerDraft> {
    let mut distractors: Vec<&ContentEntry> = genre
        .entries
        .iter()
        .filter(|e| e.entry_id != selected.entry_id)
        .collect();
    rng.shuffle(&mut distractors);
    distractors.truncate(answer_count.saturating_sub(1) as usize);

    let mut answers: Vec<AnswerDraft> = Vec::with_capacity(distractors.len() + 1);
    answers.push(AnswerDraft::from_entry(selected, true));
    for distractor in distractors {
        answers.push(AnswerDraft::from_entry(distractor, false));
    }

    rng.shuffle(&mut answers);
    answers
}

// =============================================================================
// TESTS
// =============================================================================
