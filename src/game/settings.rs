//! Game Settings and Validation
//!
//! Immutable per-request parameters for one generation call, plus the
//! bounds checks that gate the identifier codec's digit capacity.

use std::collections::BTreeSet;
use serde::{Serialize, Deserialize};

use crate::core::ids::{MAX_ANSWER_ORDINAL, MAX_PLAYER_ORDINAL, MAX_QUESTION_ORDINAL};
use crate::error::Error;

/// Minimum players in a game.
pub const MIN_PLAYERS: u32 = 2;
/// Maximum players in a game (player-ordinal digit capacity).
pub const MAX_PLAYERS: u32 = MAX_PLAYER_ORDINAL as u32;
/// Minimum questions in a game.
pub const MIN_QUESTIONS: u32 = 1;
/// Maximum questions in a game (question-ordinal digit capacity).
pub const MAX_QUESTIONS: u32 = MAX_QUESTION_ORDINAL as u32;
/// Minimum answer options per question.
pub const MIN_ANSWERS: u32 = 2;
/// Maximum answer options per question (answer-ordinal digit capacity).
pub const MAX_ANSWERS: u32 = MAX_ANSWER_ORDINAL as u32;

// =============================================================================
// SOURCE
// =============================================================================

/// Content origin a question may be drawn from.
///
/// A closed set: three fixed datasets embedded at build time, plus the
/// live store-backed catalog. The derived `Ord` fixes pool-concatenation
/// order to declaration order (legacy, decade, genre, store), which the
/// selector relies on for reproducibility.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// Fixed dataset of classic tracks.
    Legacy,
    /// Fixed dataset grouped by decade.
    Decade,
    /// Fixed dataset grouped by musical genre.
    Genre,
    /// Live catalog backed by the external theme/question store.
    Store,
}

impl Source {
    /// All sources, in the fixed concatenation order.
    pub const ALL: [Source; 4] = [Source::Legacy, Source::Decade, Source::Genre, Source::Store];

    /// Parse a textual tag. Unknown values yield `None` - an unrecognized
    /// string must never pass through as an empty tag.
    pub fn parse(tag: &str) -> Option<Source> {
        match tag {
            "legacy" => Some(Source::Legacy),
            "decade" => Some(Source::Decade),
            "genre" => Some(Source::Genre),
            "store" => Some(Source::Store),
            _ => None,
        }
    }

    /// Parse a list of textual tags, silently dropping unrecognized ones.
    pub fn parse_all<S: AsRef<str>>(tags: &[S]) -> BTreeSet<Source> {
        tags.iter().filter_map(|t| Source::parse(t.as_ref())).collect()
    }

    /// Canonical textual tag.
    pub fn as_str(self) -> &'static str {
        match self {
            Source::Legacy => "legacy",
            Source::Decade => "decade",
            Source::Genre => "genre",
            Source::Store => "store",
        }
    }
}

// =============================================================================
// GAME SETTINGS
// =============================================================================

/// Parameters of one generation request.
///
/// Constructed per request and never mutated after validation. The seed
/// fully determines the pseudo-random choices of the call, so two requests
/// with identical settings over unchanged pools produce identical games.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSettings {
    /// Seed for the per-call generator. Callers that want a fresh game
    /// default this to [`GameSettings::default_seed`].
    pub seed: i64,
    /// Questions to select (short pools yield fewer, never an error).
    pub question_count: u32,
    /// Answer options per question, including the correct one.
    pub answer_count: u32,
    /// Players seated in the game.
    pub player_count: u32,
    /// Content pools to draw from.
    pub sources: BTreeSet<Source>,
}

impl GameSettings {
    /// Build settings from raw request fields, dropping unknown source tags.
    pub fn from_request<S: AsRef<str>>(
        seed: Option<i64>,
        question_count: u32,
        answer_count: u32,
        player_count: u32,
        sources: &[S],
    ) -> Self {
        Self {
            seed: seed.unwrap_or_else(Self::default_seed),
            question_count,
            answer_count,
            player_count,
            sources: Source::parse_all(sources),
        }
    }

    /// Default seed when the caller supplies none: current epoch millis.
    pub fn default_seed() -> i64 {
        chrono::Utc::now().timestamp_millis()
    }

    /// Bounds-check this request.
    ///
    /// Checks run in a fixed order (players, questions, answers, sources)
    /// and the first failure is returned. Pool sizes are deliberately not
    /// checked here: under-supply is discovered by the selector and is not
    /// an error.
    pub fn validate(&self) -> Result<(), Error> {
        if self.player_count < MIN_PLAYERS || self.player_count > MAX_PLAYERS {
            return Err(Error::InvalidPlayerCount(self.player_count));
        }
        if self.question_count < MIN_QUESTIONS || self.question_count > MAX_QUESTIONS {
            return Err(Error::InvalidQuestionCount(self.question_count));
        }
        if self.answer_count < MIN_ANSWERS || self.answer_count > MAX_ANSWERS {
            return Err(Error::InvalidAnswerCount(self.answer_count));
        }
        if self.sources.is_empty() {
            return Err(Error::MissingSource);
        }
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
