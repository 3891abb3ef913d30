//! Game Aggregates
//!
//! The fully-numbered game object the assembler produces and the keyed
//! store persists. Field names follow the documented JSON contract
//! (camelCase on the wire).

use serde::{Serialize, Deserialize};

use crate::core::ids::{GameAnswerId, GameId, GamePlayerId, GameQuestionId};
use crate::game::settings::GameSettings;

/// Theme (genre) a question was drawn from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameTheme {
    /// Genre id in the content pools.
    pub id: i64,
    /// Display title.
    pub title: String,
}

/// Performing artist of a question's track.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameArtist {
    /// Artist display name.
    pub name: String,
}

/// Album context of a question's track, when known.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameAlbum {
    /// Album display title.
    pub title: String,
}

/// The track a question asks about.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameMusic {
    /// Entry id in the content pools.
    pub id: i64,
    /// External catalog id, when the entry comes from the live store.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deezer_id: Option<i64>,
    /// Track title.
    pub name: String,
    /// Playable media URL.
    pub mp3_url: String,
    /// Performing artist.
    pub artist: GameArtist,
    /// Album context, when available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album: Option<GameAlbum>,
}

/// One multiple-choice option.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameAnswer {
    /// Hierarchical answer id.
    pub id: GameAnswerId,
    /// Option text (artist name, or track title when the artist is unknown).
    pub text: String,
    /// Hint text (track title, optionally with album).
    pub hint: String,
    /// Exactly one option per question carries `true`.
    pub correct: bool,
}

/// One question of a game: a theme, a track, and its shuffled answer set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameQuestion {
    /// Hierarchical question id.
    pub id: GameQuestionId,
    /// Theme the track and its distractors were drawn from.
    pub theme: GameTheme,
    /// The track being asked about.
    pub music: GameMusic,
    /// Shuffled answer options, exactly one correct.
    pub answers: Vec<GameAnswer>,
}

impl GameQuestion {
    /// The single correct option.
    pub fn correct_answer(&self) -> Option<&GameAnswer> {
        self.answers.iter().find(|a| a.correct)
    }
}

/// A seat at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GamePlayer {
    /// Small-integer player id (also the low digit field of player-answer ids).
    pub id: GamePlayerId,
    /// Display name.
    pub name: String,
    /// Whether the seat is taken.
    pub active: bool,
    /// Accumulated score.
    pub score: i64,
}

/// A generated game, ready for persistence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// Hierarchical game id. Provisional until the store assigns the final
    /// sequential number on create.
    pub id: GameId,
    /// Optimistic-concurrency version, starts at 1 on create.
    pub version: u32,
    /// The validated request that produced this game.
    pub settings: GameSettings,
    /// Seats, numbered 1..=playerCount.
    pub players: Vec<GamePlayer>,
    /// Questions in selection order.
    pub questions: Vec<GameQuestion>,
}

impl Game {
    /// Rebase the whole aggregate onto a new game id.
    ///
    /// Pure codec arithmetic: every child ordinal is recovered from its
    /// current id and re-encoded under the new game. Used by the store when
    /// it assigns the final sequential number on create.
    pub fn renumbered(mut self, game_id: GameId) -> Self {
        for question in &mut self.questions {
            let new_question = GameQuestionId::new(game_id, question.id.ordinal());
            for answer in &mut question.answers {
                answer.id = GameAnswerId::new(new_question, answer.id.ordinal());
            }
            question.id = new_question;
        }
        self.id = game_id;
        self
    }
}

// =============================================================================
// TESTS
// =============================================================================
