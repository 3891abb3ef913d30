//! Hierarchical Identifier Codec
//!
//! Game, question, answer and player-answer identifiers share one 64-bit
//! integer whose decimal digits are partitioned by fixed unit multipliers.
//! Any ancestor id is recovered by integer division and truncation against
//! the same units - no lookup table is ever needed to answer "which game
//! does this answer belong to".
//!
//! Layout (decimal digits, coarsest to finest):
//!
//! ```text
//! GGG QQQ AA PP
//!  |   |   |  `- player ordinal   (PLAYER_UNIT   = 1)
//!  |   |   `---- answer ordinal   (ANSWER_UNIT   = 100)
//!  |   `-------- question ordinal (QUESTION_UNIT = 10_000)
//!  `------------ game ordinal     (GAME_UNIT     = 10_000_000)
//! ```
//!
//! Exceeding an ordinal's capacity overlaps the neighboring digit field and
//! corrupts every decode. The capacity constants below are therefore hard
//! preconditions, enforced upstream by the settings validator.

use std::fmt;
use serde::{Serialize, Deserialize};

/// Multiplier for the game ordinal.
pub const GAME_UNIT: i64 = 10_000_000;
/// Multiplier for the question ordinal within a game.
pub const QUESTION_UNIT: i64 = 10_000;
/// Multiplier for the answer ordinal within a question.
pub const ANSWER_UNIT: i64 = 100;
/// Multiplier for the player ordinal within an answer.
pub const PLAYER_UNIT: i64 = 1;

/// Highest game ordinal covered by the round-trip contract.
pub const MAX_GAME_ORDINAL: i64 = 999;
/// Highest question ordinal that fits its digit field.
pub const MAX_QUESTION_ORDINAL: i64 = GAME_UNIT / QUESTION_UNIT - 1; // 999
/// Highest answer ordinal that fits its digit field.
pub const MAX_ANSWER_ORDINAL: i64 = QUESTION_UNIT / ANSWER_UNIT - 1; // 99
/// Highest player ordinal that fits its digit field.
pub const MAX_PLAYER_ORDINAL: i64 = ANSWER_UNIT / PLAYER_UNIT - 1; // 99

// =============================================================================
// GAME ID
// =============================================================================

/// Identifier of a game aggregate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(pub i64);

impl GameId {
    /// Encode the n-th game: `n * GAME_UNIT`.
    pub const fn from_ordinal(n: i64) -> Self {
        Self(n * GAME_UNIT)
    }

    /// Truncate any raw id down to its containing game id.
    pub const fn of(raw: i64) -> Self {
        Self(raw / GAME_UNIT * GAME_UNIT)
    }

    /// Sequential game number this id encodes.
    pub const fn ordinal(self) -> i64 {
        self.0 / GAME_UNIT
    }

    /// Raw 64-bit value.
    pub const fn raw(self) -> i64 {
        self.0
    }
}

// =============================================================================
// QUESTION ID
// =============================================================================

/// Identifier of a question inside a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameQuestionId(pub i64);

impl GameQuestionId {
    /// Encode the n-th question of a game: `gameId + n * QUESTION_UNIT`.
    pub const fn new(game: GameId, n: i64) -> Self {
        Self(game.raw() + n * QUESTION_UNIT)
    }

    /// Truncate any raw id down to its containing question id.
    pub const fn of(raw: i64) -> Self {
        Self(raw / QUESTION_UNIT * QUESTION_UNIT)
    }

    /// Owning game, recovered arithmetically.
    pub const fn game(self) -> GameId {
        GameId::of(self.0)
    }

    /// Position of this question within its game (1-based).
    pub const fn ordinal(self) -> i64 {
        self.0 % GAME_UNIT / QUESTION_UNIT
    }

    /// Raw 64-bit value.
    pub const fn raw(self) -> i64 {
        self.0
    }
}

// =============================================================================
// ANSWER ID
// =============================================================================

/// Identifier of an answer option inside a question.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameAnswerId(pub i64);

impl GameAnswerId {
    /// Encode the n-th answer of a question: `questionId + n * ANSWER_UNIT`.
    pub const fn new(question: GameQuestionId, n: i64) -> Self {
        Self(question.raw() + n * ANSWER_UNIT)
    }

    /// Truncate any raw id down to its containing answer id.
    pub const fn of(raw: i64) -> Self {
        Self(raw / ANSWER_UNIT * ANSWER_UNIT)
    }

    /// Owning question.
    pub const fn question(self) -> GameQuestionId {
        GameQuestionId::of(self.0)
    }

    /// Owning game.
    pub const fn game(self) -> GameId {
        GameId::of(self.0)
    }

    /// Position of this answer within its question (1-based).
    pub const fn ordinal(self) -> i64 {
        self.0 % QUESTION_UNIT / ANSWER_UNIT
    }

    /// Raw 64-bit value.
    pub const fn raw(self) -> i64 {
        self.0
    }
}

// =============================================================================
// PLAYER ID
// =============================================================================

/// Identifier of a player within a game.
///
/// Players are numbered with small integers; the id doubles as the low
/// digit field of a [`GamePlayerAnswerId`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GamePlayerId(pub i64);

impl GamePlayerId {
    /// Encode the n-th player: `n * PLAYER_UNIT`.
    pub const fn from_ordinal(n: i64) -> Self {
        Self(n * PLAYER_UNIT)
    }

    /// Player number (1-based).
    pub const fn ordinal(self) -> i64 {
        self.0 / PLAYER_UNIT
    }

    /// Raw 64-bit value.
    pub const fn raw(self) -> i64 {
        self.0
    }
}

// =============================================================================
// PLAYER-ANSWER ID
// =============================================================================

/// Identifier of one player's pick of one answer option.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GamePlayerAnswerId(pub i64);

impl GamePlayerAnswerId {
    /// Encode a player's pick: `answerId + playerId`.
    pub const fn new(answer: GameAnswerId, player: GamePlayerId) -> Self {
        Self(answer.raw() + player.raw())
    }

    /// Answer option this pick refers to.
    pub const fn answer(self) -> GameAnswerId {
        GameAnswerId::of(self.0)
    }

    /// Owning question.
    pub const fn question(self) -> GameQuestionId {
        GameQuestionId::of(self.0)
    }

    /// Owning game.
    pub const fn game(self) -> GameId {
        GameId::of(self.0)
    }

    /// Player who picked, recovered as `id mod ANSWER_UNIT`.
    pub const fn player(self) -> GamePlayerId {
        GamePlayerId(self.0 % ANSWER_UNIT)
    }

    /// Raw 64-bit value.
    pub const fn raw(self) -> i64 {
        self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for GameQuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for GameAnswerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for GamePlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for GamePlayerAnswerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_nested_encode_decode() {
        let game = GameId::from_ordinal(42);
        assert_eq!(game.raw(), 420_000_000);

        let question = GameQuestionId::new(game, 17);
        assert_eq!(question.raw(), 420_170_000);

        let answer = GameAnswerId::new(question, 3);
        assert_eq!(answer.raw(), 420_170_300);

        let pick = GamePlayerAnswerId::new(answer, GamePlayerId::from_ordinal(2));
        assert_eq!(pick.raw(), 420_170_302);

        // Full decode from the leaf id alone
        assert_eq!(pick.game(), game);
        assert_eq!(pick.question(), question);
        assert_eq!(pick.answer(), answer);
        assert_eq!(pick.player().ordinal(), 2);
    }

    #[test]
    fn test_ordinals_recovered() {
        let game = GameId::from_ordinal(7);
        let question = GameQuestionId::new(game, 123);
        let answer = GameAnswerId::new(question, 45);

        assert_eq!(game.ordinal(), 7);
        assert_eq!(question.ordinal(), 123);
        assert_eq!(answer.ordinal(), 45);
    }

    #[test]
    fn test_of_truncates_to_level() {
        let raw = 420_170_302;
        assert_eq!(GameId::of(raw).raw(), 420_000_000);
        assert_eq!(GameQuestionId::of(raw).raw(), 420_170_000);
        assert_eq!(GameAnswerId::of(raw).raw(), 420_170_300);
    }

    #[test]
    fn test_capacity_constants() {
        // Digit fields must never overlap at the documented maxima
        assert_eq!(MAX_QUESTION_ORDINAL, 999);
        assert_eq!(MAX_ANSWER_ORDINAL, 99);
        assert_eq!(MAX_PLAYER_ORDINAL, 99);
        assert!(MAX_QUESTION_ORDINAL * QUESTION_UNIT < GAME_UNIT);
        assert!(MAX_ANSWER_ORDINAL * ANSWER_UNIT < QUESTION_UNIT);
        assert!(MAX_PLAYER_ORDINAL * PLAYER_UNIT < ANSWER_UNIT);
    }

    proptest! {
        #[test]
        fn prop_roundtrip(
            g in 1..=MAX_GAME_ORDINAL,
            q in 1..=MAX_QUESTION_ORDINAL,
            a in 1..=MAX_ANSWER_ORDINAL,
            p in 1..=MAX_PLAYER_ORDINAL,
        ) {
            let game = GameId::from_ordinal(g);
            let question = GameQuestionId::new(game, q);
            let answer = GameAnswerId::new(question, a);
            let player = GamePlayerId::from_ordinal(p);
            let pick = GamePlayerAnswerId::new(answer, player);

            prop_assert_eq!(pick.game(), game);
            prop_assert_eq!(pick.question(), question);
            prop_assert_eq!(pick.answer(), answer);
            prop_assert_eq!(pick.player(), player);

            prop_assert_eq!(question.game(), game);
            prop_assert_eq!(answer.question(), question);
            prop_assert_eq!(answer.game(), game);

            prop_assert_eq!(question.ordinal(), q);
            prop_assert_eq!(answer.ordinal(), a);
            prop_assert_eq!(pick.player().ordinal(), p);
        }
    }
}
