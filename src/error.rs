//! Engine Error Kinds
//!
//! All failures the engine surfaces are validation, not-found or conflict
//! conditions - never internal faults. Invalid input is returned as a value;
//! the engine does not panic mid-request. The only fatal path is a corrupted
//! embedded dataset, and that can only happen at process initialization.

use thiserror::Error;

use crate::core::ids::{GameId, MAX_ANSWER_ORDINAL, MAX_QUESTION_ORDINAL, MAX_PLAYER_ORDINAL};

/// Error kinds surfaced by the quiz generation engine and the game store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Player count outside `[2, 99]`.
    #[error("invalid player count {0}: must be between 2 and {MAX_PLAYER_ORDINAL}")]
    InvalidPlayerCount(u32),

    /// Question count outside `[1, 999]`.
    #[error("invalid question count {0}: must be between 1 and {MAX_QUESTION_ORDINAL}")]
    InvalidQuestionCount(u32),

    /// Answer count outside `[2, 99]`.
    #[error("invalid answer count {0}: must be between 2 and {MAX_ANSWER_ORDINAL}")]
    InvalidAnswerCount(u32),

    /// No recognized content source in the request.
    #[error("at least one content source is required")]
    MissingSource,

    /// The keyed store holds no game under this id.
    #[error("game {0} not found")]
    GameNotFound(GameId),

    /// Optimistic-concurrency conflict on update.
    #[error("concurrent update on game {id}: expected version {expected}, found {found}")]
    ConcurrentUpdate {
        /// Game the update targeted.
        id: GameId,
        /// Version the caller presented.
        expected: u32,
        /// Version currently stored.
        found: u32,
    },

    /// The live store-backed catalog could not be read.
    ///
    /// Passed through unmodified; the whole generation call fails,
    /// no partial game is returned.
    #[error("store catalog unavailable: {0}")]
    Catalog(String),

    /// An embedded dataset failed to parse.
    ///
    /// Only reachable at process initialization, never mid-request.
    #[error("corrupted embedded dataset {name}: {reason}")]
    Dataset {
        /// Dataset file name.
        name: String,
        /// Parse failure detail.
        reason: String,
    },
}
