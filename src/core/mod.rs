//! Core deterministic primitives.
//!
//! Pure arithmetic with no I/O: the seeded PRNG every generation call owns,
//! and the hierarchical identifier codec the rest of the engine numbers
//! games with.

pub mod ids;
pub mod rng;

// Re-export core types
pub use ids::{GameId, GameQuestionId, GameAnswerId, GamePlayerId, GamePlayerAnswerId};
pub use rng::GameRng;
