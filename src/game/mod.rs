//! Quiz Generation Module
//!
//! Everything between a validated request and a fully-numbered game.
//! 100% deterministic for a given seed and unchanged pool content.
//!
//! ## Module Structure
//!
//! - `settings`: request parameters, source tags, bounds validation
//! - `catalog`: content pool registry and the live store-catalog seam
//! - `model`: game aggregates and their wire shape
//! - `select`: deterministic entry selection
//! - `answers`: multiple-choice answer set construction
//! - `assemble`: orchestration and identifier numbering

pub mod settings;
pub mod catalog;
pub mod model;
pub mod select;
pub mod answers;
pub mod assemble;

// Re-export key types
pub use settings::{GameSettings, Source};
pub use catalog::{ContentEntry, Genre, PoolRegistry, StoreCatalog, EmptyCatalog, InMemoryCatalog};
pub use model::{Game, GameAnswer, GamePlayer, GameQuestion, GameTheme};
pub use assemble::GameGenerator;
