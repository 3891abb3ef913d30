//! # Blindtest Quiz Generation Engine
//!
//! Deterministic generation of music-trivia games from fixed and live
//! content pools.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     BLINDTEST ENGINE                         │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Deterministic primitives                  │
//! │  ├── ids.rs      - Hierarchical decimal-unit identifiers     │
//! │  └── rng.rs      - Deterministic Xorshift128+ PRNG           │
//! │                                                              │
//! │  game/           - Quiz generation (deterministic)           │
//! │  ├── settings.rs - Request parameters and validation         │
//! │  ├── catalog.rs  - Content pool registry + live store seam   │
//! │  ├── model.rs    - Game aggregates / wire shape              │
//! │  ├── select.rs   - Seeded entry selection                    │
//! │  ├── answers.rs  - Multiple-choice answer sets               │
//! │  └── assemble.rs - Orchestration and id numbering            │
//! │                                                              │
//! │  store/          - Keyed game persistence boundary           │
//! │  └── mod.rs      - GameStore trait + in-memory realization   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Determinism Guarantee
//!
//! The `core/` and `game/` modules are **100% deterministic**:
//! - No HashMap (uses BTreeMap/BTreeSet for sorted iteration)
//! - No system time dependencies past seed defaulting
//! - All randomness from a per-call, seeded Xorshift128+ generator
//!
//! Given identical settings (seed included) over unchanged pool content,
//! generation produces **identical games** on any platform.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod core;
pub mod error;
pub mod game;
pub mod store;

// Re-export commonly used types
pub use self::core::ids::{GameAnswerId, GameId, GamePlayerAnswerId, GamePlayerId, GameQuestionId};
pub use self::core::rng::GameRng;
pub use error::Error;
pub use game::assemble::GameGenerator;
pub use game::catalog::{EmptyCatalog, InMemoryCatalog, PoolRegistry, StoreCatalog};
pub use game::model::Game;
pub use game::settings::{GameSettings, Source};
pub use store::{GameStore, InMemoryGameStore};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
