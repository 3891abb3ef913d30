//! Keyed Game Store
//!
//! Boundary contract for persisting generated games, plus the in-memory
//! realization used by tests and the demo binary. Create assigns the next
//! sequential game number; update is guarded by an optimistic version
//! check - a mismatch is a conflict surfaced to the caller, never silently
//! resolved.

use std::collections::BTreeMap;
use std::sync::RwLock;

use tracing::debug;

use crate::core::ids::GameId;
use crate::error::Error;
use crate::game::model::Game;

/// Keyed store for generated games.
///
/// Implementations own id allocation: `create` rebases the game onto the
/// next sequential [`GameId`] and resets `version` to 1.
pub trait GameStore: Send + Sync {
    /// Persist a new game; returns it with the assigned id and `version = 1`.
    fn create(&self, game: Game) -> Result<Game, Error>;

    /// Fetch a game by id.
    fn retrieve(&self, id: GameId) -> Result<Game, Error>;

    /// Replace a stored game.
    ///
    /// The presented `version` must equal the stored one, else
    /// [`Error::ConcurrentUpdate`]. On success the stored version is
    /// incremented and the updated game returned.
    fn update(&self, game: Game) -> Result<Game, Error>;

    /// Remove a game by id.
    fn delete(&self, id: GameId) -> Result<(), Error>;
}

/// In-memory game store.
///
/// BTreeMap keyed by raw game id for deterministic iteration; the lock is
/// held only for the duration of one operation.
#[derive(Debug, Default)]
pub struct InMemoryGameStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    games: BTreeMap<i64, Game>,
    next_ordinal: i64,
}

impl InMemoryGameStore {
    /// Create an empty store; the first created game gets ordinal 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored games.
    pub fn len(&self) -> usize {
        self.inner.read().expect("store lock poisoned").games.len()
    }

    /// Whether the store holds no games.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl GameStore for InMemoryGameStore {
    fn create(&self, game: Game) -> Result<Game, Error> {
        let mut inner = self.inner.write().expect("store lock poisoned");
        inner.next_ordinal += 1;
        let id = GameId::from_ordinal(inner.next_ordinal);

        let mut game = game.renumbered(id);
        game.version = 1;
        inner.games.insert(id.raw(), game.clone());

        debug!(game = %id, "game created");
        Ok(game)
    }

    fn retrieve(&self, id: GameId) -> Result<Game, Error> {
        let inner = self.inner.read().expect("store lock poisoned");
        inner
            .games
            .get(&id.raw())
            .cloned()
            .ok_or(Error::GameNotFound(id))
    }

    fn update(&self, game: Game) -> Result<Game, Error> {
        let mut inner = self.inner.write().expect("store lock poisoned");
        let stored = inner
            .games
            .get_mut(&game.id.raw())
            .ok_or(Error::GameNotFound(game.id))?;

        if stored.version != game.version {
            return Err(Error::ConcurrentUpdate {
                id: game.id,
                expected: game.version,
                found: stored.version,
            });
        }

        let mut game = game;
        game.version += 1;
        *stored = game.clone();

        debug!(game = %game.id, version = game.version, "game updated");
        Ok(game)
    }

    fn delete(&self, id: GameId) -> Result<(), Error> {
        let mut inner = self.inner.write().expect("store lock poisoned");
        inner
            .games
            .remove(&id.raw())
            .map(|_| ())
            .ok_or(Error::GameNotFound(id))
    }
}

// =============================================================================
// TESTS
// =============================================================================
