//! Game Assembler
//!
//! Orchestrates one generation call: validate the request, open a pool
//! view, select entries, build each answer set, and number everything with
//! the identifier codec.

use std::sync::Arc;

use tracing::debug;

use crate::core::ids::{GameAnswerId, GameId, GamePlayerId, GameQuestionId};
use crate::core::rng::GameRng;
use crate::error::Error;
use crate::game::answers::build_answer_set;
use crate::game::catalog::{PoolRegistry, PoolView, StoreCatalog};
use crate::game::model::{
    Game, GameAlbum, GameAnswer, GameArtist, GameMusic, GamePlayer, GameQuestion, GameTheme,
};
use crate::game::select::select_entries;
use crate::game::settings::GameSettings;

/// Quiz generation engine.
///
/// Holds the immutable registry and the live catalog handle; both are
/// shared freely across concurrent calls. Each call owns a fresh
/// [`GameRng`] seeded from the request, so generation is reproducible and
/// race-free without any internal locking.
#[derive(Clone)]
pub struct GameGenerator {
    registry: Arc<PoolRegistry>,
    catalog: Arc<dyn StoreCatalog>,
}

impl GameGenerator {
    /// Build a generator over a loaded registry and a live catalog.
    pub fn new(registry: Arc<PoolRegistry>, catalog: Arc<dyn StoreCatalog>) -> Self {
        Self { registry, catalog }
    }

    /// Generate one game under `game_id`.
    ///
    /// The id is typically provisional; the keyed store assigns the final
    /// sequential number on create and rebases via [`Game::renumbered`].
    ///
    /// Short pools and short genres shrink the result instead of failing;
    /// a failed read of the live store catalog fails the whole call.
    pub fn generate(&self, settings: &GameSettings, game_id: GameId) -> Result<Game, Error> {
        settings.validate()?;

        let mut rng = GameRng::from_seed(settings.seed);
        let view = PoolView::open(&self.registry, self.catalog.as_ref(), &settings.sources)?;

        let selected = select_entries(
            &mut rng,
            &view,
            &settings.sources,
            settings.question_count as usize,
        );
        debug!(
            seed = settings.seed,
            requested = settings.question_count,
            selected = selected.len(),
            "selected question entries"
        );

        let mut questions = Vec::with_capacity(selected.len());
        for entry_id in selected {
            // Selected ids originate from the view, so both lookups hold;
            // an inconsistent pool entry is skipped rather than trusted.
            let Some(entry) = view.entry(entry_id) else { continue };
            let Some(genre) = view.genre(entry.genre_id) else { continue };

            let question_id = GameQuestionId::new(game_id, questions.len() as i64 + 1);
            let drafts = build_answer_set(&mut rng, entry, genre, settings.answer_count);
            let answers = drafts
                .into_iter()
                .enumerate()
                .map(|(index, draft)| GameAnswer {
                    id: GameAnswerId::new(question_id, index as i64 + 1),
                    text: draft.text,
                    hint: draft.hint,
                    correct: draft.correct,
                })
                .collect();

            questions.push(GameQuestion {
                id: question_id,
                theme: GameTheme {
                    id: genre.genre_id,
                    title: genre.title.clone(),
                },
                music: GameMusic {
                    id: entry.entry_id,
                    deezer_id: entry.deezer_id,
                    name: entry.title.clone(),
                    mp3_url: entry.media_url.clone(),
                    artist: GameArtist {
                        name: entry.answer_text().to_string(),
                    },
                    album: entry.album_title.clone().map(|title| GameAlbum { title }),
                },
                answers,
            });
        }

        let players = (1..=settings.player_count as i64)
            .map(|n| GamePlayer {
                id: GamePlayerId::from_ordinal(n),
                name: format!("Player {n}"),
                active: true,
                score: 0,
            })
            .collect();

        Ok(Game {
            id: game_id,
            version: 1,
            settings: settings.clone(),
            players,
            questions,
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================
