//! Blindtest Engine Demo
//!
//! Loads the content registry, generates one game and prints it as JSON,
//! then regenerates with the same seed to verify reproducibility.

use std::collections::BTreeSet;
use std::sync::Arc;

use anyhow::Context;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use blindtest::{
    EmptyCatalog, GameGenerator, GameSettings, GameStore, InMemoryGameStore, PoolRegistry,
    Source, VERSION,
    core::ids::GameId,
};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    info!("Blindtest Engine v{}", VERSION);

    // Seed from first argument, or fresh from the clock
    let seed = match std::env::args().nth(1) {
        Some(arg) => arg.parse::<i64>().context("seed must be an integer")?,
        None => GameSettings::default_seed(),
    };

    let registry = Arc::new(PoolRegistry::load().context("Failed to load content datasets")?);
    info!(entries = registry.entry_count(), "registry loaded");

    let generator = GameGenerator::new(registry, Arc::new(EmptyCatalog));
    let settings = GameSettings {
        seed,
        question_count: 5,
        answer_count: 4,
        player_count: 4,
        sources: BTreeSet::from([Source::Legacy, Source::Decade, Source::Genre]),
    };

    info!(seed, "generating demo game");
    let draft = generator.generate(&settings, GameId::default())?;

    // Persist through the keyed store, which assigns the real game number
    let store = InMemoryGameStore::new();
    let game = store.create(draft)?;
    info!(game = %game.id, questions = game.questions.len(), "game created");

    println!("{}", serde_json::to_string_pretty(&game)?);

    // Verify determinism by regenerating with the same settings
    info!("=== Verifying Determinism ===");
    let replay = generator.generate(&settings, GameId::default())?;
    let replay = replay.renumbered(game.id);

    if replay.questions == game.questions {
        info!("DETERMINISM VERIFIED: regenerated questions are identical");
    } else {
        info!("DETERMINISM FAILURE: regenerated questions differ!");
    }

    Ok(())
}
