//! Batch driver: plays a series of games between two configured agents,
//! reseeding them per game so any game in the series can be replayed.

use std::fmt;

use tracing::info;

use crate::ai::{
    Agent, HumanAgent, MinimaxAgent, NeighborRings, NullHeuristic, RandomAgent, RandomHeuristic,
    WindowScan,
};
use crate::config::{AgentKind, AppConfig};
use crate::error::GameError;
use crate::game::{Board, GameEngine, GameOutcome, Move, Player};

/// Win/draw tallies for a series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeriesStats {
    pub red_wins: usize,
    pub yellow_wins: usize,
    pub draws: usize,
}

impl SeriesStats {
    pub fn games(&self) -> usize {
        self.red_wins + self.yellow_wins + self.draws
    }

    fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Winner(Player::Red) => self.red_wins += 1,
            GameOutcome::Winner(Player::Yellow) => self.yellow_wins += 1,
            GameOutcome::Draw => self.draws += 1,
        }
    }
}

impl fmt::Display for SeriesStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} games: Red {} / Yellow {} / drawn {}",
            self.games(),
            self.red_wins,
            self.yellow_wins,
            self.draws
        )
    }
}

/// Build an agent for one seat from its configured kind.
pub fn build_agent(kind: AgentKind, player: Player, config: &AppConfig, seed: u64) -> Box<dyn Agent> {
    let search = &config.search;
    match kind {
        AgentKind::Random => Box::new(RandomAgent::seeded(player, seed)),
        AgentKind::Human => Box::new(HumanAgent::new(player)),
        AgentKind::Minimax => Box::new(MinimaxAgent::new(
            player,
            search.ply_depth,
            search.decay,
            Box::new(NullHeuristic),
        )),
        AgentKind::MinimaxRandom => Box::new(MinimaxAgent::new(
            player,
            search.ply_depth,
            search.decay,
            Box::new(RandomHeuristic::seeded(seed)),
        )),
        AgentKind::MinimaxRings => Box::new(MinimaxAgent::new(
            player,
            search.ply_depth,
            search.decay,
            Box::new(NeighborRings::new(search.rings)),
        )),
        AgentKind::MinimaxWindow => Box::new(MinimaxAgent::new(
            player,
            search.ply_depth,
            search.decay,
            Box::new(WindowScan),
        )),
    }
}

/// Play the configured series, calling `on_move` for every committed move.
///
/// Game `g` reseeds both agents with `arena.seed + g` before play, so
/// rerunning with the same config reproduces every game exactly.
pub fn run_series<F>(config: &AppConfig, mut on_move: F) -> Result<SeriesStats, GameError>
where
    F: FnMut(&Board, &Move),
{
    let mut stats = SeriesStats::default();

    for game in 0..config.arena.games {
        let seed = config.arena.seed.wrapping_add(game as u64);
        // Seat seeds differ so the two sides never mirror each other
        let mut red = build_agent(config.arena.red, Player::Red, config, seed);
        let mut yellow =
            build_agent(config.arena.yellow, Player::Yellow, config, seed ^ 0x9e37_79b9);
        red.reseed(seed);
        yellow.reseed(seed ^ 0x9e37_79b9);

        info!(
            game,
            seed,
            red = red.name(),
            yellow = yellow.name(),
            "starting game"
        );

        let mut engine = GameEngine::new(config.board.width, config.board.height, red, yellow);
        let outcome = engine.play_with(&mut on_move)?;
        stats.record(outcome);
    }

    info!(%stats, "series finished");
    Ok(stats)
}
