//! Playing agents: the [`Agent`] capability trait, the minimax search
//! engine, and its pluggable frontier heuristics.

mod agent;
pub mod heuristic;
mod human;
mod minimax;
mod programmed;
mod random;

pub use agent::Agent;
pub use heuristic::{Heuristic, NeighborRings, NullHeuristic, RandomHeuristic, WindowScan};
pub use human::{HumanAgent, Prompter, StdinPrompter};
pub use minimax::MinimaxAgent;
pub use programmed::ProgrammedAgent;
pub use random::RandomAgent;
