//! # Connect Four Arena
//!
//! Plays Connect Four between interchangeable agents on a column-stack
//! board, using depth-bounded minimax search with pluggable static
//! evaluation functions.
//!
//! ## Modules
//!
//! - [`game`] — Board with stacked columns and incremental win detection,
//!   move records, and the turn-loop engine
//! - [`ai`] — Agent trait, random/programmed/human agents, minimax search,
//!   frontier heuristics
//! - [`arena`] — Batch series driver with per-game seed bookkeeping
//! - [`render`] — ASCII board rendering boundary
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod arena;
pub mod config;
pub mod error;
pub mod game;
pub mod render;
