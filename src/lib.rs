//! Othello/Reversi board model and a parallel alpha-beta engine for AI players.

pub mod ai;
pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod types;

pub use board::Board;
pub use config::SearchConfig;
pub use error::EngineError;
pub use game::Game;
pub use types::{Cell, Move, Side};
