pub mod driver;
pub mod eval;
pub mod search;
pub mod strategy;

pub use driver::{Decision, SearchDriver, WorkerPool};
pub use eval::Evaluator;
pub use search::Searcher;
pub use strategy::{PlayerKind, adaptive_evaluator};
