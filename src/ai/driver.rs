use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use log::{debug, info, warn};
use rand::Rng;
use rayon::prelude::*;
use web_time::Instant;

use crate::ai::eval::Evaluator;
use crate::ai::search::{MAX_SCORE, MIN_SCORE, Searcher};
use crate::board::Board;
use crate::config::SearchConfig;
use crate::error::EngineError;
use crate::types::{Move, Side};

/// Fixed-size pool that runs one search task per root move.
///
/// Owned by the caller; dropping it shuts the workers down.
pub struct WorkerPool {
    pool: rayon::ThreadPool,
}

impl WorkerPool {
    pub fn new(workers: usize) -> Result<Self, EngineError> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("reversi-search-{i}"))
            .build()?;
        Ok(Self { pool })
    }

    pub fn workers(&self) -> usize {
        self.pool.current_num_threads()
    }
}

/// Score of one root move; `None` when its task failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RootScore {
    pub mv: Move,
    pub score: Option<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub mv: Move,
    pub score: i32,
    /// Root tasks that failed and were left out of the reduction.
    pub failed: usize,
}

/// Picks a move by searching every root move in parallel.
#[derive(Debug, Clone)]
pub struct SearchDriver {
    depth: u8,
    tie_break_probability: f64,
}

impl SearchDriver {
    pub fn new(config: &SearchConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self {
            depth: config.depth,
            tie_break_probability: config.tie_break_probability,
        })
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Searches every legal move of `side` and returns the best one.
    ///
    /// Blocks until every root task has finished.
    pub fn best_move<R: Rng + ?Sized>(
        &self,
        pool: &WorkerPool,
        board: &Board,
        side: Side,
        evaluator: Evaluator,
        rng: &mut R,
    ) -> Result<Decision, EngineError> {
        let started = Instant::now();
        let scores = self.score_root_moves(pool, board, side, evaluator);
        if scores.is_empty() {
            return Err(EngineError::NoLegalMoves { side });
        }

        let failed = scores.iter().filter(|root| root.score.is_none()).count();
        let (mv, score) = reduce_root_scores(&scores, self.tie_break_probability, rng).ok_or(
            EngineError::AllTasksFailed {
                side,
                attempted: scores.len(),
            },
        )?;

        info!(
            "{side} plays {mv} ({evaluator:?}, score {score}, {} candidates, {failed} failed) in {:?}",
            scores.len(),
            started.elapsed()
        );
        Ok(Decision { mv, score, failed })
    }

    /// Scores each legal root move in scan order. Each task searches its own
    /// copy of the board with the opponent minimizing.
    pub fn score_root_moves(
        &self,
        pool: &WorkerPool,
        board: &Board,
        side: Side,
        evaluator: Evaluator,
    ) -> Vec<RootScore> {
        let moves = board.legal_moves(side);
        let depth = self.depth.saturating_sub(1);

        pool.pool.install(|| {
            moves
                .par_iter()
                .map(|&mv| {
                    let mut child = *board;
                    child.apply_move(side, mv);
                    let score = run_isolated(|| {
                        let mut searcher = Searcher::new(evaluator, side);
                        let score = searcher.alpha_beta(
                            &child,
                            side.opponent(),
                            depth,
                            MIN_SCORE,
                            MAX_SCORE,
                            false,
                        );
                        debug!("{side} root {mv}: score {score}, {} nodes", searcher.nodes());
                        score
                    });
                    if score.is_none() {
                        warn!("root search for {side} move {mv} failed; skipping it");
                    }
                    RootScore { mv, score }
                })
                .collect()
        })
    }
}

/// Reduces root scores in order to a single best move, skipping failed
/// tasks. A higher score always wins; an equal score replaces the current
/// best with probability `tie_break_probability`.
///
/// Returns `None` when every task failed.
pub fn reduce_root_scores<R: Rng + ?Sized>(
    scores: &[RootScore],
    tie_break_probability: f64,
    rng: &mut R,
) -> Option<(Move, i32)> {
    let mut best: Option<(Move, i32)> = None;

    for root in scores {
        let Some(score) = root.score else {
            continue;
        };
        let replace = match best {
            None => true,
            Some((_, best_score)) if score > best_score => true,
            Some((_, best_score)) if score == best_score => rng.gen_bool(tie_break_probability),
            Some(_) => false,
        };
        if replace {
            best = Some((root.mv, score));
        }
    }

    best
}

fn run_isolated(task: impl FnOnce() -> i32) -> Option<i32> {
    panic::catch_unwind(AssertUnwindSafe(task))
        .map_err(|payload| warn!("search task panicked: {}", panic_message(payload.as_ref())))
        .ok()
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "unknown panic"
    }
}
