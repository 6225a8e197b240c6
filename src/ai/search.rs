use crate::ai::eval::Evaluator;
use crate::board::Board;
use crate::types::Side;

pub const MIN_SCORE: i32 = i32::MIN;
pub const MAX_SCORE: i32 = i32::MAX;

/// Fixed-depth alpha-beta searcher.
///
/// Scores are always taken from `root_side`'s point of view, whichever side
/// moves at the node being scored.
#[derive(Debug, Clone)]
pub struct Searcher {
    evaluator: Evaluator,
    root_side: Side,
    nodes: u64,
}

impl Searcher {
    pub fn new(evaluator: Evaluator, root_side: Side) -> Self {
        Self {
            evaluator,
            root_side,
            nodes: 0,
        }
    }

    /// Number of nodes visited since construction.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Minimax value of `board` with `side` to move, `depth` plies deep.
    ///
    /// A node whose side has no legal move on a non-terminal board returns
    /// its untouched accumulator (`MIN_SCORE` when maximizing, `MAX_SCORE`
    /// when minimizing); passing is the caller's job.
    pub fn alpha_beta(
        &mut self,
        board: &Board,
        side: Side,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.nodes += 1;

        if depth == 0 {
            return self.evaluator.evaluate(board, self.root_side);
        }
        if board.is_terminal() {
            return Evaluator::Material.evaluate(board, self.root_side);
        }

        let mut best = if maximizing { MIN_SCORE } else { MAX_SCORE };

        for mv in board.legal_moves(side) {
            let mut next = *board;
            next.apply_move(side, mv);
            let score = self.alpha_beta(&next, side.opponent(), depth - 1, alpha, beta, !maximizing);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }
            if beta <= alpha {
                break;
            }
        }

        best
    }
}
