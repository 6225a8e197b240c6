use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::types::{BOARD_SIZE, Cell, Side};

type WeightTable = [[i32; BOARD_SIZE]; BOARD_SIZE];

/// Positional weights; corners are prized, X- and C-squares penalised.
const POSITION_WEIGHTS: WeightTable = [
    [120, -20, 20, 5, 5, 20, -20, 120],
    [-20, -40, -5, -5, -5, -5, -40, -20],
    [20, -5, 15, 3, 3, 15, -5, 20],
    [5, -5, 3, 3, 3, 3, -5, 5],
    [5, -5, 3, 3, 3, 3, -5, 5],
    [20, -5, 15, 3, 3, 15, -5, 20],
    [-20, -40, -5, -5, -5, -5, -40, -20],
    [120, -20, 20, 5, 5, 20, -20, 120],
];

/// [`POSITION_WEIGHTS`] with every negative entry raised to 1.
static NO_PENALTY_WEIGHTS: Lazy<WeightTable> = Lazy::new(|| {
    let mut table = POSITION_WEIGHTS;
    for weight in table.iter_mut().flatten() {
        if *weight < 0 {
            *weight = 1;
        }
    }
    table
});

/// Static scoring strategies. Every variant returns
/// `score(side) - score(opponent)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Evaluator {
    /// Plain disc count difference.
    Material,
    Weighted,
    WeightedNoPenalty,
}

impl Evaluator {
    pub const ALL: [Evaluator; 3] = [Self::Material, Self::Weighted, Self::WeightedNoPenalty];

    pub fn evaluate(self, board: &Board, side: Side) -> i32 {
        match self {
            Self::Material => {
                board.count_of(side) as i32 - board.count_of(side.opponent()) as i32
            }
            Self::Weighted => weighted(board, side, &POSITION_WEIGHTS),
            Self::WeightedNoPenalty => weighted(board, side, &NO_PENALTY_WEIGHTS),
        }
    }
}

fn weighted(board: &Board, side: Side, table: &WeightTable) -> i32 {
    let mine = Cell::from(side);
    let theirs = Cell::from(side.opponent());
    let mut score = 0;

    for (row, weights) in table.iter().enumerate() {
        for (col, &weight) in weights.iter().enumerate() {
            let cell = board.cell(row, col);
            if cell == mine {
                score += weight;
            } else if cell == theirs {
                score -= weight;
            }
        }
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NUM_SQUARES;

    fn board_with(cells: &[(usize, Cell)]) -> Board {
        let mut all = [Cell::Empty; NUM_SQUARES];
        for &(pos, cell) in cells {
            all[pos] = cell;
        }
        Board::from_cells(&all)
    }

    #[test]
    fn weight_table_is_symmetric_under_half_turn() {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                assert_eq!(
                    POSITION_WEIGHTS[row][col],
                    POSITION_WEIGHTS[BOARD_SIZE - 1 - row][BOARD_SIZE - 1 - col]
                );
            }
        }
    }

    #[test]
    fn no_penalty_table_only_replaces_negatives() {
        for (original, relaxed) in POSITION_WEIGHTS.iter().flatten().zip(NO_PENALTY_WEIGHTS.iter().flatten()) {
            if *original < 0 {
                assert_eq!(*relaxed, 1);
            } else {
                assert_eq!(relaxed, original);
            }
        }
        assert_eq!(NO_PENALTY_WEIGHTS[1], [1; BOARD_SIZE]);
    }

    #[test]
    fn material_is_disc_difference() {
        let mut board = Board::new();
        board.apply_move(Side::Light, crate::types::Move::new(21).unwrap());

        assert_eq!(Evaluator::Material.evaluate(&board, Side::Light), 3);
        assert_eq!(Evaluator::Material.evaluate(&board, Side::Dark), -3);
    }

    #[test]
    fn weighted_scores_corner_and_x_square() {
        // Light on corner (0,0), dark on X-square (1,1).
        let board = board_with(&[(0, Cell::Light), (9, Cell::Dark)]);

        assert_eq!(Evaluator::Weighted.evaluate(&board, Side::Light), 120 - (-40));
        assert_eq!(Evaluator::WeightedNoPenalty.evaluate(&board, Side::Light), 120 - 1);
        assert_eq!(Evaluator::Weighted.evaluate(&board, Side::Dark), -160);
    }

    #[test]
    fn every_evaluator_is_zero_sum_between_sides() {
        let board = board_with(&[(0, Cell::Light), (1, Cell::Dark), (19, Cell::Dark), (45, Cell::Light)]);

        for evaluator in Evaluator::ALL {
            assert_eq!(
                evaluator.evaluate(&board, Side::Light),
                -evaluator.evaluate(&board, Side::Dark)
            );
        }
    }

    #[test]
    fn initial_position_is_balanced() {
        for evaluator in Evaluator::ALL {
            assert_eq!(evaluator.evaluate(&Board::new(), Side::Light), 0);
        }
    }
}
