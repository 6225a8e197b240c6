use serde::{Deserialize, Serialize};

use crate::ai::eval::Evaluator;
use crate::board::Board;
use crate::error::EngineError;
use crate::types::Side;

/// Evaluator for the adaptive tier, picked from how many corners `side` holds.
pub fn adaptive_evaluator(board: &Board, side: Side) -> Evaluator {
    match board.corners_owned(side) {
        2 => Evaluator::WeightedNoPenalty,
        n if n > 2 => Evaluator::Material,
        _ => Evaluator::Weighted,
    }
}

/// Who controls a side, as chosen by the `0..=4` player selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerKind {
    Human,
    Easy,
    Medium,
    Hard,
    Adaptive,
}

impl PlayerKind {
    pub fn from_selector(selector: u8) -> Result<Self, EngineError> {
        match selector {
            0 => Ok(Self::Human),
            1 => Ok(Self::Easy),
            2 => Ok(Self::Medium),
            3 => Ok(Self::Hard),
            4 => Ok(Self::Adaptive),
            other => Err(EngineError::InvalidPlayerSelector(other)),
        }
    }

    pub fn is_ai(self) -> bool {
        self != Self::Human
    }

    /// Evaluator for this turn, or `None` for a human.
    pub fn evaluator(self, board: &Board, side: Side) -> Option<Evaluator> {
        match self {
            Self::Human => None,
            Self::Easy => Some(Evaluator::Material),
            Self::Medium => Some(Evaluator::WeightedNoPenalty),
            Self::Hard => Some(Evaluator::Weighted),
            Self::Adaptive => Some(adaptive_evaluator(board, side)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Cell, NUM_SQUARES};

    const CORNERS: [usize; 4] = [0, 7, 56, 63];

    fn with_corners(side: Side, owned: usize) -> Board {
        let mut cells = [Cell::Empty; NUM_SQUARES];
        for &pos in CORNERS.iter().take(owned) {
            cells[pos] = Cell::from(side);
        }
        // Opponent corners never count.
        for &pos in CORNERS.iter().skip(owned) {
            cells[pos] = Cell::from(side.opponent());
        }
        Board::from_cells(&cells)
    }

    #[test]
    fn adaptive_selection_follows_corner_count() {
        for side in [Side::Light, Side::Dark] {
            assert_eq!(adaptive_evaluator(&with_corners(side, 0), side), Evaluator::Weighted);
            assert_eq!(adaptive_evaluator(&with_corners(side, 1), side), Evaluator::Weighted);
            assert_eq!(adaptive_evaluator(&with_corners(side, 2), side), Evaluator::WeightedNoPenalty);
            assert_eq!(adaptive_evaluator(&with_corners(side, 3), side), Evaluator::Material);
            assert_eq!(adaptive_evaluator(&with_corners(side, 4), side), Evaluator::Material);
        }
    }

    #[test]
    fn selector_maps_to_tiers() {
        assert_eq!(PlayerKind::from_selector(0).unwrap(), PlayerKind::Human);
        assert_eq!(PlayerKind::from_selector(4).unwrap(), PlayerKind::Adaptive);
        assert!(matches!(
            PlayerKind::from_selector(5),
            Err(EngineError::InvalidPlayerSelector(5))
        ));
    }

    #[test]
    fn fixed_tiers_ignore_the_position() {
        let board = with_corners(Side::Dark, 3);

        assert_eq!(PlayerKind::Human.evaluator(&board, Side::Dark), None);
        assert_eq!(PlayerKind::Easy.evaluator(&board, Side::Dark), Some(Evaluator::Material));
        assert_eq!(PlayerKind::Medium.evaluator(&board, Side::Dark), Some(Evaluator::WeightedNoPenalty));
        assert_eq!(PlayerKind::Hard.evaluator(&board, Side::Dark), Some(Evaluator::Weighted));
        assert_eq!(PlayerKind::Adaptive.evaluator(&board, Side::Dark), Some(Evaluator::Material));
    }
}
