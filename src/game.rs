use log::info;
use rand::Rng;

use crate::ai::{Decision, PlayerKind, SearchDriver, WorkerPool};
use crate::board::Board;
use crate::error::EngineError;
use crate::types::{GameResult, GameState, Move, Side};

/// Which read of the human move text is being decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAttempt {
    /// The first prompt for a turn.
    First,
    /// Any prompt after a rejected move.
    Retry,
}

/// Decodes two-digit "column then row" text (`42` = column 4, row 2) into
/// a 1-based move index. The result may be out of range; legality checks
/// reject it.
///
/// The first read reduces the row modulo 9 and retries reduce it modulo 8,
/// so the two paths disagree for rows 8 and 9.
pub fn decode_human_move(raw: i32, attempt: InputAttempt) -> i32 {
    let column = raw / 10;
    let modulus = match attempt {
        InputAttempt::First => 9,
        InputAttempt::Retry => 8,
    };
    let row = (raw - column * 10) % modulus;
    (row - 1) * 8 + column
}

/// Renders a move as column then row, both 1-based.
pub fn move_text(mv: Move) -> String {
    format!("{}{}", mv.col() + 1, mv.row() + 1)
}

/// One game between two players. Light moves first.
pub struct Game {
    board: Board,
    side_to_move: Side,
    light: PlayerKind,
    dark: PlayerKind,
    is_game_over: bool,
    is_pass: bool,
    last_move: Option<Move>,
}

impl Game {
    pub fn new(light: PlayerKind, dark: PlayerKind) -> Self {
        Self {
            board: Board::new(),
            side_to_move: Side::Light,
            light,
            dark,
            is_game_over: false,
            is_pass: false,
            last_move: None,
        }
    }

    pub fn from_selectors(light: u8, dark: u8) -> Result<Self, EngineError> {
        Ok(Self::new(
            PlayerKind::from_selector(light)?,
            PlayerKind::from_selector(dark)?,
        ))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    pub fn is_game_over(&self) -> bool {
        self.is_game_over
    }

    pub fn player(&self, side: Side) -> PlayerKind {
        match side {
            Side::Light => self.light,
            Side::Dark => self.dark,
        }
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        self.board.legal_moves(self.side_to_move)
    }

    /// Applies a human move given as a 1-based index.
    pub fn play_human(&mut self, index: i32) -> Result<(), EngineError> {
        self.ensure_running()?;
        if self.player(self.side_to_move).is_ai() {
            return Err(EngineError::NotHumanTurn);
        }

        let side = self.side_to_move;
        let mv = Move::new(index)
            .filter(|_| self.board.is_legal(side, index))
            .ok_or(EngineError::IllegalMove { side, index })?;
        self.apply(mv);
        Ok(())
    }

    /// Lets the AI of the side to move search and play its move.
    pub fn play_ai<R: Rng + ?Sized>(
        &mut self,
        driver: &SearchDriver,
        pool: &WorkerPool,
        rng: &mut R,
    ) -> Result<Decision, EngineError> {
        self.ensure_running()?;
        let side = self.side_to_move;
        let evaluator = self
            .player(side)
            .evaluator(&self.board, side)
            .ok_or(EngineError::NotAiTurn)?;

        let decision = driver.best_move(pool, &self.board, side, evaluator, rng)?;
        self.apply(decision.mv);
        Ok(decision)
    }

    pub fn to_game_state(&self) -> GameState {
        let (light_count, dark_count) = self.board.count();
        GameState {
            cells: self.board.cells().to_vec(),
            side_to_move: self.side_to_move,
            light_count,
            dark_count,
            is_game_over: self.is_game_over,
            is_pass: self.is_pass,
            last_move: self.last_move,
        }
    }

    pub fn to_game_result(&self) -> GameResult {
        let (light_count, dark_count) = self.board.count();
        GameResult {
            winner: if light_count > dark_count {
                Some(Side::Light)
            } else if dark_count > light_count {
                Some(Side::Dark)
            } else {
                None
            },
            light_count,
            dark_count,
        }
    }

    fn ensure_running(&self) -> Result<(), EngineError> {
        if self.is_game_over {
            Err(EngineError::GameOver)
        } else {
            Ok(())
        }
    }

    fn apply(&mut self, mv: Move) {
        self.board.apply_move(self.side_to_move, mv);
        self.last_move = Some(mv);
        self.side_to_move = self.side_to_move.opponent();
        self.settle_turn();
    }

    /// Skips a side with no legal move; ends the game when neither can move.
    fn settle_turn(&mut self) {
        self.is_pass = false;
        if self.board.has_legal_move(self.side_to_move) {
            return;
        }

        let next = self.side_to_move.opponent();
        if self.board.has_legal_move(next) {
            info!("{} has no legal move; passing to {next}", self.side_to_move);
            self.side_to_move = next;
            self.is_pass = true;
        } else {
            let (light, dark) = self.board.count();
            info!("game over: light {light}, dark {dark}");
            self.is_game_over = true;
        }
    }

    #[cfg(test)]
    fn set_board_for_test(&mut self, board: Board, side_to_move: Side) {
        self.board = board;
        self.side_to_move = side_to_move;
        self.is_game_over = false;
        self.settle_turn();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SearchConfig;
    use crate::types::{Cell, NUM_SQUARES};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn decode_reads_column_then_row() {
        assert_eq!(decode_human_move(42, InputAttempt::First), 12);
        assert_eq!(decode_human_move(42, InputAttempt::Retry), 12);
        assert_eq!(decode_human_move(53, InputAttempt::First), 21);
    }

    #[test]
    fn decode_paths_diverge_on_high_rows() {
        assert_eq!(decode_human_move(48, InputAttempt::First), 60);
        assert_eq!(decode_human_move(48, InputAttempt::Retry), -4);
        assert_eq!(decode_human_move(49, InputAttempt::First), -4);
        assert_eq!(decode_human_move(49, InputAttempt::Retry), 4);
    }

    #[test]
    fn move_text_inverts_decode() {
        for mv in Board::new().legal_moves(Side::Light) {
            let raw: i32 = move_text(mv).parse().unwrap();
            assert_eq!(decode_human_move(raw, InputAttempt::First), mv.index());
        }
    }

    #[test]
    fn initial_state_is_correct() {
        let game = Game::new(PlayerKind::Human, PlayerKind::Human);
        let state = game.to_game_state();

        assert_eq!(state.side_to_move, Side::Light);
        assert_eq!((state.light_count, state.dark_count), (2, 2));
        assert!(!state.is_game_over);
        assert!(!state.is_pass);
        assert_eq!(state.last_move, None);
        assert_eq!(game.legal_moves().len(), 4);
    }

    #[test]
    fn human_move_is_checked_and_applied() {
        let mut game = Game::new(PlayerKind::Human, PlayerKind::Human);

        let err = game.play_human(1).unwrap_err();
        assert!(matches!(err, EngineError::IllegalMove { index: 1, .. }));
        assert!(game.play_human(99).is_err());

        game.play_human(21).unwrap();
        assert_eq!(game.side_to_move(), Side::Dark);
        assert_eq!(game.board().count(), (4, 1));
    }

    #[test]
    fn ai_and_human_turns_are_enforced() {
        let pool = WorkerPool::new(1).unwrap();
        let driver = SearchDriver::new(&SearchConfig { depth: 1, ..SearchConfig::default() }).unwrap();
        let mut rng = StdRng::seed_from_u64(9);
        let mut game = Game::new(PlayerKind::Human, PlayerKind::Easy);

        assert!(matches!(
            game.play_ai(&driver, &pool, &mut rng),
            Err(EngineError::NotAiTurn)
        ));
        game.play_human(21).unwrap();
        assert!(matches!(game.play_human(20), Err(EngineError::NotHumanTurn)));
        game.play_ai(&driver, &pool, &mut rng).unwrap();
        assert_eq!(game.side_to_move(), Side::Light);
    }

    #[test]
    fn stuck_side_passes_turn() {
        let mut game = Game::new(PlayerKind::Human, PlayerKind::Human);
        let mut cells = [Cell::Light; NUM_SQUARES];
        cells[0] = Cell::Empty;
        cells[1] = Cell::Dark;
        game.set_board_for_test(Board::from_cells(&cells), Side::Dark);

        assert_eq!(game.side_to_move(), Side::Light);
        assert!(game.to_game_state().is_pass);
        assert!(!game.is_game_over());

        game.play_human(1).unwrap();
        assert!(game.is_game_over());
        assert_eq!(
            game.to_game_result(),
            GameResult { winner: Some(Side::Light), light_count: 64, dark_count: 0 }
        );
        assert!(matches!(game.play_human(1), Err(EngineError::GameOver)));
    }

    #[test]
    fn ai_self_play_reaches_game_over() {
        let pool = WorkerPool::new(4).unwrap();
        let driver = SearchDriver::new(&SearchConfig { depth: 2, ..SearchConfig::default() }).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let mut game = Game::new(PlayerKind::Adaptive, PlayerKind::Hard);

        let mut turns = 0;
        while !game.is_game_over() {
            let side = game.side_to_move();
            let decision = game.play_ai(&driver, &pool, &mut rng).unwrap();
            assert_eq!(decision.failed, 0);
            assert_eq!(game.board().cell(decision.mv.row(), decision.mv.col()), Cell::from(side));
            turns += 1;
            assert!(turns <= 60);
        }

        let result = game.to_game_result();
        assert!(result.light_count + result.dark_count <= 64);
    }
}
