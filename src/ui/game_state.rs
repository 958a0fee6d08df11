//! Game state management for the tic-tac-toe GUI

use crate::board::{Board, Mark, Pos};
use crate::engine::{AIEngine, Difficulty, MoveResult};
use crate::rules;
use std::sync::mpsc::{channel, Receiver};
use std::thread;
use std::time::{Duration, Instant};

/// Minimum wait before an AI reply is applied. The search itself is
/// near-instant on a 3x3 board; the pause keeps the exchange readable.
const AI_REPLY_DELAY: Duration = Duration::from_millis(450);

/// Options chosen on the setup screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSettings {
    pub human_mark: Mark,
    pub difficulty: Difficulty,
    pub use_pruning: bool,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            human_mark: Mark::X,
            difficulty: Difficulty::Medium,
            use_pruning: true,
        }
    }
}

impl GameSettings {
    #[inline]
    pub fn ai_mark(&self) -> Mark {
        self.human_mark.opponent()
    }
}

/// Game result. `winner: None` is a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    pub winner: Option<Mark>,
    pub winning_line: Option<[Pos; 3]>,
}

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// Main game state
pub struct GameState {
    pub board: Board,
    pub settings: GameSettings,
    pub current_turn: Mark,
    pub game_over: Option<GameResult>,
    pub last_move: Option<Pos>,
    pub move_history: Vec<(Pos, Mark)>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub message: Option<String>,
}

impl GameState {
    pub fn new(settings: GameSettings) -> Self {
        Self {
            board: Board::new(),
            settings,
            current_turn: Mark::X,
            game_over: None,
            last_move: None,
            move_history: Vec::new(),
            last_ai_result: None,
            ai_state: AiState::Idle,
            message: None,
        }
    }

    /// Start a fresh game with the current settings. X moves first.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current_turn = Mark::X;
        self.game_over = None;
        self.last_move = None;
        self.move_history.clear();
        self.last_ai_result = None;
        self.ai_state = AiState::Idle;
        self.message = None;
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        self.current_turn == self.settings.human_mark
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        self.current_turn == self.settings.ai_mark()
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Attempt to place the human's mark at the given position
    pub fn try_place_mark(&mut self, pos: Pos) -> Result<(), String> {
        if self.game_over.is_some() {
            return Err("Game is over".to_string());
        }

        if self.is_ai_thinking() {
            return Err("AI is thinking".to_string());
        }

        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }

        if !rules::is_valid_move(&self.board, pos) {
            return Err("Cell is taken".to_string());
        }

        self.execute_move(pos);
        Ok(())
    }

    /// Execute a move for whoever's turn it is
    fn execute_move(&mut self, pos: Pos) {
        let mark = self.current_turn;

        self.board.place_mark(pos, mark);
        self.move_history.push((pos, mark));
        self.last_move = Some(pos);

        if let Some(result) = self.resolve_game_over(mark) {
            self.game_over = Some(result);
            return;
        }

        self.current_turn = mark.opponent();
        self.message = None;
    }

    /// Check for a win or draw after `mark` just moved
    fn resolve_game_over(&self, mark: Mark) -> Option<GameResult> {
        if let Some(line) = rules::find_winning_line(&self.board, mark) {
            return Some(GameResult {
                winner: Some(mark),
                winning_line: Some(line),
            });
        }

        if self.board.is_full() {
            return Some(GameResult {
                winner: None,
                winning_line: None,
            });
        }

        None
    }

    /// Start AI thinking on a worker thread
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.game_over.is_some() {
            return;
        }

        let board = self.board;
        let settings = self.settings;

        let (tx, rx) = channel();

        thread::spawn(move || {
            let mut engine = AIEngine::with_config(
                settings.difficulty.search_depth(),
                settings.use_pruning,
                settings.ai_mark(),
            );
            let result = engine.find_move(&board);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Apply the AI's reply once it has arrived and the reply delay has
    /// passed
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking {
                receiver,
                start_time,
            } => {
                if start_time.elapsed() < AI_REPLY_DELAY {
                    return;
                }
                match receiver.try_recv() {
                    Ok(result) => Some(result),
                    Err(std::sync::mpsc::TryRecvError::Empty) => None,
                    Err(std::sync::mpsc::TryRecvError::Disconnected) => {
                        self.ai_state = AiState::Idle;
                        self.message = Some("AI error".to_string());
                        return;
                    }
                }
            }
            AiState::Idle => None,
        };

        if let Some(move_result) = result {
            self.ai_state = AiState::Idle;
            self.last_ai_result = Some(move_result);

            if let Some(pos) = move_result.best_move {
                self.execute_move(pos);
            } else {
                self.message = Some("AI could not find a move".to_string());
            }
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }
}
