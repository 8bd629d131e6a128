//! Game state management for the Tic-Tac-Toe GUI

use crate::board::{Board, Mark, Pos};
use crate::rules::{winner, winning_line, Outcome};
use crate::search::{best_move, SearchResult};
use std::sync::mpsc::{channel, Receiver};
use std::thread;
use std::time::{Duration, Instant};

/// Scoreboard across rounds
#[derive(Debug, Clone, Copy, Default)]
pub struct Scoreboard {
    pub human: u32,
    pub computer: u32,
    pub ties: u32,
}

/// Outcome of a finished round, from the human's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    HumanWin,
    ComputerWin,
    Tie,
}

/// Computer move computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<SearchResult>,
        start_time: Instant,
    },
}

/// Main game state
pub struct GameState {
    pub board: Board,
    /// Token held by the human this round
    pub human: Mark,
    /// Token held by the computer this round
    pub computer: Mark,
    pub scores: Scoreboard,
    pub round_over: Option<RoundOutcome>,
    pub winning_line: Option<[Pos; 3]>,
    pub last_move: Option<Pos>,
    /// True while the "who goes first" choice is pending
    pub awaiting_first_choice: bool,
    pub last_search: Option<(SearchResult, Duration)>,
    pub ai_state: AiState,
    pub message: Option<String>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            human: Mark::X,
            computer: Mark::O,
            scores: Scoreboard::default(),
            round_over: None,
            winning_line: None,
            last_move: None,
            awaiting_first_choice: true,
            last_search: None,
            ai_state: AiState::Idle,
            message: None,
        }
    }

    /// Start a new round, keeping the scoreboard. The token choice is asked
    /// again at the start of every round.
    pub fn new_round(&mut self) {
        self.board = Board::new();
        self.round_over = None;
        self.winning_line = None;
        self.last_move = None;
        self.awaiting_first_choice = true;
        self.last_search = None;
        self.ai_state = AiState::Idle;
        self.message = None;
    }

    /// Resolve the "who goes first" prompt.
    ///
    /// X always moves first, so playing first means holding X. When the
    /// computer holds X it opens the round (driven by the app update loop).
    pub fn choose_first(&mut self, human_first: bool) {
        if human_first {
            self.human = Mark::X;
            self.computer = Mark::O;
        } else {
            self.human = Mark::O;
            self.computer = Mark::X;
        }
        self.awaiting_first_choice = false;
        log::info!(
            "new round: human plays {}, computer plays {}",
            self.human,
            self.computer
        );
    }

    /// Check if the round is waiting for a human move
    pub fn is_human_turn(&self) -> bool {
        !self.awaiting_first_choice
            && self.round_over.is_none()
            && self.board.to_move() == self.human
    }

    /// Check if the round is waiting for a computer move
    pub fn is_ai_turn(&self) -> bool {
        !self.awaiting_first_choice
            && self.round_over.is_none()
            && self.board.to_move() == self.computer
    }

    /// Check if the computer is currently searching
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Attempt to place the human's mark at the given cell.
    ///
    /// Rejected without touching the board when the round is over, the
    /// choice prompt is pending, the search is running, it is not the
    /// human's turn, or the cell is occupied.
    pub fn try_place_mark(&mut self, pos: Pos) -> Result<(), String> {
        if self.awaiting_first_choice {
            return Err("Choose who goes first".to_string());
        }

        if self.round_over.is_some() {
            return Err("Round is over".to_string());
        }

        if self.is_ai_thinking() {
            return Err("Computer is thinking".to_string());
        }

        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }

        match self.board.with_move(pos, self.human) {
            Ok(next) => {
                self.finish_move(next, pos);
                Ok(())
            }
            Err(err) => Err(err.to_string()),
        }
    }

    /// Record an accepted move and settle the round if it ended
    fn finish_move(&mut self, next: Board, pos: Pos) {
        self.board = next;
        self.last_move = Some(pos);
        self.message = None;

        if let Some(outcome) = winner(&self.board) {
            let round = match outcome {
                Outcome::Tie => RoundOutcome::Tie,
                Outcome::Win(mark) if mark == self.human => RoundOutcome::HumanWin,
                Outcome::Win(_) => RoundOutcome::ComputerWin,
            };
            match round {
                RoundOutcome::HumanWin => self.scores.human += 1,
                RoundOutcome::ComputerWin => self.scores.computer += 1,
                RoundOutcome::Tie => self.scores.ties += 1,
            }
            self.round_over = Some(round);
            self.winning_line = winning_line(&self.board);
            log::info!(
                "round over: {:?} (you {} / computer {} / ties {})",
                round,
                self.scores.human,
                self.scores.computer,
                self.scores.ties
            );
        }
    }

    /// Kick off the search for the computer's move on a worker thread
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() {
            return;
        }

        let board = self.board;
        let (tx, rx) = channel();

        thread::spawn(move || {
            let _ = tx.send(best_move(&board));
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Poll the worker thread and apply the computer's move once available
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking {
                receiver,
                start_time,
            } => match receiver.try_recv() {
                Ok(result) => Some((result, start_time.elapsed())),
                Err(std::sync::mpsc::TryRecvError::Empty) => None,
                Err(std::sync::mpsc::TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.message = Some("Search failed".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        if let Some((search, elapsed)) = result {
            self.ai_state = AiState::Idle;
            log::debug!(
                "search: move {:?} value {} nodes {} in {:?}",
                search.best_move,
                search.value,
                search.nodes,
                elapsed
            );
            self.last_search = Some((search, elapsed));

            // Fallback: the search reports a move on every non-terminal
            // board, but if it ever did not, take the first legal cell
            let mov = search
                .best_move
                .or_else(|| self.board.legal_moves().into_iter().next());

            if let Some(pos) = mov {
                match self.board.with_move(pos, self.computer) {
                    Ok(next) => self.finish_move(next, pos),
                    Err(err) => {
                        log::error!("computer move rejected: {}", err);
                        self.message = Some("Computer move rejected".to_string());
                    }
                }
            }
        }
    }

    /// Elapsed time of the in-flight search, if any
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Reset the scoreboard (keeps the current round)
    pub fn reset_scores(&mut self) {
        self.scores = Scoreboard::default();
    }
}
