//! Text front end
//!
//! Reads answers and moves line by line and prints the board as an ASCII
//! grid. Generic over the input and output streams so whole games can be
//! scripted.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::board::{Bitboard, Board, Cell, Pos, Side, MAX_DIM};
use crate::config::{GameConfig, Opponent};
use crate::error::TermError;
use crate::notation::{column_label, format_cell, parse_cell, parse_size, row_label};
use crate::session::{Outcome, Session};

const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Render the board with the winning run (if any) in bold.
///
/// ```text
///    | A | B | C |
/// ---+---+---+---+
///  1 | X |   | O |
/// ---+---+---+---+
/// ```
pub fn render_board(board: &Board, highlights: &Bitboard) -> String {
    let cols = board.cols() as usize;
    let separator = "---+".repeat(cols + 1);

    let mut out = String::from("   |");
    for col in 0..board.cols() {
        out.push_str(&format!(" {} |", column_label(col)));
    }
    out.push('\n');
    out.push_str(&separator);
    out.push('\n');

    for row in 0..board.rows() {
        out.push_str(&format!("{:>2} |", row_label(row)));
        for col in 0..board.cols() {
            let pos = Pos::new(row, col);
            match board.get(pos) {
                Cell::Empty => out.push_str("   |"),
                Cell::Taken(side) if highlights.get(pos) => {
                    out.push_str(&format!(" {BOLD}{side}{RESET} |"))
                }
                Cell::Taken(side) => out.push_str(&format!(" {side} |")),
            }
        }
        out.push('\n');
        out.push_str(&separator);
        out.push('\n');
    }
    out
}

/// What to do after a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Replay {
    Same,
    NewSettings,
    Quit,
}

/// Interactive terminal game
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the output stream
    pub fn into_output(self) -> W {
        self.output
    }

    /// Play games until the user quits or input runs out.
    ///
    /// With `preset` the setup dialogue is skipped for the first game.
    pub fn run(&mut self, preset: Option<GameConfig>) -> Result<(), TermError> {
        let mut config = match preset {
            Some(config) => config,
            None => match self.setup()? {
                Some(config) => config,
                None => return Ok(()),
            },
        };
        let mut session = Session::new(config)?;

        loop {
            if self.play_game(&mut session)?.is_none() {
                return Ok(());
            }

            match self.replay_menu()? {
                Replay::Same => session = session.restart(),
                Replay::NewSettings => {
                    config = match self.setup()? {
                        Some(config) => config,
                        None => return Ok(()),
                    };
                    session = Session::new(config)?;
                }
                Replay::Quit => return Ok(()),
            }
        }
    }

    /// Ask for the game settings. `None` if input ran out.
    fn setup(&mut self) -> Result<Option<GameConfig>, TermError> {
        self.say("Hello! This is a game of m,n,k tic-tac-toe. Please answer a few questions before playing.")?;
        self.say("")?;

        let (rows, cols) = loop {
            let Some(answer) = self.ask("How big should the board be? (Write it as RxC, for example 3x4)")? else {
                return Ok(None);
            };
            match parse_size(&answer) {
                Ok(size) => break size,
                Err(_) => {
                    self.say(&format!(
                        "The size must be RxC, where R and C are whole numbers from 1 to {MAX_DIM}! Try again."
                    ))?;
                    self.say("")?;
                }
            }
        };
        self.say("")?;

        let human_side = loop {
            let Some(answer) = self.ask("Write X if you want to be X and O otherwise.")? else {
                return Ok(None);
            };
            match answer.as_str() {
                "X" => break Side::X,
                "O" => break Side::O,
                _ => {
                    self.say("You have to write X or O!")?;
                    self.say("")?;
                }
            }
        };
        self.say("")?;

        let Some(answer) = self.ask("If you want to start first, type 1, else type something different.")? else {
            return Ok(None);
        };
        let human_first = answer == "1";
        self.say("")?;

        let max = rows.min(cols);
        let win_len = loop {
            let Some(answer) =
                self.ask("How many of your marks in a row, column or diagonal should win the game?")?
            else {
                return Ok(None);
            };
            match answer.parse::<u8>() {
                Ok(n) if (1..=max).contains(&n) => break n,
                _ => {
                    self.say(&format!("The number must be between 1 and {max}!"))?;
                    self.say("Nobody could win on this board otherwise.")?;
                    self.say("")?;
                }
            }
        };

        let opponent = loop {
            let Some(answer) = self.ask("Do you want to play against the computer? (Y/N)")? else {
                return Ok(None);
            };
            match answer.as_str() {
                "Y" => break Opponent::Computer,
                "N" => break Opponent::Human,
                _ => {
                    self.say("")?;
                    self.say("Write Y to play against the computer and N otherwise.")?;
                }
            }
        };

        let config = GameConfig {
            rows,
            cols,
            win_len,
            human_side,
            human_first,
            opponent,
        };
        debug!(?config, "setup finished");
        Ok(Some(config))
    }

    /// Run one game. `None` if input ran out before the end.
    fn play_game(&mut self, session: &mut Session) -> Result<Option<Outcome>, TermError> {
        loop {
            if session.is_computer_turn() {
                let pos = session.play_computer()?;
                debug!(cell = %format_cell(pos), "computer played");
            } else {
                self.show_board(session)?;
                match session.config().opponent {
                    Opponent::Computer => self.say("Where do you want to play?")?,
                    Opponent::Human => {
                        self.say(&format!("Where does player {} want to play?", session.turn()))?
                    }
                }
                let Some(pos) = self.read_move(session.board())? else {
                    return Ok(None);
                };
                session.play(pos)?;
            }

            if let Some(outcome) = session.outcome() {
                self.show_board(session)?;
                if let Some(message) = session.outcome_message() {
                    self.say(&message)?;
                }
                return Ok(Some(outcome));
            }
        }
    }

    /// Prompt until the answer names an empty cell.
    fn read_move(&mut self, board: &Board) -> Result<Option<Pos>, TermError> {
        loop {
            let Some(answer) =
                self.ask("Write the column first and then the row: B1 is the 2nd column, 1st row.")?
            else {
                return Ok(None);
            };
            match parse_cell(&answer, board) {
                Ok(pos) if board.is_empty(pos) => return Ok(Some(pos)),
                Ok(_) => {
                    self.say("")?;
                    self.say("That cell is already taken! Choose a different one.")?;
                }
                Err(err) => {
                    debug!(%err, "rejected move input");
                    self.say("")?;
                    self.say("You must enter a cell on the board! (C2 is the 3rd column, 2nd row)")?;
                }
            }
        }
    }

    fn replay_menu(&mut self) -> Result<Replay, TermError> {
        self.say(&"=".repeat(71))?;
        self.say("")?;
        let answer = self.ask(
            "What now? Write 1, 2 or anything else:\n\
             \x20   1 = play again with the same settings\n\
             \x20   2 = play again with different settings\n\
             \x20   _ = quit",
        )?;
        Ok(match answer.as_deref() {
            Some("1") => Replay::Same,
            Some("2") => Replay::NewSettings,
            _ => Replay::Quit,
        })
    }

    fn show_board(&mut self, session: &Session) -> Result<(), TermError> {
        let text = render_board(session.board(), session.highlights());
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    fn say(&mut self, line: &str) -> Result<(), TermError> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Print a prompt and read one trimmed line. `None` at end of input.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>, TermError> {
        writeln!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
