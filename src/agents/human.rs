//! Console player

use std::{
    collections::VecDeque,
    io::{self, BufRead, Write},
};

use tracing::debug;

use super::Agent;
use crate::{
    Error, Result,
    tictactoe::{Board, Position},
};

/// Line-oriented input for [`HumanAgent`].
///
/// Implemented for [`io::Stdin`], which reads through the process-wide
/// stdin buffer so two human agents can share the console, and for
/// in-memory byte sources.
pub trait LineSource {
    /// Append one line to `buf`, returning the bytes read (0 at end of input)
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

impl LineSource for io::Stdin {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        io::Stdin::read_line(self, buf)
    }
}

impl LineSource for &[u8] {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

impl<T: AsRef<[u8]>> LineSource for io::Cursor<T> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

/// Prompts for a row and a column until they name an empty cell.
///
/// Input is consumed one whitespace-separated token at a time, so `1 2` on a
/// single line answers both prompts. Blank lines are skipped.
pub struct HumanAgent<R, W> {
    name: String,
    input: R,
    output: W,
    /// Tokens read but not yet consumed by a prompt
    pending: VecDeque<String>,
}

impl<R: LineSource, W: Write> HumanAgent<R, W> {
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    /// Give back the output sink, e.g. to inspect prompts in tests
    pub fn into_output(self) -> W {
        self.output
    }

    fn next_token(&mut self) -> Result<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(Error::InputClosed);
            }
            self.pending.extend(line.split_whitespace().map(str::to_string));
        }
    }

    /// Prompt once. `Ok(None)` means the answer was not a number, the user
    /// has been told so and the rest of that line was dropped.
    fn prompt_index(&mut self, prompt: &str) -> Result<Option<usize>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        match self.next_token()?.parse::<i64>() {
            // Negative numbers are numbers; they fail the move check instead
            Ok(value) => Ok(Some(usize::try_from(value).unwrap_or(usize::MAX))),
            Err(_) => {
                self.pending.clear();
                writeln!(self.output, "Invalid input. Please enter a number.")?;
                Ok(None)
            }
        }
    }
}

impl<R: LineSource, W: Write> Agent for HumanAgent<R, W> {
    fn select_move(&mut self, board: &Board) -> Result<Position> {
        if board.is_finished() {
            return Err(Error::GameOver);
        }

        let last = board.size() - 1;
        writeln!(self.output, "Player {}'s turn.", board.current_player())?;

        loop {
            let Some(row) = self.prompt_index(&format!("Enter row (0-{last}): "))? else {
                continue;
            };
            let Some(col) = self.prompt_index(&format!("Enter column (0-{last}): "))? else {
                continue;
            };

            if board.is_legal_move(row, col) {
                return Ok(Position::new(row, col));
            }
            debug!(agent = %self.name, row, col, "rejected human move");
            writeln!(self.output, "Invalid move. Please try again.")?;
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
