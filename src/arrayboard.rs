use anyhow::{anyhow, Result};
use crossterm::{
    cursor::MoveTo,
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::fmt;
use std::io::{stdout, Write};

use crate::board::{Board, PlayerId};
use crate::CONNECT;

const MAX_DIGIT_COLS: usize = 9;

/// A Connect 4 board of arbitrary dimensions backed by a flat array
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ArrayBoard {
    rows: usize,
    cols: usize,
    cells: Vec<Option<PlayerId>>, // cells are stored left-to-right, bottom-to-top
    heights: Vec<usize>,
    num_moves: usize,
}

impl ArrayBoard {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
            heights: vec![0; cols],
            num_moves: 0,
        }
    }

    /// Builds a board from a string of 1-indexed columns, players alternating
    /// starting with player one
    ///
    /// Each move is a single digit, so only boards of at most 9 columns can be
    /// described by a non-empty move string.
    pub fn from_moves<S: AsRef<str>>(rows: usize, cols: usize, moves: S) -> Result<Self> {
        if cols > MAX_DIGIT_COLS && !moves.as_ref().is_empty() {
            return Err(anyhow!(
                "moves are single digits, a board of {} columns needs at most {}",
                cols,
                MAX_DIGIT_COLS
            ));
        }
        let mut board = Self::new(rows, cols);
        let mut player = PlayerId::ONE;

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10) {
                Some(column) => {
                    board.play_checked(column as usize, player)?;
                    player = player.other();
                }
                _ => return Err(anyhow!("could not parse '{}' as a valid move", column_char)),
            }
        }
        Ok(board)
    }

    /// Plays a 1-indexed column, rejecting columns that are out of range or full
    pub fn play_checked(&mut self, column_one_indexed: usize, player: PlayerId) -> Result<()> {
        if column_one_indexed < 1 || column_one_indexed > self.cols {
            return Err(anyhow!(
                "Invalid move, column {} out of range. Columns must be between 1 and {}",
                column_one_indexed,
                self.cols
            ));
        }
        let column = column_one_indexed - 1;
        if self.is_column_full(column) {
            return Err(anyhow!("Invalid move, column {} full", column_one_indexed));
        }
        self.play(column, player);
        Ok(())
    }

    pub fn num_moves(&self) -> usize {
        self.num_moves
    }

    /// Whether dropping a tile for `player` in `column` would connect four
    pub fn is_winning_move(&self, column: usize, player: PlayerId) -> bool {
        let height = self.heights[column];
        if height >= self.rows {
            return false;
        }
        let owned = |x: i64, y: i64| {
            x >= 0
                && x < self.cols as i64
                && y >= 0
                && y < self.rows as i64
                && self.cells[x as usize + self.cols * y as usize] == Some(player)
        };

        // check vertical alignment
        let below = (1..CONNECT as i64)
            .take_while(|&dy| owned(column as i64, height as i64 - dy))
            .count();
        if below + 1 >= CONNECT {
            return true;
        }

        // check horizontal and diagonal alignment
        for dy_dx in -1i64..=1 {
            let mut run = 0;
            for dx in [-1i64, 1].iter() {
                let mut x = column as i64 + dx;
                let mut y = height as i64 + dx * dy_dx;
                while owned(x, y) {
                    x += dx;
                    y += dx * dy_dx;
                    run += 1;
                }
            }
            if run + 1 >= CONNECT {
                return true;
            }
        }

        false
    }

    /// The player owning any line of four, if there is one
    pub fn winner(&self) -> Option<PlayerId> {
        [PlayerId::ONE, PlayerId::TWO]
            .iter()
            .copied()
            .find(|&player| crate::evaluator::count_alignments(self, player) > 0)
    }

    /// Draws the board on the terminal at the cursor position
    pub fn display(&self) -> Result<()> {
        let mut stdout = stdout();

        let cols: String = (1..=self.cols).map(|x| (x % 10).to_string()).collect();
        stdout.queue(PrintStyledContent(style(cols + "\n")))?;
        for _ in 0..self.rows {
            stdout.queue(PrintStyledContent(style("\n")))?;
        }
        stdout.flush()?;

        let (origin_x, origin_y) = crossterm::cursor::position()?;

        for (idx, cell) in self.cells.iter().enumerate() {
            let (pos_x, pos_y) = (
                origin_x + (idx % self.cols) as u16,
                origin_y - (idx / self.cols) as u16,
            );

            stdout
                .queue(MoveTo(pos_x, pos_y))?
                .queue(PrintStyledContent(
                    style("O")
                        .attribute(Attribute::Bold)
                        .on(Color::DarkBlue)
                        .with(match cell.map(PlayerId::get) {
                            Some(1) => Color::Red,
                            Some(_) => Color::Yellow,
                            None => Color::DarkBlue,
                        }),
                ))?;
        }
        stdout
            .queue(MoveTo(origin_x + self.cols as u16, origin_y))?
            .queue(PrintStyledContent(style("\n")))?;
        stdout.flush()?;
        Ok(())
    }
}

impl Board for ArrayBoard {
    fn num_rows(&self) -> usize {
        self.rows
    }

    fn num_cols(&self) -> usize {
        self.cols
    }

    fn get(&self, row: usize, col: usize) -> Option<PlayerId> {
        self.cells[col + self.cols * row]
    }

    fn is_column_full(&self, col: usize) -> bool {
        self.heights[col] >= self.rows
    }

    fn play(&mut self, col: usize, player: PlayerId) {
        assert!(!self.is_column_full(col), "column {} is full", col);
        self.cells[col + self.cols * self.heights[col]] = Some(player);
        self.heights[col] += 1;
        self.num_moves += 1;
    }

    fn unplay(&mut self, col: usize, player: PlayerId) {
        assert!(self.heights[col] > 0, "column {} is empty", col);
        let top = col + self.cols * (self.heights[col] - 1);
        debug_assert_eq!(self.cells[top], Some(player));
        self.cells[top] = None;
        self.heights[col] -= 1;
        self.num_moves -= 1;
    }

    fn num_empty_cells(&self) -> usize {
        self.rows * self.cols - self.num_moves
    }

    fn is_full(&self) -> bool {
        self.num_moves == self.rows * self.cols
    }
}

impl fmt::Display for ArrayBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..self.rows).rev() {
            for col in 0..self.cols {
                let tile = match self.get(row, col) {
                    Some(player) if player == PlayerId::ONE => 'X',
                    Some(_) => 'O',
                    None => '.',
                };
                write!(f, "{}", tile)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
