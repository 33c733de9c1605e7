//! Grid topology: word starts, square numbers and word membership.
//!
//! Everything here is derived from the black/white pattern of the solution
//! in a single row-major pass. A word is a run of two or more non-black
//! cells; isolated single cells are never part of a word.

use log::{debug, warn};

use super::types::models::{Direction, Position, Puzzle};

/// One numbered word in a clue list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClueEntry {
    /// Square number printed at the word's first cell.
    pub number: u16,
    /// Position of the clue text in the string table, after the three header
    /// strings.
    pub clue_index: usize,
    pub start: Position,
}

/// Numbering and word membership derived from a [`Puzzle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridModel {
    width: usize,
    height: usize,
    numbers: Vec<Option<u16>>,
    across_words: Vec<u16>,
    down_words: Vec<u16>,
    across_clues: Vec<ClueEntry>,
    down_clues: Vec<ClueEntry>,
}

/// True when `(x, y)` begins an across word of at least two cells.
pub fn starts_across(puzzle: &Puzzle, x: usize, y: usize) -> bool {
    !puzzle.is_black(x, y)
        && (x == 0 || puzzle.is_black(x - 1, y))
        && x + 1 < puzzle.width()
        && !puzzle.is_black(x + 1, y)
}

/// True when `(x, y)` begins a down word of at least two cells.
pub fn starts_down(puzzle: &Puzzle, x: usize, y: usize) -> bool {
    !puzzle.is_black(x, y)
        && (y == 0 || puzzle.is_black(x, y - 1))
        && y + 1 < puzzle.height()
        && !puzzle.is_black(x, y + 1)
}

impl GridModel {
    /// Derive the full topology. Pure and infallible.
    pub fn build(puzzle: &Puzzle) -> Self {
        let (width, height) = (puzzle.width(), puzzle.height());
        let cells = puzzle.cell_count();
        let mut numbers = vec![None; cells];
        let mut across_words = vec![0u16; cells];
        let mut down_words = vec![0u16; cells];
        let mut across_clues = Vec::new();
        let mut down_clues = Vec::new();

        let mut sq_nbr: u16 = 1;
        let mut clue_index = 0usize;

        for y in 0..height {
            for x in 0..width {
                let index = y * width + x;
                let across = starts_across(puzzle, x, y);
                let down = starts_down(puzzle, x, y);
                let black = puzzle.is_black(x, y);

                across_words[index] = if across {
                    sq_nbr
                } else if black || x == 0 {
                    0
                } else {
                    across_words[index - 1]
                };
                down_words[index] = if down {
                    sq_nbr
                } else if black || y == 0 {
                    0
                } else {
                    down_words[index - width]
                };

                if across || down {
                    numbers[index] = Some(sq_nbr);
                    let start = Position::new(x, y);
                    // Across is indexed first when a cell starts both
                    if across {
                        across_clues.push(ClueEntry { number: sq_nbr, clue_index, start });
                        clue_index += 1;
                    }
                    if down {
                        down_clues.push(ClueEntry { number: sq_nbr, clue_index, start });
                        clue_index += 1;
                    }
                    sq_nbr += 1;
                }
            }
        }

        debug!(
            "Grid topology: {} numbered squares, {} across, {} down",
            sq_nbr - 1,
            across_clues.len(),
            down_clues.len()
        );
        if clue_index != puzzle.clue_count() {
            warn!(
                "Grid has {} words but the file carries {} clues",
                clue_index,
                puzzle.clue_count()
            );
        }

        Self {
            width,
            height,
            numbers,
            across_words,
            down_words,
            across_clues,
            down_clues,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    /// Square number label for `(x, y)`, if a word starts there.
    pub fn number(&self, x: usize, y: usize) -> Option<u16> {
        self.index(x, y).and_then(|i| self.numbers[i])
    }

    /// Across word number containing `(x, y)`, 0 when none.
    pub fn across_word(&self, x: usize, y: usize) -> u16 {
        self.index(x, y).map_or(0, |i| self.across_words[i])
    }

    /// Down word number containing `(x, y)`, 0 when none.
    pub fn down_word(&self, x: usize, y: usize) -> u16 {
        self.index(x, y).map_or(0, |i| self.down_words[i])
    }

    /// Word number containing `(x, y)` along `direction`, 0 when none.
    pub fn word(&self, x: usize, y: usize, direction: Direction) -> u16 {
        match direction {
            Direction::Across => self.across_word(x, y),
            Direction::Down => self.down_word(x, y),
            Direction::Unknown => 0,
        }
    }

    /// Per-cell square numbers in row-major order.
    pub fn numbers(&self) -> &[Option<u16>] {
        &self.numbers
    }

    pub fn across_words(&self) -> &[u16] {
        &self.across_words
    }

    pub fn down_words(&self) -> &[u16] {
        &self.down_words
    }

    pub fn across_clues(&self) -> &[ClueEntry] {
        &self.across_clues
    }

    pub fn down_clues(&self) -> &[ClueEntry] {
        &self.down_clues
    }

    /// The ordered clue list for `direction`; empty for `Unknown`.
    pub fn clues(&self, direction: Direction) -> &[ClueEntry] {
        match direction {
            Direction::Across => &self.across_clues,
            Direction::Down => &self.down_clues,
            Direction::Unknown => &[],
        }
    }
}
