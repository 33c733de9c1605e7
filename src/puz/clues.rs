//! Clue text lookup against the numbered grid.

use super::grid::{ClueEntry, GridModel};
use super::types::models::{Direction, Position, Puzzle};

/// A clue resolved to its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clue<'a> {
    pub number: u16,
    pub direction: Direction,
    /// Empty when the file carries fewer clues than the grid has words.
    pub text: &'a str,
    pub start: Position,
}

/// Read-only pairing of a puzzle's strings with its grid's clue lists.
#[derive(Debug, Clone, Copy)]
pub struct ClueIndex<'a> {
    puzzle: &'a Puzzle,
    layout: &'a GridModel,
}

impl<'a> ClueIndex<'a> {
    pub fn new(puzzle: &'a Puzzle, layout: &'a GridModel) -> Self {
        Self { puzzle, layout }
    }

    fn resolve(self, entry: &ClueEntry, direction: Direction) -> Clue<'a> {
        Clue {
            number: entry.number,
            direction,
            text: self.puzzle.clue(entry.clue_index).unwrap_or_default(),
            start: entry.start,
        }
    }

    /// Clues for `direction` in grid order.
    pub fn list(self, direction: Direction) -> impl Iterator<Item = Clue<'a>> + 'a {
        self.layout
            .clues(direction)
            .iter()
            .map(move |entry| self.resolve(entry, direction))
    }

    pub fn across(self) -> impl Iterator<Item = Clue<'a>> + 'a {
        self.list(Direction::Across)
    }

    pub fn down(self) -> impl Iterator<Item = Clue<'a>> + 'a {
        self.list(Direction::Down)
    }

    /// Look up a clue by its square number.
    pub fn find(self, direction: Direction, number: u16) -> Option<Clue<'a>> {
        self.layout
            .clues(direction)
            .iter()
            .find(|entry| entry.number == number)
            .map(|entry| self.resolve(entry, direction))
    }
}
