//! Cursor, direction and highlight state machine used while solving.
//!
//! [`Navigator`] borrows the immutable [`Puzzle`] and [`GridModel`] and owns
//! a [`SolverState`]. No operation returns an error: illegal moves are
//! absorbed as no-ops or reverted, so the state is valid after every call.
//!
//! Invariants kept after every operation:
//! - the cursor is inside the grid and not on a black square (unless the
//!   grid has no white square at all)
//! - at most one word is highlighted, and it is the word under the cursor
//!   along the current direction
//! - black squares in the user grid match the solution

use log::{debug, warn};

use super::grid::GridModel;
use super::persist::Snapshot;
use super::types::models::{BLACK, CLEARED, Direction, Position, Puzzle};

/// Smallest zoom level a view may use.
pub const MIN_ZOOM: u8 = 22;

/// Mutable solving state. Only [`Navigator`] changes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverState {
    grid: Vec<u8>,
    cursor: Position,
    direction: Direction,
    highlight_word: u16,
    highlight_extent: Vec<Position>,
    zoom: u8,
    reveal_solution: bool,
    last_click: Option<Position>,
}

impl SolverState {
    fn fresh(puzzle: &Puzzle) -> Self {
        Self {
            grid: puzzle.grid().to_vec(),
            cursor: Position::default(),
            direction: Direction::Across,
            highlight_word: 0,
            highlight_extent: Vec::new(),
            zoom: MIN_ZOOM,
            reveal_solution: false,
            last_click: None,
        }
    }

    /// User entries: `-` empty, ` ` cleared, `.` black, else a letter.
    pub fn grid(&self) -> &[u8] {
        &self.grid
    }

    pub fn cursor(&self) -> Position {
        self.cursor
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Highlighted word number, 0 when nothing is highlighted.
    pub fn highlight_word(&self) -> u16 {
        self.highlight_word
    }

    pub fn highlight_extent(&self) -> &[Position] {
        &self.highlight_extent
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    pub fn reveal_solution(&self) -> bool {
        self.reveal_solution
    }

    pub fn last_click(&self) -> Option<Position> {
        self.last_click
    }
}

/// Drives a [`SolverState`] over one puzzle.
#[derive(Debug, Clone)]
pub struct Navigator<'a> {
    puzzle: &'a Puzzle,
    layout: &'a GridModel,
    state: SolverState,
}

impl<'a> Navigator<'a> {
    /// Start solving from the file's own grid.
    ///
    /// The cursor starts at the top-left corner heading across, then steps
    /// right and back left so that a black corner puts it on the first white
    /// square of the row.
    pub fn new(puzzle: &'a Puzzle, layout: &'a GridModel) -> Self {
        let mut nav = Self {
            puzzle,
            layout,
            state: SolverState::fresh(puzzle),
        };
        nav.settle_start();
        nav
    }

    /// Start solving from a persisted snapshot.
    ///
    /// A snapshot that does not fit this puzzle is discarded with a warning
    /// and a fresh state is used instead.
    pub fn resume(puzzle: &'a Puzzle, layout: &'a GridModel, snapshot: &Snapshot) -> Self {
        let mut nav = Self::new(puzzle, layout);
        match nav.validate_snapshot(snapshot) {
            Ok(()) => {
                let cursor = Position::new(snapshot.cursor_x, snapshot.cursor_y);
                nav.state = SolverState {
                    grid: snapshot.grid.as_bytes().to_vec(),
                    cursor,
                    direction: snapshot.direction,
                    highlight_word: 0,
                    highlight_extent: Vec::new(),
                    zoom: snapshot.zoom.max(MIN_ZOOM),
                    reveal_solution: snapshot.reveal_solution,
                    last_click: snapshot
                        .last_click
                        .filter(|p| puzzle.index(p.x, p.y).is_some()),
                };
                nav.highlight_word();
                if nav.state.highlight_word != snapshot.highlight_word_nbr {
                    debug!(
                        "Persisted highlight {} replaced by {}",
                        snapshot.highlight_word_nbr, nav.state.highlight_word
                    );
                }
            }
            Err(reason) => warn!("Ignoring persisted state: {}", reason),
        }
        nav
    }

    fn validate_snapshot(&self, snapshot: &Snapshot) -> Result<(), String> {
        let solution = self.puzzle.solution();
        let grid = snapshot.grid.as_bytes();
        if grid.len() != solution.len() {
            return Err(format!("grid has {} cells, puzzle has {}", grid.len(), solution.len()));
        }
        if let Some(i) = grid
            .iter()
            .zip(solution)
            .position(|(&entry, &sol)| !entry.is_ascii() || (entry == BLACK) != (sol == BLACK))
        {
            return Err(format!("cell {} does not match the puzzle's black squares", i));
        }
        if self.is_black(snapshot.cursor_x, snapshot.cursor_y) {
            return Err(format!(
                "cursor ({}, {}) is off the grid or on a black square",
                snapshot.cursor_x, snapshot.cursor_y
            ));
        }
        Ok(())
    }

    fn settle_start(&mut self) {
        self.step_cursor(1, 0);
        self.step_cursor(-1, 0);
        let Position { x, y } = self.state.cursor;
        if self.is_black(x, y)
            && let Some(i) = self.puzzle.solution().iter().position(|&c| c != BLACK)
        {
            self.state.cursor = Position::new(i % self.puzzle.width(), i / self.puzzle.width());
        }
        self.highlight_word();
    }

    pub fn puzzle(&self) -> &'a Puzzle {
        self.puzzle
    }

    pub fn layout(&self) -> &'a GridModel {
        self.layout
    }

    pub fn state(&self) -> &SolverState {
        &self.state
    }

    pub fn into_state(self) -> SolverState {
        self.state
    }

    pub fn cursor(&self) -> Position {
        self.state.cursor
    }

    pub fn direction(&self) -> Direction {
        self.state.direction
    }

    pub fn grid(&self) -> &[u8] {
        &self.state.grid
    }

    fn is_black(&self, x: usize, y: usize) -> bool {
        self.puzzle.is_black(x, y)
    }

    fn cursor_index(&self) -> Option<usize> {
        self.puzzle.index(self.state.cursor.x, self.state.cursor.y)
    }

    /// `pos` moved by `(dx, dy)`, or `None` when that leaves the grid.
    fn offset(&self, pos: Position, dx: i32, dy: i32) -> Option<Position> {
        let x = pos.x.checked_add_signed(dx as isize)?;
        let y = pos.y.checked_add_signed(dy as isize)?;
        self.puzzle.index(x, y).map(|_| Position::new(x, y))
    }

    fn move_cursor(&mut self, to: Position) {
        self.unhighlight_word();
        self.state.cursor = to;
        self.highlight_word();
    }

    /// Move by `(dx, dy)`, skipping over black squares.
    ///
    /// If the scan leaves the grid before reaching a white square the cursor
    /// does not move at all.
    pub fn step_cursor(&mut self, dx: i32, dy: i32) {
        if dx == 0 && dy == 0 {
            return;
        }
        let mut pos = self.state.cursor;
        loop {
            match self.offset(pos, dx, dy) {
                Some(next) if self.is_black(next.x, next.y) => pos = next,
                Some(next) => {
                    self.move_cursor(next);
                    return;
                }
                None => return,
            }
        }
    }

    /// Place the cursor directly, as a click would.
    ///
    /// Clicks outside the grid are ignored; clicks on black squares are
    /// recorded but do not move the cursor.
    pub fn set_cursor(&mut self, x: usize, y: usize) {
        if self.puzzle.index(x, y).is_none() {
            return;
        }
        self.state.last_click = Some(Position::new(x, y));
        if !self.is_black(x, y) {
            self.move_cursor(Position::new(x, y));
        }
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.unhighlight_word();
        self.state.direction = direction;
        self.highlight_word();
    }

    /// Switch between across and down.
    pub fn toggle_direction(&mut self) {
        self.set_direction(self.state.direction.toggled());
    }

    /// Cells of the contiguous white run through `(x, y)` along `direction`.
    ///
    /// Empty when `direction` is `Unknown` or the cell is black.
    pub fn word_extent(&self, x: usize, y: usize, direction: Direction) -> Vec<Position> {
        let Some((dx, dy)) = direction.delta() else {
            return Vec::new();
        };
        if self.is_black(x, y) {
            return Vec::new();
        }

        let mut start = Position::new(x, y);
        while let Some(prev) = self.offset(start, -dx, -dy) {
            if self.is_black(prev.x, prev.y) {
                break;
            }
            start = prev;
        }

        let mut extent = vec![start];
        let mut pos = start;
        while let Some(next) = self.offset(pos, dx, dy) {
            if self.is_black(next.x, next.y) {
                break;
            }
            extent.push(next);
            pos = next;
        }
        extent
    }

    /// Highlight the word under the cursor along the current direction.
    ///
    /// Any previous highlight is dropped first. Cells that belong to no word
    /// in this direction leave nothing highlighted.
    pub fn highlight_word(&mut self) {
        self.unhighlight_word();
        let Position { x, y } = self.state.cursor;
        let word = self.layout.word(x, y, self.state.direction);
        if word == 0 {
            return;
        }
        self.state.highlight_extent = self.word_extent(x, y, self.state.direction);
        self.state.highlight_word = word;
    }

    pub fn unhighlight_word(&mut self) {
        self.state.highlight_word = 0;
        self.state.highlight_extent.clear();
    }

    /// Step one cell along the current direction if that cell is white.
    /// Never scans past black squares.
    fn advance(&mut self, sign: i32) {
        let Some((dx, dy)) = self.state.direction.delta() else {
            return;
        };
        if let Some(next) = self.offset(self.state.cursor, dx * sign, dy * sign)
            && !self.is_black(next.x, next.y)
        {
            self.move_cursor(next);
        }
    }

    /// Index of the cursor cell if it can hold a letter.
    fn editable_index(&self) -> Option<usize> {
        let index = self.cursor_index()?;
        if self.puzzle.solution()[index] == BLACK {
            return None;
        }
        debug_assert_ne!(self.state.grid[index], BLACK, "user grid black squares diverged");
        Some(index)
    }

    /// Write a letter at the cursor and advance one cell.
    ///
    /// Letters are stored uppercase; a space marks the cell as cleared.
    /// Anything else, or a black cursor cell, is a no-op.
    pub fn insert_letter(&mut self, ch: char) {
        if !ch.is_ascii_alphabetic() && ch != ' ' {
            return;
        }
        let Some(index) = self.editable_index() else {
            return;
        };
        self.state.grid[index] = ch.to_ascii_uppercase() as u8;
        self.advance(1);
    }

    /// Clear the cell at the cursor and step back one cell.
    pub fn clear_letter(&mut self) {
        let Some(index) = self.editable_index() else {
            return;
        };
        self.state.grid[index] = CLEARED;
        self.advance(-1);
    }

    /// Move to the start of the word `offset` places away from the active
    /// word in `direction`'s clue list.
    ///
    /// No-op when the cursor is not in a word along `direction` or the
    /// target falls outside the list.
    pub fn jump_to_clue(&mut self, direction: Direction, offset: isize) {
        let Position { x, y } = self.state.cursor;
        let current = self.layout.word(x, y, direction);
        if current == 0 {
            return;
        }
        let list = self.layout.clues(direction);
        let Some(target) = list
            .iter()
            .position(|entry| entry.number == current)
            .and_then(|pos| pos.checked_add_signed(offset))
            .and_then(|pos| list.get(pos))
        else {
            return;
        };
        self.unhighlight_word();
        self.state.direction = direction;
        self.state.cursor = target.start;
        self.highlight_word();
    }

    /// Copy the whole solution into the user grid.
    pub fn reveal_all(&mut self) {
        self.state.grid.copy_from_slice(self.puzzle.solution());
        self.state.reveal_solution = true;
    }

    /// Copy the solution letter under the cursor into the user grid.
    pub fn reveal_cell(&mut self) {
        if let Some(index) = self.editable_index() {
            self.state.grid[index] = self.puzzle.solution()[index];
        }
    }

    /// True when every white cell holds its solution letter.
    pub fn is_solved(&self) -> bool {
        self.state.grid == self.puzzle.solution()
    }

    pub fn zoom_in(&mut self) {
        self.state.zoom = self.state.zoom.saturating_add(1);
    }

    pub fn zoom_out(&mut self) {
        if self.state.zoom > MIN_ZOOM {
            self.state.zoom -= 1;
        }
    }

    /// Capture the state for persistence.
    pub fn snapshot(&self) -> Snapshot {
        let state = &self.state;
        Snapshot {
            cursor_x: state.cursor.x,
            cursor_y: state.cursor.y,
            grid: String::from_utf8_lossy(&state.grid).into_owned(),
            zoom: state.zoom,
            direction: state.direction,
            reveal_solution: state.reveal_solution,
            highlight_word_nbr: state.highlight_word,
            highlight_extent: state.highlight_extent.clone(),
            last_click: state.last_click,
        }
    }
}
