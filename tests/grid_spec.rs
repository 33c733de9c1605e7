mod common;

use common::{PuzBuilder, corners};
use puz_reader::{ClueIndex, Direction, GridModel, Position, Puzzle, starts_across, starts_down};

fn decode(builder: &PuzBuilder) -> Puzzle {
    Puzzle::from_bytes(&builder.build()).expect("decode")
}

#[test]
fn single_row_is_one_across_word() {
    let puzzle = decode(&PuzBuilder::new(&["ABCDE"]).clues(&["Vowels and friends"]));
    assert!(starts_across(&puzzle, 0, 0));
    for x in 1..5 {
        assert!(!starts_across(&puzzle, x, 0), "x={} should not start a word", x);
    }
    for x in 0..5 {
        assert!(!starts_down(&puzzle, x, 0));
    }

    let layout = GridModel::build(&puzzle);
    assert_eq!(layout.across_words(), &[1, 1, 1, 1, 1]);
    assert_eq!(layout.down_words(), &[0, 0, 0, 0, 0]);
    assert_eq!(layout.number(0, 0), Some(1));
    assert_eq!(layout.number(1, 0), None);
    assert_eq!(layout.across_clues().len(), 1);
    assert!(layout.down_clues().is_empty());
}

#[test]
fn single_cell_has_no_word() {
    let puzzle = decode(&PuzBuilder::new(&["A"]));
    assert!(!starts_across(&puzzle, 0, 0));
    assert!(!starts_down(&puzzle, 0, 0));

    let layout = GridModel::build(&puzzle);
    assert_eq!(layout.number(0, 0), None);
    assert_eq!(layout.across_word(0, 0), 0);
    assert_eq!(layout.down_word(0, 0), 0);
    assert!(layout.across_clues().is_empty());
    assert!(layout.down_clues().is_empty());
}

#[test]
fn two_cell_runs_are_words() {
    let puzzle = decode(&PuzBuilder::new(&["AB", "C."]).clues(&["1a", "1d"]));
    let layout = GridModel::build(&puzzle);
    assert_eq!(layout.across_words(), &[1, 1, 0, 0]);
    assert_eq!(layout.down_words(), &[1, 0, 1, 0]);
    // B is alone in its column, C alone in its row
    assert_eq!(layout.number(1, 0), None);
    assert_eq!(layout.number(0, 1), None);
}

#[test]
fn corners_numbering() {
    let puzzle = decode(&corners());
    let layout = GridModel::build(&puzzle);

    let numbers: Vec<u16> = layout.numbers().iter().map(|n| n.unwrap_or(0)).collect();
    assert_eq!(numbers, [
        0, 1, 2, 3, 0,
        4, 0, 0, 0, 5,
        6, 0, 0, 7, 0,
        8, 0, 9, 0, 0,
        0, 10, 0, 0, 0,
    ]);

    assert_eq!(layout.across_words(), &[
        0, 1, 1, 1, 0,
        4, 4, 4, 4, 4,
        6, 6, 0, 7, 7,
        8, 8, 8, 8, 8,
        0, 10, 10, 10, 0,
    ]);

    assert_eq!(layout.down_words(), &[
        0, 1, 2, 3, 0,
        4, 1, 2, 3, 5,
        4, 1, 0, 3, 5,
        4, 1, 9, 3, 5,
        0, 1, 9, 3, 0,
    ]);
}

#[test]
fn across_is_indexed_before_down() {
    let puzzle = decode(&corners());
    let layout = GridModel::build(&puzzle);

    let across: Vec<(u16, usize)> = layout.across_clues().iter().map(|e| (e.number, e.clue_index)).collect();
    let down: Vec<(u16, usize)> = layout.down_clues().iter().map(|e| (e.number, e.clue_index)).collect();
    assert_eq!(across, [(1, 0), (4, 4), (6, 7), (7, 8), (8, 9), (10, 11)]);
    assert_eq!(down, [(1, 1), (2, 2), (3, 3), (4, 5), (5, 6), (9, 10)]);

    assert_eq!(layout.across_clues()[1].start, Position::new(0, 1));
    assert_eq!(layout.down_clues()[5].start, Position::new(2, 3));
}

#[test]
fn every_white_cell_of_corners_is_in_a_word() {
    let puzzle = decode(&corners());
    let layout = GridModel::build(&puzzle);
    for y in 0..5 {
        for x in 0..5 {
            if !puzzle.is_black(x, y) {
                assert!(
                    layout.across_word(x, y) != 0 || layout.down_word(x, y) != 0,
                    "({}, {}) belongs to no word",
                    x,
                    y
                );
            }
        }
    }
}

#[test]
fn clue_text_pairs_with_numbers() {
    let puzzle = decode(&corners());
    let layout = GridModel::build(&puzzle);
    let clues = ClueIndex::new(&puzzle, &layout);

    let across: Vec<(u16, &str)> = clues.across().map(|c| (c.number, c.text)).collect();
    assert_eq!(
        across,
        [(1, "1 across"), (4, "4 across"), (6, "6 across"), (7, "7 across"), (8, "8 across"), (10, "10 across")]
    );
    for clue in clues.down() {
        assert_eq!(clue.text, format!("{} down", clue.number));
        assert_eq!(clue.direction, Direction::Down);
    }

    let nine = clues.find(Direction::Down, 9).expect("9 down");
    assert_eq!(nine.start, Position::new(2, 3));
    assert!(clues.find(Direction::Across, 9).is_none());
    assert!(clues.find(Direction::Unknown, 1).is_none());
}

#[test]
fn missing_clue_text_is_empty() {
    // Two words but only one clue in the file
    let puzzle = decode(&PuzBuilder::new(&["AB", "C."]).clues(&["only"]));
    let layout = GridModel::build(&puzzle);
    let clues = ClueIndex::new(&puzzle, &layout);
    assert_eq!(clues.find(Direction::Across, 1).map(|c| c.text), Some("only"));
    assert_eq!(clues.find(Direction::Down, 1).map(|c| c.text), Some(""));
}

#[test]
fn word_lookup_by_direction() {
    let puzzle = decode(&corners());
    let layout = GridModel::build(&puzzle);
    assert_eq!(layout.word(2, 3, Direction::Across), 8);
    assert_eq!(layout.word(2, 3, Direction::Down), 9);
    assert_eq!(layout.word(2, 3, Direction::Unknown), 0);
    assert_eq!(layout.word(7, 7, Direction::Across), 0);
    assert!(layout.clues(Direction::Unknown).is_empty());
}
