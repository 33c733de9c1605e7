//! Builds .puz buffers in memory with valid checksums.

#![allow(dead_code)]

use puz_reader::checksum;

pub struct PuzBuilder {
    pub width: u8,
    pub height: u8,
    pub solution: String,
    pub grid: Option<String>,
    pub title: String,
    pub author: String,
    pub copyright: String,
    pub clues: Vec<String>,
    pub notes: Option<String>,
    pub sections: Vec<(String, Vec<u8>)>,
    pub version: String,
    pub scrambled_tag: u16,
}

impl PuzBuilder {
    /// `rows` are the solution rows; every row must have the same length.
    pub fn new(rows: &[&str]) -> Self {
        Self {
            width: rows.first().map_or(0, |r| r.len()) as u8,
            height: rows.len() as u8,
            solution: rows.concat(),
            grid: None,
            title: "Test Puzzle".to_string(),
            author: "A. Setter".to_string(),
            copyright: "(c) Nobody".to_string(),
            clues: Vec::new(),
            notes: Some(String::new()),
            sections: Vec::new(),
            version: "1.3".to_string(),
            scrambled_tag: 0,
        }
    }

    pub fn clues(mut self, clues: &[&str]) -> Self {
        self.clues = clues.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn grid(mut self, grid: &str) -> Self {
        self.grid = Some(grid.to_string());
        self
    }

    pub fn notes(mut self, notes: Option<&str>) -> Self {
        self.notes = notes.map(str::to_string);
        self
    }

    pub fn section(mut self, name: &str, payload: Vec<u8>) -> Self {
        self.sections.push((name.to_string(), payload));
        self
    }

    /// Empty user grid matching the solution's black squares.
    pub fn blank_grid(&self) -> String {
        self.solution
            .chars()
            .map(|c| if c == '.' { '.' } else { '-' })
            .collect()
    }

    pub fn build(&self) -> Vec<u8> {
        let grid = self.grid.clone().unwrap_or_else(|| self.blank_grid());
        let mut bytes = vec![0u8; 52];
        bytes[2..14].copy_from_slice(b"ACROSS&DOWN\0");
        let version = self.version.as_bytes();
        bytes[24..24 + version.len()].copy_from_slice(version);
        bytes[44] = self.width;
        bytes[45] = self.height;
        bytes[46..48].copy_from_slice(&(self.clues.len() as u16).to_le_bytes());
        bytes[48..50].copy_from_slice(&1u16.to_le_bytes());
        bytes[50..52].copy_from_slice(&self.scrambled_tag.to_le_bytes());

        let cib = checksum::region(&bytes[44..52], 0);
        bytes[14..16].copy_from_slice(&cib.to_le_bytes());
        let file = checksum::chain([self.solution.as_bytes(), grid.as_bytes()], cib);
        bytes[0..2].copy_from_slice(&file.to_le_bytes());

        bytes.extend_from_slice(self.solution.as_bytes());
        bytes.extend_from_slice(grid.as_bytes());
        for s in [&self.title, &self.author, &self.copyright]
            .into_iter()
            .chain(self.clues.iter())
        {
            bytes.extend_from_slice(s.as_bytes());
            bytes.push(0);
        }
        if let Some(notes) = &self.notes {
            bytes.extend_from_slice(notes.as_bytes());
            bytes.push(0);
        }
        for (name, payload) in &self.sections {
            bytes.extend_from_slice(name.as_bytes());
            bytes.extend_from_slice(&(payload.len() as u16).to_le_bytes());
            bytes.extend_from_slice(&checksum::region(payload, 0).to_le_bytes());
            bytes.extend_from_slice(payload);
            bytes.push(0);
        }
        bytes
    }
}

/// 5x5 grid with black corners used across the test suites.
///
/// ```text
/// . A B C .
/// D E F G H
/// I J . K L
/// M N O P Q
/// . R S T .
/// ```
pub const CORNERS: &[&str] = &[".ABC.", "DEFGH", "IJ.KL", "MNOPQ", ".RST."];

/// Clue strings for [`CORNERS`] in scan order.
///
/// Across: 1 ABC, 4 DEFGH, 6 IJ, 7 KL, 8 MNOPQ, 10 RST.
/// Down: 1 AEJNR, 2 BF, 3 CGKPT, 4 DIM, 5 HLQ, 9 OS.
pub const CORNERS_CLUES: &[&str] = &[
    "1 across", "1 down", "2 down", "3 down", "4 across", "4 down", "5 down", "6 across",
    "7 across", "8 across", "9 down", "10 across",
];

pub fn corners() -> PuzBuilder {
    PuzBuilder::new(CORNERS).clues(CORNERS_CLUES)
}
