use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;
use puz_reader::config::{CliOverrides, PuzConfig};
use puz_reader::{ClueIndex, Direction, GridModel, Navigator, Puzzle, SnapshotStore};
use simplelog::{ConfigBuilder, SimpleLogger, WriteLogger};

#[derive(Parser)]
#[command(name = "puz", about = "Inspect and solve .puz crossword files")]
struct Args {
    /// Path to the .puz file
    path: PathBuf,

    /// Show the solution instead of the stored entries
    #[arg(long)]
    reveal: bool,

    /// Navigation script: h/j/k/l step, t toggle, n/p next/previous clue,
    /// uppercase letters insert, '_' clears
    #[arg(long)]
    moves: Option<String>,

    /// Start solving heading down instead of across
    #[arg(long)]
    down: bool,

    /// Save solver state after replaying moves
    #[arg(long)]
    autosave: bool,

    /// Directory for saved solver state
    #[arg(long)]
    state_dir: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(level: LevelFilter, log_file: Option<&PathBuf>) {
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    match log_file.map(File::create) {
        Some(Ok(file)) => {
            let _ = WriteLogger::init(level, log_config, file);
        }
        Some(Err(e)) => {
            eprintln!("WARNING: could not create log file: {}", e);
            let _ = SimpleLogger::init(level, log_config);
        }
        None => {
            let _ = SimpleLogger::init(level, log_config);
        }
    }
}

fn print_grid(puzzle: &Puzzle, cells: &[u8]) {
    for row in cells.chunks(puzzle.width().max(1)) {
        let line: String = row
            .iter()
            .map(|&c| match c {
                b'.' => '■',
                b'-' | b' ' => '_',
                c => c as char,
            })
            .collect();
        println!("  {}", line);
    }
}

fn replay(nav: &mut Navigator<'_>, moves: &str) {
    for key in moves.chars() {
        match key {
            'h' => nav.step_cursor(-1, 0),
            'l' => nav.step_cursor(1, 0),
            'k' => nav.step_cursor(0, -1),
            'j' => nav.step_cursor(0, 1),
            't' => nav.toggle_direction(),
            'n' => nav.jump_to_clue(nav.direction(), 1),
            'p' => nav.jump_to_clue(nav.direction(), -1),
            '_' => nav.clear_letter(),
            c if c.is_ascii_uppercase() => nav.insert_letter(c),
            _ => log::debug!("Ignoring move '{}'", key),
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match PuzConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let cli = CliOverrides {
        log_level: match args.verbose {
            0 => None,
            1 => Some(LevelFilter::Info),
            2 => Some(LevelFilter::Debug),
            _ => Some(LevelFilter::Trace),
        },
        start_direction: args.down.then_some(Direction::Down),
        autosave: args.autosave.then_some(true),
        state_dir: args.state_dir.clone(),
    };
    let settings = config.resolve(&cli);
    init_logging(settings.log_level, args.log_file.as_ref());

    let puzzle = match Puzzle::open(&args.path) {
        Ok(puzzle) => puzzle,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let layout = GridModel::build(&puzzle);

    println!("Title: {}", puzzle.title());
    println!("Author: {}", puzzle.author());
    println!("Copyright: {}", puzzle.copyright());
    println!("Version: {}", puzzle.version());
    println!("Dimensions: {}x{}", puzzle.width(), puzzle.height());
    if let Some(notes) = puzzle.notes().filter(|n| !n.is_empty()) {
        println!("Notes: {}", notes);
    }

    let source_id = args.path.to_string_lossy().into_owned();
    let store = settings.state_dir.clone().map(SnapshotStore::new);
    let saved = store.as_ref().and_then(|s| match s.load(&source_id) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            log::warn!("Could not load saved state: {}", e);
            None
        }
    });
    let mut nav = match &saved {
        Some(snapshot) => Navigator::resume(&puzzle, &layout, snapshot),
        None => {
            let mut nav = Navigator::new(&puzzle, &layout);
            nav.set_direction(settings.start_direction);
            nav
        }
    };

    if let Some(moves) = &args.moves {
        replay(&mut nav, moves);
    }
    if args.reveal {
        nav.reveal_all();
    }

    println!("\nGrid:");
    print_grid(&puzzle, nav.grid());
    let cursor = nav.cursor();
    println!("Cursor: ({}, {}) {}", cursor.x, cursor.y, nav.direction());

    let clues = ClueIndex::new(&puzzle, &layout);
    println!("\nAcross:");
    for clue in clues.across() {
        println!("  {:>3}  {}", clue.number, clue.text);
    }
    println!("\nDown:");
    for clue in clues.down() {
        println!("  {:>3}  {}", clue.number, clue.text);
    }

    if settings.autosave && args.moves.is_some() {
        match &store {
            Some(store) => {
                if let Err(e) = store.save(&source_id, &nav.snapshot()) {
                    eprintln!("ERROR: could not save state: {}", e);
                    return ExitCode::FAILURE;
                }
            }
            None => log::warn!("Autosave requested but no state directory is available"),
        }
    }

    ExitCode::SUCCESS
}
