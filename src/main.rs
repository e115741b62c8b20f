//! Terminal front-end: seeds a board, plays it until it settles and prints
//! the result. Only the change lists reported by the engine are applied to
//! the local text board after the initial full paint.

use std::error::Error;

use life_engine::{CellChange, PlayState, Repaint, Session, SessionConfig};
use rand::{SeedableRng, rngs::StdRng};

const DEFAULT_GENERATIONS: u64 = 200;

/// Text copy of the board, kept in sync from repaint events only.
struct TextBoard {
    columns: usize,
    cells: Vec<bool>,
}

impl TextBoard {
    fn new(rows: usize, columns: usize) -> Self {
        Self {
            columns,
            cells: vec![false; rows * columns],
        }
    }

    fn apply(&mut self, changes: &[CellChange]) {
        for change in changes {
            self.cells[change.row * self.columns + change.column] = change.is_alive;
        }
    }

    fn repaint(&mut self, repaint: &Repaint) {
        match repaint {
            Repaint::Full(cells) | Repaint::Partial(cells) => self.apply(cells),
            Repaint::Single(cell) => self.apply(std::slice::from_ref(cell)),
        }
    }

    fn render(&self) -> String {
        self.cells
            .chunks(self.columns)
            .map(|row| row.iter().map(|&alive| if alive { '#' } else { '.' }).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn parse_arg<T>(args: &[String], idx: usize) -> Result<Option<T>, Box<dyn Error>>
where
    T: std::str::FromStr,
    T::Err: Error,
{
    args.get(idx)
        .map(|s| {
            s.parse::<T>().map_err(|e| -> Box<dyn Error> {
                format!("argument {idx} ({s:?}): {e}").into()
            })
        })
        .transpose()
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    // life_engine [rows] [columns] [generations] [seed]
    let args: Vec<String> = std::env::args().collect();
    let defaults = SessionConfig::default();
    let config = SessionConfig {
        rows: parse_arg(&args, 1)?.unwrap_or(defaults.rows),
        columns: parse_arg(&args, 2)?.unwrap_or(defaults.columns),
        ..defaults
    };
    let generations: u64 = parse_arg(&args, 3)?.unwrap_or(DEFAULT_GENERATIONS);
    let seed: Option<u64> = parse_arg(&args, 4)?;

    let mut session = Session::new(config)?;
    log::info!("starting {}x{} board", config.rows, config.columns);

    let mut board = TextBoard::new(config.rows, config.columns);
    let initial = match seed {
        Some(seed) => session.randomize_with(&mut StdRng::seed_from_u64(seed)),
        None => session.randomize(),
    };
    board.repaint(&initial);
    println!("Generation 0\n{}\n", board.render());

    while session.generation() < generations {
        let repaint = session.step_once();
        if let Repaint::Partial(changes) = &repaint {
            log::debug!("generation {}: {} changes", session.generation(), changes.len());
        }
        board.repaint(&repaint);
        if session.play_state() == PlayState::Stable {
            break;
        }
    }

    println!("Generation {}\n{}", session.generation(), board.render());
    if session.play_state() == PlayState::Stable {
        println!("Stable state reached");
    }
    println!("Last step: {:?}", session.last_step_time());
    Ok(())
}
