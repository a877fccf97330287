//! Terminal chess driver
//!
//! Owns one game, reads coordinate moves from stdin for human sides and
//! asks the search engine for AI sides.

mod command;

use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use chess_core::{format_move_log, legal_moves, parse_move, Color, GameState, Outcome};
use clap::{Parser, ValueEnum};
use classical_engine::{find_move, SearchConfig, Strategy};
use log::info;

use command::{Command, HELP};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Player {
    Human,
    Ai,
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Arguments {
    /// Who plays white
    #[arg(long, value_enum, default_value_t = Player::Human)]
    white: Player,
    /// Who plays black
    #[arg(long, value_enum, default_value_t = Player::Ai)]
    black: Player,
    /// Search strategy: random, greedy, minimax, negamax or negamax-alpha-beta
    #[arg(short, long)]
    strategy: Option<Strategy>,
    /// Search depth in plies
    #[arg(short, long)]
    depth: Option<u8>,
    /// TOML file with `strategy` and `depth`; flags override it
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Stop an AI-only game after this many plies
    #[arg(long, default_value_t = 200)]
    max_plies: usize,
}

impl Arguments {
    fn player(&self, color: Color) -> Player {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    fn search_config(&self) -> Result<SearchConfig, Box<dyn Error>> {
        let mut config = match &self.config {
            Some(path) => SearchConfig::load(path)?,
            None => SearchConfig::default(),
        };
        if let Some(strategy) = self.strategy {
            config.strategy = strategy;
        }
        if let Some(depth) = self.depth {
            config.depth = depth;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Arguments::parse();
    env_logger::init();

    let config = args.search_config()?;
    info!("searching with {} at depth {}", config.strategy, config.depth);

    let humans = args.white == Player::Human || args.black == Player::Human;
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut stdout = io::stdout();
    let mut state = GameState::new_game();
    let mut show_board = true;

    loop {
        let moves = legal_moves(&mut state);
        if show_board {
            println!("\n{state}\n");
        }
        show_board = true;

        let outcome = state.outcome();
        if outcome != Outcome::Ongoing {
            println!("{outcome}");
            println!("{}", format_move_log(state.move_log()));
            if !humans {
                break;
            }
        }

        let to_move = state.side_to_move();
        if outcome == Outcome::Ongoing && args.player(to_move) == Player::Ai {
            if !humans && state.move_log().len() >= args.max_plies {
                println!("Stopping after {} plies", args.max_plies);
                println!("{}", format_move_log(state.move_log()));
                break;
            }
            if let Some(mv) = find_move(&mut state, &moves, config.strategy, config.depth) {
                println!("{to_move} plays {mv}");
                state.apply_move(mv);
            }
            continue;
        }

        print!("{to_move} to move> ");
        stdout.flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let Some(cmd) = Command::parse(&line?) else {
            show_board = false;
            continue;
        };

        match cmd {
            Command::Quit => break,
            Command::Help => {
                println!("{HELP}");
                show_board = false;
            }
            Command::Moves => {
                let list: Vec<String> = moves.iter().map(|m| m.coordinates()).collect();
                println!("{}", list.join(" "));
                show_board = false;
            }
            Command::Reset => state = GameState::new_game(),
            Command::Undo => {
                // Take back the AI's reply too, so the human is to move again
                state.undo_move();
                while !state.move_log().is_empty()
                    && args.player(state.side_to_move()) == Player::Ai
                {
                    state.undo_move();
                }
            }
            Command::Move(text) => {
                if outcome != Outcome::Ongoing {
                    println!("The game is over; undo or reset to continue");
                    show_board = false;
                    continue;
                }
                match parse_move(&mut state, &text) {
                    Some(mv) => state.apply_move(mv),
                    None => {
                        println!("Illegal move: {text} (type 'help' for commands)");
                        show_board = false;
                    }
                }
            }
        }
    }

    Ok(())
}
