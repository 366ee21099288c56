//! Terminal front end for the Fox and Geese engine.
//!
//! Pure presentation glue: prints the board, parses coordinates, and
//! drives the engine through the controller's public surface.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use fox_and_geese::{Cell, MatchController, Status};
use std::io::{self, BufRead, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let mut game = MatchController::new(cli.mode.to_mode());
    info!(mode = ?game.mode(), "match started");
    run(&mut game)
}

fn run(game: &mut MatchController) -> Result<()> {
    let stdin = io::stdin();
    loop {
        println!("{}", game.state().board().display());
        println!(
            "{} geese left, fox has taken {}. {} to move.",
            game.state().geese_remaining(),
            game.fox_score(),
            game.state().to_move()
        );

        match game.state().status() {
            Status::FoxWin => {
                println!("The fox wins!");
                return Ok(());
            }
            Status::GeeseWin => {
                println!("The geese win!");
                return Ok(());
            }
            Status::InProgress => {}
        }

        if game.computer_to_move() {
            let side = game.state().to_move();
            match game.request_opponent_move(side)? {
                Some(report) => {
                    println!("Computer plays {}.", report.played);
                    if let Some(cell) = report.capture {
                        println!("Goose at {} captured!", cell);
                    }
                }
                None => {
                    println!("{} cannot move.", side);
                    return Ok(());
                }
            }
            continue;
        }

        print!("move (start_row start_col end_row end_col), r to restart, q to quit> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(());
        }
        match line.trim() {
            "q" => return Ok(()),
            "r" => {
                game.reset();
            }
            input => match parse_move(input) {
                Some((start, end)) => match game.request_move(start, end) {
                    Ok(report) => {
                        if let Some(cell) = report.capture {
                            println!("Goose at {} captured!", cell);
                        }
                    }
                    Err(err) => println!("Rejected: {}.", err),
                },
                None => println!("Enter four numbers, e.g. \"2 0 3 1\"."),
            },
        }
    }
}

fn parse_move(input: &str) -> Option<(Cell, Cell)> {
    let coords: Vec<u8> = input
        .split_whitespace()
        .map(|token| token.parse().ok())
        .collect::<Option<_>>()?;
    let [a, b, c, d] = coords.as_slice() else {
        return None;
    };
    let start = Cell::new(*a, *b).ok()?;
    let end = Cell::new(*c, *d).ok()?;
    Some((start, end))
}
