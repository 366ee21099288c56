//! Command-line interface for the fox_and_geese binary.

use clap::{Parser, ValueEnum};
use fox_and_geese::GameMode;

/// Fox and Geese - a dark-square board game in the terminal
#[derive(Parser, Debug)]
#[command(name = "fox_and_geese")]
#[command(about = "Fox and Geese played in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Who controls each side
    #[arg(short, long, value_enum, default_value_t = ModeArg::Geese)]
    pub mode: ModeArg,
}

/// Selectable game modes.
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum ModeArg {
    /// Two humans at one keyboard
    Pvp,
    /// You play the geese, the computer plays the fox
    Geese,
    /// You play the fox, the computer plays the geese
    Fox,
}

impl ModeArg {
    /// Maps the CLI flag onto the engine's game mode.
    pub fn to_mode(self) -> GameMode {
        match self {
            ModeArg::Pvp => GameMode::PvP,
            ModeArg::Geese => GameMode::PveGeese,
            ModeArg::Fox => GameMode::PveFox,
        }
    }
}
