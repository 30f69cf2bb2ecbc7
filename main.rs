/* Copyright 2018, 2023 Torbjørn Birch Moltu
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <http://www.gnu.org/licenses/>.
 */

#![cfg_attr(windows, windows_subsystem = "windows")]

use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use rand::SeedableRng;
use rand::rngs::StdRng;
use simple_logger::SimpleLogger;

use game::{DartGame, TargetGame, Variant};

#[derive(Debug, Clone,Copy, PartialEq,Eq, ValueEnum)]
enum Which {
    /// Hit a new target every second, up to 100 points
    Reflex,
    /// Start screen, slower targets and points for hitting the center
    Bullseye,
    /// Move a dart with the arrow keys, throw with s, re-arm with c, quit with 0
    Darts,
}

#[derive(Debug, Parser)]
#[command(version, about)]
struct Options {
    #[arg(value_enum, default_value_t = Which::Bullseye)]
    game: Which,
    /// Time to hit each target, instead of the game's default
    #[arg(long, value_name = "MS")]
    tick_ms: Option<u64>,
    /// Seed for target positions, to get the same sequence every time
    #[arg(long)]
    seed: Option<u64>,
    /// TrueType font to draw text with
    #[arg(long, env = "TARGET_GAMES_FONT")]
    font: Option<PathBuf>,
    #[arg(long, default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,
}

impl Options {
    /// `None` for games that aren't about targets.
    fn variant(&self) -> Option<Variant> {
        let mut variant = match self.game {
            Which::Reflex => Variant::REFLEX,
            Which::Bullseye => Variant::BULLSEYE,
            Which::Darts => return None,
        };
        if let Some(ms) = self.tick_ms {
            variant.interval = Duration::from_millis(ms);
        }
        Some(variant)
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

fn main() {
    let options = Options::parse();
    if let Err(e) = SimpleLogger::new().with_level(options.log_level).init() {
        eprintln!("cannot initialize logging: {}", e);
    }
    log::debug!("{:?}", options);

    let font = options.font.as_deref();
    let result = match options.variant() {
        Some(variant) => {
            let target_game = TargetGame::new(variant, options.rng());
            engine::start(target_game, game::target::NAME, game::target::INITIAL_SIZE, font)
        }
        None => engine::start(DartGame::new(), game::dart::NAME, game::dart::INITIAL_SIZE, font),
    };
    if let Err(e) = result {
        log::error!("{}", e);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use rand::Rng;

    #[test]
    fn command_is_valid() {
        Options::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let options = Options::try_parse_from(["target_games"]).unwrap();
        assert_eq!(options.game, Which::Bullseye);
        assert_eq!(options.variant(), Some(Variant::BULLSEYE));
        assert_eq!(options.log_level, LevelFilter::Info);
    }

    #[test]
    fn darts_have_no_variant() {
        let options = Options::try_parse_from(["target_games", "darts"]).unwrap();
        assert_eq!(options.variant(), None);
    }

    #[test]
    fn tick_override() {
        let options = Options::try_parse_from(["target_games", "reflex", "--tick-ms", "250"]).unwrap();
        let variant = options.variant().unwrap();
        assert_eq!(variant.interval, Duration::from_millis(250));
        assert_eq!(variant.scoring, Variant::REFLEX.scoring);
    }

    #[test]
    fn seed_repeats() {
        let options = Options::try_parse_from(["target_games", "--seed", "42"]).unwrap();
        let a: u64 = options.rng().gen();
        let b: u64 = options.rng().gen();
        assert_eq!(a, b);
    }

    #[test]
    fn unknown_game() {
        assert!(Options::try_parse_from(["target_games", "pong"]).is_err());
    }

    #[test]
    fn log_level() {
        let options = Options::try_parse_from(["target_games", "--log-level", "debug"]).unwrap();
        assert_eq!(options.log_level, LevelFilter::Debug);
    }
}
