use clap::{value_parser, Arg, ArgMatches, Command};
use log::LevelFilter;
use std::path::PathBuf;

pub const DEFAULT_WIDTH: usize = 1360;
pub const DEFAULT_HEIGHT: usize = 768;
pub const DEFAULT_FPS: u32 = 60;
pub const DEFAULT_TITLE: &str = "Spiderling: A Rudimentary Game Engine";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub width: usize,
    pub height: usize,
    /// Frame rate ceiling. Always at least 1.
    pub target_fps: u32,
    pub title: String,
    /// Freeze the noise to this seed.
    pub seed: Option<u64>,
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            target_fps: DEFAULT_FPS,
            title: DEFAULT_TITLE.to_owned(),
            seed: None,
            log_level: LevelFilter::Info,
            log_file: None,
        }
    }
}

impl Config {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        let defaults = Self::default();
        Self {
            width: matches
                .get_one::<u32>("width")
                .map(|&v| v as usize)
                .unwrap_or(defaults.width),
            height: matches
                .get_one::<u32>("height")
                .map(|&v| v as usize)
                .unwrap_or(defaults.height),
            target_fps: matches
                .get_one::<u32>("fps")
                .copied()
                .unwrap_or(defaults.target_fps),
            seed: matches.get_one::<u64>("seed").copied(),
            log_level: matches
                .get_one::<String>("log-level")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.log_level),
            log_file: matches.get_one::<PathBuf>("log-file").cloned(),
            ..defaults
        }
    }
}

pub fn create_clap_command() -> Command {
    Command::new("spiderling")
        .about("Paces a window full of random static to a target frame rate")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("width")
                .short('W')
                .long("width")
                .value_name("PIXELS")
                .help("Initial window width")
                .value_parser(value_parser!(u32).range(1..)),
        )
        .arg(
            Arg::new("height")
                .short('H')
                .long("height")
                .value_name("PIXELS")
                .help("Initial window height")
                .value_parser(value_parser!(u32).range(1..)),
        )
        .arg(
            Arg::new("fps")
                .short('f')
                .long("fps")
                .value_name("FPS")
                .help("Frame rate ceiling")
                .value_parser(value_parser!(u32).range(1..)),
        )
        .arg(
            Arg::new("seed")
                .short('s')
                .long("seed")
                .value_name("SEED")
                .help("Render the same frame of noise every tick, generated from SEED")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("log-level")
                .short('l')
                .long("log-level")
                .value_name("LEVEL")
                .help("Log verbosity")
                .value_parser(["off", "error", "warn", "info", "debug", "trace"]),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .value_name("FILE")
                .help("Also append log output to FILE")
                .value_parser(value_parser!(PathBuf)),
        )
}
