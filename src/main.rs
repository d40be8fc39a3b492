use log::{error, info};
use simplelog::{ColorChoice, CombinedLogger, SharedLogger, TermLogger, TerminalMode, WriteLogger};
use spiderling::error::report;
use spiderling::{create_clap_command, run, App, Config, MinifbHost, Noise};
use std::fs::OpenOptions;
use std::process::ExitCode;
use std::time::Instant;

fn init_logging(config: &Config) -> spiderling::Result<()> {
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        config.log_level,
        simplelog::Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];

    if let Some(path) = &config.log_file {
        let log_file = OpenOptions::new().create(true).append(true).open(path)?;
        loggers.push(WriteLogger::new(
            config.log_level,
            simplelog::Config::default(),
            log_file,
        ));
    }

    CombinedLogger::init(loggers)?;
    Ok(())
}

fn run_window(config: &Config) -> spiderling::Result<()> {
    let painter = match config.seed {
        Some(seed) => {
            info!("Freezing noise to seed {}", seed);
            Noise::frozen(seed)
        }
        None => Noise::random(),
    };

    info!("Initializing window");
    let mut host = MinifbHost::new(config)?;
    let mut app = App::new(config, painter, Instant::now())?;
    run(&mut app, &mut host)
}

fn main() -> ExitCode {
    let matches = create_clap_command().get_matches();
    let config = Config::from_matches(&matches);
    if let Err(e) = init_logging(&config) {
        eprintln!("{}", report(&e));
        return ExitCode::FAILURE;
    }

    match run_window(&config) {
        Ok(()) => {
            info!("Shutting down");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", report(&e));
            ExitCode::FAILURE
        }
    }
}
