//! Main application entry point.

use clap::Parser;
use pointsketch_app::{App, AppError, CommandReference, OutputFormat, script};
use pointsketch_core::SessionConfig;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "pointsketch", version, about = "Replay point-editing gestures against a session")]
struct Cli {
    #[arg(help = "Session configuration file (JSON).", long)]
    config: Option<PathBuf>,

    #[arg(help = "Gesture script to replay (JSON lines or a JSON array).", long)]
    script: Option<PathBuf>,

    #[arg(help = "Print frames as JSON lines.", long, default_value_t = false)]
    json: bool,

    #[arg(help = "List script commands and exit.", long, default_value_t = false)]
    list_commands: bool,
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let config = match &cli.config {
        Some(path) => SessionConfig::load(path)?,
        None => SessionConfig::default(),
    };
    let commands = match &cli.script {
        Some(path) => script::load(path)?,
        None => Vec::new(),
    };
    let format = if cli.json { OutputFormat::Json } else { OutputFormat::Text };

    let mut app = App::new(config, format);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    app.run(&commands, &mut out)?;
    out.flush().map_err(script::ScriptError::from)?;
    app.shutdown();
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    if cli.list_commands {
        CommandReference::print_all();
        return ExitCode::SUCCESS;
    }

    log::info!("Starting PointSketch");
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{}", err);
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
