//! GM console binary entry point.

use std::io::{self, BufRead, Write};

use tracing::{error, info};

use gm_console::cli::Cli;
use gm_console::commands::run_line;
use gm_console::config::{Config, ConsoleState};
use gm_console::error::Result;
use gm_console::logging;
use gm_console::world::World;

fn main() {
    let cli = Cli::parse_args();

    // Interactive mode logs to a file so responses stay clean; one-shot mode
    // logs to stderr.
    if cli.is_interactive() {
        logging::init_file_logging();
    } else {
        logging::init_stderr_logging();
    }

    if let Err(e) = run(cli) {
        error!("{}: {}", e.category(), e);
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config_path();
    info!("Loading config from: {}", config_path.display());
    let config = Config::load_from_file(&config_path)?;
    let mut state = ConsoleState::from_config(&config);

    let world = match &cli.world {
        Some(path) => {
            info!("Loading world snapshot from: {}", path.display());
            World::load_from_file(path)?
        }
        None => {
            info!("No snapshot given, using the built-in sample world");
            World::sample()
        }
    };
    info!("World loaded: {} entities", world.entity_count());

    if cli.is_interactive() {
        run_repl(&world, &config, &mut state)
    } else {
        let input = cli.command.join(" ");
        println!("{}", run_line(&world, &config, &mut state, &input));
        Ok(())
    }
}

/// Reads commands from stdin until EOF or an exit word.
fn run_repl(world: &World, config: &Config, state: &mut ConsoleState) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("gm> ");
        let _ = stdout.flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break, // EOF
            Ok(_) => {}
            Err(e) => {
                error!("stdin read failed: {e}");
                break;
            }
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "quit" || line == "exit" {
            break;
        }

        println!("{}", run_line(world, config, state, line));
    }

    Ok(())
}
