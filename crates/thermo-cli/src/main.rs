use anyhow::Result;
use clap::Parser;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use thermo_cli::prompt::{PlainPrompter, TerminalPrompter};
use thermo_cli::session::Session;
use thermo_cli::startup::{init_logging, resolve_config, Overrides};

#[derive(Parser, Debug)]
#[clap(
    name = "thermo",
    author,
    version,
    about = "Convert temperatures between Celsius, Fahrenheit and Kelvin"
)]
struct Cli {
    #[clap(
        long,
        short,
        env = "THERMO_CONFIG",
        help = "YAML configuration file (defaults to thermo.yaml when present)"
    )]
    config: Option<PathBuf>,

    #[clap(long, short, help = "Log level: off, error, warn, info, debug or trace")]
    log_level: Option<String>,

    #[clap(long, short, help = "Decimal places shown in results")]
    precision: Option<usize>,

    #[clap(long, help = "Use line-based prompts instead of interactive menus")]
    plain: bool,
}

fn main() -> Result<()> {
    better_panic::Settings::auto().install();

    let cli = Cli::parse();
    let overrides = Overrides {
        config: cli.config,
        log_level: cli.log_level,
        precision: cli.precision,
    };

    let config = resolve_config(&overrides)?;
    init_logging(&config.logging)?;
    log::info!("Starting thermo with {:?}", config.display);

    let conversions = if cli.plain || !io::stdin().is_terminal() {
        log::info!("Using plain prompts");
        let stdin = io::stdin();
        let prompter = PlainPrompter::new(stdin.lock(), io::stdout());
        Session::new(prompter, config.display).run()?
    } else {
        Session::new(TerminalPrompter::new(), config.display).run()?
    };

    log::debug!("Exiting after {} conversion(s)", conversions);
    Ok(())
}
