//! `deckcat` - CLI for assembling the workshop slide deck
//!
//! With no arguments, prints the concatenated sections to stdout.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use deckcat::cli::{BuildArgs, Cli, Command, ConfigCommand};
use deckcat::{init_logging, output, Config};

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbosity());

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> deckcat::Result<()> {
    match cli.command {
        None => handle_build(cli.config, &cli.build),
        Some(Command::Build(build_args)) => handle_build(cli.config, &build_args),
        Some(Command::Config(config_cmd)) => handle_config(cli.config, config_cmd),
    }
}

fn handle_build(config_path: Option<PathBuf>, args: &BuildArgs) -> deckcat::Result<()> {
    let mut config = Config::load_from(config_path)?;
    args.apply(&mut config);
    config.validate()?;

    let document = output::assemble(&config, args.format)?;

    match &args.output {
        Some(path) => output::write_file(path, &document),
        None => output::emit(&document, &mut std::io::stdout().lock()),
    }
}

fn handle_config(config_path: Option<PathBuf>, cmd: ConfigCommand) -> deckcat::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            let config = Config::load_from(config_path)?;
            config.validate()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Deck]");
                println!("  Base directory:     {}", config.deck.base_dir.display());
                println!("  Separator:          {:?}", config.deck.separator);
                println!("  Sections:");
                for section in &config.deck.sections {
                    println!("    - {section}");
                }
                println!();
                println!("[Remark]");
                println!("  Title:              {}", config.remark.title);
                match &config.remark.template {
                    Some(path) => println!("  Template:           {}", path.display()),
                    None => println!("  Template:           (built-in)"),
                }
            }
        }
        ConfigCommand::Path => {
            let path = config_path.unwrap_or_else(Config::default_config_path);
            println!("{}", path.display());
        }
        ConfigCommand::Validate { file } => {
            let path = file
                .or(config_path)
                .unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            Config::load_file(&path)?;
            println!("Configuration is valid.");
        }
    }
    Ok(())
}
