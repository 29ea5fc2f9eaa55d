//! Steam shortcuts CLI.

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use clap::{ColorChoice, Parser};
use steamvdf_cli::cli::{Cli, Command, GridCommand, LogFormatArg, LogLevelArg, ReadArgs};
use steamvdf_cli::commands::{
    run_dump, run_grid_add, run_grid_remove, run_installed, run_legacy_id, run_read, run_update,
    run_users,
};
use steamvdf_cli::logging::{LogConfig, LogFormat, init_logging};
use tracing::level_filters::LevelFilter;

mod output;

use crate::output::{
    print_dump, print_grid_add, print_grid_remove, print_installed, print_shortcuts,
    print_shortcuts_json, print_update, print_users,
};

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        return ExitCode::FAILURE;
    }
    match run(cli.command) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> anyhow::Result<ExitCode> {
    match command {
        Command::Read(args) => read(&args)?,
        Command::Dump(args) => {
            let partial = run_dump(&args)?;
            print_dump(&partial);
            if !partial.is_complete() {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Update(args) => print_update(run_update(&args)?),
        Command::Users(args) => print_users(&run_users(&args)?),
        Command::Installed => {
            let data_dir = run_installed();
            print_installed(data_dir.as_deref());
            if data_dir.is_none() {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Grid(GridCommand::Add(args)) => print_grid_add(&run_grid_add(&args)?),
        Command::Grid(GridCommand::Remove(args)) => print_grid_remove(&run_grid_remove(&args)?),
        Command::LegacyId(args) => println!("{}", run_legacy_id(&args)),
    }
    Ok(ExitCode::SUCCESS)
}

fn read(args: &ReadArgs) -> anyhow::Result<()> {
    let shortcuts = run_read(args)?;
    if args.json {
        print_shortcuts_json(&shortcuts)?;
    } else {
        print_shortcuts(&shortcuts);
    }
    Ok(())
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
