//! CLI entry point.

use std::process::ExitCode;

use anyhow::Result;
use clap::{CommandFactory, Parser};

use murloc_cli::{
    Cli, CliConfig, Commands, bootstrap, exit_code_for, handlers, init_logging, load_env_files,
};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let env_problems = load_env_files();
    init_logging(cli.verbose);
    for problem in env_problems {
        tracing::warn!("{problem}");
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(exit_code_for(&err))
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = CliConfig {
        config_file: cli.config,
    };

    // `set` validates its own candidate, so it must work even when the
    // current configuration does not load.
    let ctx = || bootstrap(&config);

    match command {
        Commands::Set { field, value } => handlers::set::execute(&config, field, &value),
        Commands::Show { json } => handlers::show::execute(&ctx()?, json),
        Commands::Check => handlers::check::execute(&ctx()?),
        Commands::Paths => handlers::paths::execute(&ctx()?),
        Commands::Locale { requested } => {
            handlers::locale::execute(&ctx()?, requested.as_deref())
        }
    }
}
