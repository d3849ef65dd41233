use clap::Parser;
use grammarfix::cli::{run, Cli, CliCommand};
use grammarfix::logging::{init_logging, init_stderr_logging};
use std::process::ExitCode;

fn main() -> ExitCode {
    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = cli.to_config();
    let command = cli.command.clone().unwrap_or(CliCommand::Tui);

    // The UI owns the terminal, so interactive runs log to a file.
    if command == CliCommand::Tui {
        init_logging(&config.log)?;
    } else {
        init_stderr_logging(&config.log)?;
    }

    run(command, &config)?;
    Ok(())
}
