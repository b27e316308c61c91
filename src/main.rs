//! Entry point for the `assembly-harvester` CLI. It parses arguments, runs the
//! harvest, and maps errors to exit codes.

use assembly_harvester::cli;
use assembly_harvester::config::{Config, Invocation};
use assembly_harvester::error::Result;
use assembly_harvester::exit_codes;
use assembly_harvester::harvest;
use std::process::ExitCode;

fn run(args: &[String]) -> Result<()> {
    match Config::from_args(args)? {
        Invocation::Help => {
            print!("{}", cli::help_text(&cli::program_name()));
        }
        Invocation::Harvest(config) => {
            println!("{}", config);
            harvest::harvest(&config, |path| println!("{}", path.display()))?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    cli::print_logo();

    match run(&args) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Diagnostics share stdout with the rest of the report.
            println!("{}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
