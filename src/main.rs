use anyhow::Result;
use cli::Cli;
use std::process::ExitCode;

mod assembly;
mod check;
mod cli;
mod config;
mod emit;
mod init;
mod sinks;
mod version;

fn main() -> ExitCode {
    if let Err(e) = try_main() {
        eprintln!("{}: {e:#}", console::style("Error").red());
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn try_main() -> Result<()> {
    use clap::Parser;
    let cli = Cli::parse();

    match &cli.command {
        cli::Commands::Init => init::run(),
        cli::Commands::Check(args) => check::run(args),
        cli::Commands::Emit(args) => emit::run(args),
    }
}
