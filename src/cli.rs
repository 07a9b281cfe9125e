use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generates a guide-config.toml config file
    Init,
    /// Checks the configuration and prints the values derived from it
    Check(SourceArgs),
    /// Assembles the renderer settings mapping and writes it as JSON
    Emit(EmitArgs),
}

#[derive(Args, Debug)]
pub struct SourceArgs {
    /// Root of the guide source tree
    #[clap(long, default_value = ".")]
    pub source_dir: PathBuf,
}

#[derive(Args, Debug)]
pub struct EmitArgs {
    /// Root of the guide source tree
    #[clap(long, default_value = ".")]
    pub source_dir: PathBuf,
    /// Write the mapping to this file instead of stdout
    #[clap(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
#[clap(author, version, about)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}
