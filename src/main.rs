//! wisp command-line interface.
//!
//! This is the main entry point for the `wisp` command.

use clap::{Parser, Subcommand};

use wisp::repl::{self, Stage};

#[derive(Debug, Parser)]
#[command(name = "wisp")]
#[command(version, about = "Front end for the wisp scripting language", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Start the interactive shell
    Repl {
        /// Pipeline stage to run each line through
        #[arg(long, value_enum, default_value_t = Stage::Parser)]
        stage: Stage,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Repl { stage } => repl::start(stage),
    };

    if let Err(error) = result {
        eprintln!("{error}");
        std::process::exit(1);
    }
}
