use std::{path::PathBuf, process::ExitCode};

use anyhow::Result;
use clap::{Parser, Subcommand};
use emitter_config::{
    commands::{check::check_file, convert::convert_file, show::show_file},
    formats::Variant,
};

#[derive(Debug, Subcommand)]
enum Command {
    /// Decode a config file and print its fields
    Show {
        /// Path to the config file
        path: PathBuf,

        /// Print the decoded parameters as JSON
        #[arg(long)]
        json: bool,
    },
    /// Decode a config file and report every diagnostic
    Check {
        /// Path to the config file
        path: PathBuf,
    },
    /// Re-encode a config file in the named variant
    Convert {
        /// Path to the config file to read
        input: PathBuf,

        /// Path to write the converted file to
        output: PathBuf,

        /// Record name for the output; defaults to the input's record name
        /// or its file stem
        #[arg(long)]
        name: Option<String>,
    },
}

/// Inspect and convert emitter config files.
#[derive(Parser, Debug)]
#[command(name = "emitter_config")]
#[clap(version)]
struct Cli {
    /// Format variant of the input file (flat or named)
    #[arg(long, default_value = "named")]
    variant: Variant,

    #[command(subcommand)]
    command: Command,
}

fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Command::Show { path, json } => {
            show_file(&path, cli.variant, json)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Check { path } => {
            let diagnostics = check_file(&path, cli.variant)?;
            Ok(if diagnostics == 0 {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Command::Convert {
            input,
            output,
            name,
        } => {
            convert_file(&input, &output, cli.variant, name.as_deref())?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn main() -> Result<ExitCode> {
    env_logger::init();

    let cli = Cli::parse();

    run(cli)
}
