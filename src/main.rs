use clap::Parser;
use std::process::ExitCode;

use gitcc::Cli;

fn main() -> ExitCode {
    Cli::parse().run()
}
