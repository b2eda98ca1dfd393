//! rsprite - Command-line tool for rendering and packing the unicorn sprite set

use std::process::ExitCode;

use retrosprite::cli;

fn main() -> ExitCode {
    cli::run()
}
