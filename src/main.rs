#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! greet — print `Hello, <name>!` for the first argument, or `Hello, World!`.

mod cli;
mod commands;
mod greeting;

use cli::{Cli, write_error};

fn main() {
    let cli = Cli::parse_verbatim(std::env::args_os());

    if let Err(err) = commands::run(cli) {
        if !err.is_silent() {
            write_error(&err);
        }
        std::process::exit(err.exit_code());
    }
}
