/// The one command: greet the first name, or the World.
use crate::cli::{Cli, write_greeting};
use crate::greeting::{GreetError, Greeting};

/// Run `greet`.
///
/// # Errors
///
/// Returns `GreetError::Write` if stdout cannot be written.
pub fn run(cli: Cli) -> Result<(), GreetError> {
    let greeting = Greeting::from_args(cli.names);
    let stdout = std::io::stdout();
    write_greeting(&mut stdout.lock(), &greeting)
}
