/// CLI argument definitions via clap derive.
use std::ffi::OsString;

use clap::Parser;

/// greet — say hello to the first name given, or to the World.
///
/// There are no flags: every token, including `--help`, is a name.
#[derive(Debug, Parser)]
#[command(
    name = "greet",
    about = "Print a greeting for the first name given on the command line",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Names to greet. Only the first is used.
    #[arg(
        value_name = "NAME",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub names: Vec<OsString>,
}

impl Cli {
    /// Parse a full argv (program name first) without interpreting any token.
    ///
    /// A `--` is placed ahead of the user's tokens so clap's end-of-options
    /// handling consumes ours and a user-supplied `--` stays a name.
    #[must_use]
    pub fn parse_verbatim<I>(args: I) -> Self
    where
        I: IntoIterator<Item = OsString>,
    {
        Self::parse_from(escaped(args))
    }

    /// Like [`Cli::parse_verbatim`], returning clap's error instead of exiting.
    ///
    /// # Errors
    ///
    /// Returns `clap::Error` if clap rejects the input.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn try_parse_verbatim<I>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = OsString>,
    {
        Self::try_parse_from(escaped(args))
    }
}

fn escaped<I>(args: I) -> impl Iterator<Item = OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut args = args.into_iter();
    let bin = args.next().unwrap_or_else(|| OsString::from("greet"));
    [bin, OsString::from("--")].into_iter().chain(args)
}
