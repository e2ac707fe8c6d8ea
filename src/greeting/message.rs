/// The greeting itself: generic or addressed to a name.
use std::ffi::OsString;
use std::fmt;

/// What gets printed. Built from the positional arguments, first one wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Greeting {
    /// No name was given.
    World,
    /// Greet this name verbatim (may be empty).
    Named(String),
}

impl Greeting {
    /// Build from the user-supplied arguments (program name already removed).
    ///
    /// Only the first argument is used. Non-UTF-8 input is converted lossily.
    #[must_use]
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = OsString>,
    {
        match args.into_iter().next() {
            Some(name) => Self::Named(name.to_string_lossy().into_owned()),
            None => Self::World,
        }
    }
}

impl fmt::Display for Greeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::World => f.write_str("Hello, World!"),
            Self::Named(name) => write!(f, "Hello, {name}!"),
        }
    }
}
