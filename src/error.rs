use std::fmt;
use std::num::ParseIntError;

/// Reasons a line of driver input could not be turned into a command.
#[derive(Debug)]
pub enum Error {
    EmptyCommand,
    UnknownCommand(String),
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    InvalidNumber {
        token: String,
        source: ParseIntError,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyCommand => write!(f, "empty command"),
            Error::UnknownCommand(name) => write!(f, "unrecognized command \"{}\"", name),
            Error::MissingArgument { command, argument } => {
                write!(f, "{} expects an argument <{}>", command, argument)
            }
            Error::InvalidNumber { token, source } => {
                write!(f, "\"{}\" is not a valid number: {}", token, source)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InvalidNumber { source, .. } => Some(source),
            _ => None,
        }
    }
}
