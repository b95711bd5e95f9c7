use std::{error, fmt::Display};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    StartEndCount,
    StartingPathCount,
    MultipleDirections,
    BrokenPath,
    InvalidStart,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::StartEndCount => write!(
                f,
                "The map must contain exactly one start '@' and one end 'x'."
            ),
            Error::StartingPathCount => {
                write!(f, "The map must contain exactly one starting path.")
            }
            Error::MultipleDirections => write!(f, "The map must have only one valid direction."),
            Error::BrokenPath => write!(f, "Path is broken or invalid."),
            Error::InvalidStart => write!(f, "Invalid starting position or map."),
        }
    }
}

impl error::Error for Error {}
