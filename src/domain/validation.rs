use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    Missing { variable: &'static str },
    InvalidBaseUrl { input: String, reason: String },
    InvalidResource { input: String, reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::Missing { variable } => {
                write!(f, "environment variable {variable} is not set")
            }
            Self::InvalidBaseUrl { input, reason } => {
                write!(f, "invalid base URL {input:?}: {reason}")
            }
            Self::InvalidResource { input, reason } => {
                write!(f, "invalid resource {input:?}: {reason}")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
