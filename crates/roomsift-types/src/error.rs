use std::fmt;

/// Result type for roomsift-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A control or field value is not one of the accepted spellings
    InvalidValue { field: &'static str, value: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidValue { field, value } => {
                write!(f, "Invalid value for {}: {:?}", field, value)
            }
        }
    }
}

impl std::error::Error for Error {}
