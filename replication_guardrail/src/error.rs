// error.rs

use std::fmt;

// Define los tipos de errores
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorType {
    InvalidReplicationFactor(String),
    InvalidConfig(String),
    Io(String),
}

// Implementa fmt::Display para ErrorType
impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorType::InvalidReplicationFactor(description) => {
                write!(f, "Invalid replication factor: {}", description)
            }
            ErrorType::InvalidConfig(description) => {
                write!(f, "Invalid configuration: {}", description)
            }
            ErrorType::Io(description) => write!(f, "I/O error: {}", description),
        }
    }
}

// Implementa el trait std::error::Error para ErrorType
impl std::error::Error for ErrorType {}

impl From<std::io::Error> for ErrorType {
    fn from(error: std::io::Error) -> Self {
        ErrorType::Io(error.to_string())
    }
}

impl From<serde_json::Error> for ErrorType {
    fn from(error: serde_json::Error) -> Self {
        ErrorType::InvalidConfig(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_incluye_la_descripcion() {
        let error = ErrorType::InvalidReplicationFactor("FOOBAR".to_string());
        assert_eq!(error.to_string(), "Invalid replication factor: FOOBAR");
    }

    #[test]
    fn test_io_error_se_convierte() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no existe");
        let error: ErrorType = io.into();
        assert_eq!(error, ErrorType::Io("no existe".to_string()));
    }
}
