use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    InvalidCatalog(String),
    IndexOutOfRange { index: usize, len: usize },
    Io(String),
    Decode(String),
    Config(String),
    Ui(String),
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCatalog(msg) => write!(f, "invalid catalog: {msg}"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "artwork index {index} is out of range (catalog has {len})")
            }
            Self::Io(msg) => write!(f, "io error: {msg}"),
            Self::Decode(msg) => write!(f, "decode error: {msg}"),
            Self::Config(msg) => write!(f, "config error: {msg}"),
            Self::Ui(msg) => write!(f, "ui error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_message_names_index_and_len() {
        let error = AppError::IndexOutOfRange { index: 7, len: 5 };
        assert_eq!(
            error.to_string(),
            "artwork index 7 is out of range (catalog has 5)"
        );
    }
}
