use std::fmt;

#[derive(Debug)]
pub(crate) enum RegistryError {
    Unreachable(String),
    Rejected(u16, String),
    InvalidResponse(String),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::Unreachable(msg) => write!(f, "Registry unreachable: {}", msg),
            RegistryError::Rejected(status, msg) => write!(f, "Registry rejected request ({}): {}", status, msg),
            RegistryError::InvalidResponse(msg) => write!(f, "Invalid registry response: {}", msg),
        }
    }
}

impl std::error::Error for RegistryError {}

impl From<reqwest::Error> for RegistryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            RegistryError::InvalidResponse(err.to_string())
        } else {
            RegistryError::Unreachable(err.to_string())
        }
    }
}
