//! Domain Layer - Core Entity Trait
//!
//! Every record the list state holds has a server-assigned unique ID.

/// Core trait for records kept in list state
pub trait Entity: Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash + std::fmt::Debug;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Common result type for remote service calls
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Remote service errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The request never produced a response
    Transport(String),
    /// The server answered with a non-2xx status
    Status { status: u16, body: String },
    /// The response body was not the expected shape
    Decode(String),
}

impl ServiceError {
    /// HTTP status, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ServiceError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceError::Transport(msg) => write!(f, "Transport error: {}", msg),
            ServiceError::Status { status, body } if body.is_empty() => {
                write!(f, "Server responded {}", status)
            }
            ServiceError::Status { status, body } => {
                write!(f, "Server responded {}: {}", status, body)
            }
            ServiceError::Decode(msg) => write!(f, "Unexpected response: {}", msg),
        }
    }
}

impl std::error::Error for ServiceError {}
