//! Session error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("message text is empty")]
    EmptyMessage,

    #[error("a request is already pending for this session")]
    AlreadyPending,
}

pub type Result<T> = std::result::Result<T, SessionError>;
