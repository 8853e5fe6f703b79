use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The address could not be turned into an endpoint. Not retryable.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(#[from] tonic::transport::Error),

    /// The call failed: transport error, deadline or remote handler error.
    #[error("write failed: {0}")]
    Write(#[from] tonic::Status),
}

impl ClientError {
    /// gRPC code of a failed call.
    pub fn code(&self) -> Option<tonic::Code> {
        match self {
            ClientError::InvalidEndpoint(_) => None,
            ClientError::Write(status) => Some(status.code()),
        }
    }
}
