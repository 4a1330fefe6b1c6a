use thiserror::Error;

/// Startup failures. Both are fatal: the binaries return them from `main`.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server stopped: {0}")]
    Serve(#[source] std::io::Error),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
