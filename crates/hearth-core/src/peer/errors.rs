use crate::errors::HearthError;

#[derive(Debug, thiserror::Error)]
pub enum PeerError {
    #[error("Cannot resolve peer address '{address}:{port}'")]
    UnresolvableAddress { address: String, port: u16 },

    #[error("Failed to connect to peer {endpoint}: {message}")]
    ConnectFailed { endpoint: String, message: String },

    #[error("Failed to encode request: {message}")]
    Encode { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl HearthError for PeerError {
    fn error_code(&self) -> &'static str {
        match self {
            PeerError::UnresolvableAddress { .. } => "PEER_UNRESOLVABLE_ADDRESS",
            PeerError::ConnectFailed { .. } => "PEER_CONNECT_FAILED",
            PeerError::Encode { .. } => "PEER_ENCODE_FAILED",
            PeerError::Io(_) => "PEER_IO_ERROR",
        }
    }
}
