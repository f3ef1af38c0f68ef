use crate::dns_message::ResponseCode;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Truncated message: {len} bytes is shorter than the 12-byte header")]
    TruncatedMessage { len: usize },

    #[error("Truncated record: not enough bytes at offset {offset}")]
    TruncatedRecord { offset: usize },

    #[error("Invalid label length 0x{value:02X} at offset {offset}")]
    InvalidLabel { offset: usize, value: u8 },

    #[error("Domain name at offset {offset} exceeds 255 bytes")]
    NameTooLong { offset: usize },

    #[error("Malformed compression pointer at offset {offset} (target {target})")]
    MalformedPointer { offset: usize, target: usize },

    #[error("Query ID and Response ID mismatch (sent {expected}, received {actual})")]
    IdMismatch { expected: u16, actual: u16 },

    #[error("Invalid {rtype} record data: expected {expected} bytes, got {actual}")]
    InvalidRdata {
        rtype: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("{}", .0.description())]
    ServerError(ResponseCode),

    #[error("Unknown response code: {0}")]
    UnknownRcode(u8),

    #[error("Connection timed out waiting for {server}")]
    TransportTimeout { server: String },

    #[error("Transport connection refused by {server}")]
    TransportConnectionRefused { server: String },

    #[error("I/O error: {0}")]
    IoError(String),
}

impl DomainError {
    /// Numeric code shown by the presentation layer: the rcode for protocol
    /// failures, `-1` for everything else.
    pub fn error_number(&self) -> i32 {
        match self {
            DomainError::ServerError(code) => i32::from(code.code()),
            DomainError::UnknownRcode(value) => i32::from(*value),
            _ => -1,
        }
    }

    /// Failures raised while talking to the server rather than decoding its reply.
    pub fn is_transport_error(&self) -> bool {
        matches!(
            self,
            DomainError::TransportTimeout { .. }
                | DomainError::TransportConnectionRefused { .. }
                | DomainError::IoError(_)
        )
    }

    /// Failures caused by a reply that could not be decoded.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            DomainError::TruncatedMessage { .. }
                | DomainError::TruncatedRecord { .. }
                | DomainError::InvalidLabel { .. }
                | DomainError::NameTooLong { .. }
                | DomainError::MalformedPointer { .. }
                | DomainError::IdMismatch { .. }
                | DomainError::InvalidRdata { .. }
        )
    }

    pub fn is_protocol_error(&self) -> bool {
        matches!(
            self,
            DomainError::ServerError(_) | DomainError::UnknownRcode(_)
        )
    }
}
