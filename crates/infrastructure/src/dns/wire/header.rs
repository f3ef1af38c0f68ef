//! The fixed 12-byte message header (RFC 1035 §4.1.1).

use super::read_u16;
use nslookup_domain::{DomainError, HeaderFlags, MessageHeader, ResponseCode};

pub const HEADER_LEN: usize = 12;

pub fn decode_header(buf: &[u8]) -> Result<MessageHeader, DomainError> {
    if buf.len() < HEADER_LEN {
        return Err(DomainError::TruncatedMessage { len: buf.len() });
    }

    Ok(MessageHeader {
        id: read_u16(buf, 0)?,
        flags: HeaderFlags::from_bits(read_u16(buf, 2)?),
        question_count: read_u16(buf, 4)?,
        answer_count: read_u16(buf, 6)?,
        authority_count: read_u16(buf, 8)?,
        additional_count: read_u16(buf, 10)?,
    })
}

pub fn encode_header(header: &MessageHeader, out: &mut Vec<u8>) {
    out.extend_from_slice(&header.id.to_be_bytes());
    out.extend_from_slice(&header.flags.to_bits().to_be_bytes());
    out.extend_from_slice(&header.question_count.to_be_bytes());
    out.extend_from_slice(&header.answer_count.to_be_bytes());
    out.extend_from_slice(&header.authority_count.to_be_bytes());
    out.extend_from_slice(&header.additional_count.to_be_bytes());
}

/// `Ok` for NOERROR, otherwise the server error the code stands for.
pub fn classify_rcode(rcode: u8) -> Result<(), DomainError> {
    match ResponseCode::from_u8(rcode) {
        Some(ResponseCode::NoError) => Ok(()),
        Some(code) => Err(DomainError::ServerError(code)),
        None => Err(DomainError::UnknownRcode(rcode)),
    }
}
