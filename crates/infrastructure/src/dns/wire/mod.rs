//! DNS message codec (RFC 1035 §4).
//!
//! Everything here is a pure function over an immutable byte slice. Offsets
//! are absolute positions in the message so compression pointers inside
//! RDATA resolve against the whole reply.

pub mod glue;
pub mod header;
pub mod name;
pub mod query;
pub mod rdata;
pub mod record;

use nslookup_domain::{AnswerSet, DecodedRecord, DomainError, ResponseOutcome};
use tracing::debug;

use header::{classify_rcode, decode_header};
use record::{parse_questions, parse_records};

/// DNS class IN.
pub const CLASS_IN: u16 = 1;

#[inline]
pub(crate) fn read_u16(buf: &[u8], pos: usize) -> Result<u16, DomainError> {
    match buf.get(pos..pos + 2) {
        Some(b) => Ok(u16::from_be_bytes([b[0], b[1]])),
        None => Err(DomainError::TruncatedRecord { offset: pos }),
    }
}

#[inline]
pub(crate) fn read_u32(buf: &[u8], pos: usize) -> Result<u32, DomainError> {
    match buf.get(pos..pos + 4) {
        Some(b) => Ok(u32::from_be_bytes([b[0], b[1], b[2], b[3]])),
        None => Err(DomainError::TruncatedRecord { offset: pos }),
    }
}

/// Decodes a reply to a query built by [`query::QueryEncoder`].
///
/// `question_len` is the header+question length of the query that was sent;
/// records are read from that offset. The reply id must equal `query_id`
/// before anything past the header is looked at, and only a NOERROR reply
/// goes on to record parsing. Any structural failure discards the whole
/// message.
pub fn decode_response(
    buf: &[u8],
    question_len: usize,
    query_name: &str,
    query_id: u16,
) -> Result<ResponseOutcome, DomainError> {
    let header = decode_header(buf)?;

    if header.id != query_id {
        return Err(DomainError::IdMismatch {
            expected: query_id,
            actual: header.id,
        });
    }

    classify_rcode(header.flags.response_code)?;

    if header.answer_count == 0 && header.authority_count == 0 {
        debug!(domain = %query_name, "Reply carries no records");
        return Ok(ResponseOutcome::NoRecords {
            header,
            query_name: query_name.to_string(),
        });
    }

    let (questions, _) = parse_questions(buf, &header)?;
    let raw = parse_records(buf, question_len, &header)?;
    let primary_type = raw.first().map(|r| r.rtype).unwrap_or_default();

    let mut decoded = Vec::with_capacity(raw.len());
    for record in &raw {
        decoded.push(DecodedRecord {
            name: record.name.clone(),
            type_code: record.rtype,
            class: record.rclass,
            ttl: record.ttl,
            answer: rdata::decode_rdata(buf, record)?,
        });
    }

    let additional = decoded.split_off(
        usize::from(header.answer_count) + usize::from(header.authority_count),
    );
    let authority = decoded.split_off(usize::from(header.answer_count));
    let answers = decoded;

    let glue = glue::correlate(&answers, &authority, &additional);

    debug!(
        domain = %query_name,
        answers = answers.len(),
        authority = authority.len(),
        additional = additional.len(),
        glue = glue.len(),
        "Reply decoded"
    );

    Ok(ResponseOutcome::Answers(AnswerSet {
        header,
        query_name: query_name.to_string(),
        questions,
        primary_type,
        answers,
        authority,
        additional,
        glue,
    }))
}
