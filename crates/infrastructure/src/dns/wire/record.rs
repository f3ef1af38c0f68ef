//! Question and resource record framing (RFC 1035 §4.1.2, §4.1.3).

use super::header::HEADER_LEN;
use super::name::decode_name;
use super::{read_u16, read_u32};
use nslookup_domain::{DomainError, MessageHeader, Question};

/// TYPE + CLASS + TTL + RDLENGTH.
const RR_FIXED_LEN: usize = 10;

/// One record as framed on the wire. RDATA stays a borrowed slice of the
/// message until a decoder interprets it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord<'a> {
    pub name: String,
    pub name_offset: usize,
    pub name_len: usize,
    pub rtype: u16,
    pub rclass: u16,
    pub ttl: u32,
    pub rdata: &'a [u8],
    pub rdata_offset: usize,
}

impl ResourceRecord<'_> {
    pub fn wire_len(&self) -> usize {
        self.name_len + RR_FIXED_LEN + self.rdata.len()
    }

    pub fn rdata_end(&self) -> usize {
        self.rdata_offset + self.rdata.len()
    }
}

/// Reads the question section. Returns the questions and the offset just
/// past them.
pub fn parse_questions(
    buf: &[u8],
    header: &MessageHeader,
) -> Result<(Vec<Question>, usize), DomainError> {
    let mut pos = HEADER_LEN;
    let mut questions = Vec::with_capacity(usize::from(header.question_count));

    for _ in 0..header.question_count {
        let (name, consumed) = decode_name(buf, pos)?;
        pos += consumed;
        let qtype = read_u16(buf, pos)?;
        let qclass = read_u16(buf, pos + 2)?;
        pos += 4;
        questions.push(Question {
            name,
            qtype,
            qclass,
        });
    }

    Ok((questions, pos))
}

/// Reads answer, authority and additional records back to back from
/// `start`. Exactly `header.record_count()` records are produced or the
/// whole call fails.
pub fn parse_records<'a>(
    buf: &'a [u8],
    start: usize,
    header: &MessageHeader,
) -> Result<Vec<ResourceRecord<'a>>, DomainError> {
    let total = header.record_count();
    let mut records = Vec::with_capacity(total);
    let mut pos = start;

    while records.len() < total {
        let (name, name_len) = decode_name(buf, pos)?;
        let fixed = pos + name_len;

        let rtype = read_u16(buf, fixed)?;
        let rclass = read_u16(buf, fixed + 2)?;
        let ttl = read_u32(buf, fixed + 4)?;
        let rdlength = usize::from(read_u16(buf, fixed + 8)?);

        let rdata_offset = fixed + RR_FIXED_LEN;
        let rdata = buf
            .get(rdata_offset..rdata_offset + rdlength)
            .ok_or(DomainError::TruncatedRecord {
                offset: rdata_offset,
            })?;

        let record = ResourceRecord {
            name,
            name_offset: pos,
            name_len,
            rtype,
            rclass,
            ttl,
            rdata,
            rdata_offset,
        };
        pos += record.wire_len();
        records.push(record);
    }

    Ok(records)
}
