//! RDATA decoders, one per supported record type.

use super::name::decode_name;
use super::read_u32;
use super::record::ResourceRecord;
use nslookup_domain::{DecodedAnswer, DomainError, RecordType, SoaData};
use std::net::{Ipv4Addr, Ipv6Addr};

type RdataDecoder = fn(&[u8], &ResourceRecord<'_>) -> Result<DecodedAnswer, DomainError>;

fn decoder_for(rtype: RecordType) -> Option<RdataDecoder> {
    match rtype {
        RecordType::A => Some(decode_a),
        RecordType::AAAA => Some(decode_aaaa),
        RecordType::NS => Some(decode_ns),
        RecordType::CNAME => Some(decode_cname),
        RecordType::SOA => Some(decode_soa),
        RecordType::MX => Some(decode_mx),
        RecordType::TXT => Some(decode_txt),
        RecordType::PTR => Some(decode_ptr),
        _ => None,
    }
}

/// Interprets a record's RDATA. `buf` is the whole message so embedded
/// names can follow compression pointers. Types without a decoder become
/// [`DecodedAnswer::Unsupported`].
pub fn decode_rdata(buf: &[u8], record: &ResourceRecord<'_>) -> Result<DecodedAnswer, DomainError> {
    match RecordType::from_u16(record.rtype).and_then(decoder_for) {
        Some(decode) => decode(buf, record),
        None => Ok(DecodedAnswer::Unsupported {
            type_code: record.rtype,
            rdata_len: record.rdata.len(),
        }),
    }
}

fn expect_len(
    rtype: &'static str,
    record: &ResourceRecord<'_>,
    expected: usize,
) -> Result<(), DomainError> {
    if record.rdata.len() == expected {
        Ok(())
    } else {
        Err(DomainError::InvalidRdata {
            rtype,
            expected,
            actual: record.rdata.len(),
        })
    }
}

/// Decodes a name at `offset` that must end inside the record's RDATA.
fn rdata_name(
    buf: &[u8],
    record: &ResourceRecord<'_>,
    offset: usize,
) -> Result<(String, usize), DomainError> {
    let (name, consumed) = decode_name(buf, offset)?;
    if offset + consumed > record.rdata_end() {
        return Err(DomainError::TruncatedRecord {
            offset: record.rdata_end(),
        });
    }
    Ok((name, consumed))
}

fn decode_a(_buf: &[u8], record: &ResourceRecord<'_>) -> Result<DecodedAnswer, DomainError> {
    expect_len("A", record, 4)?;
    let b = record.rdata;
    Ok(DecodedAnswer::A(Ipv4Addr::new(b[0], b[1], b[2], b[3])))
}

fn decode_aaaa(_buf: &[u8], record: &ResourceRecord<'_>) -> Result<DecodedAnswer, DomainError> {
    expect_len("AAAA", record, 16)?;
    let mut octets = [0u8; 16];
    octets.copy_from_slice(record.rdata);
    Ok(DecodedAnswer::Aaaa(Ipv6Addr::from(octets)))
}

fn decode_ns(buf: &[u8], record: &ResourceRecord<'_>) -> Result<DecodedAnswer, DomainError> {
    let (name, _) = rdata_name(buf, record, record.rdata_offset)?;
    Ok(DecodedAnswer::Ns(name))
}

fn decode_cname(buf: &[u8], record: &ResourceRecord<'_>) -> Result<DecodedAnswer, DomainError> {
    let (name, _) = rdata_name(buf, record, record.rdata_offset)?;
    Ok(DecodedAnswer::Cname(name))
}

fn decode_ptr(buf: &[u8], record: &ResourceRecord<'_>) -> Result<DecodedAnswer, DomainError> {
    let (name, _) = rdata_name(buf, record, record.rdata_offset)?;
    Ok(DecodedAnswer::Ptr(name))
}

fn decode_mx(buf: &[u8], record: &ResourceRecord<'_>) -> Result<DecodedAnswer, DomainError> {
    if record.rdata.len() < 3 {
        return Err(DomainError::InvalidRdata {
            rtype: "MX",
            expected: 3,
            actual: record.rdata.len(),
        });
    }
    let preference = u16::from_be_bytes([record.rdata[0], record.rdata[1]]);
    let (exchange, _) = rdata_name(buf, record, record.rdata_offset + 2)?;
    Ok(DecodedAnswer::Mx {
        preference,
        exchange,
    })
}

/// MNAME, RNAME, then five 32-bit counters.
fn decode_soa(buf: &[u8], record: &ResourceRecord<'_>) -> Result<DecodedAnswer, DomainError> {
    let mut pos = record.rdata_offset;
    let (primary_ns, consumed) = rdata_name(buf, record, pos)?;
    pos += consumed;
    let (mailbox, consumed) = rdata_name(buf, record, pos)?;
    pos += consumed;

    let remaining = record.rdata_end() - pos;
    if remaining != 20 {
        return Err(DomainError::InvalidRdata {
            rtype: "SOA",
            expected: 20,
            actual: remaining,
        });
    }

    Ok(DecodedAnswer::Soa(SoaData {
        primary_ns,
        mailbox,
        serial: read_u32(buf, pos)?,
        refresh: read_u32(buf, pos + 4)?,
        retry: read_u32(buf, pos + 8)?,
        expire: read_u32(buf, pos + 12)?,
        minimum: read_u32(buf, pos + 16)?,
    }))
}

/// One or more length-prefixed character-strings.
fn decode_txt(_buf: &[u8], record: &ResourceRecord<'_>) -> Result<DecodedAnswer, DomainError> {
    let data = record.rdata;
    let mut segments = Vec::new();
    let mut pos = 0;

    while pos < data.len() {
        let len = usize::from(data[pos]);
        let text = data
            .get(pos + 1..pos + 1 + len)
            .ok_or(DomainError::TruncatedRecord {
                offset: record.rdata_offset + pos,
            })?;
        segments.push(String::from_utf8_lossy(text).into_owned());
        pos += 1 + len;
    }

    Ok(DecodedAnswer::Txt(segments))
}
