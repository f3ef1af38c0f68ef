//! Outbound query construction.

use super::header::{encode_header, HEADER_LEN};
use super::name::encode_name;
use super::CLASS_IN;
use nslookup_domain::{
    DnsQuery, DomainError, HeaderFlags, LookupTarget, MessageHeader, RecordType,
};
use tracing::trace;

/// A serialized query plus what the decoder needs to read the reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedQuery {
    pub bytes: Vec<u8>,
    /// Length of header + question; the reply's records start here.
    pub question_len: usize,
    /// Name actually placed in the question (reverse names are rewritten).
    pub query_name: String,
    pub query_id: u16,
    /// Type actually asked for (PTR for reverse lookups).
    pub record_type: RecordType,
}

pub struct QueryEncoder;

impl QueryEncoder {
    /// Builds a one-question, class IN query.
    ///
    /// A name whose first label is numeric is a reverse lookup: its labels
    /// are reversed under `in-addr.arpa` and the type becomes PTR whatever
    /// `record_type` says.
    pub fn build(
        name: &str,
        record_type: RecordType,
        recursion_desired: bool,
        query_id: u16,
    ) -> Result<EncodedQuery, DomainError> {
        let target = LookupTarget::classify(name);
        let record_type = target.effective_type(record_type);
        let query_name = target.query_name();

        let header = MessageHeader {
            id: query_id,
            flags: HeaderFlags {
                recursion_desired,
                ..Default::default()
            },
            question_count: 1,
            ..Default::default()
        };

        let mut bytes = Vec::with_capacity(HEADER_LEN + query_name.len() + 6);
        encode_header(&header, &mut bytes);
        encode_name(&query_name, &mut bytes)?;
        bytes.extend_from_slice(&record_type.to_u16().to_be_bytes());
        bytes.extend_from_slice(&CLASS_IN.to_be_bytes());

        trace!(
            domain = %query_name,
            record_type = %record_type,
            id = query_id,
            len = bytes.len(),
            "Query encoded"
        );

        Ok(EncodedQuery {
            question_len: bytes.len(),
            bytes,
            query_name,
            query_id,
            record_type,
        })
    }

    pub fn build_with_random_id(
        name: &str,
        record_type: RecordType,
        recursion_desired: bool,
    ) -> Result<EncodedQuery, DomainError> {
        Self::build(name, record_type, recursion_desired, fastrand::u16(..))
    }

    pub fn from_query(query: &DnsQuery) -> Result<EncodedQuery, DomainError> {
        Self::build_with_random_id(&query.domain, query.record_type, query.recursion_desired)
    }
}
