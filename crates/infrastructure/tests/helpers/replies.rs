use nslookup_domain::{HeaderFlags, MessageHeader, Question};
use nslookup_infrastructure::dns::wire::header::{decode_header, encode_header, HEADER_LEN};
use nslookup_infrastructure::dns::wire::name::encode_name;
use nslookup_infrastructure::dns::wire::record::parse_questions;

/// Pointer to the question name, which always sits right after the header.
pub const QUESTION_NAME_PTR: [u8; 2] = [0xC0, 0x0C];

pub fn name_bytes(name: &str) -> Vec<u8> {
    let mut out = Vec::new();
    encode_name(name, &mut out).unwrap();
    out
}

pub fn question_of(query: &[u8]) -> Question {
    let header = decode_header(query).unwrap();
    let (mut questions, _) = parse_questions(query, &header).unwrap();
    questions.remove(0)
}

/// Record with an explicit, uncompressed owner name.
pub fn rr(owner: &str, rtype: u16, ttl: u32, rdata: &[u8]) -> Vec<u8> {
    let mut out = name_bytes(owner);
    push_fixed(&mut out, rtype, ttl, rdata);
    out
}

/// Record owned by the question name (compressed).
pub fn rr_at_question(rtype: u16, ttl: u32, rdata: &[u8]) -> Vec<u8> {
    let mut out = QUESTION_NAME_PTR.to_vec();
    push_fixed(&mut out, rtype, ttl, rdata);
    out
}

fn push_fixed(out: &mut Vec<u8>, rtype: u16, ttl: u32, rdata: &[u8]) {
    out.extend_from_slice(&rtype.to_be_bytes());
    out.extend_from_slice(&1u16.to_be_bytes());
    out.extend_from_slice(&ttl.to_be_bytes());
    out.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
    out.extend_from_slice(rdata);
}

/// Builds a reply that echoes a query's id and question section.
pub struct ReplyBuilder {
    query: Vec<u8>,
    id: Option<u16>,
    rcode: u8,
    authoritative: bool,
    truncated: bool,
    answers: Vec<Vec<u8>>,
    authority: Vec<Vec<u8>>,
    additional: Vec<Vec<u8>>,
}

impl ReplyBuilder {
    pub fn for_query(query: &[u8]) -> Self {
        Self {
            query: query.to_vec(),
            id: None,
            rcode: 0,
            authoritative: false,
            truncated: false,
            answers: vec![],
            authority: vec![],
            additional: vec![],
        }
    }

    pub fn id(mut self, id: u16) -> Self {
        self.id = Some(id);
        self
    }

    pub fn rcode(mut self, rcode: u8) -> Self {
        self.rcode = rcode;
        self
    }

    pub fn authoritative(mut self) -> Self {
        self.authoritative = true;
        self
    }

    pub fn truncated(mut self) -> Self {
        self.truncated = true;
        self
    }

    pub fn answer(mut self, record: Vec<u8>) -> Self {
        self.answers.push(record);
        self
    }

    pub fn authority(mut self, record: Vec<u8>) -> Self {
        self.authority.push(record);
        self
    }

    pub fn additional(mut self, record: Vec<u8>) -> Self {
        self.additional.push(record);
        self
    }

    pub fn build(self) -> Vec<u8> {
        let query_header = decode_header(&self.query).unwrap();
        let header = MessageHeader {
            id: self.id.unwrap_or(query_header.id),
            flags: HeaderFlags {
                is_response: true,
                authoritative: self.authoritative,
                truncated: self.truncated,
                recursion_desired: query_header.flags.recursion_desired,
                recursion_available: true,
                response_code: self.rcode,
                ..Default::default()
            },
            question_count: query_header.question_count,
            answer_count: self.answers.len() as u16,
            authority_count: self.authority.len() as u16,
            additional_count: self.additional.len() as u16,
        };

        let mut out = Vec::with_capacity(512);
        encode_header(&header, &mut out);
        out.extend_from_slice(&self.query[HEADER_LEN..]);
        for record in self
            .answers
            .iter()
            .chain(self.authority.iter())
            .chain(self.additional.iter())
        {
            out.extend_from_slice(record);
        }
        out
    }
}
