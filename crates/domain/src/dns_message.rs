use crate::dns_record::{DecodedRecord, GlueRecord, RecordType};
use std::fmt;

/// The ten response codes a reply can carry in its 4-bit RCODE field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseCode {
    NoError,
    FormErr,
    ServFail,
    NXDomain,
    NotImp,
    Refused,
    YXDomain,
    XRRSet,
    NotAuth,
    NotZone,
}

impl ResponseCode {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(ResponseCode::NoError),
            1 => Some(ResponseCode::FormErr),
            2 => Some(ResponseCode::ServFail),
            3 => Some(ResponseCode::NXDomain),
            4 => Some(ResponseCode::NotImp),
            5 => Some(ResponseCode::Refused),
            6 => Some(ResponseCode::YXDomain),
            7 => Some(ResponseCode::XRRSet),
            8 => Some(ResponseCode::NotAuth),
            9 => Some(ResponseCode::NotZone),
            _ => None,
        }
    }

    pub fn code(&self) -> u8 {
        match self {
            ResponseCode::NoError => 0,
            ResponseCode::FormErr => 1,
            ResponseCode::ServFail => 2,
            ResponseCode::NXDomain => 3,
            ResponseCode::NotImp => 4,
            ResponseCode::Refused => 5,
            ResponseCode::YXDomain => 6,
            ResponseCode::XRRSet => 7,
            ResponseCode::NotAuth => 8,
            ResponseCode::NotZone => 9,
        }
    }

    pub fn mnemonic(&self) -> &'static str {
        match self {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::FormErr => "FORMERR",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::YXDomain => "YXDOMAIN",
            ResponseCode::XRRSet => "XRRSET",
            ResponseCode::NotAuth => "NOTAUTH",
            ResponseCode::NotZone => "NOTZONE",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ResponseCode::NoError => "NOERROR: Query Completed Successfully",
            ResponseCode::FormErr => "FORMERR: Query Format Error",
            ResponseCode::ServFail => "SERVFAIL: Server failed to complete DNS request",
            ResponseCode::NXDomain => "NXDOMAIN: Domain Name does not exist",
            ResponseCode::NotImp => "NOTIMP: Function not implemented",
            ResponseCode::Refused => "REFUSED: The server refused to answer for the query",
            ResponseCode::YXDomain => "YXDOMAIN: Name that should not exist, does exist",
            ResponseCode::XRRSet => "XRRSET: RRset that should not exist, does exist",
            ResponseCode::NotAuth => "NOTAUTH: Server not authoritative for the zone",
            ResponseCode::NotZone => "NOTZONE: Name not in zone",
        }
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mnemonic())
    }
}

const QR_MASK: u16 = 0x8000;
const OPCODE_MASK: u16 = 0x7800;
const AA_MASK: u16 = 0x0400;
const TC_MASK: u16 = 0x0200;
const RD_MASK: u16 = 0x0100;
const RA_MASK: u16 = 0x0080;
const RCODE_MASK: u16 = 0x000F;

/// Decoded view of the 16-bit header flags field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeaderFlags {
    pub is_response: bool,
    pub opcode: u8,
    pub authoritative: bool,
    pub truncated: bool,
    pub recursion_desired: bool,
    pub recursion_available: bool,
    pub response_code: u8,
}

impl HeaderFlags {
    pub fn from_bits(bits: u16) -> Self {
        Self {
            is_response: bits & QR_MASK != 0,
            opcode: ((bits & OPCODE_MASK) >> 11) as u8,
            authoritative: bits & AA_MASK != 0,
            truncated: bits & TC_MASK != 0,
            recursion_desired: bits & RD_MASK != 0,
            recursion_available: bits & RA_MASK != 0,
            response_code: (bits & RCODE_MASK) as u8,
        }
    }

    pub fn to_bits(&self) -> u16 {
        let mut bits = (u16::from(self.opcode) << 11) & OPCODE_MASK;
        bits |= u16::from(self.response_code) & RCODE_MASK;
        if self.is_response {
            bits |= QR_MASK;
        }
        if self.authoritative {
            bits |= AA_MASK;
        }
        if self.truncated {
            bits |= TC_MASK;
        }
        if self.recursion_desired {
            bits |= RD_MASK;
        }
        if self.recursion_available {
            bits |= RA_MASK;
        }
        bits
    }
}

/// The fixed 12-byte message header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MessageHeader {
    pub id: u16,
    pub flags: HeaderFlags,
    pub question_count: u16,
    pub answer_count: u16,
    pub authority_count: u16,
    pub additional_count: u16,
}

impl MessageHeader {
    pub fn record_count(&self) -> usize {
        usize::from(self.answer_count)
            + usize::from(self.authority_count)
            + usize::from(self.additional_count)
    }

    pub fn is_authoritative(&self) -> bool {
        self.flags.authoritative
    }
}

/// One entry of the question section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: String,
    pub qtype: u16,
    pub qclass: u16,
}

/// Every record of a successful reply, split by section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerSet {
    pub header: MessageHeader,
    pub query_name: String,
    /// Question section as echoed by the server.
    pub questions: Vec<Question>,
    /// Type code of the first record on the wire; drives presentation.
    pub primary_type: u16,
    pub answers: Vec<DecodedRecord>,
    pub authority: Vec<DecodedRecord>,
    pub additional: Vec<DecodedRecord>,
    pub glue: Vec<GlueRecord>,
}

impl AnswerSet {
    pub fn primary_record_type(&self) -> Option<RecordType> {
        RecordType::from_u16(self.primary_type)
    }

    pub fn records(&self) -> impl Iterator<Item = &DecodedRecord> {
        self.answers
            .iter()
            .chain(self.authority.iter())
            .chain(self.additional.iter())
    }
}

/// Result of decoding a reply whose RCODE was NOERROR.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseOutcome {
    Answers(AnswerSet),
    /// The query succeeded but both the answer and authority sections are empty.
    NoRecords {
        header: MessageHeader,
        query_name: String,
    },
}

impl ResponseOutcome {
    pub fn header(&self) -> &MessageHeader {
        match self {
            ResponseOutcome::Answers(set) => &set.header,
            ResponseOutcome::NoRecords { header, .. } => header,
        }
    }

    pub fn query_name(&self) -> &str {
        match self {
            ResponseOutcome::Answers(set) => &set.query_name,
            ResponseOutcome::NoRecords { query_name, .. } => query_name,
        }
    }

    pub fn answer_set(&self) -> Option<&AnswerSet> {
        match self {
            ResponseOutcome::Answers(set) => Some(set),
            ResponseOutcome::NoRecords { .. } => None,
        }
    }
}
