use super::RecordType;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Start-of-authority fields, in wire order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoaData {
    pub primary_ns: String,
    pub mailbox: String,
    pub serial: u32,
    pub refresh: u32,
    pub retry: u32,
    pub expire: u32,
    pub minimum: u32,
}

/// Type-specific payload of a record after its RDATA has been interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedAnswer {
    A(Ipv4Addr),
    Aaaa(Ipv6Addr),
    Ns(String),
    Cname(String),
    Soa(SoaData),
    Mx { preference: u16, exchange: String },
    Txt(Vec<String>),
    Ptr(String),
    /// Any type without a decoder; the record is kept so the rest of the
    /// message still decodes.
    Unsupported { type_code: u16, rdata_len: usize },
}

impl DecodedAnswer {
    pub fn record_type(&self) -> Option<RecordType> {
        match self {
            DecodedAnswer::A(_) => Some(RecordType::A),
            DecodedAnswer::Aaaa(_) => Some(RecordType::AAAA),
            DecodedAnswer::Ns(_) => Some(RecordType::NS),
            DecodedAnswer::Cname(_) => Some(RecordType::CNAME),
            DecodedAnswer::Soa(_) => Some(RecordType::SOA),
            DecodedAnswer::Mx { .. } => Some(RecordType::MX),
            DecodedAnswer::Txt(_) => Some(RecordType::TXT),
            DecodedAnswer::Ptr(_) => Some(RecordType::PTR),
            DecodedAnswer::Unsupported { type_code, .. } => RecordType::from_u16(*type_code),
        }
    }

    pub fn ip_addr(&self) -> Option<IpAddr> {
        match self {
            DecodedAnswer::A(addr) => Some(IpAddr::V4(*addr)),
            DecodedAnswer::Aaaa(addr) => Some(IpAddr::V6(*addr)),
            _ => None,
        }
    }

    /// Target name for records that point at another name.
    pub fn target_name(&self) -> Option<&str> {
        match self {
            DecodedAnswer::Ns(name) | DecodedAnswer::Cname(name) | DecodedAnswer::Ptr(name) => {
                Some(name)
            }
            DecodedAnswer::Mx { exchange, .. } => Some(exchange),
            _ => None,
        }
    }
}

impl fmt::Display for DecodedAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodedAnswer::A(addr) => write!(f, "{}", addr),
            DecodedAnswer::Aaaa(addr) => write!(f, "{}", format_ipv6(addr)),
            DecodedAnswer::Ns(name) | DecodedAnswer::Cname(name) | DecodedAnswer::Ptr(name) => {
                write!(f, "{}", name)
            }
            DecodedAnswer::Soa(soa) => write!(
                f,
                "{} {} {} {} {} {} {}",
                soa.primary_ns,
                soa.mailbox,
                soa.serial,
                soa.refresh,
                soa.retry,
                soa.expire,
                soa.minimum
            ),
            DecodedAnswer::Mx {
                preference,
                exchange,
            } => write!(f, "{} {}", preference, exchange),
            DecodedAnswer::Txt(segments) => {
                let quoted: Vec<String> = segments.iter().map(|s| format!("\"{}\"", s)).collect();
                write!(f, "{}", quoted.join(" "))
            }
            DecodedAnswer::Unsupported {
                type_code,
                rdata_len,
            } => write!(f, "TYPE{} ({} bytes)", type_code, rdata_len),
        }
    }
}

/// One resource record with its RDATA decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedRecord {
    pub name: String,
    /// Raw type code from the wire; may not map to a [`RecordType`].
    pub type_code: u16,
    pub class: u16,
    pub ttl: u32,
    pub answer: DecodedAnswer,
}

impl DecodedRecord {
    pub fn record_type(&self) -> Option<RecordType> {
        RecordType::from_u16(self.type_code)
    }
}

/// Address from the additional section attached to a name server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlueRecord {
    pub nameserver: String,
    pub address: IpAddr,
}

/// Renders 16 address bytes as eight hex groups, leading zeros stripped,
/// with the longest run (two or more) of all-zero groups collapsed to `::`.
/// A lone zero group renders as `0`. Ties go to the first run.
pub fn format_ipv6(address: &Ipv6Addr) -> String {
    let groups = address.segments();

    let mut best: Option<(usize, usize)> = None;
    let mut i = 0;
    while i < groups.len() {
        if groups[i] != 0 {
            i += 1;
            continue;
        }
        let start = i;
        while i < groups.len() && groups[i] == 0 {
            i += 1;
        }
        let len = i - start;
        if len >= 2 && best.map_or(true, |(_, best_len)| len > best_len) {
            best = Some((start, len));
        }
    }

    let render = |part: &[u16]| {
        part.iter()
            .map(|g| format!("{:x}", g))
            .collect::<Vec<_>>()
            .join(":")
    };

    match best {
        Some((start, len)) => format!(
            "{}::{}",
            render(&groups[..start]),
            render(&groups[start + len..])
        ),
        None => render(&groups),
    }
}
