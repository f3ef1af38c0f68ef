//! nslookup domain layer: record types, decoded answers, errors and configuration.
pub mod config;
pub mod dns_message;
pub mod dns_query;
pub mod dns_record;
pub mod errors;
pub mod lookup_target;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_message::{
    AnswerSet, HeaderFlags, MessageHeader, Question, ResponseCode, ResponseOutcome,
};
pub use dns_query::DnsQuery;
pub use dns_record::{
    format_ipv6, DecodedAnswer, DecodedRecord, GlueRecord, RecordType, SoaData,
};
pub use errors::DomainError;
pub use lookup_target::LookupTarget;
