mod answer;
mod record_type;

pub use answer::{format_ipv6, DecodedAnswer, DecodedRecord, GlueRecord, SoaData};
pub use record_type::RecordType;
