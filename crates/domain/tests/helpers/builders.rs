use nslookup_domain::{DecodedAnswer, DecodedRecord, RecordType};
use std::net::Ipv4Addr;

pub struct DecodedRecordBuilder {
    name: String,
    type_code: u16,
    class: u16,
    ttl: u32,
    answer: DecodedAnswer,
}

impl DecodedRecordBuilder {
    pub fn new() -> Self {
        Self {
            name: "example.com".to_string(),
            type_code: RecordType::A.to_u16(),
            class: 1,
            ttl: 300,
            answer: DecodedAnswer::A(Ipv4Addr::new(93, 184, 216, 34)),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn answer(mut self, answer: DecodedAnswer) -> Self {
        self.type_code = answer
            .record_type()
            .map(|t| t.to_u16())
            .unwrap_or(self.type_code);
        self.answer = answer;
        self
    }

    pub fn type_code(mut self, type_code: u16) -> Self {
        self.type_code = type_code;
        self
    }

    pub fn build(self) -> DecodedRecord {
        DecodedRecord {
            name: self.name,
            type_code: self.type_code,
            class: self.class,
            ttl: self.ttl,
            answer: self.answer,
        }
    }
}

impl Default for DecodedRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}
