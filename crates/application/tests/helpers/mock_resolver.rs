use async_trait::async_trait;
use nslookup_application::ports::DnsResolver;
use nslookup_domain::{
    AnswerSet, DecodedAnswer, DecodedRecord, DnsQuery, DomainError, MessageHeader, RecordType,
    ResponseOutcome,
};
use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::sync::{Arc, Mutex};

type Key = (String, RecordType);

/// Resolver double keyed by (name, type). Unconfigured queries answer with
/// an empty NOERROR reply.
#[derive(Clone, Default)]
pub struct MockDnsResolver {
    responses: Arc<Mutex<HashMap<Key, Result<ResponseOutcome, DomainError>>>>,
    calls: Arc<Mutex<Vec<DnsQuery>>>,
}

impl MockDnsResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_response(&self, name: &str, record_type: RecordType, outcome: ResponseOutcome) {
        self.responses
            .lock()
            .unwrap()
            .insert((name.to_string(), record_type), Ok(outcome));
    }

    pub fn set_error(&self, name: &str, record_type: RecordType, error: DomainError) {
        self.responses
            .lock()
            .unwrap()
            .insert((name.to_string(), record_type), Err(error));
    }

    pub fn calls(&self) -> Vec<DnsQuery> {
        self.calls.lock().unwrap().clone()
    }

    pub fn a_answer(name: &str, addr: Ipv4Addr) -> ResponseOutcome {
        ResponseOutcome::Answers(AnswerSet {
            header: MessageHeader {
                answer_count: 1,
                ..Default::default()
            },
            query_name: name.to_string(),
            questions: vec![],
            primary_type: RecordType::A.to_u16(),
            answers: vec![DecodedRecord {
                name: name.to_string(),
                type_code: RecordType::A.to_u16(),
                class: 1,
                ttl: 300,
                answer: DecodedAnswer::A(addr),
            }],
            authority: vec![],
            additional: vec![],
            glue: vec![],
        })
    }
}

#[async_trait]
impl DnsResolver for MockDnsResolver {
    async fn resolve(&self, query: &DnsQuery) -> Result<ResponseOutcome, DomainError> {
        self.calls.lock().unwrap().push(query.clone());

        let key = (query.domain.to_string(), query.record_type);
        match self.responses.lock().unwrap().get(&key) {
            Some(result) => result.clone(),
            None => Ok(ResponseOutcome::NoRecords {
                header: MessageHeader::default(),
                query_name: query.domain.to_string(),
            }),
        }
    }
}
