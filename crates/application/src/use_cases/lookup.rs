use crate::ports::DnsResolver;
use nslookup_domain::{DnsQuery, DomainError, LookupTarget, RecordType, ResponseOutcome};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Types queried, in order, for an `any` lookup of a forward name.
const ANY_SEQUENCE: [RecordType; 6] = [
    RecordType::A,
    RecordType::NS,
    RecordType::SOA,
    RecordType::MX,
    RecordType::TXT,
    RecordType::AAAA,
];

const DEFAULT_SEQUENCE: [RecordType; 2] = [RecordType::A, RecordType::AAAA];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryMode {
    /// A then AAAA.
    Default,
    /// A, NS, SOA, MX, TXT, AAAA.
    Any,
    Single(RecordType),
}

impl QueryMode {
    /// Accepts `default`, `any` or a record type name; anything else means A.
    pub fn parse(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "default" => QueryMode::Default,
            "any" => QueryMode::Any,
            other => QueryMode::Single(RecordType::from_name_or_default(other)),
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, QueryMode::Any)
    }
}

#[derive(Debug, Clone)]
pub struct LookupRequest {
    pub name: String,
    pub mode: QueryMode,
    pub recursion_desired: bool,
}

impl LookupRequest {
    pub fn new(name: impl Into<String>, mode: QueryMode) -> Self {
        Self {
            name: name.into(),
            mode,
            recursion_desired: true,
        }
    }

    pub fn with_recursion(mut self, recursion_desired: bool) -> Self {
        self.recursion_desired = recursion_desired;
        self
    }
}

/// Result of one query in a lookup plan.
#[derive(Debug, Clone)]
pub struct LookupReport {
    pub query: DnsQuery,
    /// Set for every report of an `any` lookup; presentation prints only the
    /// answer block in that mode.
    pub any_mode: bool,
    pub result: Result<ResponseOutcome, DomainError>,
}

impl LookupReport {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

pub struct LookupUseCase {
    resolver: Arc<dyn DnsResolver>,
}

impl LookupUseCase {
    pub fn new(resolver: Arc<dyn DnsResolver>) -> Self {
        Self { resolver }
    }

    /// Expands a request into the queries to send, in order.
    ///
    /// Names are passed through untouched; the wire encoder performs the
    /// `in-addr.arpa` rewrite for reverse targets.
    pub fn plan(request: &LookupRequest) -> Vec<DnsQuery> {
        let target = LookupTarget::classify(&request.name);

        let types: Vec<RecordType> = match (target.forced_type(), request.mode) {
            (Some(forced), _) => vec![forced],
            (None, QueryMode::Default) => DEFAULT_SEQUENCE.to_vec(),
            (None, QueryMode::Any) => ANY_SEQUENCE.to_vec(),
            (None, QueryMode::Single(record_type)) => vec![record_type],
        };

        types
            .into_iter()
            .map(|record_type| {
                DnsQuery::new(request.name.as_str(), record_type)
                    .with_recursion(request.recursion_desired)
            })
            .collect()
    }

    /// Runs the plan. Rcode and decode failures are reported per query and the
    /// plan continues; a transport failure stops it and is returned.
    pub async fn execute(&self, request: &LookupRequest) -> Result<Vec<LookupReport>, DomainError> {
        let plan = Self::plan(request);
        let any_mode = request.mode.is_any();

        debug!(
            name = %request.name,
            queries = plan.len(),
            any_mode,
            "Planned lookup"
        );

        let mut reports = Vec::with_capacity(plan.len());

        for query in plan {
            let start = Instant::now();
            let result = self.resolver.resolve(&query).await;
            let elapsed_us = start.elapsed().as_micros() as u64;

            match &result {
                Ok(outcome) => {
                    info!(
                        domain = %query.domain,
                        record_type = %query.record_type,
                        answers = outcome.answer_set().map_or(0, |set| set.answers.len()),
                        elapsed_us,
                        "Query answered"
                    );
                }
                Err(e) if e.is_transport_error() => {
                    warn!(
                        domain = %query.domain,
                        record_type = %query.record_type,
                        error = %e,
                        "Transport failure, abandoning lookup"
                    );
                    return Err(e.clone());
                }
                Err(e) => {
                    debug!(
                        domain = %query.domain,
                        record_type = %query.record_type,
                        error = %e,
                        "Query failed"
                    );
                }
            }

            reports.push(LookupReport {
                query,
                any_mode,
                result,
            });
        }

        Ok(reports)
    }
}
