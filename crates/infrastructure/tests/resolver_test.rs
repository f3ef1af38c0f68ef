mod helpers;

use helpers::{name_bytes, question_of, rr, rr_at_question, MockDnsServer, ReplyBuilder};
use nslookup_application::ports::DnsResolver;
use nslookup_application::use_cases::{LookupRequest, LookupUseCase, QueryMode};
use nslookup_domain::{
    DecodedAnswer, DnsQuery, DomainError, RecordType, ResponseCode, ResponseOutcome,
};
use nslookup_infrastructure::dns::{UdpTransport, WireResolver};
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use std::time::Duration;

fn resolver_for(server: &MockDnsServer) -> WireResolver {
    WireResolver::new(
        Arc::new(UdpTransport::new(server.addr())),
        Duration::from_secs(2),
    )
}

fn a_reply(query: &[u8]) -> Option<Vec<u8>> {
    Some(
        ReplyBuilder::for_query(query)
            .answer(rr_at_question(1, 300, &[93, 184, 216, 34]))
            .build(),
    )
}

#[tokio::test]
async fn test_resolves_a_record() {
    let server = MockDnsServer::start(a_reply).await.unwrap();
    let resolver = resolver_for(&server);

    let outcome = resolver
        .resolve(&DnsQuery::new("example.com", RecordType::A))
        .await
        .unwrap();

    let set = outcome.answer_set().unwrap();
    assert_eq!(set.query_name, "example.com");
    assert_eq!(
        set.answers[0].answer,
        DecodedAnswer::A(Ipv4Addr::new(93, 184, 216, 34))
    );
    assert!(set.header.flags.recursion_available);
}

#[tokio::test]
async fn test_recursion_flag_reaches_the_wire() {
    let server = MockDnsServer::start(|query| {
        let rd = query[2] & 0x01 != 0;
        let reply = ReplyBuilder::for_query(query);
        Some(if rd { reply.rcode(5).build() } else { reply.build() })
    })
    .await
    .unwrap();
    let resolver = resolver_for(&server);

    let recursive = resolver
        .resolve(&DnsQuery::new("example.com", RecordType::A))
        .await;
    assert_eq!(
        recursive.unwrap_err(),
        DomainError::ServerError(ResponseCode::Refused)
    );

    let iterative = resolver
        .resolve(&DnsQuery::new("example.com", RecordType::A).with_recursion(false))
        .await
        .unwrap();
    assert!(matches!(iterative, ResponseOutcome::NoRecords { .. }));
}

#[tokio::test]
async fn test_nxdomain() {
    let server =
        MockDnsServer::start(|query| Some(ReplyBuilder::for_query(query).rcode(3).build()))
            .await
            .unwrap();
    let err = resolver_for(&server)
        .resolve(&DnsQuery::new("nope.invalid", RecordType::A))
        .await
        .unwrap_err();

    assert_eq!(err.error_number(), 3);
    assert_eq!(err.to_string(), "NXDOMAIN: Domain Name does not exist");
}

#[tokio::test]
async fn test_mismatched_id_is_rejected() {
    let server = MockDnsServer::start(|query| {
        let id = u16::from_be_bytes([query[0], query[1]]).wrapping_add(1);
        Some(
            ReplyBuilder::for_query(query)
                .id(id)
                .answer(rr_at_question(1, 60, &[10, 0, 0, 1]))
                .build(),
        )
    })
    .await
    .unwrap();

    let err = resolver_for(&server)
        .resolve(&DnsQuery::new("example.com", RecordType::A))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::IdMismatch { .. }));
}

#[tokio::test]
async fn test_silent_server_times_out_after_all_attempts() {
    let server = MockDnsServer::start(|_| None).await.unwrap();
    let resolver = WireResolver::new(
        Arc::new(UdpTransport::new(server.addr())),
        Duration::from_millis(100),
    )
    .with_attempts(3);

    let err = resolver
        .resolve(&DnsQuery::new("example.com", RecordType::A))
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::TransportTimeout { .. }));
    assert!(err.is_transport_error());
    assert_eq!(server.received(), 3);
}

#[tokio::test]
async fn test_reverse_lookup_sends_ptr_question() {
    let server = MockDnsServer::start(|query| {
        let question = question_of(query);
        if question.name != "8.8.8.8.in-addr.arpa" || question.qtype != 12 {
            return Some(ReplyBuilder::for_query(query).rcode(1).build());
        }
        Some(
            ReplyBuilder::for_query(query)
                .answer(rr_at_question(12, 3600, &name_bytes("dns.google")))
                .build(),
        )
    })
    .await
    .unwrap();

    let outcome = resolver_for(&server)
        .resolve(&DnsQuery::new("8.8.8.8", RecordType::A))
        .await
        .unwrap();

    let set = outcome.answer_set().unwrap();
    assert_eq!(set.query_name, "8.8.8.8.in-addr.arpa");
    assert_eq!(set.primary_record_type(), Some(RecordType::PTR));
    assert_eq!(set.answers[0].answer, DecodedAnswer::Ptr("dns.google".into()));
}

#[tokio::test]
async fn test_ns_answer_with_glue() {
    let server = MockDnsServer::start(|query| {
        // Each target is a label followed by a pointer to the question name.
        let mut ns1 = b"\x03ns1".to_vec();
        ns1.extend_from_slice(&[0xC0, 0x0C]);
        let mut ns2 = b"\x03ns2".to_vec();
        ns2.extend_from_slice(&[0xC0, 0x0C]);
        Some(
            ReplyBuilder::for_query(query)
                .authoritative()
                .answer(rr_at_question(2, 3600, &ns1))
                .answer(rr_at_question(2, 3600, &ns2))
                .additional(rr("ns1.example.com", 1, 3600, &[192, 0, 2, 1]))
                .additional(rr("ns2.example.com", 1, 3600, &[192, 0, 2, 2]))
                .build(),
        )
    })
    .await
    .unwrap();

    let outcome = resolver_for(&server)
        .resolve(&DnsQuery::new("example.com", RecordType::NS))
        .await
        .unwrap();

    let set = outcome.answer_set().unwrap();
    assert!(set.header.is_authoritative());
    assert_eq!(set.answers.len(), 2);
    assert_eq!(set.additional.len(), 2);
    assert_eq!(set.glue.len(), 2);
    assert_eq!(set.glue[1].nameserver, "ns2.example.com");
    assert_eq!(set.glue[1].address, IpAddr::V4(Ipv4Addr::new(192, 0, 2, 2)));
}

#[tokio::test]
async fn test_truncated_reply_is_still_decoded() {
    let server = MockDnsServer::start(|query| {
        Some(
            ReplyBuilder::for_query(query)
                .truncated()
                .answer(rr_at_question(16, 60, b"\x05hello"))
                .build(),
        )
    })
    .await
    .unwrap();

    let outcome = resolver_for(&server)
        .resolve(&DnsQuery::new("example.com", RecordType::TXT))
        .await
        .unwrap();
    let set = outcome.answer_set().unwrap();
    assert!(set.header.flags.truncated);
    assert_eq!(set.answers[0].answer, DecodedAnswer::Txt(vec!["hello".into()]));
}

#[tokio::test]
async fn test_lookup_use_case_end_to_end() {
    let server = MockDnsServer::start(|query| {
        let question = question_of(query);
        match question.qtype {
            1 => a_reply(query),
            _ => Some(ReplyBuilder::for_query(query).build()),
        }
    })
    .await
    .unwrap();

    let use_case = LookupUseCase::new(Arc::new(resolver_for(&server)));
    let reports = use_case
        .execute(&LookupRequest::new("example.com", QueryMode::Default))
        .await
        .unwrap();

    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].query.record_type, RecordType::A);
    assert!(matches!(
        reports[0].result,
        Ok(ResponseOutcome::Answers(_))
    ));
    assert!(matches!(
        reports[1].result,
        Ok(ResponseOutcome::NoRecords { .. })
    ));
    assert_eq!(server.received(), 2);
}
