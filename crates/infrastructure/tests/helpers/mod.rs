#![allow(dead_code)]
mod dns_server_mock;
mod replies;

pub use dns_server_mock::MockDnsServer;
pub use replies::{name_bytes, question_of, rr, rr_at_question, ReplyBuilder};
