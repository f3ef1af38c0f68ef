//! nslookup-style presentation of lookup reports.

use nslookup_application::use_cases::LookupReport;
use nslookup_domain::{
    format_ipv6, AnswerSet, DecodedAnswer, DecodedRecord, DomainError, GlueRecord,
    ResponseOutcome,
};
use std::io::{self, Write};
use std::net::{IpAddr, SocketAddr};

const NON_AUTHORITATIVE: &str = "Non-authoritative answer:";
const AUTHORITATIVE_FROM_HERE: &str = "Authoritative answers can be found from here";

pub fn write_banner<W: Write>(out: &mut W, server: SocketAddr) -> io::Result<()> {
    let ip = display_ip(&server.ip());
    writeln!(out, "Server: {}", ip)?;
    writeln!(out, "Address: {}#{}", ip, server.port())?;
    writeln!(out)
}

pub fn write_report<W: Write>(out: &mut W, report: &LookupReport) -> io::Result<()> {
    match &report.result {
        Err(e) => write_error(out, e),
        Ok(ResponseOutcome::NoRecords { query_name, .. }) => {
            writeln!(out, "{}", NON_AUTHORITATIVE)?;
            write_cant_find(out, query_name)?;
            writeln!(out, "{}", AUTHORITATIVE_FROM_HERE)?;
            writeln!(out)
        }
        Ok(ResponseOutcome::Answers(set)) => write_answer_set(out, report, set),
    }
}

fn write_error<W: Write>(out: &mut W, error: &DomainError) -> io::Result<()> {
    if error.is_protocol_error() {
        writeln!(out, "Error No.: {}", error.error_number())?;
    }
    writeln!(out, "{}", error)?;
    writeln!(out)
}

fn write_cant_find<W: Write>(out: &mut W, name: &str) -> io::Result<()> {
    writeln!(out, "*** Can't find {}: No answer", name)?;
    writeln!(out)
}

fn write_answer_set<W: Write>(out: &mut W, report: &LookupReport, set: &AnswerSet) -> io::Result<()> {
    if report.any_mode {
        return write_records(out, &set.answers);
    }

    if report.query.record_type.is_address() {
        writeln!(out, "{}", NON_AUTHORITATIVE)?;
        return write_records(out, &set.answers);
    }

    if set.header.is_authoritative() {
        writeln!(out, "{}", AUTHORITATIVE_FROM_HERE)?;
        writeln!(out)?;
        return write_records(out, &set.answers);
    }

    writeln!(out, "{}", NON_AUTHORITATIVE)?;
    if set.answers.is_empty() {
        write_cant_find(out, &set.query_name)?;
    } else {
        write_records(out, &set.answers)?;
    }

    writeln!(out, "{}", AUTHORITATIVE_FROM_HERE)?;
    if !set.authority.is_empty() {
        write_records(out, &set.authority)
    } else if !set.glue.is_empty() {
        write_glue(out, &set.glue)
    } else {
        writeln!(out)
    }
}

/// One block of records followed by a blank line. Unsupported types
/// collapse into a single notice.
fn write_records<W: Write>(out: &mut W, records: &[DecodedRecord]) -> io::Result<()> {
    let mut invalid_noted = false;

    for record in records {
        match &record.answer {
            DecodedAnswer::A(_) | DecodedAnswer::Aaaa(_) => {
                writeln!(out, "Name: {}", record.name)?;
                writeln!(out, "Address: {}", record.answer)?;
            }
            DecodedAnswer::Ns(ns) => writeln!(out, "{}\t nameserver = {}", record.name, ns)?,
            DecodedAnswer::Cname(target) => {
                writeln!(out, "{}\t canonical name = {}", record.name, target)?
            }
            DecodedAnswer::Ptr(target) => writeln!(out, "{}\t name = {}", record.name, target)?,
            DecodedAnswer::Mx {
                preference,
                exchange,
            } => writeln!(
                out,
                "{}\t mail exchanger = {} {}",
                record.name, preference, exchange
            )?,
            DecodedAnswer::Txt(_) => writeln!(out, "{}\t text = {}", record.name, record.answer)?,
            DecodedAnswer::Soa(soa) => {
                writeln!(out, "{}", record.name)?;
                writeln!(out, "\t origin: {}", soa.primary_ns)?;
                writeln!(out, "\t mail addr: {}", soa.mailbox)?;
                writeln!(out, "\t serial: {}", soa.serial)?;
                writeln!(out, "\t refresh: {}", soa.refresh)?;
                writeln!(out, "\t retry: {}", soa.retry)?;
                writeln!(out, "\t expire: {}", soa.expire)?;
                writeln!(out, "\t minimum: {}", soa.minimum)?;
            }
            DecodedAnswer::Unsupported { .. } => {
                if !invalid_noted {
                    writeln!(out, "The option is invalid")?;
                    invalid_noted = true;
                }
            }
        }
    }

    writeln!(out)
}

fn write_glue<W: Write>(out: &mut W, glue: &[GlueRecord]) -> io::Result<()> {
    for record in glue {
        match record.address {
            IpAddr::V4(addr) => {
                writeln!(out, "{} has an internet address = {}", record.nameserver, addr)?
            }
            IpAddr::V6(addr) => writeln!(
                out,
                "{} has AAAA address = {}",
                record.nameserver,
                format_ipv6(&addr)
            )?,
        }
    }
    writeln!(out)
}

fn display_ip(ip: &IpAddr) -> String {
    match ip {
        IpAddr::V4(addr) => addr.to_string(),
        IpAddr::V6(addr) => format_ipv6(addr),
    }
}
