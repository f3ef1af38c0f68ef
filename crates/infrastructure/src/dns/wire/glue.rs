//! Ties additional-section addresses to the name servers they belong to.

use nslookup_domain::{DecodedAnswer, DecodedRecord, GlueRecord};
use std::net::IpAddr;

/// Pairs each additional A/AAAA record with an NS target from the answer
/// or authority section.
///
/// A record whose owner name equals an NS target is matched by name.
/// Otherwise the pairing is positional: an A record takes the next name
/// server not yet handed out by position, and an AAAA record reuses the
/// one the previous A record was paired with. Name matches leave the
/// positional cursor alone. Positional matches are best-effort; when the
/// counts do not line up, records past the end of the NS list are dropped.
pub fn correlate(
    answers: &[DecodedRecord],
    authority: &[DecodedRecord],
    additional: &[DecodedRecord],
) -> Vec<GlueRecord> {
    let nameservers: Vec<&str> = answers
        .iter()
        .chain(authority.iter())
        .filter_map(|r| match &r.answer {
            DecodedAnswer::Ns(name) => Some(name.as_str()),
            _ => None,
        })
        .collect();

    if nameservers.is_empty() {
        return Vec::new();
    }

    let mut glue = Vec::new();
    let mut next = 0usize;
    let mut last_a: Option<usize> = None;

    for record in additional {
        let (address, is_v4) = match &record.answer {
            DecodedAnswer::A(addr) => (IpAddr::V4(*addr), true),
            DecodedAnswer::Aaaa(addr) => (IpAddr::V6(*addr), false),
            _ => continue,
        };

        let by_name = nameservers
            .iter()
            .position(|ns| ns.eq_ignore_ascii_case(&record.name));

        let slot = match (by_name, is_v4) {
            (Some(index), _) => Some(index),
            (None, true) => {
                next += 1;
                Some(next - 1)
            }
            (None, false) => last_a,
        };

        if is_v4 {
            last_a = slot;
        }

        if let Some(nameserver) = slot.and_then(|index| nameservers.get(index)) {
            glue.push(GlueRecord {
                nameserver: (*nameserver).to_string(),
                address,
            });
        }
    }

    glue
}
