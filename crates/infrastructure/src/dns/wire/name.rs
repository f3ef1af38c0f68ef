//! Domain name encoding and decompression (RFC 1035 §3.1, §4.1.4).

use nslookup_domain::DomainError;
use smallvec::SmallVec;

pub const MAX_LABEL_LEN: usize = 63;
pub const MAX_NAME_LEN: usize = 255;

/// Upper bound on pointer hops while decoding one name.
const MAX_COMPRESSION_JUMPS: usize = 128;

const POINTER_TAG: u8 = 0xC0;

/// Appends `name` as uncompressed length-prefixed labels plus the root byte.
///
/// A single trailing dot is accepted; the empty string and `"."` encode the
/// root. Empty inner labels and labels over 63 bytes are rejected.
pub fn encode_name(name: &str, out: &mut Vec<u8>) -> Result<(), DomainError> {
    let trimmed = name.strip_suffix('.').unwrap_or(name);
    let start = out.len();

    if !trimmed.is_empty() {
        for label in trimmed.split('.') {
            if label.is_empty() || label.len() > MAX_LABEL_LEN {
                out.truncate(start);
                return Err(DomainError::InvalidDomainName(format!(
                    "{}: label must be 1 to {} bytes",
                    name, MAX_LABEL_LEN
                )));
            }
            out.push(label.len() as u8);
            out.extend_from_slice(label.as_bytes());
        }
    }
    out.push(0);

    if out.len() - start > MAX_NAME_LEN {
        out.truncate(start);
        return Err(DomainError::InvalidDomainName(format!(
            "{}: longer than {} bytes",
            name, MAX_NAME_LEN
        )));
    }
    Ok(())
}

/// Decodes the name at `offset`, following compression pointers.
///
/// Returns the dot-joined name (no trailing dot, `""` for the root) and the
/// bytes the name occupies at `offset`. A pointer always counts as exactly
/// two bytes; whatever it points at is not part of the consumed length.
///
/// Pointers must target an offset strictly before their own position, and
/// at most [`MAX_COMPRESSION_JUMPS`] are followed. A name that grows past
/// 255 bytes after a jump is a pointer loop and reported as
/// `MalformedPointer`; without any jump it is `NameTooLong`.
pub fn decode_name(buf: &[u8], offset: usize) -> Result<(String, usize), DomainError> {
    let mut labels: SmallVec<[&[u8]; 8]> = SmallVec::new();
    let mut wire_len = 1;
    let mut pos = offset;
    let mut consumed = None;
    let mut jumps = 0;
    let mut last_jump: Option<(usize, usize)> = None;

    loop {
        let len_byte = *buf
            .get(pos)
            .ok_or(DomainError::TruncatedRecord { offset: pos })?;

        if len_byte & POINTER_TAG == POINTER_TAG {
            let low = *buf
                .get(pos + 1)
                .ok_or(DomainError::TruncatedRecord { offset: pos + 1 })?;
            let target = usize::from(u16::from_be_bytes([len_byte & !POINTER_TAG, low]));

            if target >= pos || jumps >= MAX_COMPRESSION_JUMPS {
                return Err(DomainError::MalformedPointer {
                    offset: pos,
                    target,
                });
            }

            consumed.get_or_insert(pos + 2 - offset);
            last_jump = Some((pos, target));
            jumps += 1;
            pos = target;
            continue;
        }

        // 0x40 and 0x80 prefixes are reserved label types.
        if len_byte & POINTER_TAG != 0 {
            return Err(DomainError::InvalidLabel {
                offset: pos,
                value: len_byte,
            });
        }

        if len_byte == 0 {
            consumed.get_or_insert(pos + 1 - offset);
            break;
        }

        let len = usize::from(len_byte);
        let label = buf
            .get(pos + 1..pos + 1 + len)
            .ok_or(DomainError::TruncatedRecord { offset: pos + 1 })?;

        wire_len += 1 + len;
        if wire_len > MAX_NAME_LEN {
            return Err(match last_jump {
                Some((from, target)) => DomainError::MalformedPointer {
                    offset: from,
                    target,
                },
                None => DomainError::NameTooLong { offset },
            });
        }

        labels.push(label);
        pos += 1 + len;
    }

    let mut name = String::with_capacity(wire_len);
    for (i, label) in labels.iter().enumerate() {
        if i > 0 {
            name.push('.');
        }
        name.push_str(&String::from_utf8_lossy(label));
    }

    Ok((name, consumed.unwrap_or(1)))
}
