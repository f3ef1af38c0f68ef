use super::RecordType;

/// What a user-supplied name asks for: a forward lookup of the name itself,
/// or a reverse lookup when the first label is numeric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupTarget {
    Forward { name: String },
    Reverse { labels: Vec<String> },
}

impl LookupTarget {
    /// Total classification of an input name. A single trailing dot is ignored.
    pub fn classify(input: &str) -> Self {
        let trimmed = input.strip_suffix('.').unwrap_or(input);
        let first = trimmed.split('.').next().unwrap_or_default();

        if !first.is_empty() && first.bytes().all(|b| b.is_ascii_digit()) {
            LookupTarget::Reverse {
                labels: trimmed.split('.').map(str::to_string).collect(),
            }
        } else {
            LookupTarget::Forward {
                name: trimmed.to_string(),
            }
        }
    }

    pub fn is_reverse(&self) -> bool {
        matches!(self, LookupTarget::Reverse { .. })
    }

    /// Name placed in the question section; reverse targets become
    /// `<labels reversed>.in-addr.arpa`.
    pub fn query_name(&self) -> String {
        match self {
            LookupTarget::Forward { name } => name.clone(),
            LookupTarget::Reverse { labels } => {
                let mut parts: Vec<&str> = labels.iter().rev().map(String::as_str).collect();
                parts.push("in-addr");
                parts.push("arpa");
                parts.join(".")
            }
        }
    }

    /// Reverse lookups always ask for PTR, whatever type the caller wanted.
    pub fn forced_type(&self) -> Option<RecordType> {
        match self {
            LookupTarget::Forward { .. } => None,
            LookupTarget::Reverse { .. } => Some(RecordType::PTR),
        }
    }

    pub fn effective_type(&self, requested: RecordType) -> RecordType {
        self.forced_type().unwrap_or(requested)
    }
}
