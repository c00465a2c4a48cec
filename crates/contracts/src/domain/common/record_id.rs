use serde::{Deserialize, Serialize};

/// Sequential identifier generator for one collection, e.g. "MR-0001"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdSequence {
    prefix: &'static str,
    next: u32,
}

impl IdSequence {
    pub fn new(prefix: &'static str) -> Self {
        Self { prefix, next: 1 }
    }

    pub fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Produce the next identifier and advance the sequence
    pub fn next_id(&mut self) -> String {
        let id = format_id(self.prefix, self.next);
        self.next += 1;
        id
    }

    /// Make sure ids generated later never collide with `existing`
    pub fn observe(&mut self, existing: &str) {
        if let Some(n) = parse_sequence(self.prefix, existing) {
            if n >= self.next {
                self.next = n + 1;
            }
        }
    }
}

pub fn format_id(prefix: &str, n: u32) -> String {
    format!("{}{:04}", prefix, n)
}

/// Numeric part of an id carrying `prefix`, if any
pub fn parse_sequence(prefix: &str, id: &str) -> Option<u32> {
    id.strip_prefix(prefix)?.parse::<u32>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_id_is_sequential() {
        let mut seq = IdSequence::new("MR-");
        assert_eq!(seq.next_id(), "MR-0001");
        assert_eq!(seq.next_id(), "MR-0002");
    }

    #[test]
    fn test_observe_skips_past_existing_ids() {
        let mut seq = IdSequence::new("SO-");
        seq.observe("SO-0041");
        seq.observe("SO-0007");
        seq.observe("legacy-12");
        assert_eq!(seq.next_id(), "SO-0042");
    }
}
