//! Per message type counters for summary mode

use std::collections::BTreeMap;

/// Occurrence count per message type tag, iterated in tag order
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MessageSummary {
    counts: BTreeMap<String, u64>,
}

impl MessageSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, msg_type: &str) {
        *self.counts.entry(msg_type.to_string()).or_insert(0) += 1;
    }

    pub fn count(&self, msg_type: &str) -> u64 {
        self.counts.get(msg_type).copied().unwrap_or(0)
    }

    /// Sum of all counts
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(tag, count)| (tag.as_str(), *count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_order() {
        let mut summary = MessageSummary::new();
        for tag in ["D", "A", "8", "D", "AE", "D"] {
            summary.record(tag);
        }

        assert_eq!(summary.count("D"), 3);
        assert_eq!(summary.count("A"), 1);
        assert_eq!(summary.count("5"), 0);
        assert_eq!(summary.total(), 6);
        assert_eq!(summary.len(), 4);

        let tags: Vec<_> = summary.iter().map(|(tag, _)| tag).collect();
        assert_eq!(tags, vec!["8", "A", "AE", "D"]);
    }

    #[test]
    fn test_empty() {
        let summary = MessageSummary::new();
        assert!(summary.is_empty());
        assert_eq!(summary.total(), 0);
    }
}
