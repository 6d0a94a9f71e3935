use uuid::Uuid;

/// Supplies identifiers for social links saved without one.
pub trait IdSource {
    fn next_id(&mut self) -> String;
}

/// Random v4 UUIDs. The production source.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdSource for UuidIds {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// `"{prefix}-1"`, `"{prefix}-2"`, ... for reproducible output.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    issued: u64,
}

impl SequentialIds {
    #[must_use]
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_owned(),
            issued: 0,
        }
    }

    /// Number of ids handed out so far.
    #[must_use]
    pub fn issued(&self) -> u64 {
        self.issued
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> String {
        self.issued += 1;
        format!("{}-{}", self.prefix, self.issued)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn uuid_ids_are_distinct() {
        let mut ids = UuidIds;
        let issued: HashSet<String> = (0..50).map(|_| ids.next_id()).collect();
        assert_eq!(issued.len(), 50);
    }

    #[test]
    fn sequential_ids_count_from_one() {
        let mut ids = SequentialIds::new("link");
        assert_eq!(ids.next_id(), "link-1");
        assert_eq!(ids.next_id(), "link-2");
        assert_eq!(ids.issued(), 2);
    }
}
