use std::collections::HashMap;

/// Occurrence count per position hash, for threefold repetition.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct RepetitionTable {
    counts: HashMap<u64, u32>,
}

impl RepetitionTable {
    pub(crate) fn new() -> Self {
        RepetitionTable {
            counts: HashMap::new(),
        }
    }

    pub(crate) fn get(&self, hash: u64) -> u32 {
        self.counts.get(&hash).copied().unwrap_or(0)
    }

    pub(crate) fn set(&mut self, hash: u64, count: u32) {
        if count == 0 {
            self.counts.remove(&hash);
        } else {
            self.counts.insert(hash, count);
        }
    }

    pub(crate) fn increment(&mut self, hash: u64) -> u32 {
        let next = self.get(hash).saturating_add(1);
        self.set(hash, next);
        next
    }

    pub(crate) fn decrement(&mut self, hash: u64) {
        let next = self.get(hash).saturating_sub(1);
        self.set(hash, next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decrement_removes_entry() {
        let mut table = RepetitionTable::new();
        assert_eq!(table.increment(42), 1);
        assert_eq!(table.increment(42), 2);
        table.decrement(42);
        table.decrement(42);
        assert_eq!(table.get(42), 0);
        assert_eq!(table, RepetitionTable::new());
    }
}
