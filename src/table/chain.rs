use std::vec;

/// A stored key/value pair. Never mutated once created.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    key: String,
    value: String,
}

impl Entry {
    pub fn new(key: String, value: String) -> Self {
        Self { key, value }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Entries sharing one bucket, in insertion order. Duplicate keys are kept.
#[derive(Debug, Default)]
pub struct Chain {
    entries: Vec<Entry>,
}

impl Chain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// First entry whose key matches exactly.
    pub fn find_by_key(&self, key: &str) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.key == key)
    }

    /// Remove the first entry whose key matches. Returns whether one was removed.
    pub fn remove_by_key(&mut self, key: &str) -> bool {
        match self.entries.iter().position(|entry| entry.key == key) {
            Some(pos) => {
                self.entries.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }
}

impl IntoIterator for Chain {
    type Item = Entry;
    type IntoIter = vec::IntoIter<Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(key: &str, value: &str) -> Entry {
        Entry::new(key.to_owned(), value.to_owned())
    }

    fn keys(chain: &Chain) -> Vec<&str> {
        chain.iter().map(Entry::key).collect()
    }

    #[test]
    fn append_keeps_insertion_order() {
        let mut chain = Chain::new();
        chain.append(entry("A", "1"));
        chain.append(entry("B", "2"));
        chain.append(entry("C", "3"));
        assert_eq!(chain.len(), 3);
        assert_eq!(keys(&chain), vec!["A", "B", "C"]);
    }

    #[test]
    fn find_returns_first_match() {
        let mut chain = Chain::new();
        chain.append(entry("A", "first"));
        chain.append(entry("A", "second"));
        assert_eq!(chain.find_by_key("A").map(Entry::value), Some("first"));
        assert_eq!(chain.find_by_key("a"), None);
        assert_eq!(chain.find_by_key("B"), None);
    }

    #[test]
    fn remove_head_middle_and_tail() {
        let mut chain = Chain::new();
        for key in ["A", "B", "C", "D"] {
            chain.append(entry(key, key));
        }

        assert!(chain.remove_by_key("A"));
        assert_eq!(keys(&chain), vec!["B", "C", "D"]);
        assert!(chain.remove_by_key("C"));
        assert_eq!(keys(&chain), vec!["B", "D"]);
        assert!(chain.remove_by_key("D"));
        assert_eq!(keys(&chain), vec!["B"]);

        chain.append(entry("E", "E"));
        assert_eq!(keys(&chain), vec!["B", "E"]);
    }

    #[test]
    fn remove_takes_one_occurrence() {
        let mut chain = Chain::new();
        chain.append(entry("A", "first"));
        chain.append(entry("A", "second"));
        assert!(chain.remove_by_key("A"));
        assert_eq!(chain.len(), 1);
        assert_eq!(chain.find_by_key("A").map(Entry::value), Some("second"));
    }

    #[test]
    fn remove_missing_is_a_no_op() {
        let mut chain = Chain::new();
        assert!(!chain.remove_by_key("A"));
        chain.append(entry("A", "1"));
        assert!(!chain.remove_by_key("B"));
        assert_eq!(chain.len(), 1);
        assert!(chain.remove_by_key("A"));
        assert!(chain.is_empty());
    }
}
