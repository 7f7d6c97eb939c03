use rand::rngs::SmallRng;
use rand::Rng;
use rand::SeedableRng;

use crate::StringTable;

const MIN_WORD_LEN: usize = 3;
const MAX_WORD_LEN: usize = 8;
const MAX_DEFINITION_WORDS: usize = 5;

/// Produces random uppercase words and lowercase definitions.
pub struct WordGenerator {
    rng: SmallRng,
}

impl WordGenerator {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    pub fn word(&mut self) -> String {
        self.letters(b'A'..=b'Z')
    }

    pub fn definition(&mut self) -> String {
        let count = self.rng.gen_range(1..=MAX_DEFINITION_WORDS);
        (0..count)
            .map(|_| self.letters(b'a'..=b'z'))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Add `count` words not already in `table`. Returns the words added.
    pub fn fill(&mut self, table: &mut StringTable, count: usize) -> Vec<String> {
        let mut added = Vec::new();
        while added.len() < count {
            let word = self.word();
            if table.contains_key(&word) {
                continue;
            }
            let definition = self.definition();
            table.add(word.clone(), definition);
            added.push(word);
        }
        added
    }

    fn letters(&mut self, range: std::ops::RangeInclusive<u8>) -> String {
        let len = self.rng.gen_range(MIN_WORD_LEN..=MAX_WORD_LEN);
        (0..len)
            .map(|_| self.rng.gen_range(range.clone()) as char)
            .collect()
    }
}
