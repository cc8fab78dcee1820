#![allow(dead_code)]

use compact_trie::Trie;
use once_cell::sync::Lazy;
use rand::seq::SliceRandom;

/// The seed words in sorted order.
pub const SORTED_WORDS: [&str; 13] = [
    "compute",
    "computer",
    "contain",
    "contaminate",
    "corn",
    "corner",
    "mahjong",
    "mahogany",
    "mat",
    "material",
    "maternal",
    "math",
    "matrix",
];

/// The seed words in a random order.
pub fn permuted() -> Vec<&'static str> {
    let mut words = SORTED_WORDS.to_vec();
    words.shuffle(&mut rand::thread_rng());
    words
}

/// A trie built from the seed words, inserted in a random order.
pub fn seeded() -> Trie {
    permuted().into_iter().collect()
}

/// Shared read-only copy of [`seeded`].
pub static SEEDED: Lazy<Trie> = Lazy::new(seeded);

/// Seed words with the given prefix, in sorted order.
pub fn words_with_prefix(prefix: &str) -> Vec<String> {
    SORTED_WORDS
        .iter()
        .filter(|word| word.starts_with(prefix))
        .map(|word| word.to_string())
        .collect()
}
