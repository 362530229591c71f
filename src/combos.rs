//! Exhaustive uppercase letter combinations
//!
//! Independent of the dataset. Order is nested-loop order with the first
//! letter varying slowest, which is also plain lexicographic order.

use crate::letters::{letter, ALPHABET_LEN};

/// All 676 two-letter strings, `AA` through `ZZ`
pub fn enumerate_pairs() -> Vec<String> {
    (0..ALPHABET_LEN)
        .flat_map(|i| (0..ALPHABET_LEN).map(move |j| word(&[i, j])))
        .collect()
}

/// All 17576 three-letter strings, `AAA` through `ZZZ`, as one flat list
pub fn enumerate_triples() -> Vec<String> {
    (0..ALPHABET_LEN)
        .flat_map(|i| {
            (0..ALPHABET_LEN)
                .flat_map(move |j| (0..ALPHABET_LEN).map(move |k| word(&[i, j, k])))
        })
        .collect()
}

fn word(indices: &[usize]) -> String {
    indices.iter().map(|&i| letter(i)).collect()
}
