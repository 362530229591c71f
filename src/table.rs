//! Dense letter-indexed lookup tables
//!
//! A table for `N`-letter codes holds 26^N cells. Cell position comes from
//! decomposing the code into alphabet positions, so `"TL"` lives at row 19,
//! column 11. Cells nobody claims stay as the empty string, which is also
//! how the generated Go source marks "no country".

use crate::dataset::{CodeKind, Country};
use crate::letters::{code_indices, letter, ALPHABET_LEN};
use crate::{CodegenError, Result};
use log::{debug, log_enabled, warn, Level};

/// Lookup table for `N`-letter uppercase codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTable<const N: usize> {
    /// Cells in row-major order (first letter varies slowest)
    cells: Vec<String>,
}

/// 26x26 grid keyed by ISO 3166-1 alpha-2 code
pub type Alpha2Table = LookupTable<2>;

/// 26x26x26 cube keyed by ISO 3166-1 alpha-3 code
pub type Alpha3Table = LookupTable<3>;

impl<const N: usize> LookupTable<N> {
    /// Total number of cells, 26^N
    pub const CELLS: usize = ALPHABET_LEN.pow(N as u32);

    /// Create a table with every cell empty
    pub fn new() -> Self {
        Self {
            cells: vec![String::new(); Self::CELLS],
        }
    }

    /// Number of letters in each key
    pub fn code_len(&self) -> usize {
        N
    }

    fn flat_index(indices: [usize; N]) -> usize {
        indices
            .iter()
            .fold(0, |acc, &i| acc * ALPHABET_LEN + i)
    }

    fn code_at(flat: usize) -> String {
        let mut code = vec!['A'; N];
        let mut rest = flat;
        for slot in code.iter_mut().rev() {
            *slot = letter(rest % ALPHABET_LEN);
            rest /= ALPHABET_LEN;
        }
        code.into_iter().collect()
    }

    /// Store `name` under `code`, returning the name it replaced (if any)
    pub fn insert(&mut self, code: &str, name: &str) -> Result<Option<String>> {
        let indices =
            code_indices::<N>(code).ok_or_else(|| CodegenError::invalid_code(code, N))?;
        let cell = &mut self.cells[Self::flat_index(indices)];
        let previous = std::mem::replace(cell, name.to_string());
        Ok(if previous.is_empty() {
            None
        } else {
            Some(previous)
        })
    }

    /// Cell at the given alphabet positions
    ///
    /// Panics if any position is 26 or more.
    pub fn cell(&self, indices: [usize; N]) -> &str {
        assert!(
            indices.iter().all(|&i| i < ALPHABET_LEN),
            "table index out of range: {:?}",
            indices
        );
        &self.cells[Self::flat_index(indices)]
    }

    /// Look up the name stored under `code`
    ///
    /// Returns `None` for empty cells and for anything that is not exactly
    /// `N` uppercase letters.
    pub fn get(&self, code: &str) -> Option<&str> {
        let indices = code_indices::<N>(code)?;
        let name = self.cells[Self::flat_index(indices)].as_str();
        (!name.is_empty()).then_some(name)
    }

    /// All cells in index order, empty ones included
    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    /// Number of non-empty cells
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Non-empty cells as `(code, name)` pairs, in index order
    pub fn entries(&self) -> impl Iterator<Item = (String, &str)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, name)| !name.is_empty())
            .map(|(i, name)| (Self::code_at(i), name.as_str()))
    }
}

impl<const N: usize> Default for LookupTable<N> {
    fn default() -> Self {
        Self::new()
    }
}

fn build_table<const N: usize>(records: &[Country], kind: CodeKind) -> Result<LookupTable<N>> {
    debug_assert_eq!(kind.code_len(), N);

    let mut table = LookupTable::<N>::new();
    for country in records {
        let code = kind.code(country);
        if let Some(previous) = table.insert(code, &country.name)? {
            warn!(
                "Duplicate code {}: {:?} replaces {:?}",
                code, country.name, previous
            );
        }
    }

    debug!(
        "Built {}-letter table: {} of {} cells occupied",
        N,
        table.occupied(),
        LookupTable::<N>::CELLS
    );
    if log_enabled!(Level::Debug) {
        let codes: Vec<String> = table.entries().map(|(code, _)| code).collect();
        debug!("Occupied codes: {}", codes.join(" "));
    }
    Ok(table)
}

/// Build the 26x26 alpha-2 grid
///
/// Later records overwrite earlier ones with the same code. Any malformed
/// code aborts the build.
pub fn build_alpha2_table(records: &[Country]) -> Result<Alpha2Table> {
    build_table(records, CodeKind::Alpha2)
}

/// Build the 26x26x26 alpha-3 cube
pub fn build_alpha3_table(records: &[Country]) -> Result<Alpha3Table> {
    build_table(records, CodeKind::Alpha3)
}
