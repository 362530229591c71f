//! Ordered code-to-name maps

use crate::dataset::{CodeKind, Country};
use crate::Result;
use log::{debug, warn};
use std::collections::HashMap;

/// Insertion-ordered map from country code to country name
///
/// Re-inserting an existing code replaces its name but keeps the code's
/// original position, so the rendered map follows first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeMap {
    entries: Vec<(String, String)>,
    positions: HashMap<String, usize>,
}

impl CodeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite, returning the replaced name
    pub fn insert(&mut self, code: &str, name: &str) -> Option<String> {
        match self.positions.get(code) {
            Some(&pos) => Some(std::mem::replace(
                &mut self.entries[pos].1,
                name.to_string(),
            )),
            None => {
                self.positions.insert(code.to_string(), self.entries.len());
                self.entries.push((code.to_string(), name.to_string()));
                None
            }
        }
    }

    pub fn get(&self, code: &str) -> Option<&str> {
        self.positions
            .get(code)
            .map(|&pos| self.entries[pos].1.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(code, name)| (code.as_str(), name.as_str()))
    }
}

fn build_map(records: &[Country], kind: CodeKind) -> Result<CodeMap> {
    let mut map = CodeMap::new();
    for country in records {
        let code = kind.validate(kind.code(country))?;
        if let Some(previous) = map.insert(code, &country.name) {
            warn!(
                "Duplicate code {}: {:?} replaces {:?}",
                code, country.name, previous
            );
        }
    }
    debug!("Built {:?} map with {} entries", kind, map.len());
    Ok(map)
}

/// Build the alpha-2 code map in dataset order
pub fn build_alpha2_map(records: &[Country]) -> Result<CodeMap> {
    build_map(records, CodeKind::Alpha2)
}

/// Build the alpha-3 code map in dataset order
pub fn build_alpha3_map(records: &[Country]) -> Result<CodeMap> {
    build_map(records, CodeKind::Alpha3)
}
