//! Country lookups against built tables
//!
//! Answers the same questions the generated Go package does: which country
//! owns a 2- or 3-letter code, which country goes by a given name, and what
//! its flag emoji is.

use crate::dataset::{CodeKind, Country};
use crate::table::{build_alpha2_table, build_alpha3_table};
use crate::{CodegenError, Result};
use log::debug;
use std::collections::HashMap;

/// Offset from an uppercase ASCII letter to its regional indicator symbol
const REGIONAL_INDICATOR_OFFSET: u32 = 0x1F1A5;

/// Exact-match index over country names and codes
///
/// Later records win when two share a key, same as the code tables.
pub struct NameIndex<'a> {
    entries: HashMap<&'a str, &'a Country>,
}

impl<'a> NameIndex<'a> {
    pub fn new(countries: &'a [Country]) -> Self {
        let mut entries = HashMap::new();
        for country in countries {
            entries.insert(country.alpha2.as_str(), country);
            entries.insert(country.alpha3.as_str(), country);
            entries.insert(country.name.as_str(), country);
        }
        debug!("Name index holds {} keys", entries.len());
        Self { entries }
    }

    /// Case-sensitive lookup
    pub fn find(&self, name: &str) -> Option<&'a Country> {
        self.entries.get(name).copied()
    }
}

/// Resolve a code or a name to its country record
///
/// Two- and three-character input is treated as an alpha-2 or alpha-3 code:
/// it is uppercased, must be all letters, and goes through the lookup
/// tables. Anything else is matched exactly against country names.
pub fn lookup<'a>(countries: &'a [Country], query: &str) -> Result<&'a Country> {
    let Some(kind) = CodeKind::for_code(query) else {
        debug!("Looking up {:?} by name", query);
        return NameIndex::new(countries)
            .find(query)
            .ok_or_else(|| CodegenError::NotFound(query.to_string()));
    };

    let code = query.to_ascii_uppercase();
    let code = kind.validate(&code)?;
    debug!("Looking up {} as {:?}", code, kind);

    let found = match kind {
        CodeKind::Alpha2 => build_alpha2_table(countries)?.get(code).is_some(),
        CodeKind::Alpha3 => build_alpha3_table(countries)?.get(code).is_some(),
    };

    // The table keeps the last record for a code, so search from the end
    found
        .then(|| countries.iter().rev().find(|c| kind.code(c) == code))
        .flatten()
        .ok_or_else(|| CodegenError::NotFound(code.to_string()))
}

/// Flag emoji for an alpha-2 code
///
/// Each letter becomes its regional indicator symbol, so `"US"` gives 🇺🇸.
pub fn flag(code: &str) -> Result<String> {
    let code = code.to_ascii_uppercase();
    let code = CodeKind::Alpha2.validate(&code)?;
    code.chars()
        .map(|c| {
            char::from_u32(c as u32 + REGIONAL_INDICATOR_OFFSET)
                .ok_or_else(|| CodegenError::invalid_code(code, 2))
        })
        .collect()
}
