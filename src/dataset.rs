//! Country dataset loading
//!
//! The dataset is a JSON array of objects carrying at least `name`,
//! `iso_3166_1_alpha2` and `iso_3166_1_alpha3`. Other fields are ignored.

use crate::{CodegenError, Result};
use log::{debug, info};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Default dataset location, relative to the working directory
pub const DEFAULT_DATASET_PATH: &str = "country/testdata/countries.json";

/// One country entry from the dataset
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Country {
    pub name: String,

    #[serde(rename = "iso_3166_1_alpha2")]
    pub alpha2: String,

    #[serde(rename = "iso_3166_1_alpha3")]
    pub alpha3: String,
}

/// Which ISO 3166-1 code a table or map is keyed by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeKind {
    Alpha2,
    Alpha3,
}

impl CodeKind {
    /// Required code length
    pub fn code_len(self) -> usize {
        match self {
            CodeKind::Alpha2 => 2,
            CodeKind::Alpha3 => 3,
        }
    }

    /// Select this kind's code from a country record
    pub fn code(self, country: &Country) -> &str {
        match self {
            CodeKind::Alpha2 => &country.alpha2,
            CodeKind::Alpha3 => &country.alpha3,
        }
    }

    /// Pick the kind matching a code's length, if any
    pub fn for_code(code: &str) -> Option<Self> {
        match code.len() {
            2 => Some(CodeKind::Alpha2),
            3 => Some(CodeKind::Alpha3),
            _ => None,
        }
    }

    /// Check that a code has this kind's length and is all uppercase letters
    pub fn validate(self, code: &str) -> Result<&str> {
        let ok = code.len() == self.code_len() && code.bytes().all(|b| b.is_ascii_uppercase());
        if ok {
            Ok(code)
        } else {
            Err(CodegenError::invalid_code(code, self.code_len()))
        }
    }
}

/// Load the dataset from a file
///
/// The file is read once and closed before returning, parse failure included.
pub fn load_countries(path: &Path) -> Result<Vec<Country>> {
    debug!("Loading countries from {:?}", path);
    let file = File::open(path)?;
    let countries = read_countries(BufReader::new(file))?;
    info!("Loaded {} countries from {}", countries.len(), path.display());
    Ok(countries)
}

/// Parse the dataset from any reader
pub fn read_countries<R: Read>(reader: R) -> Result<Vec<Country>> {
    Ok(serde_json::from_reader(reader)?)
}

/// Parse the dataset from an in-memory JSON string
pub fn parse_countries(json: &str) -> Result<Vec<Country>> {
    Ok(serde_json::from_str(json)?)
}
