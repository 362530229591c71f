//! Configuration management
//!
//! Settings live in an optional INI file (`~/.countrygen.cfg` unless a path
//! is given). Every key has a built-in default, so running without a config
//! file reproduces the stock Go `country` package declarations.

use crate::dataset::DEFAULT_DATASET_PATH;
use crate::{CodegenError, Result};
use ini::Ini;
use log::{debug, info};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};

/// Valid Go identifier (ASCII subset)
static IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier regex is valid"));

const DEFAULT_PACKAGE: &str = "country";
const DEFAULT_INDENT: usize = 4;
const MAX_INDENT: usize = 16;

/// Identifiers used for the generated declarations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclNames {
    pub iso2table: String,
    pub iso3table: String,
    pub iso2map: String,
    pub iso3map: String,
    pub char2words: String,
    pub char3words: String,
}

impl Default for DeclNames {
    fn default() -> Self {
        Self {
            iso2table: "iso2table".to_string(),
            iso3table: "iso3table".to_string(),
            iso2map: "iso2map".to_string(),
            iso3map: "iso3map".to_string(),
            char2words: "char2words".to_string(),
            char3words: "char3words".to_string(),
        }
    }
}

impl DeclNames {
    fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("iso2table", self.iso2table.as_str()),
            ("iso3table", self.iso3table.as_str()),
            ("iso2map", self.iso2map.as_str()),
            ("iso3map", self.iso3map.as_str()),
            ("char2words", self.char2words.as_str()),
            ("char3words", self.char3words.as_str()),
        ]
        .into_iter()
    }
}

/// Generator configuration
pub struct Config {
    /// INI configuration storage
    ini: Ini,

    /// Where the settings came from, `None` when running on defaults
    path: Option<PathBuf>,
}

impl Config {
    /// Load configuration
    ///
    /// An explicit `path` must exist. Without one, the default location is
    /// tried and silently skipped when absent.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, required) = match path {
            Some(p) => (Some(p.to_path_buf()), true),
            None => (Self::config_path(), false),
        };

        let path = match path {
            Some(p) if p.exists() => p,
            Some(p) if required => {
                return Err(CodegenError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            _ => {
                info!("No config file, using defaults");
                return Ok(Self::defaults());
            }
        };

        debug!("Loading config from {:?}", path);
        let ini = Ini::load_from_file(&path)
            .map_err(|e| CodegenError::IniParse(format!("Failed to load config: {}", e)))?;

        let config = Self {
            ini,
            path: Some(path),
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from INI text
    pub fn parse(text: &str) -> Result<Self> {
        let ini = Ini::load_from_str(text)
            .map_err(|e| CodegenError::IniParse(format!("Failed to parse config: {}", e)))?;
        let config = Self { ini, path: None };
        config.validate()?;
        Ok(config)
    }

    /// Configuration with every key at its default
    pub fn defaults() -> Self {
        Self {
            ini: Ini::new(),
            path: None,
        }
    }

    /// Default config file path (~/.countrygen.cfg)
    fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".countrygen.cfg"))
    }

    /// Where the settings were loaded from
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn validate(&self) -> Result<()> {
        let package = self.package();
        if !IDENTIFIER.is_match(&package) {
            return Err(CodegenError::Config(format!(
                "Invalid package name: {:?}",
                package
            )));
        }

        let names = self.names();
        for (key, value) in names.iter() {
            if !IDENTIFIER.is_match(value) {
                return Err(CodegenError::Config(format!(
                    "Invalid identifier for {}: {:?}",
                    key, value
                )));
            }
        }

        self.indent()?;
        Ok(())
    }

    /// Get a string value from config
    pub fn get_string(&self, section: &str, key: &str, default: &str) -> String {
        self.ini
            .get_from(Some(section), key)
            .unwrap_or(default)
            .to_string()
    }

    /// Dataset file, relative to the working directory unless absolute
    pub fn dataset_path(&self) -> PathBuf {
        PathBuf::from(self.get_string("dataset", "path", DEFAULT_DATASET_PATH))
    }

    /// Go package name for full-file output
    pub fn package(&self) -> String {
        self.get_string("output", "package", DEFAULT_PACKAGE)
    }

    /// Indent unit for generated source
    ///
    /// `indent = tab` selects a tab, a number selects that many spaces (at
    /// most 16).
    pub fn indent(&self) -> Result<String> {
        match self.ini.get_from(Some("output"), "indent") {
            None => Ok(" ".repeat(DEFAULT_INDENT)),
            Some("tab") => Ok("\t".to_string()),
            Some(value) => match value.trim().parse::<usize>() {
                Ok(n) if n <= MAX_INDENT => Ok(" ".repeat(n)),
                _ => Err(CodegenError::Config(format!(
                    "Invalid indent: {:?} (expected \"tab\" or 0-{} spaces)",
                    value, MAX_INDENT
                ))),
            },
        }
    }

    /// Declaration identifiers, each falling back to its stock name
    pub fn names(&self) -> DeclNames {
        let defaults = DeclNames::default();
        DeclNames {
            iso2table: self.get_string("names", "iso2table", &defaults.iso2table),
            iso3table: self.get_string("names", "iso3table", &defaults.iso3table),
            iso2map: self.get_string("names", "iso2map", &defaults.iso2map),
            iso3map: self.get_string("names", "iso3map", &defaults.iso3map),
            char2words: self.get_string("names", "char2words", &defaults.char2words),
            char3words: self.get_string("names", "char3words", &defaults.char3words),
        }
    }
}
