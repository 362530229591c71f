//! countrygen - ISO 3166-1 lookup table generator
//!
//! Reads a JSON country dataset and emits Go source for dense code lookup
//! tables, code-to-name maps, and exhaustive letter combination lists.

pub mod combos;
pub mod config;
pub mod dataset;
pub mod error;
pub mod generate;
pub mod letters;
pub mod lookup;
pub mod map;
pub mod render;
pub mod table;

pub use dataset::{CodeKind, Country};
pub use error::{CodegenError, Result};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = "countrygen";
