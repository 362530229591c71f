//! Artifact selection and the build-then-write pipeline
//!
//! Every requested artifact is fully built before the first byte is
//! written, so an invalid record never leaves partial output behind.

use crate::combos::{enumerate_pairs, enumerate_triples};
use crate::config::DeclNames;
use crate::dataset::Country;
use crate::map::{build_alpha2_map, build_alpha3_map, CodeMap};
use crate::render::Renderer;
use crate::table::{build_alpha2_table, build_alpha3_table, Alpha2Table, Alpha3Table};
use crate::Result;
use log::debug;
use std::io::Write;

/// One generated declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    Alpha2Table,
    Alpha3Table,
    Alpha2Map,
    Alpha3Map,
    Pairs,
    Triples,
}

impl Artifact {
    /// Every artifact, in full-file output order
    pub const ALL: [Artifact; 6] = [
        Artifact::Alpha2Table,
        Artifact::Alpha3Table,
        Artifact::Alpha2Map,
        Artifact::Alpha3Map,
        Artifact::Pairs,
        Artifact::Triples,
    ];

    /// Whether building this artifact reads the country dataset
    pub fn needs_dataset(self) -> bool {
        !matches!(self, Artifact::Pairs | Artifact::Triples)
    }

    /// Declaration identifier for this artifact
    pub fn decl_name(self, names: &DeclNames) -> &str {
        match self {
            Artifact::Alpha2Table => &names.iso2table,
            Artifact::Alpha3Table => &names.iso3table,
            Artifact::Alpha2Map => &names.iso2map,
            Artifact::Alpha3Map => &names.iso3map,
            Artifact::Pairs => &names.char2words,
            Artifact::Triples => &names.char3words,
        }
    }

    /// Build this artifact's data structure
    pub fn build(self, countries: &[Country]) -> Result<Built> {
        debug!("Building {:?}", self);
        Ok(match self {
            Artifact::Alpha2Table => Built::Alpha2Table(build_alpha2_table(countries)?),
            Artifact::Alpha3Table => Built::Alpha3Table(build_alpha3_table(countries)?),
            Artifact::Alpha2Map => Built::Map(build_alpha2_map(countries)?),
            Artifact::Alpha3Map => Built::Map(build_alpha3_map(countries)?),
            Artifact::Pairs => Built::Words(enumerate_pairs()),
            Artifact::Triples => Built::Words(enumerate_triples()),
        })
    }
}

/// A constructed structure waiting to be rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Built {
    Alpha2Table(Alpha2Table),
    Alpha3Table(Alpha3Table),
    Map(CodeMap),
    Words(Vec<String>),
}

impl Built {
    /// Render as a Go declaration named `name`
    pub fn write_to<W: Write>(&self, renderer: &Renderer, out: &mut W, name: &str) -> Result<()> {
        match self {
            Built::Alpha2Table(table) => renderer.write_table(out, name, table),
            Built::Alpha3Table(table) => renderer.write_table(out, name, table),
            Built::Map(map) => renderer.write_map(out, name, map),
            Built::Words(words) => renderer.write_words(out, name, words),
        }
    }
}

/// Output options for a generation run
pub struct Generator<'a> {
    pub renderer: &'a Renderer,
    pub names: &'a DeclNames,
    /// When set, prefix output with a `package` clause for a standalone file
    pub package: Option<&'a str>,
}

impl Generator<'_> {
    /// Build every artifact, then write them in order
    ///
    /// Declarations are separated by a blank line when more than one is
    /// written.
    pub fn generate<W: Write>(
        &self,
        artifacts: &[Artifact],
        countries: &[Country],
        out: &mut W,
    ) -> Result<()> {
        let built = artifacts
            .iter()
            .map(|&artifact| artifact.build(countries).map(|built| (artifact, built)))
            .collect::<Result<Vec<_>>>()?;

        if let Some(package) = self.package {
            self.renderer.write_file_header(out, package)?;
        }

        for (i, (artifact, structure)) in built.iter().enumerate() {
            if i > 0 {
                writeln!(out)?;
            }
            structure.write_to(self.renderer, out, artifact.decl_name(self.names))?;
        }
        out.flush()?;
        Ok(())
    }
}
