//! Go source rendering
//!
//! Turns built tables, maps and word lists into Go `var` declarations.
//! Rendering never decides *what* goes in a structure, only how it is
//! spelled, so everything here writes to a caller-supplied `io::Write`.

use crate::letters::ALPHABET_LEN;
use crate::map::CodeMap;
use crate::table::LookupTable;
use crate::Result;
use std::io::Write;

/// Writes Go declarations with a fixed indent unit
#[derive(Debug, Clone)]
pub struct Renderer {
    indent: String,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new("    ")
    }
}

/// Quote a string as a Go interpreted string literal
///
/// JSON string escaping is a subset of Go's, so a serde_json string is
/// always valid Go.
pub fn quote(s: &str) -> Result<String> {
    Ok(serde_json::to_string(s)?)
}

fn quote_row(row: &[String]) -> Result<String> {
    let quoted = row.iter().map(|s| quote(s)).collect::<Result<Vec<_>>>()?;
    Ok(quoted.join(", "))
}

impl Renderer {
    pub fn new(indent: impl Into<String>) -> Self {
        Self {
            indent: indent.into(),
        }
    }

    fn pad(&self, level: usize) -> String {
        self.indent.repeat(level)
    }

    /// Write the `package` clause and generated-code marker
    pub fn write_file_header<W: Write>(&self, out: &mut W, package: &str) -> Result<()> {
        writeln!(
            out,
            "// Code generated by {} {}. DO NOT EDIT.",
            crate::APP_NAME,
            crate::VERSION
        )?;
        writeln!(out)?;
        writeln!(out, "package {}", package)?;
        writeln!(out)?;
        Ok(())
    }

    /// Write a lookup table as a nested `[][]...string` literal
    ///
    /// Innermost rows (26 cells) go on one line each. Every enclosing axis
    /// opens and closes its own brace pair on separate lines.
    pub fn write_table<W: Write, const N: usize>(
        &self,
        out: &mut W,
        name: &str,
        table: &LookupTable<N>,
    ) -> Result<()> {
        writeln!(
            out,
            "var {} = {}string{{",
            name,
            "[]".repeat(table.code_len())
        )?;
        let block = LookupTable::<N>::CELLS / ALPHABET_LEN;
        for chunk in table.cells().chunks(block) {
            self.write_nested(out, chunk, 1)?;
        }
        writeln!(out, "}}")?;
        Ok(())
    }

    fn write_nested<W: Write>(&self, out: &mut W, cells: &[String], level: usize) -> Result<()> {
        let pad = self.pad(level);
        if cells.len() == ALPHABET_LEN {
            writeln!(out, "{}{{{}}},", pad, quote_row(cells)?)?;
            return Ok(());
        }

        writeln!(out, "{}{{", pad)?;
        for chunk in cells.chunks(cells.len() / ALPHABET_LEN) {
            self.write_nested(out, chunk, level + 1)?;
        }
        writeln!(out, "{}}},", pad)?;
        Ok(())
    }

    /// Write a code map as a `map[string]string` literal, one pair per line
    pub fn write_map<W: Write>(&self, out: &mut W, name: &str, map: &CodeMap) -> Result<()> {
        let pad = self.pad(1);
        writeln!(out, "var {} = map[string]string{{", name)?;
        for (code, country) in map.iter() {
            writeln!(out, "{}{}: {},", pad, quote(code)?, quote(country)?)?;
        }
        writeln!(out, "}}")?;
        Ok(())
    }

    /// Write a word list as a `[]string` literal, 26 words per line
    pub fn write_words<W: Write>(&self, out: &mut W, name: &str, words: &[String]) -> Result<()> {
        let pad = self.pad(1);
        writeln!(out, "var {} = []string{{", name)?;
        for line in words.chunks(ALPHABET_LEN) {
            writeln!(out, "{}{},", pad, quote_row(line)?)?;
        }
        writeln!(out, "}}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combos::{enumerate_pairs, enumerate_triples};
    use crate::table::{Alpha2Table, Alpha3Table};

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&Renderer, &mut Vec<u8>) -> Result<()>,
    {
        let mut buf = Vec::new();
        f(&Renderer::default(), &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_quote_escapes() {
        assert_eq!(quote("Testland").unwrap(), "\"Testland\"");
        assert_eq!(quote("Côte d'Ivoire").unwrap(), "\"Côte d'Ivoire\"");
        assert_eq!(quote(r#"The "Best" \ Land"#).unwrap(), r#""The \"Best\" \\ Land""#);
    }

    #[test]
    fn test_alpha2_table_layout() {
        let mut table = Alpha2Table::new();
        table.insert("TL", "Testland").unwrap();
        let text = render(|r, out| r.write_table(out, "iso2table", &table));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 28);
        assert_eq!(lines[0], "var iso2table = [][]string{");
        assert_eq!(lines[27], "}");

        let empty_row = format!("    {{{}}},", vec!["\"\""; 26].join(", "));
        assert_eq!(lines[1], empty_row);

        // Row for 'T', Testland in column 'L'
        let mut cells = vec!["\"\""; 26];
        cells[11] = "\"Testland\"";
        assert_eq!(lines[20], format!("    {{{}}},", cells.join(", ")));
    }

    #[test]
    fn test_alpha3_table_layout() {
        let table = Alpha3Table::new();
        let text = render(|r, out| r.write_table(out, "iso3table", &table));
        let lines: Vec<&str> = text.lines().collect();

        // Header, 26 planes of (open + 26 rows + close), footer
        assert_eq!(lines.len(), 2 + 26 * 28);
        assert_eq!(lines[0], "var iso3table = [][][]string{");
        assert_eq!(lines[1], "    {");
        assert!(lines[2].starts_with("        {\"\", "));
        assert_eq!(lines[28], "    },");
        assert_eq!(lines[lines.len() - 1], "}");
    }

    #[test]
    fn test_map_layout() {
        let mut map = CodeMap::new();
        map.insert("TL", "Testland");
        map.insert("AX", "Åland Islands");
        let text = render(|r, out| r.write_map(out, "iso2map", &map));
        assert_eq!(
            text,
            "var iso2map = map[string]string{\n    \"TL\": \"Testland\",\n    \"AX\": \"Åland Islands\",\n}\n"
        );
    }

    #[test]
    fn test_empty_map() {
        let text = render(|r, out| r.write_map(out, "iso2map", &CodeMap::new()));
        assert_eq!(text, "var iso2map = map[string]string{\n}\n");
    }

    #[test]
    fn test_words_layout() {
        let text = render(|r, out| r.write_words(out, "char2words", &enumerate_pairs()));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 28);
        assert_eq!(lines[0], "var char2words = []string{");
        assert!(lines[1].starts_with("    \"AA\", \"AB\", "));
        assert!(lines[1].ends_with("\"AZ\","));
        assert!(lines[26].ends_with("\"ZZ\","));

        let text = render(|r, out| r.write_words(out, "char3words", &enumerate_triples()));
        assert_eq!(text.lines().count(), 676 + 2);
    }

    #[test]
    fn test_custom_indent_and_header() {
        let renderer = Renderer::new("\t");
        let mut buf = Vec::new();
        renderer.write_file_header(&mut buf, "country").unwrap();
        renderer
            .write_words(&mut buf, "w", &["AA".to_string()])
            .unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.starts_with("// Code generated by countrygen "));
        assert!(text.contains("DO NOT EDIT."));
        assert!(text.contains("\npackage country\n"));
        assert!(text.ends_with("var w = []string{\n\t\"AA\",\n}\n"));
    }
}
