//! Character to Morse code lookup table.
//!
//! The definition source is a plain list of whitespace-separated
//! `<character> <code>` pairs, e.g. `A .- B -...`. There is no header,
//! no comments and no escaping.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{EncoderError, Result};

/// Default definition file name, looked up relative to the working directory.
pub const DEFAULT_TABLE_FILE: &str = "morsecode.txt";

/// Immutable mapping from a single character to its code.
///
/// Lookups are case-sensitive; callers normalize before calling [`SymbolTable::get`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
    codes: HashMap<char, String>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(character token, code)` pairs.
    ///
    /// Only the first character of each token is used. Tokens that are empty
    /// are skipped. A later pair for the same character replaces the earlier one.
    pub fn build<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut table = Self::new();
        for (token, code) in entries {
            let token = token.as_ref();
            let Some(character) = token.chars().next() else {
                continue;
            };
            if token.chars().nth(1).is_some() {
                tracing::debug!("Definition token {:?} truncated to {:?}", token, character);
            }
            table.codes.insert(character, code.into());
        }
        table
    }

    /// Parse a definition source.
    pub fn parse(source: &str) -> Self {
        let mut tokens = source.split_whitespace();
        let mut pairs = Vec::new();

        while let Some(token) = tokens.next() {
            match tokens.next() {
                Some(code) => pairs.push((token, code)),
                None => {
                    tracing::warn!("Ignoring definition {:?} without a code", token);
                }
            }
        }

        Self::build(pairs)
    }

    /// Load and parse a definition file.
    pub fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path).map_err(|source| EncoderError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::parse(&source);
        tracing::debug!("Loaded {} symbols from {}", table.len(), path.display());
        Ok(table)
    }

    /// Load a definition file, falling back to an empty table when it is unavailable.
    ///
    /// With an empty table every character is reported as unrecognized, which
    /// keeps the encode run going instead of aborting it.
    pub fn load_or_empty(path: &Path) -> Self {
        match Self::load(path) {
            Ok(table) => table,
            Err(e) => {
                tracing::error!("{}; continuing with an empty table", e);
                Self::new()
            }
        }
    }

    pub fn get(&self, character: char) -> Option<&str> {
        self.codes.get(&character).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Entries sorted by character.
    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> {
        let mut entries: Vec<_> = self
            .codes
            .iter()
            .map(|(c, code)| (*c, code.as_str()))
            .collect();
        entries.sort_by_key(|(c, _)| *c);
        entries.into_iter()
    }
}

impl FromIterator<(char, String)> for SymbolTable {
    fn from_iter<I: IntoIterator<Item = (char, String)>>(iter: I) -> Self {
        Self {
            codes: iter.into_iter().collect(),
        }
    }
}

impl Extend<(char, String)> for SymbolTable {
    fn extend<I: IntoIterator<Item = (char, String)>>(&mut self, iter: I) {
        self.codes.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_build_and_get() {
        let table = SymbolTable::build([("A", ".-"), ("B", "-...")]);

        assert_eq!(table.get('A'), Some(".-"));
        assert_eq!(table.get('B'), Some("-..."));
        assert_eq!(table.get('C'), None);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_duplicate_last_wins() {
        let table = SymbolTable::build([("A", ".-"), ("A", "-")]);

        assert_eq!(table.get('A'), Some("-"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_multi_char_token_uses_first_symbol() {
        let table = SymbolTable::build([("AB", ".-")]);

        assert_eq!(table.get('A'), Some(".-"));
        assert_eq!(table.get('B'), None);
    }

    #[test]
    fn test_no_case_normalization() {
        let table = SymbolTable::build([("A", ".-")]);

        assert_eq!(table.get('a'), None);
    }

    #[test]
    fn test_permutation_gives_same_table() {
        let pairs = [("E", "."), ("T", "-"), ("S", "..."), ("O", "---")];
        let mut reversed = pairs;
        reversed.reverse();

        assert_eq!(SymbolTable::build(pairs), SymbolTable::build(reversed));
    }

    #[test]
    fn test_parse_any_whitespace() {
        let table = SymbolTable::parse("A .-\nB -...\t C -.-.\r\n");

        assert_eq!(table.len(), 3);
        assert_eq!(table.get('C'), Some("-.-."));
    }

    #[test]
    fn test_parse_ignores_dangling_token() {
        let table = SymbolTable::parse("A .- B");

        assert_eq!(table.len(), 1);
        assert_eq!(table.get('B'), None);
    }

    #[test]
    fn test_parse_empty_source() {
        assert!(SymbolTable::parse("").is_empty());
        assert!(SymbolTable::parse("  \n\n ").is_empty());
    }

    #[test]
    fn test_iter_sorted() {
        let table = SymbolTable::parse("Z --.. A .- M --");
        let keys: Vec<char> = table.iter().map(|(c, _)| c).collect();

        assert_eq!(keys, vec!['A', 'M', 'Z']);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "S ...").unwrap();
        writeln!(file, "O ---").unwrap();

        let table = SymbolTable::load(file.path()).unwrap();

        assert_eq!(table.get('S'), Some("..."));
        assert_eq!(table.get('O'), Some("---"));
    }

    #[test]
    fn test_load_missing_file() {
        let result = SymbolTable::load(Path::new("/nonexistent/morsecode.txt"));

        assert!(matches!(result, Err(EncoderError::SourceUnavailable { .. })));
    }

    #[test]
    fn test_load_or_empty_missing_file() {
        let table = SymbolTable::load_or_empty(Path::new("/nonexistent/morsecode.txt"));

        assert!(table.is_empty());
    }

    #[test]
    fn test_from_iter_and_extend() {
        let mut table: SymbolTable = vec![('A', ".-".to_string())].into_iter().collect();
        table.extend([('A', "-".to_string()), ('B', "-...".to_string())]);

        assert_eq!(table.get('A'), Some("-"));
        assert_eq!(table.len(), 2);
    }
}
