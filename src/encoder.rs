//! Line, word and character encoding.
//!
//! Every word of a line is encoded on its own and followed by the `"| "`
//! marker. Lines are independent of each other, so they can be encoded in
//! any order and reassembled.

use rayon::prelude::*;

use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::table::SymbolTable;

/// Marker appended after every encoded word, including the last one.
pub const WORD_SEPARATOR: &str = "| ";

/// Rough upper bound of code length plus trailing space, used for buffer sizing.
const AVG_CODE_LEN: usize = 5;

pub struct Encoder {
    table: SymbolTable,
}

impl Encoder {
    pub fn new(table: SymbolTable) -> Self {
        Self { table }
    }

    /// Encode a single word.
    ///
    /// The word is uppercased first. Each recognized character contributes its
    /// code and one space; unrecognized characters are reported to `sink` and
    /// contribute nothing.
    pub fn encode_word(&self, word: &str, sink: &mut dyn DiagnosticSink) -> String {
        let mut encoded = String::with_capacity(word.len() * AVG_CODE_LEN);

        for character in word.to_uppercase().chars() {
            match self.table.get(character) {
                Some(code) => {
                    encoded.push_str(code);
                    encoded.push(' ');
                }
                None => sink.report(Diagnostic::UnrecognizedCharacter(character)),
            }
        }

        encoded
    }

    /// Encode a line of space-separated words.
    ///
    /// Consecutive and leading spaces produce empty words, which still get a
    /// marker. Trailing empty words are dropped, so a line of only spaces
    /// encodes to nothing while an empty line encodes to a single marker.
    pub fn encode_line(&self, line: &str, sink: &mut dyn DiagnosticSink) -> String {
        let mut encoded = String::with_capacity(line.len() * AVG_CODE_LEN);

        for word in split_words(line) {
            encoded.push_str(&self.encode_word(word, sink));
            encoded.push_str(WORD_SEPARATOR);
        }

        encoded
    }

    /// Encode lines into output records: each encoded line followed by an empty record.
    pub fn encode_lines<'a, I>(
        &'a self,
        lines: I,
        sink: &'a mut dyn DiagnosticSink,
    ) -> impl Iterator<Item = String> + 'a
    where
        I: IntoIterator + 'a,
        I::Item: AsRef<str>,
    {
        lines
            .into_iter()
            .flat_map(move |line| [self.encode_line(line.as_ref(), &mut *sink), String::new()])
    }

    /// Same records as [`Encoder::encode_lines`], with lines encoded on the rayon pool.
    ///
    /// Diagnostics are buffered per line and replayed into `sink` in line order.
    pub fn encode_lines_parallel<S>(
        &self,
        lines: &[S],
        sink: &mut dyn DiagnosticSink,
    ) -> Vec<String>
    where
        S: AsRef<str> + Sync,
    {
        let encoded: Vec<(String, Vec<Diagnostic>)> = lines
            .par_iter()
            .map(|line| {
                let mut diagnostics: Vec<Diagnostic> = Vec::new();
                let encoded = self.encode_line(line.as_ref(), &mut diagnostics);
                (encoded, diagnostics)
            })
            .collect();

        let mut records = Vec::with_capacity(encoded.len() * 2);
        for (line, diagnostics) in encoded {
            for diagnostic in diagnostics {
                sink.report(diagnostic);
            }
            records.push(line);
            records.push(String::new());
        }

        records
    }
}

/// Split on single spaces, dropping trailing empty words of a non-empty line.
fn split_words(line: &str) -> Vec<&str> {
    let mut words: Vec<&str> = line.split(' ').collect();
    if !line.is_empty() {
        while words.last() == Some(&"") {
            words.pop();
        }
    }
    words
}
