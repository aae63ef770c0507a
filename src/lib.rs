pub mod diagnostics;
pub mod encoder;
pub mod error;
pub mod files;
pub mod table;

pub use diagnostics::{ConsoleSink, Diagnostic, DiagnosticSink};
pub use encoder::{Encoder, WORD_SEPARATOR};
pub use error::{EncoderError, Result};
pub use files::{encode_file, read_lines, write_records, EncodeReport};
pub use table::{SymbolTable, DEFAULT_TABLE_FILE};
