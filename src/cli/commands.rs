use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::error::{EncoderError, Result};
use morse_encoder::{
    encode_file, ConsoleSink, EncodeReport, Encoder, SymbolTable, DEFAULT_TABLE_FILE,
};

#[derive(Parser)]
#[command(name = "morse-encoder")]
#[command(about = "Encode plain-text files into Morse code")]
#[command(version)]
#[command(after_long_help = r#"
EXAMPLES:
    # Encode, asking for the file names
    morse-encoder encode

    # Encode given files
    morse-encoder encode --input letter.txt --output letter.morse

    # Use another definition file and print a JSON summary
    morse-encoder --table itu.txt encode -i in.txt -o out.txt --format json

    # List the loaded table
    morse-encoder table
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the character definition file
    #[arg(long, global = true, default_value = DEFAULT_TABLE_FILE)]
    pub table: PathBuf,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Encode a text file into Morse code
    Encode {
        /// Input text file (asked for interactively when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file (asked for interactively when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Encode lines on all cores
        #[arg(long)]
        parallel: bool,

        /// Summary format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// List the entries of the definition file
    Table {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}

/// Answers prompts from a whitespace-delimited token stream.
///
/// A reply line may hold several tokens; the extra ones answer the following
/// prompts without reading again. Blank lines are skipped.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            pending: VecDeque::new(),
        }
    }

    /// Ask `question` and return the next token.
    pub fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.writer, "{}: ", question)?;
        self.writer.flush()?;

        let mut line = String::new();
        while self.pending.is_empty() {
            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(EncoderError::Prompt(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "no file name given",
                )));
            }
            self.pending.extend(line.split_whitespace().map(str::to_string));
        }

        Ok(self.pending.pop_front().unwrap_or_default())
    }

    pub fn path_or_ask(&mut self, path: Option<PathBuf>, question: &str) -> Result<PathBuf> {
        match path {
            Some(path) => Ok(path),
            None => self.ask(question).map(PathBuf::from),
        }
    }
}

pub fn encode(
    table_path: &Path,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    parallel: bool,
    format: &str,
) -> Result<()> {
    let encoder = Encoder::new(SymbolTable::load_or_empty(table_path));

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    let input = prompter.path_or_ask(input, "Enter an input file name")?;
    let output = prompter.path_or_ask(output, "Enter an output file name")?;

    let mut sink = ConsoleSink::new();
    let report = encode_file(&encoder, &input, &output, &mut sink, parallel)?;
    print_report(&report, format);

    Ok(())
}

fn print_report(report: &EncodeReport, format: &str) {
    if format == "json" {
        match serde_json::to_string_pretty(report) {
            Ok(json) => println!("{}", json),
            Err(e) => tracing::error!("Failed to serialize report: {}", e),
        }
        return;
    }

    println!("Encoded {} -> {}", report.input.display(), report.output.display());
    println!("  Lines read:         {}", report.lines_read);
    println!("  Records written:    {}", report.records_written);
    println!("  Skipped characters: {}", report.skipped_characters);
}

#[derive(Serialize)]
struct TableEntry<'a> {
    character: char,
    code: &'a str,
}

pub fn show_table(table_path: &Path, format: &str) -> Result<()> {
    let table = SymbolTable::load_or_empty(table_path);

    if format == "json" {
        let entries: Vec<TableEntry> = table
            .iter()
            .map(|(character, code)| TableEntry { character, code })
            .collect();
        match serde_json::to_string_pretty(&entries) {
            Ok(json) => println!("{}", json),
            Err(e) => tracing::error!("Failed to serialize table: {}", e),
        }
        return Ok(());
    }

    println!("{} ({} symbols)", table_path.display(), table.len());
    for (character, code) in table.iter() {
        println!("  {} {}", character, code);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_ask_writes_question() {
        let mut writer = Vec::new();
        let mut prompter = Prompter::new(Cursor::new("input.txt\n"), &mut writer);

        let answer = prompter.ask("Enter an input file name").unwrap();

        assert_eq!(answer, "input.txt");
        drop(prompter);
        assert_eq!(String::from_utf8(writer).unwrap(), "Enter an input file name: ");
    }

    #[test]
    fn test_ask_one_line_answers_both_prompts() {
        let mut prompter = Prompter::new(Cursor::new("in.txt out.txt\n"), Vec::new());

        assert_eq!(prompter.ask("Enter an input file name").unwrap(), "in.txt");
        assert_eq!(prompter.ask("Enter an output file name").unwrap(), "out.txt");
    }

    #[test]
    fn test_ask_skips_blank_lines() {
        let mut prompter = Prompter::new(Cursor::new("\n   \nout.txt\n"), Vec::new());

        assert_eq!(prompter.ask("Enter an output file name").unwrap(), "out.txt");
    }

    #[test]
    fn test_ask_eof() {
        let mut prompter = Prompter::new(Cursor::new(""), Vec::new());

        let result = prompter.ask("Enter an input file name");

        assert!(matches!(result, Err(EncoderError::Prompt(_))));
    }

    #[test]
    fn test_path_or_ask_prefers_given_path() {
        let mut prompter = Prompter::new(Cursor::new(""), Vec::new());

        let path = prompter
            .path_or_ask(Some(PathBuf::from("given.txt")), "Enter an input file name")
            .unwrap();

        assert_eq!(path, PathBuf::from("given.txt"));
    }

    #[test]
    fn test_cli_parses_encode() {
        let cli = Cli::parse_from([
            "morse-encoder",
            "encode",
            "-i",
            "in.txt",
            "-o",
            "out.txt",
            "--parallel",
        ]);

        assert_eq!(cli.table, PathBuf::from(DEFAULT_TABLE_FILE));
        match cli.command {
            Commands::Encode {
                input,
                output,
                parallel,
                format,
            } => {
                assert_eq!(input, Some(PathBuf::from("in.txt")));
                assert_eq!(output, Some(PathBuf::from("out.txt")));
                assert!(parallel);
                assert_eq!(format, "text");
            }
            Commands::Table { .. } => panic!("expected encode"),
        }
    }

    #[test]
    fn test_cli_global_table_after_subcommand() {
        let cli = Cli::parse_from(["morse-encoder", "table", "--table", "itu.txt"]);

        assert_eq!(cli.table, PathBuf::from("itu.txt"));
    }
}
