//! FASTA parsing with molecular type inference.
//!
//! # Format
//!
//! ```text
//! >sequence1 description
//! GATTACAGATTACA
//! tgcatgca
//! >sequence2
//! MKVLAAGIW
//! ```
//!
//! Every line is stripped of surrounding whitespace. A line starting with `>`
//! opens a record, and any other non-blank line is upper-cased and appended to
//! the most recent record. Records are classified once the whole input has
//! been consumed.

use crate::error::{FastaError, Result};
use crate::models::SequenceRecord;
use indexmap::IndexMap;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};

/// How records sharing the same header are stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicateHeaders {
    /// Records are keyed by header: a repeated header resets the earlier
    /// record's sequence, which keeps its original position.
    #[default]
    Overwrite,
    /// Every header line yields its own record, in file order.
    Keep,
}

impl fmt::Display for DuplicateHeaders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DuplicateHeaders::Overwrite => f.write_str("overwrite"),
            DuplicateHeaders::Keep => f.write_str("keep"),
        }
    }
}

/// Parser bound to a single FASTA file on disk.
#[derive(Debug, Clone)]
pub struct FastaParser {
    path: PathBuf,
    duplicates: DuplicateHeaders,
}

impl FastaParser {
    /// Validates that `path` is an existing regular file.
    ///
    /// The file is not opened until [`FastaParser::parse`] is called.
    ///
    /// # Errors
    /// Returns [`FastaError::FileNotFound`] if the path is missing or is not a
    /// regular file.
    ///
    /// # Example
    /// ```no_run
    /// use fastatype::io::FastaParser;
    ///
    /// let parser = FastaParser::load("sequences.fasta")?;
    /// for record in parser.parse()? {
    ///     println!("{}\t{}", record.header, record.sequence_type);
    /// }
    /// # Ok::<(), fastatype::error::FastaError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(FastaError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        debug!(path = %path.display(), "loaded FASTA file");
        Ok(Self {
            path: path.to_path_buf(),
            duplicates: DuplicateHeaders::default(),
        })
    }

    /// Sets the policy applied to repeated headers.
    pub fn with_duplicates(mut self, duplicates: DuplicateHeaders) -> Self {
        self.duplicates = duplicates;
        self
    }

    /// Path validated by [`FastaParser::load`].
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Policy applied to repeated headers.
    pub fn duplicates(&self) -> DuplicateHeaders {
        self.duplicates
    }

    /// Reads the whole file and returns its classified records in file order.
    ///
    /// # Errors
    /// - [`FastaError::InvalidFormat`] if sequence data appears before the first header
    /// - [`FastaError::Io`] if the file cannot be opened or read, or is not valid UTF-8
    pub fn parse(&self) -> Result<Vec<SequenceRecord>> {
        let file = File::open(&self.path)?;
        let records = self.parse_reader(BufReader::new(file))?;

        debug!(
            path = %self.path.display(),
            records = records.len(),
            "parsed FASTA file"
        );
        Ok(records)
    }

    /// Parses FASTA content from any buffered reader using this parser's policy.
    pub fn parse_reader<R: BufRead>(&self, reader: R) -> Result<Vec<SequenceRecord>> {
        parse_records(reader, self.duplicates)
    }
}

impl fmt::Display for FastaParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FastaParser(path={}, duplicates={})",
            self.path.display(),
            self.duplicates
        )
    }
}

/// Parses FASTA content from a buffered reader.
///
/// This is the algorithm behind [`FastaParser::parse`], exposed for in-memory
/// sources.
pub fn parse_records<R: BufRead>(
    mut reader: R,
    duplicates: DuplicateHeaders,
) -> Result<Vec<SequenceRecord>> {
    let mut collector = Collector::new(duplicates);
    let mut current: Option<usize> = None;
    let mut buffer = String::with_capacity(256);
    let mut line_number = 0;

    loop {
        buffer.clear();
        if reader.read_line(&mut buffer)? == 0 {
            break;
        }

        // A lone `\r` also ends a line; `\r\n` is a single break
        let text = buffer.strip_suffix('\n').unwrap_or(&buffer);
        let text = text.strip_suffix('\r').unwrap_or(text);

        for line in text.split('\r') {
            line_number += 1;

            let line = line.trim();
            if let Some(header) = line.strip_prefix('>') {
                current = Some(collector.open(header, line_number));
            } else if !line.is_empty() {
                let Some(index) = current else {
                    return Err(FastaError::InvalidFormat {
                        line: line_number,
                        msg: "sequence data before first header".to_string(),
                    });
                };
                collector.append(index, &line.to_uppercase());
            }
        }
    }

    Ok(collector.finish())
}

/// Accumulates raw sequences per header until end of input.
enum Collector {
    Keyed(IndexMap<String, String>),
    Ordered(Vec<(String, String)>),
}

impl Collector {
    fn new(duplicates: DuplicateHeaders) -> Self {
        match duplicates {
            DuplicateHeaders::Overwrite => Collector::Keyed(IndexMap::new()),
            DuplicateHeaders::Keep => Collector::Ordered(Vec::new()),
        }
    }

    /// Opens a record and returns the slot that subsequent lines append to.
    fn open(&mut self, header: &str, line: usize) -> usize {
        trace!(header, line, "opening record");
        match self {
            Collector::Keyed(map) => {
                let (index, previous) = map.insert_full(header.to_string(), String::new());
                if previous.is_some() {
                    warn!(header, line, "duplicate header overwrites earlier record");
                }
                index
            }
            Collector::Ordered(entries) => {
                entries.push((header.to_string(), String::new()));
                entries.len() - 1
            }
        }
    }

    fn append(&mut self, index: usize, data: &str) {
        match self {
            Collector::Keyed(map) => map[index].push_str(data),
            Collector::Ordered(entries) => entries[index].1.push_str(data),
        }
    }

    fn finish(self) -> Vec<SequenceRecord> {
        match self {
            Collector::Keyed(map) => map
                .into_iter()
                .map(|(header, sequence)| SequenceRecord::new(header, sequence))
                .collect(),
            Collector::Ordered(entries) => entries
                .into_iter()
                .map(|(header, sequence)| SequenceRecord::new(header, sequence))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SequenceType;
    use std::io::Cursor;

    fn parse(input: &str) -> Result<Vec<SequenceRecord>> {
        parse_records(Cursor::new(input), DuplicateHeaders::Overwrite)
    }

    #[test]
    fn test_parse_multiline_records() {
        let records = parse(">seq1 first\nacgt\n  GGCC  \n>seq2\nMKVL\nAAGIW\n").unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].header, "seq1 first");
        assert_eq!(records[0].sequence, "ACGTGGCC");
        assert_eq!(records[0].sequence_type, SequenceType::Dna);
        assert_eq!(records[1].header, "seq2");
        assert_eq!(records[1].sequence, "MKVLAAGIW");
        assert_eq!(records[1].sequence_type, SequenceType::Protein);
    }

    #[test]
    fn test_header_trailing_whitespace_stripped() {
        let records = parse(">seq1   \t\r\nACGU\r\n").unwrap();
        assert_eq!(records[0].header, "seq1");
        assert_eq!(records[0].sequence_type, SequenceType::Rna);
    }

    #[test]
    fn test_header_without_sequence_is_empty() {
        let records = parse(">empty\n>full\nACGT\n").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].sequence, "");
        assert_eq!(records[0].sequence_type, SequenceType::Dna);
        assert_eq!(records[1].sequence, "ACGT");
    }

    #[test]
    fn test_sequence_before_header_is_invalid() {
        let result = parse("ACGT\n>seq1\nACGT\n");
        match result {
            Err(FastaError::InvalidFormat { line, .. }) => assert_eq!(line, 1),
            other => panic!("Expected InvalidFormat, got {:?}", other),
        }
    }

    #[test]
    fn test_leading_blank_lines_are_skipped() {
        let records = parse("\n   \n>seq1\n\nACGT\n\n").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].sequence, "ACGT");
    }

    #[test]
    fn test_invalid_format_reports_line_after_blanks() {
        let result = parse("\n\nNNNN\n");
        assert!(matches!(
            result,
            Err(FastaError::InvalidFormat { line: 3, .. })
        ));
    }

    #[test]
    fn test_carriage_return_line_endings() {
        let records = parse(">A\rACGT\r>B\rGGGG\r").unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].header, "A");
        assert_eq!(records[0].sequence, "ACGT");
        assert_eq!(records[1].header, "B");
        assert_eq!(records[1].sequence, "GGGG");
    }

    #[test]
    fn test_mixed_line_endings_keep_line_numbers() {
        let records = parse(">A\r\nAC\rGT\n>B\nUU\r\n").unwrap();
        assert_eq!(records[0].sequence, "ACGT");
        assert_eq!(records[1].sequence, "UU");

        let result = parse("\r\n\rACGT\r>A\r");
        assert!(matches!(
            result,
            Err(FastaError::InvalidFormat { line: 3, .. })
        ));
    }

    #[test]
    fn test_empty_input() {
        assert!(parse("").unwrap().is_empty());
    }

    #[test]
    fn test_duplicate_headers_overwrite() {
        let records = parse(">A\nACGT\n>B\nUUUU\n>A\nGGGG\n").unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].header, "A");
        assert_eq!(records[0].sequence, "GGGG");
        assert_eq!(records[1].header, "B");
    }

    #[test]
    fn test_duplicate_header_without_sequence_resets() {
        let records = parse(">A\nACGT\n>A\n").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].sequence, "");
    }

    #[test]
    fn test_duplicate_headers_keep() {
        let records =
            parse_records(Cursor::new(">A\nACGT\n>A\nGGGG\n"), DuplicateHeaders::Keep).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].sequence, "ACGT");
        assert_eq!(records[1].sequence, "GGGG");
    }

    #[test]
    fn test_unknown_after_uppercasing() {
        let records = parse(">x\nacgtx\n").unwrap();
        assert_eq!(records[0].sequence, "ACGTX");
        assert_eq!(records[0].sequence_type, SequenceType::Unknown);
    }

    #[test]
    fn test_invalid_utf8_is_io_error() {
        let input: &[u8] = b">seq1\nAC\xffGT\n";
        let result = parse_records(input, DuplicateHeaders::Overwrite);
        assert!(matches!(result, Err(FastaError::Io(_))));
    }

    #[test]
    fn test_parser_display() {
        let parser = FastaParser {
            path: PathBuf::from("reads.fasta"),
            duplicates: DuplicateHeaders::Keep,
        };
        assert_eq!(
            parser.to_string(),
            "FastaParser(path=reads.fasta, duplicates=keep)"
        );
    }
}
